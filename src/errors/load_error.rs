use std::fmt;

/* A log snapshot could not be turned into events: a required column is
missing, or the store itself failed underneath the loader. */
#[derive(Debug, Clone)]
pub struct LoadError {
    error: String,
}

impl LoadError {
    pub fn new(error: String) -> Self {
        return LoadError { error };
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}
