use std::fmt;

/* One or more of the three logs could not be read at all. */
#[derive(Debug, Clone)]
pub struct StoreError {
    error: String,
}

impl StoreError {
    pub fn new(error: String) -> Self {
        return StoreError { error };
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}
