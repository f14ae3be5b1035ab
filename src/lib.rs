pub mod errors;
pub mod functions;
pub mod parsing;
pub mod store;
pub mod structs;
pub mod utils;

#[cfg(test)]
mod tests;
