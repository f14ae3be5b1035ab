pub mod store_error;
pub use store_error::*;

pub mod load_error;
pub use load_error::*;
