pub mod snapshot;
pub use snapshot::*;

pub mod csv_store;
pub use csv_store::*;

pub mod memory_store;
pub use memory_store::*;
