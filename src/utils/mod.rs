pub mod coerce;
pub use coerce::*;
