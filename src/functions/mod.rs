pub mod timeline;
pub use timeline::*;

pub mod cost_basis;
pub use cost_basis::*;

pub mod average_rate;
pub use average_rate::*;
