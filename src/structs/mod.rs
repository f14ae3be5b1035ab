pub mod event;
pub use event::*;

pub mod ledger;
pub use ledger::*;

pub mod config;
pub use config::*;
