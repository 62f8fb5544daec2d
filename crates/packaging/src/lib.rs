mod catalog;
mod entry;
mod ledger;

pub use catalog::*;
pub use entry::*;
pub use ledger::*;
