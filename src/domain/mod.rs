mod clock;
mod history;
mod ledger;
mod money;
mod transaction;

pub use clock::*;
pub use history::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
