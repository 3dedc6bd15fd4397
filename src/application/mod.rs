// Application layer - the boundary between the ledger and its front ends.
// Front ends hand over raw text, render a WalletView, and never touch the
// ledger's state directly.

pub mod error;
pub mod service;
pub mod view;

pub use error::*;
pub use service::*;
pub use view::*;
