mod account;
mod client;
mod money;
mod transaction;

pub use account::*;
pub use client::*;
pub use money::*;
pub use transaction::*;
