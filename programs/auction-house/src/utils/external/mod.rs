//! Interfaces of the systems the auction house talks to. The auction house never owns them,
//! they're handed to every instruction that needs them.
pub mod authority;
pub mod liquidation_engine;
pub mod oracle;
pub mod safe_engine;

pub use authority::*;
pub use liquidation_engine::*;
pub use oracle::*;
pub use safe_engine::*;
