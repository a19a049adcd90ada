//! Structs for the auction house. Often used within the auction house state.
pub mod auction_params;
pub mod auction_status;
pub mod bid_receipt;
pub mod parameter_update;
pub mod system_coin_params;

pub use auction_params::*;
pub use auction_status::*;
pub use bid_receipt::*;
pub use parameter_update::*;
pub use system_coin_params::*;
