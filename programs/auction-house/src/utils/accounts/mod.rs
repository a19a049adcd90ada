pub mod auction;
pub mod auction_house;
pub mod auction_store;

pub use auction::*;
pub use auction_house::*;
