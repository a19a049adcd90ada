pub mod authorization;
pub mod buy_collateral;
pub mod get_collateral_bought;
pub mod modify_parameters;
pub mod start_auction;
pub mod terminate_auction_prematurely;

pub use authorization::UpdateAuthorization;
pub use buy_collateral::BuyCollateral;
pub use get_collateral_bought::GetCollateralBought;
pub use modify_parameters::ModifyParameters;
pub use start_auction::StartAuction;
pub use terminate_auction_prematurely::TerminateAuctionPrematurely;
