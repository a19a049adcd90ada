use crate::utils::AuctionStatus;

/// Outcome of a successful `buy_collateral`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BidReceipt {
    /// D18{system coin}, the bid once capped to what's left to raise
    pub adjusted_bid: u128,

    /// D18{collateral}
    pub bought_collateral: u128,

    /// D18{collateral}, sent to the forgone collateral receiver if the auction settled
    pub leftover_collateral: u128,

    pub status: AuctionStatus,
}
