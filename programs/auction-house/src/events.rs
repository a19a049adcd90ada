use anchor_lang::prelude::*;
use shared::structs::U256Value;

/// Event emitted when an auction is started.
///
/// # Arguments
/// * `id` - The id of the auction.
/// * `auctions_started` - The total number of auctions started, including this one.
/// * `amount_to_sell` - The collateral put on auction, scaled in D18.
/// * `amount_to_raise` - The system coins to raise, scaled in D45.
/// * `initial_discount` - The discount the auction starts at, scaled in D27.
/// * `max_discount` - The discount the auction decays towards, scaled in D27.
/// * `per_second_discount_update_rate` - The decay rate, scaled in D27.
/// * `forgone_collateral_receiver` - Receives the collateral left at settlement.
/// * `auction_income_recipient` - Receives the system coins paid by bidders.
#[event]
pub struct AuctionStarted {
    pub id: u64,
    pub auctions_started: u64,

    /// Scaled in D18
    pub amount_to_sell: u128,

    /// Scaled in D45
    pub amount_to_raise: U256Value,

    /// Scaled in D27
    pub initial_discount: u128,

    /// Scaled in D27
    pub max_discount: u128,

    /// Scaled in D27
    pub per_second_discount_update_rate: u128,

    pub forgone_collateral_receiver: Pubkey,
    pub auction_income_recipient: Pubkey,
}

/// Event emitted when collateral is bought.
///
/// # Arguments
/// * `id` - The id of the auction.
/// * `bidder` - The account paying the system coins.
/// * `raised_amount` - The (adjusted) bid paid, scaled in D18.
/// * `sold_amount` - The collateral bought, scaled in D18.
#[event]
pub struct CollateralBought {
    pub id: u64,
    pub bidder: Pubkey,

    /// Scaled in D18
    pub raised_amount: u128,

    /// Scaled in D18
    pub sold_amount: u128,
}

/// Event emitted when an auction is settled, either because it raised everything or because
/// it ran out of collateral.
///
/// # Arguments
/// * `id` - The id of the auction.
/// * `leftover_receiver` - The forgone collateral receiver.
/// * `leftover_collateral` - The collateral sent back, scaled in D18.
#[event]
pub struct AuctionSettled {
    pub id: u64,
    pub leftover_receiver: Pubkey,

    /// Scaled in D18
    pub leftover_collateral: u128,
}

/// Event emitted when an auction is terminated before it's settled.
///
/// # Arguments
/// * `id` - The id of the auction.
/// * `leftover_receiver` - The authorized caller, receives the collateral.
/// * `leftover_collateral` - The collateral sent back, scaled in D18.
#[event]
pub struct AuctionTerminatedPrematurely {
    pub id: u64,
    pub leftover_receiver: Pubkey,

    /// Scaled in D18
    pub leftover_collateral: u128,
}

#[event]
pub struct AuthorizationAdded {
    pub account: Pubkey,
}

#[event]
pub struct AuthorizationRemoved {
    pub account: Pubkey,
}

/// Event emitted when a parameter is modified.
///
/// # Arguments
/// * `parameter` - The name of the parameter.
/// * `value` - The new value, in the scale of the parameter.
#[event]
pub struct ParametersModified {
    pub parameter: String,
    pub value: u128,
}
