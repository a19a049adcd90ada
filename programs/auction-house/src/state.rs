use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use spl_math::uint::U256;

use crate::utils::{AuctionParams, Authority, Authorizations, SystemCoinParams};

/// One collateral auction house, selling a single collateral type.
///
/// The auction house is the custodian of the collateral on auction: `address` is the account
/// the collateral is moved to when an auction starts and moved out of on every purchase.
#[derive(Debug, Clone)]
pub struct AuctionHouse<A: Authority = Authorizations> {
    /// Account holding the collateral in custody.
    pub address: Pubkey,

    /// Collateral type sold by this house.
    pub collateral_type: Pubkey,

    pub authority: A,

    pub params: AuctionParams,

    pub system_coin_params: SystemCoinParams,

    /// D27, the last redemption price read from the oracle relayer, 0 until the first read.
    pub last_read_redemption_price: u128,

    pub auctions: AuctionStore,
}

/// An active auction.
///
/// The record only exists while both `amount_to_sell` and `amount_to_raise` are non zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Auction {
    /// D18{collateral} left to sell
    pub amount_to_sell: u128,

    /// D45{system coin} left to raise
    pub amount_to_raise: U256,

    /// D27
    pub current_discount: u128,

    /// D27, copied from the params when the auction starts
    pub max_discount: u128,

    /// D27, copied from the params when the auction starts
    pub per_second_discount_update_rate: u128,

    /// Seconds
    pub latest_discount_update_time: u64,

    /// Receives the collateral left once the auction raised everything it needed.
    pub forgone_collateral_receiver: Pubkey,

    /// Receives the system coins paid by bidders.
    pub auction_income_recipient: Pubkey,
}

/// The active auctions, by id.
///
/// Ids are handed out sequentially starting at 1 and are never handed out twice, removing a
/// record doesn't decrease `auctions_started`.
#[derive(Debug, Clone, Default)]
pub struct AuctionStore {
    pub auctions_started: u64,

    pub(crate) records: BTreeMap<u64, Auction>,
}
