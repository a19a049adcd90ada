use anchor_lang::prelude::*;
use spl_math::uint::U256;

use crate::events::AuctionStarted;
use crate::state::{Auction, AuctionHouse};
use crate::utils::{Authority, SafeEngine};

/// Start a new auction.
/// Authorized accounts only, usually the liquidation engine.
///
/// # Arguments
/// * `caller` - The account starting the auction, owns the collateral put on auction.
/// * `current_time` - The current time (seconds).
/// * `safe_engine` - The ledger moving the collateral into custody.
pub struct StartAuction<'a> {
    pub caller: Pubkey,
    pub current_time: u64,
    pub safe_engine: &'a mut dyn SafeEngine,
}

impl StartAuction<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Caller is authorized.
    pub fn validate<A: Authority>(&self, auction_house: &AuctionHouse<A>) -> Result<()> {
        auction_house.validate_authorized(&self.caller)
    }
}

/// Start an auction selling `amount_to_sell` collateral to raise `amount_to_raise` system coins.
/// The collateral is moved from the caller into the custody of the auction house.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `auction_house` - The auction house.
/// * `forgone_collateral_receiver` - Receives the collateral left at settlement.
/// * `auction_income_recipient` - Receives the system coins paid by bidders.
/// * `amount_to_raise` - The system coins to raise (D45).
/// * `amount_to_sell` - The collateral to sell (D18).
///
/// # Returns
/// * `u64` - The id of the new auction.
pub fn handler<A: Authority>(
    ctx: StartAuction,
    auction_house: &mut AuctionHouse<A>,
    forgone_collateral_receiver: Pubkey,
    auction_income_recipient: Pubkey,
    amount_to_raise: U256,
    amount_to_sell: u128,
) -> Result<u64> {
    ctx.validate(auction_house)?;

    let auction = Auction::new(
        forgone_collateral_receiver,
        auction_income_recipient,
        amount_to_raise,
        amount_to_sell,
        &auction_house.params,
        ctx.current_time,
    )?;

    // Reserve the id first, so an exhausted counter fails before any collateral moves
    auction_house.auctions.next_id()?;

    ctx.safe_engine.transfer_collateral(
        &auction_house.collateral_type,
        &ctx.caller,
        &auction_house.address,
        amount_to_sell,
    )?;

    let id = auction_house.auctions.start(auction)?;

    emit!(AuctionStarted {
        id,
        auctions_started: auction_house.auctions.auctions_started,
        amount_to_sell,
        amount_to_raise: amount_to_raise.into(),
        initial_discount: auction.current_discount,
        max_discount: auction.max_discount,
        per_second_discount_update_rate: auction.per_second_discount_update_rate,
        forgone_collateral_receiver,
        auction_income_recipient,
    });

    Ok(id)
}
