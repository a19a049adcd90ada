use anchor_lang::prelude::*;

use crate::events::AuctionTerminatedPrematurely;
use crate::state::{Auction, AuctionHouse};
use crate::utils::{Authority, LiquidationEngine, SafeEngine};

/// Terminate an auction before it's settled.
/// Authorized accounts only.
///
/// # Arguments
/// * `caller` - The authorized account, receives the collateral left.
/// * `safe_engine` - The ledger moving the collateral out of custody.
/// * `liquidation_engine` - Tracks the system coins currently on auction.
pub struct TerminateAuctionPrematurely<'a> {
    pub caller: Pubkey,
    pub safe_engine: &'a mut dyn SafeEngine,
    pub liquidation_engine: &'a mut dyn LiquidationEngine,
}

impl TerminateAuctionPrematurely<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Caller is authorized.
    /// * Auction exists.
    pub fn validate<A: Authority>(
        &self,
        auction_house: &AuctionHouse<A>,
        auction_id: u64,
    ) -> Result<Auction> {
        auction_house.validate_authorized(&self.caller)?;

        Ok(*auction_house.auctions.get_active(auction_id)?)
    }
}

/// Terminate an auction: what's left to raise is released from the liquidation engine and the
/// collateral left is sent to the caller.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `auction_house` - The auction house.
/// * `auction_id` - The id of the auction.
///
/// # Returns
/// * `u128` - The collateral sent to the caller (D18).
pub fn handler<A: Authority>(
    ctx: TerminateAuctionPrematurely,
    auction_house: &mut AuctionHouse<A>,
    auction_id: u64,
) -> Result<u128> {
    let auction = ctx.validate(auction_house, auction_id)?;

    ctx.safe_engine.transfer_collateral(
        &auction_house.collateral_type,
        &auction_house.address,
        &ctx.caller,
        auction.amount_to_sell,
    )?;

    ctx.liquidation_engine
        .remove_coins_from_auction(auction.amount_to_raise)?;

    auction_house.auctions.remove(auction_id)?;

    msg!("Auction {} terminated", auction_id);

    emit!(AuctionTerminatedPrematurely {
        id: auction_id,
        leftover_receiver: ctx.caller,
        leftover_collateral: auction.amount_to_sell,
    });

    Ok(auction.amount_to_sell)
}
