use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;
use shared::utils::Decimal;

use crate::events::{AuctionSettled, CollateralBought};
use crate::state::{Auction, AuctionHouse};
use crate::utils::{
    adjust_bid, bought_collateral, is_valid_bid, left_to_raise_after, AuctionStatus, Authority,
    BidReceipt, LiquidationEngine, OracleRelayer, PriceFeeds, SafeEngine,
};

/// Buy collateral from an auction.
/// Permissionless.
///
/// # Arguments
/// * `bidder` - The account paying the system coins and receiving the collateral.
/// * `current_time` - The current time (seconds).
/// * `safe_engine` - The ledger moving the system coins and the collateral.
/// * `liquidation_engine` - Tracks the system coins currently on auction.
/// * `oracle_relayer` - Source of the redemption price.
/// * `price_feeds` - The collateral and system coin price feeds.
pub struct BuyCollateral<'a> {
    pub bidder: Pubkey,
    pub current_time: u64,
    pub safe_engine: &'a mut dyn SafeEngine,
    pub liquidation_engine: &'a mut dyn LiquidationEngine,
    pub oracle_relayer: &'a mut dyn OracleRelayer,
    pub price_feeds: PriceFeeds<'a>,
}

impl BuyCollateral<'_> {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Auction exists.
    /// * Bid is non zero and at least the minimum bid.
    pub fn validate<A: Authority>(
        &self,
        auction_house: &AuctionHouse<A>,
        auction_id: u64,
        wad: u128,
    ) -> Result<Auction> {
        let auction = *auction_house.auctions.get_active(auction_id)?;

        check_condition!(is_valid_bid(&auction_house.params, wad), InvalidBid);

        Ok(auction)
    }
}

/// Buy collateral from an auction at the current discount.
///
/// The bid is capped to what's left to raise. The bidder pays the adjusted bid to the auction
/// income recipient and receives the collateral bought. Once the auction has raised everything or
/// sold everything, the leftover collateral goes to the forgone collateral receiver and the auction
/// is deleted.
///
/// The bidder pays first, so a short bidder fails before any collateral moves. Nothing is written
/// to the auction house before every collaborator call went through. A failure after the payment
/// relies on the host reverting the collaborators, see [`SafeEngine`].
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `auction_house` - The auction house.
/// * `auction_id` - The id of the auction.
/// * `wad` - The bid (D18{system coin}).
pub fn handler<A: Authority>(
    ctx: BuyCollateral,
    auction_house: &mut AuctionHouse<A>,
    auction_id: u64,
    wad: u128,
) -> Result<BidReceipt> {
    let auction = ctx.validate(auction_house, auction_id, wad)?;

    // D18
    let adjusted_bid = adjust_bid(&auction, wad)?;

    // D27
    let redemption_price = ctx.oracle_relayer.redemption_price()?;
    let prices = auction_house
        .price_resolver()
        .resolve(&ctx.price_feeds, redemption_price)?;

    let mut updated = auction;
    let discount = updated.apply_discount_update(ctx.current_time)?;

    // D18
    let bought = bought_collateral(
        &updated,
        prices.collateral_price,
        prices.system_coin_price,
        discount,
        adjusted_bid,
    )?;
    check_condition!(bought > 0, NullBoughtAmount);

    updated.amount_to_sell = updated
        .amount_to_sell
        .checked_sub(bought)
        .ok_or(ErrorCode::MathOverflow)?;
    updated.amount_to_raise = left_to_raise_after(&auction, adjusted_bid)?;

    check_condition!(
        Auction::is_valid_left_to_raise(updated.amount_to_raise),
        InvalidLeftToRaise
    );

    // D45
    let raised = Decimal::from_scaled(adjusted_bid).wad_to_rad()?.0;
    let settled = updated.is_closed();

    ctx.safe_engine.transfer_internal_coins(
        &ctx.bidder,
        &auction.auction_income_recipient,
        raised,
    )?;

    ctx.safe_engine.transfer_collateral(
        &auction_house.collateral_type,
        &auction_house.address,
        &ctx.bidder,
        bought,
    )?;

    if settled {
        ctx.safe_engine.transfer_collateral(
            &auction_house.collateral_type,
            &auction_house.address,
            &auction.forgone_collateral_receiver,
            updated.amount_to_sell,
        )?;

        // The whole debt is off auction, even the part that wasn't raised
        ctx.liquidation_engine
            .remove_coins_from_auction(auction.amount_to_raise)?;
    } else {
        ctx.liquidation_engine.remove_coins_from_auction(raised)?;
    }

    auction_house.last_read_redemption_price = redemption_price;

    emit!(CollateralBought {
        id: auction_id,
        bidder: ctx.bidder,
        raised_amount: adjusted_bid,
        sold_amount: bought,
    });

    if settled {
        auction_house.auctions.remove(auction_id)?;

        msg!("Auction {} settled", auction_id);

        emit!(AuctionSettled {
            id: auction_id,
            leftover_receiver: auction.forgone_collateral_receiver,
            leftover_collateral: updated.amount_to_sell,
        });

        return Ok(BidReceipt {
            adjusted_bid,
            bought_collateral: bought,
            leftover_collateral: updated.amount_to_sell,
            status: AuctionStatus::Settled,
        });
    }

    auction_house.auctions.update(auction_id, updated)?;

    Ok(BidReceipt {
        adjusted_bid,
        bought_collateral: bought,
        leftover_collateral: 0,
        status: AuctionStatus::Active,
    })
}
