use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

use crate::state::AuctionHouse;
use crate::utils::{
    bought_collateral, system_coin_market_price_to_ray, Authority, OracleRelayer, PriceFeeds,
};

/// Price a bid against the current state of the auction.
/// Permissionless.
///
/// # Arguments
/// * `current_time` - The current time (seconds).
/// * `oracle_relayer` - Source of the redemption price.
/// * `price_feeds` - The collateral and system coin price feeds.
pub struct GetCollateralBought<'a> {
    pub current_time: u64,
    pub oracle_relayer: &'a mut dyn OracleRelayer,
    pub price_feeds: PriceFeeds<'a>,
}

/// Collateral a bid would buy right now.
///
/// Unlike [`AuctionHouse::get_approximate_collateral_bought`], this reads a fresh redemption
/// price and moves the discount of the auction to `current_time`, both are kept.
/// An invalid bid or an unusable FSM isn't an error, nothing is bought.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `auction_house` - The auction house.
/// * `auction_id` - The id of the auction.
/// * `wad` - The bid (D18).
///
/// # Returns
/// * `(u128, u128)` - The collateral bought (D18) and the adjusted bid (D18).
pub fn handler<A: Authority>(
    ctx: GetCollateralBought,
    auction_house: &mut AuctionHouse<A>,
    auction_id: u64,
    wad: u128,
) -> Result<(u128, u128)> {
    let (valid, adjusted_bid) = auction_house.get_adjusted_bid(auction_id, wad)?;
    if !valid {
        return Ok((0, adjusted_bid));
    }

    let redemption_price = ctx.oracle_relayer.redemption_price()?;
    check_condition!(redemption_price != 0, InvalidRedemptionPrice);
    auction_house.last_read_redemption_price = redemption_price;

    let fsm_price = ctx.price_feeds.collateral_fsm_price();
    if fsm_price == 0 {
        return Ok((0, adjusted_bid));
    }

    let resolver = auction_house.price_resolver();
    let collateral_price = resolver
        .final_base_collateral_price(fsm_price, ctx.price_feeds.collateral_median_price())?;
    let system_coin_price = resolver.final_system_coin_price(
        redemption_price,
        system_coin_market_price_to_ray(ctx.price_feeds.system_coin_market_price())?,
    )?;

    let mut auction = *auction_house.auctions.get_active(auction_id)?;
    let discount = auction.apply_discount_update(ctx.current_time)?;

    let bought = bought_collateral(
        &auction,
        collateral_price,
        system_coin_price,
        discount,
        adjusted_bid,
    )?;

    auction_house.auctions.update(auction_id, auction)?;

    Ok((bought, adjusted_bid))
}
