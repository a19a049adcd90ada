use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::RAY_U256;
use shared::errors::ErrorCode;
use shared::errors::ErrorCode::MathOverflow;
use shared::utils::Decimal;
use spl_math::uint::U256;

use crate::state::{Auction, AuctionHouse, AuctionStore};
use crate::utils::{
    discounted_collateral_price, system_coin_market_price_to_ray, AuctionParams, Authority,
    PriceFeeds, PriceResolver, SystemCoinParams,
};

impl<A: Authority> AuctionHouse<A> {
    /// Create an auction house with the default parameters.
    ///
    /// # Arguments
    /// * `address` - The account holding the collateral in custody.
    /// * `collateral_type` - The collateral sold by this house.
    /// * `authority` - Who may start, terminate and configure auctions.
    pub fn new(address: Pubkey, collateral_type: Pubkey, authority: A) -> Result<Self> {
        check_condition!(address != Pubkey::default(), NullAddress);

        Ok(AuctionHouse {
            address,
            collateral_type,
            authority,
            params: AuctionParams::default(),
            system_coin_params: SystemCoinParams::default(),
            last_read_redemption_price: 0,
            auctions: AuctionStore::default(),
        })
    }

    /// Replace every parameter at once.
    pub fn with_params(
        mut self,
        params: AuctionParams,
        system_coin_params: SystemCoinParams,
    ) -> Result<Self> {
        params.validate()?;
        system_coin_params.validate()?;

        self.params = params;
        self.system_coin_params = system_coin_params;

        Ok(self)
    }

    pub fn validate_authorized(&self, caller: &Pubkey) -> Result<()> {
        check_condition!(self.authority.is_authorized(caller), Unauthorized);

        Ok(())
    }

    pub fn price_resolver(&self) -> PriceResolver<'_> {
        PriceResolver::new(&self.params, &self.system_coin_params)
    }

    /*
    Auction views
    */
    pub fn auctions(&self, id: u64) -> Auction {
        self.auctions.auction(id)
    }

    /// D18
    pub fn remaining_amount_to_sell(&self, id: u64) -> u128 {
        self.auctions.remaining_to_sell(id)
    }

    /// D45
    pub fn amount_to_raise(&self, id: u64) -> U256 {
        self.auctions.remaining_to_raise(id)
    }

    pub fn forgone_collateral_receiver(&self, id: u64) -> Pubkey {
        self.auctions.forgone_collateral_receiver(id)
    }

    pub fn auctions_started(&self) -> u64 {
        self.auctions.auctions_started
    }

    /// D27
    pub fn get_next_current_discount(&self, id: u64, current_time: u64) -> Result<u128> {
        self.auctions.next_discount(id, current_time)
    }

    /// Cap a bid to what's left to raise and tell whether it can be placed.
    ///
    /// The bid is invalid when the auction doesn't exist, when it's below the minimum bid, or when
    /// it would leave less than the dust floor to raise.
    ///
    /// # Arguments
    /// * `id` - The id of the auction.
    /// * `wad` - The bid (D18).
    ///
    /// # Returns
    /// * `(bool, u128)` - Whether the bid is valid and the adjusted bid (D18).
    pub fn get_adjusted_bid(&self, id: u64, wad: u128) -> Result<(bool, u128)> {
        let auction = match self.auctions.get(id) {
            Some(auction) if !auction.is_closed() => auction,
            _ => return Ok((false, wad)),
        };

        if !is_valid_bid(&self.params, wad) {
            return Ok((false, wad));
        }

        let adjusted_bid = adjust_bid(auction, wad)?;
        let left_to_raise = left_to_raise_after(auction, adjusted_bid)?;

        Ok((Auction::is_valid_left_to_raise(left_to_raise), adjusted_bid))
    }

    /// Estimate the collateral a bid would buy, with the last redemption price read and the last
    /// discount applied. Never fails on a bad bid or a bad feed, it reports nothing bought.
    ///
    /// # Returns
    /// * `(u128, u128)` - The collateral bought (D18) and the adjusted bid (D18).
    pub fn get_approximate_collateral_bought(
        &self,
        id: u64,
        wad: u128,
        feeds: &PriceFeeds,
    ) -> Result<(u128, u128)> {
        if self.last_read_redemption_price == 0 {
            return Ok((0, wad));
        }

        let (valid, adjusted_bid) = self.get_adjusted_bid(id, wad)?;
        if !valid {
            return Ok((0, adjusted_bid));
        }

        let fsm_price = feeds.collateral_fsm_price();
        if fsm_price == 0 {
            return Ok((0, adjusted_bid));
        }

        let auction = self.auctions.get_active(id)?;
        let resolver = self.price_resolver();

        let collateral_price =
            resolver.final_base_collateral_price(fsm_price, feeds.collateral_median_price())?;
        let system_coin_price = resolver.final_system_coin_price(
            self.last_read_redemption_price,
            system_coin_market_price_to_ray(feeds.system_coin_market_price())?,
        )?;

        let bought = bought_collateral(
            auction,
            collateral_price,
            system_coin_price,
            auction.current_discount,
            adjusted_bid,
        )?;

        Ok((bought, adjusted_bid))
    }

    /*
    Price views
    */
    /// D18, see [`PriceResolver::final_base_collateral_price`].
    pub fn get_final_base_collateral_price(
        &self,
        collateral_fsm_price: u128,
        collateral_median_price: u128,
    ) -> Result<u128> {
        self.price_resolver()
            .final_base_collateral_price(collateral_fsm_price, collateral_median_price)
    }

    /// D27, see [`PriceResolver::final_system_coin_price`].
    pub fn get_final_system_coin_price(
        &self,
        redemption_price: u128,
        system_coin_market_price: u128,
    ) -> Result<u128> {
        self.price_resolver()
            .final_system_coin_price(redemption_price, system_coin_market_price)
    }

    /// D27
    pub fn get_system_coin_floor_deviated_price(&self, redemption_price: u128) -> Result<u128> {
        self.price_resolver()
            .system_coin_floor_deviated_price(redemption_price)
    }

    /// D27
    pub fn get_system_coin_ceiling_deviated_price(&self, redemption_price: u128) -> Result<u128> {
        self.price_resolver()
            .system_coin_ceiling_deviated_price(redemption_price)
    }

    /// Discounted collateral price (D18) for the given feed values.
    ///
    /// A zero `system_coin_price` falls back to the last redemption price read.
    ///
    /// # Arguments
    /// * `collateral_fsm_price` - D18.
    /// * `collateral_median_price` - D18, 0 if unavailable.
    /// * `system_coin_price` - D27.
    /// * `discount` - D27.
    pub fn get_discounted_collateral_price(
        &self,
        collateral_fsm_price: u128,
        collateral_median_price: u128,
        system_coin_price: u128,
        discount: u128,
    ) -> Result<u128> {
        let system_coin_price = if system_coin_price == 0 {
            self.last_read_redemption_price
        } else {
            system_coin_price
        };

        discounted_collateral_price(
            self.get_final_base_collateral_price(collateral_fsm_price, collateral_median_price)?,
            system_coin_price,
            discount,
        )
    }

    /// D18, 0 when the live collateral price is unavailable.
    pub fn get_collateral_median_price(&self, feeds: &PriceFeeds) -> u128 {
        feeds.collateral_median_price()
    }

    /// D27, 0 when the system coin market price is unavailable.
    pub fn get_system_coin_market_price(&self, feeds: &PriceFeeds) -> Result<u128> {
        system_coin_market_price_to_ray(feeds.system_coin_market_price())
    }
}

/// Cap `wad` (D18) to what's left to raise, one unit above to cover the truncated remainder.
pub fn adjust_bid(auction: &Auction, wad: u128) -> Result<u128> {
    let bid_rad = U256::from(wad).checked_mul(RAY_U256).ok_or(MathOverflow)?;

    if bid_rad > auction.amount_to_raise {
        let capped = (auction.amount_to_raise / RAY_U256)
            .checked_add(U256::one())
            .ok_or(MathOverflow)?;

        return Decimal::from_scaled(capped).to_u128();
    }

    Ok(wad)
}

/// D45 left to raise once `adjusted_bid` (D18) is paid, 0 if it covers everything.
pub fn left_to_raise_after(auction: &Auction, adjusted_bid: u128) -> Result<U256> {
    let paid = Decimal::from_scaled(adjusted_bid).wad_to_rad()?;

    Ok(Decimal::from_scaled(auction.amount_to_raise)
        .saturating_sub(&paid)
        .0)
}

/// Collateral (D18) an adjusted bid buys at the given prices, never more than what's for sale.
///
/// # Arguments
/// * `auction` - The auction.
/// * `collateral_price` - D18.
/// * `system_coin_price` - D27.
/// * `discount` - D27.
/// * `adjusted_bid` - D18.
pub fn bought_collateral(
    auction: &Auction,
    collateral_price: u128,
    system_coin_price: u128,
    discount: u128,
    adjusted_bid: u128,
) -> Result<u128> {
    let discounted_price =
        discounted_collateral_price(collateral_price, system_coin_price, discount)?;

    if discounted_price == 0 {
        return Ok(0);
    }

    // D18 = D18 * D18 / D18
    let bought = Decimal::from_scaled(adjusted_bid).wdiv(&Decimal::from_scaled(discounted_price))?;

    // Capped before narrowing, a near zero price buys more than a u128 holds
    bought
        .min(Decimal::from_scaled(auction.amount_to_sell))
        .to_u128()
}

/// Whether `wad` passes the minimum bid. Zero never does.
pub fn is_valid_bid(params: &AuctionParams, wad: u128) -> bool {
    wad > 0 && wad >= params.minimum_bid
}
