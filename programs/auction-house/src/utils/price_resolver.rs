use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{WAD, WAD_TO_RAY};
use shared::errors::ErrorCode;
use shared::errors::ErrorCode::MathOverflow;
use shared::utils::Decimal;

use crate::utils::{AuctionParams, PriceFeeds, SystemCoinParams};

/// Prices a bid is computed against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ResolvedPrices {
    /// D18, the collateral price once the live price is clamped around the FSM price
    pub collateral_price: u128,

    /// D27, the system coin price once the market price is clamped around the redemption price
    pub system_coin_price: u128,
}

/// Reconciles the collateral and system coin price sources into the prices used by the auction
/// house. Holds no state, the parameters are borrowed from the auction house.
pub struct PriceResolver<'a> {
    pub params: &'a AuctionParams,
    pub system_coin_params: &'a SystemCoinParams,
}

impl<'a> PriceResolver<'a> {
    pub fn new(params: &'a AuctionParams, system_coin_params: &'a SystemCoinParams) -> Self {
        Self {
            params,
            system_coin_params,
        }
    }

    /// Collateral price to use, the live price bounded around the FSM price.
    ///
    /// # Arguments
    /// * `fsm_price` - The canonical collateral price (D18).
    /// * `median_price` - The live collateral price (D18), 0 if unavailable.
    ///
    /// # Returns
    /// * `u128` - The collateral price (D18).
    pub fn final_base_collateral_price(&self, fsm_price: u128, median_price: u128) -> Result<u128> {
        let fsm = Decimal::from_scaled(fsm_price);

        let floor = fsm.wmul(&Decimal::from_scaled(self.params.lower_collateral_deviation))?;
        let ceiling = fsm.wmul(&Decimal::from_scaled(
            two_wad_minus(self.params.upper_collateral_deviation)?,
        ))?;

        let median = if median_price == 0 {
            fsm
        } else {
            Decimal::from_scaled(median_price)
        };

        let price = if median < fsm {
            median.max(floor)
        } else {
            median.min(ceiling)
        };

        price.to_u128()
    }

    /// Lowest system coin price accepted, the redemption price when the lower deviation is
    /// smaller than the minimum deviation.
    ///
    /// # Arguments
    /// * `redemption_price` - D27.
    pub fn system_coin_floor_deviated_price(&self, redemption_price: u128) -> Result<u128> {
        let redemption = Decimal::from_scaled(redemption_price);

        let min_floor = redemption.wmul(&Decimal::from_scaled(
            self.system_coin_params.min_system_coin_deviation,
        ))?;
        let floor = redemption.wmul(&Decimal::from_scaled(
            self.system_coin_params.lower_system_coin_deviation,
        ))?;

        if floor <= min_floor {
            floor.to_u128()
        } else {
            Ok(redemption_price)
        }
    }

    /// Highest system coin price accepted, the redemption price when the upper deviation is
    /// smaller than the minimum deviation.
    ///
    /// # Arguments
    /// * `redemption_price` - D27.
    pub fn system_coin_ceiling_deviated_price(&self, redemption_price: u128) -> Result<u128> {
        let redemption = Decimal::from_scaled(redemption_price);

        let min_ceiling = redemption.wmul(&Decimal::from_scaled(two_wad_minus(
            self.system_coin_params.min_system_coin_deviation,
        )?))?;
        let ceiling = redemption.wmul(&Decimal::from_scaled(two_wad_minus(
            self.system_coin_params.upper_system_coin_deviation,
        )?))?;

        if ceiling >= min_ceiling {
            ceiling.to_u128()
        } else {
            Ok(redemption_price)
        }
    }

    /// System coin price to use, the market price bounded around the redemption price.
    ///
    /// # Arguments
    /// * `redemption_price` - D27.
    /// * `market_price` - D27, 0 if unavailable.
    pub fn final_system_coin_price(&self, redemption_price: u128, market_price: u128) -> Result<u128> {
        if market_price == 0 {
            return Ok(redemption_price);
        }

        if market_price < redemption_price {
            Ok(market_price.max(self.system_coin_floor_deviated_price(redemption_price)?))
        } else {
            Ok(market_price.min(self.system_coin_ceiling_deviated_price(redemption_price)?))
        }
    }

    /// Resolve every feed into the prices used for a bid.
    ///
    /// # Checks
    /// * The redemption price is non zero.
    /// * The FSM reports a usable price.
    pub fn resolve(&self, feeds: &PriceFeeds, redemption_price: u128) -> Result<ResolvedPrices> {
        check_condition!(redemption_price > 0, InvalidRedemptionPrice);

        let fsm_price = feeds.collateral_fsm_price();
        check_condition!(fsm_price > 0, CollateralFeedInvalid);

        let collateral_price =
            self.final_base_collateral_price(fsm_price, feeds.collateral_median_price())?;

        let system_coin_price = self.final_system_coin_price(
            redemption_price,
            system_coin_market_price_to_ray(feeds.system_coin_market_price())?,
        )?;

        Ok(ResolvedPrices {
            collateral_price,
            system_coin_price,
        })
    }
}

/// Collateral price in system coins, after the discount.
///
/// # Arguments
/// * `collateral_price` - D18.
/// * `system_coin_price` - D27.
/// * `discount` - D27.
///
/// # Returns
/// * `u128` - D18{system coin/collateral}.
pub fn discounted_collateral_price(
    collateral_price: u128,
    system_coin_price: u128,
    discount: u128,
) -> Result<u128> {
    // D18 = D18 * D27 / D27
    Decimal::from_scaled(collateral_price)
        .rdiv(&Decimal::from_scaled(system_coin_price))?
        // D18 = D18 * D27 / D27
        .rmul(&Decimal::from_scaled(discount))?
        .to_u128()
}

/// Scale a D18 market price to D27, 0 stays 0.
pub fn system_coin_market_price_to_ray(market_price: u128) -> Result<u128> {
    Ok(market_price.checked_mul(WAD_TO_RAY).ok_or(MathOverflow)?)
}

fn two_wad_minus(deviation: u128) -> Result<u128> {
    Ok((2 * WAD).checked_sub(deviation).ok_or(MathOverflow)?)
}
