use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use shared::check_condition;
use shared::constants::{
    DEFAULT_LOWER_COLLATERAL_DEVIATION, DEFAULT_MAX_DISCOUNT, DEFAULT_MINIMUM_BID,
    DEFAULT_MIN_DISCOUNT, DEFAULT_PER_SECOND_DISCOUNT_UPDATE_RATE,
    DEFAULT_UPPER_COLLATERAL_DEVIATION, RAY, WAD,
};
use shared::errors::ErrorCode;

/// Parameters of the auctions for one collateral type.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    InitSpace,
    Zeroable,
    Pod,
)]
#[repr(C)]
pub struct AuctionParams {
    /// D18{system coin}, smallest bid accepted
    pub minimum_bid: u128,

    /// D27, discount an auction starts at
    pub min_discount: u128,

    /// D27, discount an auction decays towards, never above `min_discount`
    pub max_discount: u128,

    /// D27, per second multiplier applied to the current discount
    pub per_second_discount_update_rate: u128,

    /// D18, how far below the FSM price the live collateral price may go
    pub lower_collateral_deviation: u128,

    /// D18, how far above the FSM price the live collateral price may go
    pub upper_collateral_deviation: u128,
}

impl Default for AuctionParams {
    fn default() -> Self {
        Self {
            minimum_bid: DEFAULT_MINIMUM_BID,
            min_discount: DEFAULT_MIN_DISCOUNT,
            max_discount: DEFAULT_MAX_DISCOUNT,
            per_second_discount_update_rate: DEFAULT_PER_SECOND_DISCOUNT_UPDATE_RATE,
            lower_collateral_deviation: DEFAULT_LOWER_COLLATERAL_DEVIATION,
            upper_collateral_deviation: DEFAULT_UPPER_COLLATERAL_DEVIATION,
        }
    }
}

impl AuctionParams {
    /// Validate the whole parameter set.
    ///
    /// # Checks
    /// * `RAY >= min_discount >= max_discount > 0`
    /// * `per_second_discount_update_rate <= RAY`
    /// * both collateral deviations are at most 1 (D18)
    pub fn validate(&self) -> Result<()> {
        check_condition!(
            self.min_discount <= RAY && self.min_discount >= self.max_discount,
            InvalidMinDiscount
        );

        check_condition!(self.max_discount > 0, InvalidMaxDiscount);

        check_condition!(
            self.per_second_discount_update_rate <= RAY,
            InvalidDiscountUpdateRate
        );

        check_condition!(
            self.lower_collateral_deviation <= WAD && self.upper_collateral_deviation <= WAD,
            InvalidDeviation
        );

        Ok(())
    }
}
