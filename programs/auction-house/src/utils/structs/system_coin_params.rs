use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use shared::check_condition;
use shared::constants::{
    DEFAULT_LOWER_SYSTEM_COIN_DEVIATION, DEFAULT_MIN_SYSTEM_COIN_DEVIATION,
    DEFAULT_UPPER_SYSTEM_COIN_DEVIATION, WAD,
};
use shared::errors::ErrorCode;

/// Bounds on the system coin market price relative to the redemption price.
///
/// All values are fractions of 1, scaled in D18.
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
pub struct SystemCoinParams {
    /// Deviations smaller than this are ignored and the redemption price is used as is
    pub min_system_coin_deviation: u128,

    pub lower_system_coin_deviation: u128,

    pub upper_system_coin_deviation: u128,
}

impl Default for SystemCoinParams {
    fn default() -> Self {
        Self {
            min_system_coin_deviation: DEFAULT_MIN_SYSTEM_COIN_DEVIATION,
            lower_system_coin_deviation: DEFAULT_LOWER_SYSTEM_COIN_DEVIATION,
            upper_system_coin_deviation: DEFAULT_UPPER_SYSTEM_COIN_DEVIATION,
        }
    }
}

impl SystemCoinParams {
    pub fn validate(&self) -> Result<()> {
        check_condition!(
            self.min_system_coin_deviation <= WAD
                && self.lower_system_coin_deviation <= WAD
                && self.upper_system_coin_deviation <= WAD,
            InvalidDeviation
        );

        Ok(())
    }
}
