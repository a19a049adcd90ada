use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{RAY, WAD};
use shared::errors::ErrorCode;

use crate::utils::{AuctionParams, SystemCoinParams};

/// A single parameter change, each variant carries the new value in the scale of the parameter.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParameterUpdate {
    /// D18
    MinimumBid(u128),
    /// D27
    MinDiscount(u128),
    /// D27
    MaxDiscount(u128),
    /// D27
    PerSecondDiscountUpdateRate(u128),
    /// D18
    LowerCollateralDeviation(u128),
    /// D18
    UpperCollateralDeviation(u128),
    /// D18
    LowerSystemCoinDeviation(u128),
    /// D18
    UpperSystemCoinDeviation(u128),
    /// D18
    MinSystemCoinDeviation(u128),
}

impl ParameterUpdate {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterUpdate::MinimumBid(_) => "minimumBid",
            ParameterUpdate::MinDiscount(_) => "minDiscount",
            ParameterUpdate::MaxDiscount(_) => "maxDiscount",
            ParameterUpdate::PerSecondDiscountUpdateRate(_) => "perSecondDiscountUpdateRate",
            ParameterUpdate::LowerCollateralDeviation(_) => "lowerCollateralMedianDeviation",
            ParameterUpdate::UpperCollateralDeviation(_) => "upperCollateralMedianDeviation",
            ParameterUpdate::LowerSystemCoinDeviation(_) => "lowerSystemCoinMedianDeviation",
            ParameterUpdate::UpperSystemCoinDeviation(_) => "upperSystemCoinMedianDeviation",
            ParameterUpdate::MinSystemCoinDeviation(_) => "minSystemCoinMedianDeviation",
        }
    }

    pub fn value(&self) -> u128 {
        match *self {
            ParameterUpdate::MinimumBid(value)
            | ParameterUpdate::MinDiscount(value)
            | ParameterUpdate::MaxDiscount(value)
            | ParameterUpdate::PerSecondDiscountUpdateRate(value)
            | ParameterUpdate::LowerCollateralDeviation(value)
            | ParameterUpdate::UpperCollateralDeviation(value)
            | ParameterUpdate::LowerSystemCoinDeviation(value)
            | ParameterUpdate::UpperSystemCoinDeviation(value)
            | ParameterUpdate::MinSystemCoinDeviation(value) => value,
        }
    }

    /// Compute the parameters resulting from the update, without touching the current ones.
    ///
    /// # Arguments
    /// * `params` - The current collateral parameters.
    /// * `system_coin_params` - The current system coin parameters.
    ///
    /// # Returns
    /// * `(AuctionParams, SystemCoinParams)` - The parameters to store.
    pub fn apply(
        &self,
        params: &AuctionParams,
        system_coin_params: &SystemCoinParams,
    ) -> Result<(AuctionParams, SystemCoinParams)> {
        let mut params = *params;
        let mut system_coin_params = *system_coin_params;

        match *self {
            ParameterUpdate::MinimumBid(value) => params.minimum_bid = value,
            ParameterUpdate::MinDiscount(value) => {
                check_condition!(
                    value >= params.max_discount && value <= RAY,
                    InvalidMinDiscount
                );
                params.min_discount = value;
            }
            ParameterUpdate::MaxDiscount(value) => {
                check_condition!(
                    value <= params.min_discount && value > 0,
                    InvalidMaxDiscount
                );
                params.max_discount = value;
            }
            ParameterUpdate::PerSecondDiscountUpdateRate(value) => {
                check_condition!(value <= RAY, InvalidDiscountUpdateRate);
                params.per_second_discount_update_rate = value;
            }
            ParameterUpdate::LowerCollateralDeviation(value) => {
                check_condition!(value <= WAD, InvalidDeviation);
                params.lower_collateral_deviation = value;
            }
            ParameterUpdate::UpperCollateralDeviation(value) => {
                check_condition!(value <= WAD, InvalidDeviation);
                params.upper_collateral_deviation = value;
            }
            ParameterUpdate::LowerSystemCoinDeviation(value) => {
                check_condition!(value <= WAD, InvalidDeviation);
                system_coin_params.lower_system_coin_deviation = value;
            }
            ParameterUpdate::UpperSystemCoinDeviation(value) => {
                check_condition!(value <= WAD, InvalidDeviation);
                system_coin_params.upper_system_coin_deviation = value;
            }
            ParameterUpdate::MinSystemCoinDeviation(value) => {
                check_condition!(value <= WAD, InvalidDeviation);
                system_coin_params.min_system_coin_deviation = value;
            }
        }

        params.validate()?;
        system_coin_params.validate()?;

        Ok((params, system_coin_params))
    }
}
