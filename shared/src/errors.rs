//! Error codes for the auction house.
//!
//! Custom errors for Anchor programs start at 6000, i.e. here Unauthorized would be 6000 and
//! NullAddress would be 6001.

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Null Address")]
    NullAddress,

    #[msg("Invalid Min Discount")]
    InvalidMinDiscount,

    #[msg("Invalid Max Discount")]
    InvalidMaxDiscount,

    #[msg("Invalid Discount Update Rate")]
    InvalidDiscountUpdateRate,

    #[msg("Invalid Deviation")]
    InvalidDeviation,

    #[msg("Inexistent Auction")]
    InexistentAuction,

    #[msg("No Collateral For Sale")]
    NoCollateralForSale,

    #[msg("Nothing To Raise")]
    NothingToRaise,

    #[msg("Dusty Auction")]
    DustyAuction,

    #[msg("Invalid Bid")]
    InvalidBid,

    #[msg("Invalid Left To Raise")]
    InvalidLeftToRaise,

    #[msg("Null Bought Amount")]
    NullBoughtAmount,

    #[msg("Collateral FSM Invalid Value")]
    CollateralFeedInvalid,

    #[msg("Invalid Redemption Price")]
    InvalidRedemptionPrice,

    #[msg("Insufficient Balance")]
    InsufficientBalance,

    #[msg("Math Overflow")]
    MathOverflow,
}

/// Check a condition and return an error if it is not met.
///
/// # Arguments
/// * `condition` - The condition to check.
/// * `error` - The error to return if the condition is not met.
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err(error!(ErrorCode::$error));
        }
    };
}
