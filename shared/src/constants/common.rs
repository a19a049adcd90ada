use anchor_lang::prelude::*;
use spl_math::uint::U256;

/*
Included in build

ADMIN
*/
include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// 10^18, the scale of token amounts and deviation fractions.
pub const WAD: u128 = 1_000_000_000_000_000_000;
/// 10^27, the scale of prices handed out by the redemption oracle, discounts and rates.
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

/// 10^9, bridges a wad into a ray.
pub const WAD_TO_RAY: u128 = 1_000_000_000;

pub const ONE_U256: U256 = U256([1, 0, 0, 0]);
pub const WAD_U256: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);
// 10^27 = 54210108 * 2^64 + 11515845246265065472
pub const RAY_U256: U256 = U256([11_515_845_246_265_065_472, 54_210_108, 0, 0]);
// 10^45 = 2938735 * 2^128 + 16178822382532126880 * 2^64 + 802379605485813760
pub const RAD_U256: U256 = U256([
    802_379_605_485_813_760,
    16_178_822_382_532_126_880,
    2_938_735,
    0,
]);
pub const HALF_RAY_U256: U256 = U256([5_757_922_623_132_532_736, 27_105_054, 0, 0]);

/// Smallest non-zero amount left to raise an auction can carry (D45, one unit of system coin).
pub const DUST_FLOOR: U256 = RAY_U256;

/*
Default parameters of a freshly created auction house
*/
/// 5 system coins (D18)
pub const DEFAULT_MINIMUM_BID: u128 = 5 * WAD;
/// 0.95 (D27), a 5% discount
pub const DEFAULT_MIN_DISCOUNT: u128 = 950_000_000_000_000_000_000_000_000;
/// 0.95 (D27)
pub const DEFAULT_MAX_DISCOUNT: u128 = 950_000_000_000_000_000_000_000_000;
/// 1.0 (D27), no decay
pub const DEFAULT_PER_SECOND_DISCOUNT_UPDATE_RATE: u128 = RAY;
/// 0.90 (D18)
pub const DEFAULT_LOWER_COLLATERAL_DEVIATION: u128 = 900_000_000_000_000_000;
/// 0.95 (D18)
pub const DEFAULT_UPPER_COLLATERAL_DEVIATION: u128 = 950_000_000_000_000_000;
/// 1.0 (D18)
pub const DEFAULT_LOWER_SYSTEM_COIN_DEVIATION: u128 = WAD;
/// 1.0 (D18)
pub const DEFAULT_UPPER_SYSTEM_COIN_DEVIATION: u128 = WAD;
/// 0.999 (D18)
pub const DEFAULT_MIN_SYSTEM_COIN_DEVIATION: u128 = 999_000_000_000_000_000;
