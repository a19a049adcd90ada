use std::cmp::Ordering;

use crate::constants::{HALF_RAY_U256, ONE_U256, RAD_U256, RAY_U256, WAD_U256};
use crate::errors::ErrorCode::MathOverflow;
use anchor_lang::prelude::*;
use spl_math::uint::U256;

#[allow(clippy::assign_op_pattern)]
#[allow(clippy::ptr_offset_with_cast)]
#[allow(clippy::manual_range_contains)]
mod wide {
    use uint::construct_uint;

    construct_uint! {
        /// Only used as the intermediate of a 256 x 256 bit product.
        pub struct U512(8);
    }
}

use wide::U512;

/// The rounding mode for the math operations
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    Floor,
    Ceiling,
}

/// Fixed point number, the scale (D18 wad, D27 ray or D45 rad) is given by how the value is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimal(pub U256);

/// Trait to convert a type to a U256
pub trait IntoU256 {
    fn into_u256(self) -> U256;
}

impl IntoU256 for u64 {
    fn into_u256(self) -> U256 {
        U256::from(self)
    }
}

impl IntoU256 for u128 {
    fn into_u256(self) -> U256 {
        U256::from(self)
    }
}

impl IntoU256 for U256 {
    fn into_u256(self) -> U256 {
        self
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Decimal {
    /// The zero decimal
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));
    /// The smallest representable unit, whatever the scale
    pub const ONE: Self = Self(ONE_U256);
    /// 1e18
    pub const WAD: Self = Self(WAD_U256);
    /// 1e27
    pub const RAY: Self = Self(RAY_U256);
    /// 1e45
    pub const RAD: Self = Self(RAD_U256);
}

impl Decimal {
    /// Create a new Decimal from an already scaled value.
    ///
    /// # Arguments
    /// * `value` - The scaled value to create the Decimal from
    pub fn from_scaled<T: IntoU256>(value: T) -> Self {
        Decimal(value.into_u256())
    }

    /// Create a wad (D18) from a plain number.
    ///
    /// # Arguments
    /// * `value` - The plain value to scale
    pub fn from_plain(value: u64) -> Result<Self> {
        Ok(Decimal(
            U256::from(value)
                .checked_mul(WAD_U256)
                .ok_or(MathOverflow)?,
        ))
    }

    /// Lift a wad (D18) amount to rad (D45).
    pub fn wad_to_rad(&self) -> Result<Self> {
        Ok(Decimal(self.0.checked_mul(RAY_U256).ok_or(MathOverflow)?))
    }

    /// Bring a rad (D45) amount back to wad (D18).
    ///
    /// # Arguments
    /// * `rounding` - The rounding mode
    pub fn rad_to_wad(&self, rounding: Rounding) -> Result<Self> {
        let quotient = self.0.checked_div(RAY_U256).ok_or(MathOverflow)?;

        match rounding {
            Rounding::Floor => Ok(Decimal(quotient)),
            Rounding::Ceiling => {
                // Only round up if there's a remainder after division
                if (self.0 % RAY_U256).is_zero() {
                    Ok(Decimal(quotient))
                } else {
                    Ok(Decimal(quotient.checked_add(ONE_U256).ok_or(MathOverflow)?))
                }
            }
        }
    }

    /// Convert to a u128, used for values stored at wad or ray scale.
    pub fn to_u128(&self) -> Result<u128> {
        if self.0 > U256::from(u128::MAX) {
            return Err(error!(MathOverflow));
        }
        Ok(self.0.as_u128())
    }

    /// Check if the Decimal is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Decimal {
    /// Add two Decimals.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(Decimal(self.0.checked_add(other.0).ok_or(MathOverflow)?))
    }

    /// Subtract two Decimals, failing if `other` is larger.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        Ok(Decimal(self.0.checked_sub(other.0).ok_or(MathOverflow)?))
    }

    /// Subtract two Decimals, stopping at zero.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        Decimal(self.0.saturating_sub(other.0))
    }

    /// `self * multiplier / denominator`, floored, with a 512 bit intermediate.
    pub fn mul_div_floor(&self, multiplier: &Self, denominator: &Self) -> Result<Self> {
        Ok(Decimal(mul_div_floor(self.0, multiplier.0, denominator.0)?))
    }

    /// x * y / WAD
    pub fn wmul(&self, other: &Self) -> Result<Self> {
        self.mul_div_floor(other, &Decimal::WAD)
    }

    /// x * y / RAY
    pub fn rmul(&self, other: &Self) -> Result<Self> {
        self.mul_div_floor(other, &Decimal::RAY)
    }

    /// x * WAD / y
    pub fn wdiv(&self, other: &Self) -> Result<Self> {
        self.mul_div_floor(&Decimal::WAD, other)
    }

    /// x * RAY / y
    pub fn rdiv(&self, other: &Self) -> Result<Self> {
        self.mul_div_floor(&Decimal::RAY, other)
    }

    /// Raise a ray to an integer power, see [`ray_pow`].
    pub fn ray_pow(&self, exponent: u64) -> Result<Self> {
        Ok(Decimal(ray_pow(self.0, exponent)?))
    }
}

/// Full precision `floor(a * b / denominator)`.
///
/// The product is computed on 512 bits so it never overflows, only a quotient that doesn't fit
/// back in 256 bits or a zero denominator is an error.
pub fn mul_div_floor(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(error!(MathOverflow));
    }

    let quotient = widen(a) * widen(b) / widen(denominator);

    narrow(quotient).ok_or_else(|| error!(MathOverflow))
}

/// Raise a ray (D27) to an integer power using binary exponentiation (square-and-multiply).
///
/// Every squaring and every multiplication into the result rounds half up (adds RAY / 2 before
/// scaling back), so the curve is reproducible bit for bit:
/// * `ray_pow(0, 0) == RAY`
/// * `ray_pow(0, n) == 0` for n > 0
///
/// # Arguments
/// * `base` - The base, scaled in D27
/// * `exponent` - The plain exponent
pub fn ray_pow(base: U256, exponent: u64) -> Result<U256> {
    if base.is_zero() {
        return Ok(if exponent == 0 {
            RAY_U256
        } else {
            U256::zero()
        });
    }

    let mut x = base;
    let mut n = exponent;
    let mut z = if n % 2 == 0 { RAY_U256 } else { x };

    n >>= 1;
    while n > 0 {
        let xx = x.checked_mul(x).ok_or(MathOverflow)?;
        x = xx.checked_add(HALF_RAY_U256).ok_or(MathOverflow)? / RAY_U256;

        if n & 1 == 1 {
            let zx = z.checked_mul(x).ok_or(MathOverflow)?;
            z = zx.checked_add(HALF_RAY_U256).ok_or(MathOverflow)? / RAY_U256;
        }

        n >>= 1;
    }

    Ok(z)
}

fn widen(value: U256) -> U512 {
    let mut limbs = [0u64; 8];
    limbs[..4].copy_from_slice(&value.0);
    U512(limbs)
}

fn narrow(value: U512) -> Option<U256> {
    if value.0[4..].iter().any(|limb| *limb != 0) {
        return None;
    }
    let mut limbs = [0u64; 4];
    limbs.copy_from_slice(&value.0[..4]);
    Some(U256(limbs))
}
