#[cfg(test)]
mod tests {

    use num_bigint::BigUint;
    use proptest::prelude::*;
    use shared::constants::{HALF_RAY_U256, RAD_U256, RAY, RAY_U256, WAD, WAD_U256};
    use shared::errors::ErrorCode::MathOverflow;
    use shared::structs::U256Value;
    use shared::utils::math_util::{mul_div_floor, ray_pow, Decimal, Rounding};
    use spl_math::uint::U256;

    fn to_big(value: U256) -> BigUint {
        value
            .0
            .iter()
            .rev()
            .fold(BigUint::from(0u8), |acc, limb| (acc << 64u32) + BigUint::from(*limb))
    }

    fn u256_max_big() -> BigUint {
        to_big(U256::MAX)
    }

    /// Same square-and-multiply as the fixed point version, on unbounded integers.
    fn ray_pow_reference(base: &BigUint, exponent: u64) -> BigUint {
        let ray = BigUint::from(RAY);
        let half = &ray / 2u8;

        if *base == BigUint::from(0u8) {
            return if exponent == 0 { ray } else { BigUint::from(0u8) };
        }

        let mut x = base.clone();
        let mut n = exponent;
        let mut z = if n % 2 == 0 { ray.clone() } else { x.clone() };

        n >>= 1;
        while n > 0 {
            x = (&x * &x + &half) / &ray;
            if n & 1 == 1 {
                z = (&z * &x + &half) / &ray;
            }
            n >>= 1;
        }

        z
    }

    mod constants {

        use super::*;

        #[test]
        fn test_scales() {
            assert_eq!(to_big(WAD_U256), BigUint::from(10u8).pow(18));
            assert_eq!(to_big(RAY_U256), BigUint::from(10u8).pow(27));
            assert_eq!(to_big(RAD_U256), BigUint::from(10u8).pow(45));
            assert_eq!(to_big(HALF_RAY_U256) * 2u8, BigUint::from(10u8).pow(27));
            assert_eq!(RAY_U256, U256::from(RAY));
        }

        #[test]
        fn test_storable_u256() {
            let value = U256Value::from(RAD_U256);

            assert_eq!(value.limbs, RAD_U256.0);
            assert_eq!(value.to_u256(), RAD_U256);
        }
    }

    mod basic_operations {

        use super::*;

        #[test]
        fn test_from_conversions() {
            assert_eq!(Decimal::from_plain(100).unwrap().0, U256::from(100 * WAD));
            assert_eq!(Decimal::from_scaled(42u128).to_u128().unwrap(), 42);
            assert_eq!(Decimal::from_scaled(7u64).0, U256::from(7u64));
        }

        #[test]
        fn test_to_u128_overflow() {
            let too_big = Decimal::from_scaled(U256::from(u128::MAX) + U256::one());
            assert_eq!(too_big.to_u128().err(), Some(MathOverflow.into()));
        }

        #[test]
        fn test_scaled_arithmetic() {
            let two = Decimal::from_plain(2).unwrap();
            let three = Decimal::from_plain(3).unwrap();

            assert_eq!(two.wmul(&three).unwrap(), Decimal::from_plain(6).unwrap());
            assert_eq!(
                three.wdiv(&two).unwrap().0,
                U256::from(1_500_000_000_000_000_000u128)
            );

            let half_ray = Decimal::from_scaled(RAY / 2);
            assert_eq!(
                Decimal::from_plain(10).unwrap().rmul(&half_ray).unwrap(),
                Decimal::from_plain(5).unwrap()
            );
            assert_eq!(
                Decimal::from_plain(10).unwrap().rdiv(&half_ray).unwrap(),
                Decimal::from_plain(20).unwrap()
            );
        }

        #[test]
        fn test_add_sub() {
            let a = Decimal::from_plain(5).unwrap();
            let b = Decimal::from_plain(3).unwrap();

            assert_eq!(a.add(&b).unwrap(), Decimal::from_plain(8).unwrap());
            assert_eq!(a.sub(&b).unwrap(), Decimal::from_plain(2).unwrap());
            assert_eq!(b.sub(&a).err(), Some(MathOverflow.into()));
            assert_eq!(b.saturating_sub(&a), Decimal::ZERO);
            assert_eq!(
                Decimal::from_scaled(U256::MAX).add(&Decimal::ONE).err(),
                Some(MathOverflow.into())
            );
        }

        #[test]
        fn test_wad_rad_conversions() {
            let wad = Decimal::from_plain(3).unwrap();
            let rad = wad.wad_to_rad().unwrap();
            assert_eq!(rad.0, U256::from(3u64) * RAD_U256);
            assert_eq!(rad.rad_to_wad(Rounding::Floor).unwrap(), wad);

            let rad_with_remainder = Decimal::from_scaled(rad.0 + U256::one());
            assert_eq!(
                rad_with_remainder.rad_to_wad(Rounding::Floor).unwrap(),
                wad
            );
            assert_eq!(
                rad_with_remainder.rad_to_wad(Rounding::Ceiling).unwrap().0,
                wad.0 + U256::one()
            );
        }

        #[test]
        fn test_div_by_zero() {
            let a = Decimal::from_plain(100).unwrap();
            assert_eq!(a.wdiv(&Decimal::ZERO).err(), Some(MathOverflow.into()));
            assert_eq!(
                mul_div_floor(U256::one(), U256::one(), U256::zero()).err(),
                Some(MathOverflow.into())
            );
        }

        #[test]
        fn test_mul_div_floor_wide_intermediate() {
            // The product overflows 256 bits, the quotient doesn't
            let result = mul_div_floor(U256::MAX, U256::from(2u8), U256::from(4u8)).unwrap();
            assert_eq!(result, U256::MAX / 2);

            assert_eq!(
                mul_div_floor(U256::MAX, U256::from(2u8), U256::one()).err(),
                Some(MathOverflow.into())
            );
        }
    }

    mod pow_operations {

        use super::*;

        #[test]
        fn test_ray_pow_edges() {
            assert_eq!(ray_pow(U256::zero(), 0).unwrap(), RAY_U256);
            assert_eq!(ray_pow(U256::zero(), 5).unwrap(), U256::zero());
            assert_eq!(ray_pow(RAY_U256, 0).unwrap(), RAY_U256);
            assert_eq!(ray_pow(RAY_U256, 1_000_000).unwrap(), RAY_U256);

            let rate = U256::from(999_000_000_000_000_000_000_000_000u128);
            assert_eq!(ray_pow(rate, 1).unwrap(), rate);
        }

        #[test]
        fn test_ray_pow_exact_values() {
            let two = RAY_U256 * 2;
            assert_eq!(ray_pow(two, 10).unwrap(), RAY_U256 * 1024);

            let half = RAY_U256 / 2;
            assert_eq!(ray_pow(half, 2).unwrap(), RAY_U256 / 4);

            // 0.999^2 = 0.998001
            let rate = U256::from(999_000_000_000_000_000_000_000_000u128);
            assert_eq!(
                ray_pow(rate, 2).unwrap(),
                U256::from(998_001_000_000_000_000_000_000_000u128)
            );
        }

        #[test]
        fn test_ray_pow_rounds_half_up() {
            // (3 * 10^13)^2 / RAY = 0.9, rounds up to 1
            let base = U256::from(30_000_000_000_000u128);
            assert_eq!(ray_pow(base, 2).unwrap(), U256::one());

            // (2 * 10^13)^2 / RAY = 0.4, rounds down to 0
            let base = U256::from(20_000_000_000_000u128);
            assert_eq!(ray_pow(base, 2).unwrap(), U256::zero());
        }

        #[test]
        fn test_ray_pow_overflow() {
            assert_eq!(
                ray_pow(U256::MAX / 2, 2).err(),
                Some(MathOverflow.into())
            );
        }

        #[test]
        fn test_decimal_ray_pow() {
            let rate = Decimal::from_scaled(RAY / 2);
            assert_eq!(
                rate.ray_pow(3).unwrap(),
                Decimal::from_scaled(RAY / 8)
            );
        }
    }

    proptest! {
        #[test]
        fn mul_div_floor_matches_big_integers(
            a in any::<[u64; 4]>(),
            b in any::<[u64; 4]>(),
            d in any::<[u64; 4]>(),
        ) {
            let (a, b, d) = (U256(a), U256(b), U256(d));
            let result = mul_div_floor(a, b, d);

            if d.is_zero() {
                prop_assert!(result.is_err());
            } else {
                let expected = to_big(a) * to_big(b) / to_big(d);
                if expected > u256_max_big() {
                    prop_assert!(result.is_err());
                } else {
                    prop_assert_eq!(to_big(result.unwrap()), expected);
                }
            }
        }

        #[test]
        fn mul_div_floor_matches_big_integers_on_small_values(
            a in any::<u128>(),
            b in any::<u128>(),
            d in 1..=u128::MAX,
        ) {
            let result = mul_div_floor(U256::from(a), U256::from(b), U256::from(d)).unwrap();
            let expected = BigUint::from(a) * BigUint::from(b) / BigUint::from(d);

            prop_assert_eq!(to_big(result), expected);
        }

        #[test]
        fn ray_pow_matches_reference(
            base in 0..=RAY,
            exponent in 0u64..10_000_000,
        ) {
            let result = ray_pow(U256::from(base), exponent).unwrap();
            let expected = ray_pow_reference(&BigUint::from(base), exponent);

            prop_assert_eq!(to_big(result), expected);
            prop_assert!(result <= RAY_U256);
        }
    }
}
