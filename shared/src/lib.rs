//! Shared constants, errors and fixed point math for the collateral auction house.
//!
//! # Modules
//!
//! * `constants` - Scales (wad, ray, rad), default parameters and the build time admin.
//! * `errors` - Errors for the auction house.
//! * `structs` - Storable values, used within events.
//! * `utils` - Fixed point math.
pub mod constants;
pub mod errors;
pub mod structs;
pub mod utils;
