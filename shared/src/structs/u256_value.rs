use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use spl_math::uint::U256;

/// Storable form of a 256 bit value (little endian limbs), rad amounts don't fit in a u128.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    InitSpace,
    Zeroable,
    Pod,
)]
#[repr(C)]
pub struct U256Value {
    pub limbs: [u64; 4],
}

impl U256Value {
    pub fn to_u256(&self) -> U256 {
        U256(self.limbs)
    }
}

impl From<U256> for U256Value {
    fn from(value: U256) -> Self {
        Self { limbs: value.0 }
    }
}
