use anchor_lang::prelude::*;
use spl_math::uint::U256;

/// The ledger owning collateral and internal system coin balances.
///
/// Implementations must fail (and leave balances untouched) instead of overdrawing an account.
///
/// An instruction may make several calls and fail after some of them succeeded. The host runs
/// every instruction atomically and must revert the calls already made when the instruction
/// returns an error, the auction house never undoes a transfer itself.
pub trait SafeEngine {
    /// Move `amount` (D18) of `collateral_type` from `src` to `dst`.
    fn transfer_collateral(
        &mut self,
        collateral_type: &Pubkey,
        src: &Pubkey,
        dst: &Pubkey,
        amount: u128,
    ) -> Result<()>;

    /// Move `rad` (D45) internal system coins from `src` to `dst`.
    fn transfer_internal_coins(&mut self, src: &Pubkey, dst: &Pubkey, rad: U256) -> Result<()>;
}
