use anchor_lang::prelude::*;
use spl_math::uint::U256;

/// Tracks the system coins currently being raised by auctions, against a system wide cap.
///
/// Always the last collaborator called by an instruction. Reverted by the host like the
/// [`SafeEngine`](super::SafeEngine) if the instruction fails.
pub trait LiquidationEngine {
    /// Release `rad` (D45) from the amount currently on auction.
    fn remove_coins_from_auction(&mut self, rad: U256) -> Result<()>;
}
