use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{DUST_FLOOR, RAY};
use shared::errors::ErrorCode;
use shared::utils::Decimal;
use spl_math::uint::U256;

use crate::state::Auction;
use crate::utils::AuctionParams;

impl Auction {
    /// Create a new auction, starting at the minimum discount.
    ///
    /// # Arguments
    /// * `forgone_collateral_receiver` - Receives the collateral left at settlement.
    /// * `auction_income_recipient` - Receives the system coins paid by bidders.
    /// * `amount_to_raise` - D45{system coin}.
    /// * `amount_to_sell` - D18{collateral}.
    /// * `params` - The auction house parameters at start time.
    /// * `current_time` - Seconds.
    pub fn new(
        forgone_collateral_receiver: Pubkey,
        auction_income_recipient: Pubkey,
        amount_to_raise: U256,
        amount_to_sell: u128,
        params: &AuctionParams,
        current_time: u64,
    ) -> Result<Self> {
        let auction = Auction {
            amount_to_sell,
            amount_to_raise,
            current_discount: params.min_discount,
            max_discount: params.max_discount,
            per_second_discount_update_rate: params.per_second_discount_update_rate,
            latest_discount_update_time: current_time,
            forgone_collateral_receiver,
            auction_income_recipient,
        };

        auction.validate_start()?;

        Ok(auction)
    }

    /// Validate a freshly created auction.
    ///
    /// # Checks
    /// * There's collateral to sell.
    /// * There's something to raise, at least the dust floor.
    /// * Receiver and recipient are set.
    pub fn validate_start(&self) -> Result<()> {
        check_condition!(self.amount_to_sell > 0, NoCollateralForSale);
        check_condition!(!self.amount_to_raise.is_zero(), NothingToRaise);
        check_condition!(self.amount_to_raise >= DUST_FLOOR, DustyAuction);

        check_condition!(
            self.forgone_collateral_receiver != Pubkey::default(),
            NullAddress
        );
        check_condition!(
            self.auction_income_recipient != Pubkey::default(),
            NullAddress
        );

        Ok(())
    }

    /// Discount the auction would have at `current_time`, without updating it.
    ///
    /// A `current_time` before the latest update counts as no time elapsed.
    ///
    /// # Returns
    /// * `u128` - D27, never below `max_discount`.
    pub fn next_discount(&self, current_time: u64) -> Result<u128> {
        if self.current_discount <= self.max_discount {
            return Ok(self.max_discount);
        }

        let elapsed = current_time.saturating_sub(self.latest_discount_update_time);

        // D27 = D27 * D27 / D27
        let candidate = Decimal::from_scaled(self.per_second_discount_update_rate)
            .ray_pow(elapsed)?
            .rmul(&Decimal::from_scaled(self.current_discount))?;

        if candidate <= Decimal::from_scaled(self.max_discount) {
            Ok(self.max_discount)
        } else {
            candidate.to_u128()
        }
    }

    /// Move the discount to its value at `current_time`.
    ///
    /// # Returns
    /// * `u128` - The new current discount (D27).
    pub fn apply_discount_update(&mut self, current_time: u64) -> Result<u128> {
        self.current_discount = self.next_discount(current_time)?;
        self.latest_discount_update_time = current_time;

        Ok(self.current_discount)
    }

    pub fn is_closed(&self) -> bool {
        self.amount_to_sell == 0 || self.amount_to_raise.is_zero()
    }

    /// Whether a remaining amount to raise (D45) is acceptable: nothing, or at least the dust floor.
    pub fn is_valid_left_to_raise(left_to_raise: U256) -> bool {
        left_to_raise.is_zero() || left_to_raise >= DUST_FLOOR
    }
}

/// Discount reported for auctions that don't exist, no discount at all.
pub const NEUTRAL_DISCOUNT: u128 = RAY;
