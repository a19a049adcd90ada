use anchor_lang::prelude::*;
use shared::errors::ErrorCode::{InexistentAuction, MathOverflow};
use spl_math::uint::U256;

use crate::state::{Auction, AuctionStore};
use crate::utils::NEUTRAL_DISCOUNT;

impl AuctionStore {
    /// Id the next started auction will get.
    pub fn next_id(&self) -> Result<u64> {
        Ok(self.auctions_started.checked_add(1).ok_or(MathOverflow)?)
    }

    /// Store a new auction under a fresh id.
    ///
    /// # Returns
    /// * `u64` - The id of the auction.
    pub fn start(&mut self, auction: Auction) -> Result<u64> {
        let id = self.next_id()?;

        self.auctions_started = id;
        self.records.insert(id, auction);

        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&Auction> {
        self.records.get(&id)
    }

    /// The auction under `id`, failing if it doesn't exist (never started or already closed).
    pub fn get_active(&self, id: u64) -> Result<&Auction> {
        Ok(self.records.get(&id).ok_or(InexistentAuction)?)
    }

    /// Replace an existing record.
    pub fn update(&mut self, id: u64, auction: Auction) -> Result<()> {
        let record = self.records.get_mut(&id).ok_or(InexistentAuction)?;
        *record = auction;

        Ok(())
    }

    /// Delete the record, its id is never handed out again.
    pub fn remove(&mut self, id: u64) -> Result<Auction> {
        Ok(self.records.remove(&id).ok_or(InexistentAuction)?)
    }

    /// The record under `id`, or an empty record if there's none.
    pub fn auction(&self, id: u64) -> Auction {
        self.get(id).copied().unwrap_or_default()
    }

    /// D18, 0 for unknown ids.
    pub fn remaining_to_sell(&self, id: u64) -> u128 {
        self.get(id).map(|auction| auction.amount_to_sell).unwrap_or(0)
    }

    /// D45, 0 for unknown ids.
    pub fn remaining_to_raise(&self, id: u64) -> U256 {
        self.get(id)
            .map(|auction| auction.amount_to_raise)
            .unwrap_or_default()
    }

    /// The default key for unknown ids.
    pub fn forgone_collateral_receiver(&self, id: u64) -> Pubkey {
        self.get(id)
            .map(|auction| auction.forgone_collateral_receiver)
            .unwrap_or_default()
    }

    /// D27, [`NEUTRAL_DISCOUNT`] for unknown ids.
    pub fn next_discount(&self, id: u64, current_time: u64) -> Result<u128> {
        match self.get(id) {
            Some(auction) => auction.next_discount(current_time),
            None => Ok(NEUTRAL_DISCOUNT),
        }
    }

    /// Number of auctions currently active.
    pub fn active_count(&self) -> usize {
        self.records.len()
    }
}
