use std::collections::BTreeSet;

use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::ADMIN;
use shared::errors::ErrorCode;

/// Decides who may start, terminate and configure auctions.
pub trait Authority {
    fn is_authorized(&self, account: &Pubkey) -> bool;

    /// Grant `account` the authorization. Returns false if it was already authorized.
    fn add(&mut self, account: Pubkey) -> Result<bool>;

    /// Revoke the authorization of `account`. Returns false if it wasn't authorized.
    fn remove(&mut self, account: &Pubkey) -> Result<bool>;
}

/// Set of authorized accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorizations {
    accounts: BTreeSet<Pubkey>,
}

impl Default for Authorizations {
    /// Only the build time admin is authorized.
    fn default() -> Self {
        Self::new(ADMIN)
    }
}

impl Authorizations {
    pub fn new(admin: Pubkey) -> Self {
        Self {
            accounts: BTreeSet::from([admin]),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Authority for Authorizations {
    fn is_authorized(&self, account: &Pubkey) -> bool {
        self.accounts.contains(account)
    }

    fn add(&mut self, account: Pubkey) -> Result<bool> {
        check_condition!(account != Pubkey::default(), NullAddress);

        Ok(self.accounts.insert(account))
    }

    fn remove(&mut self, account: &Pubkey) -> Result<bool> {
        Ok(self.accounts.remove(account))
    }
}
