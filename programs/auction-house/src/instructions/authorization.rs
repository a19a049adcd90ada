use anchor_lang::prelude::*;

use crate::events::{AuthorizationAdded, AuthorizationRemoved};
use crate::state::AuctionHouse;
use crate::utils::Authority;

/// Add or remove an authorized account.
/// Authorized accounts only.
///
/// # Arguments
/// * `caller` - The authorized account making the change.
pub struct UpdateAuthorization {
    pub caller: Pubkey,
}

impl UpdateAuthorization {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Caller is authorized.
    pub fn validate<A: Authority>(&self, auction_house: &AuctionHouse<A>) -> Result<()> {
        auction_house.validate_authorized(&self.caller)
    }
}

/// Authorize `account`. Authorizing an account twice is a no-op and emits nothing.
pub fn add_handler<A: Authority>(
    ctx: UpdateAuthorization,
    auction_house: &mut AuctionHouse<A>,
    account: Pubkey,
) -> Result<()> {
    ctx.validate(auction_house)?;

    if auction_house.authority.add(account)? {
        emit!(AuthorizationAdded { account });
    }

    Ok(())
}

/// Revoke the authorization of `account`. Callers may revoke themselves.
pub fn remove_handler<A: Authority>(
    ctx: UpdateAuthorization,
    auction_house: &mut AuctionHouse<A>,
    account: Pubkey,
) -> Result<()> {
    ctx.validate(auction_house)?;

    if auction_house.authority.remove(&account)? {
        emit!(AuthorizationRemoved { account });
    }

    Ok(())
}
