use anchor_lang::prelude::*;

use crate::events::ParametersModified;
use crate::state::AuctionHouse;
use crate::utils::{Authority, ParameterUpdate};

/// Modify a parameter of the auction house.
/// Authorized accounts only.
///
/// # Arguments
/// * `caller` - The account modifying the parameter.
pub struct ModifyParameters {
    pub caller: Pubkey,
}

impl ModifyParameters {
    /// Validate the instruction.
    ///
    /// # Checks
    /// * Caller is authorized.
    pub fn validate<A: Authority>(&self, auction_house: &AuctionHouse<A>) -> Result<()> {
        auction_house.validate_authorized(&self.caller)
    }
}

/// Apply a parameter update. The whole parameter set is re-validated and left untouched if the
/// update is rejected.
///
/// Auctions already started keep the max discount and the rate they started with.
///
/// # Arguments
/// * `ctx` - The context of the instruction.
/// * `auction_house` - The auction house.
/// * `update` - The parameter and its new value.
pub fn handler<A: Authority>(
    ctx: ModifyParameters,
    auction_house: &mut AuctionHouse<A>,
    update: ParameterUpdate,
) -> Result<()> {
    ctx.validate(auction_house)?;

    let (params, system_coin_params) =
        update.apply(&auction_house.params, &auction_house.system_coin_params)?;

    auction_house.params = params;
    auction_house.system_coin_params = system_coin_params;

    emit!(ParametersModified {
        parameter: update.name().to_string(),
        value: update.value(),
    });

    Ok(())
}
