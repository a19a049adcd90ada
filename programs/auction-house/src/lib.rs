//! Increasing discount collateral auction house.
//!
//! Sells the collateral seized from unsafe positions for system coins, at a discount to the
//! collateral price that grows over time until the auction has raised what it needs or sold
//! everything.
//!
//! # Modules
//!
//! * `events` - Events emitted on every state change.
//! * `instructions` - Context and handler of every state changing operation.
//! * `state` - The auction house and its auctions.
//! * `utils` - Parameters, price resolution and the interfaces of the external systems.
//!
//! The `auction_house` module is the entry point, read only views are methods of
//! [`state::AuctionHouse`].
use anchor_lang::prelude::*;
use spl_math::uint::U256;

use instructions::*;
use state::AuctionHouse;
use utils::{Authority, BidReceipt, ParameterUpdate};

pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub mod auction_house {

    use super::*;

    /*
    Auction functions
    */
    pub fn start_auction<A: Authority>(
        ctx: StartAuction,
        auction_house: &mut AuctionHouse<A>,
        forgone_collateral_receiver: Pubkey,
        auction_income_recipient: Pubkey,
        amount_to_raise: U256,
        amount_to_sell: u128,
    ) -> Result<u64> {
        start_auction::handler(
            ctx,
            auction_house,
            forgone_collateral_receiver,
            auction_income_recipient,
            amount_to_raise,
            amount_to_sell,
        )
    }

    pub fn buy_collateral<A: Authority>(
        ctx: BuyCollateral,
        auction_house: &mut AuctionHouse<A>,
        auction_id: u64,
        wad: u128,
    ) -> Result<BidReceipt> {
        buy_collateral::handler(ctx, auction_house, auction_id, wad)
    }

    pub fn get_collateral_bought<A: Authority>(
        ctx: GetCollateralBought,
        auction_house: &mut AuctionHouse<A>,
        auction_id: u64,
        wad: u128,
    ) -> Result<(u128, u128)> {
        get_collateral_bought::handler(ctx, auction_house, auction_id, wad)
    }

    pub fn terminate_auction_prematurely<A: Authority>(
        ctx: TerminateAuctionPrematurely,
        auction_house: &mut AuctionHouse<A>,
        auction_id: u64,
    ) -> Result<u128> {
        terminate_auction_prematurely::handler(ctx, auction_house, auction_id)
    }

    /*
    Admin functions
    */
    pub fn modify_parameters<A: Authority>(
        ctx: ModifyParameters,
        auction_house: &mut AuctionHouse<A>,
        update: ParameterUpdate,
    ) -> Result<()> {
        modify_parameters::handler(ctx, auction_house, update)
    }

    pub fn add_authorization<A: Authority>(
        ctx: UpdateAuthorization,
        auction_house: &mut AuctionHouse<A>,
        account: Pubkey,
    ) -> Result<()> {
        authorization::add_handler(ctx, auction_house, account)
    }

    pub fn remove_authorization<A: Authority>(
        ctx: UpdateAuthorization,
        auction_house: &mut AuctionHouse<A>,
        account: Pubkey,
    ) -> Result<()> {
        authorization::remove_handler(ctx, auction_house, account)
    }
}
