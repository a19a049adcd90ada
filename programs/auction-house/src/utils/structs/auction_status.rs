use anchor_lang::prelude::*;

#[derive(
    AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, PartialEq, Eq, Debug, InitSpace,
)]
pub enum AuctionStatus {
    #[default]
    // amount_to_sell > 0 && amount_to_raise > 0, record exists
    Active = 0,
    // raised everything or sold everything, record deleted
    Settled = 1,
    // closed by an authorized account, record deleted
    Terminated = 2,
}
