use anchor_lang::prelude::*;

/// A price and whether the source considers it usable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FeedReading {
    /// D18
    pub value: u128,
    pub is_valid: bool,
}

pub trait PriceFeed {
    fn get_result_with_validity(&self) -> Result<FeedReading>;

    /// The value of the feed when it's usable. A failing call, an invalid reading or a zero
    /// price are all treated as the feed being unavailable.
    fn usable_value(&self) -> Option<u128> {
        match self.get_result_with_validity() {
            Ok(FeedReading {
                value,
                is_valid: true,
            }) if value > 0 => Some(value),
            _ => None,
        }
    }
}

/// Source of the redemption price. Reading it may update the price, hence `&mut`.
pub trait OracleRelayer {
    /// D27
    fn redemption_price(&mut self) -> Result<u128>;
}

/// The feeds consulted when pricing a bid.
#[derive(Clone, Copy)]
pub struct PriceFeeds<'a> {
    /// Delayed, canonical collateral price. Must be usable for any bid to go through.
    pub collateral_fsm: &'a dyn PriceFeed,

    /// Live collateral market price.
    pub collateral_median: Option<&'a dyn PriceFeed>,

    /// System coin market price, reported in D18.
    pub system_coin_oracle: Option<&'a dyn PriceFeed>,
}

impl<'a> PriceFeeds<'a> {
    pub fn new(collateral_fsm: &'a dyn PriceFeed) -> Self {
        Self {
            collateral_fsm,
            collateral_median: None,
            system_coin_oracle: None,
        }
    }

    pub fn with_collateral_median(mut self, feed: &'a dyn PriceFeed) -> Self {
        self.collateral_median = Some(feed);
        self
    }

    pub fn with_system_coin_oracle(mut self, feed: &'a dyn PriceFeed) -> Self {
        self.system_coin_oracle = Some(feed);
        self
    }

    /// D18, 0 when the FSM isn't usable.
    pub fn collateral_fsm_price(&self) -> u128 {
        self.collateral_fsm.usable_value().unwrap_or(0)
    }

    /// D18, 0 when there's no usable live collateral price.
    pub fn collateral_median_price(&self) -> u128 {
        self.collateral_median
            .and_then(|feed| feed.usable_value())
            .unwrap_or(0)
    }

    /// D18, 0 when there's no usable system coin market price.
    pub fn system_coin_market_price(&self) -> u128 {
        self.system_coin_oracle
            .and_then(|feed| feed.usable_value())
            .unwrap_or(0)
    }
}
