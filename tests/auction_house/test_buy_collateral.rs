//! Tests for buying collateral

#[cfg(test)]
mod tests {

    use anchor_lang::prelude::Pubkey;
    use auction_house::utils::{AuctionParams, AuctionStatus, SystemCoinParams};
    use log::info;
    use proptest::prelude::*;
    use shared::constants::{RAY, RAY_U256, WAD};
    use shared::errors::ErrorCode::*;
    use spl_math::uint::U256;

    use crate::fixtures::{rad, TestFeed, TestFixture};
    use crate::shared::logger::init_logger;

    const START: u64 = 1_000;

    fn decaying_params() -> AuctionParams {
        AuctionParams {
            min_discount: 950_000_000_000_000_000_000_000_000,
            max_discount: 800_000_000_000_000_000_000_000_000,
            per_second_discount_update_rate: 999_000_000_000_000_000_000_000_000,
            ..AuctionParams::default()
        }
    }

    /// 100 collateral to raise 100 000 system coins, at 2000 per collateral.
    fn setup_auction() -> (TestFixture, u64) {
        init_logger();

        let mut fixture = TestFixture::new();
        let id = fixture.start(100 * WAD, rad(100_000), START).unwrap();

        (fixture, id)
    }

    #[test]
    fn test_partial_buy() {
        let (mut fixture, id) = setup_auction();
        let collateral_type = fixture.collateral_type;
        let bidder = fixture.bidder;

        let receipt = fixture.buy(id, 50_000 * WAD, START).unwrap();
        info!("{:?}", receipt);

        assert_eq!(receipt.adjusted_bid, 50_000 * WAD);
        assert_eq!(receipt.bought_collateral, 25 * WAD);
        assert_eq!(receipt.status, AuctionStatus::Active);
        assert_eq!(receipt.leftover_collateral, 0);

        assert_eq!(fixture.auction_house.remaining_amount_to_sell(id), 75 * WAD);
        assert_eq!(fixture.auction_house.amount_to_raise(id), rad(50_000));
        assert_eq!(fixture.auction_house.last_read_redemption_price, RAY);

        // Effects on the ledger
        assert_eq!(
            fixture.safe_engine.collateral_of(&collateral_type, &bidder),
            25 * WAD
        );
        assert_eq!(
            fixture
                .safe_engine
                .collateral_of(&collateral_type, &fixture.custody()),
            75 * WAD
        );
        assert_eq!(
            fixture
                .safe_engine
                .coins_of(&fixture.auction_income_recipient),
            rad(50_000)
        );
        assert_eq!(
            fixture.safe_engine.coins_of(&bidder),
            rad(10_000_000 - 50_000)
        );

        // Effects on the liquidation engine
        assert_eq!(fixture.liquidation_engine.removals, vec![rad(50_000)]);
        assert_eq!(fixture.liquidation_engine.coins_on_auction, rad(50_000));
    }

    #[test]
    fn test_bid_above_amount_to_raise_settles() {
        let (mut fixture, id) = setup_auction();
        let collateral_type = fixture.collateral_type;
        let receiver = fixture.forgone_collateral_receiver;

        fixture.buy(id, 50_000 * WAD, START).unwrap();

        // Capped to what's left, plus the smallest unit
        assert_eq!(
            fixture
                .auction_house
                .get_adjusted_bid(id, 60_000 * WAD)
                .unwrap(),
            (true, 50_000 * WAD + 1)
        );

        let receipt = fixture.buy(id, 60_000 * WAD, START).unwrap();

        assert_eq!(receipt.adjusted_bid, 50_000 * WAD + 1);
        assert_eq!(receipt.bought_collateral, 25 * WAD);
        assert_eq!(receipt.status, AuctionStatus::Settled);
        assert_eq!(receipt.leftover_collateral, 50 * WAD);

        // Record deleted, id not released
        assert!(fixture.auction_house.auctions.get(id).is_none());
        assert_eq!(fixture.auction_house.remaining_amount_to_sell(id), 0);
        assert_eq!(fixture.auction_house.amount_to_raise(id), U256::zero());
        assert_eq!(
            fixture.auction_house.forgone_collateral_receiver(id),
            Pubkey::default()
        );
        assert_eq!(fixture.auction_house.auctions_started(), 1);

        // Leftover collateral to the forgone collateral receiver, nothing left in custody
        assert_eq!(
            fixture.safe_engine.collateral_of(&collateral_type, &receiver),
            50 * WAD
        );
        assert_eq!(
            fixture
                .safe_engine
                .collateral_of(&collateral_type, &fixture.custody()),
            0
        );
        assert_eq!(
            fixture
                .safe_engine
                .coins_of(&fixture.auction_income_recipient),
            rad(100_000) + RAY_U256
        );

        assert_eq!(
            fixture.liquidation_engine.removals,
            vec![rad(50_000), rad(50_000)]
        );
        assert_eq!(fixture.liquidation_engine.coins_on_auction, U256::zero());

        assert_eq!(
            fixture.auction_house.get_adjusted_bid(id, 10 * WAD).unwrap(),
            (false, 10 * WAD)
        );
    }

    #[test]
    fn test_buy_everything_for_sale_settles() {
        init_logger();

        let mut fixture = TestFixture::new();
        let collateral_type = fixture.collateral_type;
        let bidder = fixture.bidder;
        let id = fixture.start(10 * WAD, rad(100_000), START).unwrap();

        // 30 000 would buy 15 collateral, only 10 are for sale
        let receipt = fixture.buy(id, 30_000 * WAD, START).unwrap();

        assert_eq!(receipt.adjusted_bid, 30_000 * WAD);
        assert_eq!(receipt.bought_collateral, 10 * WAD);
        assert_eq!(receipt.status, AuctionStatus::Settled);
        assert_eq!(receipt.leftover_collateral, 0);

        assert!(fixture.auction_house.auctions.get(id).is_none());
        assert_eq!(
            fixture.safe_engine.collateral_of(&collateral_type, &bidder),
            10 * WAD
        );

        // The whole amount is taken off auction, not only what was raised
        assert_eq!(fixture.liquidation_engine.removals, vec![rad(100_000)]);
        assert_eq!(fixture.liquidation_engine.coins_on_auction, U256::zero());
    }

    #[test]
    fn test_buy_at_near_zero_price_takes_everything_for_sale() {
        init_logger();

        let mut fixture = TestFixture::new();
        fixture.collateral_fsm = TestFeed::valid(1);
        let receiver = fixture.forgone_collateral_receiver;
        let collateral_type = fixture.collateral_type;
        let id = fixture.start(100 * WAD, rad(100_000), START).unwrap();

        // The raw amount bought doesn't fit in a u128, it is capped first
        assert_eq!(
            fixture.collateral_bought(id, 1_000 * WAD, START).unwrap(),
            (100 * WAD, 1_000 * WAD)
        );
        assert_eq!(
            fixture
                .approximate_collateral_bought(id, 1_000 * WAD)
                .unwrap(),
            (100 * WAD, 1_000 * WAD)
        );

        let receipt = fixture.buy(id, 1_000 * WAD, START).unwrap();

        assert_eq!(receipt.bought_collateral, 100 * WAD);
        assert_eq!(receipt.status, AuctionStatus::Settled);
        assert_eq!(receipt.leftover_collateral, 0);
        assert_eq!(
            fixture.safe_engine.collateral_of(&collateral_type, &receiver),
            0
        );
        assert_eq!(fixture.liquidation_engine.removals, vec![rad(100_000)]);
    }

    #[test]
    fn test_invalid_bids() {
        let (mut fixture, id) = setup_auction();
        let before = fixture.auction_house.auctions(id);

        for wad in [0, 4 * WAD, 5 * WAD - 1] {
            assert_eq!(
                fixture.buy(id, wad, START).err(),
                Some(InvalidBid.into())
            );
        }

        assert_eq!(fixture.auction_house.auctions(id), before);
        assert_eq!(fixture.safe_engine.coins_of(&fixture.auction_income_recipient), U256::zero());
        assert!(fixture.liquidation_engine.removals.is_empty());
        assert_eq!(fixture.oracle_relayer.reads, 0);

        // Exactly the minimum bid goes through
        assert!(fixture.buy(id, 5 * WAD, START).is_ok());
    }

    #[test]
    fn test_buy_inexistent_auction() {
        let (mut fixture, id) = setup_auction();

        assert_eq!(
            fixture.buy(id + 1, 10 * WAD, START).err(),
            Some(InexistentAuction.into())
        );

        fixture.buy(id, 200_000 * WAD, START).unwrap();

        assert_eq!(
            fixture.buy(id, 10 * WAD, START).err(),
            Some(InexistentAuction.into())
        );
    }

    #[test]
    fn test_buy_with_invalid_collateral_feed() {
        let (mut fixture, id) = setup_auction();
        let before = fixture.auction_house.auctions(id);

        for feed in [
            TestFeed::invalid(2_000 * WAD),
            TestFeed::valid(0),
            TestFeed::failing(),
        ] {
            fixture.collateral_fsm = feed;

            assert_eq!(
                fixture.buy(id, 10 * WAD, START + 10).err(),
                Some(CollateralFeedInvalid.into())
            );
        }

        assert_eq!(fixture.auction_house.auctions(id), before);
        assert_eq!(fixture.auction_house.last_read_redemption_price, 0);
        assert_eq!(fixture.safe_engine.transfers, 1);
    }

    #[test]
    fn test_buy_with_null_redemption_price() {
        let (mut fixture, id) = setup_auction();
        fixture.oracle_relayer.redemption_price = 0;

        assert_eq!(
            fixture.buy(id, 10 * WAD, START).err(),
            Some(InvalidRedemptionPrice.into())
        );
    }

    #[test]
    fn test_buy_null_bought_amount() {
        let (mut fixture, id) = setup_auction();
        fixture.collateral_fsm = TestFeed::valid(100_000_000_000_000_000_000_000_000_000_000_000_000);

        assert_eq!(
            fixture.buy(id, 5 * WAD, START).err(),
            Some(NullBoughtAmount.into())
        );
        assert_eq!(fixture.auction_house.remaining_amount_to_sell(id), 100 * WAD);
    }

    #[test]
    fn test_buy_leaving_dust() {
        init_logger();

        let mut fixture = TestFixture::new();
        let amount_to_raise = rad(100) + U256::from(RAY / 2);
        let id = fixture.start(100 * WAD, amount_to_raise, START).unwrap();

        assert_eq!(
            fixture.auction_house.get_adjusted_bid(id, 100 * WAD).unwrap(),
            (false, 100 * WAD)
        );
        assert_eq!(
            fixture.buy(id, 100 * WAD, START).err(),
            Some(InvalidLeftToRaise.into())
        );
        assert_eq!(fixture.auction_house.amount_to_raise(id), amount_to_raise);

        // Paying one more unit covers the remainder
        let receipt = fixture.buy(id, 100 * WAD + 1, START).unwrap();
        assert_eq!(receipt.status, AuctionStatus::Settled);
    }

    #[test]
    fn test_buy_without_enough_coins() {
        let (mut fixture, id) = setup_auction();
        let collateral_type = fixture.collateral_type;
        let poor_bidder = Pubkey::new_unique();
        let before = fixture.auction_house.auctions(id);

        assert_eq!(
            fixture.buy_from(poor_bidder, id, 10 * WAD, START + 5).err(),
            Some(InsufficientBalance.into())
        );

        assert_eq!(fixture.auction_house.auctions(id), before);
        assert_eq!(fixture.auction_house.last_read_redemption_price, 0);
        assert_eq!(
            fixture
                .safe_engine
                .collateral_of(&collateral_type, &fixture.custody()),
            100 * WAD
        );
        assert!(fixture.liquidation_engine.removals.is_empty());
    }

    #[test]
    fn test_buy_from_empty_custody_writes_nothing() {
        let (mut fixture, id) = setup_auction();
        let collateral_type = fixture.collateral_type;
        let custody = fixture.custody();
        let before = fixture.auction_house.auctions(id);

        fixture
            .safe_engine
            .collateral
            .remove(&(collateral_type, custody));

        // The payment went through, the collateral transfer fails after it
        assert_eq!(
            fixture.buy(id, 10 * WAD, START + 5).err(),
            Some(InsufficientBalance.into())
        );

        assert_eq!(fixture.auction_house.auctions(id), before);
        assert_eq!(fixture.auction_house.last_read_redemption_price, 0);
        assert!(fixture.liquidation_engine.removals.is_empty());
        assert_eq!(
            fixture
                .safe_engine
                .collateral_of(&collateral_type, &fixture.bidder),
            0
        );
    }

    #[test]
    fn test_buy_applies_discount_decay() {
        init_logger();

        let mut fixture = TestFixture::with_params(decaying_params(), SystemCoinParams::default());
        let id = fixture.start(100 * WAD, rad(100_000), START).unwrap();

        // 2000 * 0.95 * 0.999
        let price = 1_898_100_000_000_000_000_000;
        let receipt = fixture.buy(id, price, START + 1).unwrap();

        assert_eq!(receipt.bought_collateral, WAD);

        let auction = fixture.auction_house.auctions(id);
        assert_eq!(auction.current_discount, 949_050_000_000_000_000_000_000_000);
        assert_eq!(auction.latest_discount_update_time, START + 1);
    }

    #[test]
    fn test_buy_with_live_prices() {
        init_logger();

        let mut fixture = TestFixture::new();
        fixture.collateral_median = Some(TestFeed::valid(1_500 * WAD));
        fixture.system_coin_oracle = Some(TestFeed::valid(WAD / 2));
        fixture.oracle_relayer.redemption_price = 2 * RAY;

        let id = fixture.start(100 * WAD, rad(100_000), START).unwrap();

        // Collateral floored at 1800, system coin at the redemption price (default bounds)
        let receipt = fixture.buy(id, 900 * WAD, START).unwrap();

        assert_eq!(receipt.bought_collateral, WAD);
        assert_eq!(fixture.auction_house.last_read_redemption_price, 2 * RAY);
    }

    #[test]
    fn test_approximate_matches_real_buy() {
        init_logger();

        let mut fixture = TestFixture::with_params(decaying_params(), SystemCoinParams::default());
        fixture.collateral_median = Some(TestFeed::valid(1_950 * WAD));
        let id = fixture.start(100 * WAD, rad(100_000), START).unwrap();

        let bid = 1_234 * WAD;
        let now = START + 50;

        // Refresh the cached redemption price and discount
        let (bought, adjusted_bid) = fixture.collateral_bought(id, bid, now).unwrap();
        let (approximate, approximate_bid) = fixture.approximate_collateral_bought(id, bid).unwrap();

        assert_eq!((approximate, approximate_bid), (bought, adjusted_bid));

        let receipt = fixture.buy(id, bid, now).unwrap();

        assert_eq!(receipt.bought_collateral, approximate);
        assert_eq!(receipt.adjusted_bid, approximate_bid);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn bids_never_oversell(
            bids in prop::collection::vec((1u128..150_000_000, 0u64..500), 1..12),
        ) {
            let mut fixture = TestFixture::with_params(decaying_params(), SystemCoinParams::default());
            let collateral_type = fixture.collateral_type;
            let bidder = fixture.bidder;
            let receiver = fixture.forgone_collateral_receiver;
            let id = fixture.start(100 * WAD, rad(100_000), 0).unwrap();

            let mut now = 0;
            let mut previous = fixture.auction_house.auctions(id);

            for (milli_coins, step) in bids {
                now += step;
                let result = fixture.buy(id, milli_coins * WAD / 1_000, now);

                let current = fixture.auction_house.auctions(id);
                if result.is_err() {
                    prop_assert_eq!(current, previous);
                }

                prop_assert!(current.amount_to_sell <= previous.amount_to_sell);
                prop_assert!(current.amount_to_raise <= previous.amount_to_raise);
                prop_assert!(current.amount_to_raise.is_zero() || current.amount_to_raise >= RAY_U256);
                if fixture.auction_house.auctions.get(id).is_some() {
                    prop_assert!(current.current_discount <= previous.current_discount);
                    prop_assert!(current.current_discount >= current.max_discount);
                }

                // Collateral is only ever moved around, never created
                let total = fixture.safe_engine.collateral_of(&collateral_type, &fixture.custody())
                    + fixture.safe_engine.collateral_of(&collateral_type, &bidder)
                    + fixture.safe_engine.collateral_of(&collateral_type, &receiver);
                prop_assert_eq!(total, 100 * WAD);
                prop_assert_eq!(
                    fixture.safe_engine.collateral_of(&collateral_type, &fixture.custody()),
                    current.amount_to_sell
                );

                previous = current;
            }
        }
    }
}
