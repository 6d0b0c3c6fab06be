use anchor_lang::prelude::*;

use super::{config, open, params, NOW, ONE};
use crate::amm::Prices;
use crate::errors::MarketError;
use crate::state::{MarketPhase, Position, Side};

#[test]
fn test_registry_allocates_increasing_ids() {
    let mut config = config(18);
    let first = open(&mut config, 1_000, 0);
    let second = open(&mut config, 1_000, 0);

    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);
    assert_eq!(config.market_count, 2);
}

#[test]
fn test_rejected_creation_leaves_count_unchanged() {
    let mut config = config(18);
    open(&mut config, 1_000, 0);

    let mut past = params(1_000, 0);
    past.close_time = NOW - 1;
    let err = config
        .register_market(past, Pubkey::new_unique(), NOW, 254)
        .unwrap_err();
    assert_eq!(err, error!(MarketError::InvalidTime));

    let err = config
        .register_market(params(0, 0), Pubkey::new_unique(), NOW, 254)
        .unwrap_err();
    assert_eq!(err, error!(MarketError::InvalidParams));

    assert_eq!(config.market_count, 1);
}

#[test]
fn test_paused_protocol_refuses_new_markets() {
    let mut config = config(18);
    config.paused = true;

    let err = config
        .register_market(params(1_000, 0), Pubkey::new_unique(), NOW, 254)
        .unwrap_err();
    assert_eq!(err, error!(MarketError::ProtocolPaused));
    assert_eq!(config.market_count, 0);
}

#[test]
fn test_new_market_prices_at_fifty_fifty() {
    let mut config = config(6);
    let market = open(&mut config, 123_456_789, 250);

    assert_eq!(market.prices().unwrap(), Prices::NEUTRAL);
    assert_eq!(market.yes_reserve, 123_456_789 * 1_000_000_000_000);
}

#[test]
fn test_mint_swap_walkthrough() {
    // 1000 units of an 18-decimal collateral, no fee
    let mut config = config(18);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000, 0);
    assert_eq!((market.yes_reserve, market.no_reserve), (1_000, 1_000));
    assert_eq!(market.prices().unwrap(), Prices::NEUTRAL);

    let mut alice = Position::default();
    let minted = market.mint_set(&mut alice, 100, scale, NOW).unwrap();
    assert_eq!(minted, 100);
    assert_eq!((alice.yes, alice.no), (100, 100));
    assert_eq!(market.collateral, 1_100);
    // Minting never touches the pool
    assert_eq!((market.yes_reserve, market.no_reserve), (1_000, 1_000));

    // 1000 * 100 / (1000 + 100) = 90.9, truncated
    let quote = market.swap(&mut alice, Side::Yes, 100, 0, NOW).unwrap();
    assert_eq!(quote.amount_out, 90);
    assert_eq!(market.yes_reserve, 1_100);
    assert_eq!(market.no_reserve, 910);
    assert_eq!((alice.yes, alice.no), (0, 190));

    // YES became cheaper
    let prices = market.prices().unwrap();
    assert!(prices.yes < Prices::NEUTRAL.yes);
    assert!(prices.no > Prices::NEUTRAL.no);
}

#[test]
fn test_fee_is_retained_by_the_pool() {
    let mut config = config(18);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000_000, 1_000);
    let mut bob = Position::default();
    market.mint_set(&mut bob, 100_000, scale, NOW).unwrap();

    let quote = market.swap(&mut bob, Side::No, 100_000, 0, NOW).unwrap();
    assert_eq!(quote.fee_units, 10_000);
    assert_eq!(quote.amount_out, 1_000_000 * 90_000 / 1_090_000);
    // The whole input, fee included, lands in the NO reserve
    assert_eq!(market.no_reserve, 1_100_000);
}

#[test]
fn test_buy_yes_and_buy_no() {
    let mut config = config(6);
    let mut market = open(&mut config, 1_000_000_000, 0);
    let mut carol = Position::default();
    let mut dan = Position::default();

    // 100 USDC each way
    let (shares, quote) = config
        .buy(&mut market, &mut carol, Side::Yes, 100_000_000, 90 * ONE, NOW)
        .unwrap();
    assert_eq!(shares, 100 * ONE);
    assert_eq!(carol.no, 0);
    assert_eq!(carol.yes, shares + quote.amount_out);
    assert!(carol.yes > 190 * ONE);
    // The NO half went into the pool
    assert_eq!(market.no_reserve, 1_100 * ONE);

    let (shares, quote) = config
        .buy(&mut market, &mut dan, Side::No, 100_000_000, 0, NOW)
        .unwrap();
    assert_eq!(dan.yes, 0);
    assert_eq!(dan.no, shares + quote.amount_out);
    assert_eq!(market.collateral, 1_200_000_000);
}

#[test]
fn test_buy_past_slippage_bound_changes_nothing() {
    let mut config = config(6);
    let mut market = open(&mut config, 1_000_000_000, 0);
    let mut carol = Position::default();

    // 1000 * 100 / 1100 = 90.9 YES, so asking for 91 must fail
    let err = config
        .buy(&mut market, &mut carol, Side::Yes, 100_000_000, 91 * ONE, NOW)
        .unwrap_err();
    assert_eq!(err, error!(MarketError::Slippage));
    assert_eq!((carol.yes, carol.no), (0, 0));
    assert_eq!(market.collateral, 1_000_000_000);
    assert_eq!(
        (market.yes_reserve, market.no_reserve),
        (1_000 * ONE, 1_000 * ONE)
    );
}

#[test]
fn test_pause_blocks_new_exposure() {
    let mut config = config(18);
    let mut market = open(&mut config, 1_000_000, 0);
    let mut holder = Position::default();
    config.mint_set(&mut market, &mut holder, 1_000, NOW).unwrap();

    config.paused = true;

    assert_eq!(
        config
            .mint_set(&mut market, &mut holder, 1_000, NOW)
            .unwrap_err(),
        error!(MarketError::ProtocolPaused)
    );
    assert_eq!(
        config
            .swap(&mut market, &mut holder, Side::Yes, 500, 0, NOW)
            .unwrap_err(),
        error!(MarketError::ProtocolPaused)
    );
    for side in [Side::Yes, Side::No] {
        assert_eq!(
            config
                .buy(&mut market, &mut holder, side, 1_000, 0, NOW)
                .unwrap_err(),
            error!(MarketError::ProtocolPaused)
        );
    }

    assert_eq!((holder.yes, holder.no), (1_000, 1_000));
    assert_eq!(market.collateral, 1_001_000);
    assert_eq!((market.yes_reserve, market.no_reserve), (1_000_000, 1_000_000));
}

#[test]
fn test_pause_never_blocks_exits_or_resolution() {
    let mut config = config(18);
    let mut market = open(&mut config, 1_000_000, 0);
    let mut holder = Position::default();
    config.mint_set(&mut market, &mut holder, 1_000, NOW).unwrap();

    config.paused = true;

    let payout = config
        .redeem_pairs(&mut market, &mut holder, 400, NOW)
        .unwrap();
    assert_eq!(payout, 400);

    let resolver = config.resolver;
    let later = market.resolve_after;
    config
        .resolve(&mut market, &resolver, Side::No, later)
        .unwrap();

    let (side, payout) = config
        .redeem_winner(&mut market, &mut holder, 600)
        .unwrap();
    assert_eq!((side, payout), (Side::No, 600));
    assert_eq!(market.collateral, 1_000_000);
}

#[test]
fn test_only_the_resolver_resolves() {
    let mut config = config(18);
    let mut market = open(&mut config, 1_000, 0);

    let later = market.resolve_after;
    let err = config
        .resolve(&mut market, &config.admin, Side::Yes, later)
        .unwrap_err();
    assert_eq!(err, error!(MarketError::Unauthorized));
    assert!(!market.resolved);
}

#[test]
fn test_pairs_exit_at_par() {
    let mut config = config(6);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000_000_000, 30);
    let mut dave = Position::default();

    let shares = market.mint_set(&mut dave, 42_000_000, scale, NOW).unwrap();
    let payout = market
        .redeem_pairs(&mut dave, shares, scale, NOW)
        .unwrap();

    assert_eq!(payout, 42_000_000);
    assert_eq!(market.collateral, 1_000_000_000);
    assert_eq!((dave.yes, dave.no), (0, 0));
}

#[test]
fn test_pairs_need_both_sides() {
    let mut config = config(18);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000_000, 0);
    let mut erin = Position::default();

    market.mint_set(&mut erin, 1_000, scale, NOW).unwrap();
    market.swap(&mut erin, Side::Yes, 500, 0, NOW).unwrap();

    let err = market
        .redeem_pairs(&mut erin, 1_000, scale, NOW)
        .unwrap_err();
    assert_eq!(err, error!(MarketError::InsufficientBalance));
    assert!(market.redeem_pairs(&mut erin, 500, scale, NOW).is_ok());
}

#[test]
fn test_lifecycle_to_winner_redemption() {
    let mut config = config(6);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000_000_000, 100);
    let mut yes_holder = Position::default();
    let mut no_holder = Position::default();

    let a = market.mint_set(&mut yes_holder, 250_000_000, scale, NOW).unwrap();
    market.swap(&mut yes_holder, Side::No, a, 0, NOW).unwrap();
    let b = market.mint_set(&mut no_holder, 80_000_000, scale, NOW).unwrap();
    market.swap(&mut no_holder, Side::Yes, b, 0, NOW).unwrap();

    assert_eq!(market.phase(market.close_time), MarketPhase::ClosedUnresolved);
    assert_eq!(
        market
            .mint_set(&mut no_holder, 1, scale, market.close_time)
            .unwrap_err(),
        error!(MarketError::MarketClosed)
    );

    // Nothing pays out before resolution
    assert_eq!(
        market
            .redeem_winner(&mut yes_holder, 1, scale)
            .unwrap_err(),
        error!(MarketError::MarketNotResolved)
    );

    market.resolve(Side::Yes, market.resolve_after).unwrap();

    let deposited = 1_000_000_000u64 + 250_000_000 + 80_000_000;
    let units = yes_holder.yes;
    let (side, payout) = market
        .redeem_winner(&mut yes_holder, units, scale)
        .unwrap();
    assert_eq!(side, Side::Yes);
    assert_eq!(u128::from(payout), units / 1_000_000_000_000);
    assert_eq!(yes_holder.yes, 0);

    // The losing holder keeps inert NO claims and gets nothing for them
    assert!(no_holder.no > 0);
    assert_eq!(no_holder.yes, 0);
    assert_eq!(
        market
            .redeem_winner(&mut no_holder, 1, scale)
            .unwrap_err(),
        error!(MarketError::InsufficientBalance)
    );

    assert_eq!(market.collateral, deposited - payout);
}

#[test]
fn test_resolved_market_blocks_open_market_paths() {
    let mut config = config(18);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000 * 1_000_000, 0);
    let mut holder = Position {
        no: 50,
        ..Default::default()
    };

    let later = market.resolve_after;
    market.resolve(Side::Yes, later).unwrap();

    assert_eq!(
        market.redeem_winner(&mut holder, 50, scale).unwrap_err(),
        error!(MarketError::InsufficientBalance)
    );
    assert_eq!(
        market.mint_set(&mut holder, 50, scale, later).unwrap_err(),
        error!(MarketError::MarketClosed)
    );
    assert_eq!(
        market
            .redeem_pairs(&mut holder, 50, scale, later)
            .unwrap_err(),
        error!(MarketError::MarketClosed)
    );
    assert_eq!(holder.no, 50);
}

#[test]
fn test_zero_amounts_are_rejected() {
    let mut config = config(18);
    let scale = config.share_scale().unwrap();
    let mut market = open(&mut config, 1_000, 0);
    let mut holder = Position::default();

    assert_eq!(
        market.mint_set(&mut holder, 0, scale, NOW).unwrap_err(),
        error!(MarketError::InvalidParams)
    );
    assert_eq!(
        market.swap(&mut holder, Side::Yes, 0, 0, NOW).unwrap_err(),
        error!(MarketError::InvalidParams)
    );
    assert_eq!(
        market.redeem_pairs(&mut holder, 0, scale, NOW).unwrap_err(),
        error!(MarketError::InvalidParams)
    );

    market.resolve(Side::No, market.resolve_after).unwrap();
    assert_eq!(
        market.redeem_winner(&mut holder, 0, scale).unwrap_err(),
        error!(MarketError::InvalidParams)
    );
}
