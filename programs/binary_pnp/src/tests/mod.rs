//! Ledger-level tests
//!
//! These drive the `Config`/`Market`/`Position` API directly with an explicit
//! clock, so they run on the host without a validator.

mod ledger_flow;

use anchor_lang::prelude::*;

use crate::state::{Config, Market, MarketParams};

pub(crate) const NOW: i64 = 1_700_000_000;
pub(crate) const ONE: u128 = 1_000_000_000_000_000_000;

pub(crate) fn config(collateral_decimals: u8) -> Config {
    Config {
        admin: Pubkey::new_unique(),
        resolver: Pubkey::new_unique(),
        fee_recipient: Pubkey::new_unique(),
        collateral_mint: Pubkey::new_unique(),
        collateral_decimals,
        market_count: 0,
        bump: 255,
        paused: false,
    }
}

pub(crate) fn params(seed_collateral: u64, fee_bps: u16) -> MarketParams {
    MarketParams {
        question: "Will the bill pass before the end of session?".to_string(),
        close_time: NOW + 86_400,
        resolve_after: NOW + 2 * 86_400,
        seed_collateral,
        fee_bps,
    }
}

pub(crate) fn open(config: &mut Config, seed_collateral: u64, fee_bps: u16) -> Market {
    config
        .register_market(params(seed_collateral, fee_bps), Pubkey::new_unique(), NOW, 254)
        .unwrap()
}
