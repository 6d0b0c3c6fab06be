//! Program events
//!
//! Emitted for off-chain indexers. Nothing in the program reads them back.

use anchor_lang::prelude::*;

use crate::state::Side;

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub question: String,
    pub close_time: i64,
    pub resolve_after: i64,
    pub fee_bps: u16,
    pub seed_collateral: u64,
    pub seed_shares: u128,
}

#[event]
pub struct SetMinted {
    pub market_id: u64,
    pub holder: Pubkey,
    pub collateral_in: u64,
    pub shares_out: u128,
}

#[event]
pub struct SwapExecuted {
    pub market_id: u64,
    pub trader: Pubkey,
    pub from: Side,
    pub units_in: u128,
    pub units_out: u128,
    pub fee_retained: u128,
    pub yes_reserve: u128,
    pub no_reserve: u128,
}

#[event]
pub struct PairsRedeemed {
    pub market_id: u64,
    pub holder: Pubkey,
    pub pair_units: u128,
    pub collateral_out: u64,
}

#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub outcome: Side,
    pub resolver: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct WinningsRedeemed {
    pub market_id: u64,
    pub holder: Pubkey,
    pub outcome: Side,
    pub units: u128,
    pub collateral_out: u64,
}

#[event]
pub struct FeeRecipientUpdated {
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
pub struct PauseUpdated {
    pub paused: bool,
}
