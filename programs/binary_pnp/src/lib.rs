//! # Binary PNP: Collateralised YES/NO Prediction Markets
//!
//! Users lock collateral to mint complete YES + NO claim sets, trade one side
//! for the other against a constant-product pool, and turn claims back into
//! collateral either as matched pairs (before close) or as winning claims
//! (after resolution).
//!
//! ## Solvency
//!
//! Every YES claim in existence has a NO twin minted alongside it against one
//! unit of collateral. Swaps only move claims between holders and the pool,
//! so the winning side outstanding can never exceed the collateral tracked
//! for the market. All conversions round down.

use anchor_lang::prelude::*;

pub mod amm;
pub mod authority;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;
pub mod vault;

#[cfg(test)]
mod tests;

pub use amm::*;
pub use instructions::*;
pub use state::Side;

// Replace with your deployed program ID
declare_id!("BPnpAmm1111111111111111111111111111111111111");

/// Main Binary PNP program
#[program]
pub mod binary_pnp {
    use super::*;

    /// Initialize the protocol with global configuration
    pub fn initialize(
        ctx: Context<Initialize>,
        resolver: Pubkey,
        fee_recipient: Pubkey,
    ) -> Result<()> {
        ctx.accounts.initialize(resolver, fee_recipient, &ctx.bumps)
    }

    /// Create and seed a new market, returning its identifier
    pub fn create_market(
        ctx: Context<CreateMarket>,
        question: String,
        close_time: i64,
        resolve_after: i64,
        seed_collateral: u64,
        fee_bps: u16,
    ) -> Result<u64> {
        ctx.accounts.create_market(
            question,
            close_time,
            resolve_after,
            seed_collateral,
            fee_bps,
            &ctx.bumps,
        )
    }

    /// Lock collateral for an equal number of YES and NO claims
    pub fn mint_set(ctx: Context<MintSet>, collateral_amount: u64) -> Result<u128> {
        ctx.accounts.mint_set(collateral_amount, &ctx.bumps)
    }

    /// Mint a set and sell the NO half for more YES
    pub fn buy_yes(
        ctx: Context<MintSet>,
        collateral_amount: u64,
        min_out_units: u128,
    ) -> Result<u128> {
        ctx.accounts
            .buy(Side::Yes, collateral_amount, min_out_units, &ctx.bumps)
    }

    /// Mint a set and sell the YES half for more NO
    pub fn buy_no(
        ctx: Context<MintSet>,
        collateral_amount: u64,
        min_out_units: u128,
    ) -> Result<u128> {
        ctx.accounts
            .buy(Side::No, collateral_amount, min_out_units, &ctx.bumps)
    }

    /// Swap claims of one side for the other
    pub fn swap(
        ctx: Context<Swap>,
        from: Side,
        in_units: u128,
        min_out_units: u128,
    ) -> Result<u128> {
        ctx.accounts.swap(from, in_units, min_out_units)
    }

    /// Burn matched YES + NO pairs for collateral while the market is open
    pub fn redeem_pairs(ctx: Context<Redeem>, pair_units: u128) -> Result<u64> {
        ctx.accounts.redeem_pairs(pair_units)
    }

    /// Resolve the market (resolution authority only)
    pub fn resolve_market(ctx: Context<ResolveMarket>, outcome: Side) -> Result<()> {
        ctx.accounts.resolve_market(outcome)
    }

    /// Redeem winning claims for collateral
    pub fn redeem_winner(ctx: Context<Redeem>, units: u128) -> Result<u64> {
        ctx.accounts.redeem_winner(units)
    }

    /// Implied YES/NO probabilities (1e18 = certainty)
    pub fn get_prices(ctx: Context<GetPrices>) -> Result<Prices> {
        ctx.accounts.get_prices()
    }

    /// Change the protocol fee recipient (admin only)
    pub fn update_fee_recipient(ctx: Context<UpdateConfig>, fee_recipient: Pubkey) -> Result<()> {
        ctx.accounts.update_fee_recipient(fee_recipient)
    }

    /// Pause or resume market creation, minting and trading (admin only)
    pub fn set_paused(ctx: Context<UpdateConfig>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }
}
