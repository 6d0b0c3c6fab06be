//! Claim Trading
//!
//! Swaps between YES and NO claims against the market's constant-product
//! pool, plus the buy composites that mint a complete set and immediately
//! sell the unwanted half.

use anchor_lang::prelude::*;

use crate::events::SwapExecuted;
use crate::instructions::{MintSet, MintSetBumps};
use crate::state::{Config, Market, Position, Side};

/// Accounts for a claim swap
#[derive(Accounts)]
pub struct Swap<'info> {
    /// Trader
    pub holder: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Market being traded on
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    /// Trader's claim balances
    #[account(
        mut,
        seeds = [Position::SEED, market.key().as_ref(), holder.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,
}

impl<'info> Swap<'info> {
    /// Sell `in_units` claims of `from` for the opposite side
    pub fn swap(&mut self, from: Side, in_units: u128, min_out_units: u128) -> Result<u128> {
        let now = Clock::get()?.unix_timestamp;

        let quote = self.config.swap(
            &mut self.market,
            &mut self.position,
            from,
            in_units,
            min_out_units,
            now,
        )?;

        emit_swap(
            &self.market,
            self.holder.key(),
            from,
            in_units,
            quote.amount_out,
            quote.fee_units,
        );

        Ok(quote.amount_out)
    }
}

impl<'info> MintSet<'info> {
    /// Buy `side` with collateral: mint a complete set, then sell the
    /// opposite half of it into the pool
    ///
    /// Returns the claims received from the embedded swap; the slippage
    /// bound applies to that swap.
    pub fn buy(
        &mut self,
        side: Side,
        amount: u64,
        min_out_units: u128,
        bumps: &MintSetBumps,
    ) -> Result<u128> {
        let now = Clock::get()?.unix_timestamp;
        self.bind_position(bumps)?;

        let (shares, quote) = self.config.buy(
            &mut self.market,
            &mut self.position,
            side,
            amount,
            min_out_units,
            now,
        )?;

        self.collect(amount, shares)?;
        emit_swap(
            &self.market,
            self.holder.key(),
            side.opposite(),
            shares,
            quote.amount_out,
            quote.fee_units,
        );

        Ok(quote.amount_out)
    }
}

fn emit_swap(
    market: &Market,
    trader: Pubkey,
    from: Side,
    units_in: u128,
    units_out: u128,
    fee_retained: u128,
) {
    emit!(SwapExecuted {
        market_id: market.id,
        trader,
        from,
        units_in,
        units_out,
        fee_retained,
        yes_reserve: market.yes_reserve,
        no_reserve: market.no_reserve,
    });
}
