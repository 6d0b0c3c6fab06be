//! Market Resolution
//!
//! The resolution authority declares the winning side once `resolve_after`
//! has passed. Resolution is irreversible and is the only way a market
//! leaves the unresolved states.
//!
//! ## Resolution Flow
//!
//! 1. Market close time passes (minting and trading stop)
//! 2. `resolve_after` passes
//! 3. The resolver calls `resolve_market` with the result
//! 4. Holders of the winning side redeem through `redeem_winner`

use anchor_lang::prelude::*;

use crate::events::MarketResolved;
use crate::state::{Config, Market, Side};

/// Accounts for market resolution
#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    /// Signer claiming resolution authority
    pub resolver: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Market to resolve
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,
}

impl<'info> ResolveMarket<'info> {
    /// Resolve the market with the winning outcome
    pub fn resolve_market(&mut self, outcome: Side) -> Result<()> {
        let clock = Clock::get()?;
        self.config.resolve(
            &mut self.market,
            &self.resolver.key(),
            outcome,
            clock.unix_timestamp,
        )?;

        emit!(MarketResolved {
            market_id: self.market.id,
            outcome,
            resolver: self.resolver.key(),
            timestamp: clock.unix_timestamp,
        });

        msg!("Market {} resolved: {:?}", self.market.id, outcome);

        Ok(())
    }
}
