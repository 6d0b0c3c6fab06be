//! Claim Ledger
//!
//! One account per (market, holder) carrying both the YES and NO balance.
//! Balances are 18-decimal share units. The account is created on first
//! use and never closed; a zero balance is a normal resting state.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::Side;

/// A holder's claims in one market
///
/// Seeds: ["position", market.key(), holder.key()]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Position {
    /// Market these claims belong to
    pub market: Pubkey,

    /// Owner of the claims
    pub holder: Pubkey,

    /// YES claims (share units)
    pub yes: u128,

    /// NO claims (share units)
    pub no: u128,

    /// PDA bump seed
    pub bump: u8,
}

impl Position {
    pub const SEED: &'static [u8] = b"position";

    /// Stamp owner fields on a freshly created account, or check them on an
    /// existing one
    pub fn bind(&mut self, market: Pubkey, holder: Pubkey, bump: u8) -> Result<()> {
        if self.market == Pubkey::default() {
            self.market = market;
            self.holder = holder;
            self.bump = bump;
            return Ok(());
        }

        require!(
            self.market == market && self.holder == holder,
            MarketError::PositionMismatch
        );
        Ok(())
    }

    pub fn balance(&self, side: Side) -> u128 {
        match side {
            Side::Yes => self.yes,
            Side::No => self.no,
        }
    }

    pub(crate) fn balance_mut(&mut self, side: Side) -> &mut u128 {
        match side {
            Side::Yes => &mut self.yes,
            Side::No => &mut self.no,
        }
    }

    /// Credit the same amount to both sides
    pub fn credit_pair(&mut self, shares: u128) -> Result<()> {
        let yes = self.yes.checked_add(shares).ok_or(MarketError::Overflow)?;
        let no = self.no.checked_add(shares).ok_or(MarketError::Overflow)?;
        self.yes = yes;
        self.no = no;
        Ok(())
    }
}
