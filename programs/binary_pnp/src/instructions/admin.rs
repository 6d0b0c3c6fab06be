//! Administrative switches
//!
//! Admin-only updates to the global configuration. Neither touches market
//! state.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::events::{FeeRecipientUpdated, PauseUpdated};
use crate::state::Config;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = admin @ MarketError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_fee_recipient(&mut self, fee_recipient: Pubkey) -> Result<()> {
        let previous = self.config.fee_recipient;
        self.config.fee_recipient = fee_recipient;

        emit!(FeeRecipientUpdated {
            previous,
            current: fee_recipient,
        });
        msg!("Fee recipient: {} -> {}", previous, fee_recipient);

        Ok(())
    }

    /// Stop (or restart) market creation, minting and trading
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.config.paused = paused;

        emit!(PauseUpdated { paused });
        msg!("Protocol paused: {}", paused);

        Ok(())
    }
}
