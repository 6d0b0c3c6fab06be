//! Protocol Initialization
//!
//! Sets up the global configuration for the prediction market protocol.
//! This is called once during deployment. The collateral mint's decimals are
//! read here and never again.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::math::ShareScale;
use crate::state::Config;

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Protocol administrator (becomes the admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Collateral token mint (e.g., USDC)
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the protocol configuration
    pub fn initialize(
        &mut self,
        resolver: Pubkey,
        fee_recipient: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        let collateral_decimals = self.collateral_mint.decimals;
        ShareScale::new(collateral_decimals)?;

        self.config.set_inner(Config {
            admin: self.admin.key(),
            resolver,
            fee_recipient,
            collateral_mint: self.collateral_mint.key(),
            collateral_decimals,
            market_count: 0,
            bump: bumps.config,
            paused: false,
        });

        msg!("Protocol initialized!");
        msg!("Admin: {}", self.admin.key());
        msg!("Resolver: {}", resolver);
        msg!(
            "Collateral: {} ({} decimals)",
            self.collateral_mint.key(),
            collateral_decimals
        );

        Ok(())
    }
}
