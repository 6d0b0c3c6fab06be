//! Complete-Set Minting
//!
//! Locks collateral in the market vault and credits the holder with an equal
//! number of YES and NO claims. The claim pool is not involved.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::errors::MarketError;
use crate::events::SetMinted;
use crate::state::{Config, Market, Position};
use crate::vault;

/// Accounts for minting complete sets (also used by the buy composites)
#[derive(Accounts)]
pub struct MintSet<'info> {
    /// Holder depositing collateral
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    /// Market being minted into
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// Holder's claim balances in this market
    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), holder.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, Position>>,

    /// Collateral mint
    #[account(address = config.collateral_mint @ MarketError::InvalidParams)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Holder's collateral account
    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = holder,
    )]
    pub holder_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Market's collateral vault
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = market,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> MintSet<'info> {
    /// Mint `amount` collateral worth of YES + NO pairs
    pub fn mint_set(&mut self, amount: u64, bumps: &MintSetBumps) -> Result<u128> {
        let now = Clock::get()?.unix_timestamp;
        self.bind_position(bumps)?;

        let shares = self
            .config
            .mint_set(&mut self.market, &mut self.position, amount, now)?;

        self.collect(amount, shares)?;
        Ok(shares)
    }

    /// Stamp a freshly created position, or check an existing one
    pub(crate) fn bind_position(&mut self, bumps: &MintSetBumps) -> Result<()> {
        let market_key = self.market.key();
        self.position
            .bind(market_key, self.holder.key(), bumps.position)
    }

    /// Pull the minted collateral into the vault once the ledger is final
    pub(crate) fn collect(&mut self, amount: u64, shares: u128) -> Result<()> {
        vault::deposit(
            &self.token_program,
            &self.collateral_mint,
            &self.holder_collateral,
            &self.holder,
            &mut self.vault,
            amount,
        )?;

        emit!(SetMinted {
            market_id: self.market.id,
            holder: self.holder.key(),
            collateral_in: amount,
            shares_out: shares,
        });

        Ok(())
    }
}
