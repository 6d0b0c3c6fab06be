//! Market Creation
//!
//! Anyone can open a market by:
//! 1. Defining a yes/no question
//! 2. Setting a close time and the earliest resolution time
//! 3. Seeding the claim pool with collateral
//!
//! The seed is converted to shares and placed in BOTH pool reserves, so the
//! market always opens at 50/50. The seeded claims belong to the pool, not to
//! the creator.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::errors::MarketError;
use crate::events::MarketCreated;
use crate::state::{Config, Market, MarketParams};
use crate::vault;

/// Accounts for creating a new prediction market
#[derive(Accounts)]
pub struct CreateMarket<'info> {
    /// Market creator (pays for accounts, provides the seed)
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Global protocol configuration
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    /// The new market account
    #[account(
        init,
        payer = creator,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, config.market_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// Collateral token mint
    #[account(address = config.collateral_mint @ MarketError::InvalidParams)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Creator's collateral token account
    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = creator,
    )]
    pub creator_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Market's collateral vault
    #[account(
        init,
        payer = creator,
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

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        question: String,
        close_time: i64,
        resolve_after: i64,
        seed_collateral: u64,
        fee_bps: u16,
        bumps: &CreateMarketBumps,
    ) -> Result<u64> {
        let clock = Clock::get()?;

        let market = self.config.register_market(
            MarketParams {
                question: question.clone(),
                close_time,
                resolve_after,
                seed_collateral,
                fee_bps,
            },
            self.creator.key(),
            clock.unix_timestamp,
            bumps.market,
        )?;
        let market_id = market.id;
        let seed_shares = market.yes_reserve;
        self.market.set_inner(market);

        vault::deposit(
            &self.token_program,
            &self.collateral_mint,
            &self.creator_collateral,
            &self.creator,
            &mut self.vault,
            seed_collateral,
        )?;

        emit!(MarketCreated {
            market_id,
            creator: self.creator.key(),
            question,
            close_time,
            resolve_after,
            fee_bps,
            seed_collateral,
            seed_shares,
        });

        Ok(market_id)
    }
}
