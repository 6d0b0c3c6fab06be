//! Claim Redemption
//!
//! Two exits turn claims back into collateral:
//!
//! - **Pair redemption** (market open): burn equal YES and NO, receive one
//!   unit of collateral per pair.
//! - **Winner redemption** (market resolved): burn winning claims, receive
//!   one unit of collateral each. Losing claims are never paid.
//!
//! ```text
//! payout = to_collateral(units)        (rounded down)
//! ```
//!
//! Neither exit is blocked by the protocol pause.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::errors::MarketError;
use crate::events::{PairsRedeemed, WinningsRedeemed};
use crate::state::{Config, Market, Position};
use crate::vault;

/// Accounts for redemption
#[derive(Accounts)]
pub struct Redeem<'info> {
    /// User redeeming their claims
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    /// Market the claims belong to
    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// Holder's claim balances
    #[account(
        mut,
        seeds = [Position::SEED, market.key().as_ref(), holder.key().as_ref()],
        bump = position.bump,
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
}

impl<'info> Redeem<'info> {
    /// Exit `pair_units` complete sets before the market closes
    pub fn redeem_pairs(&mut self, pair_units: u128) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;

        let payout = self.config.redeem_pairs(
            &mut self.market,
            &mut self.position,
            pair_units,
            now,
        )?;
        self.pay_out(payout)?;

        emit!(PairsRedeemed {
            market_id: self.market.id,
            holder: self.holder.key(),
            pair_units,
            collateral_out: payout,
        });

        Ok(payout)
    }

    /// Redeem `units` winning claims after resolution
    pub fn redeem_winner(&mut self, units: u128) -> Result<u64> {
        let (outcome, payout) =
            self.config
                .redeem_winner(&mut self.market, &mut self.position, units)?;
        self.pay_out(payout)?;

        emit!(WinningsRedeemed {
            market_id: self.market.id,
            holder: self.holder.key(),
            outcome,
            units,
            collateral_out: payout,
        });

        Ok(payout)
    }

    fn pay_out(&mut self, amount: u64) -> Result<()> {
        vault::withdraw(
            &self.token_program,
            &self.collateral_mint,
            &self.market,
            &self.vault,
            &mut self.holder_collateral,
            amount,
        )
    }
}
