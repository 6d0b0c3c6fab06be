//! Collateral Vault Transfers
//!
//! Every market keeps its collateral in the associated token account of the
//! market PDA. Tokens only move after the ledger has already been updated,
//! and each transfer is verified by reloading the receiving account: a mint
//! that reports success but delivers a different amount (transfer fees,
//! hooks, non-standard programs) aborts the whole instruction.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::MarketError;
use crate::state::Market;

/// Move `amount` collateral from a user's token account into a market vault
pub fn deposit<'info>(
    token_program: &Interface<'info, TokenInterface>,
    collateral_mint: &InterfaceAccount<'info, Mint>,
    from: &InterfaceAccount<'info, TokenAccount>,
    authority: &Signer<'info>,
    vault: &mut InterfaceAccount<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    let Some(delivery) = Delivery::plan(vault.amount, amount)? else {
        return Ok(());
    };

    transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: from.to_account_info(),
                mint: collateral_mint.to_account_info(),
                to: vault.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
        collateral_mint.decimals,
    )?;

    vault.reload()?;
    delivery.verify(vault.amount)
}

/// Pay `amount` collateral out of a market vault, signed by the market PDA
pub fn withdraw<'info>(
    token_program: &Interface<'info, TokenInterface>,
    collateral_mint: &InterfaceAccount<'info, Mint>,
    market: &Account<'info, Market>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &mut InterfaceAccount<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    let Some(delivery) = Delivery::plan(to.amount, amount)? else {
        return Ok(());
    };

    let id_bytes = market.id.to_le_bytes();
    let bump = [market.bump];
    let market_seeds: &[&[u8]] = &[Market::SEED, &id_bytes, &bump];
    let market_signer = &[market_seeds];

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: vault.to_account_info(),
                mint: collateral_mint.to_account_info(),
                to: to.to_account_info(),
                authority: market.to_account_info(),
            },
            market_signer,
        ),
        amount,
        collateral_mint.decimals,
    )?;

    to.reload()?;
    delivery.verify(to.amount)
}

/// Balance a receiving token account must show once a transfer has landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delivery {
    expected: u64,
}

impl Delivery {
    /// `None` when there is nothing to move
    pub fn plan(balance_before: u64, amount: u64) -> Result<Option<Self>> {
        if amount == 0 {
            return Ok(None);
        }

        let expected = balance_before
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;
        Ok(Some(Self { expected }))
    }

    pub fn verify(&self, balance_after: u64) -> Result<()> {
        require!(balance_after == self.expected, MarketError::TransferFailed);
        Ok(())
    }
}
