//! # Constant-Product Claim Exchange
//!
//! The pool holds YES and NO claims and trades one for the other along
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │                 YES_reserve × NO_reserve = k                │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Swap Formula
//!
//! Selling `x` claims of one side into the pool:
//!
//! ```text
//! 1. fee       = x × fee_bps / 10_000          (rounded down)
//! 2. x_net     = x - fee
//! 3. out       = R_out × x_net / (R_in + x_net) (rounded down)
//! 4. R_in'     = R_in + x                      (the fee stays in the pool)
//! 5. R_out'    = R_out - out
//! ```
//!
//! Because the full `x` lands in `R_in` while only `x_net` priced the trade,
//! `k` never decreases. Every rounding step truncates toward the pool.
//!
//! ## Implied Probability
//!
//! A side with a large reserve is cheap to acquire, so
//!
//! ```text
//! P(YES) = NO_reserve / (YES_reserve + NO_reserve)
//! P(NO)  = 1 - P(YES)
//! ```

use anchor_lang::prelude::*;

use crate::math::{mul_div_floor, U256};

/// Basis point denominator (10_000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Fixed-point scale of a probability (1e18 = certainty)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Errors specific to the constant-product curve
#[error_code(offset = 6100)]
pub enum AmmError {
    #[msg("Pool reserves must be positive")]
    EmptyReserves,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Pool invariant would decrease")]
    InvariantViolated,
}

/// Result of pricing a swap, before anything is applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    /// Portion of the input retained by the pool as fee
    pub fee_units: u128,
    /// Claims of the opposite side paid to the trader
    pub amount_out: u128,
    /// Reserve of the input side after the trade
    pub new_reserve_in: u128,
    /// Reserve of the output side after the trade
    pub new_reserve_out: u128,
}

/// Implied probabilities, each scaled by `PRICE_SCALE`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prices {
    pub yes: u128,
    pub no: u128,
}

impl Prices {
    pub const NEUTRAL: Self = Self {
        yes: PRICE_SCALE / 2,
        no: PRICE_SCALE / 2,
    };
}

/// Constant-product pricing for a YES/NO claim pool
pub struct ConstantProductCurve;

impl ConstantProductCurve {
    /// Fee retained on `amount_in`, rounded down
    pub fn fee(amount_in: u128, fee_bps: u16) -> Result<u128> {
        let fee = mul_div_floor(amount_in, u128::from(fee_bps), BPS_DENOMINATOR)
            .ok_or(AmmError::Overflow)?;
        Ok(fee)
    }

    /// Price selling `amount_in` claims of the input side into the pool
    ///
    /// # Example
    /// ```ignore
    /// // 1100 YES / 1000 NO, no fee, sell 100 YES
    /// let quote = ConstantProductCurve::quote(1_100, 1_000, 100, 0)?;
    /// // 1000 * 100 / 1200 = 83
    /// assert_eq!(quote.amount_out, 83);
    /// ```
    pub fn quote(
        reserve_in: u128,
        reserve_out: u128,
        amount_in: u128,
        fee_bps: u16,
    ) -> Result<SwapQuote> {
        require!(reserve_in > 0 && reserve_out > 0, AmmError::EmptyReserves);

        let fee_units = Self::fee(amount_in, fee_bps)?;
        let amount_in_after_fee = amount_in
            .checked_sub(fee_units)
            .ok_or(AmmError::Overflow)?;

        let denominator = reserve_in
            .checked_add(amount_in_after_fee)
            .ok_or(AmmError::Overflow)?;
        let amount_out = mul_div_floor(reserve_out, amount_in_after_fee, denominator)
            .ok_or(AmmError::Overflow)?;

        let new_reserve_in = reserve_in
            .checked_add(amount_in)
            .ok_or(AmmError::Overflow)?;
        // amount_out < reserve_out whenever reserve_in > 0
        let new_reserve_out = reserve_out
            .checked_sub(amount_out)
            .ok_or(AmmError::Overflow)?;

        require!(
            U256::mul_u128(new_reserve_in, new_reserve_out)
                >= U256::mul_u128(reserve_in, reserve_out),
            AmmError::InvariantViolated
        );

        Ok(SwapQuote {
            fee_units,
            amount_out,
            new_reserve_in,
            new_reserve_out,
        })
    }

    /// Implied YES/NO probabilities for the given reserves
    ///
    /// An empty pool prices at 50/50.
    pub fn prices(yes_reserve: u128, no_reserve: u128) -> Result<Prices> {
        if yes_reserve == 0 && no_reserve == 0 {
            return Ok(Prices::NEUTRAL);
        }

        let total = yes_reserve
            .checked_add(no_reserve)
            .ok_or(AmmError::Overflow)?;
        let yes = mul_div_floor(no_reserve, PRICE_SCALE, total).ok_or(AmmError::Overflow)?;

        Ok(Prices {
            yes,
            no: PRICE_SCALE - yes,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
