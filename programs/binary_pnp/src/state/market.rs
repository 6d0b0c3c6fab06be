//! Prediction Market State
//!
//! Each market is a single YES/NO question with its own collateral vault and
//! its own constant-product claim pool. The methods on [`Market`] are the
//! ledger itself: instruction handlers call them first and only move tokens
//! once they have succeeded.
//!
//! Every method validates completely before writing anything, so a rejected
//! call leaves both the market and the position exactly as they were.

use anchor_lang::prelude::*;

use crate::amm::{ConstantProductCurve, Prices, SwapQuote};
use crate::errors::MarketError;
use crate::math::ShareScale;
use crate::state::Position;

/// Highest swap fee a market may charge (10%)
pub const MAX_FEE_BPS: u16 = 1_000;

/// Maximum question length in bytes
pub const MAX_QUESTION_LEN: usize = 256;

/// Individual prediction market account
///
/// Seeds: ["market", market_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug)]
pub struct Market {
    /// Unique market identifier
    pub id: u64,

    /// Market creator's address
    pub creator: Pubkey,

    /// The prediction question
    /// Example: "Will ETH flip BTC by market cap in 2027?"
    #[max_len(256)]
    pub question: String,

    /// Unix timestamp after which minting, trading and pair exits stop
    pub close_time: i64,

    /// Earliest unix timestamp at which the market may be resolved
    pub resolve_after: i64,

    /// Unix timestamp when the market was created
    pub created_at: i64,

    /// Swap fee in basis points, retained by the pool
    pub fee_bps: u16,

    /// Set exactly once, by resolution
    pub resolved: bool,

    /// Winning outcome (only valid after resolution)
    pub outcome: Outcome,

    /// Collateral held in the vault on behalf of this market (native units)
    pub collateral: u64,

    /// YES claims owned by the pool (share units)
    pub yes_reserve: u128,

    /// NO claims owned by the pool (share units)
    pub no_reserve: u128,

    /// PDA bump seed
    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";
}

/// Creation arguments for a market
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketParams {
    pub question: String,
    pub close_time: i64,
    pub resolve_after: i64,
    pub seed_collateral: u64,
    pub fee_bps: u16,
}

/// One side of a binary market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

/// Prediction outcome
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum Outcome {
    /// Not yet determined
    #[default]
    Undetermined,
    /// YES outcome occurred
    Yes,
    /// NO outcome occurred
    No,
}

impl From<Side> for Outcome {
    fn from(side: Side) -> Self {
        match side {
            Side::Yes => Self::Yes,
            Side::No => Self::No,
        }
    }
}

/// Market lifecycle phase, derived from the clock and the resolved flag
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarketPhase {
    /// Before close time: minting, swapping and pair exits allowed
    Open,
    /// Past close time, awaiting resolution
    ClosedUnresolved,
    /// Terminal: only winning-side redemption remains
    Resolved,
}

impl Market {
    /// Build a freshly seeded market
    ///
    /// Both reserves receive the full seed in share units, so every market
    /// opens at exactly 50/50 regardless of the seed size.
    pub fn open(
        id: u64,
        params: MarketParams,
        creator: Pubkey,
        scale: ShareScale,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            params.close_time > now && params.resolve_after >= params.close_time,
            MarketError::InvalidTime
        );
        require!(
            params.seed_collateral > 0 && params.fee_bps <= MAX_FEE_BPS,
            MarketError::InvalidParams
        );
        require!(!params.question.is_empty(), MarketError::InvalidParams);
        require!(
            params.question.len() <= MAX_QUESTION_LEN,
            MarketError::QuestionTooLong
        );

        let seed_shares = scale.to_shares(params.seed_collateral);
        require!(seed_shares > 0, MarketError::InvalidParams);

        Ok(Self {
            id,
            creator,
            question: params.question,
            close_time: params.close_time,
            resolve_after: params.resolve_after,
            created_at: now,
            fee_bps: params.fee_bps,
            resolved: false,
            outcome: Outcome::Undetermined,
            collateral: params.seed_collateral,
            yes_reserve: seed_shares,
            no_reserve: seed_shares,
            bump,
        })
    }

    pub fn phase(&self, now: i64) -> MarketPhase {
        if self.resolved {
            MarketPhase::Resolved
        } else if now < self.close_time {
            MarketPhase::Open
        } else {
            MarketPhase::ClosedUnresolved
        }
    }

    /// Gate for minting, swapping and pair redemption
    pub fn require_open(&self, now: i64) -> Result<()> {
        require!(now < self.close_time, MarketError::MarketClosed);
        require!(!self.resolved, MarketError::MarketAlreadyResolved);
        Ok(())
    }

    pub fn reserve(&self, side: Side) -> u128 {
        match side {
            Side::Yes => self.yes_reserve,
            Side::No => self.no_reserve,
        }
    }

    fn reserve_mut(&mut self, side: Side) -> &mut u128 {
        match side {
            Side::Yes => &mut self.yes_reserve,
            Side::No => &mut self.no_reserve,
        }
    }

    pub fn winning_side(&self) -> Option<Side> {
        match (self.resolved, self.outcome) {
            (true, Outcome::Yes) => Some(Side::Yes),
            (true, Outcome::No) => Some(Side::No),
            _ => None,
        }
    }

    /// Lock `amount` collateral and credit an equal YES + NO pair
    ///
    /// Reserves are not touched: minting is a pure collateral-for-pair
    /// conversion. Returns the share units credited to each side.
    pub fn mint_set(
        &mut self,
        position: &mut Position,
        amount: u64,
        scale: ShareScale,
        now: i64,
    ) -> Result<u128> {
        self.require_open(now)?;
        require!(amount > 0, MarketError::InvalidParams);

        let shares = scale.to_shares(amount);
        require!(shares > 0, MarketError::InvalidParams);

        let collateral = self
            .collateral
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;
        position.credit_pair(shares)?;
        self.collateral = collateral;

        Ok(shares)
    }

    /// Sell `in_units` claims of `from` to the pool for the opposite side
    pub fn swap(
        &mut self,
        position: &mut Position,
        from: Side,
        in_units: u128,
        min_out_units: u128,
        now: i64,
    ) -> Result<SwapQuote> {
        self.require_open(now)?;
        require!(in_units > 0, MarketError::InvalidParams);
        require!(
            position.balance(from) >= in_units,
            MarketError::InsufficientBalance
        );

        let to = from.opposite();
        let quote = ConstantProductCurve::quote(
            self.reserve(from),
            self.reserve(to),
            in_units,
            self.fee_bps,
        )?;
        require!(quote.amount_out >= min_out_units, MarketError::Slippage);
        require!(quote.amount_out > 0, MarketError::ZeroOutput);

        let credited = position
            .balance(to)
            .checked_add(quote.amount_out)
            .ok_or(MarketError::Overflow)?;

        *position.balance_mut(from) -= in_units;
        *position.balance_mut(to) = credited;
        *self.reserve_mut(from) = quote.new_reserve_in;
        *self.reserve_mut(to) = quote.new_reserve_out;

        Ok(quote)
    }

    /// Buy `side` with collateral: mint a complete set, then sell its
    /// opposite half into the pool
    ///
    /// Both steps run on a staged copy and are committed together, so a
    /// slippage failure in the swap also undoes the mint. Returns the shares
    /// minted and the quote of the embedded swap.
    pub fn buy(
        &mut self,
        position: &mut Position,
        side: Side,
        amount: u64,
        min_out_units: u128,
        scale: ShareScale,
        now: i64,
    ) -> Result<(u128, SwapQuote)> {
        let mut market = self.clone();
        let mut staged = position.clone();

        let shares = market.mint_set(&mut staged, amount, scale, now)?;
        let quote = market.swap(&mut staged, side.opposite(), shares, min_out_units, now)?;

        *self = market;
        *position = staged;

        Ok((shares, quote))
    }

    /// Burn `pair_units` of both sides for collateral while the market is open
    ///
    /// A matched pair is always worth exactly one unit of collateral since
    /// exactly one side wins.
    pub fn redeem_pairs(
        &mut self,
        position: &mut Position,
        pair_units: u128,
        scale: ShareScale,
        now: i64,
    ) -> Result<u64> {
        self.require_open(now)?;
        require!(pair_units > 0, MarketError::InvalidParams);
        require!(
            position.yes >= pair_units && position.no >= pair_units,
            MarketError::InsufficientBalance
        );

        let payout = scale.to_collateral(pair_units)?;
        let remaining = self.cover(payout)?;

        position.yes -= pair_units;
        position.no -= pair_units;
        self.collateral = remaining;

        Ok(payout)
    }

    /// Record the winning side. Irreversible.
    pub fn resolve(&mut self, outcome: Side, now: i64) -> Result<()> {
        require!(!self.resolved, MarketError::MarketAlreadyResolved);
        require!(now >= self.resolve_after, MarketError::InvalidTime);

        self.resolved = true;
        self.outcome = outcome.into();

        Ok(())
    }

    /// Pay out `units` winning claims at one collateral unit per share unit
    ///
    /// Losing balances are left in place; they are simply never paid.
    pub fn redeem_winner(
        &mut self,
        position: &mut Position,
        units: u128,
        scale: ShareScale,
    ) -> Result<(Side, u64)> {
        let winner = self.winning_side().ok_or(MarketError::MarketNotResolved)?;
        require!(units > 0, MarketError::InvalidParams);
        require!(
            position.balance(winner) >= units,
            MarketError::InsufficientBalance
        );

        let payout = scale.to_collateral(units)?;
        let remaining = self.cover(payout)?;

        *position.balance_mut(winner) -= units;
        self.collateral = remaining;

        Ok((winner, payout))
    }

    pub fn prices(&self) -> Result<Prices> {
        ConstantProductCurve::prices(self.yes_reserve, self.no_reserve)
    }

    /// Tracked collateral left after paying `payout`
    fn cover(&self, payout: u64) -> Result<u64> {
        match self.collateral.checked_sub(payout) {
            Some(remaining) => Ok(remaining),
            None => {
                msg!(
                    "Solvency breach on market {}: tracked {} < payout {}",
                    self.id,
                    self.collateral,
                    payout
                );
                err!(MarketError::InsufficientCollateral)
            }
        }
    }
}
