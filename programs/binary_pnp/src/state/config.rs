//! Global Protocol Configuration
//!
//! This account stores protocol-wide settings and the market identifier
//! allocator.

use anchor_lang::prelude::*;

use crate::amm::SwapQuote;
use crate::authority::{ResolutionAuthority, SingleKeyAuthority};
use crate::errors::MarketError;
use crate::math::ShareScale;
use crate::state::{Market, MarketParams, Position, Side};

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace, Debug)]
pub struct Config {
    /// Protocol administrator (fee recipient updates, pause switch)
    pub admin: Pubkey,

    /// Key allowed to resolve markets
    pub resolver: Pubkey,

    /// Destination for protocol revenue
    pub fee_recipient: Pubkey,

    /// Collateral token mint (e.g. USDC)
    pub collateral_mint: Pubkey,

    /// Collateral mint decimals, read once at initialization
    pub collateral_decimals: u8,

    /// Total markets created; the next market's identifier
    pub market_count: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Blocks new markets, minting and trading while set
    pub paused: bool,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    pub fn share_scale(&self) -> Result<ShareScale> {
        ShareScale::new(self.collateral_decimals)
    }

    /// Gate for everything that takes on new exposure
    pub fn require_active(&self) -> Result<()> {
        require!(!self.paused, MarketError::ProtocolPaused);
        Ok(())
    }

    /// Validate and register a new market under the next identifier
    ///
    /// The counter only moves once the market record has been built, so a
    /// rejected creation leaves `market_count` untouched.
    pub fn register_market(
        &mut self,
        params: MarketParams,
        creator: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<Market> {
        self.require_active()?;

        let id = self.market_count;
        let market = Market::open(id, params, creator, self.share_scale()?, now, bump)?;
        self.market_count = id.checked_add(1).ok_or(MarketError::Overflow)?;

        Ok(market)
    }

    pub fn mint_set(
        &self,
        market: &mut Market,
        position: &mut Position,
        amount: u64,
        now: i64,
    ) -> Result<u128> {
        self.require_active()?;
        market.mint_set(position, amount, self.share_scale()?, now)
    }

    pub fn swap(
        &self,
        market: &mut Market,
        position: &mut Position,
        from: Side,
        in_units: u128,
        min_out_units: u128,
        now: i64,
    ) -> Result<SwapQuote> {
        self.require_active()?;
        market.swap(position, from, in_units, min_out_units, now)
    }

    pub fn buy(
        &self,
        market: &mut Market,
        position: &mut Position,
        side: Side,
        amount: u64,
        min_out_units: u128,
        now: i64,
    ) -> Result<(u128, SwapQuote)> {
        self.require_active()?;
        market.buy(position, side, amount, min_out_units, self.share_scale()?, now)
    }

    // Exits and resolution ignore the pause flag.

    pub fn redeem_pairs(
        &self,
        market: &mut Market,
        position: &mut Position,
        pair_units: u128,
        now: i64,
    ) -> Result<u64> {
        market.redeem_pairs(position, pair_units, self.share_scale()?, now)
    }

    pub fn redeem_winner(
        &self,
        market: &mut Market,
        position: &mut Position,
        units: u128,
    ) -> Result<(Side, u64)> {
        market.redeem_winner(position, units, self.share_scale()?)
    }

    /// Record `outcome` on behalf of `resolver`, if it holds resolution authority
    pub fn resolve(
        &self,
        market: &mut Market,
        resolver: &Pubkey,
        outcome: Side,
        now: i64,
    ) -> Result<()> {
        SingleKeyAuthority::from(self).authorize(resolver)?;
        market.resolve(outcome, now)
    }
}
