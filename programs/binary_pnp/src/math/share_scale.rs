//! Collateral <-> share unit conversion
//!
//! Claims are always accounted in 18-decimal share units, whatever precision
//! the collateral mint uses. Both directions round down: collateral finer
//! than one share unit is forfeited on the way in, and share dust worth less
//! than one native collateral unit is forfeited on the way out.

use anchor_lang::prelude::*;

use crate::errors::MarketError;

/// Decimal precision of one claim share
pub const SHARE_DECIMALS: u8 = 18;

/// Largest collateral precision accepted (keeps `10^(d - 18)` inside u128)
pub const MAX_COLLATERAL_DECIMALS: u8 = 36;

/// Scaling rule derived once from the collateral mint's decimals
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareScale {
    /// Collateral already has 18 decimals
    Identity,
    /// Collateral is coarser: multiply by the factor to get shares
    Up(u128),
    /// Collateral is finer: divide by the factor to get shares
    Down(u128),
}

impl ShareScale {
    pub fn new(collateral_decimals: u8) -> Result<Self> {
        require!(
            collateral_decimals <= MAX_COLLATERAL_DECIMALS,
            MarketError::InvalidDecimals
        );

        let scale = match collateral_decimals.cmp(&SHARE_DECIMALS) {
            std::cmp::Ordering::Equal => Self::Identity,
            std::cmp::Ordering::Less => {
                Self::Up(10u128.pow(u32::from(SHARE_DECIMALS - collateral_decimals)))
            }
            std::cmp::Ordering::Greater => {
                Self::Down(10u128.pow(u32::from(collateral_decimals - SHARE_DECIMALS)))
            }
        };

        Ok(scale)
    }

    /// Native collateral amount to share units (never overflows: at most
    /// `u64::MAX * 10^18`)
    pub fn to_shares(&self, amount: u64) -> u128 {
        let amount = u128::from(amount);
        match *self {
            Self::Identity => amount,
            Self::Up(factor) => amount * factor,
            Self::Down(factor) => amount / factor,
        }
    }

    /// Share units to native collateral amount
    pub fn to_collateral(&self, shares: u128) -> Result<u64> {
        let amount = match *self {
            Self::Identity => shares,
            Self::Up(factor) => shares / factor,
            Self::Down(factor) => shares.checked_mul(factor).ok_or(MarketError::Overflow)?,
        };

        u64::try_from(amount).map_err(|_| error!(MarketError::Overflow))
    }
}
