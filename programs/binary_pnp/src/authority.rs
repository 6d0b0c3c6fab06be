//! Resolution Authority
//!
//! Who may declare a market's outcome is a capability separate from the
//! settlement rules. Settlement only ever reads the recorded outcome, so a
//! multisig or oracle-backed authority can replace the single key without
//! touching the ledger.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::Config;

/// Something that decides whether a signer may resolve markets
pub trait ResolutionAuthority {
    fn authorize(&self, signer: &Pubkey) -> Result<()>;
}

/// A single trusted key, stored in `Config.resolver`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingleKeyAuthority {
    pub key: Pubkey,
}

impl From<&Config> for SingleKeyAuthority {
    fn from(config: &Config) -> Self {
        Self {
            key: config.resolver,
        }
    }
}

impl ResolutionAuthority for SingleKeyAuthority {
    fn authorize(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.key, MarketError::Unauthorized);
        Ok(())
    }
}
