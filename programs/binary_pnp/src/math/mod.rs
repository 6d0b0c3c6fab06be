//! Fixed-point helpers shared by the ledger and the AMM
//!
//! - `share_scale` converts between native collateral units and 18-decimal
//!   claim shares
//! - `u256` provides the wide intermediate products the pricing math needs

pub mod share_scale;
pub mod u256;

pub use share_scale::*;
pub use u256::*;
