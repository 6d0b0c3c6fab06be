//! Instruction handlers for the prediction market protocol
//!
//! Each instruction represents an action users can take:
//! - `initialize` - Set up the protocol (admin only, once)
//! - `create_market` - Open and seed a new market (permissionless)
//! - `mint_set` - Lock collateral for YES + NO pairs
//! - `trade` - Swap claims, or buy one side with collateral
//! - `redeem` - Exit pairs early, or winning claims after resolution
//! - `resolve` - Declare the winning side (resolver only)
//! - `prices` - Implied probabilities
//! - `admin` - Fee recipient and pause switch

pub mod admin;
pub mod create_market;
pub mod initialize;
pub mod mint_set;
pub mod prices;
pub mod redeem;
pub mod resolve;
pub mod trade;

pub use admin::*;
pub use create_market::*;
pub use initialize::*;
pub use mint_set::*;
pub use prices::*;
pub use redeem::*;
pub use resolve::*;
pub use trade::*;
