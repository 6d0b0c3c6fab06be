//! # Automated Market Maker (AMM) Module
//!
//! Prices trades between YES and NO claims with a **constant-product** pool.
//! The pool is seeded with equal YES and NO reserves when a market is created
//! and owns those reserves itself; there are no liquidity provider shares.
//!
//! ```text
//!   NO ▲
//!      │╲
//!      │ ╲
//!      │  ╲      YES × NO = k
//!      │   ╲
//!      │    ╲__
//!      │       ╲____
//!      └────────────────▶ YES
//!
//!   Selling YES moves right along the curve,
//!   paying out NO and making YES cheaper.
//! ```

pub mod constant_product;

pub use constant_product::*;
