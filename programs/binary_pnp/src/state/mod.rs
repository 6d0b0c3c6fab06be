//! State structures for the prediction market protocol

pub mod config;
pub mod market;
pub mod position;

pub use config::*;
pub use market::*;
pub use position::*;
