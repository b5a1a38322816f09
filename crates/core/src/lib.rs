//! Core data types for the crypto price bot.

pub mod provider;
pub mod quote;
pub mod symbol;

pub use provider::*;
pub use quote::*;
pub use symbol::*;
