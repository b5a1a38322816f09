//! Telegram front end for the price fetcher.
//!
//! This crate provides:
//! - Bot command definitions and dispatch
//! - HTML message formatting for quotes
//! - Suggestions when a symbol cannot be resolved

pub mod format;
pub mod telegram;

pub use telegram::{BotError, Command, PriceBot};
