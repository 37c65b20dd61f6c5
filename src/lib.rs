//! # CashRocket Telegram Bot
//!
//! A Telegram bot that answers `/start` and its own button text with a
//! reply keyboard opening the CashRocket mini-app.

pub mod bot;
pub mod config;
pub mod config_errors;
pub mod observability;
