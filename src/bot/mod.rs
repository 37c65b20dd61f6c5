//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `router`: Ordered triggers mapping inbound text to a route
//! - `message_handler`: Sends the reply for a routed message
//! - `ui_builder`: Creates the keyboard and the reply texts

pub mod message_handler;
pub mod router;
pub mod ui_builder;

pub use message_handler::{message_handler, schema};
pub use router::{Command, Route, Router, Trigger};

pub use ui_builder::{build_main_keyboard, build_reply, Reply};
