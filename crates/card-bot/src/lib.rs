//! Telegram bot that draws trading cards from a curated deck or a catalog file.

pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod mode;
pub mod render;
