//! Chatform: payload builders for chat-platform bots.
//!
//! This crate assembles the structured UI payloads a bot sends to its chat
//! platform (message embeds and modal dialogs) and provides the `/test`
//! diagnostic slash command. The platform SDK performs transport; this crate
//! validates descriptions against platform limits and builds the values
//! handed to it.
//!
//! # Architecture
//!
//! Chatform follows hexagonal architecture principles:
//!
//! - **Domain**: Descriptions, payloads and diagnostics with no SDK dependency
//! - **Ports**: Trait interfaces for the SDK component layer, the logging
//!   sink and interaction replies
//! - **Adapters**: Default and in-memory implementations of the ports
//!
//! # Modules
//!
//! - [`ui`]: Embed and modal validation and assembly
//! - [`command`]: The `/test` diagnostic slash command

pub mod command;
pub mod ui;
