// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Oracle: the page's remote wisdom collaborator.
//!
//! The celebration page hosts a small form — "ask the Oracle of Adulthood a
//! question" — that proxies the topic to a generative-text service and shows
//! a short reply. This crate is that collaborator's boundary, in two halves:
//!
//! - [`WisdomSource`] and [`GeminiClient`]: the outbound call. The contract
//!   is deliberately infallible: a source **always** resolves to a
//!   human-readable string, substituting an apology internally when the
//!   transport or the service fails. No error ever crosses into the UI
//!   layer.
//! - [`OraclePanel`] and [`AskStatus`]: the form's tri-state machine
//!   (idle → loading → success). Input is disabled while a request is in
//!   flight, so there is never more than one outstanding call per
//!   submission; blank topics are rejected without a state change.
//!
//! ```rust
//! use festoon_oracle::{AskStatus, OraclePanel, WisdomSource};
//!
//! struct CannedSource;
//! impl WisdomSource for CannedSource {
//!     fn request_wisdom(&self, topic: &str) -> String {
//!         format!("About {topic}: you will figure it out.")
//!     }
//! }
//!
//! let mut panel = OraclePanel::new();
//! let topic = panel.submit("How do I cook?").unwrap();
//! assert_eq!(panel.status(), AskStatus::Loading);
//! assert!(panel.is_input_disabled());
//!
//! let reply = CannedSource.request_wisdom(&topic);
//! panel.resolve(reply);
//! assert_eq!(panel.status(), AskStatus::Success);
//! assert!(panel.reply().unwrap().contains("figure it out"));
//! ```
//!
//! The real page performs the request asynchronously between `submit` and
//! `resolve`; hosts that are happy to block can use
//! [`OraclePanel::ask_with`].

mod client;
mod panel;

pub use client::{GeminiClient, OracleConfig, WisdomSource};
pub use panel::{AskStatus, OraclePanel};
