// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tri-state machine for the oracle's ask form.

use crate::client::WisdomSource;

/// Lifecycle of one question.
///
/// There is no error state: the wisdom collaborator recovers internally and
/// always resolves with a string, so a submission can only be in flight or
/// answered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum AskStatus {
    /// Waiting for a question.
    #[default]
    Idle,
    /// A request is in flight; input is disabled.
    Loading,
    /// A reply is being displayed.
    Success,
}

/// State machine for the ask form.
///
/// Enforces the panel's two rules: at most one request in flight per
/// submission (submitting while [`AskStatus::Loading`] is rejected), and
/// blank topics never leave the form.
///
/// # Example
///
/// ```rust
/// use festoon_oracle::{AskStatus, OraclePanel};
///
/// let mut panel = OraclePanel::new();
/// assert!(panel.submit("   ").is_none()); // blank: rejected, still Idle
/// assert_eq!(panel.status(), AskStatus::Idle);
///
/// let topic = panel.submit("How do I cook?").unwrap();
/// assert_eq!(topic, "How do I cook?");
/// assert!(panel.submit("another?").is_none()); // already loading
///
/// panel.resolve("Start with eggs.".to_owned());
/// assert_eq!(panel.status(), AskStatus::Success);
///
/// // "Ask another question" clears the form.
/// panel.reset();
/// assert_eq!(panel.status(), AskStatus::Idle);
/// assert!(panel.reply().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct OraclePanel {
    status: AskStatus,
    topic: String,
    reply: Option<String>,
}

impl OraclePanel {
    /// Creates an idle panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> AskStatus {
        self.status
    }

    /// Returns `true` while input should be disabled.
    #[must_use]
    pub fn is_input_disabled(&self) -> bool {
        self.status == AskStatus::Loading
    }

    /// Returns the topic of the current question, if one was submitted.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        if self.topic.is_empty() {
            None
        } else {
            Some(&self.topic)
        }
    }

    /// Returns the displayed reply, if any.
    #[must_use]
    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    /// Submits a question.
    ///
    /// Returns the trimmed topic to send to the wisdom source, and moves the
    /// panel to [`AskStatus::Loading`] with any previous reply cleared.
    /// Returns `None` — changing nothing — if a request is already in
    /// flight or the topic is blank.
    pub fn submit(&mut self, topic: &str) -> Option<String> {
        if self.status == AskStatus::Loading {
            return None;
        }
        let topic = topic.trim();
        if topic.is_empty() {
            return None;
        }
        self.status = AskStatus::Loading;
        self.topic = topic.to_owned();
        self.reply = None;
        Some(topic.to_owned())
    }

    /// Delivers the reply for the in-flight question.
    ///
    /// Returns `false` (ignoring the reply) unless the panel is loading —
    /// a late resolution after [`reset`](Self::reset) must not resurrect the
    /// form.
    pub fn resolve(&mut self, reply: String) -> bool {
        if self.status != AskStatus::Loading {
            return false;
        }
        self.status = AskStatus::Success;
        self.reply = Some(reply);
        true
    }

    /// Clears the form back to idle ("ask another question").
    pub fn reset(&mut self) {
        self.status = AskStatus::Idle;
        self.topic.clear();
        self.reply = None;
    }

    /// Blocking convenience: submit, request, and resolve in one call.
    ///
    /// Returns `true` if the question was accepted and answered. Hosts with
    /// an async runtime should instead perform the request themselves
    /// between [`submit`](Self::submit) and [`resolve`](Self::resolve).
    pub fn ask_with(&mut self, source: &impl WisdomSource, topic: &str) -> bool {
        let Some(topic) = self.submit(topic) else {
            return false;
        };
        let reply = source.request_wisdom(&topic);
        self.resolve(reply)
    }
}
