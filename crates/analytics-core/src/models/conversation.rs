// ABOUTME: Conversation, message and transcript types consumed by the scoring engine
// ABOUTME: Includes import validation that assigns sequence numbers to incoming messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Role of the party that sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    /// The person being helped
    #[serde(rename = "user", alias = "human")]
    Human,
    /// The automated agent answering
    #[serde(rename = "ai", alias = "agent")]
    Agent,
}

impl Sender {
    /// Wire name of the role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "user",
            Self::Agent => "ai",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" | "human" => Ok(Self::Human),
            "ai" | "agent" => Ok(Self::Agent),
            other => Err(AppError::invalid_input(format!(
                "sender must be 'user' or 'ai', got '{other}'"
            ))),
        }
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent the message
    pub sender: Sender,
    /// Free text body, may be empty
    pub text: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Strictly increasing position within the conversation
    pub sequence_number: u64,
}

impl Message {
    /// Create a message
    #[must_use]
    pub fn new(
        sender: Sender,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        sequence_number: u64,
    ) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp,
            sequence_number,
        }
    }

    /// Whether the human sent this message
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.sender == Sender::Human
    }

    /// Whether the agent sent this message
    #[must_use]
    pub fn is_agent(&self) -> bool {
        self.sender == Sender::Agent
    }
}

/// Ordered messages of one conversation.
///
/// Ordering is by `sequence_number`, ties broken by `timestamp`. The
/// constructor sorts its input so callers cannot hand the engine an
/// out-of-order transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Message>", into = "Vec<Message>")]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Build a transcript, ordering the messages
    #[must_use]
    pub fn new(mut messages: Vec<Message>) -> Self {
        messages.sort_by(|a, b| {
            a.sequence_number
                .cmp(&b.sequence_number)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });
        Self { messages }
    }

    /// All messages in order
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages sent by the human, in order
    pub fn human_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_human())
    }

    /// Messages sent by the agent, in order
    pub fn agent_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_agent())
    }
}

impl From<Vec<Message>> for Transcript {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}

impl From<Transcript> for Vec<Message> {
    fn from(transcript: Transcript) -> Self {
        transcript.messages
    }
}

/// Unique conversation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    /// Generate a new random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ConversationId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| AppError::invalid_input(format!("Invalid conversation id '{s}': {e}")))
    }
}

/// Analysis lifecycle of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    /// Waiting for analysis
    #[default]
    Pending,
    /// A metrics record is stored
    Analyzed,
    /// The last analysis attempt failed
    Error,
}

impl ConversationStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Analyzed => "analyzed",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored conversation and its transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation ID
    pub id: ConversationId,
    /// Title (auto-generated when not supplied)
    pub title: String,
    /// Analysis status
    pub status: ConversationStatus,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
    /// When the conversation was last updated
    pub updated_at: DateTime<Utc>,
    /// Ordered messages
    pub transcript: Transcript,
}

impl Conversation {
    /// Create a pending conversation
    #[must_use]
    pub fn new(title: impl Into<String>, transcript: Transcript, now: DateTime<Utc>) -> Self {
        Self {
            id: ConversationId::new(),
            title: title.into(),
            status: ConversationStatus::Pending,
            created_at: now,
            updated_at: now,
            transcript,
        }
    }

    /// Total number of messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Number of messages sent by the human
    #[must_use]
    pub fn human_message_count(&self) -> usize {
        self.transcript.human_messages().count()
    }

    /// Number of messages sent by the agent
    #[must_use]
    pub fn agent_message_count(&self) -> usize {
        self.transcript.agent_messages().count()
    }
}

/// One message as supplied by an importer.
///
/// Fields are loosely typed so validation can report which index is wrong
/// instead of failing the whole document at the first serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportedMessage {
    /// Sender role (`user`/`ai`, or `human`/`agent`)
    #[serde(default)]
    pub sender: Option<String>,
    /// Message body
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    /// Send time; defaults to the import instant
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Payload for creating a conversation from raw messages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationImport {
    /// Optional title
    #[serde(default)]
    pub title: Option<String>,
    /// Messages in conversation order
    #[serde(default)]
    pub messages: Vec<ImportedMessage>,
}

impl ConversationImport {
    /// Validate the payload and build a pending conversation.
    ///
    /// Messages receive sequence numbers `1..=n` in input order.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a message lacks a sender or body,
    /// and `InvalidInput` when there are no messages, the sender is unknown,
    /// or the body is blank.
    pub fn into_conversation(self, now: DateTime<Utc>) -> AppResult<Conversation> {
        if self.messages.is_empty() {
            return Err(AppError::invalid_input(
                "A conversation requires at least one message",
            ));
        }

        let mut messages = Vec::with_capacity(self.messages.len());
        for (idx, imported) in self.messages.into_iter().enumerate() {
            let (Some(sender), Some(body)) = (imported.sender, imported.message) else {
                return Err(AppError::missing_field(format!(
                    "Message at index {idx} must contain 'sender' and 'message'"
                )));
            };
            let sender = sender.parse::<Sender>().map_err(|_| {
                AppError::invalid_input(format!(
                    "Message at index {idx}: sender must be 'user' or 'ai', got '{sender}'"
                ))
            })?;
            let text = match body {
                serde_json::Value::String(text) if !text.trim().is_empty() => text,
                _ => {
                    return Err(AppError::invalid_input(format!(
                        "Message at index {idx}: 'message' must be a non-empty string"
                    )))
                }
            };
            messages.push(Message::new(
                sender,
                text,
                imported.timestamp.unwrap_or(now),
                idx as u64 + 1,
            ));
        }

        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Conversation {}", now.format("%Y-%m-%d %H:%M")));

        Ok(Conversation::new(title, Transcript::new(messages), now))
    }
}
