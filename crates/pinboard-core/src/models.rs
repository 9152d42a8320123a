//! Data models for the bulletin board
//!
//! Defines the three persisted record types (Post, Faq, Inquiry) along
//! with the payload types the backend operations accept. Timestamps are
//! serialized as milliseconds since the Unix epoch, matching both the
//! persisted blob layout and the remote wire format.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The board a post belongs to, used as the primary list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Board {
    Notice,
    Community,
    Event,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Board::Notice => "NOTICE",
            Board::Community => "COMMUNITY",
            Board::Event => "EVENT",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOTICE" => Ok(Board::Notice),
            "COMMUNITY" => Ok(Board::Community),
            "EVENT" => Ok(Board::Event),
            _ => Err(format!(
                "unknown board '{}' (expected notice, community, or event)",
                s
            )),
        }
    }
}

/// A bulletin board post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier
    pub id: Uuid,
    pub board: Board,
    pub title: String,
    pub author: String,
    pub content: String,
    /// Tags used by search and display, kept in insertion order
    pub tags: Vec<String>,
    /// View counter, incremented by every successful lookup
    pub views: u64,
    /// Like counter, incremented only by the like operation
    pub likes: u64,
    /// Set once at creation and never mutated afterwards
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Bumped to "now" on every content mutation (not by view counting)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    /// Event window start, only meaningful on the EVENT board
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_start: Option<DateTime<Utc>>,
    /// Event window end
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_end: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a post from a creation payload
    ///
    /// Counters start at zero and `created_at == updated_at`.
    pub fn new(payload: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board: payload.board,
            title: payload.title,
            author: payload.author,
            content: payload.content,
            tags: payload.tags,
            views: 0,
            likes: 0,
            created_at: now,
            updated_at: now,
            event_start: payload.event_start,
            event_end: payload.event_end,
        }
    }

    /// Apply a partial update, bumping `updated_at`
    ///
    /// Fields absent from the patch keep their current value. Counters
    /// and `created_at` are not patchable.
    pub fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(board) = patch.board {
            self.board = board;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(start) = patch.event_start {
            self.event_start = Some(start);
        }
        if let Some(end) = patch.event_end {
            self.event_end = Some(end);
        }
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a post
///
/// The store assigns the id, counters, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub board: Board,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_start: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_end: Option<DateTime<Utc>>,
}

/// Partial update for a post
///
/// Only the fields present are applied; everything else is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_start: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_end: Option<DateTime<Utc>>,
}

/// A frequently asked question
///
/// Seeded once; the exposed operations never mutate FAQs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: Uuid,
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Processing status of an inquiry
///
/// Every inquiry is created as `Received`; the core never advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Received,
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InquiryStatus::Received => write!(f, "RECEIVED"),
        }
    }
}

/// A contact inquiry, append-only from the core's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub title: String,
    pub content: String,
    /// Whether the submitter agreed to the privacy terms
    pub consent: bool,
    pub status: InquiryStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Create an inquiry from a submission payload
    pub fn new(payload: NewInquiry) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            title: payload.title,
            content: payload.content,
            consent: payload.consent,
            status: InquiryStatus::Received,
            created_at: Utc::now(),
        }
    }
}

/// Payload for submitting an inquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub consent: bool,
}
