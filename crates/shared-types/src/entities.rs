//! # Core Domain Entities
//!
//! Defines the forum records persisted in the document store.
//!
//! ## Clusters
//!
//! - **Identity**: `Principal`, `DocumentId`, `Timestamp`
//! - **Content**: `Question`, `Answer`, `Comment`, `Tag`
//! - **Incentives**: `Bounty`
//! - **Governance**: `Proposal`, `ProposalKind`, `ProposalStatus`
//!
//! Every record carries the store-managed metadata fields `id`, `createdAt`,
//! `updatedAt` and `version`. They default to zero/empty so a record can be
//! built before the store has assigned them.

use crate::errors::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Identifier of a stored document. Generated by the store for most
/// collections; tags use their name.
pub type DocumentId = String;

/// An authenticated actor, supplied by the wallet/identity collaborator.
///
/// Two principals are the same actor iff their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    /// Wrap an identity string, rejecting empty input.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TypeError::EmptyPrincipal);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Principal {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Principal::new(s)
    }
}

impl TryFrom<String> for Principal {
    type Error = TypeError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Principal::new(id)
    }
}

impl From<Principal> for String {
    fn from(principal: Principal) -> Self {
        principal.0
    }
}

impl From<Principal> for serde_json::Value {
    fn from(principal: Principal) -> Self {
        serde_json::Value::String(principal.0)
    }
}

/// Which kind of content a vote or comment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Question,
    Answer,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Question => f.write_str("question"),
            ContentKind::Answer => f.write_str("answer"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "question" => Ok(ContentKind::Question),
            "answer" => Ok(ContentKind::Answer),
            other => Err(TypeError::UnknownVariant {
                kind: "content kind",
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// CLUSTER B: CONTENT
// =============================================================================

/// A question posted to the forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Principal,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Append-only list of answer ids, in posting order.
    #[serde(default)]
    pub answer_ids: Vec<DocumentId>,
    /// Net score; always `upvotes.len() - downvotes.len()` absent lost updates.
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub upvotes: Vec<Principal>,
    #[serde(default)]
    pub downvotes: Vec<Principal>,
    /// Sum of every bounty ever placed on this question, in base units.
    #[serde(default)]
    pub bounty_amount: u64,
    /// Most recently created bounty.
    #[serde(default)]
    pub bounty_id: Option<DocumentId>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub is_accepted: bool,
    /// Source of truth for acceptance; set at most once.
    #[serde(default)]
    pub accepted_answer_id: Option<DocumentId>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub comment_ids: Vec<DocumentId>,
}

impl Question {
    /// A fresh question with every counter zeroed.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        author: Principal,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            title: title.into(),
            content: content.into(),
            author,
            created_at: 0,
            updated_at: 0,
            version: 0,
            tags,
            answer_ids: Vec::new(),
            vote_count: 0,
            upvotes: Vec::new(),
            downvotes: Vec::new(),
            bounty_amount: 0,
            bounty_id: None,
            is_closed: false,
            is_accepted: false,
            accepted_answer_id: None,
            view_count: 0,
            comment_ids: Vec::new(),
        }
    }
}

/// An answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(default)]
    pub id: DocumentId,
    /// Parent question; never changes after creation.
    pub question_id: DocumentId,
    pub content: String,
    pub author: Principal,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub upvotes: Vec<Principal>,
    #[serde(default)]
    pub downvotes: Vec<Principal>,
    #[serde(default)]
    pub is_accepted: bool,
    #[serde(default)]
    pub comment_ids: Vec<DocumentId>,
}

impl Answer {
    pub fn new(question_id: impl Into<DocumentId>, content: impl Into<String>, author: Principal) -> Self {
        Self {
            id: DocumentId::new(),
            question_id: question_id.into(),
            content: content.into(),
            author,
            created_at: 0,
            updated_at: 0,
            version: 0,
            vote_count: 0,
            upvotes: Vec::new(),
            downvotes: Vec::new(),
            is_accepted: false,
            comment_ids: Vec::new(),
        }
    }
}

/// A comment on a question or an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: DocumentId,
    pub parent_id: DocumentId,
    pub parent_kind: ContentKind,
    pub content: String,
    pub author: Principal,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub version: u64,
}

impl Comment {
    pub fn new(
        parent_kind: ContentKind,
        parent_id: impl Into<DocumentId>,
        content: impl Into<String>,
        author: Principal,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            parent_id: parent_id.into(),
            parent_kind,
            content: content.into(),
            author,
            created_at: 0,
            updated_at: 0,
            version: 0,
        }
    }
}

/// Usage counter for a tag. The tag name doubles as the document id.
///
/// `count` is never decremented, so it can overstate usage once questions
/// are removed out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default)]
    pub id: DocumentId,
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub version: u64,
}

impl Tag {
    /// A tag seen for the first time.
    pub fn first_use(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            count: 1,
            created_at: 0,
            updated_at: 0,
            version: 0,
        }
    }
}

// =============================================================================
// CLUSTER C: INCENTIVES
// =============================================================================

/// A reward placed on a question by a sponsor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounty {
    #[serde(default)]
    pub id: DocumentId,
    pub question_id: DocumentId,
    pub sponsor: Principal,
    /// Amount in base units; always positive.
    pub amount: u64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub paid_to: Option<Principal>,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub version: u64,
}

impl Bounty {
    /// An open, unpaid bounty.
    pub fn new(question_id: impl Into<DocumentId>, sponsor: Principal, amount: u64) -> Self {
        Self {
            id: DocumentId::new(),
            question_id: question_id.into(),
            sponsor,
            amount,
            is_active: true,
            is_paid: false,
            paid_to: None,
            created_at: 0,
            updated_at: 0,
            version: 0,
        }
    }
}

// =============================================================================
// CLUSTER D: GOVERNANCE
// =============================================================================

/// Category of a DAO proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalKind {
    Feature,
    Parameter,
    Bounty,
    Other,
}

impl FromStr for ProposalKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "feature" => Ok(ProposalKind::Feature),
            "parameter" => Ok(ProposalKind::Parameter),
            "bounty" => Ok(ProposalKind::Bounty),
            "other" => Ok(ProposalKind::Other),
            other => Err(TypeError::UnknownVariant {
                kind: "proposal kind",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProposalKind::Feature => "feature",
            ProposalKind::Parameter => "parameter",
            ProposalKind::Bounty => "bounty",
            ProposalKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// Lifecycle of a DAO proposal.
///
/// `Open -> Approved -> Implemented` or `Open -> Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Open,
    Approved,
    Rejected,
    Implemented,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProposalStatus::Open => "open",
            ProposalStatus::Approved => "approved",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::Implemented => "implemented",
        };
        f.write_str(s)
    }
}

/// A governance proposal voted on by principals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    #[serde(default)]
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub proposer: Principal,
    pub kind: ProposalKind,
    pub status: ProposalStatus,
    pub vote_end_timestamp: Timestamp,
    #[serde(default)]
    pub votes_for: u64,
    #[serde(default)]
    pub votes_against: u64,
    #[serde(default)]
    pub voter_addresses: Vec<Principal>,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub version: u64,
}

impl Proposal {
    /// An open proposal with no votes, closing at `vote_end_timestamp`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        proposer: Principal,
        kind: ProposalKind,
        vote_end_timestamp: Timestamp,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            title: title.into(),
            description: description.into(),
            proposer,
            kind,
            status: ProposalStatus::Open,
            vote_end_timestamp,
            votes_for: 0,
            votes_against: 0,
            voter_addresses: Vec::new(),
            created_at: 0,
            updated_at: 0,
            version: 0,
        }
    }
}
