//! # Documents and Collections
//!
//! A `Document` is a record tagged with the collection it lives in. The
//! store persists documents as JSON objects and validates them against the
//! collection's record type on every read and write.

use crate::entities::{Answer, Bounty, Comment, DocumentId, Proposal, Question, Tag};
use crate::errors::TypeError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Named collections in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Questions,
    Answers,
    Comments,
    Tags,
    Bounties,
    Proposals,
}

impl Collection {
    /// Every collection, in initialization order.
    pub const ALL: [Collection; 6] = [
        Collection::Questions,
        Collection::Answers,
        Collection::Comments,
        Collection::Tags,
        Collection::Bounties,
        Collection::Proposals,
    ];

    /// Storage name of the collection.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Questions => "questions",
            Collection::Answers => "answers",
            Collection::Comments => "comments",
            Collection::Tags => "tags",
            Collection::Bounties => "bounties",
            Collection::Proposals => "proposals",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| TypeError::UnknownVariant {
                kind: "collection",
                value: s.to_string(),
            })
    }
}

/// A record tagged with its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Question(Question),
    Answer(Answer),
    Comment(Comment),
    Tag(Tag),
    Bounty(Bounty),
    Proposal(Proposal),
}

impl Document {
    /// Collection this document belongs to.
    pub fn collection(&self) -> Collection {
        match self {
            Document::Question(_) => Collection::Questions,
            Document::Answer(_) => Collection::Answers,
            Document::Comment(_) => Collection::Comments,
            Document::Tag(_) => Collection::Tags,
            Document::Bounty(_) => Collection::Bounties,
            Document::Proposal(_) => Collection::Proposals,
        }
    }

    /// Document id (empty before the store assigns one).
    pub fn id(&self) -> &str {
        match self {
            Document::Question(r) => &r.id,
            Document::Answer(r) => &r.id,
            Document::Comment(r) => &r.id,
            Document::Tag(r) => &r.id,
            Document::Bounty(r) => &r.id,
            Document::Proposal(r) => &r.id,
        }
    }

    /// Serialize to the persisted JSON object.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Document::Question(r) => serde_json::to_value(r),
            Document::Answer(r) => serde_json::to_value(r),
            Document::Comment(r) => serde_json::to_value(r),
            Document::Tag(r) => serde_json::to_value(r),
            Document::Bounty(r) => serde_json::to_value(r),
            Document::Proposal(r) => serde_json::to_value(r),
        }
    }

    /// Parse a persisted JSON object as a record of `collection`.
    ///
    /// Fails when the object does not match the collection's schema.
    pub fn from_value(collection: Collection, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match collection {
            Collection::Questions => Document::Question(serde_json::from_value(value)?),
            Collection::Answers => Document::Answer(serde_json::from_value(value)?),
            Collection::Comments => Document::Comment(serde_json::from_value(value)?),
            Collection::Tags => Document::Tag(serde_json::from_value(value)?),
            Collection::Bounties => Document::Bounty(serde_json::from_value(value)?),
            Collection::Proposals => Document::Proposal(serde_json::from_value(value)?),
        })
    }
}

/// A typed record stored in exactly one collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection the record lives in.
    const COLLECTION: Collection;

    /// Store-assigned id.
    fn id(&self) -> &DocumentId;

    /// Wrap in the collection tag.
    fn into_document(self) -> Document;

    /// Unwrap from a document of the matching collection.
    fn from_document(document: Document) -> Option<Self>;
}

macro_rules! impl_record {
    ($ty:ident, $variant:ident, $collection:ident) => {
        impl Record for $ty {
            const COLLECTION: Collection = Collection::$collection;

            fn id(&self) -> &DocumentId {
                &self.id
            }

            fn into_document(self) -> Document {
                Document::$variant(self)
            }

            fn from_document(document: Document) -> Option<Self> {
                match document {
                    Document::$variant(record) => Some(record),
                    _ => None,
                }
            }
        }
    };
}

impl_record!(Question, Question, Questions);
impl_record!(Answer, Answer, Answers);
impl_record!(Comment, Comment, Comments);
impl_record!(Tag, Tag, Tags);
impl_record!(Bounty, Bounty, Bounties);
impl_record!(Proposal, Proposal, Proposals);
