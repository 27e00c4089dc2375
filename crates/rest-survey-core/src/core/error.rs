// crates/rest-survey-core/src/core/error.rs
// ============================================================================
// Module: Survey Errors
// Description: Error taxonomy for resource validation and lookup.
// Purpose: Carry the exact client-facing message for every failure.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`SurveyError`] display strings are the public `message` values returned by
//! the HTTP surface, so they are part of the API contract. [`ErrorKind`]
//! classifies errors for status mapping without tying core to HTTP.
//!
//! Foo lookups keep two message forms: the read endpoint quotes the id
//! (`foo 'x' not found`) while mutating endpoints do not (`foo x not found`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Error Kinds
// ============================================================================

/// Error classification used to pick a transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request payload failed validation.
    Invalid,
    /// The addressed resource does not exist.
    NotFound,
    /// The backing store failed.
    Internal,
}

// ============================================================================
// SECTION: Survey Error
// ============================================================================

/// Resource validation and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// A required field is absent or null.
    #[error("{0} is a required field")]
    MissingField(&'static str),
    /// A field carries a value of the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidField {
        /// Offending field name.
        field: &'static str,
        /// Expected type description (e.g. "a string").
        expected: &'static str,
    },
    /// The body names fields outside the recognized set.
    #[error("unrecognized fields: {}", .0.join(", "))]
    UnrecognizedFields(Vec<String>),
    /// A bar replacement omitted one of its required fields.
    #[error("category, description, and baz are required")]
    IncompleteBarReplacement,
    /// A foo update attempted to rename the foo.
    #[error("name cannot be changed")]
    NameImmutable,
    /// A foo with the same name already exists.
    #[error("name must be unique")]
    DuplicateFoo,
    /// A bar with the same (`id`, `category`) already exists in the foo.
    #[error("id and category must be unique")]
    DuplicateBar,
    /// Foo lookup miss reported by the foo read endpoint.
    #[error("foo '{0}' not found")]
    FooLookupMissing(String),
    /// Foo lookup miss reported by every other endpoint.
    #[error("foo {0} not found")]
    FooNotFound(String),
    /// Bar lookup miss.
    #[error("bar {0} not found")]
    BarNotFound(String),
    /// The request body is not parseable JSON.
    #[error("request body is not valid JSON")]
    MalformedBody,
    /// The request body parsed but is not a JSON object.
    #[error("request body must be a JSON object")]
    BodyNotObject,
    /// The backing store failed.
    #[error("internal store error")]
    Store(#[from] StoreError),
}

impl SurveyError {
    /// Returns the classification for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FooLookupMissing(_) | Self::FooNotFound(_) | Self::BarNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::Store(_) => ErrorKind::Internal,
            Self::MissingField(_)
            | Self::InvalidField {
                ..
            }
            | Self::UnrecognizedFields(_)
            | Self::IncompleteBarReplacement
            | Self::NameImmutable
            | Self::DuplicateFoo
            | Self::DuplicateBar
            | Self::MalformedBody
            | Self::BodyNotObject => ErrorKind::Invalid,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
