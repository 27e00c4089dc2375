// crates/rest-survey-core/src/core/payload.rs
// ============================================================================
// Module: Request Payloads
// Description: Typed request payloads parsed from untrusted JSON bodies.
// Purpose: Enforce field presence, field types, and recognized field sets.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Each write operation has a payload type built from a raw JSON object with
//! `from_body`. Parsing is explicit rather than derive-based so that every
//! rejection carries the exact contract message and checks run in a fixed
//! order: unrecognized fields, then presence, then types.
//!
//! Optional string fields treat `null` as absent. `baz` distinguishes absent
//! from `null` through [`BazUpdate`] so a patch can clear it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::core::error::SurveyError;
use crate::core::model::Baz;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fields accepted by a foo replacement.
const FOO_REPLACE_FIELDS: &[&str] = &["name", "description"];
/// Fields accepted by bar patch and replacement.
const BAR_UPDATE_FIELDS: &[&str] = &["category", "description", "baz"];

// ============================================================================
// SECTION: Body Parsing
// ============================================================================

/// Raw JSON object body.
pub type JsonBody = Map<String, Value>;

/// Requested change to a bar's baz.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BazUpdate {
    /// `baz` was absent; keep the current value.
    #[default]
    Keep,
    /// `baz` was `null`; clear it.
    Clear,
    /// `baz` was an object; store it.
    Set(Baz),
}

impl BazUpdate {
    /// Returns the baz to store when there is no previous value.
    #[must_use]
    pub fn into_baz(self) -> Option<Baz> {
        match self {
            Self::Keep | Self::Clear => None,
            Self::Set(baz) => Some(baz),
        }
    }
}

/// Parses raw request bytes into a JSON object.
///
/// An empty (or whitespace-only) body is treated as `{}`.
///
/// # Errors
///
/// Returns [`SurveyError::MalformedBody`] for invalid JSON and
/// [`SurveyError::BodyNotObject`] for non-object JSON.
pub fn parse_body(bytes: &[u8]) -> Result<JsonBody, SurveyError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonBody::new());
    }
    let value: Value = serde_json::from_slice(bytes).map_err(|_| SurveyError::MalformedBody)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SurveyError::BodyNotObject),
    }
}

// ============================================================================
// SECTION: Foo Payloads
// ============================================================================

/// Payload for creating a foo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooCreate {
    /// Foo name.
    pub name: String,
    /// Description, defaulted to empty.
    pub description: String,
}

impl FooCreate {
    /// Parses a create payload. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when `name` is missing or a field has the wrong type.
    pub fn from_body(body: &JsonBody) -> Result<Self, SurveyError> {
        require_present(body, &["name"])?;
        let name = required_string(body, "name")?;
        let description = optional_string(body, "description")?.unwrap_or_default();
        Ok(Self {
            name,
            description,
        })
    }
}

/// Payload for replacing a foo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooReplace {
    /// Name echoed by the client; must match the existing name when present.
    pub name: Option<String>,
    /// Replacement description, defaulted to empty.
    pub description: String,
}

impl FooReplace {
    /// Parses a replacement payload.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] for unrecognized fields or wrong field types.
    pub fn from_body(body: &JsonBody) -> Result<Self, SurveyError> {
        reject_unrecognized(body, FOO_REPLACE_FIELDS)?;
        let name = optional_string(body, "name")?;
        let description = optional_string(body, "description")?.unwrap_or_default();
        Ok(Self {
            name,
            description,
        })
    }
}

// ============================================================================
// SECTION: Bar Payloads
// ============================================================================

/// Payload for creating a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarCreate {
    /// Bar identifier.
    pub id: String,
    /// Bar category.
    pub category: String,
    /// Description, defaulted to empty.
    pub description: String,
    /// Optional baz payload.
    pub baz: Option<Baz>,
}

impl BarCreate {
    /// Parses a create payload. `id` is checked before `category`; unknown
    /// fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when a required field is missing or mistyped.
    pub fn from_body(body: &JsonBody) -> Result<Self, SurveyError> {
        require_present(body, &["id", "category"])?;
        let id = required_string(body, "id")?;
        let category = required_string(body, "category")?;
        let description = optional_string(body, "description")?.unwrap_or_default();
        let baz = baz_field(body)?.into_baz();
        Ok(Self {
            id,
            category,
            description,
            baz,
        })
    }
}

/// Partial bar update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BarPatch {
    /// New category when provided.
    pub category: Option<String>,
    /// New description when provided.
    pub description: Option<String>,
    /// Requested baz change.
    pub baz: BazUpdate,
}

impl BarPatch {
    /// Parses a patch payload.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] for unrecognized fields or wrong field types.
    pub fn from_body(body: &JsonBody) -> Result<Self, SurveyError> {
        reject_unrecognized(body, BAR_UPDATE_FIELDS)?;
        Ok(Self {
            category: optional_string(body, "category")?,
            description: optional_string(body, "description")?,
            baz: baz_field(body)?,
        })
    }
}

/// Full bar replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarReplace {
    /// Replacement category.
    pub category: String,
    /// Replacement description.
    pub description: String,
    /// Replacement baz.
    pub baz: Option<Baz>,
}

impl BarReplace {
    /// Parses a replacement payload. All recognized fields must be present;
    /// `baz` may be `null`.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] for unrecognized fields, missing fields, or
    /// wrong field types.
    pub fn from_body(body: &JsonBody) -> Result<Self, SurveyError> {
        reject_unrecognized(body, BAR_UPDATE_FIELDS)?;
        if !BAR_UPDATE_FIELDS.iter().all(|field| body.contains_key(*field)) {
            return Err(SurveyError::IncompleteBarReplacement);
        }
        require_present(body, &["category"])?;
        Ok(Self {
            category: required_string(body, "category")?,
            description: optional_string(body, "description")?.unwrap_or_default(),
            baz: baz_field(body)?.into_baz(),
        })
    }
}

// ============================================================================
// SECTION: Field Helpers
// ============================================================================

/// Rejects any key outside `allowed`, listing offenders in key order.
fn reject_unrecognized(body: &JsonBody, allowed: &[&str]) -> Result<(), SurveyError> {
    let unknown: Vec<String> =
        body.keys().filter(|key| !allowed.contains(&key.as_str())).cloned().collect();
    if unknown.is_empty() { Ok(()) } else { Err(SurveyError::UnrecognizedFields(unknown)) }
}

/// Fails on the first of `fields` that is absent or `null`, before any type check.
fn require_present(body: &JsonBody, fields: &[&'static str]) -> Result<(), SurveyError> {
    match fields.iter().copied().find(|field| body.get(*field).is_none_or(Value::is_null)) {
        Some(field) => Err(SurveyError::MissingField(field)),
        None => Ok(()),
    }
}

/// Reads a string field that must be present and non-null.
fn required_string(body: &JsonBody, field: &'static str) -> Result<String, SurveyError> {
    optional_string(body, field)?.ok_or(SurveyError::MissingField(field))
}

/// Reads a string field where absent and `null` both mean "not provided".
fn optional_string(body: &JsonBody, field: &'static str) -> Result<Option<String>, SurveyError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(SurveyError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

/// Reads `baz` as a [`BazUpdate`].
fn baz_field(body: &JsonBody) -> Result<BazUpdate, SurveyError> {
    match body.get("baz") {
        None => Ok(BazUpdate::Keep),
        Some(Value::Null) => Ok(BazUpdate::Clear),
        Some(Value::Object(map)) => Ok(BazUpdate::Set(map.clone())),
        Some(_) => Err(SurveyError::InvalidField {
            field: "baz",
            expected: "an object",
        }),
    }
}
