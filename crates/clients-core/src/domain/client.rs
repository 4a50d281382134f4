//! Client domain types.
//!
//! These types represent client records in the system, independent of any
//! infrastructure concerns (database, filesystem, etc.).

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Declaration order of the editable fields, used to sort violation messages.
const FIELD_ORDER: [&str; 4] = ["name", "last_name", "email", "create_at"];

// ─────────────────────────────────────────────────────────────────────────────
// Persisted Client
// ─────────────────────────────────────────────────────────────────────────────

/// A client that exists in the store with an assigned ID.
///
/// Use [`NewClient`] for records that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Store-assigned identifier, immutable once assigned.
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    /// Caller-supplied date associated with the record.
    pub create_at: NaiveDate,
    /// Filename of the uploaded photo inside the uploads directory.
    pub photo: Option<String>,
}

impl Client {
    /// The photo filename, if one is set and non-empty.
    pub fn photo_name(&self) -> Option<&str> {
        self.photo.as_deref().filter(|name| !name.is_empty())
    }

    /// Overwrite the editable details from a validated candidate.
    ///
    /// `id` and `photo` are left untouched.
    pub fn apply(&mut self, details: NewClient) {
        self.name = details.name;
        self.last_name = details.last_name;
        self.email = details.email;
        self.create_at = details.create_at;
    }
}

/// A validated client that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub create_at: NaiveDate,
}

// ─────────────────────────────────────────────────────────────────────────────
// Candidate Body
// ─────────────────────────────────────────────────────────────────────────────

/// Candidate client body received from callers for create and update.
///
/// Every field defaults when absent or `null` so that a missing value is
/// reported as a constraint violation rather than a deserialization failure.
/// There is no
/// `photo` field: photos are only set through the upload operation, so a
/// `photo` value in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientForm {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "must not be empty"),
        custom(function = "well_formed_email")
    )]
    pub email: String,

    #[validate(required(message = "must not be null"))]
    pub create_at: Option<NaiveDate>,
}

impl ClientForm {
    /// Run the declared constraints and produce a [`NewClient`].
    ///
    /// On failure returns one human-readable message per violation, in field
    /// declaration order.
    pub fn validated(self) -> Result<NewClient, Vec<String>> {
        self.validate().map_err(|errors| violation_messages(&errors))?;

        let Some(create_at) = self.create_at else {
            return Err(vec![violation("createAt", "must not be null")]);
        };

        Ok(NewClient {
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            create_at,
        })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty values are left to the `length` rule so they are reported once.
fn well_formed_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some(Cow::Borrowed("must be a well-formed email address"));
    Err(error)
}

/// Flatten validator output into ordered, human-readable messages.
fn violation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| {
        let field: &str = field.as_ref();
        FIELD_ORDER
            .iter()
            .position(|known| *known == field)
            .unwrap_or(FIELD_ORDER.len())
    });

    fields
        .into_iter()
        .flat_map(|(field, list)| {
            let field: &str = field.as_ref();
            let json_field = json_field_name(field);
            list.iter()
                .map(|error| {
                    let message = error
                        .message
                        .as_deref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    violation(&json_field, &message)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn violation(field: &str, message: &str) -> String {
    format!("The field, '{field}' has the following error: {message}")
}

/// Convert a snake_case field name to its camelCase JSON spelling.
fn json_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
