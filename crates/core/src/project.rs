//! Inbound project payloads and their declared shape rules.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

/// Body of `POST /projects` exactly as it arrives on the wire.
///
/// `name` is optional at the serde level so that a missing name is reported
/// as a field violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectPayload {
    #[validate(
        required(message = "Name is required"),
        length(min = 3, max = 25, message = "Name must be between 3 and 25 characters")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(url(message = "Repo link must be a valid absolute URL"))]
    pub repo_link: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(url(message = "Live site link must be a valid absolute URL"))]
    pub live_site_link: Option<String>,
}

/// A creation payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub repo_link: Option<String>,
    pub live_site_link: Option<String>,
}

/// Body of `PATCH /projects/{id}`. Only the links are updatable; any other
/// key in the body (including `id` and `name`) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "require_a_link", skip_on_field_errors = false))]
pub struct ProjectUpdate {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(url(message = "Repo link must be a valid absolute URL"))]
    pub repo_link: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(url(message = "Live site link must be a valid absolute URL"))]
    pub live_site_link: Option<String>,
}

/// Links may be omitted but not sent as `null`.
fn non_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

fn require_a_link(update: &ProjectUpdate) -> Result<(), ValidationError> {
    if update.repo_link.is_none() && update.live_site_link.is_none() {
        let mut err = ValidationError::new("missing_link");
        err.message =
            Some("Either the live site link or repo link must be updated".into());
        return Err(err);
    }
    Ok(())
}
