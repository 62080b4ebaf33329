//! Schema validation with a discriminated result.
//!
//! The rules themselves live on the payload types in [`crate::project`] as
//! `validator` derives. This module runs them and turns the outcome into a
//! [`Validation`] value the handlers branch on.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::project::{NewProject, NewProjectPayload, ProjectUpdate};

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

/// Outcome of validating a payload against a target shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    /// The payload conforms; carries the coerced value.
    Valid(T),
    /// The payload was rejected; one entry per violated rule.
    Invalid(Vec<FieldViolation>),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the offending field, `None` for payload-level rules.
    pub field: Option<String>,
    /// Machine-readable rule identifier (e.g. `length`, `url`).
    pub code: String,
    pub message: String,
}

/// Validate a creation payload.
pub fn validate_new_project(payload: NewProjectPayload) -> Validation<NewProject> {
    if let Err(errors) = payload.validate() {
        return Validation::Invalid(violations(&errors));
    }

    match payload.name {
        Some(name) => Validation::Valid(NewProject {
            name,
            repo_link: payload.repo_link,
            live_site_link: payload.live_site_link,
        }),
        // `required` already rejects this; kept so the match is total.
        None => Validation::Invalid(vec![FieldViolation {
            field: Some("name".to_string()),
            code: "required".to_string(),
            message: "Name is required".to_string(),
        }]),
    }
}

/// Validate a partial-update payload.
pub fn validate_project_update(payload: ProjectUpdate) -> Validation<ProjectUpdate> {
    match payload.validate() {
        Ok(()) => Validation::Valid(payload),
        Err(errors) => Validation::Invalid(violations(&errors)),
    }
}

/// Flatten `validator` errors into a stable, wire-named list.
fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field: &str = field.as_ref();
            let field = (field != SCHEMA_KEY).then(|| wire_name(field).to_string());
            errs.iter().map(move |err| FieldViolation {
                field: field.clone(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();

    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

/// Map Rust field names to the camelCase names clients send.
fn wire_name(field: &str) -> &str {
    match field {
        "repo_link" => "repoLink",
        "live_site_link" => "liveSiteLink",
        other => other,
    }
}
