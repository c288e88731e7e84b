//! Write-boundary validation helpers.
//!
//! Shape checks come from the `validator` derives on the DTOs; the helpers
//! here turn their output into a single message and add the referential and
//! temporal checks the derives cannot express.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Run the derived shape checks on a DTO.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// Flatten validation errors into one deterministic, human-readable message.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Reject a write whose foreign key points at a missing record.
pub fn require_reference(
    exists: bool,
    field: &str,
    entity: &str,
    id: &str,
) -> Result<(), CoreError> {
    if exists {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} references unknown {entity} '{id}'"
        )))
    }
}

/// `resolvedAt`, when set, must not precede `createdAt`.
pub fn check_resolution_order(
    created_at: Timestamp,
    resolved_at: Option<Timestamp>,
) -> Result<(), CoreError> {
    match resolved_at {
        Some(resolved) if resolved < created_at => Err(CoreError::Validation(
            "resolvedAt must not be earlier than createdAt".to_string(),
        )),
        _ => Ok(()),
    }
}
