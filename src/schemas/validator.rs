use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{PlannerError, Result};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Check tool arguments against the tool's input schema before dispatch
pub fn validate_arguments(schema: &Value, arguments: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            PlannerError::InvalidParams(format!("failed to prepare schema for validation: {err}"))
        })?;

    if let Err(errors) = validator.validate(arguments) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail = if details.is_empty() {
            "arguments failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail.push_str("; additional errors truncated");
        }

        return Err(PlannerError::InvalidParams(detail));
    }

    Ok(())
}

/// Deserialize validated arguments into a typed parameter struct
pub fn deserialize_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_path_to_error::deserialize(params)
        .map_err(|err| PlannerError::InvalidParams(format!("at {}: {}", err.path(), err)))
}
