//! Action descriptor and replay script loader.
//!
//! A descriptor is a JSON object whose `"type"` field names the action, e.g.
//! `{"type": "goldRock.mined", "index": 0}`. A script is an ordered list of
//! descriptors, each with an optional `createdAt` in epoch milliseconds.

use std::path::Path;

use anyhow::Context;
use farm_core::{Action, ActionError, ActionKind, Timestamp};
use serde::Deserialize;
use serde_json::Value;

use crate::loaders::{LoadResult, read_file};

/// Why a descriptor could not be turned into an [`Action`].
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("action descriptor must be a JSON object")]
    NotAnObject,

    #[error("action descriptor has no string \"type\" field")]
    MissingType,

    #[error(transparent)]
    UnknownType(#[from] ActionError),

    #[error("malformed {kind} payload: {source}")]
    Malformed {
        kind: ActionKind,
        source: serde_json::Error,
    },
}

/// One scripted action and the time it was issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptStep {
    /// `None` means "now" at replay time.
    pub created_at: Option<Timestamp>,
    pub action: Action,
}

/// Ordered actions replayed against a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionScript {
    pub steps: Vec<ScriptStep>,
}

impl ActionScript {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScriptStep> {
        self.steps.iter()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStep {
    #[serde(default)]
    created_at: Option<Timestamp>,
    action: Value,
}

/// Loader for action descriptors and scripts.
pub struct ActionLoader;

impl ActionLoader {
    /// Converts one descriptor into a typed action.
    ///
    /// The discriminant is checked before the payload, so an unrecognised
    /// `"type"` is always reported as [`ActionError::UnknownAction`] rather
    /// than as a generic parse failure.
    pub fn parse_descriptor(descriptor: &Value) -> Result<Action, DescriptorError> {
        let object = descriptor.as_object().ok_or(DescriptorError::NotAnObject)?;
        let name = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DescriptorError::MissingType)?;
        let kind = ActionKind::parse(name)?;

        serde_json::from_value(descriptor.clone())
            .map_err(|source| DescriptorError::Malformed { kind, source })
    }

    /// Parses a descriptor from JSON text.
    pub fn parse_descriptor_str(content: &str) -> LoadResult<Action> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action JSON: {}", e))?;
        Ok(Self::parse_descriptor(&value)?)
    }

    /// Parses a script: a JSON array of `{"createdAt"?, "action"}` objects.
    pub fn parse_script(content: &str) -> LoadResult<ActionScript> {
        let raw: Vec<RawStep> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script JSON: {}", e))?;

        let steps = raw
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                let action = Self::parse_descriptor(&step.action)
                    .with_context(|| format!("script step {index}"))?;
                Ok(ScriptStep {
                    created_at: step.created_at,
                    action,
                })
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(ActionScript { steps })
    }

    /// Load a script from a JSON file.
    pub fn load_script(path: &Path) -> LoadResult<ActionScript> {
        let content = read_file(path)?;
        Self::parse_script(&content).with_context(|| format!("in {}", path.display()))
    }
}
