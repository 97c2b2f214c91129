//! Shared agent envelope types for the coach lookup workspace.
//!
//! Parses the action-group function event sent by the conversational agent
//! and builds the response envelope it expects back.

use domain::Parameter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed reply for any request that could not be processed.
pub const APOLOGY_TEXT: &str = "Sorry, there was an error processing your request.";

/// Message version echoed when the event itself did not carry one.
pub const DEFAULT_MESSAGE_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("event is missing field `{0}`")]
    MissingField(&'static str),
    #[error("event field `{field}` is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

// ============================================================================
// Inbound Event
// ============================================================================

/// Action-group function invocation sent by the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentEvent {
    /// Agent descriptor; kept opaque since only its presence is required.
    pub agent: Value,
    pub action_group: String,
    pub function: String,
    pub message_version: String,
    pub parameters: Vec<Parameter>,
    pub session_id: Option<String>,
}

#[derive(Deserialize)]
struct WireParameter {
    name: String,
    #[serde(default)]
    value: Value,
}

impl AgentEvent {
    /// Extract the event from raw JSON.
    ///
    /// `agent`, `actionGroup`, `function` and `messageVersion` are required;
    /// `parameters` defaults to an empty list.
    pub fn from_value(raw: &Value) -> Result<Self, EnvelopeError> {
        let agent = raw
            .get("agent")
            .cloned()
            .ok_or(EnvelopeError::MissingField("agent"))?;
        let action_group = required_str(raw, "actionGroup")?;
        let function = required_str(raw, "function")?;
        let message_version = required_str(raw, "messageVersion")?;

        let parameters = match raw.get("parameters") {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => {
                let wire: Vec<WireParameter> = serde_json::from_value(list.clone()).map_err(|e| {
                    EnvelopeError::InvalidField {
                        field: "parameters",
                        reason: e.to_string(),
                    }
                })?;
                wire.into_iter()
                    .map(|p| Parameter::new(p.name, value_to_text(&p.value)))
                    .collect()
            }
        };

        Ok(Self {
            agent,
            action_group,
            function,
            message_version,
            parameters,
            session_id: optional_str(raw, "sessionId"),
        })
    }
}

fn required_str(raw: &Value, field: &'static str) -> Result<String, EnvelopeError> {
    match raw.get(field) {
        None => Err(EnvelopeError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(EnvelopeError::InvalidField {
            field,
            reason: format!("expected string, got {other}"),
        }),
    }
}

fn optional_str(raw: &Value, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Textual form of a parameter value: strings as-is, numbers and booleans
/// via their JSON text, `null` as empty.
pub fn value_to_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Outbound Envelope
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub response: ActionResponse,
    #[serde(rename = "messageVersion")]
    pub message_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub action_group: String,
    pub function: String,
    pub function_response: FunctionResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(rename = "responseBody")]
    pub response_body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBody {
    pub body: String,
}

impl AgentResponse {
    /// Wrap `body` in an envelope mirroring the event's identifiers.
    pub fn text(event: &AgentEvent, body: impl Into<String>) -> Self {
        Self::build(
            event.action_group.clone(),
            event.function.clone(),
            event.message_version.clone(),
            body.into(),
        )
    }

    /// Apology envelope for a failed request, echoing whatever identifiers
    /// the raw event carried (`""` / `"1.0"` otherwise).
    pub fn apology(raw: &Value) -> Self {
        let action_group = optional_str(raw, "actionGroup").unwrap_or_default();
        let function = optional_str(raw, "function").unwrap_or_default();
        let message_version = match raw.get("messageVersion") {
            Some(v) if !v.is_null() => value_to_text(v),
            _ => DEFAULT_MESSAGE_VERSION.to_string(),
        };
        Self::build(action_group, function, message_version, APOLOGY_TEXT.to_string())
    }

    fn build(action_group: String, function: String, message_version: String, body: String) -> Self {
        Self {
            response: ActionResponse {
                action_group,
                function,
                function_response: FunctionResponse {
                    response_body: ResponseBody {
                        text: TextBody { body },
                    },
                },
            },
            message_version,
        }
    }

    pub fn body(&self) -> &str {
        &self.response.function_response.response_body.text.body
    }
}
