//! Request handling for agent coach lookups.
//!
//! Every event produces a well-formed envelope: an answer, a "no data"
//! sentence (also used when the store fails), or the fixed apology text.

use agent_common::{AgentEvent, AgentResponse, EnvelopeError};
use domain::service::CoachService;
use domain::validate::CoachQuery;
use domain::{CoachRepository, CoreError};
use serde_json::Value;
use std::fmt;
use tracing::{error, info, warn};

/// Reasons a request ends in the apology reply.
#[derive(Debug)]
pub enum HandlerError {
    Event(EnvelopeError),
    Validation(CoreError),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Event(e) => write!(f, "malformed event: {e}"),
            HandlerError::Validation(e) => write!(f, "invalid request: {e}"),
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<EnvelopeError> for HandlerError {
    fn from(e: EnvelopeError) -> Self {
        HandlerError::Event(e)
    }
}

impl From<CoreError> for HandlerError {
    fn from(e: CoreError) -> Self {
        HandlerError::Validation(e)
    }
}

/// Handle one raw agent event. Never fails.
pub fn handle_event<R: CoachRepository>(svc: &CoachService<R>, raw: &Value) -> AgentResponse {
    match answer_event(svc, raw) {
        Ok(resp) => {
            info!(body = %resp.body(), "response");
            resp
        }
        Err(e) => {
            error!(err = %e, "coach request failed");
            AgentResponse::apology(raw)
        }
    }
}

fn answer_event<R: CoachRepository>(
    svc: &CoachService<R>,
    raw: &Value,
) -> Result<AgentResponse, HandlerError> {
    let event = AgentEvent::from_value(raw)?;
    info!(
        action_group = %event.action_group,
        function = %event.function,
        session_id = event.session_id.as_deref().unwrap_or(""),
        params = event.parameters.len(),
        "agent event"
    );

    let query = CoachQuery::from_parameters(&event.parameters)?;
    let answer = svc.answer(&query);

    match &answer.fault {
        Some(fault) => error!(
            pk = %answer.key.partition(),
            sk = %answer.key.sort(),
            err = %fault,
            "coach lookup failed; answering as not found"
        ),
        None if answer.record.is_none() => warn!(
            pk = %answer.key.partition(),
            sk = %answer.key.sort(),
            "coach not found"
        ),
        None => info!(
            pk = %answer.key.partition(),
            sk = %answer.key.sort(),
            "coach found"
        ),
    }

    Ok(AgentResponse::text(&event, answer.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_common::APOLOGY_TEXT;
    use domain::adapters::memory_repo::{InMemoryCoachRepo, UnavailableRepo};
    use domain::{CoachKey, CoachRecord};
    use serde_json::json;

    fn event(params: Value) -> Value {
        json!({
            "messageVersion": "1.0",
            "agent": {"name": "coach-agent", "id": "AGENT1", "alias": "TSTALIASID", "version": "DRAFT"},
            "sessionId": "123",
            "actionGroup": "CoachData",
            "function": "getCoachData",
            "parameters": params
        })
    }

    fn patriots_params() -> Value {
        json!([
            {"name": "TeamName", "type": "string", "value": "Patriots"},
            {"name": "position", "type": "string", "value": "Head Coach"},
            {"name": "year", "type": "string", "value": "2019"}
        ])
    }

    fn seeded_service() -> CoachService<InMemoryCoachRepo> {
        let repo: InMemoryCoachRepo = vec![CoachRecord::new(
            &CoachKey::new("patriots#head", "2019"),
            Some("Bill Belichick".into()),
        )]
        .into_iter()
        .collect();
        CoachService::new(repo)
    }

    #[test]
    fn found_record_answers_with_original_names() {
        let resp = handle_event(&seeded_service(), &event(patriots_params()));
        assert_eq!(resp.body(), "The Patriots Head Coach coach in the 2019 Season was Bill Belichick");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "response": {
                    "actionGroup": "CoachData",
                    "function": "getCoachData",
                    "functionResponse": {"responseBody": {"TEXT": {
                        "body": "The Patriots Head Coach coach in the 2019 Season was Bill Belichick"
                    }}}
                },
                "messageVersion": "1.0"
            })
        );
    }

    #[test]
    fn parameter_names_are_case_insensitive() {
        let params = json!([
            {"name": "TEAMNAME", "value": "Patriots"},
            {"name": "Position", "value": "head coach"},
            {"name": "YEAR", "value": 2019}
        ]);
        let resp = handle_event(&seeded_service(), &event(params));
        assert_eq!(resp.body(), "The Patriots head coach coach in the 2019 Season was Bill Belichick");
    }

    #[test]
    fn missing_record_answers_no_data() {
        let resp = handle_event(&CoachService::new(InMemoryCoachRepo::new()), &event(patriots_params()));
        assert_eq!(resp.body(), "No coach data found for Patriots Head Coach in 2019");
        assert_eq!(resp.response.action_group, "CoachData");
    }

    #[test]
    fn record_without_coach_is_unknown() {
        let repo: InMemoryCoachRepo = vec![CoachRecord::new(&CoachKey::new("patriots#head", "2019"), None)]
            .into_iter()
            .collect();
        let resp = handle_event(&CoachService::new(repo), &event(patriots_params()));
        assert_eq!(resp.body(), "The Patriots Head Coach coach in the 2019 Season was Unknown");
    }

    #[test]
    fn store_fault_is_indistinguishable_from_miss() {
        let svc = CoachService::new(UnavailableRepo::new("AccessDeniedException"));
        let resp = handle_event(&svc, &event(patriots_params()));
        assert_eq!(resp.body(), "No coach data found for Patriots Head Coach in 2019");
        assert_ne!(resp.body(), APOLOGY_TEXT);
    }

    #[test]
    fn missing_year_returns_apology_with_echo() {
        let params = json!([
            {"name": "TeamName", "value": "Patriots"},
            {"name": "position", "value": "Head Coach"}
        ]);
        let resp = handle_event(&seeded_service(), &event(params));
        assert_eq!(resp.body(), APOLOGY_TEXT);
        assert_eq!(resp.response.action_group, "CoachData");
        assert_eq!(resp.response.function, "getCoachData");
        assert_eq!(resp.message_version, "1.0");
    }

    #[test]
    fn empty_parameter_value_returns_apology() {
        let params = json!([
            {"name": "TeamName", "value": "Patriots"},
            {"name": "position", "value": ""},
            {"name": "year", "value": "2019"}
        ]);
        let resp = handle_event(&seeded_service(), &event(params));
        assert_eq!(resp.body(), APOLOGY_TEXT);
    }

    #[test]
    fn malformed_event_uses_defaults() {
        let resp = handle_event(&seeded_service(), &json!({"parameters": patriots_params()}));
        assert_eq!(resp.body(), APOLOGY_TEXT);
        assert_eq!(resp.response.action_group, "");
        assert_eq!(resp.response.function, "");
        assert_eq!(resp.message_version, "1.0");
    }

    #[test]
    fn event_missing_agent_echoes_what_it_has() {
        let mut raw = event(patriots_params());
        raw.as_object_mut().unwrap().remove("agent");
        let resp = handle_event(&seeded_service(), &raw);
        assert_eq!(resp.body(), APOLOGY_TEXT);
        assert_eq!(resp.response.action_group, "CoachData");
        assert_eq!(resp.response.function, "getCoachData");
    }
}
