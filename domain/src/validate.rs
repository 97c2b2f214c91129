//! Extraction and validation of the coach query from agent parameters.

use crate::params::find_parameter;
use crate::{CoachKey, CoreError, Parameter};

pub const PARAM_TEAM: &str = "TeamName";
pub const PARAM_POSITION: &str = "position";
pub const PARAM_YEAR: &str = "year";

/// Validated query holding the original (pre-normalization) strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoachQuery {
    pub team: String,
    pub position: String,
    pub year: String,
}

impl CoachQuery {
    /// Pull `TeamName`, `position` and `year` out of the parameter list.
    ///
    /// A parameter counts as missing when no entry matches its name or when
    /// its value is empty. Whitespace-only values pass and normalize to an
    /// empty key component.
    pub fn from_parameters(params: &[Parameter]) -> Result<Self, CoreError> {
        let year = required(params, PARAM_YEAR);
        let position = required(params, PARAM_POSITION);
        let team = required(params, PARAM_TEAM);

        match (team, position, year) {
            (Some(team), Some(position), Some(year)) => Ok(Self {
                team: team.to_string(),
                position: position.to_string(),
                year: year.to_string(),
            }),
            (team, position, year) => {
                let mut missing = Vec::new();
                if team.is_none() {
                    missing.push("team");
                }
                if position.is_none() {
                    missing.push("position");
                }
                if year.is_none() {
                    missing.push("year");
                }
                Err(CoreError::MissingParameters(missing))
            }
        }
    }

    pub fn key(&self) -> CoachKey {
        CoachKey::from_parts(&self.team, &self.position, &self.year)
    }
}

fn required<'a>(params: &'a [Parameter], name: &str) -> Option<&'a str> {
    find_parameter(params, name).filter(|v| !v.is_empty())
}
