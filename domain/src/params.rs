//! Case-insensitive lookup over the agent's ordered name/value parameters.

use crate::Parameter;

/// Return the value of the first parameter whose name matches `name`,
/// ignoring case.
pub fn find_parameter<'a>(params: &'a [Parameter], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.name.to_lowercase() == name.to_lowercase())
        .map(|p| p.value.as_str())
}
