use std::str::FromStr;
use serde::Deserialize;

/// When the launcher holds the terminal open after the tool process exits.
///
/// - `Failure`: pause only when the tool exits non-zero (default). This is
///   the classic "crash banner + pause" of the batch wrappers this tool
///   replaces: the operator gets to read the traceback before the window
///   closes.
/// - `Always`: pause even after a clean exit.
/// - `Never`: never pause; useful for scripted invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseBehaviour {
    Failure,
    Always,
    Never,
}

impl Default for PauseBehaviour {
    fn default() -> Self {
        PauseBehaviour::Failure
    }
}

impl FromStr for PauseBehaviour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "failure" => Ok(PauseBehaviour::Failure),
            "always" => Ok(PauseBehaviour::Always),
            "never" => Ok(PauseBehaviour::Never),
            other => Err(format!(
                "invalid pause behaviour: {other} (expected \"failure\", \"always\" or \"never\")"
            )),
        }
    }
}
