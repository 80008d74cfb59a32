use crate::util::options::ObserverMode;
use std::fmt;

/// Errors reported to application code by the observer API.
///
/// Failures inside the GC hook are never reported this way: they trip the disable latch instead.
#[derive(Debug)]
pub enum ObserverError {
    /// The mode needs events the runtime does not report (light mode without GC enter/exit).
    UnsupportedMode(ObserverMode),
    /// Light-mode counters are not available because the runtime does not report GC enter/exit.
    CountersUnavailable,
    /// A clock or memory probe failed.
    Probe(std::io::Error),
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObserverError::UnsupportedMode(mode) => write!(
                f,
                "mode {} needs GC enter/exit events, which this runtime does not report",
                mode
            ),
            ObserverError::CountersUnavailable => write!(
                f,
                "GC counters need GC enter/exit events, which this runtime does not report"
            ),
            ObserverError::Probe(e) => write!(f, "probe failed: {}", e),
        }
    }
}

impl std::error::Error for ObserverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObserverError::Probe(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ObserverError {
    fn from(e: std::io::Error) -> Self {
        ObserverError::Probe(e)
    }
}
