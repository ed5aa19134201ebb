/// Typed errors for wifi-doctor operations
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for diagnostics operations
pub type DoctorResult<T> = Result<T, DoctorError>;

/// Errors that can occur while running simulated diagnostics
#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("No survey results to save, run a dead-zone scan first")]
    NothingToSave,

    #[error("Failed to create report directory {path}")]
    ReportDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode report")]
    ReportEncode(#[from] serde_json::Error),

    #[error("{task} stopped before reporting a result")]
    TaskFailed { task: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let err = DoctorError::TaskFailed {
            task: "Network scan",
        };
        assert_eq!(err.to_string(), "Network scan stopped before reporting a result");

        let err = DoctorError::ReportWrite {
            path: PathBuf::from("out/report.json"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "Failed to write report out/report.json");
    }
}
