use crate::doctor::signal::CoverageQuality;
use crate::doctor::types::SurveyReading;
use crate::error::{DoctorError, DoctorResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Saved outcome of a dead-zone survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub generated_at: DateTime<Utc>,
    pub network: String,
    pub dead_zones: Vec<String>,
    pub readings: Vec<SurveyReading>,
}

impl SurveyReport {
    pub fn new(network: &str, readings: &[SurveyReading]) -> Self {
        let dead_zones = readings
            .iter()
            .filter(|r| CoverageQuality::of(r.signal) == CoverageQuality::DeadZone)
            .map(|r| r.location.clone())
            .collect();
        Self {
            generated_at: Utc::now(),
            network: network.to_string(),
            dead_zones,
            readings: readings.to_vec(),
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "dead-zone-survey-{}.json",
            self.generated_at.format("%Y%m%dT%H%M%SZ")
        )
    }
}

/// Write the survey to `dir` as pretty JSON and return the file path
pub fn save_survey(dir: &Path, network: &str, readings: &[SurveyReading]) -> DoctorResult<PathBuf> {
    if readings.is_empty() {
        return Err(DoctorError::NothingToSave);
    }

    fs::create_dir_all(dir).map_err(|source| DoctorError::ReportDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let report = SurveyReport::new(network, readings);
    let path = dir.join(report.file_name());
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&path, json).map_err(|source| DoctorError::ReportWrite {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), rooms = readings.len(), "survey report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::catalog;

    #[test]
    fn saves_readings_as_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let readings = catalog::survey_readings();

        let path = save_survey(dir.path(), "HomeNetwork_5G", &readings).unwrap();
        assert!(path.starts_with(dir.path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

        let report: SurveyReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.network, "HomeNetwork_5G");
        assert_eq!(report.readings, readings);
        assert_eq!(report.dead_zones, vec!["Garage".to_string()]);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("reports").join("today");
        let path = save_survey(&nested, "Lab", &catalog::survey_readings()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn refuses_to_save_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = save_survey(dir.path(), "Lab", &[]).unwrap_err();
        assert!(matches!(err, DoctorError::NothingToSave));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn unwritable_directory_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let err = save_survey(&blocker, "Lab", &catalog::survey_readings()).unwrap_err();
        assert!(matches!(err, DoctorError::ReportDir { .. }), "{err:?}");
    }
}
