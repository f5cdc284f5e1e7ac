use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::patient::PatientContext;
use super::prediction::{PredictionResult, TreatmentRecommendation};
use super::symptoms::SymptomSelection;
use crate::error::CoreError;

pub const REPORT_TITLE: &str = "DISEASENET - PREDICTION REPORT";

pub const REPORT_ATTRIBUTION: &str =
    "This report was generated by DiseaseNet AI-based Disease Prediction System.";

/// Entry listed in the symptoms section when nothing was selected.
pub const NO_SYMPTOMS: &str = "None";

/// Suffix appended to every suggested report file name, before the extension.
pub const REPORT_FILE_SUFFIX: &str = "_Disease_Report";

/// Timestamp layout used in the patient-information section.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "docx" => Ok(ReportFormat::Docx),
            _ => Err(CoreError::InvalidReportFormat(s.to_string())),
        }
    }
}

/// The content of a prediction report, in section order.
///
/// Every field is addressable by name in the report template. Symptom
/// entries are already display labels; an empty selection is represented
/// by a single [`NO_SYMPTOMS`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: String,
    pub patient: PatientContext,
    pub symptoms: Vec<String>,
    pub predicted_disease: String,
    pub treatments: Vec<String>,
    pub attribution: String,
}

impl ReportDocument {
    pub fn compose(
        patient: &PatientContext,
        selection: &SymptomSelection,
        prediction: &PredictionResult,
        treatment: &TreatmentRecommendation,
        generated_at: jiff::civil::DateTime,
    ) -> Self {
        let symptoms = if selection.is_empty() {
            vec![NO_SYMPTOMS.to_string()]
        } else {
            selection.display_labels()
        };

        Self {
            title: REPORT_TITLE.to_string(),
            generated_at: generated_at.strftime(TIMESTAMP_FORMAT).to_string(),
            patient: patient.clone(),
            symptoms,
            predicted_disease: prediction.disease_label.clone(),
            treatments: treatment.as_slice().to_vec(),
            attribution: REPORT_ATTRIBUTION.to_string(),
        }
    }
}

/// Suggested download name for a patient's report.
///
/// Every whitespace character in the name becomes `_`; a blank name falls
/// back to `Patient`. `"Jane Doe"` → `Jane_Doe_Disease_Report.pdf`.
pub fn report_file_name(patient_name: &str, format: ReportFormat) -> String {
    let stem: String = if patient_name.trim().is_empty() {
        "Patient".to_string()
    } else {
        patient_name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect()
    };
    format!("{stem}{REPORT_FILE_SUFFIX}.{}", format.extension())
}
