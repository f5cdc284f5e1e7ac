use diseasenet_core::models::patient::PatientContext;
use diseasenet_core::models::prediction::{PredictionResult, TreatmentRecommendation};
use diseasenet_core::models::report::{
    REPORT_TITLE, ReportDocument, ReportFormat, report_file_name,
};
use diseasenet_core::models::symptoms::SymptomSelection;
use tracing::info;

use crate::error::ExportError;
use crate::render::render_report;
use crate::styles::DocumentStyles;

/// A synthesized report, ready to hand back to the caller.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub bytes: Vec<u8>,
    pub format: ReportFormat,
    pub file_name: String,
    pub content_type: &'static str,
    /// `Content-Disposition` value suggesting a download.
    pub disposition: String,
}

/// Turns a prediction into a downloadable report.
#[derive(Debug, Clone, Default)]
pub struct ReportSynthesizer {
    format: ReportFormat,
    styles: DocumentStyles,
}

impl ReportSynthesizer {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            styles: DocumentStyles::default(),
        }
    }

    pub fn with_styles(mut self, styles: DocumentStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Synthesize the report stamped with the current local time. The clock
    /// is read once, here.
    pub fn synthesize(
        &self,
        patient: &PatientContext,
        selection: &SymptomSelection,
        prediction: &PredictionResult,
        treatment: &TreatmentRecommendation,
    ) -> Result<Vec<u8>, ExportError> {
        let generated_at = jiff::Zoned::now();
        self.synthesize_at(patient, selection, prediction, treatment, &generated_at)
    }

    /// Synthesize the report with a caller-supplied timestamp. The report
    /// body shows its local wall-clock time; document metadata records the
    /// same instant in UTC.
    pub fn synthesize_at(
        &self,
        patient: &PatientContext,
        selection: &SymptomSelection,
        prediction: &PredictionResult,
        treatment: &TreatmentRecommendation,
        generated_at: &jiff::Zoned,
    ) -> Result<Vec<u8>, ExportError> {
        let rendered = self.render(patient, selection, prediction, treatment, generated_at)?;

        let bytes = match self.format {
            ReportFormat::Docx => {
                let document_time = generated_at
                    .timestamp()
                    .strftime("%Y-%m-%dT%H:%M:%SZ")
                    .to_string();
                crate::docx::generate_docx(&rendered, &self.styles, &document_time)?
            }
            ReportFormat::Pdf => {
                crate::pdf::generate_pdf(&rendered, REPORT_TITLE, &self.styles, generated_at)?
            }
        };

        info!(
            format = %self.format,
            bytes = bytes.len(),
            symptoms = selection.len(),
            treatments = treatment.len(),
            "report synthesized"
        );

        Ok(bytes)
    }

    /// Validate the inputs and render the report markup, without encoding
    /// it into a document.
    pub fn render(
        &self,
        patient: &PatientContext,
        selection: &SymptomSelection,
        prediction: &PredictionResult,
        treatment: &TreatmentRecommendation,
        generated_at: &jiff::Zoned,
    ) -> Result<String, ExportError> {
        validate(patient, selection, prediction, treatment)?;
        let document = ReportDocument::compose(
            patient,
            selection,
            prediction,
            treatment,
            generated_at.datetime(),
        );
        render_report(&document)
    }

    /// Synthesize the report and attach its download metadata.
    pub fn build_report(
        &self,
        patient: &PatientContext,
        selection: &SymptomSelection,
        prediction: &PredictionResult,
        treatment: &TreatmentRecommendation,
    ) -> Result<ReportArtifact, ExportError> {
        let bytes = self.synthesize(patient, selection, prediction, treatment)?;
        let file_name = report_file_name(&patient.name, self.format);
        let disposition = attachment_disposition(&file_name);

        Ok(ReportArtifact {
            bytes,
            format: self.format,
            file_name,
            content_type: self.format.content_type(),
            disposition,
        })
    }
}

/// `attachment; filename="..."`, with anything outside printable ASCII (and
/// quotes or backslashes) replaced so the value is a valid header.
pub fn attachment_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

fn validate(
    patient: &PatientContext,
    selection: &SymptomSelection,
    prediction: &PredictionResult,
    treatment: &TreatmentRecommendation,
) -> Result<(), ExportError> {
    single_line("patient name", &patient.name)?;
    single_line("patient age", &patient.age)?;
    single_line("patient gender", &patient.gender)?;

    for symptom in selection.iter() {
        non_blank("symptom", symptom)?;
        single_line("symptom", symptom)?;
    }

    non_blank("predicted disease", &prediction.disease_label)?;
    single_line("predicted disease", &prediction.disease_label)?;

    if treatment.is_empty() {
        return Err(ExportError::MalformedField {
            field: "treatments",
            reason: "no treatments given".to_string(),
        });
    }
    for entry in treatment.iter() {
        non_blank("treatment", entry)?;
        single_line("treatment", entry)?;
    }

    Ok(())
}

fn single_line(field: &'static str, value: &str) -> Result<(), ExportError> {
    if value.chars().any(char::is_control) {
        return Err(ExportError::MalformedField {
            field,
            reason: "contains line breaks or control characters".to_string(),
        });
    }
    Ok(())
}

fn non_blank(field: &'static str, value: &str) -> Result<(), ExportError> {
    if value.trim().is_empty() {
        return Err(ExportError::MalformedField {
            field,
            reason: "is empty".to_string(),
        });
    }
    Ok(())
}
