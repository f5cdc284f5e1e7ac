use diseasenet_core::models::patient::PatientContext;
use diseasenet_core::models::prediction::{
    FALLBACK_TREATMENT, PredictionResult, TreatmentRecommendation,
};
use diseasenet_core::models::report::{
    NO_SYMPTOMS, REPORT_ATTRIBUTION, REPORT_TITLE, ReportDocument, ReportFormat,
    report_file_name,
};
use diseasenet_core::models::symptoms::{FeatureVector, SymptomSelection, display_label};

fn timestamp() -> jiff::civil::DateTime {
    jiff::civil::date(2026, 10, 18).at(9, 5, 7, 0)
}

#[test]
fn display_label_replaces_underscores_and_capitalizes() {
    assert_eq!(display_label("skin_rash"), "Skin rash");
    assert_eq!(display_label("itching"), "Itching");
    assert_eq!(display_label("toxic_look_(typhos)"), "Toxic look (typhos)");
    assert_eq!(display_label(""), "");
}

#[test]
fn display_label_lowercases_the_tail() {
    assert_eq!(display_label("SKIN_RASH"), "Skin rash");
    assert_eq!(display_label("high_Fever"), "High fever");
}

#[test]
fn selection_collapses_repeats_and_keeps_order() {
    let selection: SymptomSelection = ["skin_rash", "itching", "skin_rash"].into_iter().collect();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["skin_rash", "itching"]);
    assert!(selection.contains("itching"));
    assert!(!selection.contains("cough"));
}

#[test]
fn selection_deserializes_from_json_array() {
    let selection: SymptomSelection =
        serde_json::from_str(r#"["cough", "high_fever", "cough"]"#).unwrap();
    assert_eq!(selection.display_labels(), vec!["Cough", "High fever"]);
    assert_eq!(
        serde_json::to_string(&selection).unwrap(),
        r#"["cough","high_fever"]"#
    );
}

#[test]
fn feature_vector_positions() {
    let v = FeatureVector::with_positions(5, [1, 3]);
    assert_eq!(v.as_slice(), &[0, 1, 0, 1, 0]);
    assert_eq!(v.count_set(), 2);
    assert!(v.is_set(3));
    assert!(!v.is_set(4));
    assert_eq!(v.get(5), None);
    assert_eq!(FeatureVector::zeros(4).count_set(), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn feature_vector_rejects_out_of_range_position() {
    FeatureVector::with_positions(2, [2]);
}

#[test]
fn fallback_recommendation_is_single_entry() {
    let fallback = TreatmentRecommendation::fallback();
    assert_eq!(fallback.as_slice(), &[FALLBACK_TREATMENT.to_string()]);
    assert!(fallback.is_fallback());
    assert!(!TreatmentRecommendation::new(["Levothyroxine"]).is_fallback());
}

#[test]
fn compose_orders_sections_and_formats_timestamp() {
    let patient = PatientContext {
        name: "Jane Doe".to_string(),
        age: "34".to_string(),
        gender: "Female".to_string(),
    };
    let selection: SymptomSelection = ["itching", "skin_rash"].into_iter().collect();
    let doc = ReportDocument::compose(
        &patient,
        &selection,
        &PredictionResult::new("Fungal infection"),
        &TreatmentRecommendation::new(["Clotrimazole", "Fluconazole", "Ketoconazole"]),
        timestamp(),
    );

    assert_eq!(doc.title, REPORT_TITLE);
    assert_eq!(doc.generated_at, "2026-10-18 09:05:07");
    assert_eq!(doc.patient, patient);
    assert_eq!(doc.symptoms, vec!["Itching", "Skin rash"]);
    assert_eq!(doc.predicted_disease, "Fungal infection");
    assert_eq!(doc.treatments, vec!["Clotrimazole", "Fluconazole", "Ketoconazole"]);
    assert_eq!(doc.attribution, REPORT_ATTRIBUTION);
}

#[test]
fn compose_with_empty_selection_lists_none() {
    let doc = ReportDocument::compose(
        &PatientContext::default(),
        &SymptomSelection::new(),
        &PredictionResult::new("Allergy"),
        &TreatmentRecommendation::fallback(),
        timestamp(),
    );
    assert_eq!(doc.symptoms, vec![NO_SYMPTOMS]);
}

#[test]
fn file_name_replaces_whitespace() {
    assert_eq!(
        report_file_name("Jane Doe", ReportFormat::Pdf),
        "Jane_Doe_Disease_Report.pdf"
    );
    assert_eq!(
        report_file_name("Mary\tAnn Smith", ReportFormat::Docx),
        "Mary_Ann_Smith_Disease_Report.docx"
    );
    assert_eq!(
        report_file_name("   ", ReportFormat::Pdf),
        "Patient_Disease_Report.pdf"
    );
}

#[test]
fn report_format_parses_case_insensitively() {
    assert_eq!("PDF".parse::<ReportFormat>().unwrap(), ReportFormat::Pdf);
    assert_eq!(" docx ".parse::<ReportFormat>().unwrap(), ReportFormat::Docx);
    assert!("odt".parse::<ReportFormat>().is_err());
    assert_eq!(ReportFormat::default(), ReportFormat::Pdf);
}
