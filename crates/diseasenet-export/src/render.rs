use serde::Serialize;
use tera::{Context, Tera};

use diseasenet_core::models::patient::PatientContext;
use diseasenet_core::models::report::ReportDocument;

use crate::error::ExportError;
use crate::markup::escape_inline;

/// Section layout of the prediction report, in the markup understood by
/// [`crate::markup`].
pub const REPORT_TEMPLATE: &str = r#"# {{ title }}

## Patient Information
**Date:** {{ generated_at }}
**Name:** {{ patient.name }}
**Age:** {{ patient.age }}
**Gender:** {{ patient.gender }}

## Selected Symptoms
{% for symptom in symptoms -%}
| {{ symptom }}
{% endfor %}
## Prediction Result
**Predicted Disease:** {{ predicted_disease }}

## Recommended Medicines
{% for treatment in treatments -%}
- {{ treatment }}
{% endfor %}
> {{ attribution }}
"#;

/// Render a Tera template with any serializable value as its context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The fields of `value` become the template context variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render a report document with [`REPORT_TEMPLATE`].
///
/// Field values are escaped first, so asterisks and backslashes in
/// caller-supplied text come out literally instead of as markup.
pub fn render_report(document: &ReportDocument) -> Result<String, ExportError> {
    render_template("report", REPORT_TEMPLATE, &escape_document(document))
}

fn escape_document(document: &ReportDocument) -> ReportDocument {
    ReportDocument {
        // Headings are not parsed for inline markup.
        title: document.title.clone(),
        generated_at: escape_inline(&document.generated_at),
        patient: PatientContext {
            name: escape_inline(&document.patient.name),
            age: escape_inline(&document.patient.age),
            gender: escape_inline(&document.patient.gender),
        },
        symptoms: escape_all(&document.symptoms),
        predicted_disease: escape_inline(&document.predicted_disease),
        treatments: escape_all(&document.treatments),
        attribution: escape_inline(&document.attribution),
    }
}

fn escape_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| escape_inline(v)).collect()
}
