use serde::{Deserialize, Serialize};

/// Document styling shared by the DOCX and PDF backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text in DOCX output (PDF always uses built-in Helvetica).
    pub body_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub heading1_size: usize,

    /// Section heading font size in points.
    pub heading2_size: usize,

    /// Sub-heading font size in points.
    pub heading3_size: usize,

    /// Symptom table font size in points.
    pub table_size: usize,

    /// Footnote font size in points.
    pub note_size: usize,

    /// Hex RGB colour for headings, without `#`.
    pub accent_color: String,

    /// Hex RGB colour for footnotes, without `#`.
    pub muted_color: String,

    /// Page margin in millimetres (applied uniformly, PDF only).
    pub margin_mm: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 13,
            heading3_size: 12,
            table_size: 10,
            note_size: 9,
            accent_color: "0f8b8d".to_string(),
            muted_color: "808080".to_string(),
            margin_mm: 14.0,
        }
    }
}

/// Parse a `rrggbb` hex colour into 0.0–1.0 channels.
pub fn hex_rgb(hex: &str) -> Option<(f32, f32, f32)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some((channel(0)?, channel(2)?, channel(4)?))
}
