use std::hash::{DefaultHasher, Hash, Hasher};
use std::io::BufWriter;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, OffsetDateTime, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

use crate::error::ExportError;
use crate::markup::{self, Block};
use crate::styles::{DocumentStyles, hex_rgb};

/// US Letter, in millimetres.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;

const PT_TO_MM: f32 = 0.3528;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Generate a PDF from rendered report markup.
///
/// Uses the built-in Helvetica family, so no font files are embedded.
/// Lines are word-wrapped to the page width and a new page is started
/// whenever the cursor reaches the bottom margin.
///
/// Creation, modification and metadata dates are all `generated_at`, and
/// the XMP document id is derived from the rendered content. printpdf fills
/// the trailer `/ID` pair with random strings on save, so two runs with the
/// same input differ there and nowhere else.
pub fn generate_pdf(
    rendered: &str,
    title: &str,
    styles: &DocumentStyles,
    generated_at: &jiff::Zoned,
) -> Result<Vec<u8>, ExportError> {
    let stamp = OffsetDateTime::from_unix_timestamp(generated_at.timestamp().as_second())
        .map_err(|e| ExportError::Pdf(format!("timestamp out of range: {e}")))?;

    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let doc = doc
        .with_creation_date(stamp)
        .with_mod_date(stamp)
        .with_metadata_date(stamp)
        .with_document_id(document_id(rendered));

    let fonts = Fonts {
        regular: builtin_font(&doc, BuiltinFont::Helvetica)?,
        bold: builtin_font(&doc, BuiltinFont::HelveticaBold)?,
        italic: builtin_font(&doc, BuiltinFont::HelveticaOblique)?,
    };

    let mut writer = PageWriter {
        layer: doc.get_page(page).get_layer(layer),
        doc: &doc,
        styles,
        y: PAGE_HEIGHT - styles.margin_mm,
    };

    for block in markup::parse(rendered) {
        match block {
            Block::Heading { level, text } => {
                let size_pt = match level {
                    1 => styles.heading1_size,
                    2 => styles.heading2_size,
                    _ => styles.heading3_size,
                };
                let size = size_pt as f32;
                writer.gap(size * 0.3);
                writer.write_wrapped(text, size, 0.0, &fonts.bold, &styles.accent_color);
                writer.gap(size * 0.2);
            }
            Block::TableRow(text) => {
                let size = styles.table_size as f32;
                writer.write_spans(text, size, 4.0, &fonts);
            }
            Block::ListItem(text) => {
                let size = styles.body_size as f32;
                writer.write_spans(&format!("- {text}"), size, 0.0, &fonts);
            }
            Block::Note(text) => {
                let size = styles.note_size as f32;
                writer.write_wrapped(text, size, 0.0, &fonts.italic, &styles.muted_color);
            }
            Block::Paragraph(text) => {
                let size = styles.body_size as f32;
                writer.write_spans(text, size, 0.0, &fonts);
            }
            Block::PageBreak => writer.new_page(),
            Block::Blank => writer.gap(styles.body_size as f32),
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save failed: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    styles: &'a DocumentStyles,
    /// Baseline of the next line, in mm from the bottom edge.
    y: f32,
}

impl PageWriter<'_> {
    fn usable_width(&self) -> f32 {
        PAGE_WIDTH - 2.0 * self.styles.margin_mm
    }

    fn line_height(size_pt: f32) -> f32 {
        size_pt * PT_TO_MM * 1.5
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - self.styles.margin_mm;
    }

    fn gap(&mut self, size_pt: f32) {
        self.y -= size_pt * PT_TO_MM;
    }

    fn advance(&mut self, size_pt: f32) {
        self.y -= Self::line_height(size_pt);
        if self.y < self.styles.margin_mm {
            self.new_page();
            self.y -= Self::line_height(size_pt);
        }
    }

    fn set_color(&self, hex: &str) {
        let (r, g, b) = hex_rgb(hex).unwrap_or((0.0, 0.0, 0.0));
        self.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    fn max_chars(&self, size_pt: f32, indent: f32) -> usize {
        let glyph = size_pt * PT_TO_MM * AVG_GLYPH_WIDTH;
        (((self.usable_width() - indent) / glyph) as usize).max(8)
    }

    /// Single-font text, wrapped to the page.
    fn write_wrapped(
        &mut self,
        text: &str,
        size_pt: f32,
        indent: f32,
        font: &IndirectFontRef,
        color: &str,
    ) {
        self.set_color(color);
        for line in wrap_text(text, self.max_chars(size_pt, indent)) {
            self.advance(size_pt);
            self.layer.use_text(
                line,
                size_pt,
                Mm(self.styles.margin_mm + indent),
                Mm(self.y),
                font,
            );
        }
        self.set_color("000000");
    }

    /// Text with `**bold**` spans. A leading bold label is drawn in bold on
    /// the first line; everything else wraps in the regular face.
    fn write_spans(&mut self, text: &str, size_pt: f32, indent: f32, fonts: &Fonts) {
        let spans = markup::spans(text);
        let (label, rest) = match spans.split_first() {
            Some((first, rest)) if first.bold => (Some(first.text.as_str()), rest),
            _ => (None, spans.as_slice()),
        };
        let body: String = rest.iter().map(|s| s.text.as_str()).collect();

        let Some(label) = label else {
            self.write_wrapped(&body, size_pt, indent, &fonts.regular, "000000");
            return;
        };

        let glyph = size_pt * PT_TO_MM * AVG_GLYPH_WIDTH;
        let label_width = label.chars().count() as f32 * glyph + glyph;
        let mut lines = wrap_text(body.trim(), self.max_chars(size_pt, indent + label_width));

        self.advance(size_pt);
        let x = self.styles.margin_mm + indent;
        self.layer
            .use_text(label, size_pt, Mm(x), Mm(self.y), &fonts.bold);
        if !lines.is_empty() {
            let first = lines.remove(0);
            self.layer.use_text(
                first,
                size_pt,
                Mm(x + label_width),
                Mm(self.y),
                &fonts.regular,
            );
        }
        for line in lines {
            self.advance(size_pt);
            self.layer.use_text(
                line,
                size_pt,
                Mm(x + label_width),
                Mm(self.y),
                &fonts.regular,
            );
        }
    }
}

fn builtin_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, ExportError> {
    doc.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))
}

/// 32 hex digits, stable for identical markup.
fn document_id(rendered: &str) -> String {
    let mut hasher = DefaultHasher::new();
    rendered.hash(&mut hasher);
    let high = hasher.finish();
    rendered.len().hash(&mut hasher);
    let low = hasher.finish();
    format!("{high:016x}{low:016x}")
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.chars().count() + word.chars().count() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
