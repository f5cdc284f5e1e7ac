use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::error::ExportError;
use crate::markup::{self, Block};
use crate::styles::DocumentStyles;

/// Generate a DOCX document from rendered report markup.
///
/// Headings use the accent colour, consecutive `| ` rows become one
/// single-column table, list items get a bullet, and `> ` notes are
/// centred in small grey italics. `timestamp` (RFC 3339) stamps the
/// document properties so identical input yields identical metadata.
pub fn generate_docx(
    rendered: &str,
    styles: &DocumentStyles,
    timestamp: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .created_at(timestamp)
        .updated_at(timestamp)
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut rows: Vec<&str> = Vec::new();

    for block in markup::parse(rendered) {
        if let Block::TableRow(text) = block {
            rows.push(text);
            continue;
        }
        if !rows.is_empty() {
            docx = docx.add_table(single_column_table(&rows, styles));
            rows.clear();
        }

        docx = match block {
            Block::Heading { level, text } => {
                docx.add_paragraph(heading_paragraph(text, level, styles))
            }
            Block::ListItem(text) => docx.add_paragraph(bullet_paragraph(text, styles)),
            Block::Note(text) => docx.add_paragraph(note_paragraph(text, styles)),
            Block::Paragraph(text) => docx.add_paragraph(body_paragraph(text, styles)),
            Block::PageBreak => docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            ),
            Block::Blank => docx.add_paragraph(Paragraph::new()),
            Block::TableRow(_) => docx,
        };
    }

    if !rows.is_empty() {
        docx = docx.add_table(single_column_table(&rows, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, level: u8, styles: &DocumentStyles) -> Paragraph {
    let (style_id, align) = match level {
        1 => ("Heading1", AlignmentType::Center),
        2 => ("Heading2", AlignmentType::Left),
        _ => ("Heading3", AlignmentType::Left),
    };
    Paragraph::new().style(style_id).align(align).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .color(styles.accent_color.as_str())
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn single_column_table(rows: &[&str], styles: &DocumentStyles) -> Table {
    let rows = rows
        .iter()
        .map(|text| {
            let mut para = Paragraph::new().align(AlignmentType::Left);
            for run in inline_runs(text, styles.table_size, styles) {
                para = para.add_run(run);
            }
            TableRow::new(vec![TableCell::new().add_paragraph(para)])
        })
        .collect();
    Table::new(rows)
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in inline_runs(text, styles.body_size, styles) {
        para = para.add_run(run);
    }

    para
}

fn note_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(text)
            .italic()
            .size(styles.note_size * 2)
            .color(styles.muted_color.as_str())
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in inline_runs(text, styles.body_size, styles) {
        para = para.add_run(run);
    }
    para
}

fn inline_runs(text: &str, size_pt: usize, styles: &DocumentStyles) -> Vec<Run> {
    markup::spans(text)
        .into_iter()
        .map(|span| {
            let run = Run::new()
                .add_text(span.text)
                .size(size_pt * 2)
                .fonts(RunFonts::new().ascii(&styles.body_font));
            if span.bold { run.bold() } else { run }
        })
        .collect()
}
