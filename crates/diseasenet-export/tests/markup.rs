use diseasenet_export::markup::{Block, Span, escape_inline, parse, plain_text, spans};

fn span(text: &str, bold: bool) -> Span {
    Span {
        text: text.to_string(),
        bold,
    }
}

#[test]
fn parse_recognises_every_block_kind() {
    let rendered = "# Title\n## Section\n### Sub\n| row\n- item\n> note\n---\n\nplain text";
    assert_eq!(
        parse(rendered),
        vec![
            Block::Heading { level: 1, text: "Title" },
            Block::Heading { level: 2, text: "Section" },
            Block::Heading { level: 3, text: "Sub" },
            Block::TableRow("row"),
            Block::ListItem("item"),
            Block::Note("note"),
            Block::PageBreak,
            Block::Blank,
            Block::Paragraph("plain text"),
        ]
    );
}

#[test]
fn spans_split_bold_segments() {
    assert_eq!(
        spans("**Name:** Jane Doe"),
        vec![span("Name:", true), span(" Jane Doe", false)]
    );
}

#[test]
fn unclosed_bold_marker_is_plain_text() {
    assert_eq!(spans("a **b"), vec![span("a **b", false)]);
    assert_eq!(
        spans("**x** a **b"),
        vec![span("x", true), span(" a **b", false)]
    );
}

#[test]
fn plain_text_strips_markers_and_blank_lines() {
    assert_eq!(
        plain_text("# T\n\n**Age:** 40\n- Rest"),
        vec!["T", "Age: 40", "Rest"]
    );
}

#[test]
fn escaped_text_round_trips_through_spans() {
    for raw in ["Jo**hn** Doe", "A**B", "*", "\\", "a\\**b**", "plain"] {
        assert_eq!(spans(&escape_inline(raw)), vec![span(raw, false)]);
    }
}

#[test]
fn escaped_value_after_bold_label_stays_plain() {
    let line = format!("**Name:** {}", escape_inline("**x**"));
    assert_eq!(spans(&line), vec![span("Name:", true), span(" **x**", false)]);
}
