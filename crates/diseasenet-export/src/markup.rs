//! The line-oriented markup produced by the report template.
//!
//! - `# Heading` / `## Heading` / `### Heading` → heading levels 1–3
//! - `| cell` → row of a single-column table (consecutive rows form one table)
//! - `- item` → list item
//! - `> note` → centred footnote
//! - `---` or `***` → page break
//! - empty line → vertical gap
//! - anything else → body paragraph
//!
//! Inline `**bold**` segments are recognised in every block except headings;
//! `\*` and `\\` stand for a literal asterisk and backslash.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    TableRow(&'a str),
    ListItem(&'a str),
    Note(&'a str),
    Paragraph(&'a str),
    PageBreak,
    Blank,
}

/// A run of text with uniform weight, escapes already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

pub fn parse(rendered: &str) -> Vec<Block<'_>> {
    rendered.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Block<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Block::Blank;
    }

    if let Some(text) = trimmed.strip_prefix("### ") {
        Block::Heading { level: 3, text }
    } else if let Some(text) = trimmed.strip_prefix("## ") {
        Block::Heading { level: 2, text }
    } else if let Some(text) = trimmed.strip_prefix("# ") {
        Block::Heading { level: 1, text }
    } else if let Some(text) = trimmed.strip_prefix("| ") {
        Block::TableRow(text)
    } else if let Some(text) = trimmed.strip_prefix("- ") {
        Block::ListItem(text)
    } else if let Some(text) = trimmed.strip_prefix("> ") {
        Block::Note(text)
    } else if trimmed == "---" || trimmed == "***" {
        Block::PageBreak
    } else {
        Block::Paragraph(trimmed)
    }
}

/// Escape `\` and `*` so `text` is drawn literally inside an inline
/// block. Every caller-supplied value goes through this before it reaches
/// the template.
pub fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == '*' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

enum Token {
    Char(char),
    Marker,
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => tokens.push(Token::Char(chars.next().unwrap_or('\\'))),
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                tokens.push(Token::Marker);
            }
            _ => tokens.push(Token::Char(c)),
        }
    }
    tokens
}

/// Split `text` on `**` markers and resolve `\` escapes. A marker
/// without a closing partner stays literal text.
pub fn spans(text: &str) -> Vec<Span> {
    let mut tokens = tokenize(text);

    let markers = tokens.iter().filter(|t| matches!(t, Token::Marker)).count();
    if markers % 2 == 1
        && let Some(last) = tokens.iter().rposition(|t| matches!(t, Token::Marker))
    {
        tokens.splice(last..=last, [Token::Char('*'), Token::Char('*')]);
    }

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut bold = false;
    for token in tokens {
        match token {
            Token::Char(c) => current.push(c),
            Token::Marker => {
                if !current.is_empty() {
                    spans.push(Span {
                        text: std::mem::take(&mut current),
                        bold,
                    });
                }
                bold = !bold;
            }
        }
    }
    if !current.is_empty() {
        spans.push(Span {
            text: current,
            bold,
        });
    }

    spans
}

/// The text of a block with inline markers removed; used to compare
/// rendered content independently of the output format.
pub fn plain_text(rendered: &str) -> Vec<String> {
    parse(rendered)
        .into_iter()
        .filter_map(|block| match block {
            Block::Heading { text, .. } => Some(text.to_string()),
            Block::TableRow(text)
            | Block::ListItem(text)
            | Block::Note(text)
            | Block::Paragraph(text) => {
                Some(spans(text).iter().map(|s| s.text.as_str()).collect())
            }
            Block::PageBreak | Block::Blank => None,
        })
        .collect()
}
