//! Append-only output transcript.
//!
//! Lines are either plain text (escaped when rendered as HTML) or markup the
//! caller has already sanitized. Every append scrolls the viewport so the
//! newest line is visible.

/// A single rendered line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    /// Untrusted text; escaped on HTML render.
    Text(String),
    /// Pre-sanitized markup; rendered verbatim.
    Markup(String),
}

impl TranscriptLine {
    /// HTML form of the line.
    pub fn html(&self) -> String {
        match self {
            Self::Text(s) => escape_html(s),
            Self::Markup(s) => s.clone(),
        }
    }

    /// Text form of the line for hosts that cannot render markup.
    pub fn plain(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Markup(s) => strip_markup(s),
        }
    }
}

/// Escape the characters that are significant in HTML.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Drop tags and decode the entities `escape_html` produces.
fn strip_markup(s: &str) -> String {
    let mut text = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {},
        }
    }
    // &amp; last so "&amp;lt;" decodes to "&lt;", not "<".
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

/// Default number of visible rows before a host reports its real size.
pub const DEFAULT_VIEWPORT_ROWS: usize = 24;

/// The visible output history.
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    viewport_rows: usize,
    scroll_top: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_ROWS)
    }
}

impl Transcript {
    /// Create an empty transcript showing `viewport_rows` lines at a time.
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            lines: Vec::new(),
            viewport_rows: viewport_rows.max(1),
            scroll_top: 0,
        }
    }

    /// Append a line and scroll to it.
    pub fn push(&mut self, line: TranscriptLine) {
        self.lines.push(line);
        self.scroll_to_end();
    }

    /// Append untrusted text.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(TranscriptLine::Text(text.into()));
    }

    /// Append markup. Untrusted substrings must already be escaped.
    pub fn push_markup(&mut self, markup: impl Into<String>) {
        self.push(TranscriptLine::Markup(markup.into()));
    }

    /// Remove every line.
    pub fn clear_all(&mut self) {
        self.lines.clear();
        self.scroll_top = 0;
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resize the viewport (e.g. on terminal resize) and stay pinned to the end.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.scroll_to_end();
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Index of the first visible line.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Scroll so the newest line is the last visible one.
    pub fn scroll_to_end(&mut self) {
        self.scroll_top = self.lines.len().saturating_sub(self.viewport_rows);
    }

    /// Lines currently inside the viewport.
    pub fn visible(&self) -> &[TranscriptLine] {
        let end = (self.scroll_top + self.viewport_rows).min(self.lines.len());
        &self.lines[self.scroll_top..end]
    }

    /// Render the whole transcript as one `<div>` per line.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str("<div>");
            out.push_str(&line.html());
            out.push_str("</div>\n");
        }
        out
    }
}
