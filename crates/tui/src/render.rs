//! Turns fetched data into panel text.
//!
//! Lines are plain content tagged with the semantic field each piece of text
//! belongs to. How a field looks is decided in [`crate::style`], so nothing
//! here knows about colors or terminal escapes.

use chanview_api::endpoint::Endpoint;
use chanview_types::{board::Board, catalog::CatalogPage, thread::Thread};

/// Lines emitted per thread in the threads panel, separator included.
pub const THREAD_LINES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Plain,
    BoardCode,
    PostNumber,
    Attachment,
    Author,
    PostedAt,
    Subject,
    Comment,
    Label,
    Link,
    Status,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub field: Field,
    pub text: String,
}

impl Segment {
    pub fn new(field: Field, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn single(field: Field, text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(field, text)],
        }
    }

    pub fn push(mut self, field: Field, text: impl Into<String>) -> Self {
        self.segments.push(Segment::new(field, text));
        self
    }

    /// The line as the user reads it, without styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

pub fn status_line(text: impl Into<String>) -> Line {
    Line::single(Field::Status, text)
}

pub fn error_line(text: impl Into<String>) -> Line {
    Line::single(Field::Error, text)
}

/// One `<code> - <title>` line per board.
pub fn board_lines(boards: &[Board]) -> Vec<Line> {
    boards
        .iter()
        .map(|board| {
            Line::single(Field::BoardCode, board.code.as_str())
                .push(Field::Plain, " - ")
                .push(Field::Plain, board.title.as_str())
        })
        .collect()
}

/// Every thread of every page, [`THREAD_LINES`] lines each.
pub fn catalog_lines(pages: &[CatalogPage]) -> Vec<Line> {
    chanview_types::catalog::threads(pages)
        .flat_map(thread_lines)
        .collect()
}

/// Number header, attachment/author/time, subject, comment, separator.
///
/// The comment is the raw upstream body. Embedded line breaks are flattened
/// so every thread keeps its fixed height.
pub fn thread_lines(thread: &Thread) -> [Line; THREAD_LINES] {
    let mut byline = Line::blank();
    if !thread.attachment().is_empty() {
        byline = byline
            .push(Field::Attachment, thread.attachment())
            .push(Field::Plain, " ");
    }
    byline = byline
        .push(Field::Author, thread.author_name.as_str())
        .push(Field::Plain, " ")
        .push(Field::PostedAt, thread.posted_at.as_str());
    [
        Line::single(Field::PostNumber, format!("No.{}", thread.id)),
        byline,
        Line::single(Field::Subject, thread.subject.as_str()),
        Line::single(Field::Comment, thread.comment_body.replace(['\r', '\n'], " ")),
        Line::blank(),
    ]
}

/// The thread detail panel: everything the catalog knows about one thread,
/// with the comment markup cleaned up.
pub fn detail_lines(board: &str, https: bool, thread: &Thread) -> Vec<Line> {
    let mut header = Line::single(Field::PostNumber, format!("No.{}", thread.id));
    if !thread.posted_at.is_empty() {
        header = header
            .push(Field::Plain, " ")
            .push(Field::PostedAt, thread.posted_at.as_str());
    }
    let mut lines = vec![header];
    lines.push(Line::single(Field::Author, thread.author_name.as_str()));
    if thread.has_attachment() {
        lines.push(Line::single(Field::Attachment, thread.attachment()));
        lines.push(Line::single(Field::Label, "image: ").push(
            Field::Link,
            Endpoint::media_url(
                https,
                board,
                thread.attachment_timestamp,
                &thread.attachment_ext,
            ),
        ));
        if let Some(uploaded) = thread.uploaded_at() {
            lines.push(Line::single(Field::Label, "uploaded: ").push(
                Field::Plain,
                uploaded.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ));
        }
    }
    if !thread.subject.is_empty() {
        lines.push(Line::single(Field::Subject, thread.subject.as_str()));
    }
    if let Some(counts) = counts(thread) {
        lines.push(Line::single(Field::Label, counts));
    }
    lines.push(Line::blank());
    lines.extend(
        thread
            .clean_comment()
            .lines()
            .map(|text| Line::single(Field::Comment, text)),
    );
    lines
}

fn counts(thread: &Thread) -> Option<String> {
    match (thread.replies, thread.images) {
        (None, None) => None,
        (replies, images) => Some(format!(
            "{} replies, {} images",
            replies.unwrap_or(0),
            images.unwrap_or(0)
        )),
    }
}
