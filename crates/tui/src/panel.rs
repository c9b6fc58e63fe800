use crate::render::Line;

/// A scrollable region of text with a cursor.
///
/// The cursor points at a line and moves in steps of `stride` lines, so a
/// panel can treat fixed-height blocks (one thread = several lines) as a
/// single entry. `origin` is the first visible line; it follows the cursor so
/// the selected entry is always in view.
///
/// A panel built with [`Panel::scroller`] has no cursor: moving shifts the
/// origin instead, over `rows` screen rows when the content wraps.
#[derive(Debug, Clone)]
pub struct Panel {
    title: String,
    lines: Vec<Line>,
    stride: usize,
    cursor: usize,
    origin: usize,
    height: usize,
    scroll_only: bool,
    rows: Option<usize>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_stride(title, 1)
    }

    pub fn with_stride(title: impl Into<String>, stride: usize) -> Self {
        Self {
            title: title.into(),
            lines: vec![],
            stride: stride.max(1),
            cursor: 0,
            origin: 0,
            height: 0,
            scroll_only: false,
            rows: None,
        }
    }

    pub fn scroller(title: impl Into<String>) -> Self {
        Self {
            scroll_only: true,
            ..Self::new(title)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Index of the selected entry.
    pub fn selected(&self) -> usize {
        self.cursor / self.stride
    }

    /// Replaces the whole content and resets cursor and origin.
    pub fn set_lines(&mut self, lines: Vec<Line>) {
        self.lines = lines;
        self.cursor = 0;
        self.origin = 0;
        self.rows = None;
    }

    pub fn clear(&mut self) {
        self.set_lines(vec![]);
    }

    /// Text of the line under the cursor, `None` if there is no such line.
    pub fn selected_text(&self) -> Option<String> {
        self.lines.get(self.cursor).map(Line::text)
    }

    /// Whether `line` belongs to the selected entry.
    pub fn is_selected(&self, line: usize) -> bool {
        !self.scroll_only
            && !self.lines.is_empty() && line >= self.cursor && line < self.cursor + self.stride
    }

    /// Number of visible rows, known after the first layout pass.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        if self.scroll_only {
            self.clamp_origin();
        } else {
            self.scroll_to_cursor();
        }
    }

    /// Number of screen rows the content takes once wrapped. Applied to the
    /// scroll range by the next [`Panel::set_height`].
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = Some(rows);
    }

    /// Lines currently in view, paired with their index.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Line)> {
        let end = if self.height == 0 {
            self.lines.len()
        } else {
            (self.origin + self.height).min(self.lines.len())
        };
        let start = self.origin.min(end);
        self.lines[start..end]
            .iter()
            .enumerate()
            .map(move |(i, line)| (start + i, line))
    }

    /// Moves to the previous entry. No-op at the top.
    pub fn move_up(&mut self) -> bool {
        if self.scroll_only {
            if self.origin == 0 {
                return false;
            }
            self.origin -= 1;
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.cursor.saturating_sub(self.stride);
        self.scroll_to_cursor();
        true
    }

    /// Moves to the next entry. No-op on the last one.
    pub fn move_down(&mut self) -> bool {
        if self.scroll_only {
            if self.origin >= self.max_origin() {
                return false;
            }
            self.origin += 1;
            return true;
        }
        let next = self.cursor + self.stride;
        if next >= self.lines.len() {
            return false;
        }
        self.cursor = next;
        self.scroll_to_cursor();
        true
    }

    pub fn page_up(&mut self) -> bool {
        let mut moved = false;
        for _ in 0..self.page_entries() {
            moved |= self.move_up();
        }
        moved
    }

    pub fn page_down(&mut self) -> bool {
        let mut moved = false;
        for _ in 0..self.page_entries() {
            moved |= self.move_down();
        }
        moved
    }

    fn page_entries(&self) -> usize {
        (self.height / self.stride).max(1)
    }

    /// Last origin that still fills the panel.
    fn max_origin(&self) -> usize {
        let rows = self.rows.unwrap_or(self.lines.len());
        rows.saturating_sub(self.height)
    }

    fn clamp_origin(&mut self) {
        self.origin = self.origin.min(self.max_origin());
    }

    fn scroll_to_cursor(&mut self) {
        if self.height == 0 {
            return;
        }
        if self.cursor < self.origin {
            self.origin = self.cursor;
        } else if self.cursor + self.stride > self.origin + self.height {
            // The top of the entry stays visible even if it is taller than the panel.
            self.origin = (self.cursor + self.stride - self.height).min(self.cursor);
        }
    }
}
