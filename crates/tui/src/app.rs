//! Application state. One `App` owns the three panels and everything the
//! loop knows about the requests in flight. It is only mutated through
//! [`crate::action::update`].

use crate::panel::Panel;
use crate::render::{self, THREAD_LINES};
use chanview_types::thread::Thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Boards,
    Threads,
    Detail,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Boards => Focus::Threads,
            Focus::Threads => Focus::Detail,
            Focus::Detail => Focus::Boards,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Boards => Focus::Detail,
            Focus::Threads => Focus::Boards,
            Focus::Detail => Focus::Threads,
        }
    }
}

/// The catalog currently shown in the threads panel.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub board: String,
    pub threads: Vec<Thread>,
}

#[derive(Debug)]
pub struct App {
    pub focus: Focus,
    pub boards: Panel,
    pub threads: Panel,
    pub detail: Panel,
    /// Media links in the detail panel follow the API scheme.
    pub https: bool,
    pub(crate) boards_ready: bool,
    pub(crate) catalog: Option<Catalog>,
    pub(crate) boards_request: Option<u64>,
    pub(crate) catalog_request: Option<u64>,
    next_request: u64,
}

impl App {
    pub fn new(https: bool) -> Self {
        Self {
            focus: Focus::Boards,
            boards: Panel::new("Boards"),
            threads: Panel::with_stride("Threads", THREAD_LINES),
            detail: Panel::scroller("Thread"),
            https,
            boards_ready: false,
            catalog: None,
            boards_request: None,
            catalog_request: None,
            next_request: 0,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub(crate) fn next_request(&mut self) -> u64 {
        self.next_request += 1;
        self.next_request
    }

    pub fn selected_thread(&self) -> Option<&Thread> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.threads.get(self.threads.selected()))
    }

    /// Shows the thread under the threads cursor in the detail panel.
    pub(crate) fn refresh_detail(&mut self) {
        let lines = match (&self.catalog, self.selected_thread()) {
            (Some(catalog), Some(thread)) => {
                render::detail_lines(&catalog.board, self.https, thread)
            }
            _ => vec![],
        };
        self.detail.set_lines(lines);
    }
}
