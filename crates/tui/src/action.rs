//! Everything that can happen to the browser is an [`Action`]: a key press
//! or a finished fetch. [`update`] applies it to the [`App`] and returns the
//! [`Effect`] the loop has to carry out. No I/O happens here.

use crate::app::{App, Catalog, Focus};
use crate::render::{board_lines, catalog_lines, error_line, status_line};
use chanview_fetch::{error::Error, fetcher::Event};
use chanview_types::{board::Board, catalog::CatalogPage, utils::board_code};
use tracing::{debug, error, info};

#[derive(Debug)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Select,
    FocusNext,
    FocusPrev,
    RetryBoards,
    Resize,
    BoardsLoaded {
        request: u64,
        result: Result<Vec<Board>, Error>,
    },
    CatalogLoaded {
        request: u64,
        selection: String,
        result: Result<Vec<CatalogPage>, Error>,
    },
}

impl From<Event> for Action {
    fn from(event: Event) -> Self {
        match event {
            Event::Boards { request, result } => Action::BoardsLoaded { request, result },
            Event::Catalog {
                request,
                selection,
                result,
            } => Action::CatalogLoaded {
                request,
                selection,
                result,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchBoards { request: u64 },
    FetchCatalog { request: u64, selection: String },
}

/// First effect of a session: put the boards panel in its loading state and
/// ask for the board list.
pub fn start(app: &mut App) -> Effect {
    request_boards(app)
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::MoveUp => {
            focused(app).move_up();
            follow_cursor(app);
            Effect::None
        }
        Action::MoveDown => {
            focused(app).move_down();
            follow_cursor(app);
            Effect::None
        }
        Action::PageUp => {
            focused(app).page_up();
            follow_cursor(app);
            Effect::None
        }
        Action::PageDown => {
            focused(app).page_down();
            follow_cursor(app);
            Effect::None
        }
        Action::FocusNext => {
            app.focus = app.focus.next();
            Effect::None
        }
        Action::FocusPrev => {
            app.focus = app.focus.prev();
            Effect::None
        }
        Action::Resize => Effect::None,
        Action::Select => select(app),
        Action::RetryBoards => {
            if app.boards_ready || app.boards_request.is_some() {
                return Effect::None;
            }
            request_boards(app)
        }
        Action::BoardsLoaded { request, result } => boards_loaded(app, request, result),
        Action::CatalogLoaded {
            request,
            selection,
            result,
        } => catalog_loaded(app, request, &selection, result),
    }
}

fn focused(app: &mut App) -> &mut crate::panel::Panel {
    match app.focus {
        Focus::Boards => &mut app.boards,
        Focus::Threads => &mut app.threads,
        Focus::Detail => &mut app.detail,
    }
}

fn follow_cursor(app: &mut App) {
    if app.focus == Focus::Threads {
        app.refresh_detail();
    }
}

fn request_boards(app: &mut App) -> Effect {
    let request = app.next_request();
    app.boards_ready = false;
    app.boards_request = Some(request);
    app.boards.set_lines(vec![status_line("Loading boards...")]);
    Effect::FetchBoards { request }
}

fn select(app: &mut App) -> Effect {
    if app.focus != Focus::Boards {
        return Effect::None;
    }
    let selection = if app.boards_ready {
        app.boards.selected_text()
    } else {
        None
    };
    let Some(selection) = selection else {
        error!("select without a board under the cursor");
        show_catalog_error(app, "No board selected: the board list is not available");
        return Effect::None;
    };
    info!("selected {:?}", selection);
    let request = app.next_request();
    app.catalog = None;
    app.catalog_request = Some(request);
    app.threads.set_title(threads_title(board_code(&selection)));
    app.threads
        .set_lines(vec![status_line(format!("Loading {}...", selection))]);
    app.detail.clear();
    Effect::FetchCatalog { request, selection }
}

fn boards_loaded(app: &mut App, request: u64, result: Result<Vec<Board>, Error>) -> Effect {
    if app.boards_request != Some(request) {
        debug!("ignoring stale boards response {}", request);
        return Effect::None;
    }
    app.boards_request = None;
    match result {
        Ok(boards) => {
            info!("showing {} boards", boards.len());
            app.boards_ready = true;
            app.boards.set_lines(board_lines(&boards));
        }
        Err(e) => {
            error!("board list failed: {}", e);
            app.boards.set_lines(vec![
                error_line(format!("Error: {}", e)),
                status_line("Press r to retry"),
            ]);
        }
    }
    Effect::None
}

fn catalog_loaded(
    app: &mut App,
    request: u64,
    selection: &str,
    result: Result<Vec<CatalogPage>, Error>,
) -> Effect {
    if app.catalog_request != Some(request) {
        debug!("ignoring stale catalog response {}", request);
        return Effect::None;
    }
    app.catalog_request = None;
    match result {
        Ok(pages) => {
            let board = board_code(selection).to_string();
            let lines = catalog_lines(&pages);
            let threads: Vec<_> = chanview_types::catalog::threads(&pages).cloned().collect();
            info!("showing {} threads of /{}/", threads.len(), board);
            if lines.is_empty() {
                app.threads
                    .set_lines(vec![status_line(format!("/{}/ has no threads", board))]);
            } else {
                app.threads.set_lines(lines);
            }
            app.catalog = Some(Catalog { board, threads });
            app.refresh_detail();
        }
        Err(e) => {
            error!("catalog for {:?} failed: {}", selection, e);
            show_catalog_error(app, &format!("Error: {}", e));
        }
    }
    Effect::None
}

fn show_catalog_error(app: &mut App, message: &str) {
    app.catalog = None;
    app.catalog_request = None;
    app.threads.set_lines(vec![error_line(message)]);
    app.detail.clear();
}

fn threads_title(board: &str) -> String {
    if board.is_empty() {
        "Threads".to_string()
    } else {
        format!("Threads /{}/", board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use chanview_types::thread::Thread;

    fn texts(lines: &[render::Line]) -> Vec<String> {
        lines.iter().map(render::Line::text).collect()
    }

    fn boards() -> Vec<Board> {
        vec![
            Board::new("a", "Anime & Manga", "a"),
            Board::new("g", "Technology", "x"),
        ]
    }

    fn catalog(ids: &[i64]) -> Vec<CatalogPage> {
        vec![CatalogPage {
            page: Some(1),
            threads: ids
                .iter()
                .map(|&id| Thread {
                    id,
                    comment_body: format!("comment {}", id),
                    ..Default::default()
                })
                .collect(),
        }]
    }

    fn loaded_app() -> App {
        let mut app = App::new(true);
        let Effect::FetchBoards { request } = start(&mut app) else {
            panic!("expected a boards fetch");
        };
        update(
            &mut app,
            Action::BoardsLoaded {
                request,
                result: Ok(boards()),
            },
        );
        app
    }

    fn select_and_load(app: &mut App, pages: Vec<CatalogPage>) -> String {
        let Effect::FetchCatalog { request, selection } = update(app, Action::Select) else {
            panic!("expected a catalog fetch");
        };
        update(
            app,
            Action::CatalogLoaded {
                request,
                selection: selection.clone(),
                result: Ok(pages),
            },
        );
        selection
    }

    #[test]
    fn test_start_shows_loading() {
        let mut app = App::new(true);
        assert!(matches!(start(&mut app), Effect::FetchBoards { .. }));
        assert!(app.boards_request.is_some());
        assert_eq!(texts(app.boards.lines()), vec!["Loading boards..."]);
    }

    #[test]
    fn test_boards_loaded_renders_lines() {
        let app = loaded_app();
        assert!(app.boards_request.is_none());
        assert_eq!(
            texts(app.boards.lines()),
            vec!["a - Anime & Manga", "g - Technology"]
        );
    }

    #[test]
    fn test_boards_error_is_shown_and_retryable() {
        let mut app = App::new(true);
        let Effect::FetchBoards { request } = start(&mut app) else {
            panic!("expected a boards fetch");
        };
        update(
            &mut app,
            Action::BoardsLoaded {
                request,
                result: Err(Error::Api(chanview_api::error::Error::StatusCode(503))),
            },
        );
        assert_eq!(
            texts(app.boards.lines()),
            vec!["Error: Status code: 503", "Press r to retry"]
        );
        assert!(matches!(
            update(&mut app, Action::RetryBoards),
            Effect::FetchBoards { .. }
        ));
    }

    #[test]
    fn test_retry_is_ignored_once_loaded() {
        let mut app = loaded_app();
        assert_eq!(update(&mut app, Action::RetryBoards), Effect::None);
    }

    #[test]
    fn test_select_reads_highlighted_line() {
        let mut app = loaded_app();
        update(&mut app, Action::MoveDown);
        match update(&mut app, Action::Select) {
            Effect::FetchCatalog { selection, .. } => assert_eq!(selection, "g - Technology"),
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(texts(app.threads.lines()), vec!["Loading g - Technology..."]);
        assert_eq!(app.threads.title(), "Threads /g/");
    }

    #[test]
    fn test_select_without_boards_is_a_validation_error() {
        let mut app = App::new(true);
        start(&mut app);
        assert_eq!(update(&mut app, Action::Select), Effect::None);
        assert_eq!(
            texts(app.threads.lines()),
            vec!["No board selected: the board list is not available"]
        );
    }

    #[test]
    fn test_select_with_empty_board_list_is_a_validation_error() {
        let mut app = App::new(true);
        let Effect::FetchBoards { request } = start(&mut app) else {
            panic!("expected a boards fetch");
        };
        update(
            &mut app,
            Action::BoardsLoaded {
                request,
                result: Ok(vec![]),
            },
        );
        assert_eq!(update(&mut app, Action::Select), Effect::None);
        assert_eq!(app.threads.lines()[0].segments[0].field, render::Field::Error);
    }

    #[test]
    fn test_catalog_loaded_replaces_threads() {
        let mut app = loaded_app();
        select_and_load(&mut app, catalog(&[1, 2]));
        assert_eq!(app.threads.lines().len(), 2 * render::THREAD_LINES);
        assert_eq!(app.catalog().unwrap().board, "a");

        select_and_load(&mut app, catalog(&[3]));
        assert_eq!(app.threads.lines().len(), render::THREAD_LINES);
        assert_eq!(app.threads.lines()[0].text(), "No.3");
    }

    #[test]
    fn test_reselecting_same_board_fetches_again() {
        let mut app = loaded_app();
        let first = select_and_load(&mut app, catalog(&[1]));
        let rendered = texts(app.threads.lines());
        let second = select_and_load(&mut app, catalog(&[1]));
        assert_eq!(first, second);
        assert_eq!(texts(app.threads.lines()), rendered);
    }

    #[test]
    fn test_stale_catalog_is_ignored() {
        let mut app = loaded_app();
        let Effect::FetchCatalog { request: old, .. } = update(&mut app, Action::Select) else {
            panic!("expected a catalog fetch");
        };
        update(&mut app, Action::MoveDown);
        let Effect::FetchCatalog { request: new, .. } = update(&mut app, Action::Select) else {
            panic!("expected a catalog fetch");
        };
        update(
            &mut app,
            Action::CatalogLoaded {
                request: old,
                selection: "a - Anime & Manga".to_string(),
                result: Ok(catalog(&[1])),
            },
        );
        assert!(app.catalog().is_none());
        assert_eq!(app.catalog_request, Some(new));
        update(
            &mut app,
            Action::CatalogLoaded {
                request: new,
                selection: "g - Technology".to_string(),
                result: Ok(catalog(&[2])),
            },
        );
        assert_eq!(app.catalog().unwrap().board, "g");
        assert_eq!(app.threads.lines()[0].text(), "No.2");
    }

    #[test]
    fn test_catalog_error_shown_in_threads_panel() {
        let mut app = loaded_app();
        let Effect::FetchCatalog { request, selection } = update(&mut app, Action::Select) else {
            panic!("expected a catalog fetch");
        };
        update(
            &mut app,
            Action::CatalogLoaded {
                request,
                selection,
                result: Err(Error::Api(chanview_api::error::Error::StatusCode(404))),
            },
        );
        assert_eq!(texts(app.threads.lines()), vec!["Error: Status code: 404"]);
        assert!(app.catalog().is_none());
        // boards stay usable
        assert!(matches!(
            update(&mut app, Action::Select),
            Effect::FetchCatalog { .. }
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let mut app = loaded_app();
        select_and_load(&mut app, vec![]);
        assert_eq!(texts(app.threads.lines()), vec!["/a/ has no threads"]);
        assert!(app.detail.lines().is_empty());
    }

    #[test]
    fn test_thread_navigation_updates_detail() {
        let mut app = loaded_app();
        select_and_load(&mut app, catalog(&[10, 20]));
        assert_eq!(app.detail.lines()[0].text(), "No.10");
        update(&mut app, Action::FocusNext);
        assert_eq!(app.focus, Focus::Threads);
        update(&mut app, Action::MoveDown);
        assert_eq!(app.selected_thread().unwrap().id, 20);
        assert_eq!(app.detail.lines()[0].text(), "No.20");
        // select is a no-op outside the boards panel
        assert_eq!(update(&mut app, Action::Select), Effect::None);
        update(&mut app, Action::FocusPrev);
        assert_eq!(app.focus, Focus::Boards);
    }

    #[test]
    fn test_detail_focus_scrolls_comment() {
        let mut app = loaded_app();
        let comment = (0..30)
            .map(|i| format!("line{}", i))
            .collect::<Vec<_>>()
            .join("<br>");
        let pages = vec![CatalogPage {
            page: Some(1),
            threads: vec![Thread {
                id: 7,
                comment_body: comment,
                ..Default::default()
            }],
        }];
        select_and_load(&mut app, pages);
        app.detail.set_height(10);

        update(&mut app, Action::FocusNext);
        update(&mut app, Action::FocusNext);
        assert_eq!(app.focus, Focus::Detail);
        update(&mut app, Action::PageDown);
        update(&mut app, Action::MoveDown);
        assert_eq!(app.detail.origin(), 11);
        // scrolling the detail leaves the thread selection alone
        assert_eq!(app.threads.selected(), 0);
        for _ in 0..5 {
            update(&mut app, Action::PageDown);
        }
        let last = app.detail.visible().last().map(|(_, line)| line.text());
        assert_eq!(last.as_deref(), Some("line29"));

        update(&mut app, Action::FocusPrev);
        assert_eq!(app.focus, Focus::Threads);
        update(&mut app, Action::FocusPrev);
        assert_eq!(app.focus, Focus::Boards);
    }

    #[test]
    fn test_move_up_at_top_of_boards() {
        let mut app = loaded_app();
        update(&mut app, Action::MoveUp);
        assert_eq!(app.boards.cursor(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = loaded_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
