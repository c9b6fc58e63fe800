//! The run loop: draw when something changed, wait briefly for input, drain
//! finished fetches, apply everything through [`update`].

use crate::action::{self, update, Action, Effect};
use crate::app::App;
use crate::{keymap, ui};
use chanview_fetch::fetcher::{Event, Fetcher};
use ratatui::DefaultTerminal;
use std::io;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Carries out an effect. Breaks when the app should exit.
pub fn apply(fetcher: &mut Fetcher, effect: Effect) -> ControlFlow<()> {
    match effect {
        Effect::None => {}
        Effect::Quit => return ControlFlow::Break(()),
        Effect::FetchBoards { request } => fetcher.fetch_boards(request),
        Effect::FetchCatalog { request, selection } => fetcher.fetch_catalog(request, selection),
    }
    ControlFlow::Continue(())
}

pub fn run(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    fetcher: &mut Fetcher,
    events: &mut mpsc::Receiver<Event>,
) -> io::Result<()> {
    if apply(fetcher, action::start(app)).is_break() {
        return Ok(());
    }
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            needs_redraw = false;
        }

        let mut actions: Vec<Action> = Vec::new();
        if let Some(action) = keymap::poll_action(POLL_TIMEOUT)? {
            actions.push(action);
            while let Some(action) = keymap::poll_action(Duration::ZERO)? {
                actions.push(action);
            }
        }
        while let Ok(event) = events.try_recv() {
            actions.push(event.into());
        }

        for action in actions {
            needs_redraw = true;
            let effect = update(app, action);
            if apply(fetcher, effect).is_break() {
                info!("quit requested");
                return Ok(());
            }
        }
    }
}
