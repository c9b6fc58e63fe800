use crate::app::{App, Focus};
use crate::panel::Panel;
use crate::style;

use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

/// Boards, threads and thread detail side by side at 1/6, 2/6 and 3/6 of the
/// width, inside a one cell margin.
pub fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::Ratio;
    Layout::horizontal([Ratio(1, 6), Ratio(2, 6), Ratio(3, 6)])
        .areas(area.inner(Margin::new(1, 1)))
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [boards_area, threads_area, detail_area] = layout(frame.area());

    draw_list(frame, boards_area, &mut app.boards, app.focus == Focus::Boards);
    draw_list(frame, threads_area, &mut app.threads, app.focus == Focus::Threads);
    draw_detail(frame, detail_area, &mut app.detail, app.focus == Focus::Detail);
}

fn panel_block(panel: &Panel, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(panel.title());
    if focused {
        block.border_style(style::FOCUSED_BORDER)
    } else {
        block
    }
}

fn draw_list(frame: &mut Frame, area: Rect, panel: &mut Panel, focused: bool) {
    let inner = Block::bordered().inner(area);
    panel.set_height(inner.height as usize);

    let panel = &*panel;
    let lines: Vec<_> = panel
        .visible()
        .map(|(index, line)| style::to_line(line, panel.is_selected(index)))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel_block(panel, focused)), area);
}

/// The detail panel wraps long comment lines, so it scrolls over wrapped
/// rows rather than over its lines.
fn draw_detail(frame: &mut Frame, area: Rect, panel: &mut Panel, focused: bool) {
    let inner = Block::bordered().inner(area);
    let rows = wrapped(panel).line_count(inner.width);
    panel.set_rows(rows);
    panel.set_height(inner.height as usize);

    let panel = &*panel;
    let offset = u16::try_from(panel.origin()).unwrap_or(u16::MAX);
    frame.render_widget(
        wrapped(panel)
            .block(panel_block(panel, focused))
            .scroll((offset, 0)),
        area,
    );
}

fn wrapped(panel: &Panel) -> Paragraph<'_> {
    let lines: Vec<_> = panel
        .lines()
        .iter()
        .map(|line| style::to_line(line, false))
        .collect();
    Paragraph::new(lines).wrap(Wrap { trim: false })
}
