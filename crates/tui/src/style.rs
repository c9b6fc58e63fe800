use crate::render::{self, Field};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Selected entry in a list panel.
pub const HIGHLIGHT: Style = Style::new().fg(Color::Black).bg(Color::Green);

pub const FOCUSED_BORDER: Style = Style::new().fg(Color::Green);

pub fn style(field: Field) -> Style {
    match field {
        Field::PostNumber => Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Field::Attachment => Style::new()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
        Field::Author => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        Field::Subject => Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Field::BoardCode => Style::new().add_modifier(Modifier::BOLD),
        Field::Link => Style::new()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        Field::Label => Style::new().fg(Color::DarkGray),
        Field::Status => Style::new()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
        Field::Error => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        Field::Plain | Field::PostedAt | Field::Comment => Style::new(),
    }
}

pub fn to_line(line: &render::Line, selected: bool) -> Line<'_> {
    line.segments
        .iter()
        .map(|segment| {
            let span = Span::styled(segment.text.as_str(), style(segment.field));
            if selected {
                span.patch_style(HIGHLIGHT)
            } else {
                span
            }
        })
        .collect()
}
