// chat_scrollbar — Custom scrollbar engine for chat panels, with a terminal host
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub mod layout;
mod scrollbar;
pub mod theme;

use crate::app::App;
use crate::scrollbar::ScrollPanel as _;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute(frame.area());

    if areas.title.height > 0 {
        render_title(frame, areas.title, app);
    }

    let lines: Vec<Line> = app.host.visible_lines().iter().map(|l| transcript_line(l)).collect();
    frame.render_widget(Paragraph::new(lines), areas.panel);

    frame.render_widget(
        scrollbar::ScrollbarView {
            thumb_rows: app.host.thumb_rows(),
            dragging: app.scrollbar.is_dragging(),
        },
        areas.track,
    );

    if let Some(footer) = areas.footer {
        render_footer(frame, footer, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " Chat ",
            Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.title.clone(), Style::default().fg(theme::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let metrics = app.host.scroll_metrics();
    let range = metrics.scroll_range();
    let position = if range > 0.0 {
        format!("{:>3.0}%", metrics.clamped_scroll_top() / range * 100.0)
    } else {
        "all".to_owned()
    };
    let line = Line::from(vec![
        Span::styled(
            " drag or click the bar, wheel/arrows/PgUp/PgDn scroll, q quits ",
            Style::default().fg(theme::DIM),
        ),
        Span::styled(position, Style::default().fg(theme::RUST_ORANGE)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Highlight the `you:` / `bot:` prefix of a chat line.
fn transcript_line(line: &str) -> Line<'static> {
    for (prefix, color) in [("you: ", theme::SENDER_USER), ("bot: ", theme::SENDER_BOT)] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Line::from(vec![
                Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(rest.to_owned()),
            ]);
        }
    }
    Line::from(line.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn sender_prefix_is_split_out() {
        let line = transcript_line("bot: hello");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "hello");
        assert_eq!(transcript_line("plain").spans.len(), 1);
    }

    #[test]
    fn renders_newest_lines_and_thumb_at_bottom() {
        let mut app = App::test_default();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                app.prepare_frame(f.area());
                render(f, &mut app);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        let row_text = |y: u16| -> String {
            (0..39).filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_owned())).collect()
        };
        // Body is rows 1..=10; the last body row shows the newest message.
        assert!(row_text(10).starts_with("message 99"));
        assert_eq!(buf.cell((39, 10)).map(ratatui::buffer::Cell::symbol), Some("█"));
        assert_eq!(buf.cell((39, 1)).map(ratatui::buffer::Cell::symbol), Some("│"));
    }
}
