use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Clear;
use tripdeck_app::route::{Notice, NoticeKind};

use crate::centered_rect;
use crate::theme;
use crate::ui::text::{key_hint_height, key_hint_paragraph, wrapped_paragraph};

pub(crate) struct ModalSpec<'a> {
    pub(crate) title: &'a str,
    pub(crate) title_style: Style,
    pub(crate) body: Text<'a>,
    pub(crate) key_hint: &'a str,
    pub(crate) width_pct: u16,
    pub(crate) height_pct: u16,
}

/// Draws a bordered modal over whatever is on screen, with its key hints
/// in a separate block along the bottom edge.
pub(crate) fn render_modal(frame: &mut Frame<'_>, spec: ModalSpec<'_>) -> Rect {
    let area = centered_rect(spec.width_pct, spec.height_pct, frame.area());
    let footer_height = key_hint_height(area.width, spec.key_hint);
    let [body_area, key_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(footer_height)])
        .areas(area);

    let title = Line::from(Span::styled(spec.title.to_string(), spec.title_style));
    frame.render_widget(Clear, area);
    frame.render_widget(
        wrapped_paragraph(spec.body).block(theme::chrome(title)),
        body_area,
    );
    frame.render_widget(
        key_hint_paragraph(spec.key_hint).block(theme::key_block()),
        key_area,
    );

    body_area
}

pub(crate) fn render_error_modal(frame: &mut Frame<'_>, message: &str, footer: &str) {
    render_modal(
        frame,
        ModalSpec {
            title: "Error",
            title_style: theme::error_prompt(),
            body: text_from_message(message),
            key_hint: footer,
            width_pct: 72,
            height_pct: 40,
        },
    );
}

pub(crate) fn render_notice(frame: &mut Frame<'_>, notice: &Notice) {
    match notice.kind {
        NoticeKind::Error => render_error_modal(frame, &notice.message, "Enter/Esc: dismiss"),
        NoticeKind::Info => {
            render_modal(
                frame,
                ModalSpec {
                    title: "Notice",
                    title_style: theme::focus_prompt(),
                    body: text_from_message(&notice.message),
                    key_hint: "Enter/Esc: dismiss",
                    width_pct: 60,
                    height_pct: 30,
                },
            );
        }
    }
}

fn text_from_message(message: &str) -> Text<'static> {
    let trimmed = message.trim_end();
    if trimmed.is_empty() {
        return Text::from(Line::from(""));
    }

    Text::from(
        trimmed
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tripdeck_app::route::Notice;

    use super::{render_notice, text_from_message};

    #[test]
    fn text_from_message_keeps_each_line() {
        let text = text_from_message("first\nsecond\n");
        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[1].spans[0].content.as_ref(), "second");
    }

    #[test]
    fn empty_message_renders_one_blank_line() {
        let text = text_from_message("  \n");
        assert_eq!(text.lines.len(), 1);
    }

    #[test]
    fn notices_are_titled_by_kind() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");

        terminal
            .draw(|frame| render_notice(frame, &Notice::info("Manual place search coming soon!")))
            .expect("draw info");
        let output = format!("{}", terminal.backend());
        assert!(output.contains("Notice"));
        assert!(output.contains("Manual place search coming soon!"));

        terminal
            .draw(|frame| render_notice(frame, &Notice::error("disk full")))
            .expect("draw error");
        let output = format!("{}", terminal.backend());
        assert!(output.contains("Error"));
        assert!(output.contains("disk full"));
    }
}
