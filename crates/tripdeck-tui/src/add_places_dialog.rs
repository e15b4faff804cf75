use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use tripdeck_app::add_places::{ADD_PLACES_OPTIONS, AddPlacesEffect, AddPlacesRequest};

use crate::keymap;
use crate::theme;
use crate::ui::modal::{ModalSpec, render_modal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DialogSignal {
    Continue,
    Close,
    Chosen(AddPlacesEffect),
}

/// Option chooser for one day. Built fresh each time it opens.
#[derive(Debug)]
pub(crate) struct AddPlacesDialog {
    request: AddPlacesRequest,
    selected: usize,
}

impl AddPlacesDialog {
    pub(crate) fn new(request: AddPlacesRequest) -> Self {
        Self {
            request,
            selected: 0,
        }
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) -> DialogSignal {
        if keymap::is_back(key) {
            return DialogSignal::Close;
        }

        if keymap::is_up(key) {
            self.selected = self.selected.saturating_sub(1);
        } else if keymap::is_down(key) {
            self.selected = (self.selected + 1).min(ADD_PLACES_OPTIONS.len() - 1);
        } else if keymap::is_confirm(key) {
            let option = ADD_PLACES_OPTIONS[self.selected];
            return DialogSignal::Chosen(self.request.choose(option));
        }

        DialogSignal::Continue
    }

    pub(crate) fn render(&self, frame: &mut Frame<'_>) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.request.description(),
                theme::secondary_text(),
            )),
            Line::from(""),
        ];

        for (index, option) in ADD_PLACES_OPTIONS.iter().enumerate() {
            let (marker, style) = if index == self.selected {
                (">> ", theme::focus_prompt())
            } else {
                ("   ", Style::default())
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", option.label()),
                style,
            )));
            lines.push(Line::from(Span::styled(
                format!("   {}", self.request.subtitle(*option)),
                theme::secondary_text(),
            )));
            lines.push(Line::from(""));
        }

        let title = self.request.title();
        render_modal(
            frame,
            ModalSpec {
                title: &title,
                title_style: theme::focus_prompt(),
                body: Text::from(lines),
                key_hint: "Enter: choose    j/k: move    Esc: close",
                width_pct: 64,
                height_pct: 56,
            },
        );
    }
}
