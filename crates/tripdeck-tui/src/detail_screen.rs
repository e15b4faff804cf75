use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Text};
use ratatui::widgets::{List, ListItem, ListState};
use tripdeck_app::add_places::{AddPlacesEffect, AddPlacesRequest};
use tripdeck_app::route::{Navigation, Notice};
use tripdeck_core::time::display_date;
use tripdeck_core::trip::{DayEntry, Trip};

use crate::add_places_dialog::{AddPlacesDialog, DialogSignal};
use crate::keymap;
use crate::theme;
use crate::ui::modal::render_notice;
use crate::ui::text::{
    compact_hint, focus_line, key_hint_height, key_hint_paragraph, label_value_line,
    wrapped_paragraph,
};
use crate::{FlowSignal, UiExit};

pub(crate) struct DetailScreen {
    trip: Trip,
    days: Vec<DayEntry>,
    selected: usize,
    dialog: Option<AddPlacesDialog>,
    notice: Option<Notice>,
}

/// Itinerary days to show. A trip without any gets an empty Day 1 so places
/// can still be added.
fn days_for(trip: &Trip) -> Vec<DayEntry> {
    if trip.itinerary.is_empty() {
        return vec![DayEntry {
            day: 1,
            title: "Day 1".to_string(),
            places: Vec::new(),
        }];
    }
    trip.itinerary.clone()
}

impl DetailScreen {
    pub(crate) fn new(trip: Trip) -> Self {
        let days = days_for(&trip);
        Self {
            trip,
            days,
            selected: 0,
            dialog: None,
            notice: None,
        }
    }

    pub(crate) fn trip_id(&self) -> &str {
        &self.trip.id
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) -> FlowSignal {
        if self.notice.is_some() {
            if keymap::is_confirm(key) || keymap::is_back(key) {
                self.notice = None;
            }
            return FlowSignal::Continue;
        }

        if let Some(dialog) = &mut self.dialog {
            return match dialog.on_key(key) {
                DialogSignal::Continue => FlowSignal::Continue,
                DialogSignal::Close => {
                    self.dialog = None;
                    FlowSignal::Continue
                }
                DialogSignal::Chosen(effect) => {
                    self.dialog = None;
                    match effect {
                        AddPlacesEffect::Navigate(navigation) => FlowSignal::Navigate(navigation),
                        AddPlacesEffect::Notify(notice) => {
                            self.notice = Some(notice);
                            FlowSignal::Continue
                        }
                    }
                }
            };
        }

        if keymap::is_back(key) {
            return FlowSignal::Navigate(Navigation::Back);
        }

        if keymap::is_quit(key) {
            return FlowSignal::Exit(UiExit::Completed);
        }

        if keymap::is_up(key) {
            self.selected = self.selected.saturating_sub(1);
        } else if keymap::is_down(key) {
            self.selected = (self.selected + 1).min(self.days.len().saturating_sub(1));
        } else if keymap::is_confirm(key) || key.code == KeyCode::Char('a') {
            self.open_dialog();
        }

        FlowSignal::Continue
    }

    fn open_dialog(&mut self) {
        let Some(day) = self.days.get(self.selected) else {
            return;
        };
        self.dialog = Some(AddPlacesDialog::new(AddPlacesRequest::new(
            self.trip.destination.clone(),
            day.day,
        )));
    }

    pub(crate) fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let key_text = compact_hint(
            area.width,
            "a/Enter: add places to day    Up/Down or j/k: move    Esc: back to trips    q: quit",
            "a/Enter: add places    j/k: move    Esc: back    q: quit",
            "a add | j/k | Esc back | q quit",
        );
        let footer_height = key_hint_height(area.width, key_text);
        let [summary, body, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(6),
                Constraint::Length(footer_height),
            ])
            .areas(area);

        let trip = &self.trip;
        let mut lines = vec![
            label_value_line("Destination", format!("{}, {}", trip.destination, trip.country)),
            label_value_line("Duration", format!("{} day(s)", trip.duration)),
            label_value_line("Author", format!("{} (@{})", trip.author.name, trip.author.username)),
            label_value_line("Created", display_date(&trip.created_at)),
        ];
        if let Some(origin) = trip.remixed_from.as_deref().filter(|value| !value.is_empty()) {
            lines.push(label_value_line("Remixed from", origin));
        }
        frame.render_widget(
            wrapped_paragraph(Text::from(lines)).block(theme::chrome(focus_line(trip.title.clone()))),
            summary,
        );

        let items: Vec<ListItem<'_>> = self
            .days
            .iter()
            .map(|day| {
                let places = if day.places.is_empty() {
                    "no places yet".to_string()
                } else {
                    day.places.join(", ")
                };
                ListItem::new(vec![
                    Line::from(format!("Day {}: {}", day.day, day.title)),
                    Line::from(format!("   {places}")),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(theme::chrome(focus_line("Itinerary")))
            .highlight_style(theme::table_highlight());
        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, body, &mut state);

        frame.render_widget(
            key_hint_paragraph(key_text).block(theme::key_block()),
            footer,
        );

        if let Some(dialog) = &self.dialog {
            dialog.render(frame);
        }
        if let Some(notice) = &self.notice {
            render_notice(frame, notice);
        }
    }
}
