use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Tabs};
use tripdeck_app::aggregate::COLLECTION_TABS;
use tripdeck_app::route::{CREATE_PATH, Navigation, Notice};
use tripdeck_app::selection::Activation;
use tripdeck_app::trips_view::{HeaderAction, TripsView};
use tripdeck_core::trip::Trip;

use crate::keymap;
use crate::theme;
use crate::ui::modal::render_notice;
use crate::ui::spinner::Spinner;
use crate::ui::text::{
    compact_hint, focus_line, key_hint_height, key_hint_paragraph, wrapped_paragraph,
};
use crate::ui::trip_table::{TripCursor, render_trip_table};
use crate::{FlowSignal, UiExit};

pub(crate) struct TripsScreen {
    view: TripsView,
    cursor: TripCursor,
    notices: VecDeque<Notice>,
    spinner: Spinner,
}

impl TripsScreen {
    pub(crate) fn new(view: TripsView) -> Self {
        Self {
            view,
            cursor: TripCursor::default(),
            notices: VecDeque::new(),
            spinner: Spinner::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &TripsView {
        &self.view
    }

    pub(crate) fn find_trip(&self, id: &str) -> Option<&Trip> {
        self.view.collections().find(id)
    }

    pub(crate) fn on_tick(&mut self) {
        self.spinner.next_frame();
        self.notices.extend(self.view.on_tick());
        self.cursor.clamp(self.view.visible_trips().len());
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) -> FlowSignal {
        if !self.notices.is_empty() {
            if keymap::is_confirm(key) || keymap::is_back(key) {
                self.notices.pop_front();
            }
            return FlowSignal::Continue;
        }

        if keymap::is_quit(key) {
            return FlowSignal::Exit(UiExit::Completed);
        }

        if keymap::is_back(key) {
            if self.view.selection().is_selecting() {
                self.view.cancel_selection();
                return FlowSignal::Continue;
            }
            return FlowSignal::Navigate(Navigation::Back);
        }

        if keymap::is_previous_tab(key) {
            self.view.previous_tab();
            self.cursor.reset();
            return FlowSignal::Continue;
        }

        if keymap::is_next_tab(key) {
            self.view.next_tab();
            self.cursor.reset();
            return FlowSignal::Continue;
        }

        if keymap::is_up(key) {
            self.cursor.move_up();
            return FlowSignal::Continue;
        }

        if keymap::is_down(key) {
            self.cursor.move_down(self.view.visible_trips().len());
            return FlowSignal::Continue;
        }

        if keymap::is_confirm(key) {
            return self.activate_current();
        }

        if keymap::is_toggle(key) {
            if let Some(id) = self.current_id() {
                self.view.toggle(&id);
            }
            return FlowSignal::Continue;
        }

        match key.code {
            KeyCode::Char('s') => {
                self.view.enter_selection();
            }
            KeyCode::Char('d') => {
                self.view.delete_selected();
            }
            KeyCode::Char('n') => {
                return FlowSignal::Navigate(Navigation::To(CREATE_PATH.to_string()));
            }
            KeyCode::Char('r') => self.view.refresh(),
            _ => {}
        }

        FlowSignal::Continue
    }

    fn current_id(&self) -> Option<String> {
        self.cursor
            .current(self.view.visible_trips())
            .map(|trip| trip.id.clone())
    }

    fn activate_current(&mut self) -> FlowSignal {
        let Some(id) = self.current_id() else {
            if self.view.is_loading() || self.view.feed_error().is_some() {
                return FlowSignal::Continue;
            }
            return FlowSignal::Navigate(Navigation::To(CREATE_PATH.to_string()));
        };

        match self.view.activate(&id) {
            Some(Activation::Navigate(path)) => FlowSignal::Navigate(Navigation::To(path)),
            Some(Activation::Toggled { .. }) | None => FlowSignal::Continue,
        }
    }

    pub(crate) fn render(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let key_text = self.key_text(area.width);
        let footer_height = key_hint_height(area.width, key_text);
        let bar_height = if self.view.action_bar().is_some() { 3 } else { 0 };
        let [header, tabs, body, bar, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(bar_height),
                Constraint::Length(footer_height),
            ])
            .areas(area);

        self.render_header(frame, header);
        self.render_tabs(frame, tabs);
        self.render_body(frame, body);
        self.render_action_bar(frame, bar);

        frame.render_widget(
            key_hint_paragraph(key_text).block(theme::key_block()),
            footer,
        );

        if let Some(notice) = self.notices.front() {
            render_notice(frame, notice);
        }
    }

    fn key_text(&self, width: u16) -> &'static str {
        if self.view.selection().is_selecting() {
            compact_hint(
                width,
                "Space/Enter: toggle    d: delete selected    Tab: switch tab    j/k: move    Esc: cancel",
                "Space: toggle    d: delete    Tab: tab    j/k: move    Esc: cancel",
                "Space toggle | d delete | Esc cancel",
            )
        } else {
            compact_hint(
                width,
                "Enter: open    Tab/h/l: switch tab    j/k: move    s: select    n: new trip    r: refresh    Esc: back    q: quit",
                "Enter: open    Tab: tab    s: select    n: new    r: refresh    Esc: back",
                "Enter open | Tab | s select | n new | q quit",
            )
        }
    }

    fn render_header(&self, frame: &mut Frame<'_>, area: Rect) {
        let actions: Vec<String> = self
            .view
            .header_actions()
            .into_iter()
            .map(|action| match action {
                HeaderAction::Select => "[s] Select".to_string(),
                HeaderAction::AddTrip => "[n] + New trip".to_string(),
                HeaderAction::Selected { count } => format!("{count} selected  [Esc] Close"),
            })
            .collect();

        let line = Line::from(vec![
            Span::styled("< Esc  ", theme::secondary_text()),
            Span::styled("My Trips", theme::focus_prompt()),
            Span::raw("    "),
            Span::raw(actions.join("   ")),
        ]);
        frame.render_widget(Paragraph::new(line).block(theme::chrome("")), area);
    }

    fn render_tabs(&self, frame: &mut Frame<'_>, area: Rect) {
        let titles = COLLECTION_TABS.iter().map(|tab| tab.title());
        let tabs = Tabs::new(titles)
            .select(self.view.tab().index())
            .highlight_style(theme::active_tab())
            .block(theme::chrome(""));
        frame.render_widget(tabs, area);
    }

    fn render_body(&self, frame: &mut Frame<'_>, area: Rect) {
        let tab = self.view.tab();
        let title = focus_line(tab.title());

        if self.view.tab_is_loading() {
            let text = Text::from(vec![
                Line::from(""),
                Line::from(self.spinner.label("Loading trips...")),
            ]);
            frame.render_widget(wrapped_paragraph(text).block(theme::chrome(title)), area);
            return;
        }

        if let Some(error) = self.view.feed_error() {
            let text = Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Could not load trips: {error}"),
                    theme::error_prompt(),
                )),
                Line::from("r: retry"),
            ]);
            frame.render_widget(wrapped_paragraph(text).block(theme::chrome(title)), area);
            return;
        }

        let trips = self.view.visible_trips();
        if trips.is_empty() {
            let text = Text::from(vec![
                Line::from(""),
                Line::from(tab.empty_message()),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Enter: {}", tab.empty_cta()),
                    theme::focus_prompt(),
                )),
            ]);
            frame.render_widget(wrapped_paragraph(text).block(theme::chrome(title)), area);
            return;
        }

        render_trip_table(
            frame,
            area,
            title,
            trips,
            self.view.selection(),
            &self.cursor,
        );
    }

    fn render_action_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let Some(bar) = self.view.action_bar() else {
            return;
        };

        let label = if bar.pending {
            self.spinner.label(&bar.label)
        } else {
            format!("[d] {}", bar.label)
        };
        frame.render_widget(
            Paragraph::new(label)
                .style(theme::danger_bar())
                .centered()
                .block(theme::chrome("")),
            area,
        );
    }
}
