use ratatui::Frame;
use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState};
use tripdeck_app::selection::SelectionState;
use tripdeck_core::time::display_date;
use tripdeck_core::trip::Trip;

use crate::theme;

/// Cursor over the trips of the active tab.
#[derive(Debug, Default)]
pub(crate) struct TripCursor {
    index: usize,
}

impl TripCursor {
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn reset(&mut self) {
        self.index = 0;
    }

    pub(crate) fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub(crate) fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub(crate) fn current<'a>(&self, trips: &'a [Trip]) -> Option<&'a Trip> {
        trips.get(self.index)
    }
}

fn trip_cells(trip: &Trip, selection: &SelectionState) -> Vec<String> {
    let mut cells = Vec::with_capacity(6);
    if selection.is_selecting() {
        let mark = if selection.is_selected(&trip.id) { "[x]" } else { "[ ]" };
        cells.push(mark.to_string());
    }

    cells.push(trip.title.clone());
    cells.push(format!("{}, {}", trip.destination, trip.country));
    cells.push(format!("{}d", trip.duration));
    cells.push(trip.author.name.clone());
    cells.push(display_date(&trip.created_at));
    cells
}

pub(crate) fn render_trip_table(
    frame: &mut Frame<'_>,
    area: Rect,
    title: Line<'_>,
    trips: &[Trip],
    selection: &SelectionState,
    cursor: &TripCursor,
) {
    let mut headers = Vec::with_capacity(6);
    let mut widths = Vec::with_capacity(6);
    if selection.is_selecting() {
        headers.push("");
        widths.push(Constraint::Length(3));
    }
    headers.extend(["Title", "Destination", "Days", "Author", "Created"]);
    widths.extend([
        Constraint::Min(24),
        Constraint::Length(24),
        Constraint::Length(5),
        Constraint::Length(16),
        Constraint::Length(11),
    ]);

    let rows = trips.iter().map(|trip| {
        let row = Row::new(trip_cells(trip, selection));
        if selection.is_selected(&trip.id) {
            row.style(theme::selected_row())
        } else {
            row
        }
    });

    let table = Table::new(rows, widths)
        .header(Row::new(headers).style(theme::table_header()))
        .block(theme::chrome(title))
        .row_highlight_style(theme::table_highlight())
        .highlight_symbol(">> ");

    let mut state = TableState::new();
    state.select(Some(cursor.index()));
    frame.render_stateful_widget(table, area, &mut state);

    let viewport = area.height.saturating_sub(3) as usize;
    let mut scrollbar_state = ScrollbarState::new(trips.len())
        .position(cursor.index())
        .viewport_content_length(viewport);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None),
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}
