mod add_places_dialog;
mod detail_screen;
mod keymap;
mod theme;
mod trips_screen;
mod ui;

#[cfg(test)]
mod test_support;

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tripdeck_app::App;
use tripdeck_app::route::{Navigation, Route};

use crate::detail_screen::DetailScreen;
use crate::trips_screen::TripsScreen;
use crate::ui::modal::render_error_modal;

const TICK_RATE: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiExit {
    Completed,
    Canceled,
    /// The user asked for a route this UI does not host.
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FlowSignal {
    Continue,
    Navigate(Navigation),
    Exit(UiExit),
}

pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub(crate) fn enter() -> Result<Self> {
        let terminal = enter_with_ops(
            || enable_raw_mode().context("failed to enable raw mode"),
            || {
                execute!(stdout(), EnterAlternateScreen, Hide)
                    .context("failed to enter alternate screen")
            },
            || {
                Terminal::new(CrosstermBackend::new(stdout()))
                    .context("failed to create terminal backend")
            },
            || {
                execute!(stdout(), Show, LeaveAlternateScreen)
                    .context("failed to leave alternate screen during rollback")
            },
            || disable_raw_mode().context("failed to disable raw mode during rollback"),
        )?;
        Ok(Self { terminal })
    }

    pub(crate) fn draw<F>(&mut self, draw_fn: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame<'_>),
    {
        self.terminal
            .draw(draw_fn)
            .context("failed to render terminal")?;
        Ok(())
    }

    pub(crate) fn autoresize(&mut self) -> Result<()> {
        self.terminal
            .autoresize()
            .context("failed to autoresize terminal")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.terminal.backend_mut(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Runs terminal setup steps in order. When a later step fails, the steps
/// that already succeeded are undone in reverse and any cleanup failure is
/// appended to the setup error.
fn enter_with_ops<T, RawOn, AltOn, Create, AltOff, RawOff>(
    mut raw_on: RawOn,
    mut alt_on: AltOn,
    mut create: Create,
    mut alt_off: AltOff,
    mut raw_off: RawOff,
) -> Result<T>
where
    RawOn: FnMut() -> Result<()>,
    AltOn: FnMut() -> Result<()>,
    Create: FnMut() -> Result<T>,
    AltOff: FnMut() -> Result<()>,
    RawOff: FnMut() -> Result<()>,
{
    raw_on()?;

    let setup_error = match alt_on() {
        Err(error) => (error, false),
        Ok(()) => match create() {
            Ok(terminal) => return Ok(terminal),
            Err(error) => (error, true),
        },
    };

    let (error, alt_entered) = setup_error;
    let mut cleanup = Vec::new();
    if alt_entered && let Err(cleanup_error) = alt_off() {
        cleanup.push(format!("{cleanup_error:#}"));
    }
    if let Err(cleanup_error) = raw_off() {
        cleanup.push(format!("{cleanup_error:#}"));
    }

    if cleanup.is_empty() {
        Err(error)
    } else {
        Err(anyhow!(
            "{error:#}\nterminal rollback cleanup failed: {}",
            cleanup.join("\n")
        ))
    }
}

enum ActiveScreen {
    Trips,
    Detail(Box<DetailScreen>),
}

/// Root state shared by both screens. The trips screen stays alive while a
/// trip is open so in-flight fetches and deletes keep settling.
struct RootState {
    trips: TripsScreen,
    active: ActiveScreen,
    global_error: Option<String>,
}

impl RootState {
    fn new(trips: TripsScreen) -> Self {
        Self {
            trips,
            active: ActiveScreen::Trips,
            global_error: None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame<'_>) {
        match &self.active {
            ActiveScreen::Trips => self.trips.render(frame),
            ActiveScreen::Detail(screen) => screen.render(frame),
        }

        if let Some(message) = self.global_error.as_deref() {
            render_error_modal(
                frame,
                &format!("Operation failed.\n\n{message}"),
                "Enter/Esc: continue",
            );
        }
    }

    fn on_tick(&mut self) {
        self.trips.on_tick();
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<UiExit> {
        if keymap::is_ctrl_c(key) {
            return Some(UiExit::Canceled);
        }

        if self.global_error.is_some() {
            if keymap::is_confirm(key) || keymap::is_back(key) {
                self.global_error = None;
            }
            return None;
        }

        let signal = match &mut self.active {
            ActiveScreen::Trips => self.trips.on_key(key),
            ActiveScreen::Detail(screen) => screen.on_key(key),
        };

        match signal {
            FlowSignal::Continue => None,
            FlowSignal::Exit(exit) => Some(exit),
            FlowSignal::Navigate(navigation) => self.navigate(navigation),
        }
    }

    fn navigate(&mut self, navigation: Navigation) -> Option<UiExit> {
        let path = match navigation {
            Navigation::Back => {
                return match self.active {
                    ActiveScreen::Trips => Some(UiExit::Completed),
                    ActiveScreen::Detail(_) => {
                        self.active = ActiveScreen::Trips;
                        None
                    }
                };
            }
            Navigation::To(path) => path,
        };

        match Route::parse(&path) {
            Route::Trips => {
                self.active = ActiveScreen::Trips;
                None
            }
            Route::Trip(id) => {
                match self.trips.find_trip(&id) {
                    Some(trip) => {
                        let screen = DetailScreen::new(trip.clone());
                        tracing::debug!(trip = screen.trip_id(), "opened trip detail");
                        self.active = ActiveScreen::Detail(Box::new(screen));
                    }
                    None => {
                        self.global_error = Some(format!("trip '{id}' is no longer available"));
                    }
                }
                None
            }
            Route::Create { .. } | Route::Other(_) => Some(UiExit::Navigate(path)),
        }
    }
}

/// Opens the My Trips screen and blocks until the user leaves it.
pub fn run_trips(app: &App) -> Result<UiExit> {
    let mut session = TerminalSession::enter()?;
    let mut root = RootState::new(TripsScreen::new(app.trips_view()));

    loop {
        session.draw(|frame| root.render(frame))?;

        let has_event = event::poll(TICK_RATE).context("failed to poll terminal event")?;
        if !has_event {
            root.on_tick();
            continue;
        }

        let key = match event::read().context("failed to read terminal event")? {
            Event::Resize(_, _) => {
                session.autoresize()?;
                continue;
            }
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => key,
            _ => continue,
        };

        if let Some(exit) = root.on_key(key) {
            return Ok(exit);
        }

        root.on_tick();
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let pct_x = percent_x.min(100);
    let pct_y = percent_y.min(100);

    let [_, vertical, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - pct_y) / 2),
            Constraint::Percentage(pct_y),
            Constraint::Percentage((100 - pct_y) / 2),
        ])
        .areas(area);
    let [_, horizontal, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - pct_x) / 2),
            Constraint::Percentage(pct_x),
            Constraint::Percentage((100 - pct_x) / 2),
        ])
        .areas(vertical);
    horizontal
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::Arc;

    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use super::*;
    use crate::test_support::{InstantLoader, loaded_view, record};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn root_with(records: Vec<tripdeck_core::trip::RemoteTripRecord>) -> RootState {
        let loader = Arc::new(InstantLoader::new(records, &[]));
        RootState::new(TripsScreen::new(loaded_view(&loader)))
    }

    #[test]
    fn centered_rect_returns_middle_segment() {
        let centered = centered_rect(80, 60, Rect::new(0, 0, 100, 50));
        assert_eq!(centered, Rect::new(10, 10, 80, 30));
    }

    #[test]
    fn centered_rect_clamps_percentages_over_100() {
        let area = Rect::new(3, 4, 40, 20);
        assert_eq!(centered_rect(120, 150, area), area);
    }

    #[test]
    fn opening_a_trip_and_going_back_returns_to_list() {
        let mut root = root_with(vec![record("r1", "Paris Trip")]);

        assert_eq!(root.on_key(key(KeyCode::Enter)), None);
        assert!(matches!(root.active, ActiveScreen::Detail(_)));

        assert_eq!(root.on_key(key(KeyCode::Esc)), None);
        assert!(matches!(root.active, ActiveScreen::Trips));

        assert_eq!(root.on_key(key(KeyCode::Esc)), Some(UiExit::Completed));
    }

    #[test]
    fn create_routes_leave_the_ui() {
        let mut root = root_with(vec![record("r1", "Paris Trip")]);
        assert_eq!(
            root.on_key(key(KeyCode::Char('n'))),
            Some(UiExit::Navigate("/create".to_string()))
        );

        root.on_key(key(KeyCode::Enter));
        root.on_key(key(KeyCode::Char('a')));
        assert_eq!(
            root.on_key(key(KeyCode::Enter)),
            Some(UiExit::Navigate("/create?destination=Paris".to_string()))
        );
    }

    #[test]
    fn unknown_trip_route_shows_global_error() {
        let mut root = root_with(Vec::new());

        assert_eq!(root.navigate(Navigation::To("/trip/ghost".to_string())), None);
        assert!(root.global_error.as_deref().is_some_and(|message| message.contains("ghost")));

        assert_eq!(root.on_key(key(KeyCode::Char('q'))), None);
        root.on_key(key(KeyCode::Enter));
        assert!(root.global_error.is_none());
    }

    #[test]
    fn ctrl_c_cancels_from_any_screen() {
        let mut root = root_with(vec![record("r1", "Paris Trip")]);
        root.on_key(key(KeyCode::Enter));

        assert_eq!(
            root.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiExit::Canceled)
        );
    }

    #[test]
    fn enter_with_ops_rolls_back_raw_mode_when_alt_screen_fails() {
        let calls = RefCell::new(Vec::<&'static str>::new());

        let error = enter_with_ops(
            || {
                calls.borrow_mut().push("raw_on");
                Ok(())
            },
            || {
                calls.borrow_mut().push("alt_on");
                Err(anyhow!("alt screen refused"))
            },
            || {
                calls.borrow_mut().push("create");
                Ok(())
            },
            || {
                calls.borrow_mut().push("alt_off");
                Ok(())
            },
            || {
                calls.borrow_mut().push("raw_off");
                Ok(())
            },
        )
        .expect_err("setup should fail");

        assert_eq!(calls.into_inner(), vec!["raw_on", "alt_on", "raw_off"]);
        assert!(format!("{error:#}").contains("alt screen refused"));
    }

    #[test]
    fn enter_with_ops_reports_cleanup_failures_with_setup_error() {
        let calls = RefCell::new(Vec::<&'static str>::new());

        let error = enter_with_ops(
            || {
                calls.borrow_mut().push("raw_on");
                Ok(())
            },
            || {
                calls.borrow_mut().push("alt_on");
                Ok(())
            },
            || {
                calls.borrow_mut().push("create");
                Err::<(), _>(anyhow!("no terminal"))
            },
            || {
                calls.borrow_mut().push("alt_off");
                Err(anyhow!("leave alt failed"))
            },
            || {
                calls.borrow_mut().push("raw_off");
                Err(anyhow!("raw off failed"))
            },
        )
        .expect_err("setup should fail");

        assert_eq!(
            calls.into_inner(),
            vec!["raw_on", "alt_on", "create", "alt_off", "raw_off"]
        );
        let message = format!("{error:#}");
        assert!(message.contains("no terminal"));
        assert!(message.contains("leave alt failed"));
        assert!(message.contains("raw off failed"));
    }

    #[test]
    fn enter_with_ops_returns_terminal_on_success() {
        let value = enter_with_ops(
            || Ok(()),
            || Ok(()),
            || Ok::<_, anyhow::Error>("terminal"),
            || Err(anyhow!("should not run")),
            || Err(anyhow!("should not run")),
        )
        .expect("setup should succeed");

        assert_eq!(value, "terminal");
    }
}
