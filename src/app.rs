use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position as Cell, Rect};

use crate::game::{ClickOutcome, Game};
use crate::runtime::GameEvent;
use crate::session::SessionConfig;
use crate::surface::PlaySurface;
use crate::ui::playfield;
use crate::view::View;

/// What the event loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Redraw,
    Quit,
}

/// Terminal-facing state: the game plus the settings each new session uses
#[derive(Debug)]
pub struct App {
    pub game: Game<PlaySurface>,
    settings: SessionConfig,
    now: Duration,
}

impl App {
    pub fn new(settings: SessionConfig) -> Self {
        Self::with_game(Game::new(PlaySurface::new()), settings)
    }

    pub fn with_game(game: Game<PlaySurface>, settings: SessionConfig) -> Self {
        Self {
            game,
            settings,
            now: Duration::ZERO,
        }
    }

    pub fn view(&self) -> View {
        self.game.view()
    }

    pub fn settings(&self) -> &SessionConfig {
        &self.settings
    }

    /// Clock reading of the last handled event
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn start_session(&mut self, now: Duration) {
        self.now = now;
        if let Err(err) = self.game.start(self.settings, now) {
            tracing::error!(%err, "could not start session");
        }
    }

    /// Apply one event. `now` is the clock reading and `area` the terminal
    /// size used for the last draw, needed to hit-test pointer events.
    pub fn handle(&mut self, event: GameEvent, now: Duration, area: Rect) -> AppAction {
        self.now = now;

        match event {
            GameEvent::Tick => {
                if !self.game.is_running() {
                    return AppAction::None;
                }
                // redraw every tick while running so the timer counts down
                self.game.advance(now);
                AppAction::Redraw
            }
            GameEvent::Resize => AppAction::Redraw,
            GameEvent::Closed => {
                tracing::warn!("input stream closed, quitting");
                AppAction::Quit
            }
            GameEvent::Key(key) => self.on_key(key, now),
            GameEvent::PointerDown { column, row } => self.on_pointer_down(column, row, now, area),
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Duration) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }

        match key.code {
            KeyCode::Esc => AppAction::Quit,
            // ctrl+c to quit
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppAction::Quit,
            KeyCode::Char('r') => {
                self.start_session(now);
                AppAction::Redraw
            }
            KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter if !self.game.is_running() => {
                self.start_session(now);
                AppAction::Redraw
            }
            _ => AppAction::None,
        }
    }

    fn on_pointer_down(&mut self, column: u16, row: u16, now: Duration, area: Rect) -> AppAction {
        if !self.game.is_running() {
            if playfield::start_button(area).contains(Cell::new(column, row)) {
                self.start_session(now);
                return AppAction::Redraw;
            }
            return AppAction::None;
        }

        // timers due before this click fire first
        if self.game.advance(now).is_some() {
            return AppAction::Redraw;
        }

        let Some(element) = playfield::element_at(self.game.surface(), area, column, row) else {
            return AppAction::None;
        };

        match self.game.pointer_down(element) {
            ClickOutcome::Hit(id) => {
                tracing::debug!(id = id.0, "target hit");
                AppAction::Redraw
            }
            ClickOutcome::Miss => AppAction::Redraw,
            ClickOutcome::Ignored => AppAction::None,
        }
    }
}
