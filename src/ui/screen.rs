use ratatui::{buffer::Buffer, layout::Rect};

use crate::{app::App, view::View};

use super::{render_idle, render_playing, render_results};

/// A UI Screen boundary: one per view
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Title, session settings and the start control
pub struct IdleScreen;

impl Screen for IdleScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_idle(app, area, buf);
    }
}

/// Timer, play field and live targets
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_playing(app, area, buf);
    }
}

/// The five display fields written at session end
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        render_results(app, area, buf);
    }
}

/// Helper to construct the appropriate screen for the current view
pub fn current_screen(view: View) -> Box<dyn Screen> {
    match view {
        View::Idle => Box::new(IdleScreen),
        View::Playing => Box::new(PlayingScreen),
        View::Results => Box::new(ResultsScreen),
    }
}
