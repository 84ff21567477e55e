pub mod playfield;
pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{app::App, surface::StatField, util::format_secs};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

fn bold_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim_bold_style() -> Style {
    bold_style().add_modifier(Modifier::DIM)
}

fn italic_style() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        screen::current_screen(self.view()).render(self, area, buf);
    }
}

fn legend(keys: &[&str]) -> Paragraph<'static> {
    Paragraph::new(Span::styled(keys.iter().join(" / "), italic_style()))
}

fn render_start_button(area: Rect, buf: &mut Buffer) {
    let rect = playfield::start_button(area);
    Paragraph::new(Span::styled(playfield::START_LABEL, bold_style().fg(Color::Green)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .render(rect, buf);
}

/// Text block above the start button, shared by idle and results
fn content_area(area: Rect) -> Rect {
    let button = playfield::start_button(area);
    let top = area.y + VERTICAL_MARGIN;
    Rect::new(
        area.x,
        top.min(button.y),
        area.width,
        button.y.saturating_sub(top),
    )
}

pub(crate) fn render_idle(app: &App, area: Rect, buf: &mut Buffer) {
    let settings = app.settings();
    let mut lines = vec![
        Line::from(Span::styled("clickshot", bold_style().fg(Color::Magenta))),
        Line::from(""),
        Line::from(Span::styled(
            "click the targets before the clock runs out",
            italic_style(),
        )),
        Line::from(Span::styled(
            format!(
                "{}s session, new target every {}ms",
                format_secs(settings.duration),
                settings.spawn_period.as_millis()
            ),
            dim_bold_style(),
        )),
    ];
    if let Some(cap) = settings.max_targets {
        lines.push(Line::from(Span::styled(
            format!("at most {cap} targets on screen"),
            dim_bold_style(),
        )));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(content_area(area), buf);

    render_start_button(area, buf);
    legend(&["(s)tart", "(esc)ape"]).render(playfield::layout(area).footer, buf);
}

pub(crate) fn render_playing(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = playfield::layout(area);
    let stats = app.game.stats();

    let remaining = app.game.remaining(app.now()).unwrap_or_default();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(format_secs(remaining), bold_style()),
        Span::styled(
            format!("   {} hits / {} clicks", stats.hits, stats.clicks),
            dim_bold_style(),
        ),
    ]))
    .alignment(Alignment::Center);
    header.render(layout.header, buf);

    playfield::field_block().render(layout.field, buf);

    let inner = playfield::field_inner(area);
    let target_style = bold_style().fg(Color::Red);
    for target in app.game.surface().targets() {
        let rect = playfield::target_rect(target.position, inner);
        if rect.area() == 0 {
            continue;
        }
        buf.set_stringn(
            rect.x,
            rect.y,
            playfield::TARGET_GLYPH,
            rect.width as usize,
            target_style,
        );
    }

    legend(&["(r)estart", "(esc)ape"]).render(layout.footer, buf);
}

pub(crate) fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let surface = app.game.surface();
    let content = content_area(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(0),    // stats
        ])
        .split(content);

    Paragraph::new(Span::styled("results", bold_style().fg(Color::Magenta)))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let lines: Vec<Line> = StatField::ALL
        .iter()
        .map(|field| {
            let value = surface.stat(*field).unwrap_or("-");
            let suffix = if field.is_percentage() { "%" } else { "" };
            Line::from(vec![
                Span::styled(format!("{:>16}  ", field.to_string()), dim_bold_style()),
                Span::styled(
                    format!("{:<5}", format!("{value}{suffix}")),
                    bold_style().patch(value_style(*field)),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    render_start_button(area, buf);
    legend(&["(s)tart", "(esc)ape"]).render(playfield::layout(area).footer, buf);
}

fn value_style(field: StatField) -> Style {
    if field.is_percentage() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, PointerTarget};
    use crate::session::SessionConfig;
    use crate::surface::PlaySurface;
    use crate::target::TargetGenerator;
    use std::time::Duration;

    fn test_app() -> App {
        let game = Game::with_generator(PlaySurface::new(), TargetGenerator::seeded(3));
        App::with_game(game, SessionConfig::default())
    }

    fn rendered(app: &App, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn idle_view_shows_start_control() {
        let app = test_app();
        let text = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(text.contains("clickshot"));
        assert!(text.contains("[ start ]"));
        assert!(text.contains("(s)tart / (esc)ape"));
    }

    #[test]
    fn playing_view_draws_targets_and_timer() {
        let mut app = test_app();
        app.start_session(Duration::ZERO);
        app.game.advance(Duration::from_millis(1_000));
        app.set_now(Duration::from_millis(1_000));

        let text = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(text.contains("(o)"));
        assert!(text.contains("9.0"));
        assert!(text.contains("0 hits / 0 clicks"));
    }

    #[test]
    fn results_view_shows_all_stats() {
        let mut app = test_app();
        app.start_session(Duration::ZERO);
        app.game.advance(Duration::from_millis(500));
        app.game.pointer_down(PointerTarget::Surface);
        app.game.end();

        let text = rendered(&app, Rect::new(0, 0, 80, 24));
        assert!(text.contains("results"));
        for field in StatField::ALL {
            assert!(text.contains(&field.to_string()), "missing {field}");
        }
        assert!(!text.contains("(o)"));
    }

    #[test]
    fn renders_on_tiny_and_huge_areas() {
        let mut app = test_app();
        for area in [
            Rect::new(0, 0, 10, 5),
            Rect::new(0, 0, 1, 1),
            Rect::new(0, 0, 400, 200),
        ] {
            let mut buffer = Buffer::empty(area);
            (&app).render(area, &mut buffer);
            assert!(*buffer.area() == area);
        }

        app.start_session(Duration::ZERO);
        app.game.advance(Duration::from_millis(5_000));
        for area in [Rect::new(0, 0, 12, 6), Rect::new(0, 0, 0, 0)] {
            let mut buffer = Buffer::empty(area);
            (&app).render(area, &mut buffer);
            assert!(*buffer.area() == area);
        }
    }

    #[test]
    fn ui_constants() {
        assert_eq!(HORIZONTAL_MARGIN, 5);
        assert_eq!(VERTICAL_MARGIN, 2);
    }
}
