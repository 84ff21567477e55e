use ratatui::{
    layout::{Constraint, Direction, Layout, Position as Cell, Rect},
    widgets::{Block, Borders},
};
use unicode_width::UnicodeWidthStr;

use crate::game::PointerTarget;
use crate::surface::PlaySurface;
use crate::target::Position;

use super::{HORIZONTAL_MARGIN, VERTICAL_MARGIN};

pub const TARGET_GLYPH: &str = "(o)";
pub const START_LABEL: &str = "[ start ]";

/// Screen regions shared by rendering and pointer hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayLayout {
    pub header: Rect,
    pub field: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> PlayLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // timer
            Constraint::Min(3),    // play field
            Constraint::Length(1), // legend
        ])
        .split(area);

    PlayLayout {
        header: chunks[0],
        field: chunks[1],
        footer: chunks[2],
    }
}

pub fn field_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// The cells targets may occupy: the play field minus its border
pub fn field_inner(area: Rect) -> Rect {
    field_block().inner(layout(area).field)
}

/// Cells covered by a target at `position` inside `inner`.
/// Offsets are percentages of the inner size; the marker is clipped at the
/// right edge on very narrow terminals.
pub fn target_rect(position: Position, inner: Rect) -> Rect {
    let left = inner.x + (inner.width as u32 * position.x as u32 / 100) as u16;
    let top = inner.y + (inner.height as u32 * position.y as u32 / 100) as u16;
    let width = (TARGET_GLYPH.width() as u16).min(inner.right().saturating_sub(left));
    let height = u16::from(top < inner.bottom());
    Rect::new(left, top, width, height)
}

/// Resolve what a pointer-down at a terminal cell landed on. `None` means the
/// pointer was outside the play field entirely.
pub fn element_at(
    surface: &PlaySurface,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<PointerTarget> {
    let inner = field_inner(area);
    let cell = Cell::new(column, row);
    if !inner.contains(cell) {
        return None;
    }

    // newest first: it is drawn on top
    let hit = surface
        .targets()
        .rev()
        .find(|t| target_rect(t.position, inner).contains(cell))
        .map(|t| PointerTarget::Target(t.id));

    Some(hit.unwrap_or(PointerTarget::Surface))
}

/// The designated start control on the idle and results views
pub fn start_button(area: Rect) -> Rect {
    let width = START_LABEL.width() as u16 + 4;
    let height = 3;
    let x = area.x + area.width.saturating_sub(width) / 2;
    // sits just above the legend line
    let y = area
        .bottom()
        .saturating_sub(VERTICAL_MARGIN + 1 + 1 + height)
        .max(area.y);
    Rect::new(x, y, width, height).intersection(area)
}
