use std::collections::BTreeMap;

use crate::target::{Position, Target, TargetId};

/// The designated display fields written when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum_macros::Display)]
pub enum StatField {
    #[strum(to_string = "Targets")]
    Targets,
    #[strum(to_string = "Hits")]
    Hits,
    #[strum(to_string = "Target accuracy")]
    TargetAccuracy,
    #[strum(to_string = "Clicks")]
    Clicks,
    #[strum(to_string = "Click accuracy")]
    ClickAccuracy,
}

impl StatField {
    /// Display order on the results view
    pub const ALL: [StatField; 5] = [
        StatField::Targets,
        StatField::Hits,
        StatField::TargetAccuracy,
        StatField::Clicks,
        StatField::ClickAccuracy,
    ];

    pub fn is_percentage(&self) -> bool {
        matches!(self, StatField::TargetAccuracy | StatField::ClickAccuracy)
    }
}

/// What the game controller is allowed to do to the display
pub trait RenderSurface {
    fn add_target(&mut self, target: Target);
    /// Returns false if no such target is on the surface
    fn remove_target(&mut self, id: TargetId) -> bool;
    /// Remove every target. Display fields are left alone.
    fn clear(&mut self);
    fn write_stat(&mut self, field: StatField, value: String);
    fn target_count(&self) -> usize;
}

/// In-memory surface backing both the terminal view and headless tests
#[derive(Debug, Default, Clone)]
pub struct PlaySurface {
    targets: BTreeMap<TargetId, Position>,
    stats: BTreeMap<StatField, String>,
}

impl PlaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in spawn order; later targets are drawn on top
    pub fn targets(&self) -> impl DoubleEndedIterator<Item = Target> + '_ {
        self.targets.iter().map(|(id, position)| Target {
            id: *id,
            position: *position,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn stat(&self, field: StatField) -> Option<&str> {
        self.stats.get(&field).map(String::as_str)
    }
}

impl RenderSurface for PlaySurface {
    fn add_target(&mut self, target: Target) {
        self.targets.insert(target.id, target.position);
    }

    fn remove_target(&mut self, id: TargetId) -> bool {
        self.targets.remove(&id).is_some()
    }

    fn clear(&mut self) {
        self.targets.clear();
    }

    fn write_stat(&mut self, field: StatField, value: String) {
        self.stats.insert(field, value);
    }

    fn target_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: u64, x: u8, y: u8) -> Target {
        Target {
            id: TargetId(id),
            position: Position::new(x, y),
        }
    }

    #[test]
    fn add_and_remove_targets() {
        let mut surface = PlaySurface::new();
        surface.add_target(target(1, 10, 20));
        surface.add_target(target(2, 30, 40));
        assert_eq!(surface.target_count(), 2);

        assert!(surface.remove_target(TargetId(1)));
        assert!(!surface.remove_target(TargetId(1)));
        let ids: Vec<_> = surface.targets().map(|t| t.id).collect();
        assert_eq!(ids, vec![TargetId(2)]);
    }

    #[test]
    fn clear_keeps_stats() {
        let mut surface = PlaySurface::new();
        surface.add_target(target(1, 0, 0));
        surface.write_stat(StatField::Hits, "4".to_string());

        surface.clear();

        assert!(surface.is_empty());
        assert_eq!(surface.stat(StatField::Hits), Some("4"));
    }

    #[test]
    fn targets_iterate_in_spawn_order() {
        let mut surface = PlaySurface::new();
        surface.add_target(target(3, 1, 1));
        surface.add_target(target(1, 2, 2));
        surface.add_target(target(2, 3, 3));

        let ids: Vec<u64> = surface.targets().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn stat_field_labels() {
        assert_eq!(StatField::TargetAccuracy.to_string(), "Target accuracy");
        assert!(StatField::ClickAccuracy.is_percentage());
        assert!(!StatField::Clicks.is_percentage());
    }
}
