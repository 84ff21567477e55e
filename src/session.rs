use std::time::Duration;

use crate::error::{GameError, Result};
use crate::util::percentage;

pub const DEFAULT_DURATION_MS: u64 = 10_000;
pub const DEFAULT_SPAWN_PERIOD_MS: u64 = 500;

/// Options for one session. Build with [`SessionConfig::new`] so values are
/// validated before the controller sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub duration: Duration,
    pub spawn_period: Duration,
    /// Cap on simultaneously visible targets; `None` leaves growth unbounded.
    pub max_targets: Option<usize>,
}

impl SessionConfig {
    pub fn new(duration: Duration) -> Result<Self> {
        Self {
            duration,
            ..Self::default()
        }
        .validated()
    }

    pub fn with_spawn_period(mut self, spawn_period: Duration) -> Result<Self> {
        self.spawn_period = spawn_period;
        self.validated()
    }

    pub fn with_max_targets(mut self, max_targets: Option<usize>) -> Result<Self> {
        self.max_targets = max_targets;
        self.validated()
    }

    pub fn validated(self) -> Result<Self> {
        if self.duration.is_zero() {
            return Err(GameError::InvalidDuration(self.duration));
        }
        if self.spawn_period.is_zero() {
            return Err(GameError::InvalidSpawnPeriod(self.spawn_period));
        }
        if self.max_targets == Some(0) {
            return Err(GameError::InvalidTargetCap);
        }
        Ok(self)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            spawn_period: Duration::from_millis(DEFAULT_SPAWN_PERIOD_MS),
            max_targets: None,
        }
    }
}

/// Running counters for the current session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub targets_spawned: u32,
    pub hits: u32,
    pub clicks: u32,
}

impl SessionStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn click_accuracy(&self) -> u32 {
        percentage(self.hits, self.clicks)
    }

    /// Zero when nothing spawned, which happens for sessions shorter than
    /// one spawn period.
    pub fn target_accuracy(&self) -> u32 {
        percentage(self.hits, self.targets_spawned)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            targets_spawned: self.targets_spawned,
            hits: self.hits,
            target_accuracy: self.target_accuracy(),
            clicks: self.clicks,
            click_accuracy: self.click_accuracy(),
        }
    }
}

/// Final figures shown on the results view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub targets_spawned: u32,
    pub hits: u32,
    pub target_accuracy: u32,
    pub clicks: u32,
    pub click_accuracy: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn stats(targets_spawned: u32, hits: u32, clicks: u32) -> SessionStats {
        SessionStats {
            targets_spawned,
            hits,
            clicks,
        }
    }

    #[test]
    fn click_accuracy_without_clicks_is_zero() {
        assert_eq!(stats(0, 0, 0).click_accuracy(), 0);
    }

    #[test]
    fn click_accuracy_rounds_percentage() {
        assert_eq!(stats(10, 3, 4).click_accuracy(), 75);
    }

    #[test]
    fn target_accuracy_over_spawned() {
        assert_eq!(stats(5, 2, 9).target_accuracy(), 40);
    }

    #[test]
    fn target_accuracy_without_spawns_is_zero() {
        assert_eq!(stats(0, 0, 3).target_accuracy(), 0);
    }

    #[test]
    fn summary_carries_all_five_fields() {
        let summary = stats(5, 2, 4).summary();
        assert_eq!(
            summary,
            SessionSummary {
                targets_spawned: 5,
                hits: 2,
                target_accuracy: 40,
                clicks: 4,
                click_accuracy: 50,
            }
        );
    }

    #[test]
    fn reset_zeroes_counters() {
        let mut s = stats(8, 3, 12);
        s.reset();
        assert_eq!(s, SessionStats::default());
    }

    #[test]
    fn default_config_matches_classic_game() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.duration, Duration::from_secs(10));
        assert_eq!(cfg.spawn_period, Duration::from_millis(500));
        assert_eq!(cfg.max_targets, None);
    }

    #[test]
    fn config_rejects_zero_values() {
        assert_matches!(
            SessionConfig::new(Duration::ZERO),
            Err(GameError::InvalidDuration(_))
        );
        assert_matches!(
            SessionConfig::default().with_spawn_period(Duration::ZERO),
            Err(GameError::InvalidSpawnPeriod(_))
        );
        assert_matches!(
            SessionConfig::default().with_max_targets(Some(0)),
            Err(GameError::InvalidTargetCap)
        );
    }

    #[test]
    fn config_accepts_custom_values() {
        let cfg = SessionConfig::new(Duration::from_millis(1_000))
            .and_then(|c| c.with_spawn_period(Duration::from_millis(250)))
            .and_then(|c| c.with_max_targets(Some(4)))
            .unwrap();
        assert_eq!(cfg.duration, Duration::from_millis(1_000));
        assert_eq!(cfg.spawn_period, Duration::from_millis(250));
        assert_eq!(cfg.max_targets, Some(4));
    }
}
