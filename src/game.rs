use std::time::Duration;

use rand::{rngs::StdRng, Rng};

use crate::error::Result;
use crate::scheduler::{Scheduler, TimerId};
use crate::session::{SessionConfig, SessionStats, SessionSummary};
use crate::surface::{RenderSurface, StatField};
use crate::target::{Target, TargetGenerator, TargetId};
use crate::view::{View, ViewSwitcher};

/// The element under the pointer when it went down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Target(TargetId),
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Hit(TargetId),
    Miss,
    /// No session is listening for clicks
    Ignored,
}

/// Owns one session's lifecycle end to end: spawning, click tracking and
/// the final statistics.
#[derive(Debug)]
pub struct Game<S: RenderSurface, R: Rng = StdRng> {
    surface: S,
    generator: TargetGenerator<R>,
    views: ViewSwitcher,
    scheduler: Scheduler,
    stats: SessionStats,
    config: SessionConfig,
    spawn_timer: Option<TimerId>,
    end_timer: Option<TimerId>,
    listening: bool,
    next_target: u64,
}

impl<S: RenderSurface> Game<S> {
    pub fn new(surface: S) -> Self {
        Self::with_generator(surface, TargetGenerator::from_entropy())
    }
}

impl<S: RenderSurface, R: Rng> Game<S, R> {
    pub fn with_generator(surface: S, generator: TargetGenerator<R>) -> Self {
        Self {
            surface,
            generator,
            views: ViewSwitcher::new(),
            scheduler: Scheduler::new(),
            stats: SessionStats::default(),
            config: SessionConfig::default(),
            spawn_timer: None,
            end_timer: None,
            listening: false,
            next_target: 0,
        }
    }

    /// Begin a session at `now`. A session already in progress is
    /// superseded: its timers are cancelled and its targets cleared first.
    pub fn start(&mut self, config: SessionConfig, now: Duration) -> Result<()> {
        let config = config.validated()?;

        if self.is_running() {
            tracing::warn!(
                spawned = self.stats.targets_spawned,
                "start while a session is running, superseding it"
            );
            self.cancel_timers();
            self.surface.clear();
        }

        self.config = config;
        self.stats.reset();
        self.views.activate_view(View::Playing);
        self.spawn_timer = Some(self.scheduler.set_interval(now, config.spawn_period));
        self.listening = true;
        self.end_timer = Some(self.scheduler.set_timeout(now, config.duration));

        tracing::info!(
            duration_ms = config.duration.as_millis() as u64,
            spawn_period_ms = config.spawn_period.as_millis() as u64,
            max_targets = ?config.max_targets,
            "session started"
        );
        Ok(())
    }

    /// Fire every timer due at or before `now`. Returns the summary if the
    /// session ended during this call.
    pub fn advance(&mut self, now: Duration) -> Option<SessionSummary> {
        let mut ended = None;

        while let Some(id) = self.scheduler.pop_due(now) {
            if Some(id) == self.spawn_timer {
                self.spawn_target();
            } else if Some(id) == self.end_timer {
                self.end_timer = None;
                ended = self.end();
            } else {
                tracing::debug!(?id, "dropping stale timer");
                self.scheduler.cancel(id);
            }
        }

        ended
    }

    /// Pointer-down on the play surface
    pub fn pointer_down(&mut self, element: PointerTarget) -> ClickOutcome {
        if !self.listening {
            return ClickOutcome::Ignored;
        }

        self.stats.clicks += 1;

        match element {
            PointerTarget::Target(id) if self.surface.remove_target(id) => {
                self.stats.hits += 1;
                ClickOutcome::Hit(id)
            }
            _ => ClickOutcome::Miss,
        }
    }

    /// Finish the running session and publish its statistics.
    /// Does nothing when no session is running.
    pub fn end(&mut self) -> Option<SessionSummary> {
        if !self.is_running() {
            return None;
        }

        self.views.activate_view(View::Results);
        // the spawn timer must be gone before the surface is cleared
        self.cancel_timers();
        self.listening = false;
        self.surface.clear();

        let summary = self.stats.summary();
        self.publish(&summary);

        tracing::info!(
            targets = summary.targets_spawned,
            hits = summary.hits,
            clicks = summary.clicks,
            target_accuracy = summary.target_accuracy,
            click_accuracy = summary.click_accuracy,
            "session ended"
        );
        Some(summary)
    }

    pub fn is_running(&self) -> bool {
        self.views.is_active(View::Playing)
    }

    /// Time left in the running session
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.end_timer
            .and_then(|id| self.scheduler.due(id))
            .map(|due| due.saturating_sub(now))
    }

    pub fn view(&self) -> View {
        self.views.active()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn spawn_target(&mut self) {
        if let Some(cap) = self.config.max_targets {
            if self.surface.target_count() >= cap {
                tracing::debug!(cap, "target cap reached, skipping spawn");
                return;
            }
        }

        let target = Target {
            id: TargetId(self.next_target),
            position: self.generator.generate(),
        };
        self.next_target += 1;

        self.surface.add_target(target);
        self.stats.targets_spawned += 1;
        tracing::trace!(
            id = target.id.0,
            x = target.position.x,
            y = target.position.y,
            "spawned target"
        );
    }

    fn cancel_timers(&mut self) {
        if let Some(id) = self.spawn_timer.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.end_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn publish(&mut self, summary: &SessionSummary) {
        let values = [
            (StatField::Targets, summary.targets_spawned),
            (StatField::Hits, summary.hits),
            (StatField::TargetAccuracy, summary.target_accuracy),
            (StatField::Clicks, summary.clicks),
            (StatField::ClickAccuracy, summary.click_accuracy),
        ];
        for (field, value) in values {
            self.surface.write_stat(field, value.to_string());
        }
    }
}
