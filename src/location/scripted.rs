use crate::{
    core::config::WatchOptions,
    input::{dispatcher::LocationFeed, events::PositionSample},
    location::{LocationError, WatchId},
    traits::LocationSource,
};
use std::collections::VecDeque;

/// One scripted delivery
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Fix(PositionSample),
    Fail(LocationError),
}

struct ActiveWatch {
    id: WatchId,
    feed: LocationFeed,
}

/// Location source that replays a fixed track
///
/// Fixes are delivered on demand through [`advance`](Self::advance), so a test
/// or demo controls exactly when each one arrives. Every active watch receives
/// every step.
pub struct ScriptedLocationSource {
    steps: VecDeque<ScriptStep>,
    watches: Vec<ActiveWatch>,
    next_id: i32,
    supported: bool,
}

impl ScriptedLocationSource {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            watches: Vec::new(),
            next_id: 1,
            supported: true,
        }
    }

    /// Track of plain fixes
    pub fn from_samples(samples: impl IntoIterator<Item = PositionSample>) -> Self {
        Self::new(samples.into_iter().map(ScriptStep::Fix))
    }

    /// A host without geolocation: every `watch` fails with `Unsupported`
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new(Vec::new())
        }
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn active_watches(&self) -> usize {
        self.watches.len()
    }

    /// Deliver up to `count` steps to every active watch
    ///
    /// Steps are only consumed while at least one watch is active. Returns the
    /// number of steps delivered.
    pub fn advance(&mut self, count: usize) -> usize {
        let mut delivered = 0;
        while delivered < count && !self.watches.is_empty() {
            let Some(step) = self.steps.pop_front() else {
                break;
            };
            // Watches whose dispatcher went away are dropped
            self.watches.retain(|watch| match &step {
                ScriptStep::Fix(sample) => watch.feed.push_position(*sample),
                ScriptStep::Fail(err) => watch.feed.push_error(err.clone()),
            });
            delivered += 1;
        }
        delivered
    }

    /// Deliver every remaining step
    pub fn replay_all(&mut self) -> usize {
        self.advance(usize::MAX)
    }
}

impl LocationSource for ScriptedLocationSource {
    fn watch(
        &mut self,
        options: &WatchOptions,
        feed: LocationFeed,
    ) -> std::result::Result<WatchId, LocationError> {
        if !self.supported {
            return Err(LocationError::Unsupported);
        }

        let id = WatchId(self.next_id);
        self.next_id += 1;
        log::debug!(
            "scripted watch {:?} started (high accuracy: {})",
            id,
            options.enable_high_accuracy
        );
        self.watches.push(ActiveWatch { id, feed });
        Ok(id)
    }

    fn clear_watch(&mut self, id: WatchId) {
        // Dropping the feed disconnects the channel once no other feed is left
        self.watches.retain(|watch| watch.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{input::dispatcher::EventDispatcher, ui::memory::MemoryHost, CompassController};

    fn track() -> ScriptedLocationSource {
        ScriptedLocationSource::new([
            ScriptStep::Fix(PositionSample::at(40.0, -105.0).with_accuracy(12.0)),
            ScriptStep::Fail(LocationError::PositionUnavailable("lost fix".into())),
            ScriptStep::Fix(PositionSample::at(40.02, -105.2)),
        ])
    }

    #[test]
    fn test_advance_delivers_in_order() {
        let (mut dispatcher, feed, _camera) = EventDispatcher::with_feeds();
        let mut controller = CompassController::default();
        let mut host = MemoryHost::<()>::new(100.0, 100.0);
        let mut source = track();

        source.watch(&WatchOptions::default(), feed).unwrap();
        assert_eq!(source.advance(2), 2);
        assert_eq!(dispatcher.dispatch_pending(&mut controller, &mut host), 2);
        assert_eq!(host.statuses.len(), 1);
        assert_eq!(host.errors.len(), 1);

        assert_eq!(source.replay_all(), 1);
        dispatcher.dispatch_pending(&mut controller, &mut host);
        assert_eq!(controller.position().lat, 40.02);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_cleared_watch_stops_delivery() {
        let (mut dispatcher, feed, camera) = EventDispatcher::<()>::with_feeds();
        drop(camera);
        let mut controller = CompassController::default();
        let mut host = MemoryHost::new(100.0, 100.0);
        let mut source = track();

        let id = source.watch(&WatchOptions::default(), feed).unwrap();
        source.advance(1);
        source.clear_watch(id);

        assert_eq!(source.active_watches(), 0);
        assert_eq!(source.replay_all(), 0);
        assert_eq!(source.remaining(), 2);

        assert_eq!(dispatcher.dispatch_pending(&mut controller, &mut host), 1);
        assert!(dispatcher.is_closed());
    }

    #[test]
    fn test_unsupported_host() {
        let (_dispatcher, feed, _camera) = EventDispatcher::<()>::with_feeds();
        let mut source = ScriptedLocationSource::unsupported();

        assert_eq!(
            source.watch(&WatchOptions::default(), feed),
            Err(LocationError::Unsupported)
        );
    }
}
