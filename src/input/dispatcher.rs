//! Single-consumer dispatch of location and camera events
//!
//! Producers hold a [`LocationFeed`] or a [`CameraFeed`] and may live anywhere:
//! another thread, a JS callback, a test. The [`EventDispatcher`] is the only
//! consumer; it hands events to the controller one at a time, so no two
//! updates ever overlap.

use crate::{
    camera::CameraError,
    core::controller::CompassController,
    input::events::{CameraEvent, LocationEvent, PositionSample},
    location::LocationError,
    traits::CompassHost,
};
use crossbeam_channel::{bounded, never, select, unbounded, Receiver, Sender};

/// Sending half of the location channel
#[derive(Debug, Clone)]
pub struct LocationFeed {
    tx: Sender<LocationEvent>,
}

impl LocationFeed {
    /// Queue a fix; returns false once the dispatcher is gone
    pub fn push_position(&self, sample: impl Into<PositionSample>) -> bool {
        self.send(LocationEvent::Position(sample.into()))
    }

    /// Queue a source failure; returns false once the dispatcher is gone
    pub fn push_error(&self, error: LocationError) -> bool {
        self.send(LocationEvent::Error(error))
    }

    pub fn send(&self, event: LocationEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Sending half of the camera channel, consumed by its single resolution
#[derive(Debug)]
pub struct CameraFeed<S> {
    tx: Sender<CameraEvent<S>>,
}

impl<S> CameraFeed<S> {
    pub fn resolve(self, result: std::result::Result<S, CameraError>) -> bool {
        self.tx.send(result.into()).is_ok()
    }
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Location,
    Camera,
}

enum Inbound<S> {
    Location(LocationEvent),
    Camera(CameraEvent<S>),
}

/// Drains both inbound channels into a controller and host
pub struct EventDispatcher<S> {
    location_rx: Receiver<LocationEvent>,
    camera_rx: Receiver<CameraEvent<S>>,
    location_open: bool,
    camera_open: bool,
}

impl<S> EventDispatcher<S> {
    /// Create a dispatcher together with the two feeds that produce into it
    pub fn with_feeds() -> (Self, LocationFeed, CameraFeed<S>) {
        let (location_tx, location_rx) = unbounded();
        let (camera_tx, camera_rx) = bounded(1);

        let dispatcher = Self {
            location_rx,
            camera_rx,
            location_open: true,
            camera_open: true,
        };
        (
            dispatcher,
            LocationFeed { tx: location_tx },
            CameraFeed { tx: camera_tx },
        )
    }

    /// True once every feed of both channels has been dropped and drained
    pub fn is_closed(&self) -> bool {
        !self.location_open && !self.camera_open
    }

    /// Handle every event already queued, without blocking
    ///
    /// Returns the number of events handled.
    pub fn dispatch_pending<H>(&mut self, controller: &mut CompassController, host: &mut H) -> usize
    where
        H: CompassHost<Stream = S>,
    {
        let mut handled = 0;
        while let Some(event) = self.next_event(false) {
            Self::handle(event, controller, host);
            handled += 1;
        }
        handled
    }

    /// Block handling events until both channels disconnect
    pub fn run<H>(&mut self, controller: &mut CompassController, host: &mut H) -> usize
    where
        H: CompassHost<Stream = S>,
    {
        let mut handled = 0;
        while let Some(event) = self.next_event(true) {
            Self::handle(event, controller, host);
            handled += 1;
        }
        log::debug!("dispatcher finished after {} events", handled);
        handled
    }

    fn next_event(&mut self, blocking: bool) -> Option<Inbound<S>> {
        loop {
            if self.is_closed() {
                return None;
            }

            let received = if blocking {
                select! {
                    recv(self.location_rx) -> msg => msg.map(Inbound::Location).map_err(|_| Channel::Location),
                    recv(self.camera_rx) -> msg => msg.map(Inbound::Camera).map_err(|_| Channel::Camera),
                }
            } else {
                select! {
                    recv(self.location_rx) -> msg => msg.map(Inbound::Location).map_err(|_| Channel::Location),
                    recv(self.camera_rx) -> msg => msg.map(Inbound::Camera).map_err(|_| Channel::Camera),
                    default => return None,
                }
            };

            match received {
                Ok(event) => return Some(event),
                Err(channel) => self.retire(channel),
            }
        }
    }

    // A disconnected receiver is always ready, swap in one that never is
    fn retire(&mut self, channel: Channel) {
        match channel {
            Channel::Location => {
                log::debug!("location channel closed");
                self.location_rx = never();
                self.location_open = false;
            }
            Channel::Camera => {
                log::debug!("camera channel closed");
                self.camera_rx = never();
                self.camera_open = false;
            }
        }
    }

    fn handle<H>(event: Inbound<S>, controller: &mut CompassController, host: &mut H)
    where
        H: CompassHost<Stream = S>,
    {
        match event {
            Inbound::Location(LocationEvent::Position(sample)) => {
                if let Err(err) = controller.on_position_update(sample, host) {
                    log::warn!("update cycle failed: {}", err);
                    host.report_error(&err);
                }
            }
            Inbound::Location(LocationEvent::Error(err)) => controller.on_location_error(err, host),
            Inbound::Camera(CameraEvent::Ready(stream)) => {
                log::info!("camera stream ready");
                host.attach_camera(stream);
            }
            Inbound::Camera(CameraEvent::Failed(err)) => controller.on_camera_error(err, host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{config::CompassConfig, constants::DEFAULT_TARGET},
        ui::memory::MemoryHost,
        GeoPoint,
    };

    fn setup() -> (CompassController, MemoryHost<&'static str>) {
        (
            CompassController::new(CompassConfig::default()),
            MemoryHost::new(200.0, 200.0),
        )
    }

    #[test]
    fn test_dispatch_pending_in_order() {
        let (mut dispatcher, location, _camera) = EventDispatcher::with_feeds();
        let (mut controller, mut host) = setup();

        assert!(location.push_position(PositionSample::at(40.0, -105.0)));
        assert!(location.push_position(PositionSample::at(40.01, -105.1)));

        assert_eq!(dispatcher.dispatch_pending(&mut controller, &mut host), 2);
        assert_eq!(host.statuses.len(), 2);
        assert_eq!(host.statuses[1].coordinates, "GPS: 40.010000, -105.100000");
        assert_eq!(controller.position(), GeoPoint::new(40.01, -105.1));

        // Nothing queued, nothing handled
        assert_eq!(dispatcher.dispatch_pending(&mut controller, &mut host), 0);
        assert!(!dispatcher.is_closed());
    }

    #[test]
    fn test_camera_ready_attaches_once() {
        let (mut dispatcher, _location, camera) = EventDispatcher::with_feeds();
        let (mut controller, mut host) = setup();

        assert!(camera.resolve(Ok("rear")));
        dispatcher.dispatch_pending(&mut controller, &mut host);
        dispatcher.dispatch_pending(&mut controller, &mut host);

        assert_eq!(host.streams, vec!["rear"]);
        assert!(host.surface.drawing_queue.is_empty());
    }

    #[test]
    fn test_errors_are_reported_not_propagated() {
        let (mut dispatcher, location, camera) = EventDispatcher::with_feeds();
        let (mut controller, mut host) = setup();

        location.push_position(DEFAULT_TARGET);
        location.push_error(LocationError::Timeout("no fix".into()));
        camera.resolve(Err(CameraError::PermissionDenied("denied".into())));

        assert_eq!(dispatcher.dispatch_pending(&mut controller, &mut host), 3);
        assert_eq!(host.errors.len(), 2);
        assert_eq!(host.arrivals.len(), 1);
        assert_eq!(controller.position(), DEFAULT_TARGET);
    }

    #[test]
    fn test_run_stops_when_feeds_drop() {
        let (mut dispatcher, location, camera) = EventDispatcher::with_feeds();
        let (mut controller, mut host) = setup();

        let producer = std::thread::spawn(move || {
            for step in 0..5 {
                location.push_position(PositionSample::at(40.0 + step as f64 * 0.001, -105.0));
            }
            camera.resolve(Ok("rear"));
        });

        let handled = dispatcher.run(&mut controller, &mut host);
        producer.join().unwrap();

        assert_eq!(handled, 6);
        assert!(dispatcher.is_closed());
        assert_eq!(host.statuses.len(), 5);
        assert_eq!(host.streams.len(), 1);
        assert!((controller.position().lat - 40.004).abs() < 1e-9);
    }

    #[test]
    fn test_feed_reports_dropped_dispatcher() {
        let (dispatcher, location, camera) = EventDispatcher::<&'static str>::with_feeds();
        drop(dispatcher);

        assert!(!location.push_position(PositionSample::at(1.0, 1.0)));
        assert!(!camera.resolve(Ok("rear")));
    }
}
