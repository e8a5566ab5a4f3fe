//! Camera stream acquisition
//!
//! The stream is requested once. Whatever the outcome, it is pushed into the
//! camera feed and handled by the dispatcher like any other event; a failure
//! is terminal and never retried.

use crate::{core::config::CameraConstraints, input::dispatcher::CameraFeed, traits::CameraSource};

/// Failures reported by a camera source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("no matching camera: {0}")]
    NotFound(String),

    #[error("camera unavailable: {0}")]
    Unavailable(String),
}

impl CameraError {
    /// Maps a `DOMException` name from `getUserMedia`
    pub fn from_dom_name(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match name {
            "NotAllowedError" | "SecurityError" => Self::PermissionDenied(message),
            "NotFoundError" | "OverconstrainedError" => Self::NotFound(message),
            _ => Self::Unavailable(message),
        }
    }
}

/// Request the stream once and push the outcome into `feed`
///
/// Returns false if the dispatcher was dropped before the request resolved.
pub async fn acquire_camera<C>(source: &C, constraints: CameraConstraints, feed: CameraFeed<C::Stream>) -> bool
where
    C: CameraSource + ?Sized,
{
    log::debug!("requesting camera stream ({:?})", constraints.facing);
    let result = source.request_stream(&constraints).await;
    if let Err(err) = &result {
        log::debug!("camera request failed: {}", err);
    }
    feed.resolve(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::config::FacingMode, input::dispatcher::EventDispatcher, ui::memory::MemoryHost,
        CompassController,
    };
    use async_trait::async_trait;
    use std::cell::Cell;

    struct FakeCamera {
        outcome: std::result::Result<&'static str, CameraError>,
        requests: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl CameraSource for FakeCamera {
        type Stream = &'static str;

        async fn request_stream(
            &self,
            constraints: &CameraConstraints,
        ) -> std::result::Result<Self::Stream, CameraError> {
            assert_eq!(constraints.facing, FacingMode::Environment);
            self.requests.set(self.requests.get() + 1);
            self.outcome.clone()
        }
    }

    #[test]
    fn test_dom_exception_names() {
        assert!(matches!(
            CameraError::from_dom_name("NotAllowedError", "denied"),
            CameraError::PermissionDenied(_)
        ));
        assert!(matches!(
            CameraError::from_dom_name("OverconstrainedError", ""),
            CameraError::NotFound(_)
        ));
        assert!(matches!(
            CameraError::from_dom_name("NotReadableError", ""),
            CameraError::Unavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_acquired_stream_reaches_host() {
        let camera = FakeCamera {
            outcome: Ok("rear"),
            requests: Cell::new(0),
        };
        let (mut dispatcher, _location, feed) = EventDispatcher::with_feeds();
        let mut controller = CompassController::default();
        let mut host = MemoryHost::new(100.0, 100.0);

        assert!(acquire_camera(&camera, CameraConstraints::default(), feed).await);
        dispatcher.dispatch_pending(&mut controller, &mut host);

        assert_eq!(camera.requests.get(), 1);
        assert_eq!(host.streams, vec!["rear"]);
        assert!(host.errors.is_empty());
    }

    #[tokio::test]
    async fn test_denied_camera_is_reported() {
        let camera = FakeCamera {
            outcome: Err(CameraError::PermissionDenied("Permission denied".into())),
            requests: Cell::new(0),
        };
        let (mut dispatcher, _location, feed) = EventDispatcher::with_feeds();
        let mut controller = CompassController::default();
        let mut host = MemoryHost::<&'static str>::new(100.0, 100.0);

        acquire_camera(&camera, CameraConstraints::default(), feed).await;
        dispatcher.dispatch_pending(&mut controller, &mut host);

        assert!(host.streams.is_empty());
        assert_eq!(
            host.errors,
            vec!["Camera error: permission denied: Permission denied"]
        );
        assert!(host.surface.drawing_queue.is_empty());
    }
}
