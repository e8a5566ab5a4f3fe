use crate::{
    core::{config::WatchOptions, geo::GeoPoint},
    input::{dispatcher::LocationFeed, events::PositionSample},
    location::{LocationError, WatchId},
    traits::LocationSource,
};
use std::{collections::HashMap, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Geolocation, Position, PositionError, PositionOptions};

struct WatchCallbacks {
    _on_position: Closure<dyn FnMut(Position)>,
    _on_error: Closure<dyn FnMut(PositionError)>,
}

/// `navigator.geolocation.watchPosition` as a location source
///
/// `wake` runs after every delivered fix or error so the owner can drain the
/// dispatcher from inside the JS callback.
pub struct BrowserGeolocation {
    wake: Rc<dyn Fn()>,
    watches: HashMap<WatchId, WatchCallbacks>,
}

impl BrowserGeolocation {
    pub fn new(wake: Rc<dyn Fn()>) -> Self {
        Self {
            wake,
            watches: HashMap::new(),
        }
    }

    fn geolocation() -> std::result::Result<Geolocation, LocationError> {
        web_sys::window()
            .ok_or(LocationError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| LocationError::Unsupported)
    }
}

impl LocationSource for BrowserGeolocation {
    fn watch(
        &mut self,
        options: &WatchOptions,
        feed: LocationFeed,
    ) -> std::result::Result<WatchId, LocationError> {
        let geolocation = Self::geolocation()?;

        let position_feed = feed.clone();
        let wake = self.wake.clone();
        let on_position = Closure::<dyn FnMut(Position)>::new(
            move |position: Position| {
                let coords = position.coords();
                let sample = PositionSample {
                    point: GeoPoint::new(coords.latitude(), coords.longitude()),
                    accuracy_m: Some(coords.accuracy()),
                    timestamp_ms: Some(position.timestamp()),
                };
                if position_feed.push_position(sample) {
                    wake();
                }
            },
        );

        let wake = self.wake.clone();
        let on_error = Closure::<dyn FnMut(PositionError)>::new(
            move |error: PositionError| {
                if feed.push_error(LocationError::from_code(error.code(), error.message())) {
                    wake();
                }
            },
        );

        let position_options = PositionOptions::new();
        position_options.set_enable_high_accuracy(options.enable_high_accuracy);
        if let Some(timeout) = options.timeout_ms {
            position_options.set_timeout(timeout);
        }
        if let Some(maximum_age) = options.maximum_age_ms {
            position_options.set_maximum_age(maximum_age);
        }

        let raw_id = geolocation
            .watch_position_with_error_callback_and_options(
                on_position.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &position_options,
            )
            .map_err(|e| LocationError::PositionUnavailable(format!("{e:?}")))?;

        let id = WatchId(raw_id);
        log::info!("watching position ({:?})", id);
        self.watches.insert(
            id,
            WatchCallbacks {
                _on_position: on_position,
                _on_error: on_error,
            },
        );
        Ok(id)
    }

    fn clear_watch(&mut self, id: WatchId) {
        if self.watches.remove(&id).is_some() {
            if let Ok(geolocation) = Self::geolocation() {
                geolocation.clear_watch(id.0);
            }
            log::info!("cleared position watch {:?}", id);
        }
    }
}

impl Drop for BrowserGeolocation {
    fn drop(&mut self) {
        let ids: Vec<WatchId> = self.watches.keys().copied().collect();
        for id in ids {
            self.clear_watch(id);
        }
    }
}
