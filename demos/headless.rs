use async_trait::async_trait;
use geocompass::prelude::*;
use geocompass::runtime;

/// Camera that resolves immediately with a label instead of a video stream
struct StillCamera;

#[async_trait(?Send)]
impl CameraSource for StillCamera {
    type Stream = &'static str;

    async fn request_stream(
        &self,
        constraints: &CameraConstraints,
    ) -> std::result::Result<Self::Stream, CameraError> {
        match constraints.facing {
            FacingMode::User => Ok("front camera"),
            _ => Ok("rear camera"),
        }
    }
}

/// Straight-line walk from `start` to `end`, finishing exactly on `end`
fn walk(start: GeoPoint, end: GeoPoint, steps: usize) -> Vec<ScriptStep> {
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let point = GeoPoint::new(
                start.lat + (end.lat - start.lat) * t,
                start.lon + (end.lon - start.lon) * t,
            );
            ScriptStep::Fix(PositionSample::new(point).with_accuracy(5.0))
        })
        .collect()
}

/// Replays a walk toward the cache without any browser
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🧭 Geocompass Headless Example");
    println!("==============================");

    let mut controller = CompassBuilder::from_config(CompassConfig::original_page()).build();
    let target = controller.target();
    println!("🎯 Target: {}", target);

    let mut track = walk(GeoPoint::new(40.0, -105.0), target, 8);
    track.insert(
        3,
        ScriptStep::Fail(LocationError::PositionUnavailable("lost satellites".into())),
    );
    let mut source = ScriptedLocationSource::new(track);

    let (mut dispatcher, location_feed, camera_feed) = EventDispatcher::with_feeds();
    let mut host = MemoryHost::new(800.0, 600.0);

    let watch = source.watch(&controller.config().location, location_feed)?;

    let constraints = controller.config().camera;
    runtime::spawn_local(async move {
        acquire_camera(&StillCamera, constraints, camera_feed).await;
    });

    while source.advance(1) > 0 {
        dispatcher.dispatch_pending(&mut controller, &mut host);
        match (controller.last_reading(), host.last_status()) {
            (Some(reading), Some(status)) => println!(
                "   📍 {} | {} | bearing {:.1}°{}",
                status.coordinates,
                status.distance,
                reading.bearing_deg,
                if reading.arrived { " ✅" } else { "" }
            ),
            _ => println!("   ⏳ waiting for first fix"),
        }
    }

    source.clear_watch(watch);
    dispatcher.run(&mut controller, &mut host);

    println!("\n📊 Session summary:");
    println!("   Fixes processed: {}", controller.fix_count());
    println!("   Camera: {:?}", host.streams);
    println!("   Errors: {:?}", host.errors);
    println!("   Arrival alerts: {}", host.arrivals.len());
    println!("   Draw commands in last frame: {}", host.surface.drawing_queue.len());

    let json = controller.config().to_json()?;
    println!("\n⚙️ Configuration used:\n{}", json);

    Ok(())
}
