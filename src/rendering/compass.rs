use crate::{
    core::config::{ArrowAnchor, ArrowStyle},
    traits::RenderSurface,
    Result,
};

/// Draws the heading arrow
///
/// Each frame clears the surface, pivots the arrow around its anchor by the
/// bearing and fills it. The transform is saved and restored around the
/// rotation so repeated frames never accumulate drift.
#[derive(Debug, Clone, Default)]
pub struct CompassRenderer {
    pub arrow: ArrowStyle,
    pub anchor: ArrowAnchor,
}

impl CompassRenderer {
    pub fn new(arrow: ArrowStyle, anchor: ArrowAnchor) -> Self {
        Self { arrow, anchor }
    }

    /// Render one frame pointing `bearing_deg` degrees clockwise from up
    pub fn draw(&self, surface: &mut dyn RenderSurface, bearing_deg: f64) -> Result<()> {
        surface.clear();

        let (x, y) = self.anchor.resolve(surface.width(), surface.height());
        surface.save();
        let drawn = self.draw_arrow(surface, x, y, bearing_deg);
        // Restore even if a transform step failed, the next frame depends on it
        surface.restore();
        drawn
    }

    fn draw_arrow(
        &self,
        surface: &mut dyn RenderSurface,
        x: f64,
        y: f64,
        bearing_deg: f64,
    ) -> Result<()> {
        surface.translate(x, y)?;
        surface.rotate(bearing_deg.to_radians())?;

        let [tip, right, left] = self.arrow.vertices();
        surface.set_fill_style(&self.arrow.fill);
        surface.begin_path();
        surface.move_to(tip.0, tip.1);
        surface.line_to(right.0, right.1);
        surface.line_to(left.0, left.1);
        surface.close_path();
        surface.fill();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::context::{DrawCommand, RecordingSurface};

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_north_arrow_points_up() {
        let renderer = CompassRenderer::default();
        let mut surface = RecordingSurface::new(400.0, 300.0);

        renderer.draw(&mut surface, 0.0).unwrap();

        let paths = surface.filled_paths();
        assert_eq!(paths.len(), 1);
        assert_close(paths[0][0], (200.0, 100.0));
        assert_close(paths[0][1], (220.0, 170.0));
        assert_close(paths[0][2], (180.0, 170.0));
    }

    #[test]
    fn test_east_arrow_points_right() {
        let renderer = CompassRenderer::default();
        let mut surface = RecordingSurface::new(400.0, 300.0);

        renderer.draw(&mut surface, 90.0).unwrap();

        let tip = surface.filled_paths()[0][0];
        assert_close(tip, (250.0, 150.0));
    }

    #[test]
    fn test_frame_command_sequence() {
        let renderer = CompassRenderer::default();
        let mut surface = RecordingSurface::new(100.0, 100.0);

        renderer.draw(&mut surface, 45.0).unwrap();

        let queue = &surface.drawing_queue;
        assert!(matches!(queue[0], DrawCommand::ClearRect { width, height, .. } if width == 100.0 && height == 100.0));
        assert_eq!(queue[1], DrawCommand::Save);
        assert_eq!(queue[2], DrawCommand::Translate { x: 50.0, y: 50.0 });
        assert_eq!(
            queue[3],
            DrawCommand::Rotate {
                radians: 45f64.to_radians()
            }
        );
        assert_eq!(queue[4], DrawCommand::SetFillStyle("yellow".to_string()));
        assert_eq!(queue.last(), Some(&DrawCommand::Restore));
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let renderer = CompassRenderer::default();
        let mut surface = RecordingSurface::new(640.0, 480.0);
        let initial = surface.transform();

        renderer.draw(&mut surface, 123.0).unwrap();
        let first_frame = surface.drawing_queue.clone();
        let after_first = surface.transform();

        surface.clear_commands();
        renderer.draw(&mut surface, 123.0).unwrap();

        assert_eq!(after_first, initial);
        assert_eq!(surface.transform(), initial);
        assert_eq!(surface.drawing_queue, first_frame);
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn test_failed_rotation_still_restores() {
        let renderer = CompassRenderer::default();
        let mut surface = RecordingSurface::new(100.0, 100.0);

        assert!(renderer.draw(&mut surface, f64::NAN).is_err());
        assert_eq!(surface.save_depth(), 0);
        assert!(surface.filled_paths().is_empty());
    }

    #[test]
    fn test_top_anchor() {
        let renderer = CompassRenderer::new(
            ArrowStyle::default(),
            ArrowAnchor::TopCenter { offset_y: 100.0 },
        );
        let mut surface = RecordingSurface::new(800.0, 600.0);

        renderer.draw(&mut surface, 0.0).unwrap();

        assert_close(surface.filled_paths()[0][0], (400.0, 50.0));
    }
}
