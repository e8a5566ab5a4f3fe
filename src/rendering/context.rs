use crate::{traits::RenderSurface, CompassError, Result};
use nalgebra::{Matrix3, Point2, Vector2};

/// Commands that can be issued to a recording surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Save,
    Restore,
    Translate {
        x: f64,
        y: f64,
    },
    Rotate {
        radians: f64,
    },
    SetFillStyle(String),
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    ClosePath,
    /// Filled path, already mapped to device coordinates
    Fill {
        color: String,
        points: Vec<(f64, f64)>,
    },
}

#[derive(Debug, Clone)]
struct SurfaceState {
    transform: Matrix3<f64>,
    fill_style: String,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: Matrix3::identity(),
            fill_style: "#000000".to_string(),
        }
    }
}

/// In-memory surface that keeps every command it receives
///
/// Tracks the transform stack the same way a 2D canvas does, so paths can be
/// inspected in device coordinates. Used by the headless demo and in tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    /// Drawing primitives queue, in issue order
    pub drawing_queue: Vec<DrawCommand>,
    state: SurfaceState,
    saved: Vec<SurfaceState>,
    path: Vec<Point2<f64>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            drawing_queue: Vec::new(),
            state: SurfaceState::default(),
            saved: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Drop recorded commands, keeping the current transform state
    pub fn clear_commands(&mut self) {
        self.drawing_queue.clear();
    }

    /// Current transform as a homogeneous 3x3 matrix
    pub fn transform(&self) -> Matrix3<f64> {
        self.state.transform
    }

    /// Number of `save` calls not yet matched by `restore`
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Filled paths still visible, in device coordinates
    ///
    /// A clear covering the whole surface drops everything recorded before it,
    /// so after a compass frame this holds that frame's arrow only.
    pub fn filled_paths(&self) -> Vec<&[(f64, f64)]> {
        self.drawing_queue
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Fill { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Resize the surface, e.g. after the viewport changes
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Whether a clear of this rectangle erases every pixel
    fn covers_surface(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.state.transform == Matrix3::identity()
            && x <= 0.0
            && y <= 0.0
            && x + width >= self.width
            && y + height >= self.height
    }

    fn map_point(&self, x: f64, y: f64) -> Point2<f64> {
        let mapped = self.state.transform * Point2::new(x, y).to_homogeneous();
        Point2::new(mapped.x, mapped.y)
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.covers_surface(x, y, width, height) {
            self.drawing_queue.clear();
        }
        self.drawing_queue.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
        self.drawing_queue.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, as on a canvas
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::warn!("restore() without matching save()"),
        }
        self.drawing_queue.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(CompassError::Render(format!(
                "non-finite translation ({x}, {y})"
            )));
        }
        self.state.transform *= Matrix3::new_translation(&Vector2::new(x, y));
        self.drawing_queue.push(DrawCommand::Translate { x, y });
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<()> {
        if !radians.is_finite() {
            return Err(CompassError::Render(format!("non-finite rotation {radians}")));
        }
        self.state.transform *= Matrix3::new_rotation(radians);
        self.drawing_queue.push(DrawCommand::Rotate { radians });
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill_style = color.to_string();
        self.drawing_queue
            .push(DrawCommand::SetFillStyle(color.to_string()));
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.drawing_queue.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let point = self.map_point(x, y);
        self.path.push(point);
        self.drawing_queue.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let point = self.map_point(x, y);
        self.path.push(point);
        self.drawing_queue.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.drawing_queue.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        let points = self.path.iter().map(|p| (p.x, p.y)).collect();
        self.drawing_queue.push(DrawCommand::Fill {
            color: self.state.fill_style.clone(),
            points,
        });
    }
}
