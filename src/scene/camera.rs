use glam::{Mat4, Vec2, Vec3};

use crate::stage::TransformUniforms;

/// Orthographic camera looking down at the quad plane.
///
/// The visible area is `2 * aspect_ratio * zoom_level` wide and
/// `2 * zoom_level` tall, centered on `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    pub position: Vec2,
    pub aspect_ratio: f32,
    pub zoom_level: f32,
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Camera2D {
    pub fn new(position: Vec2, aspect_ratio: f32) -> Self {
        Self {
            position,
            aspect_ratio,
            ..Self::default()
        }
    }

    pub fn projection(&self) -> Mat4 {
        let half_width = self.aspect_ratio * self.zoom_level;
        let half_height = self.zoom_level;
        Mat4::orthographic_rh_gl(
            -half_width,
            half_width,
            -half_height,
            half_height,
            self.near_clip,
            self.far_clip,
        )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0)).inverse()
    }

    pub fn uniforms(&self) -> TransformUniforms {
        TransformUniforms::new(self.view(), self.projection())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.aspect_ratio = width as f32 / height as f32;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() || zoom <= 0.0 {
            log::warn!("Rejecting zoom level {}, keeping {}", zoom, self.zoom_level);
            return;
        }
        self.zoom_level = zoom;
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            aspect_ratio: 1.77,
            zoom_level: 1.0,
            near_clip: -1.0,
            far_clip: 1.0,
        }
    }
}
