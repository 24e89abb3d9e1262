pub mod camera;
#[cfg(test)]
mod tests;

pub use camera::Camera2D;

use anyhow::Result;
use glam::Vec2;

use crate::renderer::{BatchSink, QuadRenderer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub center: Vec2,
    pub color: [f32; 4],
}

pub struct Scene {
    pub camera: Camera2D,
    pub quads: Vec<Quad>,
}

impl Scene {
    pub fn new(camera: Camera2D) -> Self {
        Self {
            camera,
            quads: Vec::new(),
        }
    }

    pub fn add_quad(&mut self, center: Vec2, color: [f32; 4]) {
        self.quads.push(Quad { center, color });
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Draws every quad as one frame: binds the camera, submits all quads and
    /// flushes whatever is left.
    pub fn render(&self, renderer: &mut QuadRenderer, sink: &mut dyn BatchSink) -> Result<()> {
        renderer.begin(self.camera.uniforms());
        for quad in &self.quads {
            renderer.draw_quad(sink, quad.center, quad.color)?;
        }
        renderer.end(sink)
    }
}
