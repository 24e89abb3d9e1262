use glam::Vec2;

use crate::scene::{Camera2D, Scene};

pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];

/// Two unit quads either side of the origin.
pub fn create_demo_scene(aspect_ratio: f32) -> Scene {
    let camera = Camera2D::new(Vec2::ZERO, aspect_ratio);
    let mut scene = Scene::new(camera);

    scene.add_quad(Vec2::new(-0.5, 0.0), RED);
    scene.add_quad(Vec2::new(0.8, 0.0), CYAN);

    scene
}
