use super::*;
use crate::demo::create_demo_scene;
use crate::renderer::{CollectingSink, RenderStats};
use crate::stage::Execution;
use approx::assert_relative_eq;

#[test]
fn test_scene_new() {
    let scene = Scene::new(Camera2D::default());
    assert!(scene.quads.is_empty());
    assert_eq!(scene.camera, Camera2D::default());
}

#[test]
fn test_scene_add_quad() {
    let mut scene = Scene::new(Camera2D::default());
    scene.add_quad(Vec2::new(0.25, -0.75), [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(scene.quads.len(), 1);
    assert_eq!(scene.quads[0].center, Vec2::new(0.25, -0.75));
}

#[test]
fn test_scene_resize() {
    let mut scene = Scene::new(Camera2D::default());
    let original_aspect = scene.camera.aspect_ratio;

    scene.resize(800, 800);
    assert!((scene.camera.aspect_ratio - 1.0).abs() < f32::EPSILON);
    assert!((scene.camera.aspect_ratio - original_aspect).abs() > f32::EPSILON);
}

#[test]
fn test_empty_scene_renders_nothing() {
    let scene = Scene::new(Camera2D::default());
    let mut renderer = QuadRenderer::new(Execution::Sequential);
    let mut sink = CollectingSink::new();

    scene.render(&mut renderer, &mut sink).unwrap();
    assert!(sink.batches.is_empty());
    assert_eq!(renderer.stats(), RenderStats::default());
}

#[test_log::test]
fn test_demo_scene_render() {
    let scene = create_demo_scene(1.0);
    let mut renderer = QuadRenderer::new(Execution::Parallel);
    let mut sink = CollectingSink::new();

    scene.render(&mut renderer, &mut sink).unwrap();

    assert_eq!(sink.batches.len(), 1);
    let (vertices, indices) = &sink.batches[0];
    assert_eq!(vertices.len(), 8);
    assert_eq!(indices.len(), 12);

    // Red quad centered at (-0.5, 0) seen through a unit-aspect ortho camera.
    let red = &vertices[0];
    assert_eq!(red.color, [1.0, 0.0, 0.0, 1.0]);
    assert_relative_eq!(red.clip_position.x, -1.0, epsilon = 0.001);
    assert_relative_eq!(red.clip_position.y, -0.5, epsilon = 0.001);
    assert_relative_eq!(red.clip_position.z, 0.0, epsilon = 0.001);
    assert_relative_eq!(red.clip_position.w, 1.0, epsilon = 0.001);

    let cyan = &vertices[6];
    assert_eq!(cyan.color, [0.0, 1.0, 1.0, 1.0]);
    assert_relative_eq!(cyan.clip_position.x, 1.3, epsilon = 0.001);
    assert_relative_eq!(cyan.clip_position.y, 0.5, epsilon = 0.001);
}

#[test]
fn test_camera_pan_shifts_rendered_quads() {
    let mut scene = Scene::new(Camera2D::new(Vec2::ZERO, 1.0));
    scene.add_quad(Vec2::new(1.0, 0.0), [1.0, 0.0, 0.0, 1.0]);
    scene.camera.pan(Vec2::new(1.0, 0.0));

    let mut renderer = QuadRenderer::new(Execution::Sequential);
    let mut sink = CollectingSink::new();
    scene.render(&mut renderer, &mut sink).unwrap();

    // The quad now sits at the center of the view.
    let xs: Vec<f32> = sink.vertices().map(|v| v.clip_position.x).collect();
    assert_relative_eq!(xs[0], -0.5, epsilon = 0.001);
    assert_relative_eq!(xs[2], 0.5, epsilon = 0.001);
}
