//! Host-side vertex stage for a 2D quad renderer.
//!
//! Vertices carry a 2D object-space position and an RGBA color. The stage
//! lifts each position to `(x, y, 0, 1)`, applies `proj * (view * p)` and
//! forwards the color untouched. [`renderer::QuadRenderer`] batches quads and
//! runs the stage over each batch, sequentially or on the rayon pool.

pub mod demo;
pub mod renderer;
pub mod scene;
pub mod stage;

pub use renderer::{BatchSink, CollectingSink, QuadRenderer, RenderStats, TransformedBatch};
pub use scene::{Camera2D, Quad, Scene};
pub use stage::{
    par_transform_batch, run_batch, transform, transform_batch, Execution, QuadTransformStage,
    QuadVertex, TransformUniforms, VertexOutput, VertexStage,
};
