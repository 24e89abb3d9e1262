mod shader;
mod uniforms;
mod vertex;

pub use shader::{
    shader_module_descriptor, shader_source, QUAD_SHADER_SOURCE, UNIFORM_BINDING, UNIFORM_GROUP,
    VERTEX_ENTRY_POINT,
};
pub use uniforms::{TransformUniforms, TransformUniformsRaw};
pub use vertex::{QuadVertex, VertexOutput};

use glam::Vec4;
use rayon::prelude::*;

/// Maps one vertex from object space to clip space and forwards its color.
///
/// The position is lifted to `(x, y, 0, 1)` and multiplied as
/// `proj * (view * p)`. Nothing is validated: non-finite inputs or singular
/// matrices come out as non-finite or degenerate positions for the
/// rasterizer to clip or discard.
#[inline]
pub fn transform(vertex: &QuadVertex, uniforms: &TransformUniforms) -> VertexOutput {
    let [x, y] = vertex.position;
    let homogeneous = Vec4::new(x, y, 0.0, 1.0);
    let viewed = uniforms.view * homogeneous;

    VertexOutput {
        clip_position: uniforms.proj * viewed,
        color: vertex.color,
    }
}

/// A per-vertex program. Implementations must be pure: the same vertex and
/// uniforms always give the same output, which lets batches be split across
/// threads in any order.
pub trait VertexStage: Sync {
    type Input: Sync;
    type Uniforms: Sync;
    type Output: Send;

    fn process(&self, vertex: &Self::Input, uniforms: &Self::Uniforms) -> Self::Output;
}

/// The quad pipeline's vertex stage, see [`transform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadTransformStage;

impl VertexStage for QuadTransformStage {
    type Input = QuadVertex;
    type Uniforms = TransformUniforms;
    type Output = VertexOutput;

    fn process(&self, vertex: &QuadVertex, uniforms: &TransformUniforms) -> VertexOutput {
        transform(vertex, uniforms)
    }
}

/// How a batch is spread over the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    Sequential,
    /// Runs on the global rayon pool.
    #[default]
    Parallel,
}

pub fn transform_batch(vertices: &[QuadVertex], uniforms: &TransformUniforms) -> Vec<VertexOutput> {
    run_stage(&QuadTransformStage, Execution::Sequential, vertices, uniforms)
}

/// Data-parallel variant of [`transform_batch`]. Output `i` always belongs to
/// input `i`.
pub fn par_transform_batch(
    vertices: &[QuadVertex],
    uniforms: &TransformUniforms,
) -> Vec<VertexOutput> {
    run_stage(&QuadTransformStage, Execution::Parallel, vertices, uniforms)
}

pub fn run_batch(
    execution: Execution,
    vertices: &[QuadVertex],
    uniforms: &TransformUniforms,
) -> Vec<VertexOutput> {
    run_stage(&QuadTransformStage, execution, vertices, uniforms)
}

/// Runs any [`VertexStage`] over a slice of vertices with shared read-only
/// uniforms.
pub fn run_stage<S: VertexStage>(
    stage: &S,
    execution: Execution,
    vertices: &[S::Input],
    uniforms: &S::Uniforms,
) -> Vec<S::Output> {
    log::trace!("running vertex stage over {} vertices ({:?})", vertices.len(), execution);

    match execution {
        Execution::Sequential => vertices
            .iter()
            .map(|vertex| stage.process(vertex, uniforms))
            .collect(),
        Execution::Parallel => vertices
            .par_iter()
            .map(|vertex| stage.process(vertex, uniforms))
            .collect(),
    }
}
