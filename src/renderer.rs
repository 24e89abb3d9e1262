use anyhow::Result;
use glam::Vec2;

use crate::stage::{run_batch, Execution, QuadVertex, TransformUniforms, VertexOutput};

pub const QUAD_MAX_BATCHES: usize = 20_000;
pub const QUAD_MAX_VERTICES: usize = 4 * QUAD_MAX_BATCHES;
pub const QUAD_MAX_INDICES: usize = 6 * QUAD_MAX_BATCHES;

/// One flushed batch, ready for rasterization.
#[derive(Debug, Clone, Copy)]
pub struct TransformedBatch<'a> {
    pub vertices: &'a [VertexOutput],
    pub indices: &'a [u32],
}

/// Downstream consumer of transformed batches (rasterizer, compositor, test
/// harness).
pub trait BatchSink {
    fn submit(&mut self, batch: TransformedBatch<'_>) -> Result<()>;
}

/// Sink that keeps owned copies of everything submitted to it.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub batches: Vec<(Vec<VertexOutput>, Vec<u32>)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &VertexOutput> {
        self.batches.iter().flat_map(|(vertices, _)| vertices.iter())
    }
}

impl BatchSink for CollectingSink {
    fn submit(&mut self, batch: TransformedBatch<'_>) -> Result<()> {
        self.batches
            .push((batch.vertices.to_vec(), batch.indices.to_vec()));
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub batches: u64,
    pub quads: u64,
    pub vertices: u64,
}

/// Two triangles per quad: `o, o+1, o+2` and `o+2, o+3, o` for vertex offset `o`.
pub fn quad_indices(quad_count: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(6 * quad_count);
    for quad in 0..quad_count {
        let offset = (4 * quad) as u32;
        indices.extend_from_slice(&[
            offset,
            offset + 1,
            offset + 2,
            offset + 2,
            offset + 3,
            offset,
        ]);
    }
    indices
}

/// Corners of a unit quad centered on `center`, wound to match [`quad_indices`].
pub fn quad_corners(center: Vec2, color: [f32; 4]) -> [QuadVertex; 4] {
    [
        Vec2::new(-0.5, -0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.5, -0.5),
    ]
    .map(|corner| QuadVertex::new((corner + center).to_array(), color))
}

/// Accumulates quads and pushes them through the vertex stage in batches.
///
/// Uniforms only change in [`begin`](Self::begin), never while a batch is
/// being transformed.
pub struct QuadRenderer {
    execution: Execution,
    uniforms: TransformUniforms,
    vertices: Vec<QuadVertex>,
    indices: Vec<u32>,
    quad_count: usize,
    stats: RenderStats,
}

impl QuadRenderer {
    pub fn new(execution: Execution) -> Self {
        Self {
            execution,
            uniforms: TransformUniforms::default(),
            vertices: Vec::with_capacity(QUAD_MAX_VERTICES),
            indices: quad_indices(QUAD_MAX_BATCHES),
            quad_count: 0,
            stats: RenderStats::default(),
        }
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    pub fn uniforms(&self) -> &TransformUniforms {
        &self.uniforms
    }

    pub fn pending_quads(&self) -> usize {
        self.quad_count
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn begin(&mut self, uniforms: TransformUniforms) {
        self.uniforms = uniforms;
        self.vertices.clear();
        self.quad_count = 0;
    }

    pub fn draw_quad(
        &mut self,
        sink: &mut dyn BatchSink,
        center: Vec2,
        color: [f32; 4],
    ) -> Result<()> {
        if 6 * (self.quad_count + 1) > QUAD_MAX_INDICES {
            self.end(sink)?;
            self.begin(self.uniforms);
        }

        self.vertices.extend_from_slice(&quad_corners(center, color));
        self.quad_count += 1;
        Ok(())
    }

    /// Transforms pending quads and hands them to `sink`. Pending quads are
    /// kept if the sink fails, so the flush can be retried.
    pub fn end(&mut self, sink: &mut dyn BatchSink) -> Result<()> {
        if self.quad_count == 0 {
            return Ok(());
        }

        let transformed = run_batch(self.execution, &self.vertices, &self.uniforms);
        let index_count = 6 * self.quad_count;

        log::debug!(
            "Flushing batch: {} quads, {} vertices, {} indices",
            self.quad_count,
            transformed.len(),
            index_count
        );

        sink.submit(TransformedBatch {
            vertices: &transformed,
            indices: &self.indices[..index_count],
        })?;

        self.stats.batches += 1;
        self.stats.quads += self.quad_count as u64;
        self.stats.vertices += transformed.len() as u64;

        self.vertices.clear();
        self.quad_count = 0;
        Ok(())
    }
}

impl Default for QuadRenderer {
    fn default() -> Self {
        Self::new(Execution::default())
    }
}
