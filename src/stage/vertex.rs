use glam::Vec4;

/// Per-vertex input of the quad pipeline.
///
/// `position` is in object space. `color` is conventionally in [0, 1] but is
/// never clamped.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl QuadVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,  // position
        1 => Float32x4,  // color
    ];

    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// What the stage hands to the rasterizer: a clip-space position (before
/// perspective division) and the color to interpolate across the primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_vertex_size() {
        assert_eq!(
            std::mem::size_of::<QuadVertex>(),
            24, // 2 * 4 (position) + 4 * 4 (color)
            "QuadVertex size should be 24 bytes"
        );
    }

    #[test]
    fn test_vertex_buffer_layout() {
        let layout = QuadVertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 2);

        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);

        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x4);
    }

    #[test]
    fn test_vertex_casts_to_bytes() {
        let vertices = [
            QuadVertex::new([1.0, 2.0], [0.1, 0.2, 0.3, 0.4]),
            QuadVertex::new([3.0, 4.0], [0.5, 0.6, 0.7, 0.8]),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 48);

        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[6], 3.0);
        assert_eq!(floats[11], 0.8);
    }
}
