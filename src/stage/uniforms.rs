use glam::Mat4;

/// View and projection matrices bound for one draw batch.
///
/// The stage only ever reads these. Rebinding happens between batches in
/// [`QuadRenderer::begin`](crate::renderer::QuadRenderer::begin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformUniforms {
    pub view: Mat4,
    pub proj: Mat4,
}

impl TransformUniforms {
    pub const IDENTITY: Self = Self {
        view: Mat4::IDENTITY,
        proj: Mat4::IDENTITY,
    };

    pub fn new(view: Mat4, proj: Mat4) -> Self {
        Self { view, proj }
    }

    pub fn to_raw(&self) -> TransformUniformsRaw {
        TransformUniformsRaw::new(self)
    }
}

impl Default for TransformUniforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Uniform buffer layout matching `TransformUniforms` in `quad.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniformsRaw {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

impl TransformUniformsRaw {
    fn new(uniforms: &TransformUniforms) -> Self {
        Self {
            view: uniforms.view.to_cols_array_2d(),
            proj: uniforms.proj.to_cols_array_2d(),
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    pub fn proj(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.proj)
    }
}
