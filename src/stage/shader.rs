use std::borrow::Cow;

/// WGSL rendition of [`transform`](super::transform) for drivers that run the
/// stage on the GPU. Reads `TransformUniformsRaw` at group 0, binding 0.
pub const QUAD_SHADER_SOURCE: &str = include_str!("../shaders/quad.wgsl");

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const UNIFORM_GROUP: u32 = 0;
pub const UNIFORM_BINDING: u32 = 0;

pub fn shader_source() -> wgpu::ShaderSource<'static> {
    wgpu::ShaderSource::Wgsl(Cow::Borrowed(QUAD_SHADER_SOURCE))
}

pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("Quad Vertex Shader"),
        source: shader_source(),
    }
}
