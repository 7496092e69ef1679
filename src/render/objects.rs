use crate::core::Mesh;
use glam::{Mat4, Vec3};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) emissive: [f32; 4],
    pub(crate) params: [f32; 4],
    pub(crate) eye: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(view_proj: Mat4, model: Mat4, eye: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [1.0; 4],
            emissive: [0.0; 4],
            params: [0.0; 4],
            eye: eye.extend(1.0).to_array(),
        }
    }

    pub(crate) fn with_color(mut self, rgb: [f32; 3], opacity: f32) -> Self {
        self.color = [rgb[0], rgb[1], rgb[2], opacity];
        self
    }

    pub(crate) fn with_emissive(mut self, emissive: [f32; 4]) -> Self {
        self.emissive = emissive;
        self
    }

    pub(crate) fn with_params(mut self, params: [f32; 4]) -> Self {
        self.params = params;
        self
    }
}

/// Vertex/index buffers for one uploaded mesh.
pub(crate) struct MeshBuffers {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: Option<wgpu::Buffer>,
    pub(crate) count: u32,
}

impl MeshBuffers {
    pub(crate) fn triangles(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices: Some(indices),
            count: mesh.indices.len() as u32,
        }
    }

    /// Line list over the mesh's unique edges.
    pub(crate) fn wireframe(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let lines = mesh.edge_vertices();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertices,
            indices: None,
            count: lines.len() as u32,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        match &self.indices {
            Some(ib) => {
                rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.count, 0, 0..1);
            }
            None => rpass.draw(0..self.count, 0..1),
        }
    }
}

/// Per-object uniform buffer and the bind group pointing at it.
pub(crate) struct ObjectSlot {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl ObjectSlot {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::BindGroupLayout,
        texture_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            uniform_buffer,
            bind_group,
        }
    }

    #[inline]
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }
}
