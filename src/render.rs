use crate::constants::{
    CORE_COLOR, CORE_EMISSIVE, CORE_METALNESS, CORE_ROUGHNESS, CYAN, VIOLET, WHITE,
};
use crate::core::{
    cloud_texture, Camera, Mesh, OrbPose, Visuals, AURA_P, AURA_RADIUS, CAGE_DETAIL, CAGE_RADIUS,
    CLOUD_TEXTURE_SIZE, CORE_DETAIL, CORE_RADIUS, GAS_OUTER_RADIUS, GAS_RADIUS, SPHERE_SEGMENTS,
};
use web_sys as web;

mod helpers;
mod objects;

use helpers::PipelineSpec;
use objects::{MeshBuffers, ObjectSlot, ObjectUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    core_pipeline: wgpu::RenderPipeline,
    cage_pipeline: wgpu::RenderPipeline,
    gas_pipeline: wgpu::RenderPipeline,
    gas_outer_pipeline: wgpu::RenderPipeline,
    aura_pipeline: wgpu::RenderPipeline,

    core_mesh: MeshBuffers,
    cage_mesh: MeshBuffers,
    gas_mesh: MeshBuffers,
    gas_outer_mesh: MeshBuffers,
    aura_mesh: MeshBuffers,

    core_slot: ObjectSlot,
    cage_slot: ObjectSlot,
    gas_slot: ObjectSlot,
    gas_outer_slot: ObjectSlot,
    aura_slot: ObjectSlot,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, seed: u64) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter {} ({:?})", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas so the page shows through around the orb.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orb_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::ORB_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("object_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let pipeline = |spec: PipelineSpec<'_>| {
            helpers::make_object_pipeline(&device, &pl, &shader, format, spec)
        };
        let core_pipeline = pipeline(PipelineSpec {
            label: "core_pipeline",
            vs_entry: "vs_main",
            fs_entry: "fs_core",
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            depth_write: true,
            additive: false,
        });
        let cage_pipeline = pipeline(PipelineSpec {
            label: "cage_pipeline",
            vs_entry: "vs_main",
            fs_entry: "fs_line",
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            depth_write: true,
            additive: false,
        });
        let gas_pipeline = pipeline(PipelineSpec {
            label: "gas_pipeline",
            vs_entry: "vs_main",
            fs_entry: "fs_gas",
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            depth_write: false,
            additive: true,
        });
        let gas_outer_pipeline = pipeline(PipelineSpec {
            label: "gas_outer_pipeline",
            vs_entry: "vs_main",
            fs_entry: "fs_gas",
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            depth_write: false,
            additive: true,
        });
        let aura_pipeline = pipeline(PipelineSpec {
            label: "aura_pipeline",
            vs_entry: "vs_aura",
            fs_entry: "fs_aura",
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Front),
            depth_write: false,
            additive: true,
        });

        let core_geo = Mesh::icosahedron(CORE_RADIUS, CORE_DETAIL);
        let cage_geo = Mesh::icosahedron(CAGE_RADIUS, CAGE_DETAIL);
        let core_mesh = MeshBuffers::triangles(&device, "core_mesh", &core_geo);
        let cage_mesh = MeshBuffers::wireframe(&device, "cage_mesh", &cage_geo);
        let gas_mesh = MeshBuffers::triangles(
            &device,
            "gas_mesh",
            &Mesh::uv_sphere(GAS_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        );
        let gas_outer_mesh = MeshBuffers::triangles(
            &device,
            "gas_outer_mesh",
            &Mesh::uv_sphere(GAS_OUTER_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        );
        let aura_mesh = MeshBuffers::triangles(
            &device,
            "aura_mesh",
            &Mesh::uv_sphere(AURA_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        );

        let cloud = cloud_texture(CLOUD_TEXTURE_SIZE, seed);
        let (_, cloud_view) =
            helpers::create_rgba_texture(&device, &queue, "cloud_tex", CLOUD_TEXTURE_SIZE, &cloud);
        // Speckles stay crisp: nearest filtering, clamped edges.
        let cloud_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("cloud_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let slot = |label: &str| ObjectSlot::new(&device, label, &bgl, &cloud_view, &cloud_sampler);
        let core_slot = slot("core_slot");
        let cage_slot = slot("cage_slot");
        let gas_slot = slot("gas_slot");
        let gas_outer_slot = slot("gas_outer_slot");
        let aura_slot = slot("aura_slot");

        log::info!(
            "[gpu] ready {}x{} format={:?} core_tris={} cage_edges={}",
            width,
            height,
            format,
            core_geo.triangle_count(),
            cage_mesh.count / 2
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            core_pipeline,
            cage_pipeline,
            gas_pipeline,
            gas_outer_pipeline,
            aura_pipeline,
            core_mesh,
            cage_mesh,
            gas_mesh,
            gas_outer_mesh,
            aura_mesh,
            core_slot,
            cage_slot,
            gas_slot,
            gas_outer_slot,
            aura_slot,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            log::debug!("[gpu] resize {}x{}", width, height);
            self.reconfigure();
        }
    }

    /// Re-apply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        let (_, depth_view) = helpers::create_depth_texture(&self.device, self.width, self.height);
        self.depth_view = depth_view;
    }

    pub fn render(
        &mut self,
        visuals: &Visuals,
        pose: &OrbPose,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = camera.view_projection();
        let eye = camera.eye;
        let group = pose.group_matrix();
        let core = pose.core_matrix();

        self.core_slot.write(
            &self.queue,
            &ObjectUniforms::new(view_proj, core, eye)
                .with_color(CORE_COLOR, 1.0)
                .with_emissive(CORE_EMISSIVE)
                .with_params([0.0, 0.0, CORE_METALNESS, CORE_ROUGHNESS]),
        );
        self.cage_slot.write(
            &self.queue,
            &ObjectUniforms::new(view_proj, core, eye).with_color(CYAN, 1.0),
        );
        if visuals.shells_visible {
            self.gas_slot.write(
                &self.queue,
                &ObjectUniforms::new(view_proj, group, eye).with_color(WHITE, visuals.gas_opacity),
            );
            self.gas_outer_slot.write(
                &self.queue,
                &ObjectUniforms::new(view_proj, group, eye)
                    .with_color(VIOLET, visuals.gas_outer_opacity),
            );
            self.aura_slot.write(
                &self.queue,
                &ObjectUniforms::new(view_proj, group, eye)
                    .with_color(CYAN, 1.0)
                    .with_params([visuals.aura_c, AURA_P, 0.0, 0.0]),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque first, then the additive shells.
            rpass.set_pipeline(&self.core_pipeline);
            rpass.set_bind_group(0, &self.core_slot.bind_group, &[]);
            self.core_mesh.draw(&mut rpass);

            rpass.set_pipeline(&self.cage_pipeline);
            rpass.set_bind_group(0, &self.cage_slot.bind_group, &[]);
            self.cage_mesh.draw(&mut rpass);

            if visuals.shells_visible {
                rpass.set_pipeline(&self.gas_pipeline);
                rpass.set_bind_group(0, &self.gas_slot.bind_group, &[]);
                self.gas_mesh.draw(&mut rpass);

                rpass.set_pipeline(&self.gas_outer_pipeline);
                rpass.set_bind_group(0, &self.gas_outer_slot.bind_group, &[]);
                self.gas_outer_mesh.draw(&mut rpass);

                rpass.set_pipeline(&self.aura_pipeline);
                rpass.set_bind_group(0, &self.aura_slot.bind_group, &[]);
                self.aura_mesh.draw(&mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
