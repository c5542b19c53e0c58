//! WebGPU state for the deformable metal blob: scene pass into an
//! offscreen HDR target, then a shimmer composite to the swapchain.

use crate::constants::*;
use crate::hover::HoverState;
use crate::mesh::{self, Camera};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");
static SHIMMER_WGSL: &str = include_str!("../shaders/shimmer.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BlobUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    eye_time: [f32; 4],
    mouse: [f32; 2],
    last_mouse: [f32; 2],
    params0: [f32; 4],
    params1: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ShimmerUniforms {
    resolution: [f32; 2],
    time: f32,
    amount: f32,
    speed: f32,
    dark_mode: f32,
    _pad: [f32; 2],
}

pub struct BlobState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    blob_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    blob_uniforms: wgpu::Buffer,
    blob_bind_group: wgpu::BindGroup,

    hdr_view: wgpu::TextureView,
    linear_sampler: wgpu::Sampler,
    shimmer_pipeline: wgpu::RenderPipeline,
    shimmer_uniforms: wgpu::Buffer,
    shimmer_bgl: wgpu::BindGroupLayout,
    shimmer_bind_group: wgpu::BindGroup,

    width: u32,
    height: u32,
    camera: Camera,
    model: Mat4,
    time_accum: f32,
}

const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

impl<'a> BlobState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Mesh buffers
        let blob = mesh::icosphere(BLOB_RADIUS, BLOB_SUBDIVISIONS);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blob_vertices"),
            contents: bytemuck::cast_slice(&blob.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blob_indices"),
            contents: bytemuck::cast_slice(&blob.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = blob.indices.len() as u32;
        log::info!(
            "[blob] mesh: {} vertices, {} triangles",
            blob.vertices.len(),
            index_count / 3
        );

        // Blob scene pipeline
        let blob_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blob_shader"),
            source: wgpu::ShaderSource::Wgsl(BLOB_WGSL.into()),
        });
        let blob_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("blob_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let blob_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blob_pl"),
            bind_group_layouts: &[&blob_bgl],
            push_constant_ranges: &[],
        });
        let blob_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("blob_pipeline"),
            layout: Some(&blob_pl),
            vertex: wgpu::VertexState {
                module: &blob_shader,
                entry_point: Some("vs_blob"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<mesh::BlobVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &blob_shader,
                entry_point: Some("fs_blob"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let blob_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("blob_uniforms"),
            size: std::mem::size_of::<BlobUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let blob_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("blob_bg"),
            layout: &blob_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: blob_uniforms.as_entire_binding(),
            }],
        });

        // Offscreen HDR target and shimmer composite
        let hdr_view = create_hdr_view(&device, width, height);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let shimmer_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shimmer_shader"),
            source: wgpu::ShaderSource::Wgsl(SHIMMER_WGSL.into()),
        });
        let shimmer_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shimmer_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let shimmer_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shimmer_pl"),
            bind_group_layouts: &[&shimmer_bgl],
            push_constant_ranges: &[],
        });
        let shimmer_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shimmer_pipeline"),
            layout: Some(&shimmer_pl),
            vertex: wgpu::VertexState {
                module: &shimmer_shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shimmer_shader,
                entry_point: Some("fs_shimmer"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let shimmer_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shimmer_uniforms"),
            size: std::mem::size_of::<ShimmerUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let shimmer_bind_group = create_shimmer_bind_group(
            &device,
            &shimmer_bgl,
            &hdr_view,
            &linear_sampler,
            &shimmer_uniforms,
        );

        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, BLOB_CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: BLOB_FOV_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        };
        let model = Mat4::from_rotation_z(BLOB_TILT_Z) * Mat4::from_rotation_x(BLOB_TILT_X);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            blob_pipeline,
            vertex_buffer,
            index_buffer,
            index_count,
            blob_uniforms,
            blob_bind_group,
            hdr_view,
            linear_sampler,
            shimmer_pipeline,
            shimmer_uniforms,
            shimmer_bgl,
            shimmer_bind_group,
            width,
            height,
            camera,
            model,
            // Random start offset desynchronizes multiple mounts
            time_accum: rand::random::<f32>() * 100.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.aspect = width as f32 / height as f32;

            self.hdr_view = create_hdr_view(&self.device, width, height);
            self.shimmer_bind_group = create_shimmer_bind_group(
                &self.device,
                &self.shimmer_bgl,
                &self.hdr_view,
                &self.linear_sampler,
                &self.shimmer_uniforms,
            );
        }
    }

    /// Render one frame from the current hover/pointer state.
    pub fn render(
        &mut self,
        dt_sec: f32,
        hover: &HoverState,
        dark_mode: bool,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);

        let dark = if dark_mode { 1.0 } else { 0.0 };
        let u = BlobUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            model: self.model.to_cols_array_2d(),
            eye_time: [
                self.camera.eye.x,
                self.camera.eye.y,
                self.camera.eye.z,
                self.time_accum,
            ],
            mouse: hover.mouse,
            last_mouse: hover.last_active,
            params0: [
                dark,
                BLOB_NOISE_STRENGTH,
                BLOB_FLOW_SPEED,
                if hover.touch_active { 1.0 } else { 0.0 },
            ],
            params1: [hover.intensity, BLOB_GLOW_INTENSITY, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.blob_uniforms, 0, bytemuck::bytes_of(&u));

        let s = ShimmerUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: self.time_accum,
            amount: SHIMMER_AMOUNT,
            speed: SHIMMER_SPEED,
            dark_mode: dark,
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.shimmer_uniforms, 0, bytemuck::bytes_of(&s));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("blob_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("blob_scene"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.blob_pipeline);
            rpass.set_bind_group(0, &self.blob_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shimmer_composite"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.shimmer_pipeline);
            rpass.set_bind_group(0, &self.shimmer_bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_hdr_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("blob_hdr"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: HDR_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_shimmer_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    hdr_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("shimmer_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(hdr_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniforms.as_entire_binding(),
            },
        ],
    })
}
