use crate::core::{PointSetKey, PointSurface, ViewerError, POINTS_WGSL};
use glam::Mat4;
use smallvec::SmallVec;
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointUniforms {
    matrix: [[f32; 4]; 4],
    color: [f32; 4],
}

const FLOAT_BYTES: u64 = std::mem::size_of::<f32>() as u64;

// One vertex buffer and uniform block per point set, reused across frames.
struct SetSlot {
    vertex_buffer: Option<wgpu::Buffer>,
    capacity_bytes: u64,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

#[derive(Clone, Copy)]
struct PendingDraw {
    slot: usize,
    vertex_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    slots: [SetSlot; 4],
    pending: SmallVec<[PendingDraw; 4]>,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("points_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: 3 * FLOAT_BYTES,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_points"),
                buffers: &[vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_points"),
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

        let slots = PointSetKey::ALL.map(|key| {
            let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(key.as_str()),
                contents: bytemuck::bytes_of(&PointUniforms {
                    matrix: Mat4::IDENTITY.to_cols_array_2d(),
                    color: [0.0; 4],
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(key.as_str()),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            SetSlot {
                vertex_buffer: None,
                capacity_bytes: 0,
                uniform_buffer,
                bind_group,
            }
        });

        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            slots,
            pending: SmallVec::new(),
            clear_color: wgpu::Color::BLACK,
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
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    // Grow-only: a slot's buffer is replaced when the new data does not fit.
    fn upload_points(&mut self, slot: usize, points: &[f32]) {
        let bytes: &[u8] = bytemuck::cast_slice(points);
        let needed = bytes.len() as u64;
        let s = &mut self.slots[slot];
        if s.vertex_buffer.is_none() || s.capacity_bytes < needed {
            let capacity = needed.next_power_of_two().max(256);
            s.vertex_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("points_vb"),
                size: capacity,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            s.capacity_bytes = capacity;
        }
        if let Some(vb) = &s.vertex_buffer {
            self.queue.write_buffer(vb, 0, bytes);
        }
    }
}

impl<'a> PointSurface for GpuState<'a> {
    fn begin_frame(&mut self, clear_color: [f32; 4]) {
        self.pending.clear();
        self.clear_color = wgpu::Color {
            r: clear_color[0] as f64,
            g: clear_color[1] as f64,
            b: clear_color[2] as f64,
            a: clear_color[3] as f64,
        };
    }

    fn draw_points(&mut self, key: PointSetKey, color: [f32; 4], matrix: &Mat4, points: &[f32]) {
        let vertex_count = (points.len() / 3) as u32;
        if vertex_count == 0 {
            return;
        }
        let slot = key.index();
        let uniforms = PointUniforms {
            matrix: matrix.to_cols_array_2d(),
            color,
        };
        self.queue
            .write_buffer(&self.slots[slot].uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.upload_points(slot, &points[..vertex_count as usize * 3]);
        self.pending.push(PendingDraw { slot, vertex_count });
    }

    fn end_frame(&mut self) -> Result<(), ViewerError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(ViewerError::Surface(e.to_string()));
            }
            Err(e) => return Err(ViewerError::Surface(e.to_string())),
        };
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
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            for d in &self.pending {
                let s = &self.slots[d.slot];
                let Some(vb) = &s.vertex_buffer else {
                    continue;
                };
                rpass.set_bind_group(0, &s.bind_group, &[]);
                rpass.set_vertex_buffer(0, vb.slice(..d.vertex_count as u64 * 3 * FLOAT_BYTES));
                rpass.draw(0..d.vertex_count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        self.pending.clear();
        Ok(())
    }
}
