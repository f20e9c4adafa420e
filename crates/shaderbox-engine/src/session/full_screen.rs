use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::device::{Gpu, GpuInit, SetupError, SurfaceErrorAction};
use crate::payload::{uniform_capacity_for, UniformPayload};
use crate::player::{Drawn, Renderer};
use crate::template::{FRAGMENT_ENTRY, VERTEX_ENTRY};

use super::shader::check_uniform_block;
use super::{validate_program, DrawError};

/// Uniform buffer capacity used when a scene does not declare its own.
pub const DEFAULT_UNIFORM_CAPACITY: u64 = 128;

/// Per-session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Largest payload in bytes the scene will write; rounded up to 16.
    pub uniform_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            uniform_capacity: DEFAULT_UNIFORM_CAPACITY,
        }
    }
}

impl SessionConfig {
    pub fn with_uniform_capacity(bytes: u64) -> Self {
        Self {
            uniform_capacity: bytes,
        }
    }
}

/// A compiled full-screen program bound to one window.
///
/// Owns the GPU context, the render pipeline, the uniform buffer and the bind
/// group that references it. Not shareable across windows.
pub struct Session<'w> {
    gpu: Gpu<'w>,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: u64,
}

impl<'w> Session<'w> {
    /// Validates `program`, acquires the GPU for `window` and builds the pipeline.
    ///
    /// No partial session is returned on failure.
    pub async fn new(
        window: &'w Window,
        program: &str,
        gpu_init: GpuInit,
        config: SessionConfig,
    ) -> Result<Self, SetupError> {
        let info = validate_program(program)?;
        let capacity = uniform_capacity_for(config.uniform_capacity);

        let required = check_uniform_block(&info, capacity)?;

        let gpu = Gpu::new(window, gpu_init).await?;
        let device = gpu.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shaderbox program"),
            source: wgpu::ShaderSource::Wgsl(program.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shaderbox pipeline"),
            // Derived from the shader's declared bindings.
            layout: None,

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shaderbox uniforms"),
            size: capacity,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shaderbox bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::info!("session ready: {capacity}-byte uniform buffer, uniform block {required} bytes");

        Ok(Self {
            gpu,
            pipeline,
            uniform_buffer,
            bind_group,
            capacity,
        })
    }

    /// Reconfigures the surface; the pipeline and buffers are kept.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Writes `payload` at offset 0, clears to transparent black and draws the quad.
    ///
    /// Oversized payloads are rejected before anything is written. A zero-size
    /// window or a transient surface error skips the frame.
    pub fn draw(&mut self, payload: &UniformPayload) -> Result<Drawn, DrawError> {
        check_payload(payload.byte_len(), self.capacity)?;

        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return Ok(Drawn::Skipped);
        }

        if !payload.is_empty() {
            self.gpu
                .queue()
                .write_buffer(&self.uniform_buffer, 0, payload.as_bytes());
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(DrawError::SurfaceLost),
                    action => {
                        log::debug!("frame skipped: {action:?}");
                        Ok(Drawn::Skipped)
                    }
                };
            }
        };

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shaderbox pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..4, 0..1);
        }

        self.gpu.present(frame);
        Ok(Drawn::Presented)
    }
}

impl Renderer for Session<'_> {
    fn draw(&mut self, payload: &UniformPayload) -> Result<Drawn, DrawError> {
        Session::draw(self, payload)
    }
}

fn check_payload(len: u64, capacity: u64) -> Result<(), DrawError> {
    if len > capacity {
        return Err(DrawError::PayloadTooLarge { len, capacity });
    }
    Ok(())
}
