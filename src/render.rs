use crate::constants::{MAX_FRAME_LATENCY, MSAA_SAMPLES};
use crate::dom;
use crate::sizing::backing_size;
use fnv::FnvHashMap;
use glam::Vec3;
use scene_core::{
    BasicMaterial, NodeId, NodeKind, PerspectiveCamera, Renderer, Scene, SceneError, Transform,
};
use web_sys as web;

mod helpers;
mod pipeline;
mod targets;

use pipeline::{create_line_pipeline, GlobalUniforms, LinePipeline, NodeUniforms};
use targets::MsaaTarget;

// GPU buffers for one drawable node, built on first sight and kept until the
// node leaves the scene.
struct Drawable {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct WgpuRenderer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    lines: LinePipeline,
    msaa: MsaaTarget,
    drawables: FnvHashMap<NodeId, Drawable>,
    pixel_ratio: f64,
}

impl WgpuRenderer {
    pub async fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Canvases usually only offer non-sRGB formats; draw through an sRGB view.
        let view_format = format.add_srgb_suffix();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: MAX_FRAME_LATENCY,
        };
        surface.configure(&device, &config);

        let lines = create_line_pipeline(&device, view_format, MSAA_SAMPLES);
        let msaa = MsaaTarget::new(&device, width, height, view_format, MSAA_SAMPLES);
        log::info!(
            "[gpu] surface {:?} (view {:?}), {}x{}, msaa x{}",
            format,
            view_format,
            width,
            height,
            MSAA_SAMPLES
        );

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            view_format,
            lines,
            msaa,
            drawables: FnvHashMap::default(),
            pixel_ratio: dom::device_pixel_ratio(),
        })
    }

    fn sync_drawables(&mut self, scene: &Scene) {
        self.drawables.retain(|id, _| scene.contains(*id));
        for (id, node) in scene.iter() {
            if self.drawables.contains_key(&id) {
                continue;
            }
            let built = match &node.kind {
                NodeKind::Mesh(mesh) => {
                    let positions: Vec<[f32; 3]> =
                        mesh.geometry.positions.iter().map(Vec3::to_array).collect();
                    let indices = mesh.geometry.wireframe_indices();
                    Some(self.build_drawable(&node.name, &positions, Some(&indices)))
                }
                NodeKind::LineSegments(line) => {
                    let positions: Vec<[f32; 3]> =
                        line.geometry.positions.iter().map(Vec3::to_array).collect();
                    Some(self.build_drawable(&node.name, &positions, None))
                }
                NodeKind::PointLight(_) | NodeKind::AmbientLight(_) => None,
            };
            if let Some(d) = built {
                self.drawables.insert(id, d);
            }
        }
    }

    fn build_drawable(&self, name: &str, positions: &[[f32; 3]], indices: Option<&[u16]>) -> Drawable {
        let vertex_buffer =
            helpers::create_vertex_buffer(&self.device, name, bytemuck::cast_slice(positions));
        let index_buffer = indices.map(|i| helpers::create_index_buffer(&self.device, name, i));
        let count = indices.map_or(positions.len(), <[u16]>::len) as u32;
        let uniform_buffer = helpers::create_uniform_buffer(
            &self.device,
            name,
            std::mem::size_of::<NodeUniforms>() as u64,
        );
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(name),
            layout: &self.lines.node_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        log::debug!("[gpu] built drawable '{}' ({} elements)", name, count);
        Drawable {
            vertex_buffer,
            index_buffer,
            count,
            uniform_buffer,
            bind_group,
        }
    }

    fn write_node_uniforms(&self, id: NodeId, transform: &Transform, material: &BasicMaterial) {
        if let Some(d) = self.drawables.get(&id) {
            let [r, g, b] = material.color.to_linear();
            let u = NodeUniforms {
                model: transform.matrix().to_cols_array_2d(),
                color: [r, g, b, material.opacity],
            };
            self.queue
                .write_buffer(&d.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }
}

impl Renderer for WgpuRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        let max_dim = self.device.limits().max_texture_dimension_2d;
        let (bw, bh) = backing_size(width, height, self.pixel_ratio, max_dim);
        dom::set_canvas_size(&self.canvas, width, height, bw, bh);
        if bw != self.config.width || bh != self.config.height {
            self.config.width = bw;
            self.config.height = bh;
            self.surface.configure(&self.device, &self.config);
            self.msaa.recreate(&self.device, bw, bh);
        }
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), SceneError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(SceneError::Render(format!("{:?}", e))),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        self.sync_drawables(scene);
        let globals = GlobalUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.lines.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for (id, node) in scene.iter() {
            match &node.kind {
                NodeKind::Mesh(m) => self.write_node_uniforms(id, &node.transform, &m.material),
                NodeKind::LineSegments(l) => {
                    self.write_node_uniforms(id, &node.transform, &l.material)
                }
                // Basic materials are unlit.
                NodeKind::PointLight(_) | NodeKind::AmbientLight(_) => {}
            }
        }

        let [r, g, b] = scene.background.to_linear();
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa.view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.lines.pipeline);
            rpass.set_bind_group(0, &self.lines.globals_bg, &[]);
            // Scene order: the translucent mesh first, the bright edges over it.
            for (id, _) in scene.iter() {
                let Some(d) = self.drawables.get(&id) else {
                    continue;
                };
                rpass.set_bind_group(1, &d.bind_group, &[]);
                rpass.set_vertex_buffer(0, d.vertex_buffer.slice(..));
                match &d.index_buffer {
                    Some(ib) => {
                        rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint16);
                        rpass.draw_indexed(0..d.count, 0, 0..1);
                    }
                    None => rpass.draw(0..d.count, 0..1),
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
