use anyhow::{Result, bail};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawMode, Scene, SceneObject};

/// Scene renderer: one vertex buffer and one color uniform per object.
///
/// Call [`upload`](Self::upload) once for a scene; after that,
/// [`render`](Self::render) only re-binds prepared resources and issues one
/// draw per object. Two pipelines cover the whole mode vocabulary: line
/// loops are expanded into a closed line list at upload time, since wgpu has
/// no loop topology.
#[derive(Default)]
pub struct SceneRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    triangle_pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    objects: Vec<GpuObject>,
}

struct GpuObject {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    topology: wgpu::PrimitiveTopology,
    bind_group: wgpu::BindGroup,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads every scene object to the GPU, replacing any previous upload.
    ///
    /// Each object gets its own vertex buffer and a 16-byte color uniform
    /// with its own bind group, so drawing needs no per-frame queue writes.
    /// Objects whose mode cannot form a single complete primitive are
    /// skipped with a debug message.
    ///
    /// Errors if the shader module or a pipeline fails validation.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) -> Result<()> {
        self.ensure_pipelines(ctx)?;

        // Infallible from here on; safe to drop the previous upload.
        self.objects.clear();

        let Some(bgl) = self.bind_group_layout.as_ref() else {
            bail!("bind group layout missing after pipeline setup");
        };

        for (index, object) in scene.objects().iter().enumerate() {
            let vertices = renderable_vertices(object);
            if vertices.is_empty() {
                log::debug!("object {index}: no complete primitives, skipping");
                continue;
            }

            let vertex_buffer = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("armillary object vbo"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });

            let uniform = ObjectUniform {
                color: object.color.clamped().to_array(),
            };
            let color_ubo = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("armillary object color ubo"),
                    contents: bytemuck::bytes_of(&uniform),
                    usage: wgpu::BufferUsages::UNIFORM,
                });

            let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("armillary object bind group"),
                layout: bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: color_ubo.as_entire_binding(),
                }],
            });

            self.objects.push(GpuObject {
                vertex_buffer,
                vertex_count: vertices.len() as u32,
                topology: topology_for(object.mode),
                bind_group,
            });
        }

        log::debug!("uploaded {} objects", self.objects.len());
        Ok(())
    }

    /// Draws every uploaded object in upload order.
    ///
    /// Expects the target's color and depth views to be cleared already; the
    /// pass loads both and relies on the depth test for occlusion.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        if self.objects.is_empty() {
            return;
        }

        let (Some(line_pipeline), Some(triangle_pipeline)) =
            (self.line_pipeline.as_ref(), self.triangle_pipeline.as_ref())
        else {
            return;
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("armillary scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for object in &self.objects {
            match object.topology {
                wgpu::PrimitiveTopology::LineList => rpass.set_pipeline(line_pipeline),
                _ => rpass.set_pipeline(triangle_pipeline),
            }
            rpass.set_bind_group(0, &object.bind_group, &[]);
            rpass.set_vertex_buffer(0, object.vertex_buffer.slice(..));
            rpass.draw(0..object.vertex_count, 0..1);
        }
    }

    /// Builds the shader module and both pipelines for the current surface
    /// format, inside a validation error scope so a rejected shader surfaces
    /// as an error instead of a device panic.
    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.line_pipeline.is_some()
            && self.triangle_pipeline.is_some()
        {
            return Ok(());
        }

        let error_scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader_src = include_str!("shaders/mesh.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("armillary mesh shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("armillary object bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(
                                std::num::NonZeroU64::new(
                                    std::mem::size_of::<ObjectUniform>() as u64,
                                )
                                .unwrap(),
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("armillary mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let line_pipeline = build_pipeline(
            ctx,
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::LineList,
        );
        let triangle_pipeline = build_pipeline(
            ctx,
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::TriangleList,
        );

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            bail!("mesh shader or pipeline rejected: {err}");
        }

        self.pipeline_format = Some(ctx.surface_format);
        self.line_pipeline = Some(line_pipeline);
        self.triangle_pipeline = Some(triangle_pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        Ok(())
    }
}

fn build_pipeline(
    ctx: &RenderCtx<'_>,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("armillary mesh pipeline"),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[MeshVertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),

        multiview_mask: None,
        cache: None,
    })
}

/// Maps a scene mode to the pipeline topology that draws it.
///
/// `LineLoop` has no GPU counterpart; it rides the line-list pipeline after
/// [`expand_line_loop`].
fn topology_for(mode: DrawMode) -> wgpu::PrimitiveTopology {
    match mode {
        DrawMode::Lines | DrawMode::LineLoop => wgpu::PrimitiveTopology::LineList,
        DrawMode::Triangles => wgpu::PrimitiveTopology::TriangleList,
    }
}

/// Produces the GPU vertex list for an object.
///
/// Lines and triangles keep their complete-primitive prefix; loops are
/// expanded into independent segments with a closing edge.
fn renderable_vertices(object: &SceneObject) -> Vec<MeshVertex> {
    match object.mode {
        DrawMode::Lines | DrawMode::Triangles => object.positions
            [..object.drawn_vertex_count()]
            .iter()
            .map(|&position| MeshVertex { position })
            .collect(),
        DrawMode::LineLoop => expand_line_loop(&object.positions)
            .into_iter()
            .map(|position| MeshVertex { position })
            .collect(),
    }
}

/// Expands a loop `v0 v1 ... vn` into line-list segments
/// `(v0,v1) (v1,v2) ... (vn,v0)`.
///
/// Fewer than two vertices cannot form a segment and yield nothing.
fn expand_line_loop(positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    if positions.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(positions.len() * 2);
    for window in positions.windows(2) {
        out.push(window[0]);
        out.push(window[1]);
    }
    out.push(positions[positions.len() - 1]);
    out.push(positions[0]);
    out
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshVertex {
    position: [f32; 3],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ObjectUniform {
    color: [f32; 4],
}
