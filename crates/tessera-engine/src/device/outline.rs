use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;

/// Rectangle outline renderer.
///
/// Outlines are expanded on the CPU into a line list in display pixels; the
/// vertex shader converts to NDC using the viewport uniform.
pub(super) struct OutlineRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

impl OutlineRenderer {
    pub(super) fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tessera outline shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/outline.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tessera outline bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<ViewportUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tessera outline pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessera outline pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[OutlineVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
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

        let viewport_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera outline viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessera outline bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            bind_group,
            viewport_ubo,
            vbo: None,
            vbo_capacity: 0,
        }
    }

    /// Draws `vertices` (line list, display pixels) on top of `view`.
    pub(super) fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        viewport: (u32, u32),
        vertices: &[OutlineVertex],
    ) {
        if vertices.is_empty() {
            return;
        }

        let u = ViewportUniform {
            size: [viewport.0.max(1) as f32, viewport.1.max(1) as f32],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&u));

        self.ensure_vertex_capacity(device, vertices.len());
        let Some(vbo) = self.vbo.as_ref() else { return };
        queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera outline pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
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
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    fn ensure_vertex_capacity(&mut self, device: &wgpu::Device, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(256);
        self.vbo = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera outline vbo"),
            size: (new_cap * std::mem::size_of::<OutlineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct OutlineVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl OutlineVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OutlineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Appends the four edges of `rect` as line-list vertices.
///
/// Edges run through pixel centers so the outline covers exactly the border
/// pixels of the rectangle. Empty rectangles append nothing.
pub(super) fn push_outline(out: &mut Vec<OutlineVertex>, rect: Rect, color: [f32; 4]) {
    if rect.is_empty() {
        return;
    }

    let x0 = rect.x as f32 + 0.5;
    let y0 = rect.y as f32 + 0.5;
    let x1 = rect.right() as f32 - 0.5;
    let y1 = rect.bottom() as f32 - 0.5;

    let corners = [[x0, y0], [x1, y0], [x1, y1], [x0, y1]];
    for i in 0..4 {
        out.push(OutlineVertex { pos: corners[i], color });
        out.push(OutlineVertex { pos: corners[(i + 1) % 4], color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn outline_is_four_closed_segments() {
        let mut v = Vec::new();
        push_outline(&mut v, Rect::new(10, 20, 4, 2), WHITE);
        assert_eq!(v.len(), 8);

        // Each segment starts where the previous one ended.
        for pair in v.chunks(2).collect::<Vec<_>>().windows(2) {
            assert_eq!(pair[0][1].pos, pair[1][0].pos);
        }
        assert_eq!(v[7].pos, v[0].pos);
        assert_eq!(v[0].pos, [10.5, 20.5]);
        assert_eq!(v[2].pos, [13.5, 20.5]);
        assert_eq!(v[4].pos, [13.5, 21.5]);
    }

    #[test]
    fn empty_rect_pushes_nothing() {
        let mut v = Vec::new();
        push_outline(&mut v, Rect::new(0, 0, 0, 10), WHITE);
        assert!(v.is_empty());
    }
}
