use crate::bindings;
use crate::mesh::{self, Vertex};
use crate::shader::{self, ShaderError, ShaderStage};
use crate::texture::{self, TextureError};
use bytemuck::{Pod, Zeroable};
use cubefract_scene::{Camera, LAYOUT_CAPACITY, Lights, fractal_layout};
use glam::{Mat4, Vec3};
use std::path::Path;
use wgpu::util::DeviceExt;

/// Scale of the marker cube drawn at the point-light position in orbit mode.
const LIGHT_MARKER_SCALE: f32 = 0.2;

/// Which of the two draw strategies this process renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// A lit cube at the origin plus a small marker cube tracking the
    /// orbiting point light.
    Orbit,
    /// One cube per generated fractal layout position, lighting held
    /// constant across instances.
    Fractal,
}

/// Paths to the one-time-load render inputs.
pub struct RenderSources<'a> {
    pub vertex_shader: &'a Path,
    pub fragment_shader: &'a Path,
    pub texture: &'a Path,
}

/// Fatal renderer-setup failures.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Texture(#[from] TextureError),
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    ambient_color: [f32; 3],
    ambient_strength: f32,
    light_position: [f32; 3],
    light_strength: f32,
    camera_position: [f32; 3],
    _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
}

impl InstanceData {
    fn from_model(model: Mat4) -> Self {
        let cols = model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
        }
    }
}

fn frame_uniforms(camera: &Camera, lights: &Lights) -> FrameUniforms {
    FrameUniforms {
        view_proj: camera.view_projection().to_cols_array_2d(),
        ambient_color: lights.ambient_color.to_array(),
        ambient_strength: lights.ambient_strength,
        light_position: lights.point_position.to_array(),
        light_strength: lights.point_strength,
        camera_position: camera.position.to_array(),
        _pad: 0.0,
    }
}

/// The one render pipeline of the process, plus its static GPU resources.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    instance_buffer: wgpu::Buffer,
    depth_texture: wgpu::TextureView,
    mode: RenderMode,
    /// Instance count for the fractal mode, whose transforms are written
    /// once at setup and never change.
    fractal_instances: u32,
}

impl CubeRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        mode: RenderMode,
        sources: &RenderSources,
    ) -> Result<Self, InitError> {
        let vertex_module =
            shader::compile_stage(device, sources.vertex_shader, ShaderStage::Vertex)?;
        let fragment_module =
            shader::compile_stage(device, sources.fragment_shader, ShaderStage::Fragment)?;
        let (texture_view, sampler) = texture::load_texture(device, queue, sources.texture)?;

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frame_uniform_buffer"),
            contents: bytemuck::bytes_of(&frame_uniforms(&Camera::default(), &Lights::default())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: bindings::BIND_FRAME_UNIFORMS,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: bindings::BIND_TEXTURE,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: bindings::BIND_SAMPLER,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: bindings::BIND_FRAME_UNIFORMS,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::BIND_TEXTURE,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: bindings::BIND_SAMPLER,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cube_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = shader::link_pipeline(
            device,
            &wgpu::RenderPipelineDescriptor {
                label: Some("cube_pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vertex_module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[
                        wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<Vertex>() as u64,
                            step_mode: wgpu::VertexStepMode::Vertex,
                            attributes: &wgpu::vertex_attr_array![
                                bindings::ATTR_POSITION => Float32x3,
                                bindings::ATTR_NORMAL => Float32x3,
                                bindings::ATTR_TEXCOORD => Float32x2,
                            ],
                        },
                        wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<InstanceData>() as u64,
                            step_mode: wgpu::VertexStepMode::Instance,
                            attributes: &wgpu::vertex_attr_array![
                                bindings::ATTR_MODEL_COL0 => Float32x4,
                                bindings::ATTR_MODEL_COL1 => Float32x4,
                                bindings::ATTR_MODEL_COL2 => Float32x4,
                                bindings::ATTR_MODEL_COL3 => Float32x4,
                            ],
                        },
                    ],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment_module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    // Mesh winding is mixed across faces; no culling.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: Default::default(),
                    bias: Default::default(),
                }),
                multisample: Default::default(),
                multiview: None,
                cache: None,
            },
        )?;

        let cube_verts = mesh::cube_vertices();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: bytemuck::cast_slice(&cube_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_buffer"),
            size: (LAYOUT_CAPACITY as u64) * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Fractal transforms never change; write them once.
        let fractal_instances = if mode == RenderMode::Fractal {
            let instances: Vec<InstanceData> = fractal_layout()
                .iter()
                .map(|cube| {
                    InstanceData::from_model(
                        Mat4::from_translation(cube.position)
                            * Mat4::from_scale(Vec3::splat(cube.scale)),
                    )
                })
                .collect();
            queue.write_buffer(&instance_buffer, 0, bytemuck::cast_slice(&instances));
            instances.len() as u32
        } else {
            0
        };

        let depth_texture = Self::create_depth_texture(device, width, height);

        tracing::info!(?mode, "renderer initialized");

        Ok(Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_count: cube_verts.len() as u32,
            instance_buffer,
            depth_texture,
            mode,
            fractal_instances,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Render one frame into `target`.
    ///
    /// Writes the frame uniforms, refreshes the instance transforms for the
    /// orbit strategy, and issues the single instanced 36-vertex draw.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        camera: &Camera,
        lights: &Lights,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&frame_uniforms(camera, lights)),
        );

        let instance_count = match self.mode {
            RenderMode::Orbit => {
                let instances = [
                    InstanceData::from_model(Mat4::IDENTITY),
                    InstanceData::from_model(
                        Mat4::from_translation(lights.point_position)
                            * Mat4::from_scale(Vec3::splat(LIGHT_MARKER_SCALE)),
                    ),
                ];
                queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
                instances.len() as u32
            }
            RenderMode::Fractal => self.fractal_instances,
        };

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.3,
                            g: 0.0,
                            b: 0.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            pass.draw(0..self.vertex_count, 0..instance_count);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    // The uniform struct layout is part of the contract with
    // shaders/cube.*.wgsl; these pin the WGSL-visible offsets.
    #[test]
    fn frame_uniforms_match_wgsl_layout() {
        assert_eq!(size_of::<FrameUniforms>(), 112);
        assert_eq!(offset_of!(FrameUniforms, view_proj), 0);
        assert_eq!(offset_of!(FrameUniforms, ambient_color), 64);
        assert_eq!(offset_of!(FrameUniforms, ambient_strength), 76);
        assert_eq!(offset_of!(FrameUniforms, light_position), 80);
        assert_eq!(offset_of!(FrameUniforms, light_strength), 92);
        assert_eq!(offset_of!(FrameUniforms, camera_position), 96);
    }

    #[test]
    fn instance_stride_is_one_matrix() {
        assert_eq!(size_of::<InstanceData>(), 64);
    }

    #[test]
    fn instance_data_carries_model_columns() {
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let data = InstanceData::from_model(model);
        assert_eq!(data.model_3, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn uniforms_capture_scene_state() {
        let camera = Camera::default();
        let mut lights = Lights::default();
        lights.orbit(0.0);
        let u = frame_uniforms(&camera, &lights);
        assert_eq!(u.light_position, [3.0, 0.0, 0.0]);
        assert_eq!(u.ambient_color, [0.5, 0.5, 0.5]);
        assert_eq!(u.camera_position, [0.0, 0.0, 0.0]);
    }
}
