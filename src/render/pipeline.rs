use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};
use crate::config::{LightingConfig, Palette, SceneConfig};
use crate::error::RevealResult;
use crate::math::{Mat4, Vec3};
use crate::mesh::node_box;
use crate::scene::{Camera, FrameData};
use super::webgl::GlContext;
use super::shaders::*;

/// Cached uniform locations for the node shader
struct NodeUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    ambient_intensity: Option<WebGlUniformLocation>,
    light_dir: Option<WebGlUniformLocation>,
    light_intensity: Option<WebGlUniformLocation>,
}

/// Cached uniform locations for the line shader
struct LineUniforms {
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
}

/// Draws a `FrameData`: one lit box per node, one line per visible edge
pub struct RenderPipeline {
    ctx: GlContext,

    node_program: WebGlProgram,
    line_program: WebGlProgram,
    node_uniforms: NodeUniforms,
    line_uniforms: LineUniforms,

    // Shared box mesh, drawn once per node with its own model matrix
    box_vao: WebGlVertexArrayObject,
    _box_vertex_buffer: WebGlBuffer,
    _box_index_buffer: WebGlBuffer,
    box_index_count: i32,

    // Edge lines, re-uploaded only when the visible set changes
    line_vao: WebGlVertexArrayObject,
    line_buffer: WebGlBuffer,
    line_data: Vec<f32>,

    width: i32,
    height: i32,

    palette: Palette,
    lights: LightingConfig,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32, config: &SceneConfig) -> RevealResult<Self> {
        let ctx = GlContext::new(gl);

        let node_program = ctx.create_program(NODE_VERTEX_SHADER, NODE_FRAGMENT_SHADER)?;
        let line_program = ctx.create_program(LINE_VERTEX_SHADER, LINE_FRAGMENT_SHADER)?;

        let node_uniforms = NodeUniforms {
            model: ctx.get_uniform_location(&node_program, "u_model"),
            view: ctx.get_uniform_location(&node_program, "u_view"),
            projection: ctx.get_uniform_location(&node_program, "u_projection"),
            color: ctx.get_uniform_location(&node_program, "u_color"),
            ambient_intensity: ctx.get_uniform_location(&node_program, "u_ambient_intensity"),
            light_dir: ctx.get_uniform_location(&node_program, "u_light_dir"),
            light_intensity: ctx.get_uniform_location(&node_program, "u_light_intensity"),
        };

        let line_uniforms = LineUniforms {
            view: ctx.get_uniform_location(&line_program, "u_view"),
            projection: ctx.get_uniform_location(&line_program, "u_projection"),
            color: ctx.get_uniform_location(&line_program, "u_color"),
        };

        // Box mesh
        // Layout: position(3) + normal(3) = 6 floats
        let mesh = node_box(config.tree.node_size);
        let box_vao = ctx.create_vao()?;
        ctx.gl.bind_vertex_array(Some(&box_vao));

        let box_vertex_buffer = ctx.create_buffer_f32(&mesh.vertex_data(), WebGl2RenderingContext::STATIC_DRAW)?;
        let box_index_buffer = ctx.create_index_buffer(mesh.index_data())?;

        ctx.gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&box_vertex_buffer));
        ctx.gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&box_index_buffer));
        ctx.float_attribute(0, 3, 6 * 4, 0);
        ctx.float_attribute(1, 3, 6 * 4, 12);
        ctx.gl.bind_vertex_array(None);

        // Line buffer, filled on the first frame with visible edges
        let line_vao = ctx.create_vao()?;
        ctx.gl.bind_vertex_array(Some(&line_vao));
        let line_buffer = ctx.create_buffer_f32(&[], WebGl2RenderingContext::DYNAMIC_DRAW)?;
        ctx.gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&line_buffer));
        ctx.float_attribute(0, 3, 3 * 4, 0);
        ctx.gl.bind_vertex_array(None);

        Ok(Self {
            ctx,
            node_program,
            line_program,
            node_uniforms,
            line_uniforms,
            box_vao,
            _box_vertex_buffer: box_vertex_buffer,
            _box_index_buffer: box_index_buffer,
            box_index_count: mesh.index_data().len() as i32,
            line_vao,
            line_buffer,
            line_data: Vec::new(),
            width,
            height,
            palette: config.palette,
            lights: config.lights,
        })
    }

    fn sync_lines(&mut self, frame: &FrameData) {
        let data = frame.line_vertices();
        if data != self.line_data {
            self.ctx.upload_f32(&self.line_buffer, &data, WebGl2RenderingContext::DYNAMIC_DRAW);
            self.line_data = data;
        }
    }

    /// Render a frame
    pub fn render(&mut self, frame: &FrameData, camera: &Camera) {
        self.sync_lines(frame);

        let ctx = &self.ctx;
        let gl = &ctx.gl;

        let projection = camera.projection_matrix(self.width, self.height);
        let view = camera.view_matrix();

        ctx.viewport(self.width, self.height);
        ctx.clear(self.palette.background);
        ctx.enable_depth_test();

        // Nodes
        gl.use_program(Some(&self.node_program));
        ctx.uniform_matrix4fv(self.node_uniforms.view.as_ref(), view.as_slice());
        ctx.uniform_matrix4fv(self.node_uniforms.projection.as_ref(), projection.as_slice());
        ctx.uniform_3f(self.node_uniforms.color.as_ref(), self.palette.node);
        ctx.uniform_1f(self.node_uniforms.ambient_intensity.as_ref(), self.lights.ambient_intensity);
        let light_dir = Vec3::from_array(self.lights.directional_position).normalize();
        ctx.uniform_3f(self.node_uniforms.light_dir.as_ref(), light_dir.to_array());
        ctx.uniform_1f(self.node_uniforms.light_intensity.as_ref(), self.lights.directional_intensity);

        gl.bind_vertex_array(Some(&self.box_vao));
        for node in frame.drawable_nodes() {
            let model = Mat4::node_transform(node.position, node.scale);
            ctx.uniform_matrix4fv(self.node_uniforms.model.as_ref(), model.as_slice());
            gl.draw_elements_with_i32(
                WebGl2RenderingContext::TRIANGLES,
                self.box_index_count,
                WebGl2RenderingContext::UNSIGNED_INT,
                0,
            );
        }

        // Edges
        let line_vertex_count = (self.line_data.len() / 3) as i32;
        if line_vertex_count > 0 {
            gl.use_program(Some(&self.line_program));
            ctx.uniform_matrix4fv(self.line_uniforms.view.as_ref(), view.as_slice());
            ctx.uniform_matrix4fv(self.line_uniforms.projection.as_ref(), projection.as_slice());
            ctx.uniform_3f(self.line_uniforms.color.as_ref(), self.palette.edge);

            gl.bind_vertex_array(Some(&self.line_vao));
            gl.draw_arrays(WebGl2RenderingContext::LINES, 0, line_vertex_count);
        }

        gl.bind_vertex_array(None);
    }

    /// Resize the render target
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}
