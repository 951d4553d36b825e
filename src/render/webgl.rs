use super::render_error;
use crate::constants::{GL_COLOR_COMPONENTS, GL_POSITION_COMPONENTS};
use surface_core::error::Result;
use surface_core::{Renderer, Scene, SurfaceError};
use wasm_bindgen::JsCast;
use web_sys as web;
use web_sys::WebGlRenderingContext as Gl;

const VERTEX_SHADER: &str = r#"
attribute vec2 a_position;
attribute vec4 a_color;
uniform vec2 u_resolution;
varying vec4 v_color;
void main() {
    vec2 clip = a_position / u_resolution * 2.0 - 1.0;
    gl_Position = vec4(clip.x, -clip.y, 0.0, 1.0);
    v_color = a_color;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;
varying vec4 v_color;
void main() {
    gl_FragColor = v_color;
}
"#;

/// Interleaved per-vertex data uploaded each frame.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GlVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

/// Triangles are shaded on the CPU and drawn as flat-colored fills. Strokes
/// are not drawn by this backend.
pub struct WebGlRenderer {
    canvas: web::HtmlCanvasElement,
    gl: Gl,
    program: web::WebGlProgram,
    buffer: web::WebGlBuffer,
    resolution: Option<web::WebGlUniformLocation>,
    width: f64,
    height: f64,
    vertices: Vec<GlVertex>,
}

fn gl_error(message: impl Into<String>) -> SurfaceError {
    SurfaceError::Render(message.into())
}

fn compile_shader(gl: &Gl, kind: u32, source: &str) -> Result<web::WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| gl_error("unable to create shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        Err(gl_error(
            gl.get_shader_info_log(&shader)
                .unwrap_or_else(|| "shader compile failed".into()),
        ))
    }
}

fn link_program(gl: &Gl, vs: &web::WebGlShader, fs: &web::WebGlShader) -> Result<web::WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| gl_error("unable to create program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        Err(gl_error(
            gl.get_program_info_log(&program)
                .unwrap_or_else(|| "program link failed".into()),
        ))
    }
}

impl WebGlRenderer {
    pub fn new(document: &web::Document) -> Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| render_error("create canvas", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| gl_error("canvas is not an HtmlCanvasElement"))?;
        let gl = canvas
            .get_context("webgl")
            .map_err(|e| render_error("webgl context", e))?
            .ok_or_else(|| gl_error("webgl unavailable"))?
            .dyn_into::<Gl>()
            .map_err(|_| gl_error("unexpected webgl context type"))?;

        let vs = compile_shader(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile_shader(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vs, &fs)?;
        gl.use_program(Some(&program));

        let buffer = gl
            .create_buffer()
            .ok_or_else(|| gl_error("unable to create buffer"))?;
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));

        let stride = std::mem::size_of::<GlVertex>() as i32;
        let a_position = gl.get_attrib_location(&program, "a_position");
        let a_color = gl.get_attrib_location(&program, "a_color");
        if a_position < 0 || a_color < 0 {
            return Err(gl_error("missing vertex attributes"));
        }
        gl.vertex_attrib_pointer_with_i32(
            a_position as u32,
            GL_POSITION_COMPONENTS,
            Gl::FLOAT,
            false,
            stride,
            0,
        );
        gl.enable_vertex_attrib_array(a_position as u32);
        gl.vertex_attrib_pointer_with_i32(
            a_color as u32,
            GL_COLOR_COMPONENTS,
            Gl::FLOAT,
            false,
            stride,
            GL_POSITION_COMPONENTS * std::mem::size_of::<f32>() as i32,
        );
        gl.enable_vertex_attrib_array(a_color as u32);

        gl.enable(Gl::BLEND);
        gl.blend_func(Gl::SRC_ALPHA, Gl::ONE_MINUS_SRC_ALPHA);

        let resolution = gl.get_uniform_location(&program, "u_resolution");
        Ok(Self {
            canvas,
            gl,
            program,
            buffer,
            resolution,
            width: 0.0,
            height: 0.0,
            vertices: Vec::new(),
        })
    }

    pub fn element(&self) -> &web::Element {
        &self.canvas
    }
}

impl Renderer for WebGlRenderer {
    fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.width = width;
        self.height = height;
        let (w, h) = (width.max(1.0) as u32, height.max(1.0) as u32);
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.gl.viewport(0, 0, w as i32, h as i32);
        self.gl.use_program(Some(&self.program));
        self.gl
            .uniform2f(self.resolution.as_ref(), width as f32, height as f32);
        Ok(())
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        let opacity = scene.mesh.material.fill_opacity;

        self.vertices.clear();
        for tri in scene.shade() {
            let c = tri.color.rgba;
            let color = [c[0] as f32, c[1] as f32, c[2] as f32, (c[3] * opacity) as f32];
            for p in tri.points {
                self.vertices.push(GlVertex {
                    pos: [(p.x + half_w) as f32, (half_h - p.y) as f32],
                    color,
                });
            }
        }

        let gl = &self.gl;
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.buffer));
        let data = js_sys::Float32Array::from(bytemuck::cast_slice::<GlVertex, f32>(&self.vertices));
        gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &data, Gl::DYNAMIC_DRAW);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(Gl::COLOR_BUFFER_BIT);
        gl.draw_arrays(Gl::TRIANGLES, 0, self.vertices.len() as i32);
        Ok(())
    }
}
