//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for compiling and linking
//! GLSL stages, and [`ShaderSources`] for loading a vertex/fragment pair from disk.
//! Uniform variables are set through the [`Uniform`] trait.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use glam::Vec4;
use glow::HasContext;

use crate::error::GfxError;

/// Builds a [`ShaderProgram`] from `src/shaders/<name>/vert.glsl` and `frag.glsl`,
/// embedded into the binary at compile time.
#[macro_export]
macro_rules! shader_program {
    ($gl:expr, $name:literal) => {
        $crate::abs::ShaderProgram::from_sources(
            &$gl,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/shaders/", $name, "/vert.glsl")),
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/shaders/", $name, "/frag.glsl")),
        )
    };
}

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum passed to `glCreateShader`.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Represents an individual compiled OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
    _stage: ShaderStage,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, stage: ShaderStage, source: &str) -> Result<Self, GfxError> {
        unsafe {
            let shader = gl.create_shader(stage.gl_type()).map_err(GfxError::Resource)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(GfxError::ShaderCompile { stage, log });
            }

            log::debug!("compiled {} shader", stage);

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
                _stage: stage,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Source text of a vertex/fragment pair read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Reads both stages. The error names whichever file could not be read.
    pub fn read(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self, GfxError> {
        Ok(Self {
            vertex: read_source(vertex_path.as_ref())?,
            fragment: read_source(fragment_path.as_ref())?,
        })
    }
}

fn read_source(path: &Path) -> Result<String, GfxError> {
    std::fs::read_to_string(path).map_err(|source| GfxError::ShaderRead {
        path: PathBuf::from(path),
        source,
    })
}

/// A value that can be written to a uniform variable.
///
/// The location is resolved by [`ShaderProgram::set_uniform`]; implementors only
/// pick the `glUniform*` call matching their type.
pub trait Uniform {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for f32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_1_f32(Some(location), *self) }
    }
}

impl Uniform for Vec4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe { gl.uniform_4_f32(Some(location), self.x, self.y, self.z, self.w) }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, GfxError> {
        unsafe {
            let program = gl.create_program().map_err(GfxError::Resource)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(GfxError::ProgramLink(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles both stages and links them.
    pub fn from_sources(gl: &Arc<glow::Context>, vertex: &str, fragment: &str) -> Result<Self, GfxError> {
        let vert = Shader::new(gl, ShaderStage::Vertex, vertex)?;
        let frag = Shader::new(gl, ShaderStage::Fragment, fragment)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Reads, compiles and links a vertex/fragment pair stored on disk.
    pub fn from_files(
        gl: &Arc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, GfxError> {
        let (vertex_path, fragment_path) = (vertex_path.as_ref(), fragment_path.as_ref());
        let sources = ShaderSources::read(vertex_path, fragment_path)?;
        log::debug!(
            "loaded shaders from {} and {}",
            vertex_path.display(),
            fragment_path.display()
        );
        Self::from_sources(gl, &sources.vertex, &sources.fragment)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program. The program must be in use.
    ///
    /// Names the linker optimized out, or never declared, are skipped.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        if let Some(location) = unsafe { self.gl.get_uniform_location(self.id, name) } {
            value.upload(&self.gl, &location);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hwg-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_stage_mapping() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
    }

    #[test]
    fn test_lesson_uniform_types() {
        fn settable<T: Uniform>(_: T) {}
        settable(0.5f32);
        settable(Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_read_sources() {
        let dir = scratch_dir("read");
        fs::write(dir.join("vert.glsl"), "#version 330 core\nvoid main() {}\n").unwrap();
        fs::write(dir.join("frag.glsl"), "#version 330 core\nout vec4 c;\nvoid main() {}\n").unwrap();

        let sources = ShaderSources::read(dir.join("vert.glsl"), dir.join("frag.glsl")).unwrap();
        assert!(sources.vertex.starts_with("#version 330 core"));
        assert!(sources.fragment.contains("out vec4 c;"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_read_reports_missing_file() {
        let dir = scratch_dir("missing");
        fs::write(dir.join("vert.glsl"), "void main() {}").unwrap();

        let err = ShaderSources::read(dir.join("vert.glsl"), dir.join("nope.glsl")).unwrap_err();
        match err {
            GfxError::ShaderRead { path, source } => {
                assert_eq!(path, dir.join("nope.glsl"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_bundled_shader_files_exist() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders/uniform_color");
        let sources = ShaderSources::read(root.join("vert.glsl"), root.join("frag.glsl")).unwrap();
        assert!(sources.fragment.contains("u_color"));
    }
}
