//! Error type shared by every lesson.
//!
//! Each variant corresponds to one place where setup can fail. There is no
//! recovery: the binaries log the error and exit with [`FAILURE_EXIT_CODE`].

use std::{fmt, io, path::PathBuf};

use crate::abs::ShaderStage;

/// Exit code of a lesson whose window closed normally.
pub const SUCCESS_EXIT_CODE: i32 = 0;
/// Exit code of a lesson that failed during setup.
pub const FAILURE_EXIT_CODE: i32 = -1;

#[derive(Debug)]
pub enum GfxError {
    /// SDL initialization or subsystem failure.
    Sdl(String),
    /// The window could not be created.
    WindowBuild(String),
    /// The GL context could not be created or made current.
    Context(String),
    ShaderCompile { stage: ShaderStage, log: String },
    ProgramLink(String),
    ShaderRead { path: PathBuf, source: io::Error },
    /// A GL object (buffer, vertex array, ...) could not be allocated.
    Resource(String),
    Config(serde_json::Error),
    InvalidConfig(String),
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfxError::Sdl(e) => write!(f, "failed to initialize SDL: {}", e),
            GfxError::WindowBuild(e) => write!(f, "failed to create window: {}", e),
            GfxError::Context(e) => write!(f, "failed to set up OpenGL context: {}", e),
            GfxError::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log.trim_end())
            }
            GfxError::ProgramLink(log) => {
                write!(f, "shader program linking failed: {}", log.trim_end())
            }
            GfxError::ShaderRead { path, source } => {
                write!(f, "failed to read shader file '{}': {}", path.display(), source)
            }
            GfxError::Resource(e) => write!(f, "failed to allocate GL object: {}", e),
            GfxError::Config(e) => write!(f, "invalid window configuration: {}", e),
            GfxError::InvalidConfig(e) => write!(f, "invalid window configuration: {}", e),
        }
    }
}

impl std::error::Error for GfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GfxError::ShaderRead { source, .. } => Some(source),
            GfxError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GfxError {
    fn from(e: serde_json::Error) -> Self {
        GfxError::Config(e)
    }
}

/// Maps the outcome of a lesson to its process exit code.
pub fn exit_code<T>(result: &Result<T, GfxError>) -> i32 {
    match result {
        Ok(_) => SUCCESS_EXIT_CODE,
        Err(_) => FAILURE_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code::<()>(&Ok(())), 0);
        assert_eq!(exit_code::<()>(&Err(GfxError::Sdl("no video".into()))), -1);
    }

    #[test]
    fn test_shader_compile_message() {
        let err = GfxError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:3(1): error: syntax error\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader compilation failed: 0:3(1): error: syntax error"
        );
    }

    #[test]
    fn test_shader_read_keeps_source() {
        let err = GfxError::ShaderRead {
            path: PathBuf::from("shaders/missing.glsl"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("shaders/missing.glsl"));
        assert!(err.source().is_some());
        assert!(GfxError::Resource("vao".into()).source().is_none());
    }
}
