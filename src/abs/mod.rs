//! This module contains the thin OpenGL layer shared by the lessons:
//! window and context setup, shader compilation and mesh buffers.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
