//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct, which owns a vertex array object, its vertex
//! buffer and an optional element buffer. Vertices describe their own layout through the
//! [`Vertex`] trait.

use std::sync::Arc;

use glow::HasContext;

use crate::error::GfxError;

/// One float vector attribute inside a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The `layout (location = N)` slot in the vertex shader.
    pub location: u32,
    /// Number of `f32` components (1 to 4).
    pub components: i32,
    /// Byte offset from the start of the vertex.
    pub offset: i32,
}

/// Trait that defines the attribute layout of a vertex type.
///
/// Implementors must be `#[repr(C)]` and made only of `f32`s so the byte
/// offsets match what the shader reads.
pub trait Vertex: Copy {
    fn attributes() -> &'static [VertexAttribute];

    fn stride() -> i32 {
        std::mem::size_of::<Self>() as i32
    }
}

/// The draw call a mesh issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    /// `glDrawArrays` over every vertex.
    Arrays { count: i32 },
    /// `glDrawElements` over the element buffer.
    Elements { count: i32 },
}

impl DrawCall {
    pub fn for_counts(vertex_count: usize, indices: Option<&[u32]>) -> Self {
        match indices {
            Some(indices) if !indices.is_empty() => DrawCall::Elements {
                count: indices.len() as i32,
            },
            _ => DrawCall::Arrays {
                count: vertex_count as i32,
            },
        }
    }
}

fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// Creates the vertex array, the vertex buffer and, if `indexed`, the element buffer.
///
/// Nothing is bound here. If any creation fails, the handles created so far are deleted.
fn allocate<A, B>(
    indexed: bool,
    create_vertex_array: impl FnOnce() -> Result<A, String>,
    mut create_buffer: impl FnMut() -> Result<B, String>,
    delete_vertex_array: impl FnOnce(A),
    mut delete_buffer: impl FnMut(B),
) -> Result<(A, B, Option<B>), GfxError> {
    let vao = create_vertex_array().map_err(GfxError::Resource)?;
    let vbo = match create_buffer() {
        Ok(vbo) => vbo,
        Err(e) => {
            delete_vertex_array(vao);
            return Err(GfxError::Resource(e));
        }
    };
    if !indexed {
        return Ok((vao, vbo, None));
    }
    match create_buffer() {
        Ok(ebo) => Ok((vao, vbo, Some(ebo))),
        Err(e) => {
            delete_buffer(vbo);
            delete_vertex_array(vao);
            Err(GfxError::Resource(e))
        }
    }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    draw_call: DrawCall,
}

impl Mesh {
    /// Uploads the vertices; the mesh is drawn with `glDrawArrays`.
    pub fn new<V: Vertex>(gl: &Arc<glow::Context>, vertices: &[V]) -> Result<Self, GfxError> {
        Self::build(gl, vertices, None)
    }

    /// Uploads the vertices and indices; the mesh is drawn with `glDrawElements`.
    pub fn indexed<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
    ) -> Result<Self, GfxError> {
        Self::build(gl, vertices, Some(indices))
    }

    fn build<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: Option<&[u32]>,
    ) -> Result<Self, GfxError> {
        let draw_call = DrawCall::for_counts(vertices.len(), indices);
        let element_indices = match draw_call {
            DrawCall::Elements { .. } => indices,
            DrawCall::Arrays { .. } => None,
        };
        let (vao, vbo, ebo) = unsafe {
            allocate(
                element_indices.is_some(),
                || gl.create_vertex_array(),
                || gl.create_buffer(),
                |vao| gl.delete_vertex_array(vao),
                |buffer| gl.delete_buffer(buffer),
            )?
        };
        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);

            // The element buffer binding is recorded in the VAO, so it is bound while the VAO is.
            if let (Some(ebo), Some(indices)) = (ebo, element_indices) {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    as_bytes(indices),
                    glow::STATIC_DRAW,
                );
            }

            for attribute in V::attributes() {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    V::stride(),
                    attribute.offset,
                );
                gl.enable_vertex_attrib_array(attribute.location);
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            if ebo.is_some() {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
            }

            log::debug!(
                "created mesh with {} vertices ({:?})",
                vertices.len(),
                draw_call
            );

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                ebo,
                draw_call,
            })
        }
    }

    /// Draws the mesh as triangles.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            match self.draw_call {
                DrawCall::Arrays { count } => self.gl.draw_arrays(glow::TRIANGLES, 0, count),
                DrawCall::Elements { count } => {
                    self.gl
                        .draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, 0)
                }
            }
            self.gl.bind_vertex_array(None);
        }
    }

    pub fn draw_call(&self) -> DrawCall {
        self.draw_call
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Hands out ids from 1 and fails the buffer creation numbered `fail_buffer`.
    fn allocate_with(
        indexed: bool,
        fail_buffer: Option<u32>,
    ) -> (Result<(u32, u32, Option<u32>), GfxError>, Vec<String>) {
        let deleted = RefCell::new(Vec::new());
        let mut next_buffer = 1;
        let result = allocate(
            indexed,
            || Ok(100),
            || {
                let id = next_buffer;
                next_buffer += 1;
                if Some(id) == fail_buffer {
                    Err(format!("out of memory creating buffer {}", id))
                } else {
                    Ok(id)
                }
            },
            |vao| deleted.borrow_mut().push(format!("vao {}", vao)),
            |buffer| deleted.borrow_mut().push(format!("buffer {}", buffer)),
        );
        (result, deleted.into_inner())
    }

    #[test]
    fn test_allocate_success() {
        let (result, deleted) = allocate_with(false, None);
        assert_eq!(result.unwrap(), (100, 1, None));
        assert!(deleted.is_empty());

        let (result, deleted) = allocate_with(true, None);
        assert_eq!(result.unwrap(), (100, 1, Some(2)));
        assert!(deleted.is_empty());
    }

    #[test]
    fn test_allocate_releases_on_vertex_buffer_failure() {
        let (result, deleted) = allocate_with(true, Some(1));
        assert!(matches!(result, Err(GfxError::Resource(_))));
        assert_eq!(deleted, vec!["vao 100"]);
    }

    #[test]
    fn test_allocate_releases_on_element_buffer_failure() {
        let (result, deleted) = allocate_with(true, Some(2));
        assert!(matches!(result, Err(GfxError::Resource(_))));
        assert_eq!(deleted, vec!["buffer 1", "vao 100"]);
    }

    #[test]
    fn test_allocate_vertex_array_failure() {
        let deleted = RefCell::new(Vec::<String>::new());
        let result = allocate::<u32, u32>(
            false,
            || Err("no vertex arrays".to_string()),
            || panic!("buffer created after vertex array failure"),
            |_| deleted.borrow_mut().push("vao".into()),
            |_| deleted.borrow_mut().push("buffer".into()),
        );
        assert!(matches!(result, Err(GfxError::Resource(e)) if e == "no vertex arrays"));
        assert!(deleted.into_inner().is_empty());
    }

    #[test]
    fn test_draw_call_selection() {
        assert_eq!(DrawCall::for_counts(3, None), DrawCall::Arrays { count: 3 });
        assert_eq!(DrawCall::for_counts(4, Some(&[])), DrawCall::Arrays { count: 4 });
        assert_eq!(
            DrawCall::for_counts(4, Some(&[0, 1, 3, 1, 2, 3])),
            DrawCall::Elements { count: 6 }
        );
    }

    #[test]
    fn test_as_bytes_length() {
        let indices = [0u32, 1, 2];
        let bytes = as_bytes(&indices);
        assert_eq!(bytes.len(), 12);
        assert_eq!(u32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 1);
    }
}
