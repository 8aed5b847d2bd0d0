//! Hardcoded vertex data drawn by the lessons.
//!
//! All positions are already in normalized device coordinates, so the vertex
//! shaders pass them through unchanged. Every triangle winds counter-clockwise.

use std::mem::offset_of;

use glam::Vec3;

use crate::abs::{Vertex, VertexAttribute};

/// A vertex with only a position, read at `location = 0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub position: Vec3,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
        }
    }
}

impl Vertex for Position {
    fn attributes() -> &'static [VertexAttribute] {
        const ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
            location: 0,
            components: 3,
            offset: offset_of!(Position, position) as i32,
        }];
        &ATTRIBUTES
    }
}

/// A vertex with a position at `location = 0` and an RGB color at `location = 1`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl ColoredVertex {
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

impl Vertex for ColoredVertex {
    fn attributes() -> &'static [VertexAttribute] {
        const ATTRIBUTES: [VertexAttribute; 2] = [
            VertexAttribute {
                location: 0,
                components: 3,
                offset: offset_of!(ColoredVertex, position) as i32,
            },
            VertexAttribute {
                location: 1,
                components: 3,
                offset: offset_of!(ColoredVertex, color) as i32,
            },
        ];
        &ATTRIBUTES
    }
}

pub const TRIANGLE: [Position; 3] = [
    Position::new(-0.5, -0.5, 0.0),
    Position::new(0.5, -0.5, 0.0),
    Position::new(0.0, 0.5, 0.0),
];

/// Red, green and blue corners; the rasterizer blends them across the face.
pub const COLORED_TRIANGLE: [ColoredVertex; 3] = [
    ColoredVertex::new(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(1.0, 0.0, 0.0)),
    ColoredVertex::new(Vec3::new(0.5, -0.5, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    ColoredVertex::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0)),
];

pub const LEFT_TRIANGLE: [Position; 3] = [
    Position::new(-0.9, -0.5, 0.0),
    Position::new(0.0, -0.5, 0.0),
    Position::new(-0.45, 0.5, 0.0),
];

pub const RIGHT_TRIANGLE: [Position; 3] = [
    Position::new(0.0, -0.5, 0.0),
    Position::new(0.9, -0.5, 0.0),
    Position::new(0.45, 0.5, 0.0),
];

/// Top right, bottom right, bottom left, top left.
pub const RECTANGLE: [Position; 4] = [
    Position::new(0.5, 0.5, 0.0),
    Position::new(0.5, -0.5, 0.0),
    Position::new(-0.5, -0.5, 0.0),
    Position::new(-0.5, 0.5, 0.0),
];

/// Two triangles sharing the diagonal between corners 1 and 3.
pub const RECTANGLE_INDICES: [u32; 6] = [0, 3, 1, 1, 3, 2];
