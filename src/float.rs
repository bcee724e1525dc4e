//! Plain f64 tuples for exchanging vectors with externally owned memory.
//!
//! All three are `#[repr(C)]` so they can overlay caller buffers laid out as
//! consecutive doubles.

/// Two consecutive f64 values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Float2d {
    pub x: f64,
    pub y: f64,
}

/// Three consecutive f64 values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Float3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Four consecutive f64 values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Float4d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Float2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Float3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Float4d {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}
