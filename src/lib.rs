//! # simd4d
//!
//! SIMD-accelerated 4-component double-precision vector math.
//!
//! `simd4d` provides a flat, functional API (`vector_add`, `vector_dot3`,
//! `vector_normalize3`, `vector_round_bankers`, ...) over a [`Vector4d`] value
//! type. The representation is chosen once per build by `build.rs`:
//!
//! - **AVX / SSE4.1 / SSE2** on x86 and x86_64: a pair of `__m128d` registers
//! - **NEON** on AArch64: a pair of `float64x2_t` registers
//! - **Scalar** everywhere else: four f64 fields
//!
//! Every backend produces bit-identical results for every operation (NaN
//! payloads aside), including the rounding family around signed zeros, NaN,
//! infinities and values beyond 2^52.
//!
//! ## Backend Selection
//!
//! `build.rs` picks the widest instruction set enabled for the compilation.
//! SSE4.1 and AVX need `-C target-cpu=native` or a matching
//! `-C target-feature`; host CPU support alone only produces a build warning.
//! Setting `SIMD4D_BACKEND` to one of `avx`, `sse4`, `sse2`, `neon` or `scalar`
//! at build time forces a backend. The choice is visible at runtime through
//! [`active_backend`].
//!
//! ## Example
//!
//! ```rust
//! use simd4d::vector4d::*;
//!
//! let position = vector_set(3.0, 0.0, 4.0, 1.0);
//! let direction = vector_normalize3(position);
//!
//! assert!((vector_length3(direction) - 1.0).abs() < 1e-12);
//! assert_eq!(vector_to_array(vector_floor(vector_set(-0.5, 0.5, 2.0, -2.5))), [-1.0, 0.0, 2.0, -3.0]);
//! ```

pub mod error;

pub mod float;

pub mod mix;

pub mod scalar;

pub mod simd;

pub mod vector4d;

pub use error::{Result, Simd4dError};
pub use float::{Float2d, Float3d, Float4d};
pub use mix::{mix4, Mix4};
pub use simd::traits::{SimdMask4, SimdScalar, SimdVector4};
pub use simd::{active_backend, Backend, Mask4d, Scalard, Vector4d};
