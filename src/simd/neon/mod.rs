//! AArch64 NEON backend.
//!
//! A [`Vector4d`] is a pair of `float64x2_t` registers holding the `[x, y]` and
//! `[z, w]` lanes, and a [`Mask4d`] the matching pair of `uint64x2_t`. AArch64
//! NEON has native f64 rounding (`frintm`, `frintp`, `frintn`, `frintz`), so the
//! rounding family maps onto single instructions except for round half away
//! from zero, which is built from truncation.
//!
//! The scalar type is the plain f64 of the fallback backend: f64 values already
//! live in the low lane of a NEON register.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: AArch64
//! - **Compilation**: NEON is part of the AArch64 baseline

pub(crate) mod math;

pub mod vector4d;

pub use crate::simd::fallback::Scalard;
pub use vector4d::{Mask4d, Vector4d};
