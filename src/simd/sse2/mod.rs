//! x86 SSE2 backend with SSE4.1 and AVX refinements.
//!
//! A [`Vector4d`] is a pair of `__m128d` registers holding the `[x, y]` and
//! `[z, w]` lanes. The baseline code uses SSE2 only, which every x86_64 CPU
//! provides. When the build selects `sse4` or `avx`, the rounding family switches
//! to the native `roundpd` instruction and lane selection to `blendvpd`. The AVX
//! build shares those kernels.
//!
//! `build.rs` only selects `sse4` or `avx` when the matching target feature is
//! enabled for the compilation (`-C target-cpu=native` or
//! `-C target-feature=+sse4.1`), so every intrinsic inlines into its caller.
//! Host CPU support alone never selects them.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: x86 or x86_64
//! - **Baseline**: SSE2
//! - **Optional**: SSE4.1 (`roundpd`, `blendvpd`), AVX
//!
//! # Rounding Without SSE4.1
//!
//! SSE2 has no packed f64 to i64 conversion, and the packed f64 to i32
//! conversion overflows above 2^31. The SSE2 rounding kernels instead round to
//! the nearest integer by adding and subtracting 2^52, then correct the result
//! by one toward the requested direction.

#[cfg(all(any(sse4, avx), not(target_feature = "sse4.1")))]
compile_error!("the sse4 and avx backends require the sse4.1 target feature");

#[cfg(all(avx, not(target_feature = "avx")))]
compile_error!("the avx backend requires the avx target feature");

#[cfg(all(sse2, not(target_feature = "sse2")))]
compile_error!("the sse2 backend requires the sse2 target feature");

pub(crate) mod math;

pub mod vector4d;

pub use vector4d::{Mask4d, Scalard, Vector4d};
