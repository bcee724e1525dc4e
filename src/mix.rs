//! Component selectors for mixing two vectors.
//!
//! A mix draws each output lane from one of 8 symbols: `X Y Z W` address the
//! first input and `A B C D` the second. [`vector_mix`](crate::vector4d::vector_mix)
//! takes the symbols as const generics, so the [`mix4`] constants are what call
//! sites spell out; [`Mix4`] is the runtime form used by
//! [`vector_get_component`](crate::vector4d::vector_get_component).

use crate::error::{Result, Simd4dError};

/// Symbol constants for the const generic parameters of `vector_mix`.
pub mod mix4 {
    pub const X: u8 = 0;
    pub const Y: u8 = 1;
    pub const Z: u8 = 2;
    pub const W: u8 = 3;
    pub const A: u8 = 4;
    pub const B: u8 = 5;
    pub const C: u8 = 6;
    pub const D: u8 = 7;
}

/// One of the 8 mix symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mix4 {
    X = mix4::X,
    Y = mix4::Y,
    Z = mix4::Z,
    W = mix4::W,
    A = mix4::A,
    B = mix4::B,
    C = mix4::C,
    D = mix4::D,
}

impl Mix4 {
    /// Lane index within its own input (0 for `X` and `A`, 3 for `W` and `D`).
    #[inline(always)]
    pub const fn lane(self) -> usize {
        (self as usize) % 4
    }

    /// True for `X Y Z W`.
    #[inline(always)]
    pub const fn is_first_input(self) -> bool {
        (self as u8) < mix4::A
    }
}

impl From<Mix4> for u8 {
    fn from(component: Mix4) -> Self {
        component as u8
    }
}

impl TryFrom<u8> for Mix4 {
    type Error = Simd4dError;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            mix4::X => Ok(Mix4::X),
            mix4::Y => Ok(Mix4::Y),
            mix4::Z => Ok(Mix4::Z),
            mix4::W => Ok(Mix4::W),
            mix4::A => Ok(Mix4::A),
            mix4::B => Ok(Mix4::B),
            mix4::C => Ok(Mix4::C),
            mix4::D => Ok(Mix4::D),
            _ => {
                tracing::debug!(index, "rejected mix component index");
                Err(Simd4dError::InvalidComponent { index })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_and_input() {
        assert_eq!(Mix4::X.lane(), 0);
        assert_eq!(Mix4::W.lane(), 3);
        assert_eq!(Mix4::A.lane(), 0);
        assert_eq!(Mix4::D.lane(), 3);
        assert!(Mix4::Z.is_first_input());
        assert!(!Mix4::C.is_first_input());
    }

    #[test]
    fn test_try_from_u8() {
        for index in 0u8..8 {
            let component = Mix4::try_from(index).unwrap();
            assert_eq!(u8::from(component), index);
        }

        assert_eq!(
            Mix4::try_from(8),
            Err(Simd4dError::InvalidComponent { index: 8 })
        );
    }
}
