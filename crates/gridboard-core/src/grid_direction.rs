//! Packed four-nibble directions.
//!
//! A [`GridDirection`] is a 16-bit value read as four hex digits, most
//! significant first: forward units, back units, left units, right units.
//! Each field holds 0–15 units and the fields are independent, so the
//! encoding does not care in which order the units were written.
//!
//! ```text
//! 0x2001  =  F F . R   =  two forward, one right  =  (dx, dy) = (1, -2)
//! ```

use std::fmt;

use crate::error::CodecError;
use crate::orientation::Orientation;
use crate::vector::{IntoVector, Vector};

/// A relative step packed as forward/back/left/right unit counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct GridDirection(u16);

impl GridDirection {
    /// Centre (no movement).
    pub const C: Self = Self(0x0000);

    /// One forward.
    pub const F: Self = Self(0x1000);
    /// One back.
    pub const B: Self = Self(0x0100);
    /// One left.
    pub const L: Self = Self(0x0010);
    /// One right.
    pub const R: Self = Self(0x0001);
    /// Forward-left diagonal.
    pub const FL: Self = Self(0x1010);
    /// Forward-right diagonal.
    pub const FR: Self = Self(0x1001);
    /// Back-left diagonal.
    pub const BL: Self = Self(0x0110);
    /// Back-right diagonal.
    pub const BR: Self = Self(0x0101);

    /// Two forward.
    pub const FF: Self = Self(0x2000);
    /// Two back.
    pub const BB: Self = Self(0x0200);
    /// Two left.
    pub const LL: Self = Self(0x0020);
    /// Two right.
    pub const RR: Self = Self(0x0002);
    /// Two forward, two left.
    pub const FFLL: Self = Self(0x2020);
    /// Two forward, two right.
    pub const FFRR: Self = Self(0x2002);
    /// Two back, two left.
    pub const BBLL: Self = Self(0x0220);
    /// Two back, two right.
    pub const BBRR: Self = Self(0x0202);

    /// Knight step: two forward, one left.
    pub const FFL: Self = Self(0x2010);
    /// Knight step: two forward, one right.
    pub const FFR: Self = Self(0x2001);
    /// Knight step: two back, one left.
    pub const BBL: Self = Self(0x0210);
    /// Knight step: two back, one right.
    pub const BBR: Self = Self(0x0201);
    /// Knight step: one forward, two left.
    pub const FLL: Self = Self(0x1020);
    /// Knight step: one forward, two right.
    pub const FRR: Self = Self(0x1002);
    /// Knight step: one back, two left.
    pub const BLL: Self = Self(0x0120);
    /// Knight step: one back, two right.
    pub const BRR: Self = Self(0x0102);

    /// The eight single-unit compass steps, clockwise from forward.
    pub const COMPASS: [Self; 8] = [
        Self::F,
        Self::FR,
        Self::R,
        Self::BR,
        Self::B,
        Self::BL,
        Self::L,
        Self::FL,
    ];

    /// The eight knight steps.
    pub const KNIGHT: [Self; 8] = [
        Self::FFL,
        Self::FFR,
        Self::FRR,
        Self::BRR,
        Self::BBR,
        Self::BBL,
        Self::BLL,
        Self::FLL,
    ];

    /// Largest unit count a single field can hold.
    pub const MAX_UNITS: u8 = 0xF;

    /// Pack unit counts.
    ///
    /// Returns `Err(CodecError::UnitOutOfRange)` if any count exceeds
    /// [`MAX_UNITS`](Self::MAX_UNITS).
    pub fn new(forward: u8, back: u8, left: u8, right: u8) -> Result<Self, CodecError> {
        for (name, value) in [
            ("forward", forward),
            ("back", back),
            ("left", left),
            ("right", right),
        ] {
            if value > Self::MAX_UNITS {
                return Err(CodecError::UnitOutOfRange {
                    name,
                    value: value as u32,
                    max: Self::MAX_UNITS,
                });
            }
        }
        Ok(Self::pack(forward, back, left, right))
    }

    /// Reinterpret a raw 16-bit pattern.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw 16-bit pattern.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Count letters of a compass code into packed units.
    ///
    /// Unlike [`decode`](crate::decode), opposing letters do not cancel:
    /// `"FB"` packs one unit in each field. Unknown characters are ignored.
    pub fn parse(codes: &str) -> Result<Self, CodecError> {
        let mut units = [0u32; 4];
        for code in codes.chars() {
            match code {
                'F' => units[0] += 1,
                'B' => units[1] += 1,
                'L' => units[2] += 1,
                'R' => units[3] += 1,
                _ => {}
            }
        }
        for (name, value) in ["forward", "back", "left", "right"].into_iter().zip(units) {
            if value > Self::MAX_UNITS as u32 {
                return Err(CodecError::UnitOutOfRange {
                    name,
                    value,
                    max: Self::MAX_UNITS,
                });
            }
        }
        Ok(Self::pack(
            units[0] as u8,
            units[1] as u8,
            units[2] as u8,
            units[3] as u8,
        ))
    }

    const fn pack(forward: u8, back: u8, left: u8, right: u8) -> Self {
        Self(
            ((forward as u16) << 12)
                | ((back as u16) << 8)
                | ((left as u16) << 4)
                | (right as u16),
        )
    }

    /// Forward units.
    pub const fn forward(self) -> u8 {
        ((self.0 >> 12) & 0xF) as u8
    }

    /// Back units.
    pub const fn back(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    /// Left units.
    pub const fn left(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// Right units.
    pub const fn right(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// Collapse to a relative step: `dx = right - left`, `dy = back - forward`.
    pub const fn to_vector(self) -> Vector {
        Vector::new(
            self.right() as i32 - self.left() as i32,
            self.back() as i32 - self.forward() as i32,
        )
    }

    /// Remap the four fields through an orientation.
    ///
    /// A swap exchanges the vertical fields with the horizontal ones
    /// (forward ↔ left, back ↔ right); a reversed x exchanges left and
    /// right; a reversed y exchanges forward and back.
    pub fn oriented(self, orientation: Orientation) -> Self {
        let (mut f, mut b, mut l, mut r) = (self.forward(), self.back(), self.left(), self.right());
        if orientation.swaps_axes() {
            (f, b, l, r) = (l, r, f, b);
        }
        if orientation.reverses_x() {
            (l, r) = (r, l);
        }
        if orientation.reverses_y() {
            (f, b) = (b, f);
        }
        Self::pack(f, b, l, r)
    }

    /// [`oriented`](Self::oriented) followed by [`to_vector`](Self::to_vector).
    pub fn to_vector_in(self, orientation: Orientation) -> Vector {
        self.oriented(orientation).to_vector()
    }

    /// Total units across all four fields.
    pub const fn units(self) -> u32 {
        self.forward() as u32 + self.back() as u32 + self.left() as u32 + self.right() as u32
    }
}

impl fmt::Display for GridDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("C");
        }
        for (letter, count) in [
            ('F', self.forward()),
            ('B', self.back()),
            ('L', self.left()),
            ('R', self.right()),
        ] {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl From<u16> for GridDirection {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<GridDirection> for Vector {
    fn from(d: GridDirection) -> Self {
        d.to_vector()
    }
}

impl IntoVector for GridDirection {
    fn into_vector(self) -> Vector {
        self.to_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::decode;
    use proptest::prelude::*;

    #[test]
    fn field_layout() {
        let d = GridDirection::from_bits(0x1234);
        assert_eq!((d.forward(), d.back(), d.left(), d.right()), (1, 2, 3, 4));
        assert_eq!(GridDirection::new(1, 2, 3, 4).unwrap(), d);
    }

    #[test]
    fn named_constants_decode() {
        assert_eq!(GridDirection::C.to_vector(), Vector::ZERO);
        assert_eq!(GridDirection::F.to_vector(), Vector::new(0, -1));
        assert_eq!(GridDirection::B.to_vector(), Vector::new(0, 1));
        assert_eq!(GridDirection::L.to_vector(), Vector::new(-1, 0));
        assert_eq!(GridDirection::R.to_vector(), Vector::new(1, 0));
        assert_eq!(GridDirection::FFRR.to_vector(), Vector::new(2, -2));
        assert_eq!(GridDirection::BLL.to_vector(), Vector::new(-2, 1));
        assert_eq!(GridDirection::FFR.to_vector(), Vector::new(1, -2));
    }

    #[test]
    fn constants_agree_with_letter_codes() {
        for d in GridDirection::COMPASS.into_iter().chain(GridDirection::KNIGHT) {
            assert_eq!(d.to_vector(), decode(&d.to_string()), "{d}");
            assert_eq!(GridDirection::parse(&d.to_string()), Ok(d));
        }
    }

    #[test]
    fn new_rejects_wide_units() {
        assert_eq!(
            GridDirection::new(0, 16, 0, 0),
            Err(CodecError::UnitOutOfRange {
                name: "back",
                value: 16,
                max: 15
            })
        );
        let long = "R".repeat(16);
        assert!(matches!(
            GridDirection::parse(&long),
            Err(CodecError::UnitOutOfRange { name: "right", .. })
        ));
    }

    #[test]
    fn parse_keeps_opposing_units() {
        let d = GridDirection::parse("FB").unwrap();
        assert_eq!(d.bits(), 0x1100);
        assert_eq!(d.to_vector(), Vector::ZERO);
        assert_eq!(d.units(), 2);
    }

    #[test]
    fn display_spells_letters() {
        assert_eq!(GridDirection::C.to_string(), "C");
        assert_eq!(GridDirection::FFL.to_string(), "FFL");
        assert_eq!(GridDirection::BBRR.to_string(), "BBRR");
    }

    #[test]
    fn swap_maps_forward_to_left() {
        let d = GridDirection::F.oriented(Orientation::LRFB);
        assert_eq!(d, GridDirection::L);
        assert_eq!(GridDirection::FFR.oriented(Orientation::LRFB), GridDirection::BLL);
    }

    fn arb_orientation() -> impl Strategy<Value = Orientation> {
        (0u8..8).prop_map(|b| Orientation::ALL[b as usize])
    }

    proptest! {
        #[test]
        fn oriented_decode_matches_relative_conversion(
            bits in any::<u16>(),
            o in arb_orientation(),
        ) {
            let d = GridDirection::from_bits(bits);
            prop_assert_eq!(d.to_vector_in(o), o.convert_relative(d.to_vector()));
        }

        #[test]
        fn orienting_preserves_units(bits in any::<u16>(), o in arb_orientation()) {
            let d = GridDirection::from_bits(bits);
            prop_assert_eq!(d.oriented(o).units(), d.units());
        }
    }
}
