//! The JPEG quality ladder walked by the compressor.

use serde::{Deserialize, Serialize};

/// JPEG quality in tenths, from [`Quality::START`] (0.9) down to [`Quality::FLOOR`] (0.1).
///
/// Integer steps keep the ladder free of floating point drift: nine rungs,
/// always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quality(u8);

impl Quality {
    /// First quality tried.
    pub const START: Quality = Quality(9);
    /// The loop never goes below this.
    pub const FLOOR: Quality = Quality(1);

    /// Build from tenths, clamped to the ladder.
    pub fn from_tenths(tenths: u8) -> Self {
        Quality(tenths.clamp(Self::FLOOR.0, Self::START.0))
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    /// Quality as a 0.0-1.0 fraction, the canvas `toDataURL` convention.
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / 10.0
    }

    /// Quality on the JPEG encoder's 1-100 scale.
    pub fn jpeg_quality(self) -> u8 {
        self.0 * 10
    }

    pub fn is_floor(self) -> bool {
        self <= Self::FLOOR
    }

    /// The next rung down, or `None` at the floor.
    pub fn step_down(self) -> Option<Quality> {
        if self.is_floor() {
            None
        } else {
            Some(Quality(self.0 - 1))
        }
    }

    /// Every rung from START to FLOOR, in the order the compressor tries them.
    pub fn ladder() -> impl Iterator<Item = Quality> {
        std::iter::successors(Some(Self::START), |q| q.step_down())
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::START
    }
}
