// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{Error, FixedField};

/// 5.39 Magnetic Variation (MAG VAR) and 5.66 Station Declination (STN DEC)
///
/// The direction letter is followed by the angle in tenths of a degree.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum MagVar {
    /// The variation is east of true north.
    East(f64),
    /// The variation is west of true north.
    West(f64),
    /// The point is oriented to true north.
    OrientedToTrueNorth,
    /// The station is oriented to grid north (station declination only).
    OrientedToGridNorth,
}

impl MagVar {
    /// Returns the variation in degrees with **east negative** and west
    /// positive.
    ///
    /// A magnetic course becomes a true course by subtracting this value.
    pub fn as_decimal(&self) -> f64 {
        match self {
            Self::East(deg) => -deg,
            Self::West(deg) => *deg,
            Self::OrientedToTrueNorth | Self::OrientedToGridNorth => 0.0,
        }
    }
}

impl FixedField<'_> for MagVar {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let code = bytes[0];
        let deg = || -> Result<f64, Error> {
            Ok(parse_numeric!(4, u32, &bytes[1..5])? as f64 / 10.0) // includes decidegree
        };

        match code {
            b'E' => Ok(Self::East(deg()?)),
            b'W' => Ok(Self::West(deg()?)),
            b'T' => Ok(Self::OrientedToTrueNorth),
            b'G' => Ok(Self::OrientedToGridNorth),
            _ => Err(Error::InvalidCharacter {
                field: "Magnetic Variation",
                byte: code,
                expected: "E, W, T or G as variation direction",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mag_var() {
        let mag_var = MagVar::from_bytes(b"E0140");
        assert_eq!(mag_var, Ok(MagVar::East(14.0)));

        let mag_var = MagVar::from_bytes(b"W0093");
        assert_eq!(mag_var, Ok(MagVar::West(9.3)));

        let mag_var = MagVar::from_bytes(b"T0000");
        assert_eq!(mag_var, Ok(MagVar::OrientedToTrueNorth));
    }

    #[test]
    fn east_is_negative() {
        assert_eq!(MagVar::East(14.0).as_decimal(), -14.0);
        assert_eq!(MagVar::West(9.3).as_decimal(), 9.3);
        assert_eq!(MagVar::OrientedToTrueNorth.as_decimal(), 0.0);
        assert_eq!(MagVar::OrientedToGridNorth.as_decimal(), 0.0);
    }

    #[test]
    fn keeps_tenths_exact() {
        let mag_var = MagVar::from_bytes(b"W0093").map(|v| v.as_decimal());
        assert_eq!(mag_var, Ok(9.3));
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(MagVar::from_bytes(b"X0010").is_err());
    }
}
