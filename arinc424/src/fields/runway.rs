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

use crate::{Alphanumeric, Error, FixedField};

/// 5.46 Runway Identifier (RUNWAY ID)
pub type RunwayId<'a> = Alphanumeric<'a, 5>;

impl<'a> RunwayId<'a> {
    /// Returns the runway's designator.
    ///
    /// # Errors
    ///
    /// Returns an error if the field can not be parsed as number.
    pub fn designator(&self) -> Result<&'a str, Error> {
        match &self.0[..2] {
            b"RW" => match (self.0[2], self.0[3]) {
                (b'0'..=b'2', b'0'..=b'9') | (b'3', b'0'..=b'6') => {
                    Ok(std::str::from_utf8(&self.0[2..]).unwrap_or("").trim())
                }
                _ => Err(Error::InvalidVariant {
                    field: "Runway Identifier",
                    bytes: Vec::from(&self.0[2..]),
                    expected: "two digits in the range from 00 to 36",
                }),
            },
            // there are runways with designator just being N, S, etc.
            _ => Ok(self.as_str().trim()),
        }
    }

    /// Returns the designator of the runway's opposite direction.
    ///
    /// The number is turned by 18 and the side letter (`L`, `R`) is swapped.
    /// A center runway stays `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the designator is not numbered.
    pub fn reciprocal(&self) -> Result<String, Error> {
        let designator = self.designator()?;
        let (number, side) = designator.split_at(designator.len().min(2));
        let number: u8 = number.parse().map_err(|_| Error::NotANumber {
            bytes: number.as_bytes().to_vec(),
        })?;

        let opposite = match (number + 18) % 36 {
            0 => 36,
            n => n,
        };

        let side = match side {
            "L" => "R",
            "R" => "L",
            side => side,
        };

        Ok(format!("{opposite:02}{side}"))
    }
}

/// 5.58 Runway Magnetic Bearing (RWY BRG)
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum RwyBrg {
    MagneticNorth(f32),
    TrueNorth(u32),
}

impl RwyBrg {
    /// Returns the bearing as true bearing using a declination with east
    /// negative.
    pub fn to_true(&self, declination: f64) -> f64 {
        match self {
            Self::MagneticNorth(deg) => (*deg as f64 - declination).rem_euclid(360.0),
            Self::TrueNorth(deg) => *deg as f64,
        }
    }
}

impl FixedField<'_> for RwyBrg {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[3] {
            b'T' => {
                let deg = parse_numeric!(3, u32, bytes[0..3])?;
                Ok(Self::TrueNorth(deg))
            }
            _ => {
                let deg = parse_numeric!(4, u32, bytes[0..4])? as f32 / 10.0;
                Ok(Self::MagneticNorth(deg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_designator() {
        let rwy = RunwayId::from_bytes(b"RW39L").expect("runway should parse");
        assert!(matches!(
            rwy.designator(),
            Err(Error::InvalidVariant { .. })
        ));
    }

    #[test]
    fn parses_designator_range() {
        let rwy = RunwayId::from_bytes(b"RW36L").expect("runway should parse");
        assert_eq!(rwy.designator(), Ok("36L"));

        let rwy = RunwayId::from_bytes(b"RW29R").expect("runway should parse");
        assert_eq!(rwy.designator(), Ok("29R"));
    }

    #[test]
    fn finds_reciprocal_runway() {
        let reciprocal = |id: &[u8]| RunwayId::from_bytes(id).and_then(|rwy| rwy.reciprocal());

        assert_eq!(reciprocal(b"RW04L"), Ok("22R".to_string()));
        assert_eq!(reciprocal(b"RW18C"), Ok("36C".to_string()));
        assert_eq!(reciprocal(b"RW36 "), Ok("18".to_string()));
    }

    #[test]
    fn parses_bearing() {
        assert_eq!(RwyBrg::from_bytes(b"347T"), Ok(RwyBrg::TrueNorth(347)));
        assert_eq!(RwyBrg::from_bytes(b"2302"), Ok(RwyBrg::MagneticNorth(230.2)));
    }

    #[test]
    fn converts_bearing_to_true() {
        // 13° west is a positive declination
        let brg = RwyBrg::MagneticNorth(44.0);
        assert!((brg.to_true(13.0) - 31.0).abs() < 1e-4);
    }
}
