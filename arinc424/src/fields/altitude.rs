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

use crate::{Error, FixedField, Numeric};

/// 5.30 Altitude / Minimum Altitude
///
/// Either a literal altitude in feet or a flight level token `FLnnn`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Altitude {
    Feet(u32),
    FlightLevel(u16),
}

impl Altitude {
    /// Returns the altitude in feet with flight levels multiplied by 100.
    pub fn feet(&self) -> u32 {
        match self {
            Self::Feet(ft) => *ft,
            Self::FlightLevel(fl) => *fl as u32 * 100,
        }
    }
}

impl FixedField<'_> for Altitude {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes.get(..Self::LENGTH) {
            Some([b'F', b'L', fl @ ..]) => Ok(Self::FlightLevel(parse_numeric!(3, u16, fl)?)),
            Some(ft) => Ok(Self::Feet(parse_numeric!(5, u32, ft)?)),
            None => Err(Error::InvalidFieldLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            }),
        }
    }
}

/// 5.55 Airport / Heliport Elevation and 5.68 Landing Threshold Elevation
///
/// Elevation in feet that may be preceded by a minus sign.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Elevation(i32);

impl Elevation {
    pub fn feet(&self) -> i32 {
        self.0
    }
}

impl FixedField<'_> for Elevation {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes.get(..Self::LENGTH) {
            Some([b'-', digits @ ..]) => Ok(Self(-(parse_numeric!(4, i32, digits)?))),
            Some(digits) => Ok(Self(parse_numeric!(5, i32, digits)?)),
            None => Err(Error::InvalidFieldLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            }),
        }
    }
}

/// 5.29 Altitude Description (ALT DESC)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AltitudeDescription {
    /// `+`: at or above the first altitude.
    AtOrAbove,
    /// `-`: at or below the first altitude.
    AtOrBelow,
    /// `@` or blank: at the first altitude.
    At,
    /// `B`: at or above the second and at or below the first altitude.
    Between,
    /// `C`: at or above the second altitude.
    AtOrAboveSecond,
    /// `G`: at the first altitude with the glide slope altitude second.
    GlideSlope,
    /// `H`: at or above the first altitude with the glide slope altitude
    /// second.
    GlideSlopeAtOrAbove,
    /// `I`: at the first altitude with the glide slope intercept altitude
    /// second.
    GlideSlopeIntercept,
    /// `J`: at or above the first altitude with the glide slope intercept
    /// altitude second.
    GlideSlopeInterceptAtOrAbove,
    /// `V`: at or above the first altitude with a step-down altitude second.
    StepDownAtOrAbove,
    /// `X`: at the first altitude with a step-down altitude second.
    StepDownAt,
    /// `Y`: at or below the first altitude with a step-down altitude second.
    StepDownAtOrBelow,
}

impl FixedField<'_> for AltitudeDescription {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'+' => Ok(Self::AtOrAbove),
            b'-' => Ok(Self::AtOrBelow),
            b'@' | b' ' => Ok(Self::At),
            b'B' => Ok(Self::Between),
            b'C' => Ok(Self::AtOrAboveSecond),
            b'G' => Ok(Self::GlideSlope),
            b'H' => Ok(Self::GlideSlopeAtOrAbove),
            b'I' => Ok(Self::GlideSlopeIntercept),
            b'J' => Ok(Self::GlideSlopeInterceptAtOrAbove),
            b'V' => Ok(Self::StepDownAtOrAbove),
            b'X' => Ok(Self::StepDownAt),
            b'Y' => Ok(Self::StepDownAtOrBelow),
            byte => Err(Error::InvalidCharacter {
                field: "Altitude Description",
                byte,
                expected: "+, -, @, B, C, G, H, I, J, V, X, Y or blank",
            }),
        }
    }
}

/// 5.72 Speed Limit in knots.
pub type SpeedLimit<'a> = Numeric<'a, 3>;

/// 5.54 Length in feet.
pub type Length<'a> = Numeric<'a, 5>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feet_and_flight_levels() {
        assert_eq!(Altitude::from_bytes(b"05000"), Ok(Altitude::Feet(5000)));
        assert_eq!(
            Altitude::from_bytes(b"FL180").map(|alt| alt.feet()),
            Ok(18000)
        );
        assert!(Option::<Altitude>::from_bytes(b"     ").is_ok_and(|alt| alt.is_none()));
    }

    #[test]
    fn parses_negative_elevation() {
        assert_eq!(Elevation::from_bytes(b"-0028").map(|e| e.feet()), Ok(-28));
        assert_eq!(Elevation::from_bytes(b"00013").map(|e| e.feet()), Ok(13));
    }

    #[test]
    fn blank_description_is_at() {
        assert_eq!(
            AltitudeDescription::from_bytes(b" "),
            Ok(AltitudeDescription::At)
        );
        assert_eq!(
            AltitudeDescription::from_bytes(b"+"),
            Ok(AltitudeDescription::AtOrAbove)
        );
    }
}
