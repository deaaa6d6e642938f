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

//! Fields describing the legs of terminal procedures and airways.

use std::fmt;

use crate::{Error, FixedField};

/// 5.21 Path and Termination (PATH TERM)
///
/// The path defines how the leg is flown and the termination where the leg
/// ends.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PathTerm {
    /// Initial Fix
    IF,
    /// Track to a Fix
    TF,
    /// Course to a Fix
    CF,
    /// Direct to a Fix
    DF,
    /// Fix to an Altitude
    FA,
    /// Track from a Fix for a Distance
    FC,
    /// Track from a Fix to a DME Distance
    FD,
    /// From a Fix to a Manual Termination
    FM,
    /// Course to an Altitude
    CA,
    /// Course to a DME Distance
    CD,
    /// Course to an Intercept
    CI,
    /// Course to a Radial Termination
    CR,
    /// Constant Radius Arc to a Fix
    RF,
    /// Arc to a Fix (DME arc)
    AF,
    /// Heading to an Altitude
    VA,
    /// Heading to a DME Distance
    VD,
    /// Heading to an Intercept
    VI,
    /// Heading to a Manual Termination
    VM,
    /// Heading to a Radial Termination
    VR,
    /// Procedure Turn
    PI,
    /// Holding to an Altitude
    HA,
    /// Holding to a Fix (single circuit)
    HF,
    /// Holding to a Manual Termination
    HM,
}

impl FixedField<'_> for PathTerm {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes.get(..Self::LENGTH) {
            Some(b"IF") => Ok(Self::IF),
            Some(b"TF") => Ok(Self::TF),
            Some(b"CF") => Ok(Self::CF),
            Some(b"DF") => Ok(Self::DF),
            Some(b"FA") => Ok(Self::FA),
            Some(b"FC") => Ok(Self::FC),
            Some(b"FD") => Ok(Self::FD),
            Some(b"FM") => Ok(Self::FM),
            Some(b"CA") => Ok(Self::CA),
            Some(b"CD") => Ok(Self::CD),
            Some(b"CI") => Ok(Self::CI),
            Some(b"CR") => Ok(Self::CR),
            Some(b"RF") => Ok(Self::RF),
            Some(b"AF") => Ok(Self::AF),
            Some(b"VA") => Ok(Self::VA),
            Some(b"VD") => Ok(Self::VD),
            Some(b"VI") => Ok(Self::VI),
            Some(b"VM") => Ok(Self::VM),
            Some(b"VR") => Ok(Self::VR),
            Some(b"PI") => Ok(Self::PI),
            Some(b"HA") => Ok(Self::HA),
            Some(b"HF") => Ok(Self::HF),
            Some(b"HM") => Ok(Self::HM),
            _ => Err(Error::InvalidVariant {
                field: "Path and Termination",
                bytes: bytes.iter().take(Self::LENGTH).copied().collect(),
                expected: "path and termination according to ARINC 424 5.21",
            }),
        }
    }
}

impl fmt::Display for PathTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// 5.20 Turn Direction (TURN DIR)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TurnDir {
    Left,
    Right,
    Either,
}

impl FixedField<'_> for TurnDir {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'L' => Ok(Self::Left),
            b'R' => Ok(Self::Right),
            b'E' => Ok(Self::Either),
            byte => Err(Error::InvalidCharacter {
                field: "Turn Direction",
                byte,
                expected: "L, R or E",
            }),
        }
    }
}

/// The function of a fix within an approach procedure (column 43).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FixFunction {
    InitialApproachFix,
    IntermediateApproachFix,
    InitialApproachFixWithHolding,
    InitialApproachFixWithFinalApproachCourseFix,
    FinalEndPoint,
    FinalApproachFix,
    HoldingFix,
    FinalApproachCourseFix,
    MissedApproachPoint,
    InitialDepartureFix,
}

impl FixFunction {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::InitialApproachFix),
            b'B' => Some(Self::IntermediateApproachFix),
            b'C' => Some(Self::InitialApproachFixWithHolding),
            b'D' => Some(Self::InitialApproachFixWithFinalApproachCourseFix),
            b'E' => Some(Self::FinalEndPoint),
            b'F' => Some(Self::FinalApproachFix),
            b'H' => Some(Self::HoldingFix),
            b'I' => Some(Self::FinalApproachCourseFix),
            b'M' => Some(Self::MissedApproachPoint),
            b'N' => Some(Self::InitialDepartureFix),
            _ => None,
        }
    }

    /// Returns `true` if the fix starts the flyable part of an approach.
    pub fn is_approach_fix(&self) -> bool {
        matches!(
            self,
            Self::InitialApproachFix
                | Self::IntermediateApproachFix
                | Self::InitialApproachFixWithHolding
                | Self::InitialApproachFixWithFinalApproachCourseFix
                | Self::FinalApproachFix
                | Self::FinalApproachCourseFix
        )
    }
}

/// 5.17 Waypoint Description Code (DESC CODE)
///
/// Four columns with independent meaning. The first column describes the
/// kind of fix, the second whether it is flown over, the third its role in
/// the procedure and the fourth its function within an approach.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct WaypointDescription([u8; 4]);

impl WaypointDescription {
    /// Returns `true` if the fix must be flown over.
    pub fn is_fly_over(&self) -> bool {
        matches!(self.0[1], b'B' | b'Y')
    }

    /// Returns `true` if the leg is the first of the missed approach.
    pub fn is_first_missed_approach_leg(&self) -> bool {
        self.0[2] == b'M'
    }

    /// Returns the fix function within an approach.
    pub fn fix_function(&self) -> Option<FixFunction> {
        FixFunction::from_byte(self.0[3])
    }
}

impl FixedField<'_> for WaypointDescription {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        bytes
            .get(..Self::LENGTH)
            .and_then(|b| b.try_into().ok())
            .map(Self)
            .ok_or(Error::InvalidFieldLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            })
    }
}

impl fmt::Debug for WaypointDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", String::from_utf8_lossy(&self.0))
    }
}

/// 5.7 Route Type (RT TYPE)
///
/// The meaning of the code depends on the section of the record. SIDs,
/// STARs and approaches as well as airways have their own set of codes.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RouteType(u8);

impl RouteType {
    pub fn code(&self) -> u8 {
        self.0
    }
}

impl FixedField<'_> for RouteType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            byte if byte.is_ascii_alphanumeric() => Ok(Self(byte)),
            byte => Err(Error::InvalidCharacter {
                field: "Route Type",
                byte,
                expected: "a letter or digit",
            }),
        }
    }
}

/// 5.19 Level (LEVEL)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Level {
    AllAltitudes,
    HighLevelAirwaysAltitudes,
    LowLevelAirwaysAltitudes,
}

impl FixedField<'_> for Level {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'B' => Ok(Self::AllAltitudes),
            b'H' => Ok(Self::HighLevelAirwaysAltitudes),
            b'L' => Ok(Self::LowLevelAirwaysAltitudes),
            byte => Err(Error::InvalidCharacter {
                field: "Level",
                byte,
                expected: "B, H or L",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_terminators() {
        assert_eq!(PathTerm::from_bytes(b"RF"), Ok(PathTerm::RF));
        assert_eq!(PathTerm::from_bytes(b"HM"), Ok(PathTerm::HM));
        assert_eq!(PathTerm::RF.to_string(), "RF");
        assert!(matches!(
            PathTerm::from_bytes(b"XX"),
            Err(Error::InvalidVariant { .. })
        ));
    }

    #[test]
    fn reads_fix_function_and_missed_approach() {
        let faf = WaypointDescription::from_bytes(b"E  F").expect("desc should parse");
        assert_eq!(faf.fix_function(), Some(FixFunction::FinalApproachFix));
        assert!(faf.fix_function().is_some_and(|f| f.is_approach_fix()));

        let map = WaypointDescription::from_bytes(b"GY M").expect("desc should parse");
        assert!(map.is_fly_over());
        assert_eq!(map.fix_function(), Some(FixFunction::MissedApproachPoint));
        assert!(!map.is_first_missed_approach_leg());

        let missed = WaypointDescription::from_bytes(b"E M ").expect("desc should parse");
        assert!(missed.is_first_missed_approach_leg());
        assert_eq!(missed.fix_function(), None);
    }
}
