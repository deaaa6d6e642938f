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

//! Fields of controlled and restrictive airspace records.

use crate::{Error, FixedField};

/// 5.213 Controlled Airspace Type (ARSP TYPE)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ArspType {
    ClassC,
    ControlArea,
    TerminalControlArea,
    RadarZone,
    ClassB,
    RadioMandatoryZone,
    TransponderMandatoryZone,
    ControlZone,
}

impl FixedField<'_> for ArspType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'A' => Ok(Self::ClassC),
            b'C' => Ok(Self::ControlArea),
            b'M' => Ok(Self::TerminalControlArea),
            b'R' => Ok(Self::RadarZone),
            b'T' => Ok(Self::ClassB),
            b'U' => Ok(Self::RadioMandatoryZone),
            b'V' => Ok(Self::TransponderMandatoryZone),
            b'Z' => Ok(Self::ControlZone),
            byte => Err(Error::InvalidCharacter {
                field: "Controlled Airspace Type",
                byte,
                expected: "A, C, M, R, T, U, V or Z",
            }),
        }
    }
}

/// 5.215 Airspace Classification (ARSP CLASS)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AirspaceClass(u8);

impl AirspaceClass {
    /// Returns the class letter from `A` to `G`.
    pub fn letter(&self) -> char {
        self.0 as char
    }
}

impl FixedField<'_> for AirspaceClass {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            byte @ b'A'..=b'G' => Ok(Self(byte)),
            byte => Err(Error::InvalidCharacter {
                field: "Airspace Classification",
                byte,
                expected: "A to G",
            }),
        }
    }
}

/// 5.128 Restrictive Airspace Type
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RestrictiveType {
    Alert,
    Caution,
    Danger,
    LongTermTFR,
    MOA,
    NationalSecurityArea,
    Prohibited,
    Restricted,
    Training,
    Warning,
    UnspecifiedOrUnknown,
}

impl FixedField<'_> for RestrictiveType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'A' => Ok(Self::Alert),
            b'C' => Ok(Self::Caution),
            b'D' => Ok(Self::Danger),
            b'L' => Ok(Self::LongTermTFR),
            b'M' => Ok(Self::MOA),
            b'N' => Ok(Self::NationalSecurityArea),
            b'P' => Ok(Self::Prohibited),
            // G is used by EuroNav 7 for restricted areas
            b'R' | b'G' => Ok(Self::Restricted),
            b'T' => Ok(Self::Training),
            b'W' => Ok(Self::Warning),
            b'U' => Ok(Self::UnspecifiedOrUnknown),
            byte => Err(Error::InvalidCharacter {
                field: "Restrictive Airspace Type",
                byte,
                expected: "A, C, D, L, M, N, P, R, T, W or U",
            }),
        }
    }
}

/// 5.131 Time Code (TIME CD)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TimeCode {
    ContinuousIncludingHolidays,
    ContinuousExcludingHolidays,
    NonContinuous,
    ByNotam,
    NotSpecified,
}

impl FixedField<'_> for TimeCode {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'C' => Ok(Self::ContinuousIncludingHolidays),
            b'H' => Ok(Self::ContinuousExcludingHolidays),
            b'N' => Ok(Self::NonContinuous),
            b'P' => Ok(Self::ByNotam),
            b'U' => Ok(Self::NotSpecified),
            byte => Err(Error::InvalidCharacter {
                field: "Time Code",
                byte,
                expected: "C, H, N, P or U",
            }),
        }
    }
}

/// Defines a single-letter flag field that is either set or blank.
macro_rules! flag {
    ($(#[$meta:meta])* $name:ident, $set:literal, $field:literal, $expected:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub struct $name(bool);

        impl FixedField<'_> for $name {
            const LENGTH: usize = 1;

            fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
                match bytes[0] {
                    $set => Ok(Self(true)),
                    b' ' => Ok(Self(false)),
                    byte => Err(Error::InvalidCharacter {
                        field: $field,
                        byte,
                        expected: $expected,
                    }),
                }
            }
        }

        impl From<$name> for bool {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

flag!(
    /// 5.132 NOTAM: the airspace is activated by NOTAM.
    NOTAM,
    b'N',
    "NOTAM",
    "N or blank"
);

flag!(
    /// 5.340 Unmanned Aerial Vehicle (UAV) Only
    UAV,
    b'Y',
    "UAV",
    "Y or blank"
);

/// 5.121 Lower/Upper Limit
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum LowerUpperLimit {
    Altitude(u32),
    FlightLevel(u16),
    NotSpecified,
    Unlimited,
    Ground,
    MeanSeaLevel,
    NOTAM,
}

impl FixedField<'_> for LowerUpperLimit {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let limit = bytes.get(..Self::LENGTH).ok_or(Error::InvalidFieldLength {
            expected: Self::LENGTH,
            actual: bytes.len(),
        })?;

        match limit {
            [b'F', b'L', fl @ ..] => Ok(Self::FlightLevel(parse_numeric!(3, u16, fl)?)),
            b"NOTSP" => Ok(Self::NotSpecified),
            b"UNLTD" => Ok(Self::Unlimited),
            b"GND  " => Ok(Self::Ground),
            b"MSL  " => Ok(Self::MeanSeaLevel),
            b"NOTAM" => Ok(Self::NOTAM),
            digits if digits.iter().all(u8::is_ascii_digit) => {
                Ok(Self::Altitude(parse_numeric!(5, u32, digits)?))
            }
            bytes => Err(Error::InvalidVariant {
                field: "Lower/Upper Limit",
                bytes: bytes.to_vec(),
                expected: "altitude, flight level, NOTSP, UNLTD, GND, MSL or NOTAM",
            }),
        }
    }
}

/// 5.133 Unit Indicator (UNIT IND)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum UnitIndicator {
    MeanSeaLevel,
    AboveGroundLevel,
}

impl FixedField<'_> for UnitIndicator {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'M' => Ok(Self::MeanSeaLevel),
            b'A' => Ok(Self::AboveGroundLevel),
            byte => Err(Error::InvalidCharacter {
                field: "Unit Indicator",
                byte,
                expected: "M or A",
            }),
        }
    }
}

/// 5.91 Continuation Record Application Type (APPL)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ApplicationType {
    /// Standard ARINC continuation with additional fields.
    Standard,
    /// Call sign and controlling agency.
    ControllingAgency,
    /// Extension of the primary record.
    PrimaryExtension,
    /// Sector narrative.
    Narrative,
    /// Time of operation.
    TimeOfOperation,
}

impl FixedField<'_> for ApplicationType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'A' => Ok(Self::Standard),
            b'C' => Ok(Self::ControllingAgency),
            b'E' => Ok(Self::PrimaryExtension),
            b'N' => Ok(Self::Narrative),
            b'T' => Ok(Self::TimeOfOperation),
            byte => Err(Error::InvalidCharacter {
                field: "Application Type",
                byte,
                expected: "A, C, E, N or T",
            }),
        }
    }
}
