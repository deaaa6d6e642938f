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

use std::fmt;

use crate::{Error, FixedField, Numeric};

/// 5.35 NAVAID Class (CLASS)
///
/// Five columns with the facility in the first two, followed by coverage,
/// weather information and collocation.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct NavaidClass([u8; 5]);

impl NavaidClass {
    /// Returns `true` if the VHF navaid has a VOR.
    pub fn is_vor(&self) -> bool {
        self.0[0] == b'V'
    }

    /// Returns `true` if the VHF navaid has a DME.
    pub fn has_dme(&self) -> bool {
        matches!(self.0[1], b'D' | b'I' | b'N' | b'P')
    }

    /// Returns `true` if the VHF navaid is a (military) TACAN.
    pub fn is_tacan(&self) -> bool {
        matches!(self.0[1], b'T' | b'M')
    }

    /// Returns `true` for a non-directional beacon.
    pub fn is_ndb(&self) -> bool {
        matches!(self.0[0], b'H' | b'S' | b'M') && !matches!(self.0[1], b'I' | b'M' | b'O' | b'C')
    }
}

impl FixedField<'_> for NavaidClass {
    const LENGTH: usize = 5;

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

impl fmt::Debug for NavaidClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", String::from_utf8_lossy(&self.0))
    }
}

/// 5.34 VOR/NDB Frequency (VOR/NDB FREQ)
///
/// VHF frequencies are stored in 10 kHz units, NDB frequencies in 100 Hz.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Frequency<'a>(Numeric<'a, 5>);

impl<'a> Frequency<'a> {
    /// The VHF frequency in MHz.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn mhz(&self) -> Result<f64, Error> {
        self.0.scaled(100.0)
    }

    /// The NDB frequency in kHz.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn khz(&self) -> Result<f64, Error> {
        self.0.scaled(10.0)
    }
}

impl<'a> FixedField<'a> for Frequency<'a> {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

/// 5.80 ILS/MLS/GLS Category (CAT)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum IlsCategory {
    /// Localizer only, no glide slope.
    LocalizerOnly,
    CatI,
    CatII,
    CatIII,
    /// Instrument Guidance System
    IGS,
    /// Localizer Directional Aid with glide slope.
    LdaWithGlideSlope,
    /// Localizer Directional Aid without glide slope.
    LdaWithoutGlideSlope,
    /// Simplified Directional Facility with glide slope.
    SdfWithGlideSlope,
    /// Simplified Directional Facility without glide slope.
    SdfWithoutGlideSlope,
}

impl FixedField<'_> for IlsCategory {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'0' => Ok(Self::LocalizerOnly),
            b'1' => Ok(Self::CatI),
            b'2' => Ok(Self::CatII),
            b'3' => Ok(Self::CatIII),
            b'I' => Ok(Self::IGS),
            b'L' => Ok(Self::LdaWithGlideSlope),
            b'A' => Ok(Self::LdaWithoutGlideSlope),
            b'S' => Ok(Self::SdfWithGlideSlope),
            b'F' => Ok(Self::SdfWithoutGlideSlope),
            byte => Err(Error::InvalidCharacter {
                field: "ILS Category",
                byte,
                expected: "0, 1, 2, 3, I, L, A, S or F",
            }),
        }
    }
}
