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

/// 5.26 Magnetic Course (MAG CRS), 5.24 Theta and 5.42 Outbound Course
///
/// A magnetic course in tenths of a degree or a true course in whole degrees
/// marked by a trailing `T`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum Course {
    Magnetic(f64),
    True(f64),
}

impl Course {
    /// The course in degrees, either magnetic or true.
    pub fn deg(&self) -> f64 {
        match self {
            Self::Magnetic(deg) | Self::True(deg) => *deg,
        }
    }

    /// Returns the true course using a declination with east negative.
    pub fn to_true(&self, declination: f64) -> f64 {
        match self {
            Self::Magnetic(deg) => (deg - declination).rem_euclid(360.0),
            Self::True(deg) => *deg,
        }
    }
}

impl FixedField<'_> for Course {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[3] {
            b'T' => Ok(Self::True(parse_numeric!(3, u32, bytes[0..3])? as f64)),
            _ => Ok(Self::Magnetic(
                parse_numeric!(4, u32, bytes[0..4])? as f64 / 10.0,
            )),
        }
    }
}

/// 5.27 Route Distance / Holding Distance or Time (RTE DIST)
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum RouteDistance {
    /// Distance in nautical miles.
    Distance(f64),
    /// Holding leg time in minutes.
    Time(f64),
}

impl FixedField<'_> for RouteDistance {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'T' => Ok(Self::Time(parse_numeric!(3, u32, bytes[1..4])? as f64 / 10.0)),
            _ => Ok(Self::Distance(
                parse_numeric!(4, u32, bytes[0..4])? as f64 / 10.0,
            )),
        }
    }
}

/// 5.24 Theta and 5.25 Rho
///
/// Bearing (tenths of a degree) and distance (tenths of a nautical mile) of
/// a fix from the recommended navaid.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tenths<'a>(Numeric<'a, 4>);

impl<'a> Tenths<'a> {
    /// The value with its implied decimal point.
    pub fn value(&self) -> Result<f64, Error> {
        self.0.scaled(10.0)
    }
}

impl<'a> FixedField<'a> for Tenths<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

pub type Theta<'a> = Tenths<'a>;
pub type Rho<'a> = Tenths<'a>;
