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

use crate::{Alphanumeric, Error};

/// Centiseconds of arc in one degree.
const CENTISECONDS_PER_DEGREE: f64 = 360_000.0;

pub type Latitude<'a> = Alphanumeric<'a, 9>;

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if blank or if the hemisphere is neither `N` nor `S`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let hem = self.first();
        let deg = parse_numeric!(2, u8, &self.0[1..3])? as f64;
        let min = parse_numeric!(2, u8, &self.0[3..5])? as f64;
        let sec = parse_numeric!(4, u32, &self.0[5..9])? as f64 / 100.0; // includes centiseconds

        let decimal = deg + min / 60.0 + sec / 3600.0;

        match hem {
            b'N' => Ok(decimal),
            b'S' => Ok(-decimal),
            _ => Err(Error::InvalidCharacter {
                field: "Latitude",
                byte: hem,
                expected: "N or S",
            }),
        }
    }
}

pub type Longitude<'a> = Alphanumeric<'a, 10>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// # Errors
    ///
    /// Returns an error if blank or if the hemisphere is neither `W` nor `E`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let hem = self.first();
        let deg = parse_numeric!(3, u8, &self.0[1..4])? as f64;
        let min = parse_numeric!(2, u8, &self.0[4..6])? as f64;
        let sec = parse_numeric!(4, u32, &self.0[6..10])? as f64 / 100.0; // includes centiseconds

        let decimal = deg + min / 60.0 + sec / 3600.0;

        match hem {
            b'E' => Ok(decimal),
            b'W' => Ok(-decimal),
            _ => Err(Error::InvalidCharacter {
                field: "Longitude",
                byte: hem,
                expected: "E or W",
            }),
        }
    }
}

/// Splits a decimal angle into degrees, minutes and centiseconds.
fn dms(decimal: f64) -> (u32, u32, u32) {
    let total = (decimal.abs() * CENTISECONDS_PER_DEGREE).round() as u32;
    (total / 360_000, total / 6_000 % 60, total % 6_000)
}

/// Encodes a decimal latitude as `[N|S]DDMMSSss`.
///
/// The value is rounded to the closest centisecond.
pub fn encode_latitude(decimal: f64) -> String {
    let hem = if decimal < 0.0 { 'S' } else { 'N' };
    let (deg, min, cs) = dms(decimal);
    format!("{hem}{deg:02}{min:02}{cs:04}")
}

/// Encodes a decimal longitude as `[E|W]DDDMMSSss`.
///
/// The value is rounded to the closest centisecond.
pub fn encode_longitude(decimal: f64) -> String {
    let hem = if decimal < 0.0 { 'W' } else { 'E' };
    let (deg, min, cs) = dms(decimal);
    format!("{hem}{deg:03}{min:02}{cs:04}")
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_latitude() {
        let lat = Latitude::from_bytes(b"N40394857").expect("latitude should parse");
        assert_eq!(lat.as_decimal(), Ok(40.663491666666665));
    }

    #[test]
    fn parses_longitude() {
        let long = Longitude::from_bytes(b"W0741444230").expect("longitude should parse");
        assert_eq!(long.as_decimal(), Ok(-74.24561944444444));
    }

    #[test]
    fn blank_coordinate_is_none() {
        let lat = Option::<Latitude>::from_bytes(b"         ").expect("blank should parse");
        assert!(lat.is_none());
    }

    #[test]
    fn southern_and_eastern_hemisphere() {
        let lat = Latitude::from_bytes(b"S33563400").expect("latitude should parse");
        let lon = Longitude::from_bytes(b"E151103500").expect("longitude should parse");
        assert!(lat.as_decimal().is_ok_and(|lat| (lat + 33.94277777).abs() < 1e-6));
        assert!(lon.as_decimal().is_ok_and(|lon| (lon - 151.17638888).abs() < 1e-6));
    }

    #[test]
    fn encoded_coordinates_parse_to_the_same_value() {
        for field in ["N38421448", "S00000001", "N89595999", "S45300000"] {
            let lat = Latitude::from_bytes(field.as_bytes())
                .and_then(|lat| lat.as_decimal())
                .expect("latitude should parse");
            let encoded = encode_latitude(lat);
            assert_eq!(encoded, field);

            let decoded = Latitude::from_bytes(encoded.as_bytes())
                .and_then(|lat| lat.as_decimal())
                .expect("encoded latitude should parse");
            assert!((decoded - lat).abs() < 1e-6);
        }

        for field in ["W101282608", "E000000001", "E179595999", "W073464329"] {
            let lon = Longitude::from_bytes(field.as_bytes())
                .and_then(|lon| lon.as_decimal())
                .expect("longitude should parse");
            assert_eq!(encode_longitude(lon), field);
        }
    }
}
