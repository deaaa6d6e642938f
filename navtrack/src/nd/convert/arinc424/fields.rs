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

use arinc424::fields;
use arinc424::Alphanumeric;

use crate::core::VerticalDistance;
use crate::error::Error;
use crate::geom::TurnDirection;
use crate::nd::*;

/// Returns the position as [`geo::Point`] with the longitude as `x`.
pub(super) fn lat_lon_to_point(
    lat: fields::Latitude,
    lon: fields::Longitude,
) -> Result<geo::Point<f64>, arinc424::Error> {
    Ok(geo::Point::new(lon.as_decimal()?, lat.as_decimal()?))
}

/// Returns the position if both coordinates are given.
pub(super) fn optional_point(
    lat: Option<fields::Latitude>,
    lon: Option<fields::Longitude>,
) -> Result<Option<geo::Point<f64>>, arinc424::Error> {
    lat.zip(lon)
        .map(|(lat, lon)| lat_lon_to_point(lat, lon))
        .transpose()
}

/// Returns the declination with east negative.
pub(super) fn declination(mag_var: Option<fields::MagVar>) -> Option<f64> {
    mag_var.map(|v| v.as_decimal())
}

pub(super) fn turn_direction(turn_dir: fields::TurnDir) -> Option<TurnDirection> {
    match turn_dir {
        fields::TurnDir::Left => Some(TurnDirection::CounterClockwise),
        fields::TurnDir::Right => Some(TurnDirection::Clockwise),
        fields::TurnDir::Either => None,
    }
}

/// Returns the section of a fix from its two letter section code.
pub(super) fn fix_section(code: Alphanumeric<'_, 2>) -> Result<FixSection, Error> {
    let bytes = code.as_bytes();
    FixSection::from_code(bytes[0], bytes[1])
}

/// Returns the reference to a fix if it has an identifier.
///
/// # Errors
///
/// Returns [`Error::FieldFormat`] if there is an identifier without a
/// section.
pub(super) fn fix_ref<const N: usize>(
    ident: Option<Alphanumeric<'_, N>>,
    section: Option<Alphanumeric<'_, 2>>,
) -> Result<Option<FixRef>, Error> {
    match (ident, section) {
        (Some(ident), Some(section)) => Ok(Some(FixRef::new(
            ident.as_str(),
            fix_section(section)?,
        ))),
        (Some(ident), None) => Err(Error::FieldFormat(format!(
            "fix {} has no section code",
            ident.as_str()
        ))),
        (None, _) => Ok(None),
    }
}

pub(super) fn vertical_distance(
    limit: fields::LowerUpperLimit,
    unit: Option<fields::UnitIndicator>,
) -> VerticalDistance {
    match (limit, unit) {
        (fields::LowerUpperLimit::Altitude(ft), Some(fields::UnitIndicator::AboveGroundLevel)) => {
            VerticalDistance::Agl(ft)
        }
        (fields::LowerUpperLimit::Altitude(ft), _) => VerticalDistance::Msl(ft),
        (fields::LowerUpperLimit::FlightLevel(fl), _) => VerticalDistance::Fl(fl),
        (fields::LowerUpperLimit::Ground, _) => VerticalDistance::Gnd,
        (fields::LowerUpperLimit::MeanSeaLevel, _) => VerticalDistance::Msl(0),
        (fields::LowerUpperLimit::NOTAM, _) => VerticalDistance::Notam,
        (fields::LowerUpperLimit::Unlimited | fields::LowerUpperLimit::NotSpecified, _) => {
            VerticalDistance::Unlimited
        }
    }
}

impl From<fields::ArspType> for AirspaceType {
    fn from(value: fields::ArspType) -> Self {
        match value {
            fields::ArspType::ClassC => Self::ClassC,
            fields::ArspType::ControlArea => Self::CTA,
            fields::ArspType::TerminalControlArea => Self::TMA,
            fields::ArspType::RadarZone => Self::RadarZone,
            fields::ArspType::ClassB => Self::ClassB,
            fields::ArspType::RadioMandatoryZone => Self::RMZ,
            fields::ArspType::TransponderMandatoryZone => Self::TMZ,
            fields::ArspType::ControlZone => Self::CTR,
        }
    }
}

impl From<fields::RestrictiveType> for AirspaceType {
    fn from(value: fields::RestrictiveType) -> Self {
        match value {
            fields::RestrictiveType::Alert => Self::Alert,
            fields::RestrictiveType::Caution => Self::Caution,
            fields::RestrictiveType::Danger => Self::Danger,
            fields::RestrictiveType::LongTermTFR => Self::LongTermTFR,
            fields::RestrictiveType::MOA => Self::MOA,
            fields::RestrictiveType::NationalSecurityArea => Self::NationalSecurityArea,
            fields::RestrictiveType::Prohibited => Self::Prohibited,
            fields::RestrictiveType::Restricted => Self::Restricted,
            fields::RestrictiveType::Training => Self::Training,
            fields::RestrictiveType::Warning => Self::Warning,
            fields::RestrictiveType::UnspecifiedOrUnknown => Self::Unspecified,
        }
    }
}

/// The type code of controlled airspace as it is coded in the records.
pub(super) fn controlled_type_code(value: fields::ArspType) -> char {
    match value {
        fields::ArspType::ClassC => 'A',
        fields::ArspType::ControlArea => 'C',
        fields::ArspType::TerminalControlArea => 'M',
        fields::ArspType::RadarZone => 'R',
        fields::ArspType::ClassB => 'T',
        fields::ArspType::RadioMandatoryZone => 'U',
        fields::ArspType::TransponderMandatoryZone => 'V',
        fields::ArspType::ControlZone => 'Z',
    }
}

/// The type code of restrictive airspace as it is coded in the records.
pub(super) fn restrictive_type_code(value: fields::RestrictiveType) -> char {
    match value {
        fields::RestrictiveType::Alert => 'A',
        fields::RestrictiveType::Caution => 'C',
        fields::RestrictiveType::Danger => 'D',
        fields::RestrictiveType::LongTermTFR => 'L',
        fields::RestrictiveType::MOA => 'M',
        fields::RestrictiveType::NationalSecurityArea => 'N',
        fields::RestrictiveType::Prohibited => 'P',
        fields::RestrictiveType::Restricted => 'R',
        fields::RestrictiveType::Training => 'T',
        fields::RestrictiveType::Warning => 'W',
        fields::RestrictiveType::UnspecifiedOrUnknown => 'U',
    }
}

#[cfg(test)]
mod tests {
    use arinc424::FixedField;

    use super::*;

    #[test]
    fn east_variation_is_negative() {
        let east = fields::MagVar::from_bytes(b"E0130").ok();
        let west = fields::MagVar::from_bytes(b"W0060").ok();

        assert_eq!(declination(east), Some(-13.0));
        assert_eq!(declination(west), Some(6.0));
        assert_eq!(declination(None), None);
    }

    #[test]
    fn limits_with_unit() {
        assert_eq!(
            vertical_distance(
                fields::LowerUpperLimit::Altitude(1500),
                Some(fields::UnitIndicator::AboveGroundLevel)
            ),
            VerticalDistance::Agl(1500)
        );
        assert_eq!(
            vertical_distance(
                fields::LowerUpperLimit::Altitude(11000),
                Some(fields::UnitIndicator::MeanSeaLevel)
            ),
            VerticalDistance::Msl(11000)
        );
        assert_eq!(
            vertical_distance(fields::LowerUpperLimit::FlightLevel(180), None),
            VerticalDistance::Fl(180)
        );
    }

    #[test]
    fn fix_without_section_is_an_error() {
        let ident = Alphanumeric::<5>::from_bytes(b"CRI  ").ok();
        let section = Alphanumeric::<2>::from_bytes(b"PC").ok();

        assert_eq!(
            fix_ref(ident, section),
            Ok(Some(FixRef::new("CRI", FixSection::TerminalWaypoint)))
        );
        assert!(fix_ref(ident, None).is_err());
        assert_eq!(fix_ref::<5>(None, None), Ok(None));
    }
}
