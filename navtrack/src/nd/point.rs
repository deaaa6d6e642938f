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

use std::fmt::{Display, Formatter, Result};

use geo::{Coord, LineString, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::FEET_IN_METER;
use crate::error::Error;
use crate::geom::LocalFrame;

/// The kind of a navigational point, fixed when the point is decoded.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointKind {
    Vor,
    VorDme,
    Vortac,
    Dme,
    Tacan,
    Ndb,
    TerminalNdb,
    EnrouteWaypoint,
    TerminalWaypoint,
    Airport,
    Runway,
    /// Instrument Landing System localizer.
    Ils,
    /// Localizer without glide slope.
    Localizer,
    /// Localizer type directional aid.
    Lda,
    /// Simplified directional facility.
    Sdf,
    /// Instrument guidance system.
    Igs,
}

impl PointKind {
    /// Returns `true` for the localizer family.
    pub fn is_localizer(&self) -> bool {
        matches!(
            self,
            Self::Ils | Self::Localizer | Self::Lda | Self::Sdf | Self::Igs
        )
    }
}

impl Display for PointKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PointKind::Vor => write!(f, "VOR"),
            PointKind::VorDme => write!(f, "VOR-DME"),
            PointKind::Vortac => write!(f, "VORTAC"),
            PointKind::Dme => write!(f, "DME"),
            PointKind::Tacan => write!(f, "TACAN"),
            PointKind::Ndb => write!(f, "NDB"),
            PointKind::TerminalNdb => write!(f, "terminal NDB"),
            PointKind::EnrouteWaypoint => write!(f, "enroute waypoint"),
            PointKind::TerminalWaypoint => write!(f, "terminal waypoint"),
            PointKind::Airport => write!(f, "airport"),
            PointKind::Runway => write!(f, "runway"),
            PointKind::Ils => write!(f, "ILS"),
            PointKind::Localizer => write!(f, "LOC"),
            PointKind::Lda => write!(f, "LDA"),
            PointKind::Sdf => write!(f, "SDF"),
            PointKind::Igs => write!(f, "IGS"),
        }
    }
}

/// The geometry of a runway threshold.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayGeometry {
    /// Runway length in feet.
    pub length_ft: u32,
    /// True bearing of the runway.
    pub bearing: f64,
    pub width_ft: Option<u16>,
    pub displaced_threshold_ft: Option<u16>,
    pub threshold_crossing_height_ft: Option<u8>,
    /// Identifier of the opposite runway direction, e.g. `RW22R` for `RW04L`.
    pub reciprocal: Option<String>,
}

/// A navigational point.
///
/// Its position is a [`geo::Point`] with the longitude as `x` and latitude
/// as `y`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub ident: String,
    pub position: geo::Point<f64>,
    pub kind: PointKind,
    pub name: String,
    /// ICAO region of the point.
    pub icao: String,
    /// Frequency in MHz for VHF navaids and kHz for NDBs.
    pub frequency: Option<f64>,
    /// Magnetic variation or station declination with east negative.
    pub declination: Option<f64>,
    pub elevation_ft: Option<i32>,
    pub runway: Option<RunwayGeometry>,
    /// True bearing of the localizer course in approach direction.
    pub localizer_course: Option<f64>,
}

impl Point {
    pub fn new(ident: impl Into<String>, kind: PointKind, position: geo::Point<f64>) -> Self {
        Self {
            ident: ident.into(),
            position,
            kind,
            name: String::new(),
            icao: String::new(),
            frequency: None,
            declination: None,
            elevation_ft: None,
            runway: None,
            localizer_course: None,
        }
    }

    /// Returns the declination or zero if unknown.
    pub fn declination(&self) -> f64 {
        self.declination.unwrap_or_default()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({}) {:.6}/{:.6}",
            self.ident,
            self.kind,
            self.position.y(),
            self.position.x()
        )
    }
}

/// Returns the outline of a runway between its two thresholds.
///
/// The exterior ring has the four corners and repeats the first one.
///
/// # Errors
///
/// Returns [`Error::GeometryDegenerate`] if both thresholds are at the same
/// position.
pub fn runway_polygon(
    threshold: geo::Point<f64>,
    opposite_threshold: geo::Point<f64>,
    width_ft: f64,
) -> std::result::Result<Polygon<f64>, Error> {
    let frame = LocalFrame::new(threshold);
    let end = frame.to_local(opposite_threshold);
    let length = end.x.hypot(end.y);

    if length < 1.0 {
        return Err(Error::GeometryDegenerate("runway has no length"));
    }

    // half the width perpendicular to the centerline
    let half = width_ft * FEET_IN_METER / 2.0;
    let offset = Coord {
        x: end.y / length * half,
        y: -end.x / length * half,
    };

    let corners = [
        Coord::zero() + offset,
        end + offset,
        end - offset,
        Coord::zero() - offset,
    ];

    let mut ring: Vec<Coord<f64>> = corners
        .iter()
        .map(|c| frame.to_global(*c).into())
        .collect();
    ring.push(ring[0]);

    Ok(Polygon::new(LineString::from(ring), vec![]))
}

#[cfg(test)]
mod tests {
    use geo::{Area, Distance, Haversine};

    use super::*;

    #[test]
    fn runway_outline_has_four_corners() {
        let thr = coord!(40.62310556, -73.78506944);
        let opp = coord!(40.64435833, -73.76375556);

        let polygon = runway_polygon(thr, opp, 150.0).expect("runway should have a length");
        let ring = polygon.exterior();

        assert_eq!(ring.0.len(), 5);
        assert!(ring.is_closed());

        let width = Haversine.distance(geo::Point::from(ring.0[0]), geo::Point::from(ring.0[3]));
        assert!((width - 150.0 * FEET_IN_METER).abs() < 0.5);
        assert!(polygon.unsigned_area() > 0.0);
    }

    #[test]
    fn rejects_runway_without_length() {
        let thr = coord!(40.62310556, -73.78506944);

        assert_eq!(
            runway_polygon(thr, thr, 150.0),
            Err(Error::GeometryDegenerate("runway has no length"))
        );
    }
}
