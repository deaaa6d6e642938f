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

//! Navigation Data.
//!
//! The navigation data holds the points, airways, procedures and airspace
//! boundaries decoded from an ARINC 424 feed. It is built once with the
//! [`NavigationDataBuilder`] and read-only afterwards, which allows tracks
//! and polygons to be synthesized from a shared reference.

use std::collections::{BTreeMap, HashMap};

use geo::Polygon;
use log::warn;

use crate::constants::{FEET_IN_METER, NAUTICAL_MILE_IN_METER};
use crate::error::Error;
use crate::geom::forward_true;

mod airspace;
mod airway;
mod builder;
mod convert;
mod fix;
mod point;
mod procedure;
mod registry;

pub use airspace::{
    Airspace, AirspaceClassification, AirspaceKey, AirspaceSection, AirspaceShape, AirspaceType,
    BoundarySegment,
};
pub use airway::{Airway, AirwayFix, AirwayPoint};
pub use builder::NavigationDataBuilder;
pub use fix::{FixRef, FixSection};
pub use point::{runway_polygon, Point, PointKind, RunwayGeometry};
pub use procedure::{Bucket, Leg, Procedure, ProcedureKey, ProcedureKind, TransitionKey};
pub use registry::PointRegistry;

/// The points that belong to an airport.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TerminalArea {
    pub waypoints: PointRegistry,
    pub runways: PointRegistry,
    pub localizers: PointRegistry,
    pub ndbs: PointRegistry,
}

impl TerminalArea {
    /// Returns the runway by its identifier, e.g. `RW04L`.
    ///
    /// Procedures for parallel runways use the suffix `B` for both. Those
    /// resolve to the left, right or center runway, whichever exists first.
    pub fn runway(&self, ident: &str) -> Option<&Point> {
        let ident = ident.trim();

        self.runways.get(ident).or_else(|| {
            let base = ident.strip_suffix('B')?;
            ["L", "R", "C"]
                .iter()
                .find_map(|side| self.runways.get(&format!("{base}{side}")))
        })
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct NavigationData {
    navaids: PointRegistry,
    ndbs: PointRegistry,
    waypoints: PointRegistry,
    airports: PointRegistry,
    terminal_areas: HashMap<String, TerminalArea>,
    airways: BTreeMap<String, Airway>,
    procedures: BTreeMap<ProcedureKey, Procedure>,
    airspaces: Vec<AirspaceShape>,
    errors: Vec<Error>,
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> NavigationDataBuilder {
        NavigationDataBuilder::new()
    }

    /// VHF navaids (VOR, DME, TACAN and their combinations).
    pub fn navaids(&self) -> &PointRegistry {
        &self.navaids
    }

    /// Enroute NDBs.
    pub fn ndbs(&self) -> &PointRegistry {
        &self.ndbs
    }

    /// Enroute waypoints.
    pub fn waypoints(&self) -> &PointRegistry {
        &self.waypoints
    }

    pub fn airports(&self) -> &PointRegistry {
        &self.airports
    }

    pub fn terminal_area(&self, airport: &str) -> Option<&TerminalArea> {
        self.terminal_areas
            .get(airport)
            .or_else(|| self.terminal_areas.get(airport.trim()))
    }

    pub fn airway(&self, ident: &str) -> Option<&Airway> {
        self.airways.get(ident.trim())
    }

    pub fn airways(&self) -> impl Iterator<Item = &Airway> {
        self.airways.values()
    }

    pub fn procedure(&self, airport: &str, ident: &str, kind: ProcedureKind) -> Option<&Procedure> {
        self.procedures.get(&ProcedureKey {
            airport: airport.trim().to_string(),
            kind,
            ident: ident.trim().to_string(),
        })
    }

    /// Returns all procedures ordered by airport, kind and identifier.
    pub fn procedures(&self) -> impl Iterator<Item = &Procedure> {
        self.procedures.values()
    }

    pub fn airspaces(&self) -> &[AirspaceShape] {
        self.airspaces.as_slice()
    }

    /// Returns the errors of records that were skipped while decoding.
    pub fn errors(&self) -> &[Error] {
        self.errors.as_slice()
    }

    /// Resolves a fix reference.
    ///
    /// Points of terminal sections are looked up in the terminal area of the
    /// `airport`. Returns `None` if there is no such point, which is the
    /// case for fixes outside the area the navigation data covers.
    pub fn resolve(&self, fix: &FixRef, airport: &str) -> Option<&Point> {
        let ident = fix.ident.as_str();

        match fix.section {
            FixSection::VhfNavaid => self.navaids.get(ident),
            FixSection::Ndb => self.ndbs.get(ident),
            FixSection::EnrouteWaypoint => self.waypoints.get(ident),
            FixSection::Airport => self.airports.get(ident),
            FixSection::TerminalWaypoint => self.terminal_area(airport)?.waypoints.get(ident),
            FixSection::Runway => self.terminal_area(airport)?.runway(ident),
            FixSection::Localizer => self.terminal_area(airport)?.localizers.get(ident),
            FixSection::TerminalNdb => self.terminal_area(airport)?.ndbs.get(ident),
        }
    }

    /// Returns the departure end of a runway and the runway's true bearing.
    ///
    /// The departure end is the threshold projected along the runway by its
    /// length. Without the runway, the airport's reference point is returned
    /// with no bearing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedFixReference`] if neither the runway nor
    /// the airport is known.
    pub fn departure_end(
        &self,
        airport: &str,
        runway: Option<&str>,
    ) -> Result<(geo::Point<f64>, Option<f64>), Error> {
        let threshold = runway
            .and_then(|rwy| self.terminal_area(airport)?.runway(rwy))
            .and_then(|rwy| rwy.runway.as_ref().map(|geometry| (rwy, geometry)));

        match threshold {
            Some((rwy, geometry)) => {
                let length_nm = geometry.length_ft as f64 * FEET_IN_METER / NAUTICAL_MILE_IN_METER;
                Ok((
                    forward_true(rwy.position, geometry.bearing, length_nm),
                    Some(geometry.bearing),
                ))
            }
            None => {
                warn!(
                    "no departure end of runway {} at {airport}, using the airport reference point",
                    runway.unwrap_or("-")
                );
                self.airports
                    .get(airport)
                    .map(|arpt| (arpt.position, None))
                    .ok_or_else(|| Error::UnresolvedFixReference(airport.to_string()))
            }
        }
    }

    /// Returns the outline of a runway.
    ///
    /// The opposite threshold is the runway's reciprocal or, if the
    /// navigation data lacks it, the departure end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedFixReference`] for an unknown runway and
    /// [`Error::FieldFormat`] if neither direction has a width.
    pub fn runway_polygon(&self, airport: &str, runway: &str) -> Result<Polygon<f64>, Error> {
        let unresolved = || Error::UnresolvedFixReference(format!("{airport} {runway}"));

        let area = self.terminal_area(airport).ok_or_else(unresolved)?;
        let rwy = area.runway(runway).ok_or_else(unresolved)?;
        let geometry = rwy.runway.as_ref().ok_or_else(unresolved)?;

        let opposite = geometry
            .reciprocal
            .as_deref()
            .and_then(|ident| area.runway(ident));

        let width_ft = geometry
            .width_ft
            .or_else(|| opposite.and_then(|o| o.runway.as_ref()?.width_ft))
            .ok_or_else(|| Error::FieldFormat(format!("{airport} {runway} has no width")))?;

        let opposite_threshold = match opposite {
            Some(o) => o.position,
            None => self.departure_end(airport, Some(runway))?.0,
        };

        runway_polygon(rwy.position, opposite_threshold, width_ft as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runway(ident: &str, position: geo::Point<f64>, bearing: f64) -> Point {
        let mut rwy = Point::new(ident, PointKind::Runway, position);
        rwy.runway = Some(RunwayGeometry {
            length_ft: 6000,
            bearing,
            width_ft: Some(150),
            displaced_threshold_ft: None,
            threshold_crossing_height_ft: None,
            reciprocal: None,
        });
        rwy
    }

    fn nd() -> NavigationData {
        let mut builder = NavigationData::builder();
        builder.add_airport(Point::new("KGCK", PointKind::Airport, coord!(37.927, -100.724)));
        builder.add_runway("KGCK", runway("RW14", coord!(37.935, -100.731), 135.0));
        builder.add_runway("KGCK", runway("RW32L", coord!(37.92, -100.71), 315.0));
        builder.add_terminal_waypoint(
            "KGCK",
            Point::new("CIDEB", PointKind::TerminalWaypoint, coord!(38.0, -100.8)),
        );
        builder.build()
    }

    #[test]
    fn resolves_terminal_fixes_by_airport() {
        let nd = nd();
        let fix = FixRef::new("CIDEB", FixSection::TerminalWaypoint);

        assert!(nd.resolve(&fix, "KGCK").is_some());
        assert!(nd.resolve(&fix, "KDDC").is_none());
        assert!(nd.resolve(&fix, "").is_none());
    }

    #[test]
    fn both_parallel_runways() {
        let nd = nd();
        let area = nd.terminal_area("KGCK").expect("airport should have terminal area");

        assert_eq!(area.runway("RW32B").map(|p| p.ident.as_str()), Some("RW32L"));
        assert!(area.runway("RW14B").is_none());
    }

    #[test]
    fn departure_end_is_opposite_threshold() {
        let nd = nd();
        let (end, bearing) = nd
            .departure_end("KGCK", Some("RW14"))
            .expect("runway should be known");

        assert_eq!(bearing, Some(135.0));
        let length_nm = 6000.0 * FEET_IN_METER / NAUTICAL_MILE_IN_METER;
        assert!((crate::geom::distance_nm(coord!(37.935, -100.731), end) - length_nm).abs() < 1e-6);
    }

    #[test]
    fn departure_end_falls_back_to_airport() {
        let nd = nd();

        assert_eq!(
            nd.departure_end("KGCK", Some("RW08")),
            Ok((coord!(37.927, -100.724), None))
        );
        assert!(matches!(
            nd.departure_end("KDDC", None),
            Err(Error::UnresolvedFixReference(_))
        ));
    }

    #[test]
    fn runway_outline_without_reciprocal() {
        let nd = nd();
        let polygon = nd.runway_polygon("KGCK", "RW14").expect("runway should build");

        assert_eq!(polygon.exterior().0.len(), 5);
    }
}
