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

use std::collections::HashMap;

use log::warn;

use super::*;

/// Navigation data factory, which is used to build [navigation data].
///
/// Records are added in the order of the feed. Legs of a transition and
/// segments of an airspace boundary must come in ascending sequence.
///
/// [navigation data]: super::NavigationData
#[derive(Default)]
pub struct NavigationDataBuilder {
    navaids: PointRegistry,
    ndbs: PointRegistry,
    waypoints: PointRegistry,
    airports: PointRegistry,
    terminal_areas: HashMap<String, TerminalArea>,
    airways: BTreeMap<String, Airway>,
    procedures: BTreeMap<ProcedureKey, Procedure>,
    airspaces: Vec<AirspaceShape>,
    airspace_index: HashMap<AirspaceKey, usize>,
    errors: Vec<Error>,
}

impl NavigationDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> NavigationData {
        NavigationData {
            navaids: self.navaids,
            ndbs: self.ndbs,
            waypoints: self.waypoints,
            airports: self.airports,
            terminal_areas: self.terminal_areas,
            airways: self.airways,
            procedures: self.procedures,
            airspaces: self.airspaces,
            errors: self.errors,
        }
    }

    pub fn add_navaid(&mut self, navaid: Point) {
        self.navaids.add(navaid);
    }

    pub fn add_ndb(&mut self, ndb: Point) {
        self.ndbs.add(ndb);
    }

    pub fn add_waypoint(&mut self, wp: Point) {
        self.waypoints.add(wp);
    }

    pub fn add_airport(&mut self, arpt: Point) {
        self.airports.add(arpt);
    }

    pub fn add_terminal_waypoint(&mut self, airport: &str, wp: Point) {
        self.terminal_area(airport).waypoints.add(wp);
    }

    pub fn add_runway(&mut self, airport: &str, rwy: Point) {
        self.terminal_area(airport).runways.add(rwy);
    }

    pub fn add_localizer(&mut self, airport: &str, loc: Point) {
        self.terminal_area(airport).localizers.add(loc);
    }

    pub fn add_terminal_ndb(&mut self, airport: &str, ndb: Point) {
        self.terminal_area(airport).ndbs.add(ndb);
    }

    /// Appends the fix to its airway.
    ///
    /// # Errors
    ///
    /// Returns an error if the fix is out of sequence.
    pub fn add_airway_fix(&mut self, airway: &str, fix: AirwayFix) -> Result<(), Error> {
        self.airways
            .entry(airway.to_string())
            .or_insert_with(|| Airway::new(airway))
            .add_fix(fix)
    }

    /// Appends the leg to the transition of its procedure.
    ///
    /// # Errors
    ///
    /// Returns an error if the leg is out of sequence.
    pub fn add_leg(
        &mut self,
        procedure: ProcedureKey,
        transition: TransitionKey,
        leg: Leg,
    ) -> Result<(), Error> {
        self.procedures
            .entry(procedure)
            .or_insert_with_key(|key| Procedure::new(&key.airport, &key.ident, key.kind))
            .add_leg(transition, leg)
    }

    /// Appends the segment to the airspace's boundary.
    ///
    /// The `airspace` metadata is taken from the first segment of a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is out of sequence.
    pub fn add_boundary_segment(
        &mut self,
        key: AirspaceKey,
        airspace: Airspace,
        segment: BoundarySegment,
    ) -> Result<(), Error> {
        let i = match self.airspace_index.get(&key) {
            Some(&i) => i,
            None => {
                self.airspaces
                    .push(AirspaceShape::new(key.clone(), airspace));
                self.airspace_index.insert(key, self.airspaces.len() - 1);
                self.airspaces.len() - 1
            }
        };

        self.airspaces[i].add_segment(segment)
    }

    /// Sets the controlling agency of an airspace from a continuation.
    pub fn set_controlling_agency(&mut self, key: &AirspaceKey, agency: &str) {
        match self.airspace_index.get(key) {
            Some(&i) => self.airspaces[i].set_controlling_agency(agency),
            None => warn!("continuation of unknown airspace {key}"),
        }
    }

    /// Returns an airport that has been added already.
    pub fn airport(&self, ident: &str) -> Option<&Point> {
        self.airports.get(ident)
    }

    pub fn add_error<E>(&mut self, e: E)
    where
        E: Into<Error>,
    {
        self.errors.push(e.into());
    }

    fn terminal_area(&mut self, airport: &str) -> &mut TerminalArea {
        self.terminal_areas.entry(airport.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use arinc424::fields::{BoundaryPath, PathTerm};

    use super::*;

    #[test]
    fn groups_legs_by_procedure() {
        let mut builder = NavigationDataBuilder::new();
        let key = ProcedureKey {
            airport: String::from("KJFK"),
            kind: ProcedureKind::Approach,
            ident: String::from("R04L"),
        };
        let common = TransitionKey::new(Bucket::CommonRoute, "");

        builder
            .add_leg(key.clone(), common.clone(), Leg::new(10, PathTerm::IF))
            .unwrap();
        builder
            .add_leg(key.clone(), common.clone(), Leg::new(20, PathTerm::TF))
            .unwrap();

        let nd = builder.build();
        let procedure = nd
            .procedure("KJFK", "R04L", ProcedureKind::Approach)
            .expect("procedure should exist");
        assert_eq!(procedure.legs(&common).map(<[Leg]>::len), Some(2));
    }

    #[test]
    fn continuation_sets_agency() {
        let mut builder = NavigationDataBuilder::new();
        let key = AirspaceKey {
            icao: String::from("K1"),
            section: AirspaceSection::Restrictive,
            type_code: 'M',
            designation: String::from("EEL A"),
            multiple_code: 'A',
        };

        builder
            .add_boundary_segment(
                key.clone(),
                Airspace::new("EEL A MOA", AirspaceType::MOA),
                BoundarySegment {
                    seq_nr: 10,
                    path: BoundaryPath::GreatCircle,
                    point: Some(coord!(46.0, -124.0)),
                    arc_center: None,
                    arc_radius_nm: None,
                    shape_end: false,
                },
            )
            .unwrap();
        builder.set_controlling_agency(&key, "FAA SEATTLE ARTCC");

        let nd = builder.build();
        assert_eq!(nd.airspaces().len(), 1);
        assert_eq!(
            nd.airspaces()[0].airspace().controlling_agency.as_deref(),
            Some("FAA SEATTLE ARTCC")
        );
    }
}
