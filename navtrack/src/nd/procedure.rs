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

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use arinc424::fields::{AltitudeDescription, Course, FixFunction, PathTerm, RouteDistance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{FixRef, NavigationData};
use crate::error::Error;
use crate::geom::TurnDirection;
use crate::track::{synthesize, Track, TrackOptions};

/// The kind of a terminal procedure.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcedureKind {
    /// Standard Instrument Departure
    Sid,
    /// Standard Terminal Arrival Route
    Star,
    Approach,
}

/// The part of a procedure a transition belongs to.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bucket {
    RunwayTransition,
    CommonRoute,
    EnrouteTransition,
    ApproachTransition,
}

impl Bucket {
    /// Returns the bucket of a procedure's route type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldFormat`] if the route type is not defined for
    /// the kind of procedure.
    pub fn from_route_type(kind: ProcedureKind, route_type: u8) -> Result<Self, Error> {
        match (kind, route_type) {
            (ProcedureKind::Sid, b'0' | b'1' | b'4' | b'F' | b'T') => Ok(Self::RunwayTransition),
            (ProcedureKind::Sid, b'2' | b'5' | b'M') => Ok(Self::CommonRoute),
            (ProcedureKind::Sid, b'3' | b'6' | b'S' | b'V') => Ok(Self::EnrouteTransition),
            (ProcedureKind::Star, b'1' | b'4' | b'7' | b'F') => Ok(Self::EnrouteTransition),
            (ProcedureKind::Star, b'2' | b'5' | b'8' | b'M') => Ok(Self::CommonRoute),
            (ProcedureKind::Star, b'3' | b'6' | b'9' | b'S') => Ok(Self::RunwayTransition),
            (ProcedureKind::Approach, b'A') => Ok(Self::ApproachTransition),
            (ProcedureKind::Approach, b'B'..=b'Z') => Ok(Self::CommonRoute),
            (kind, route_type) => Err(Error::FieldFormat(format!(
                "route type {} is not defined for {kind:?}",
                route_type as char
            ))),
        }
    }
}

/// Identifies one transition of a procedure.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitionKey {
    pub bucket: Bucket,
    /// The transition identifier, e.g. a runway `RW04L` or an enroute fix.
    /// Empty for common routes without identifier.
    pub ident: String,
}

impl TransitionKey {
    pub fn new(bucket: Bucket, ident: impl Into<String>) -> Self {
        Self {
            bucket,
            ident: ident.into(),
        }
    }

    /// Returns the runway designator if the transition is for a runway.
    pub fn runway(&self) -> Option<&str> {
        self.ident.starts_with("RW").then_some(self.ident.as_str())
    }
}

impl Display for TransitionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {}", self.bucket, self.ident)
    }
}

/// Identifies a procedure of an airport.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ProcedureKey {
    pub airport: String,
    pub kind: ProcedureKind,
    pub ident: String,
}

/// A procedure leg.
#[derive(Clone, PartialEq, Debug)]
pub struct Leg {
    pub seq_nr: u16,
    pub path_term: PathTerm,
    pub fix: Option<FixRef>,
    /// The required turn direction or `None` if either way.
    pub turn_direction: Option<TurnDirection>,
    pub recommended_navaid: Option<FixRef>,
    /// Center of constant radius arcs.
    pub center_fix: Option<FixRef>,
    pub arc_radius_nm: Option<f64>,
    /// Magnetic bearing of the fix from the recommended navaid.
    pub theta: Option<f64>,
    /// Distance of the fix from the recommended navaid.
    pub rho_nm: Option<f64>,
    pub course: Option<Course>,
    pub distance: Option<RouteDistance>,
    pub altitude_description: AltitudeDescription,
    pub altitude_ft: Option<u32>,
    pub altitude2_ft: Option<u32>,
    pub speed_limit_kt: Option<u16>,
    pub fly_over: bool,
    pub fix_function: Option<FixFunction>,
    /// The leg is the first of the missed approach.
    pub missed_approach_start: bool,
}

impl Leg {
    /// Creates a leg without any constraints.
    pub fn new(seq_nr: u16, path_term: PathTerm) -> Self {
        Self {
            seq_nr,
            path_term,
            fix: None,
            turn_direction: None,
            recommended_navaid: None,
            center_fix: None,
            arc_radius_nm: None,
            theta: None,
            rho_nm: None,
            course: None,
            distance: None,
            altitude_description: AltitudeDescription::At,
            altitude_ft: None,
            altitude2_ft: None,
            speed_limit_kt: None,
            fly_over: false,
            fix_function: None,
            missed_approach_start: false,
        }
    }
}

impl Display for Leg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.fix {
            Some(fix) => write!(f, "{:03} {} {}", self.seq_nr, self.path_term, fix),
            None => write!(f, "{:03} {}", self.seq_nr, self.path_term),
        }
    }
}

/// A SID, STAR or approach of an airport.
///
/// The legs are grouped by transition with each transition's legs in
/// ascending sequence.
#[derive(Clone, PartialEq, Debug)]
pub struct Procedure {
    airport: String,
    ident: String,
    kind: ProcedureKind,
    transitions: BTreeMap<TransitionKey, Vec<Leg>>,
}

impl Procedure {
    pub fn new(airport: impl Into<String>, ident: impl Into<String>, kind: ProcedureKind) -> Self {
        Self {
            airport: airport.into(),
            ident: ident.into(),
            kind,
            transitions: BTreeMap::new(),
        }
    }

    pub fn airport(&self) -> &str {
        &self.airport
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn kind(&self) -> ProcedureKind {
        self.kind
    }

    /// Returns the transitions with their legs.
    pub fn transitions(&self) -> impl Iterator<Item = (&TransitionKey, &[Leg])> {
        self.transitions.iter().map(|(k, legs)| (k, legs.as_slice()))
    }

    pub fn legs(&self, key: &TransitionKey) -> Option<&[Leg]> {
        self.transitions.get(key).map(Vec::as_slice)
    }

    /// Appends the leg to its transition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldFormat`] if the leg's sequence number doesn't
    /// follow the last leg of the transition. The leg is not added.
    pub fn add_leg(&mut self, key: TransitionKey, leg: Leg) -> Result<(), Error> {
        let legs = self.transitions.entry(key).or_default();

        match legs.last() {
            Some(last) if last.seq_nr >= leg.seq_nr => Err(Error::FieldFormat(format!(
                "{} leg {} follows {}",
                self.ident, leg.seq_nr, last.seq_nr
            ))),
            _ => {
                legs.push(leg);
                Ok(())
            }
        }
    }

    /// Builds the track of one transition.
    ///
    /// The `elevation_ft` is the altitude climbs start from and defaults to
    /// the airport's elevation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTransition`] if the procedure has no such
    /// transition or any error raised while constructing its legs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use navtrack::nd::{NavigationData, ProcedureKind};
    /// # use navtrack::{Error, TrackOptions};
    /// # fn tracks(nd: &NavigationData) -> Result<(), Error> {
    /// if let Some(sid) = nd.procedure("KJFK", "DEEZZ5", ProcedureKind::Sid) {
    ///     for (key, _) in sid.transitions() {
    ///         let track = sid.build_track(key, nd, None, &TrackOptions::default())?;
    ///         println!("{key}: {} fixes", track.len());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_track(
        &self,
        key: &TransitionKey,
        nd: &NavigationData,
        elevation_ft: Option<f64>,
        options: &TrackOptions,
    ) -> Result<Track, Error> {
        let legs = self
            .legs(key)
            .ok_or_else(|| Error::UnknownTransition(format!("{} {key}", self.ident)))?;

        synthesize(self, key, legs, nd, elevation_ft, options)
    }

    /// Builds the tracks of all transitions.
    ///
    /// Each transition is built on its own so that an error in one does not
    /// affect the others.
    pub fn build_tracks(
        &self,
        nd: &NavigationData,
        elevation_ft: Option<f64>,
        options: &TrackOptions,
    ) -> Vec<(TransitionKey, Result<Track, Error>)> {
        self.transitions
            .iter()
            .map(|(key, legs)| {
                (
                    key.clone(),
                    synthesize(self, key, legs, nd, elevation_ft, options),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_route_type() {
        assert_eq!(
            Bucket::from_route_type(ProcedureKind::Sid, b'5'),
            Ok(Bucket::CommonRoute)
        );
        assert_eq!(
            Bucket::from_route_type(ProcedureKind::Star, b'3'),
            Ok(Bucket::RunwayTransition)
        );
        assert_eq!(
            Bucket::from_route_type(ProcedureKind::Approach, b'A'),
            Ok(Bucket::ApproachTransition)
        );
        assert_eq!(
            Bucket::from_route_type(ProcedureKind::Approach, b'R'),
            Ok(Bucket::CommonRoute)
        );
        assert!(Bucket::from_route_type(ProcedureKind::Star, b'A').is_err());
    }

    #[test]
    fn rejects_legs_out_of_sequence() {
        let mut procedure = Procedure::new("KJFK", "R04L", ProcedureKind::Approach);
        let key = TransitionKey::new(Bucket::CommonRoute, "");

        assert!(procedure.add_leg(key.clone(), Leg::new(10, PathTerm::IF)).is_ok());
        assert!(procedure.add_leg(key.clone(), Leg::new(20, PathTerm::TF)).is_ok());
        assert!(procedure.add_leg(key.clone(), Leg::new(20, PathTerm::TF)).is_err());
        assert!(procedure.add_leg(key.clone(), Leg::new(15, PathTerm::TF)).is_err());

        assert_eq!(procedure.legs(&key).map(<[Leg]>::len), Some(2));
    }

    #[test]
    fn runway_of_transition() {
        assert_eq!(
            TransitionKey::new(Bucket::RunwayTransition, "RW04L").runway(),
            Some("RW04L")
        );
        assert_eq!(TransitionKey::new(Bucket::CommonRoute, "").runway(), None);
    }
}
