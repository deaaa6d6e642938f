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

use arinc424::fields::{FixFunction, PathTerm, RouteDistance};
use log::{debug, trace};

use super::{Track, TrackFix, TrackOptions};
use crate::error::Error;
use crate::geom::{
    arc_path, bearing, build_hold, build_procedure_turn, build_tangent_to_fix, course_to_dme,
    distance_nm, find_intersection, forward_true, infer_turn, normalize_signed, std_rate_radius_m,
    true_course, turn_to_heading, TurnDirection,
};
use crate::nd::{FixRef, Leg, NavigationData, Point, Procedure, ProcedureKind, TransitionKey};

/// Points closer than this are the same point of a track.
const SAME_POINT_NM: f64 = 0.01;
/// Courses closer than this are joined without an intercept.
const SAME_COURSE_DEG: f64 = 1.0;
/// Time flown on the legs of a procedure turn.
const PROCEDURE_TURN_LEG_MIN: f64 = 1.0;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Phase {
    /// Legs before the first approach fix are skipped.
    Unarmed,
    Armed,
    /// The missed approach is reached.
    Done,
}

/// Builds the track of a transition's legs.
pub(crate) fn synthesize(
    procedure: &Procedure,
    key: &TransitionKey,
    legs: &[Leg],
    nd: &NavigationData,
    elevation_ft: Option<f64>,
    options: &TrackOptions,
) -> Result<Track, Error> {
    let airport = nd.airports().get(procedure.airport());

    let mut synthesizer = Synthesizer {
        nd,
        airport: procedure.airport(),
        kind: procedure.kind(),
        runway: key.runway(),
        options,
        radius_m: std_rate_radius_m(options.tas_kt),
        fixes: Vec::with_capacity(legs.len()),
        declination: airport.map(Point::declination).unwrap_or_default(),
        altitude: elevation_ft.or_else(|| airport?.elevation_ft.map(f64::from)),
        heading: None,
    };

    let phase = match procedure.kind() {
        ProcedureKind::Approach => Phase::Unarmed,
        ProcedureKind::Sid | ProcedureKind::Star => Phase::Armed,
    };

    let next_legs = legs.iter().skip(1).map(Some).chain(std::iter::once(None));
    let phase = legs
        .iter()
        .zip(next_legs)
        .try_fold(phase, |phase, (leg, next)| synthesizer.step(phase, leg, next))?;

    debug!(
        "built {} {key} with {} points ({phase:?})",
        procedure.ident(),
        synthesizer.fixes.len()
    );

    Ok(Track::new(synthesizer.fixes))
}

/// Returns `true` if `b` lies ahead of `a` on the true course.
fn ahead(a: geo::Point<f64>, b: geo::Point<f64>, course: f64) -> bool {
    distance_nm(a, b) > SAME_POINT_NM && normalize_signed(bearing(a, b) - course).abs() < 90.0
}

struct Synthesizer<'a> {
    nd: &'a NavigationData,
    airport: &'a str,
    kind: ProcedureKind,
    runway: Option<&'a str>,
    options: &'a TrackOptions,
    radius_m: f64,
    fixes: Vec<TrackFix>,
    declination: f64,
    altitude: Option<f64>,
    /// True heading at the end of the track.
    heading: Option<f64>,
}

impl<'a> Synthesizer<'a> {
    fn step(&mut self, phase: Phase, leg: &Leg, next: Option<&Leg>) -> Result<Phase, Error> {
        let include_missed = self.options.include_missed_approach;

        let phase = match phase {
            Phase::Unarmed if leg.fix_function.is_some_and(|f| f.is_approach_fix()) => {
                debug!("approach armed at {leg}");
                Phase::Armed
            }
            Phase::Armed if leg.missed_approach_start && !include_missed => {
                debug!("missed approach starts at {leg}");
                Phase::Done
            }
            phase => phase,
        };

        if phase != Phase::Armed {
            trace!("skipping {leg}");
            return Ok(phase);
        }

        self.update_declination(leg);

        let len = self.fixes.len();
        self.leg(leg, next)?;

        if let Some(altitude) = leg.altitude_ft.map(f64::from) {
            self.altitude = Some(altitude);
            if self.fixes.len() > len {
                if let Some(last) = self.fixes.last_mut() {
                    last.altitude_ft = Some(altitude);
                }
            }
        }

        match leg.fix_function {
            Some(FixFunction::MissedApproachPoint) if !include_missed => {
                debug!("approach ends at missed approach point {leg}");
                Ok(Phase::Done)
            }
            _ => Ok(Phase::Armed),
        }
    }

    fn leg(&mut self, leg: &Leg, next: Option<&Leg>) -> Result<(), Error> {
        trace!("building {leg}");

        match leg.path_term {
            PathTerm::IF => {
                let fix = self.fix(leg)?;
                self.join(fix, leg, "initial fix");
            }
            PathTerm::TF => {
                let fix = self.fix(leg)?;
                self.join(fix, leg, "track to fix");
            }
            PathTerm::CF => self.course_to_fix(leg)?,
            PathTerm::DF => self.direct_to_fix(leg)?,
            PathTerm::FA => {
                let fix = self.fix(leg)?;
                self.join(fix, leg, "fix");
                self.climb(leg)?;
            }
            PathTerm::CA | PathTerm::VA => self.climb(leg)?,
            PathTerm::FC => {
                let fix = self.fix(leg)?;
                let course = self.course(leg)?;
                let distance = self.distance_nm(leg)?;
                self.join(fix, leg, "fix");
                let start = self.turn_onto(leg, course)?;
                self.push(forward_true(start, course, distance), None, leg, "distance");
            }
            PathTerm::FM => {
                let fix = self.fix(leg)?;
                self.join(fix, leg, "fix");
                self.manual_termination(leg)?;
            }
            PathTerm::VM => self.manual_termination(leg)?,
            PathTerm::CD | PathTerm::VD => self.dme_distance(leg)?,
            PathTerm::CI | PathTerm::VI => self.intercept(leg, next)?,
            PathTerm::RF => {
                let center = self.required(leg.center_fix.as_ref(), leg, "arc center")?;
                self.arc(leg, center, leg.arc_radius_nm)?;
            }
            PathTerm::AF => {
                let navaid = self.navaid(leg)?;
                self.arc(leg, navaid, leg.rho_nm)?;
            }
            PathTerm::VR => self.radial(leg)?,
            PathTerm::PI => self.procedure_turn(leg)?,
            PathTerm::HA | PathTerm::HF | PathTerm::HM => self.hold(leg)?,
            PathTerm::FD | PathTerm::CR => return Err(Error::UnsupportedLegType(leg.path_term)),
        }

        Ok(())
    }

    fn resolve(&self, fix: &FixRef) -> Result<&'a Point, Error> {
        let nd = self.nd;
        nd.resolve(fix, self.airport)
            .ok_or_else(|| Error::UnresolvedFixReference(fix.to_string()))
    }

    fn required(&self, fix: Option<&FixRef>, leg: &Leg, what: &str) -> Result<&'a Point, Error> {
        let fix = fix.ok_or_else(|| Error::FieldFormat(format!("{leg} has no {what}")))?;
        self.resolve(fix)
    }

    fn fix(&self, leg: &Leg) -> Result<&'a Point, Error> {
        self.required(leg.fix.as_ref(), leg, "fix")
    }

    fn navaid(&self, leg: &Leg) -> Result<&'a Point, Error> {
        self.required(leg.recommended_navaid.as_ref(), leg, "recommended navaid")
    }

    /// Returns the leg's true course.
    fn course(&self, leg: &Leg) -> Result<f64, Error> {
        leg.course
            .as_ref()
            .map(|course| course.to_true(self.declination))
            .ok_or_else(|| Error::FieldFormat(format!("{leg} has no course")))
    }

    fn distance_nm(&self, leg: &Leg) -> Result<f64, Error> {
        match leg.distance {
            Some(RouteDistance::Distance(nm)) => Ok(nm),
            _ => Err(Error::FieldFormat(format!("{leg} has no distance"))),
        }
    }

    fn turn_direction(&self, leg: &Leg) -> Result<TurnDirection, Error> {
        leg.turn_direction
            .ok_or_else(|| Error::FieldFormat(format!("{leg} has no turn direction")))
    }

    /// Returns the turn from the heading onto the desired course, or `None`
    /// if the heading is kept.
    fn turn(&self, leg: &Leg, heading: f64, desired: f64) -> Option<TurnDirection> {
        infer_turn(heading, desired).map(|inferred| leg.turn_direction.unwrap_or(inferred))
    }

    fn update_declination(&mut self, leg: &Leg) {
        let (nd, airport) = (self.nd, self.airport);
        let declination_of = |fix: &Option<FixRef>| {
            fix.as_ref()
                .and_then(|fix| nd.resolve(fix, airport))
                .and_then(|point| point.declination)
        };

        if let Some(declination) =
            declination_of(&leg.recommended_navaid).or_else(|| declination_of(&leg.fix))
        {
            self.declination = declination;
        }
    }

    fn push(&mut self, position: geo::Point<f64>, ident: Option<&str>, leg: &Leg, construction: &str) {
        if let Some(last) = self.fixes.last() {
            if distance_nm(last.position, position) > SAME_POINT_NM {
                self.heading = Some(bearing(last.position, position));
            }
        }

        self.fixes.push(TrackFix {
            position,
            declination: self.declination,
            heading: self.heading,
            altitude_ft: None,
            ident: ident.map(str::to_string),
            description: format!("{} {construction}", leg.path_term),
        });
    }

    /// Appends the fix unless the track already ends there.
    fn join(&mut self, fix: &Point, leg: &Leg, construction: &str) {
        let at_fix = self
            .fixes
            .last()
            .is_some_and(|last| distance_nm(last.position, fix.position) <= SAME_POINT_NM);

        if !at_fix {
            self.push(fix.position, Some(fix.ident.as_str()), leg, construction);
        } else if let Some(last) = self.fixes.last_mut() {
            last.ident.get_or_insert_with(|| fix.ident.clone());
        }
    }

    /// Returns the end of the track.
    ///
    /// A departure without a preceding fix starts at the departure end of
    /// its runway.
    fn start(&mut self, leg: &Leg) -> Result<Option<geo::Point<f64>>, Error> {
        if let Some(last) = self.fixes.last() {
            return Ok(Some(last.position));
        }

        if self.kind != ProcedureKind::Sid {
            return Ok(None);
        }

        let (position, heading) = self.nd.departure_end(self.airport, self.runway)?;
        self.heading = heading;
        self.push(position, None, leg, "departure end");

        Ok(Some(position))
    }

    fn origin(&mut self, leg: &Leg) -> Result<geo::Point<f64>, Error> {
        self.start(leg)?
            .ok_or(Error::GeometryDegenerate("leg without a preceding fix"))
    }

    /// Turns from the end of the track onto the true course and returns
    /// where the turn ends.
    fn turn_onto(&mut self, leg: &Leg, course: f64) -> Result<geo::Point<f64>, Error> {
        let start = self.origin(leg)?;
        let turn = self
            .heading
            .and_then(|heading| Some((heading, self.turn(leg, heading, course)?)));

        let end = match turn {
            Some((heading, direction)) => {
                let points = turn_to_heading(start, heading, course, direction, self.radius_m);
                let end = points.last().copied().unwrap_or(start);
                for p in points.into_iter().skip(1) {
                    self.push(p, None, leg, "turn");
                }
                end
            }
            None => start,
        };

        self.heading = Some(course);
        Ok(end)
    }

    fn course_to_fix(&mut self, leg: &Leg) -> Result<(), Error> {
        let fix = self.fix(leg)?;
        let course = self.course(leg)?;

        if let (Some(start), Some(heading)) = (self.start(leg)?, self.heading) {
            if normalize_signed(course - heading).abs() > SAME_COURSE_DEG {
                // parallel courses are joined directly
                if let Ok(intercept) = find_intersection(start, heading, fix.position, course) {
                    if ahead(start, intercept, heading) && ahead(intercept, fix.position, course) {
                        self.push(intercept, None, leg, "intercept");
                    }
                }
            }
        }

        self.join(fix, leg, "course to fix");
        self.heading = Some(course);
        Ok(())
    }

    fn direct_to_fix(&mut self, leg: &Leg) -> Result<(), Error> {
        let fix = self.fix(leg)?;

        if let Some(start) = self.start(leg)? {
            let desired = bearing(start, fix.position);
            let turn = self
                .heading
                .and_then(|heading| Some((heading, self.turn(leg, heading, desired)?)));

            if let Some((heading, direction)) = turn {
                let points =
                    build_tangent_to_fix(start, heading, fix.position, direction, self.radius_m)?;
                let arc = points.len().saturating_sub(2);
                for p in points.into_iter().skip(1).take(arc) {
                    self.push(p, None, leg, "turn");
                }
            }
        }

        self.join(fix, leg, "direct to fix");
        Ok(())
    }

    fn climb(&mut self, leg: &Leg) -> Result<(), Error> {
        let course = self.course(leg)?;
        let target = leg
            .altitude_ft
            .map(f64::from)
            .ok_or_else(|| Error::FieldFormat(format!("{leg} has no altitude")))?;

        let start = self.turn_onto(leg, course)?;
        let climb_ft = target - self.altitude.unwrap_or_default();
        let distance = climb_ft.max(0.0) / self.options.climb_gradient_ft_per_nm;

        if distance > SAME_POINT_NM {
            self.push(forward_true(start, course, distance), None, leg, "altitude");
        }

        Ok(())
    }

    fn manual_termination(&mut self, leg: &Leg) -> Result<(), Error> {
        let course = self.course(leg)?;
        let start = self.turn_onto(leg, course)?;
        let end = forward_true(start, course, self.options.manual_termination_nm);

        self.push(end, None, leg, "manual termination");
        Ok(())
    }

    fn dme_distance(&mut self, leg: &Leg) -> Result<(), Error> {
        let course = self.course(leg)?;
        let station = self.navaid(leg)?;
        let dme_nm = self.distance_nm(leg)?;

        let start = self.turn_onto(leg, course)?;
        let end = course_to_dme(start, course, station.position, dme_nm)?;

        self.push(end, None, leg, "DME distance");
        Ok(())
    }

    /// Returns a point and the true course of the line a leg intercepts.
    ///
    /// The line is the localizer course or radial of the recommended navaid,
    /// or the course to the next leg's fix.
    fn intercept_target(&self, leg: &Leg, next: Option<&Leg>) -> Option<(geo::Point<f64>, f64)> {
        let navaid = leg
            .recommended_navaid
            .as_ref()
            .and_then(|fix| self.resolve(fix).ok());

        navaid
            .and_then(|nav| Some((nav.position, nav.localizer_course?)))
            .or_else(|| {
                let nav = navaid?;
                Some((nav.position, true_course(leg.theta?, nav.declination())))
            })
            .or_else(|| {
                let next = next?;
                let fix = self.resolve(next.fix.as_ref()?).ok()?;
                let course = next.course.as_ref()?.to_true(self.declination);
                Some((fix.position, course))
            })
    }

    fn intercept(&mut self, leg: &Leg, next: Option<&Leg>) -> Result<(), Error> {
        let course = self.course(leg)?;
        let target = self.intercept_target(leg, next);
        let start = self.turn_onto(leg, course)?;

        let Some((point, target_course)) = target else {
            debug!("{leg} has nothing to intercept and ends at a manual termination");
            let end = forward_true(start, course, self.options.manual_termination_nm);
            self.push(end, None, leg, "manual termination");
            return Ok(());
        };

        let intercept = find_intersection(start, course, point, target_course)?;

        if distance_nm(start, intercept) > SAME_POINT_NM {
            if !ahead(start, intercept, course) {
                return Err(Error::GeometryDegenerate("intercept is behind the course"));
            }
            self.push(intercept, None, leg, "intercept");
        }

        Ok(())
    }

    fn arc(&mut self, leg: &Leg, center: &Point, radius_nm: Option<f64>) -> Result<(), Error> {
        let fix = self.fix(leg)?;
        let direction = self.turn_direction(leg)?;
        let start = self.origin(leg)?;
        let radius_nm = radius_nm.unwrap_or_else(|| distance_nm(center.position, fix.position));

        let points = arc_path(
            start,
            fix.position,
            center.position,
            radius_nm,
            direction.is_clockwise(),
        );
        let arc = points.len().saturating_sub(2);
        for p in points.into_iter().skip(1).take(arc) {
            self.push(p, None, leg, "arc");
        }

        self.join(fix, leg, "arc");
        Ok(())
    }

    fn radial(&mut self, leg: &Leg) -> Result<(), Error> {
        let course = self.course(leg)?;
        let navaid = self.navaid(leg)?;
        let theta = leg
            .theta
            .ok_or_else(|| Error::FieldFormat(format!("{leg} has no radial")))?;

        let start = self.turn_onto(leg, course)?;
        let radial = true_course(theta, navaid.declination());
        let intercept = find_intersection(start, course, navaid.position, radial)?;

        if distance_nm(start, intercept) > SAME_POINT_NM {
            if !ahead(start, intercept, course) {
                return Err(Error::GeometryDegenerate("radial is behind the course"));
            }
            self.push(intercept, None, leg, "radial");
        }

        Ok(())
    }

    fn procedure_turn(&mut self, leg: &Leg) -> Result<(), Error> {
        let fix = self.fix(leg)?;
        let outbound = self.course(leg)?;
        let direction = self.turn_direction(leg)?;

        let leg_nm = self.options.tas_kt / 60.0 * PROCEDURE_TURN_LEG_MIN;
        // stay within the published distance
        let outbound_nm = match leg.distance {
            Some(RouteDistance::Distance(nm)) => leg_nm.min(nm / 2.0),
            _ => leg_nm,
        };

        self.join(fix, leg, "procedure turn fix");

        let points =
            build_procedure_turn(fix.position, outbound, direction, outbound_nm, leg_nm, self.radius_m)?;
        let turn = points.len().saturating_sub(2);
        for p in points.into_iter().skip(1).take(turn) {
            self.push(p, None, leg, "procedure turn");
        }

        self.join(fix, leg, "procedure turn");
        Ok(())
    }

    fn hold(&mut self, leg: &Leg) -> Result<(), Error> {
        let fix = self.fix(leg)?;
        let inbound = self.course(leg)?;

        let speed = self.options.holding_speed_kt;
        let leg_nm = match leg.distance {
            Some(RouteDistance::Distance(nm)) => nm,
            Some(RouteDistance::Time(min)) => min * speed / 60.0,
            None => speed / 60.0,
        };
        let direction = leg.turn_direction.unwrap_or(TurnDirection::Clockwise);

        self.join(fix, leg, "holding fix");

        let points = build_hold(fix.position, inbound, leg_nm, direction, std_rate_radius_m(speed));
        let circuit = points.len().saturating_sub(2);
        for p in points.into_iter().skip(1).take(circuit) {
            self.push(p, None, leg, "hold");
        }

        self.join(fix, leg, "hold");
        self.heading = Some(inbound);
        Ok(())
    }
}
