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

use geo::{Coord, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::frame::{grid_bearing, normalize_signed, LocalFrame};
use super::path::{arc_path, arc_sweep};
use crate::constants::*;
use crate::error::Error;

/// The rotational sense of a turn or arc.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    /// A right turn.
    Clockwise,
    /// A left turn.
    CounterClockwise,
}

impl TurnDirection {
    pub fn is_clockwise(&self) -> bool {
        *self == Self::Clockwise
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Sign of a heading change in this direction.
    pub(crate) fn sign(&self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => write!(f, "right"),
            Self::CounterClockwise => write!(f, "left"),
        }
    }
}

/// Infers the shorter turn from the `previous` to the `desired` heading.
///
/// Heading changes of less than 10° need no turn. A reversal of exactly 180°
/// is turned clockwise.
///
/// ```
/// use navtrack::geom::{infer_turn, TurnDirection};
///
/// assert_eq!(infer_turn(90.0, 120.0), Some(TurnDirection::Clockwise));
/// assert_eq!(infer_turn(10.0, 340.0), Some(TurnDirection::CounterClockwise));
/// assert_eq!(infer_turn(90.0, 95.0), None);
/// ```
pub fn infer_turn(previous: f64, desired: f64) -> Option<TurnDirection> {
    let delta = normalize_signed(desired - previous);

    if delta.abs() < TURN_THRESHOLD_DEG {
        None
    } else if delta > 0.0 {
        Some(TurnDirection::Clockwise)
    } else {
        Some(TurnDirection::CounterClockwise)
    }
}

/// Returns the radius in meters of a standard rate turn (3° per second) at
/// the true airspeed in knots.
pub fn std_rate_radius_m(tas_kt: f64) -> f64 {
    let tas_mps = tas_kt / METER_PER_SECONDS_IN_KNOTS;
    tas_mps * 60.0 / std::f64::consts::PI
}

/// Turns from the `heading` at `start` until the `desired` heading is
/// reached.
///
/// All headings are true. The returned arc starts at `start` and ends where
/// the aircraft rolls out.
pub fn turn_to_heading(
    start: Point<f64>,
    heading: f64,
    desired: f64,
    direction: TurnDirection,
    radius_m: f64,
) -> Vec<Point<f64>> {
    let sweep = arc_sweep(heading, desired, direction.is_clockwise());

    if sweep.abs() < 1e-9 || sweep.abs() > 360.0 - 1e-9 {
        return vec![start];
    }

    let frame = LocalFrame::new(start);
    let s = direction.sign();
    let c = frame.forward(Coord::zero(), heading + s * 90.0, radius_m);
    let radial = (desired - s * 90.0).to_radians();
    let end = Coord {
        x: c.x + radius_m * radial.sin(),
        y: c.y + radius_m * radial.cos(),
    };

    arc_path(
        start,
        frame.to_global(end),
        frame.to_global(c),
        radius_m / NAUTICAL_MILE_IN_METER,
        direction.is_clockwise(),
    )
}

/// Turns from the `heading` at `start` onto a course direct to the `fix`.
///
/// The turn leaves its circle on the tangent through the fix. The returned
/// points start at `start`, follow the turn and end at the `fix`.
///
/// # Errors
///
/// Returns [`Error::GeometryDegenerate`] if the fix is within the turn.
pub fn build_tangent_to_fix(
    start: Point<f64>,
    heading: f64,
    fix: Point<f64>,
    direction: TurnDirection,
    radius_m: f64,
) -> Result<Vec<Point<f64>>, Error> {
    let frame = LocalFrame::new(start);
    let s = direction.sign();
    let c = frame.forward(Coord::zero(), heading + s * 90.0, radius_m);
    let f = frame.to_local(fix);

    let d = (f.x - c.x).hypot(f.y - c.y);
    if d <= radius_m {
        return Err(Error::GeometryDegenerate("fix is within the turn"));
    }

    let alpha = (radius_m / d).acos().to_degrees();
    let tangent_brg = grid_bearing(c, f) - s * alpha;
    let sweep = arc_sweep(
        grid_bearing(c, Coord::zero()),
        tangent_brg,
        direction.is_clockwise(),
    );

    // already on the tangent
    if sweep.abs() < 1e-6 || sweep.abs() > 360.0 - 1e-6 {
        return Ok(vec![start, fix]);
    }

    let t = Coord {
        x: c.x + radius_m * tangent_brg.to_radians().sin(),
        y: c.y + radius_m * tangent_brg.to_radians().cos(),
    };

    let mut points = arc_path(
        start,
        frame.to_global(t),
        frame.to_global(c),
        radius_m / NAUTICAL_MILE_IN_METER,
        direction.is_clockwise(),
    );
    points.push(fix);

    Ok(points)
}

#[cfg(test)]
mod tests {
    use crate::geom::{bearing, distance_nm, forward_true};

    use super::*;

    #[test]
    fn infers_shorter_turn() {
        assert_eq!(infer_turn(0.0, 30.0), Some(TurnDirection::Clockwise));
        assert_eq!(infer_turn(0.0, -30.0), Some(TurnDirection::CounterClockwise));
        assert_eq!(infer_turn(350.0, 20.0), Some(TurnDirection::Clockwise));
        assert_eq!(infer_turn(100.0, 105.0), None);
        assert_eq!(infer_turn(100.0, 95.0), None);
    }

    #[test]
    fn reversal_turns_clockwise() {
        assert_eq!(infer_turn(0.0, 180.0), Some(TurnDirection::Clockwise));
        assert_eq!(infer_turn(180.0, 0.0), Some(TurnDirection::Clockwise));
        assert_eq!(infer_turn(90.0, 270.0), Some(TurnDirection::Clockwise));
    }

    #[test]
    fn standard_rate_radius() {
        // 180 kt are 3 NM per minute, a half circle of 3 NM
        let r = std_rate_radius_m(180.0);
        let half_circle_nm = std::f64::consts::PI * r / NAUTICAL_MILE_IN_METER;
        assert!((half_circle_nm - 3.0).abs() < 1e-3);
    }

    #[test]
    fn turns_to_heading() {
        let start = coord!(47.0, 8.0);
        let r = std_rate_radius_m(210.0);
        let points = turn_to_heading(start, 0.0, 90.0, TurnDirection::Clockwise, r);

        assert_eq!(points.first(), Some(&start));

        // a quarter turn ends one radius north and east of the start
        let end = points[points.len() - 1];
        let r_nm = r / NAUTICAL_MILE_IN_METER;
        assert!((distance_nm(start, end) - r_nm * std::f64::consts::SQRT_2).abs() < 0.01);
        assert!((bearing(start, end) - 45.0).abs() < 0.1);
    }

    #[test]
    fn no_turn_for_same_heading() {
        let start = coord!(47.0, 8.0);
        let points = turn_to_heading(start, 90.0, 90.0, TurnDirection::Clockwise, 2000.0);
        assert_eq!(points, vec![start]);
    }

    #[test]
    fn tangent_leaves_turn_towards_fix() {
        let start = coord!(47.0, 8.0);
        let fix = forward_true(start, 90.0, 10.0);
        let r = std_rate_radius_m(210.0);

        let points = build_tangent_to_fix(start, 0.0, fix, TurnDirection::Clockwise, r)
            .expect("fix should be outside of the turn");

        assert_eq!(points.first(), Some(&start));
        assert_eq!(points.last(), Some(&fix));

        // the last two points lead straight to the fix
        let tangent = points[points.len() - 2];
        let before = points[points.len() - 3];
        let outbound = bearing(tangent, fix);
        assert!((bearing(before, tangent) - outbound).abs() < 2.0);
    }

    #[test]
    fn rejects_fix_within_turn() {
        let start = coord!(47.0, 8.0);
        let fix = forward_true(start, 90.0, 0.5);

        assert_eq!(
            build_tangent_to_fix(start, 0.0, fix, TurnDirection::Clockwise, 2000.0),
            Err(Error::GeometryDegenerate("fix is within the turn"))
        );
    }
}
