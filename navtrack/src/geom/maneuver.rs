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

use geo::Point;

use super::path::{arc_path, distance_nm, find_intersection, forward_true};
use super::turn::{turn_to_heading, TurnDirection};
use crate::constants::NAUTICAL_MILE_IN_METER;
use crate::error::Error;

/// Returns one circuit of a racetrack holding pattern.
///
/// The pattern starts at the holding `fix`, turns outbound, flies the
/// outbound leg, turns inbound and ends at the `fix` again. Right-hand
/// patterns turn clockwise. The inbound course is true.
pub fn build_hold(
    fix: Point<f64>,
    inbound_course: f64,
    leg_nm: f64,
    direction: TurnDirection,
    radius_m: f64,
) -> Vec<Point<f64>> {
    let s = direction.sign();
    let cw = direction.is_clockwise();
    let r_nm = radius_m / NAUTICAL_MILE_IN_METER;
    let outbound = (inbound_course + 180.0).rem_euclid(360.0);
    let side = inbound_course + s * 90.0;

    // turn outbound
    let center = forward_true(fix, side, r_nm);
    let abeam = forward_true(fix, side, 2.0 * r_nm);
    let mut points = arc_path(fix, abeam, center, r_nm, cw);

    // outbound leg and turn inbound
    let outbound_end = forward_true(abeam, outbound, leg_nm);
    let side = outbound + s * 90.0;
    let center = forward_true(outbound_end, side, r_nm);
    let inbound_start = forward_true(outbound_end, side, 2.0 * r_nm);
    points.extend(arc_path(outbound_end, inbound_start, center, r_nm, cw));

    points.push(fix);
    points
}

/// Returns a 45°/180° procedure turn.
///
/// The turn flies the true `outbound_course` from the `fix` for
/// `outbound_nm`, turns 45° in the `direction` and flies `leg_nm`. It then
/// turns 180° in the opposite direction and rolls out on the inbound course
/// with a final 45° turn back to the fix.
///
/// # Errors
///
/// Returns [`Error::GeometryDegenerate`] if the inbound course can't be
/// intercepted.
pub fn build_procedure_turn(
    fix: Point<f64>,
    outbound_course: f64,
    direction: TurnDirection,
    outbound_nm: f64,
    leg_nm: f64,
    radius_m: f64,
) -> Result<Vec<Point<f64>>, Error> {
    let outbound = outbound_course.rem_euclid(360.0);
    let turned = (outbound + direction.sign() * 45.0).rem_euclid(360.0);
    let reversed = (turned + 180.0).rem_euclid(360.0);

    let mut points = vec![fix, forward_true(fix, outbound, outbound_nm)];

    let turn = turn_to_heading(points[1], outbound, turned, direction, radius_m);
    points.extend(turn.into_iter().skip(1));

    let leg_end = forward_true(points[points.len() - 1], turned, leg_nm);
    points.push(leg_end);

    let turn = turn_to_heading(leg_end, turned, reversed, direction.opposite(), radius_m);
    points.extend(turn.into_iter().skip(1));

    let reversal_end = points[points.len() - 1];
    let intercept = find_intersection(reversal_end, reversed, fix, outbound)?;

    // the 45° turn starts before the intercept to roll out on the course
    let lead_nm = (radius_m / NAUTICAL_MILE_IN_METER) * 22.5_f64.to_radians().tan();
    let lead_nm = lead_nm.min(distance_nm(reversal_end, intercept));
    let roll_in = forward_true(intercept, turned, lead_nm);
    if distance_nm(reversal_end, roll_in) > 1e-3 {
        points.push(roll_in);
    }

    let inbound = (outbound + 180.0).rem_euclid(360.0);
    let turn = turn_to_heading(roll_in, reversed, inbound, direction.opposite(), radius_m);
    points.extend(turn.into_iter().skip(1));
    points.push(fix);

    Ok(points)
}
