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

use geo::{Bearing, Coord, Destination, Distance, Haversine, LineString, Point};
use log::warn;

use super::frame::{grid_bearing, normalize_signed, LocalFrame};
use crate::constants::*;
use crate::error::Error;

/// Converts a magnetic course into a true course.
///
/// The declination is **east negative** so that the true course is the
/// magnetic course minus the declination.
///
/// ```
/// use navtrack::geom::true_course;
///
/// // 10° east variation
/// assert_eq!(true_course(350.0, -10.0), 0.0);
/// ```
pub fn true_course(magnetic: f64, declination: f64) -> f64 {
    (magnetic - declination).rem_euclid(360.0)
}

/// Projects a point from the `origin` along a magnetic course.
///
/// The course is turned into a true course using the declination and the
/// grid convergence at the origin.
pub fn forward(origin: Point<f64>, course: f64, distance_nm: f64, declination: f64) -> Point<f64> {
    forward_true(origin, true_course(course, declination), distance_nm)
}

/// Projects a point from the `origin` along a true course.
pub fn forward_true(origin: Point<f64>, course: f64, distance_nm: f64) -> Point<f64> {
    Haversine.destination(origin, course, distance_nm * NAUTICAL_MILE_IN_METER)
}

/// Returns the true bearing from `a` to `b`.
pub fn bearing(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.bearing(a, b)
}

/// Returns the distance from `a` to `b` in nautical miles.
pub fn distance_nm(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / NAUTICAL_MILE_IN_METER
}

/// Returns a closed ring around the center.
///
/// The ring has a point every 3° starting north of the center, and its last
/// point repeats the first.
pub fn circle(center: Point<f64>, radius_nm: f64) -> LineString<f64> {
    let frame = LocalFrame::new(center);
    let radius_m = radius_nm * NAUTICAL_MILE_IN_METER;
    let steps = (360.0 / CIRCLE_STEP_DEG).round() as usize;

    let mut coords: Vec<Coord<f64>> = (0..steps)
        .map(|i| {
            let brg = (i as f64 * CIRCLE_STEP_DEG).to_radians();
            let local = Coord {
                x: radius_m * brg.sin(),
                y: radius_m * brg.cos(),
            };
            frame.to_global(local).into()
        })
        .collect();

    if let Some(first) = coords.first().copied() {
        coords.push(first);
    }

    LineString::from(coords)
}

/// Returns the signed sweep angle from `start` to `end` in degrees.
///
/// The sweep goes in the requested direction with clockwise being positive.
/// Equal bearings sweep a full circle.
pub fn arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    let mut diff = end.rem_euclid(360.0) - start.rem_euclid(360.0);

    if clockwise {
        if diff <= 0.0 {
            diff += 360.0;
        }
    } else if diff >= 0.0 {
        diff -= 360.0;
    }

    diff
}

/// Returns the points of an arc from `begin` to `end` around the `center`.
///
/// The first point is `begin` and the last is `end`, with points on the
/// nominal radius in between. Arcs shorter than 30° get a point every degree,
/// longer arcs every 3°.
///
/// A warning is logged if `begin` or `end` are not on the nominal radius.
pub fn arc_path(
    begin: Point<f64>,
    end: Point<f64>,
    center: Point<f64>,
    radius_nm: f64,
    clockwise: bool,
) -> Vec<Point<f64>> {
    let frame = LocalFrame::new(center);
    let radius_m = radius_nm * NAUTICAL_MILE_IN_METER;
    let (b, e) = (frame.to_local(begin), frame.to_local(end));

    for (which, local) in [("begin", b), ("end", e)] {
        let deviation = local.x.hypot(local.y) - radius_m;
        if deviation.abs() > ARC_RADIUS_TOLERANCE_M {
            warn!(
                "arc {which} is {deviation:.0} m off the radius of {radius_nm:.3} NM around {:.5}/{:.5}",
                center.y(),
                center.x()
            );
        }
    }

    let start = grid_bearing(Coord::zero(), b);
    let sweep = arc_sweep(start, grid_bearing(Coord::zero(), e), clockwise);
    let step = if sweep.abs() < FINE_ARC_SWEEP_DEG {
        FINE_ARC_STEP_DEG
    } else {
        CIRCLE_STEP_DEG
    };
    // ignore rounding noise of the projected bearings
    let n = ((sweep.abs() / step - 1e-6).ceil() as usize).max(1);

    let mut points = Vec::with_capacity(n + 1);
    points.push(begin);
    points.extend((1..n).map(|i| {
        let brg = (start + sweep * i as f64 / n as f64).to_radians();
        frame.to_global(Coord {
            x: radius_m * brg.sin(),
            y: radius_m * brg.cos(),
        })
    }));
    points.push(end);

    points
}

/// Returns the intersection of two courses.
///
/// Each course is a line through its point along a true bearing. The lines
/// are intersected regardless of which side of the points they cross. The
/// plane is anchored halfway between both points.
///
/// # Errors
///
/// Returns [`Error::GeometryDegenerate`] if the courses are (close to)
/// parallel or meet more than [`MAX_INTERSECTION_NM`] away.
pub fn find_intersection(
    point_a: Point<f64>,
    bearing_a: f64,
    point_b: Point<f64>,
    bearing_b: f64,
) -> Result<Point<f64>, Error> {
    let angle = normalize_signed(bearing_a - bearing_b).to_radians();
    if angle.sin().abs() < PARALLEL_TOLERANCE_DEG.to_radians().sin() {
        return Err(Error::GeometryDegenerate("courses are parallel"));
    }

    let mid = LocalFrame::new(point_a).to_local(point_b);
    let frame = LocalFrame::new(LocalFrame::new(point_a).to_global(mid / 2.0));
    let (a, b) = (frame.to_local(point_a), frame.to_local(point_b));

    let da = (bearing_a + frame.convergence(point_a)).to_radians();
    let db = (bearing_b + frame.convergence(point_b)).to_radians();
    let (ua, ub) = (
        Coord { x: da.sin(), y: da.cos() },
        Coord { x: db.sin(), y: db.cos() },
    );

    // a + t * ua = b + s * ub
    let cross = |u: Coord<f64>, v: Coord<f64>| u.x * v.y - u.y * v.x;
    let det = cross(ua, ub);
    if det.abs() < f64::EPSILON {
        return Err(Error::GeometryDegenerate("courses are parallel"));
    }

    let t = cross(b - a, ub) / det;
    let p = frame.to_global(a + ua * t);

    if distance_nm(point_a, p) > MAX_INTERSECTION_NM {
        return Err(Error::GeometryDegenerate("courses meet too far away"));
    }

    Ok(p)
}

/// Returns where a course from the `start` reaches a DME distance.
///
/// A course towards the station ends at the first crossing of the DME
/// circle. A course away from the station, or one that starts within the
/// circle, ends where it leaves the circle.
///
/// # Errors
///
/// Returns [`Error::GeometryDegenerate`] if the course never reaches the
/// distance.
pub fn course_to_dme(
    start: Point<f64>,
    course: f64,
    station: Point<f64>,
    dme_nm: f64,
) -> Result<Point<f64>, Error> {
    let frame = LocalFrame::new(start);
    let s = frame.to_local(station);
    let r = dme_nm * NAUTICAL_MILE_IN_METER;
    let u = Coord {
        x: course.to_radians().sin(),
        y: course.to_radians().cos(),
    };

    // |t * u - s| = r
    let along = u.x * s.x + u.y * s.y;
    let disc = along * along - (s.x * s.x + s.y * s.y - r * r);

    if disc < 0.0 {
        return Err(Error::GeometryDegenerate("course passes the DME distance"));
    }

    let inbound = (grid_bearing(Coord { x: 0.0, y: 0.0 }, s) - course + 540.0).rem_euclid(360.0) - 180.0;
    let t = match along - disc.sqrt() {
        t if inbound.abs() < 90.0 && t > 0.0 => t,
        _ => along + disc.sqrt(),
    };

    if t <= 0.0 {
        return Err(Error::GeometryDegenerate("course leaves the DME distance"));
    }

    Ok(frame.to_global(Coord {
        x: t * u.x,
        y: t * u.y,
    }))
}

#[cfg(test)]
mod tests {
    use geo::{Distance, Haversine};

    use super::*;

    #[test]
    fn converts_magnetic_to_true() {
        assert_eq!(true_course(90.0, 13.0), 77.0);
        assert_eq!(true_course(5.0, 10.0), 355.0);
    }

    #[test]
    fn forward_preserves_distance_and_course() {
        let origin = coord!(38.704022, -101.473911);
        let p = forward(origin, 100.0, 12.0, -7.0);

        let d = Haversine.distance(origin, p);
        assert!((d - 12.0 * NAUTICAL_MILE_IN_METER).abs() < 1.0);
        assert!((bearing(origin, p) - 107.0).abs() < 1e-6);
    }

    #[test]
    fn circle_is_closed_ring() {
        let center = coord!(40.6398, -73.7789);
        let ring = circle(center, 5.0);

        assert_eq!(ring.0.len(), 121);
        assert!(ring.is_closed());

        for c in ring.coords() {
            let d = Haversine.distance(center, Point::from(*c));
            assert!((d - 5.0 * NAUTICAL_MILE_IN_METER).abs() < 50.0);
        }
    }

    #[test]
    fn calculate_arc_sweep_clockwise() {
        assert!((arc_sweep(0.0, 90.0, true) - 90.0).abs() < 0.001);
        assert!((arc_sweep(90.0, 0.0, true) - 270.0).abs() < 0.001);
        assert!((arc_sweep(350.0, 10.0, true) - 20.0).abs() < 0.001);
    }

    #[test]
    fn calculate_arc_sweep_counterclockwise() {
        assert!((arc_sweep(90.0, 0.0, false) - (-90.0)).abs() < 0.001);
        assert!((arc_sweep(0.0, 90.0, false) - (-270.0)).abs() < 0.001);
        assert!((arc_sweep(10.0, -10.0, false) - (-20.0)).abs() < 0.001);
    }

    #[test]
    fn arc_path_starts_and_ends_at_endpoints() {
        let center = coord!(47.0, 8.0);
        let begin = forward_true(center, 0.0, 10.0);
        let end = forward_true(center, 90.0, 10.0);

        let cw = arc_path(begin, end, center, 10.0, true);
        assert_eq!(cw.first(), Some(&begin));
        assert_eq!(cw.last(), Some(&end));
        assert_eq!(cw.len(), 31);

        for p in &cw {
            let d = Haversine.distance(center, *p);
            assert!((d - 10.0 * NAUTICAL_MILE_IN_METER).abs() < 50.0);
        }

        // the long way round
        let ccw = arc_path(begin, end, center, 10.0, false);
        assert_eq!(ccw.len(), 91);
        assert!(bearing(center, ccw[45]) > 180.0);
    }

    #[test]
    fn short_arcs_have_fine_steps() {
        let center = coord!(47.0, 8.0);
        let begin = forward_true(center, 10.0, 4.0);
        let end = forward_true(center, 30.0, 4.0);

        let arc = arc_path(begin, end, center, 4.0, true);
        assert_eq!(arc.len(), 21);
    }

    #[test]
    fn finds_intersection() {
        let a = coord!(50.0, 8.0);
        let b = forward_true(a, 90.0, 10.0);

        // a course north-east from a and north-west from b meet in between
        let p = find_intersection(a, 45.0, b, 315.0).expect("courses should intersect");

        assert!((bearing(a, p) - 45.0).abs() < 0.1);
        assert!((bearing(b, p) - 315.0).abs() < 0.1);
        assert!((distance_nm(a, p) - distance_nm(b, p)).abs() < 0.01);
    }

    #[test]
    fn finds_intersection_behind_a_point() {
        let a = coord!(38.0, -100.7);
        let b = forward_true(a, 0.0, 20.0);

        // the east-west course through b crosses a's course 20 NM ahead of it
        let p = find_intersection(a, 0.0, b, 270.0).expect("courses should intersect");
        assert!(distance_nm(p, b) < 0.01);

        // and a southbound course from a still meets it, behind a
        let p = find_intersection(a, 180.0, b, 90.0).expect("courses should intersect");
        assert!(distance_nm(p, b) < 0.01);
    }

    #[test]
    fn rejects_parallel_courses() {
        let a = coord!(50.0, 8.0);
        let b = forward_true(a, 90.0, 10.0);

        for (course_a, course_b) in [(0.0, 0.0), (0.0, 359.9), (90.0, 270.0), (45.0, 225.5)] {
            assert_eq!(
                find_intersection(a, course_a, b, course_b),
                Err(Error::GeometryDegenerate("courses are parallel")),
                "{course_a} and {course_b}"
            );
        }
    }

    #[test]
    fn rejects_distant_intersection() {
        let a = coord!(50.0, 8.0);
        let b = forward_true(a, 90.0, 10.0);

        assert_eq!(
            find_intersection(a, 0.0, b, 358.5),
            Err(Error::GeometryDegenerate("courses meet too far away"))
        );
    }

    #[test]
    fn reaches_dme_distance() {
        let station = coord!(35.0, -97.0);
        let start = forward_true(station, 180.0, 20.0);

        // inbound stops at the first crossing
        let p = course_to_dme(start, 0.0, station, 10.0).expect("course should reach DME");
        assert!((distance_nm(station, p) - 10.0).abs() < 0.01);
        assert!(distance_nm(start, p) < 10.1);

        // outbound from within the circle
        let p = course_to_dme(station, 90.0, station, 10.0).expect("course should reach DME");
        assert!((distance_nm(station, p) - 10.0).abs() < 0.01);

        // outbound from beyond the circle never reaches it
        assert!(course_to_dme(start, 180.0, station, 10.0).is_err());
    }
}
