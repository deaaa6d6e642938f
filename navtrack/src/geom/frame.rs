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

use geo::{Coord, Point};

use crate::constants::EARTH_RADIUS_M;

/// Offset in degrees of latitude used to find the grid direction of north.
const NORTH_OFFSET_DEG: f64 = 1e-4;

/// A local tangent plane anchored at a reference point.
///
/// Positions are projected azimuthal-equidistant: the distance and true
/// bearing from the origin to any point are preserved. Local coordinates are
/// easting (`x`) and northing (`y`) in meters.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LocalFrame {
    origin: Point<f64>,
    lon0: f64,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl LocalFrame {
    pub fn new(origin: Point<f64>) -> Self {
        let lat0 = origin.y().to_radians();

        Self {
            origin,
            lon0: origin.x().to_radians(),
            sin_lat0: lat0.sin(),
            cos_lat0: lat0.cos(),
        }
    }

    pub fn origin(&self) -> Point<f64> {
        self.origin
    }

    /// Projects a global position into the plane.
    pub fn to_local(&self, p: Point<f64>) -> Coord<f64> {
        let lat = p.y().to_radians();
        let dlon = p.x().to_radians() - self.lon0;
        let (sin_lat, cos_lat) = lat.sin_cos();

        let cos_c = (self.sin_lat0 * sin_lat + self.cos_lat0 * cos_lat * dlon.cos()).clamp(-1.0, 1.0);
        let c = cos_c.acos();
        let k = if c < 1e-12 { 1.0 } else { c / c.sin() };

        Coord {
            x: EARTH_RADIUS_M * k * cos_lat * dlon.sin(),
            y: EARTH_RADIUS_M * k * (self.cos_lat0 * sin_lat - self.sin_lat0 * cos_lat * dlon.cos()),
        }
    }

    /// Returns the global position of a point in the plane.
    pub fn to_global(&self, c: Coord<f64>) -> Point<f64> {
        let rho = c.x.hypot(c.y);

        if rho < 1e-9 {
            return self.origin;
        }

        let angle = rho / EARTH_RADIUS_M;
        let (sin_c, cos_c) = angle.sin_cos();

        let lat = (cos_c * self.sin_lat0 + c.y * sin_c * self.cos_lat0 / rho)
            .clamp(-1.0, 1.0)
            .asin();
        let lon = self.lon0
            + (c.x * sin_c).atan2(rho * self.cos_lat0 * cos_c - c.y * self.sin_lat0 * sin_c);

        Point::new(normalize_lon(lon.to_degrees()), lat.to_degrees())
    }

    /// Returns the grid azimuth of true north at `p` in degrees.
    ///
    /// A true bearing at `p` becomes a grid bearing in this plane by adding
    /// the convergence. It is zero at the origin.
    pub fn convergence(&self, p: Point<f64>) -> f64 {
        let (north, sign) = if p.y() + NORTH_OFFSET_DEG <= 90.0 {
            (Point::new(p.x(), p.y() + NORTH_OFFSET_DEG), 0.0)
        } else {
            (Point::new(p.x(), p.y() - NORTH_OFFSET_DEG), 180.0)
        };

        let a = self.to_local(p);
        let b = self.to_local(north);

        normalize_signed(grid_bearing(a, b) + sign)
    }

    /// Moves from a local position along a true course by a distance in
    /// meters.
    pub fn forward(&self, from: Coord<f64>, true_course: f64, distance_m: f64) -> Coord<f64> {
        let grid = (true_course + self.convergence(self.to_global(from))).to_radians();

        Coord {
            x: from.x + distance_m * grid.sin(),
            y: from.y + distance_m * grid.cos(),
        }
    }
}

/// Returns the grid bearing from `a` to `b` in degrees from 0 to 360.
pub(crate) fn grid_bearing(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).atan2(b.y - a.y).to_degrees().rem_euclid(360.0)
}

/// Normalizes an angle to the range (-180, 180].
pub(crate) fn normalize_signed(deg: f64) -> f64 {
    let deg = deg.rem_euclid(360.0);
    if deg > 180.0 {
        deg - 360.0
    } else {
        deg
    }
}

fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
