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

//! Unit conversions and geometry tolerances.

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
pub const FEET_IN_METER: f64 = 0.3048;
pub const METER_PER_SECONDS_IN_KNOTS: f64 = 1.943844;
pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;

/// Angular step between the points of a circle.
pub const CIRCLE_STEP_DEG: f64 = 3.0;
/// Angular step of arcs sweeping less than [`FINE_ARC_SWEEP_DEG`].
pub const FINE_ARC_STEP_DEG: f64 = 1.0;
pub const FINE_ARC_SWEEP_DEG: f64 = 30.0;
/// Deviation of an arc's endpoints from its nominal radius that is reported.
pub const ARC_RADIUS_TOLERANCE_M: f64 = 250.0;
/// Heading changes below this angle are flown without a turn.
pub const TURN_THRESHOLD_DEG: f64 = 10.0;
/// Courses closer than this angle, or its supplement, are parallel.
pub const PARALLEL_TOLERANCE_DEG: f64 = 1.0;
/// Courses meeting further away than this are not intersected.
pub const MAX_INTERSECTION_NM: f64 = 250.0;
