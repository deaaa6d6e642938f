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

//! Geodetic geometry on a local tangent plane.
//!
//! Every operation anchors a [`LocalFrame`] at one of its inputs and works in
//! easting and northing meters. Positions are [`geo::Point`]s with the
//! longitude as `x` and the latitude as `y`. Courses and bearings are true
//! unless stated otherwise and declinations are **east negative**.

mod frame;
mod maneuver;
mod path;
mod turn;

pub use frame::LocalFrame;
pub(crate) use frame::normalize_signed;
pub use maneuver::{build_hold, build_procedure_turn};
pub use path::{
    arc_path, arc_sweep, bearing, circle, course_to_dme, distance_nm, find_intersection, forward, forward_true,
    true_course,
};
pub use turn::{build_tangent_to_fix, infer_turn, std_rate_radius_m, turn_to_heading, TurnDirection};
