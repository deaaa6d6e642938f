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

//! Flyable tracks of procedure transitions.
//!
//! A [`Track`] is built from the ordered legs of one transition by
//! [`Procedure::build_track`]. Every leg appends its construction to the
//! track, so a track is never shortened by the legs that follow.
//!
//! [`Procedure::build_track`]: crate::nd::Procedure::build_track

use geo::LineString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod synthesizer;

pub(crate) use synthesizer::synthesize;

/// Options of the track synthesis.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackOptions {
    /// Continue an approach beyond the missed approach point.
    pub include_missed_approach: bool,
    /// True airspeed in knots that sets the radius of standard rate turns.
    pub tas_kt: f64,
    pub climb_gradient_ft_per_nm: f64,
    /// Speed in knots of holding patterns defined by time.
    pub holding_speed_kt: f64,
    /// Length of legs that end at a manual termination.
    pub manual_termination_nm: f64,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            include_missed_approach: false,
            tas_kt: 210.0,
            climb_gradient_ft_per_nm: 500.0,
            holding_speed_kt: 210.0,
            manual_termination_nm: 1.0,
        }
    }
}

/// A point of a track.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackFix {
    pub position: geo::Point<f64>,
    /// Declination of the leg with east negative.
    pub declination: f64,
    /// True heading when arriving at the point.
    pub heading: Option<f64>,
    pub altitude_ft: Option<f64>,
    /// The identifier if the point is a published fix.
    pub ident: Option<String>,
    /// The leg and the construction that created the point.
    pub description: String,
}

/// The track of one procedure transition.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    fixes: Vec<TrackFix>,
}

impl Track {
    pub(crate) fn new(fixes: Vec<TrackFix>) -> Self {
        Self { fixes }
    }

    pub fn fixes(&self) -> &[TrackFix] {
        self.fixes.as_slice()
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Returns the published fixes of the track.
    pub fn published_fixes(&self) -> impl Iterator<Item = &TrackFix> {
        self.fixes.iter().filter(|fix| fix.ident.is_some())
    }

    /// Returns the track as line string.
    pub fn line_string(&self) -> LineString<f64> {
        self.fixes.iter().map(|fix| fix.position).collect()
    }
}
