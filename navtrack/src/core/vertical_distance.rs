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

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertical limit of an airspace.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum VerticalDistance {
    /// Height above ground level in feet.
    Agl(u32),

    /// Flight level in hundreds of feet as altitude at standard air pressure.
    Fl(u16),

    /// Ground level.
    Gnd,

    /// True Altitude as distance above mean sea level in feet.
    Msl(u32),

    /// The limit is published by NOTAM.
    Notam,

    /// An unlimited vertical distance.
    Unlimited,
}

impl VerticalDistance {
    /// Returns the altitude in feet above mean sea level if the vertical
    /// distance references it.
    ///
    /// Flight levels are taken at standard pressure.
    pub fn msl_ft(&self) -> Option<u32> {
        match self {
            Self::Msl(ft) => Some(*ft),
            Self::Fl(fl) => Some(*fl as u32 * 100),
            Self::Agl(_) | Self::Gnd | Self::Notam | Self::Unlimited => None,
        }
    }
}

impl fmt::Display for VerticalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalDistance::Gnd => write!(f, "GND"),
            VerticalDistance::Fl(value) => write!(f, "FL{value}"),
            VerticalDistance::Agl(value) => write!(f, "{value} AGL"),
            VerticalDistance::Msl(value) => write!(f, "{value} MSL"),
            VerticalDistance::Notam => write!(f, "NOTAM"),
            VerticalDistance::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Vertical distances are ordered if they reference a common datum.
///
/// Ground is below and unlimited above everything else. Limits published by
/// NOTAM can't be compared.
impl PartialOrd for VerticalDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Notam, _) | (_, Self::Notam) => None,
            // ground is always less
            (Self::Gnd, Self::Gnd) => Some(Ordering::Equal),
            (Self::Gnd, _) => Some(Ordering::Less),
            (_, Self::Gnd) => Some(Ordering::Greater),
            // and unlimited is always greater
            (Self::Unlimited, Self::Unlimited) => Some(Ordering::Equal),
            (Self::Unlimited, _) => Some(Ordering::Greater),
            (_, Self::Unlimited) => Some(Ordering::Less),
            (Self::Agl(v), Self::Agl(o)) => Some(v.cmp(o)),
            _ => match (self.msl_ft(), other.msl_ft()) {
                (Some(v), Some(o)) => Some(v.cmp(&o)),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gnd_is_least() {
        assert!(VerticalDistance::Gnd < VerticalDistance::Agl(1000));
        assert!(VerticalDistance::Gnd < VerticalDistance::Fl(10));
        assert!(VerticalDistance::Gnd < VerticalDistance::Msl(100));
        assert!(VerticalDistance::Gnd < VerticalDistance::Unlimited);
    }

    #[test]
    fn unlimited_is_greatest() {
        assert!(VerticalDistance::Unlimited > VerticalDistance::Agl(1000));
        assert!(VerticalDistance::Unlimited > VerticalDistance::Fl(600));
        assert!(VerticalDistance::Unlimited > VerticalDistance::Msl(100));
    }

    #[test]
    fn cmp_vertical_distances() {
        assert!(VerticalDistance::Msl(17999) < VerticalDistance::Fl(180));
        assert!(VerticalDistance::Agl(1000) < VerticalDistance::Agl(2000));
        assert_eq!(
            VerticalDistance::Agl(1000).partial_cmp(&VerticalDistance::Msl(1000)),
            None
        );
        assert_eq!(
            VerticalDistance::Notam.partial_cmp(&VerticalDistance::Gnd),
            None
        );
    }

    #[test]
    fn displays_limits() {
        assert_eq!(VerticalDistance::Fl(65).to_string(), "FL65");
        assert_eq!(VerticalDistance::Msl(11000).to_string(), "11000 MSL");
        assert_eq!(VerticalDistance::Gnd.to_string(), "GND");
    }
}
