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

//! Flyable tracks and airspace outlines from ARINC 424 navigation data.
//!
//! The [`nd`] module reads a navigation database into [`NavigationData`]:
//! registries of navaids, waypoints, airports and runways, the airways, the
//! terminal procedures and the airspace boundaries. Procedures build a
//! [`Track`] per transition, airspaces build their closed outlines and
//! airways return the fixes between two of their fixes. All constructions
//! use the planar [`geom`] functions.
//!
//! # Examples
//!
//! ```
//! use navtrack::nd::NavigationData;
//!
//! let data = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
//! let nd = NavigationData::try_from_arinc424(data);
//!
//! let jfk = nd.airports().get("KJFK").expect("airport should be decoded");
//! println!("{} at {:.4}, {:.4}", jfk.ident, jfk.position.y(), jfk.position.x());
//! assert!(nd.errors().is_empty());
//! ```
//!
//! [`NavigationData`]: nd::NavigationData

#[macro_use]
mod macros;

pub mod constants;
mod core;
mod error;
pub mod geom;
pub mod nd;
pub mod track;

pub use crate::core::VerticalDistance;
pub use error::Error;
pub use track::{Track, TrackFix, TrackOptions};
