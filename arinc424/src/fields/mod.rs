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

//! The fields of ARINC 424 records.
//!
//! Fields are named and numbered after chapter 5 of the ARINC 424
//! specification. Most fields borrow their bytes from the record and are
//! decoded on access.

use crate::{Alphanumeric, Numeric};

mod airspace;
mod altitude;
mod arc_dist_brg;
mod boundary_via;
mod coordinate;
mod course;
mod header;
mod leg;
mod mag_var;
mod navaid;
mod runway;
mod sec_sub_code;

pub use airspace::{
    AirspaceClass, ApplicationType, ArspType, LowerUpperLimit, RestrictiveType, TimeCode, UnitIndicator, NOTAM,
    UAV,
};
pub use altitude::{Altitude, AltitudeDescription, Elevation, Length, SpeedLimit};
pub use arc_dist_brg::{ArcBearing, ArcDistance, ArcRadius};
pub use boundary_via::{BoundaryPath, BoundaryVia};
pub use coordinate::{encode_latitude, encode_longitude, Latitude, Longitude};
pub use course::{Course, Rho, RouteDistance, Tenths, Theta};
pub use header::{ContNr, CustArea, Cycle, FileRecordNumber, RecordType, SequenceNumber};
pub use leg::{FixFunction, Level, PathTerm, RouteType, TurnDir, WaypointDescription};
pub use mag_var::MagVar;
pub use navaid::{Frequency, IlsCategory, NavaidClass};
pub use runway::{RunwayId, RwyBrg};
pub use sec_sub_code::{SecCode, SubCode, SubCodeKind};

pub type ArptHeliIdent<'a> = Alphanumeric<'a, 4>;
pub type AirwayIdent<'a> = Alphanumeric<'a, 5>;
pub type FixIdent<'a> = Alphanumeric<'a, 5>;
pub type Iata<'a> = Alphanumeric<'a, 3>;
pub type IcaoCode<'a> = Alphanumeric<'a, 2>;
pub type MultipleCode<'a> = Alphanumeric<'a, 1>;
pub type NameDesc<'a> = Alphanumeric<'a, 25>;
pub type NameField<'a> = Alphanumeric<'a, 30>;
pub type NavaidIdent<'a> = Alphanumeric<'a, 4>;
pub type ProcedureIdent<'a> = Alphanumeric<'a, 6>;
pub type RegnCode<'a> = Alphanumeric<'a, 4>;
pub type RequiredNavigationPerformance<'a> = Numeric<'a, 3>;
pub type TransitionIdent<'a> = Alphanumeric<'a, 5>;
pub type WaypointType<'a> = Alphanumeric<'a, 3>;
