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

use crate::fields::*;
use crate::{Alphanumeric, Record};

/// 4.1.6 Enroute Airway (ER)
///
/// Each record is one fix of an airway in order of the sequence number.
#[derive(Record)]
#[arinc424(kinds = "ER")]
pub struct Airway<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    #[arinc424(field = 14)]
    pub route_ident: AirwayIdent<'a>,
    #[arinc424(field = 26)]
    pub seq_nr: SequenceNumber<'a, 4>,
    pub fix_ident: FixIdent<'a>,
    pub fix_icao_code: IcaoCode<'a>,
    /// Section and subsection of the fix, e.g. `EA` or `D `.
    pub fix_section: Alphanumeric<'a, 2>,
    pub cont_nr: ContNr<'a>,
    pub waypoint_description: WaypointDescription,
    #[arinc424(skip(1))]
    pub route_type: Option<RouteType>,
    pub level: Option<Level>,
    #[arinc424(field = 71)]
    pub outbound_course: Option<Course>,
    pub distance: Option<RouteDistance>,
    pub inbound_course: Option<Course>,
    #[arinc424(skip(1))]
    pub min_altitude: Option<Altitude>,
    #[arinc424(skip(5))]
    pub max_altitude: Option<Altitude>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}
