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
use crate::Record;

/// 4.1.10 Runway (PG)
#[derive(Record)]
#[arinc424(kinds = "PG")]
pub struct Runway<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub runway_id: RunwayId<'a>,
    #[arinc424(skip(3))]
    pub cont_nr: ContNr<'a>,
    /// Runway length in feet.
    pub runway_length: Length<'a>,
    pub rwy_brg: RwyBrg,
    #[arinc424(skip(1))]
    pub threshold_latitude: Latitude<'a>,
    pub threshold_longitude: Longitude<'a>,
    #[arinc424(field = 67)]
    pub threshold_elevation: Option<Elevation>,
    /// Displaced threshold distance in feet.
    pub displaced_threshold: Option<crate::Numeric<'a, 4>>,
    /// Threshold crossing height in feet.
    pub tch: Option<crate::Numeric<'a, 2>>,
    /// Runway width in feet.
    pub width: Option<crate::Numeric<'a, 3>>,
    #[arinc424(skip(1))]
    pub localizer_ident: Option<NavaidIdent<'a>>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}
