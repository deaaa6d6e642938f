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

/// 4.1.18.2 and 4.1.25.2 Airspace continuation record (UC, UR)
///
/// Continuations share the airspace key of their primary record. Only the
/// call sign / controlling agency application carries fields decoded here.
#[derive(Record)]
#[arinc424(kinds = "UC, UR")]
pub struct AirspaceContinuation<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub icao_code: IcaoCode<'a>,
    /// The controlled or restrictive airspace type code.
    pub arsp_type: Alphanumeric<'a, 1>,
    /// Airspace center (UC) or restrictive designation (UR).
    pub arsp_designation: Alphanumeric<'a, 10>,
    pub multi_cd: MultipleCode<'a>,
    pub seq_nr: SequenceNumber<'a, 4>,
    pub cont_nr: ContNr<'a>,
    pub application_type: ApplicationType,
    #[arinc424(field = 100)]
    pub controlling_agency: Option<Alphanumeric<'a, 24>>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> AirspaceContinuation<'a> {
    /// Returns the designation without the center's section code of
    /// controlled airspace.
    pub fn designation(&self) -> &'a str {
        match self.sub_code.first() {
            b'C' => std::str::from_utf8(&self.arsp_designation.as_bytes()[..5])
                .unwrap_or("")
                .trim_end(),
            _ => self.arsp_designation.as_str(),
        }
    }
}
