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
use crate::{Error, Record};

/// 4.1.3 NDB Navaid (DB) and 4.1.11 Airport and Heliport NDB (PN)
#[derive(Record)]
#[arinc424(kinds = "DB, PN")]
pub struct NdbNavaid<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    sub_code_6: Option<SubCode<'a>>,
    /// The airport of a terminal NDB.
    pub arpt_ident: Option<ArptHeliIdent<'a>>,
    #[arinc424(skip(2))]
    sub_code_13: Option<SubCode<'a>>,
    pub ndb_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub class: NavaidClass,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(field = 75)]
    pub mag_var: Option<MagVar>,
    #[arinc424(field = 94)]
    pub name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> NdbNavaid<'a> {
    /// Returns the subsection code from column 6 (DB) or 13 (PN).
    ///
    /// # Errors
    ///
    /// Returns an error if both columns are blank.
    pub fn sub_code(&self) -> Result<SubCode<'a>, Error> {
        self.sub_code_6
            .or(self.sub_code_13)
            .ok_or(Error::InvalidCharacter {
                field: "Subsection Code",
                byte: b' ',
                expected: "subsection in column 6 or 13",
            })
    }

    /// Returns `true` if the NDB belongs to an airport.
    pub fn is_terminal(&self) -> bool {
        self.sec_code == SecCode::Airport
    }
}
