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

/// 4.1.4 Enroute (EA) and 4.1.9 Terminal (PC) Waypoint
#[derive(Record)]
#[arinc424(kinds = "EA, PC")]
pub struct Waypoint<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    sub_code_6: Option<SubCode<'a>>,
    /// The airport of a terminal waypoint or `ENRT` for enroute waypoints.
    pub regn_code: RegnCode<'a>,
    icao_code_11: Option<IcaoCode<'a>>,
    sub_code_13: Option<SubCode<'a>>,
    pub fix_ident: FixIdent<'a>,
    #[arinc424(field = 20)]
    icao_code_20: Option<IcaoCode<'a>>,
    pub cont_nr: ContNr<'a>,
    #[arinc424(skip(4))]
    pub waypoint_type: WaypointType<'a>,
    #[arinc424(field = 33)]
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(field = 75)]
    pub mag_var: Option<MagVar>,
    #[arinc424(field = 99)]
    pub name_desc: NameDesc<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> Waypoint<'a> {
    /// Returns the subsection code of the waypoint.
    ///
    /// The code is read from column 6 or column 13, whichever is set.
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

    /// Returns the ICAO code of the waypoint.
    ///
    /// The code can either be in column 11 or 20.
    ///
    /// # Errors
    ///
    /// Returns an error if both columns are blank.
    pub fn icao_code(&self) -> Result<IcaoCode<'a>, Error> {
        self.icao_code_20
            .or(self.icao_code_11)
            .ok_or(Error::InvalidCharacter {
                field: "ICAO Code",
                byte: b' ',
                expected: "ICAO code in column 11 or 20",
            })
    }

    /// Returns `true` if the waypoint is part of an airport's terminal area.
    pub fn is_terminal(&self) -> bool {
        self.sec_code == SecCode::Airport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PC_WAYPOINT: &[u8] = b"SEURPCEDDHED W1    ED0    V     N53341894E009404512                                 WGE           WHISKEY1                 122922407";

    #[test]
    fn terminal_waypoint_record() {
        let wp = Waypoint::try_from(PC_WAYPOINT).expect("waypoint should parse");

        assert_eq!(wp.record_type, RecordType::Standard);
        assert_eq!(wp.cust_area, CustArea::EUR);
        assert_eq!(wp.sec_code, SecCode::Airport);
        assert!(wp.is_terminal());
        assert_eq!(
            wp.sub_code().and_then(|sub_code| sub_code.kind(&wp.sec_code)),
            Ok(SubCodeKind::TerminalWaypoint)
        );
        assert_eq!(wp.regn_code.as_str(), "EDDH");
        assert_eq!(wp.icao_code().map(|icao| icao.as_str()), Ok("ED"));
        assert_eq!(wp.fix_ident.as_str(), "W1");
        assert_eq!(wp.cont_nr.as_str(), "0");
        assert_eq!(wp.waypoint_type.as_str(), "V");
        assert_eq!(wp.latitude.as_decimal(), Ok(53.57192777777778));
        assert_eq!(wp.longitude.as_decimal(), Ok(9.6792));
        assert_eq!(wp.mag_var, None);
        assert_eq!(wp.name_desc.as_str(), "WHISKEY1");
        assert_eq!(wp.frn.as_u32(), Ok(12292));
        assert_eq!(wp.cycle.year(), Ok(24));
        assert_eq!(wp.cycle.cycle(), Ok(7));
    }

    const EA_WAYPOINT: &[u8] = b"SUSAEAENRT   AAARG K 0    W   B N32413827W078030466                       W0093     NAR           AAARG                    270862407";

    #[test]
    fn enroute_waypoint_record() {
        let wp = Waypoint::try_from(EA_WAYPOINT).expect("waypoint should parse");

        assert_eq!(wp.cust_area, CustArea::USA);
        assert_eq!(wp.sec_code, SecCode::Enroute);
        assert!(!wp.is_terminal());
        assert_eq!(
            wp.sub_code().and_then(|sub_code| sub_code.kind(&wp.sec_code)),
            Ok(SubCodeKind::Waypoint)
        );
        assert_eq!(wp.regn_code.as_str(), "ENRT");
        assert_eq!(wp.icao_code().map(|icao| icao.as_str()), Ok("K"));
        assert_eq!(wp.fix_ident.as_str(), "AAARG");
        assert_eq!(wp.waypoint_type.as_str(), "W");
        assert_eq!(wp.latitude.as_decimal(), Ok(32.69396388888889));
        assert_eq!(wp.longitude.as_decimal(), Ok(-78.05129444444444));
        assert_eq!(wp.mag_var, Some(MagVar::West(9.3)));
        assert_eq!(wp.name_desc.as_str(), "AAARG");
        assert_eq!(wp.frn.as_u32(), Ok(27086));
    }
}
