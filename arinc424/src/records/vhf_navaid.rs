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

/// 4.1.2 VHF Navaid (D )
///
/// A VOR, DME or TACAN or any combination of them. Terminal navaids carry the
/// airport they belong to.
#[derive(Record)]
#[arinc424(kinds = "D ")]
pub struct VhfNavaid<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub arpt_ident: Option<ArptHeliIdent<'a>>,
    #[arinc424(skip(3))]
    pub vor_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub class: NavaidClass,
    pub vor_latitude: Option<Latitude<'a>>,
    pub vor_longitude: Option<Longitude<'a>>,
    pub dme_ident: Option<Alphanumeric<'a, 4>>,
    pub dme_latitude: Option<Latitude<'a>>,
    pub dme_longitude: Option<Longitude<'a>>,
    pub station_declination: Option<MagVar>,
    pub dme_elevation: Option<Elevation>,
    #[arinc424(field = 94)]
    pub name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> VhfNavaid<'a> {
    /// Returns the position of the VOR or of the DME if the navaid has no
    /// VOR.
    pub fn position(&self) -> Option<(Latitude<'a>, Longitude<'a>)> {
        self.vor_latitude
            .zip(self.vor_longitude)
            .or(self.dme_latitude.zip(self.dme_longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVAID: &[u8] = b"SUSAD        IRW   K4011400VTHW N35225850W097355870IRW N35225850W097355870E0070012861     NARWILL ROGERS                   128831507";

    #[test]
    fn vhf_navaid_record() {
        let nav = VhfNavaid::try_from(NAVAID).expect("navaid should parse");

        assert_eq!(nav.cust_area, CustArea::USA);
        assert_eq!(nav.sec_code, SecCode::Navaid);
        assert_eq!(nav.sub_code.kind(&nav.sec_code), Ok(SubCodeKind::VHFNavaid));
        assert!(nav.arpt_ident.is_none());
        assert_eq!(nav.vor_ident.as_str(), "IRW");
        assert_eq!(nav.icao_code.as_str(), "K4");
        assert_eq!(nav.frequency.mhz(), Ok(114.0));
        assert!(nav.class.is_vor());
        assert!(nav.class.is_tacan());
        assert_eq!(
            nav.vor_latitude.map(|lat| lat.as_decimal()),
            Some(Ok(35.38291666666667))
        );
        assert_eq!(nav.dme_ident.map(|ident| ident.as_str()), Some("IRW"));
        assert_eq!(nav.station_declination, Some(MagVar::East(7.0)));
        assert_eq!(nav.dme_elevation.map(|elev| elev.feet()), Some(1286));
        assert_eq!(nav.name.as_str(), "WILL ROGERS");
        assert_eq!(nav.frn.as_u32(), Ok(12883));
    }

    #[test]
    fn dme_only_position() {
        let mut record = NAVAID.to_vec();
        record[27] = b' ';
        record[32..51].fill(b' ');
        let dme = VhfNavaid::try_from(record.as_slice()).expect("navaid should parse");

        assert!(!dme.class.is_vor());
        assert!(dme.vor_latitude.is_none());
        assert!(dme.position().is_some());
    }

    #[test]
    fn rejects_ndb_record() {
        let mut record = NAVAID.to_vec();
        record[5] = b'B';

        assert!(matches!(
            VhfNavaid::try_from(record.as_slice()),
            Err(crate::Error::UnexpectedKind {
                section: b'D',
                subsection: b'B',
                ..
            })
        ));
    }
}
