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

/// 4.1.11 Airport and Heliport Localizer and Glide Slope (PI)
#[derive(Record)]
#[arinc424(kinds = "PI")]
pub struct Localizer<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub loc_ident: NavaidIdent<'a>,
    pub category: IlsCategory,
    #[arinc424(skip(3))]
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub runway_id: RunwayId<'a>,
    pub loc_latitude: Latitude<'a>,
    pub loc_longitude: Longitude<'a>,
    /// The localizer bearing in the approach direction.
    pub loc_bearing: Course,
    pub gs_latitude: Option<Latitude<'a>>,
    pub gs_longitude: Option<Longitude<'a>>,
    #[arinc424(field = 91)]
    pub station_declination: Option<MagVar>,
    #[arinc424(field = 98)]
    pub gs_elevation: Option<Elevation>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCALIZER: &[u8] = b"SUSAP KJFKK6IIHIQ3   011030RW04LN40392543W0734558290436N40374220W0734656801230+10500400300W01305700012                     305591709";

    #[test]
    fn localizer_record() {
        let loc = Localizer::try_from(LOCALIZER).expect("localizer should parse");

        assert_eq!(loc.arpt_ident.as_str(), "KJFK");
        assert_eq!(loc.sub_code.kind(&loc.sec_code), Ok(SubCodeKind::Localizer));
        assert_eq!(loc.loc_ident.as_str(), "IHIQ");
        assert_eq!(loc.category, IlsCategory::CatIII);
        assert_eq!(loc.frequency.mhz(), Ok(110.3));
        assert_eq!(loc.runway_id.designator(), Ok("04L"));
        assert_eq!(loc.loc_bearing, Course::Magnetic(43.6));
        assert!(loc.gs_latitude.is_some());
        assert_eq!(loc.station_declination, Some(MagVar::West(13.0)));
        assert_eq!(loc.gs_elevation.map(|elev| elev.feet()), Some(12));
        assert_eq!(loc.frn.as_u32(), Ok(30559));
    }
}
