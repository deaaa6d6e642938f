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

/// 4.1.9 SID (PD), STAR (PE) and Approach (PF) Procedure
///
/// Each record is one leg of a procedure's transition. Heliport procedures
/// (HD, HE, HF) share the same layout.
#[derive(Record)]
#[arinc424(kinds = "PD, PE, PF, HD, HE, HF")]
pub struct Procedure<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub procedure_ident: ProcedureIdent<'a>,
    pub route_type: RouteType,
    pub transition_ident: Option<TransitionIdent<'a>>,
    #[arinc424(skip(1))]
    pub seq_nr: SequenceNumber<'a, 3>,
    pub fix_ident: Option<FixIdent<'a>>,
    pub fix_icao_code: Option<IcaoCode<'a>>,
    /// Section and subsection of the fix, e.g. `PC` or `D `.
    pub fix_section: Option<Alphanumeric<'a, 2>>,
    pub cont_nr: ContNr<'a>,
    pub waypoint_description: WaypointDescription,
    pub turn_dir: Option<TurnDir>,
    pub rnp: Option<RequiredNavigationPerformance<'a>>,
    pub path_term: PathTerm,
    pub turn_dir_valid: Option<Alphanumeric<'a, 1>>,
    pub recommended_navaid: Option<NavaidIdent<'a>>,
    pub recommended_navaid_icao_code: Option<IcaoCode<'a>>,
    pub arc_radius: Option<ArcRadius<'a>>,
    pub theta: Option<Theta<'a>>,
    pub rho: Option<Rho<'a>>,
    pub course: Option<Course>,
    pub distance: Option<RouteDistance>,
    /// Section and subsection of the recommended navaid.
    pub recommended_navaid_section: Option<Alphanumeric<'a, 2>>,
    #[arinc424(skip(2))]
    pub altitude_description: AltitudeDescription,
    #[arinc424(skip(1))]
    pub altitude: Option<Altitude>,
    pub altitude2: Option<Altitude>,
    pub transition_altitude: Option<Altitude>,
    pub speed_limit: Option<SpeedLimit<'a>>,
    #[arinc424(skip(4))]
    pub center_fix: Option<FixIdent<'a>>,
    #[arinc424(skip(1))]
    pub center_fix_icao_code: Option<IcaoCode<'a>>,
    /// Section and subsection of the center fix.
    pub center_fix_section: Option<Alphanumeric<'a, 2>>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const IF_LEG: &[u8] = b"SUSAP KJFKK6FI04L  ACRI   010CRI  K6D 0VA A    IF                                 + 03000                                  304131709";

    const RF_LEG: &[u8] = b"SUSAP KJFKK6FR04L  R      040ZALPOK6PC0E  FL   RF       003000        04360057      01900          180    RF04L K6PC       304201709";

    const HOLD_LEG: &[u8] = b"SUSAP KJFKK6FI04L  I      090CRI  K6D 0VE HR   HM CRI K6              223TT010D     03000                                  304251709";

    #[test]
    fn initial_fix_leg() {
        let leg = Procedure::try_from(IF_LEG).expect("leg should parse");

        assert_eq!(leg.sub_code.kind(&leg.sec_code), Ok(SubCodeKind::Approach));
        assert_eq!(leg.arpt_ident.as_str(), "KJFK");
        assert_eq!(leg.procedure_ident.as_str(), "I04L");
        assert_eq!(leg.route_type.code(), b'A');
        assert_eq!(leg.transition_ident.map(|t| t.as_str()), Some("CRI"));
        assert_eq!(leg.seq_nr.as_u16(), Ok(10));
        assert_eq!(leg.fix_ident.map(|fix| fix.as_str()), Some("CRI"));
        assert_eq!(leg.fix_section.map(|sec| sec.as_bytes()), Some(b"D ".as_slice()));
        assert_eq!(
            leg.waypoint_description.fix_function(),
            Some(FixFunction::InitialApproachFix)
        );
        assert_eq!(leg.path_term, PathTerm::IF);
        assert_eq!(leg.altitude_description, AltitudeDescription::AtOrAbove);
        assert_eq!(leg.altitude, Some(Altitude::Feet(3000)));
        assert_eq!(leg.altitude2, None);
    }

    #[test]
    fn constant_radius_leg() {
        let leg = Procedure::try_from(RF_LEG).expect("leg should parse");

        assert_eq!(leg.transition_ident, None);
        assert_eq!(leg.fix_ident.map(|fix| fix.as_str()), Some("ZALPO"));
        assert_eq!(leg.turn_dir, Some(TurnDir::Left));
        assert_eq!(leg.path_term, PathTerm::RF);
        assert_eq!(leg.arc_radius.map(|r| r.nm()), Some(Ok(3.0)));
        assert_eq!(leg.course, Some(Course::Magnetic(43.6)));
        assert_eq!(leg.distance, Some(RouteDistance::Distance(5.7)));
        assert_eq!(leg.altitude_description, AltitudeDescription::At);
        assert_eq!(leg.altitude.map(|alt| alt.feet()), Some(1900));
        assert_eq!(leg.speed_limit.map(|speed| speed.as_u16()), Some(Ok(180)));
        assert_eq!(leg.center_fix.map(|fix| fix.as_str()), Some("RF04L"));
        assert_eq!(
            leg.center_fix_section.map(|sec| sec.as_bytes()),
            Some(b"PC".as_slice())
        );
    }

    #[test]
    fn holding_leg() {
        let leg = Procedure::try_from(HOLD_LEG).expect("leg should parse");

        assert_eq!(leg.path_term, PathTerm::HM);
        assert_eq!(leg.turn_dir, Some(TurnDir::Right));
        assert_eq!(leg.recommended_navaid.map(|nav| nav.as_str()), Some("CRI"));
        assert_eq!(leg.course, Some(Course::True(223.0)));
        assert_eq!(leg.distance, Some(RouteDistance::Time(1.0)));
        assert_eq!(
            leg.waypoint_description.fix_function(),
            Some(FixFunction::HoldingFix)
        );
    }
}
