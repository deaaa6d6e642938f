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

use arinc424::fields::{IlsCategory, RouteDistance};
use arinc424::records;

use super::fields::*;
use crate::core::VerticalDistance;
use crate::error::Error;
use crate::nd::*;

impl<'a> TryFrom<records::Airport<'a>> for Point {
    type Error = Error;

    fn try_from(arpt: records::Airport) -> Result<Self, Self::Error> {
        Ok(Point {
            ident: arpt.arpt_ident.to_string(),
            position: lat_lon_to_point(arpt.latitude, arpt.longitude)?,
            kind: PointKind::Airport,
            name: arpt.airport_name.to_string(),
            icao: arpt.icao_code.to_string(),
            frequency: None,
            declination: declination(arpt.mag_var),
            elevation_ft: arpt.elevation.map(|elev| elev.feet()),
            runway: None,
            localizer_course: None,
        })
    }
}

/// A runway with the declination of its airport.
impl<'a> TryFrom<(records::Runway<'a>, f64)> for Point {
    type Error = Error;

    fn try_from((rwy, declination): (records::Runway, f64)) -> Result<Self, Self::Error> {
        let geometry = RunwayGeometry {
            length_ft: rwy.runway_length.as_u32()?,
            bearing: rwy.rwy_brg.to_true(declination),
            width_ft: rwy.width.map(|w| w.as_u16()).transpose()?,
            displaced_threshold_ft: rwy.displaced_threshold.map(|d| d.as_u16()).transpose()?,
            threshold_crossing_height_ft: rwy.tch.map(|tch| tch.as_u8()).transpose()?,
            // runways designated by a letter only have no numbered reciprocal
            reciprocal: rwy
                .runway_id
                .reciprocal()
                .ok()
                .map(|designator| format!("RW{designator}")),
        };

        Ok(Point {
            ident: rwy.runway_id.to_string(),
            position: lat_lon_to_point(rwy.threshold_latitude, rwy.threshold_longitude)?,
            kind: PointKind::Runway,
            name: String::new(),
            icao: rwy.icao_code.to_string(),
            frequency: None,
            declination: Some(declination),
            elevation_ft: rwy.threshold_elevation.map(|elev| elev.feet()),
            runway: Some(geometry),
            localizer_course: None,
        })
    }
}

impl<'a> TryFrom<records::Waypoint<'a>> for Point {
    type Error = Error;

    fn try_from(wp: records::Waypoint) -> Result<Self, Self::Error> {
        Ok(Point {
            ident: wp.fix_ident.to_string(),
            position: lat_lon_to_point(wp.latitude, wp.longitude)?,
            kind: if wp.is_terminal() {
                PointKind::TerminalWaypoint
            } else {
                PointKind::EnrouteWaypoint
            },
            name: wp.name_desc.to_string(),
            icao: wp.icao_code().map(|icao| icao.to_string()).unwrap_or_default(),
            frequency: None,
            declination: declination(wp.mag_var),
            elevation_ft: None,
            runway: None,
            localizer_course: None,
        })
    }
}

impl<'a> TryFrom<records::VhfNavaid<'a>> for Point {
    type Error = Error;

    fn try_from(nav: records::VhfNavaid) -> Result<Self, Self::Error> {
        let class = nav.class;
        let kind = match (class.is_vor(), class.has_dme(), class.is_tacan()) {
            (true, _, true) => PointKind::Vortac,
            (true, true, false) => PointKind::VorDme,
            (true, false, false) => PointKind::Vor,
            (false, _, true) => PointKind::Tacan,
            (false, true, false) => PointKind::Dme,
            (false, false, false) => {
                return Err(Error::FieldFormat(format!(
                    "navaid {} has class {class:?}",
                    nav.vor_ident
                )))
            }
        };

        let (lat, lon) = nav.position().ok_or_else(|| {
            Error::FieldFormat(format!("navaid {} has no position", nav.vor_ident))
        })?;

        Ok(Point {
            ident: nav.vor_ident.to_string(),
            position: lat_lon_to_point(lat, lon)?,
            kind,
            name: nav.name.to_string(),
            icao: nav.icao_code.to_string(),
            frequency: Some(nav.frequency.mhz()?),
            declination: declination(nav.station_declination),
            elevation_ft: nav.dme_elevation.map(|elev| elev.feet()),
            runway: None,
            localizer_course: None,
        })
    }
}

impl<'a> TryFrom<records::NdbNavaid<'a>> for Point {
    type Error = Error;

    fn try_from(ndb: records::NdbNavaid) -> Result<Self, Self::Error> {
        Ok(Point {
            ident: ndb.ndb_ident.to_string(),
            position: lat_lon_to_point(ndb.latitude, ndb.longitude)?,
            kind: if ndb.is_terminal() {
                PointKind::TerminalNdb
            } else {
                PointKind::Ndb
            },
            name: ndb.name.to_string(),
            icao: ndb.icao_code.to_string(),
            frequency: Some(ndb.frequency.khz()?),
            declination: declination(ndb.mag_var),
            elevation_ft: None,
            runway: None,
            localizer_course: None,
        })
    }
}

impl<'a> TryFrom<records::Localizer<'a>> for Point {
    type Error = Error;

    fn try_from(loc: records::Localizer) -> Result<Self, Self::Error> {
        let kind = match loc.category {
            IlsCategory::LocalizerOnly => PointKind::Localizer,
            IlsCategory::CatI | IlsCategory::CatII | IlsCategory::CatIII => PointKind::Ils,
            IlsCategory::IGS => PointKind::Igs,
            IlsCategory::LdaWithGlideSlope | IlsCategory::LdaWithoutGlideSlope => PointKind::Lda,
            IlsCategory::SdfWithGlideSlope | IlsCategory::SdfWithoutGlideSlope => PointKind::Sdf,
        };
        let declination = declination(loc.station_declination);

        Ok(Point {
            ident: loc.loc_ident.to_string(),
            position: lat_lon_to_point(loc.loc_latitude, loc.loc_longitude)?,
            kind,
            name: loc.runway_id.to_string(),
            icao: loc.icao_code.to_string(),
            frequency: Some(loc.frequency.mhz()?),
            declination,
            elevation_ft: loc.gs_elevation.map(|elev| elev.feet()),
            runway: None,
            localizer_course: Some(loc.loc_bearing.to_true(declination.unwrap_or_default())),
        })
    }
}

impl<'a> TryFrom<records::Procedure<'a>> for Leg {
    type Error = Error;

    fn try_from(leg: records::Procedure) -> Result<Self, Self::Error> {
        let desc = leg.waypoint_description;

        Ok(Leg {
            seq_nr: leg.seq_nr.as_u16()?,
            path_term: leg.path_term,
            fix: fix_ref(leg.fix_ident, leg.fix_section)?,
            turn_direction: leg.turn_dir.and_then(turn_direction),
            recommended_navaid: fix_ref(leg.recommended_navaid, leg.recommended_navaid_section)?,
            center_fix: fix_ref(leg.center_fix, leg.center_fix_section)?,
            arc_radius_nm: leg.arc_radius.map(|r| r.nm()).transpose()?,
            theta: leg.theta.map(|theta| theta.value()).transpose()?,
            rho_nm: leg.rho.map(|rho| rho.value()).transpose()?,
            course: leg.course,
            distance: leg.distance,
            altitude_description: leg.altitude_description,
            altitude_ft: leg.altitude.map(|alt| alt.feet()),
            altitude2_ft: leg.altitude2.map(|alt| alt.feet()),
            speed_limit_kt: leg.speed_limit.map(|kt| kt.as_u16()).transpose()?,
            fly_over: desc.is_fly_over(),
            fix_function: desc.fix_function(),
            missed_approach_start: desc.is_first_missed_approach_leg(),
        })
    }
}

impl<'a> TryFrom<records::Airway<'a>> for AirwayFix {
    type Error = Error;

    fn try_from(awy: records::Airway) -> Result<Self, Self::Error> {
        Ok(AirwayFix {
            seq_nr: awy.seq_nr.as_u16()?,
            fix: FixRef::new(awy.fix_ident.as_str(), fix_section(awy.fix_section)?),
            outbound_course: awy.outbound_course.map(|crs| crs.deg()),
            distance_nm: match awy.distance {
                Some(RouteDistance::Distance(nm)) => Some(nm),
                Some(RouteDistance::Time(_)) | None => None,
            },
            min_altitude_ft: awy.min_altitude.map(|alt| alt.feet()),
            max_altitude_ft: awy.max_altitude.map(|alt| alt.feet()),
        })
    }
}

/// A boundary record with the airspace it belongs to.
pub(super) struct AirspaceRecord {
    pub key: AirspaceKey,
    pub airspace: Airspace,
    pub segment: BoundarySegment,
}

impl<'a> TryFrom<records::ControlledAirspace<'a>> for AirspaceRecord {
    type Error = Error;

    fn try_from(arsp: records::ControlledAirspace) -> Result<Self, Self::Error> {
        let designation = arsp.arsp_cntr.as_str().trim().to_string();

        let airspace = Airspace {
            name: arsp
                .arsp_name
                .map(|name| name.to_string())
                .unwrap_or_else(|| designation.clone()),
            airspace_type: arsp.arsp_type.into(),
            classification: arsp
                .arsp_class
                .and_then(|class| AirspaceClassification::from_letter(class.letter())),
            ceiling: arsp
                .upper_limit
                .map(|limit| vertical_distance(limit, arsp.upper_unit_indicator))
                .unwrap_or(VerticalDistance::Unlimited),
            floor: arsp
                .lower_limit
                .map(|limit| vertical_distance(limit, arsp.lower_unit_indicator))
                .unwrap_or(VerticalDistance::Gnd),
            controlling_agency: None,
        };

        Ok(AirspaceRecord {
            key: AirspaceKey {
                icao: arsp.icao_code.to_string(),
                section: AirspaceSection::Controlled,
                type_code: controlled_type_code(arsp.arsp_type),
                designation,
                multiple_code: arsp.multi_cd.first() as char,
            },
            airspace,
            segment: BoundarySegment {
                seq_nr: arsp.seq_nr.as_u16()?,
                path: arsp.bdry_via.path,
                point: optional_point(arsp.latitude, arsp.longitude)?,
                arc_center: optional_point(arsp.arc_origin_latitude, arsp.arc_origin_longitude)?,
                arc_radius_nm: arsp.arc_dist.map(|d| d.dist()).transpose()?.map(f64::from),
                shape_end: arsp.bdry_via.return_to_origin,
            },
        })
    }
}

impl<'a> TryFrom<records::RestrictiveAirspace<'a>> for AirspaceRecord {
    type Error = Error;

    fn try_from(arsp: records::RestrictiveAirspace) -> Result<Self, Self::Error> {
        let designation = arsp.restrictive_designation.as_str().trim().to_string();

        let airspace = Airspace {
            name: arsp
                .arsp_name
                .map(|name| name.to_string())
                .unwrap_or_else(|| designation.clone()),
            airspace_type: arsp.restrictive_type.into(),
            classification: None,
            ceiling: arsp
                .upper_limit
                .map(|limit| vertical_distance(limit, arsp.upper_unit_indicator))
                .unwrap_or(VerticalDistance::Unlimited),
            floor: arsp
                .lower_limit
                .map(|limit| vertical_distance(limit, arsp.lower_unit_indicator))
                .unwrap_or(VerticalDistance::Gnd),
            controlling_agency: None,
        };

        Ok(AirspaceRecord {
            key: AirspaceKey {
                icao: arsp.icao_code.to_string(),
                section: AirspaceSection::Restrictive,
                type_code: restrictive_type_code(arsp.restrictive_type),
                designation,
                multiple_code: arsp.multi_cd.first() as char,
            },
            airspace,
            segment: BoundarySegment {
                seq_nr: arsp.seq_nr.as_u16()?,
                path: arsp.bdry_via.path,
                point: optional_point(arsp.latitude, arsp.longitude)?,
                arc_center: optional_point(arsp.arc_origin_latitude, arsp.arc_origin_longitude)?,
                arc_radius_nm: arsp.arc_dist.map(|d| d.dist()).transpose()?.map(f64::from),
                shape_end: arsp.bdry_via.return_to_origin,
            },
        })
    }
}

/// Returns the key of the airspace a continuation belongs to.
pub(super) fn continuation_key(cont: &records::AirspaceContinuation) -> AirspaceKey {
    let section = match cont.sub_code.first() {
        b'C' => AirspaceSection::Controlled,
        _ => AirspaceSection::Restrictive,
    };

    let type_code = match (section, cont.arsp_type.first()) {
        // restricted areas coded with G share the key of R
        (AirspaceSection::Restrictive, b'G') => 'R',
        (_, code) => code as char,
    };

    AirspaceKey {
        icao: cont.icao_code.to_string(),
        section,
        type_code,
        designation: cont.designation().trim().to_string(),
        multiple_code: cont.multi_cd.first() as char,
    }
}
