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

use arinc424::fields::PathTerm;
use geo::{Distance, Haversine};
use navtrack::nd::{AirspaceClassification, Bucket, NavigationData, ProcedureKind, TransitionKey};
use navtrack::{Error, TrackOptions, VerticalDistance};

const AIRPORT: &[u8] = b"SUSAP KGCKK3AGCK     0     079  N38421448W101282608E0060002891                               GARDEN CITY RGNL              501012407";
const RUNWAY_17: &[u8] = b"SUSAP KGCKK3GRW17    0073001735 N38430000W101283000               02880      100                                           501022407";
const RUNWAY_35: &[u8] = b"SUSAP KGCKK3GRW35    0073003535 N38414800W101282900               02885      100                                           501032407";
const GCK01: &[u8] = b"SUSAPCKGCKK3 GCK01 K30    W     N38500000W101300000                       E0060                   GCK01                    501042407";
const GCK03: &[u8] = b"SUSAPCKGCKK3 GCK03 K30    W     N39000000W101300000                       E0060                   GCK03                    501052407";
const ALFAA: &[u8] = b"SUSAEAENRT   ALFAA K30    W     N38000000W101000000                       E0060                   ALFAA                    501062407";
const BRAVO: &[u8] = b"SUSAEAENRT   BRAVO K30    W     N38300000W101000000                       E0060                   BRAVO                    501072407";
const CHRLY: &[u8] = b"SUSAEAENRT   CHRLY K30    W     N39000000W101000000                       E0060                   CHRLY                    501082407";
const V999_10: &[u8] = b"SUSAER       V999        0010ALFAAK3EA0     OL                                     03000                                   501092407";
const V999_20: &[u8] = b"SUSAER       V999        0020BRAVOK3EA0     OL                                     03000                                   501102407";
const V999_30: &[u8] = b"SUSAER       V999        0030CHRLYK3EA0     OL                                     03000                                   501112407";
const SID_VA: &[u8] = b"SUSAP KGCKK3DGCK1  1RW35  010         0        VA                     3535          03500                                  501122407";
const SID_DF: &[u8] = b"SUSAP KGCKK3DGCK1  1RW35  020GCK01K3PC0        DF                                                                          501132407";
const SID_TF: &[u8] = b"SUSAP KGCKK3DGCK1  1RW35  030GCK03K3PC0        TF                                 + 06000                                  501142407";
const SID_BAD_IF: &[u8] = b"SUSAP KGCKK3DGCK1  3NOWHR 010GCK03K3PC0        IF                                                                          501152407";
const SID_BAD_TF: &[u8] = b"SUSAP KGCKK3DGCK1  3NOWHR 020NOWHRK3PC0        TF                                                                          501162407";
const SID_FD_IF: &[u8] = b"SUSAP KGCKK3DGCK2  2      010GCK01K3PC0        IF                                                                          501172407";
const SID_FD: &[u8] = b"SUSAP KGCKK3DGCK2  2      020GCK03K3PC0        FD                     36000100                                             501182407";
const CIRCLE: &[u8] = b"SUSAUCK3AKGCK PAC  A00100     CE                   N38421448W1012826080050       GND  A04800MGARDEN CITY                   501192407";
const AREA_10: &[u8] = b"SUSAUCK3AKGCK PAC  B00100     G N38300000W101400000                              GND  A04800MGARDEN CITY                   501202407";
const AREA_20: &[u8] = b"SUSAUCK3AKGCK PAC  B00200     G N38300000W101200000                              GND  A04800MGARDEN CITY                   501212407";
const AREA_30: &[u8] = b"SUSAUCK3AKGCK PAC  B00300     G N38500000W101200000                              GND  A04800MGARDEN CITY                   501222407";
const AREA_40: &[u8] = b"SUSAUCK3AKGCK PAC  B00400     GEN38500000W101400000                              GND  A04800MGARDEN CITY                   501232407";

fn navigation_data(records: &[&[u8]]) -> NavigationData {
    NavigationData::try_from_arinc424(&records.join(b"\n".as_slice()))
}

fn garden_city() -> NavigationData {
    navigation_data(&[
        AIRPORT, RUNWAY_17, RUNWAY_35, GCK01, GCK03, ALFAA, BRAVO, CHRLY, V999_10, V999_20,
        V999_30, SID_VA, SID_DF, SID_TF, SID_BAD_IF, SID_BAD_TF, SID_FD_IF, SID_FD, CIRCLE,
        AREA_10, AREA_20, AREA_30, AREA_40,
    ])
}

#[test]
fn decodes_navigation_data() {
    let nd = garden_city();

    assert!(
        nd.errors().is_empty(),
        "should have no errors: {:?}",
        nd.errors()
    );

    let gck = nd.airports().get("KGCK").expect("KGCK should be decoded");
    assert!((gck.position.y() - 38.704022).abs() < 1e-5);
    assert!((gck.position.x() + 101.473911).abs() < 1e-5);
    assert_eq!(gck.declination, Some(-6.0));
    assert_eq!(gck.elevation_ft, Some(2891));

    let area = nd.terminal_area("KGCK").expect("KGCK should have a terminal area");
    assert_eq!(area.runways.len(), 2);
    assert_eq!(area.waypoints.len(), 2);
    assert_eq!(nd.waypoints().len(), 3);
}

#[test]
fn skips_invalid_records() {
    let mut invalid = AIRPORT.to_vec();
    invalid[4] = b'Q';

    let nd = navigation_data(&[AIRPORT, invalid.as_slice(), GCK01]);

    assert_eq!(nd.errors().len(), 1);
    assert!(nd.airports().get("KGCK").is_some());
    assert!(nd.terminal_area("KGCK").is_some());
}

#[test]
fn runway_outline() {
    let nd = garden_city();
    let outline = nd
        .runway_polygon("KGCK", "RW35")
        .expect("runway should have an outline");
    let ring = outline.exterior();

    assert_eq!(ring.0.len(), 5);
    assert!(ring.is_closed());

    // 100 ft wide
    let width = Haversine.distance(geo::Point::from(ring.0[0]), geo::Point::from(ring.0[1]));
    let length = Haversine.distance(geo::Point::from(ring.0[1]), geo::Point::from(ring.0[2]));
    assert!((width.min(length) - 30.48).abs() < 0.5, "width was {width} {length}");
}

#[test]
fn builds_departure_transitions_independently() {
    let nd = garden_city();
    let sid = nd
        .procedure("KGCK", "GCK1", ProcedureKind::Sid)
        .expect("GCK1 should be decoded");

    let tracks = sid.build_tracks(&nd, None, &TrackOptions::default());
    assert_eq!(tracks.len(), 2);

    let runway = TransitionKey::new(Bucket::RunwayTransition, "RW35");
    for (key, track) in tracks {
        if key == runway {
            let track = track.expect("runway transition should build");
            let fixes = track.fixes();

            // the departure end of 35 is the threshold of 17
            let rw17 = nd
                .terminal_area("KGCK")
                .and_then(|area| area.runway("RW17"))
                .expect("RW17 should be decoded");
            let offset = Haversine.distance(fixes[0].position, rw17.position);
            assert!(offset < 100.0, "departure end is {offset} m off");

            let idents: Vec<_> = track
                .published_fixes()
                .filter_map(|fix| fix.ident.as_deref())
                .collect();
            assert_eq!(idents, ["GCK01", "GCK03"]);
            assert_eq!(fixes.last().and_then(|fix| fix.altitude_ft), Some(6000.0));
        } else {
            assert_eq!(key.ident, "NOWHR");
            assert_eq!(track, Err(Error::UnresolvedFixReference("NOWHR".to_string())));
        }
    }
}

#[test]
fn fix_to_dme_distance_is_unsupported() {
    let nd = garden_city();
    let sid = nd
        .procedure("KGCK", "GCK2", ProcedureKind::Sid)
        .expect("GCK2 should be decoded");
    let common = TransitionKey::new(Bucket::CommonRoute, "");

    assert_eq!(
        sid.build_track(&common, &nd, None, &TrackOptions::default()),
        Err(Error::UnsupportedLegType(PathTerm::FD))
    );
    assert!(matches!(
        sid.build_track(
            &TransitionKey::new(Bucket::EnrouteTransition, "GCK"),
            &nd,
            None,
            &TrackOptions::default()
        ),
        Err(Error::UnknownTransition(_))
    ));
}

#[test]
fn airway_between_fixes() {
    let nd = garden_city();
    let v999 = nd.airway("V999").expect("V999 should be decoded");

    let idents = |from, to, include| -> Result<Vec<String>, Error> {
        Ok(v999
            .sub_range(from, to, &nd, include)?
            .into_iter()
            .map(|point| point.ident)
            .collect())
    };

    assert_eq!(
        idents(Some("CHRLY"), Some("ALFAA"), true),
        Ok(vec!["CHRLY".to_string(), "BRAVO".to_string(), "ALFAA".to_string()])
    );
    assert_eq!(
        idents(Some("ALFAA"), Some("CHRLY"), false),
        Ok(vec!["BRAVO".to_string()])
    );
    assert_eq!(idents(None, None, true).map(|ids| ids.len()), Ok(3));
    assert!(matches!(
        idents(Some("DELTA"), None, true),
        Err(Error::FixNotOnAirway { .. })
    ));
}

#[test]
fn airspace_outlines() {
    let nd = garden_city();
    assert_eq!(nd.airspaces().len(), 2);

    let circle = nd
        .airspaces()
        .iter()
        .find(|shape| shape.key().multiple_code == 'A')
        .expect("circle should be decoded");

    let airspace = circle.airspace();
    assert_eq!(airspace.name, "GARDEN CITY");
    assert_eq!(airspace.classification, Some(AirspaceClassification::C));
    assert_eq!(airspace.floor, VerticalDistance::Gnd);
    assert_eq!(airspace.ceiling, VerticalDistance::Msl(4800));

    let center = geo::Point::new(-101.473911, 38.704022);
    let ring = circle.build_polygon().expect("circle should close");
    assert_eq!(ring.0.len(), 121);
    assert!(ring.is_closed());
    for coord in &ring.0 {
        let radius = Haversine.distance(center, geo::Point::from(*coord));
        assert!((radius - 5.0 * 1852.0).abs() < 50.0, "radius was {radius} m");
    }

    let area = nd
        .airspaces()
        .iter()
        .find(|shape| shape.key().multiple_code == 'B')
        .expect("area should be decoded");
    let ring = area.build_polygon().expect("area should close");
    assert_eq!(ring.0.len(), 5);
    assert_eq!(ring.0.first(), ring.0.last());
}
