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

use crate::{Alphanumeric, Error, FixedField};

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SecCode {
    MORA,
    Navaid,
    Enroute,
    Heliport,
    Airport,
    CompanyRoute,
    Table,
    Airspace,
}

impl FixedField<'_> for SecCode {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.first().copied().unwrap_or(b' ') {
            b'A' => Ok(Self::MORA),
            b'D' => Ok(Self::Navaid),
            b'E' => Ok(Self::Enroute),
            b'H' => Ok(Self::Heliport),
            b'P' => Ok(Self::Airport),
            b'R' => Ok(Self::CompanyRoute),
            b'T' => Ok(Self::Table),
            b'U' => Ok(Self::Airspace),
            byte => Err(Error::InvalidCharacter {
                field: "Section Code",
                byte,
                expected: "SEC CODE according to ARINC 424-23 5.4",
            }),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SubCodeKind {
    // MORA
    GridMORA,
    // Navaid
    VHFNavaid,
    NDBNavaid,
    // Enroute
    Waypoint,
    AirwayMarker,
    HoldingPattern,
    Airway,
    PreferredRoute,
    AirwayRestriction,
    Communication,
    // Heliport
    Pad,
    // Airport
    ReferencePoint,
    Gate,
    Runway,
    Localizer,
    MLS,
    Marker,
    TerminalNDB,
    PathPoint,
    FlightPlanningArrivalDeparture,
    GLS,
    // Heliport, Airport
    TerminalWaypoint,
    SID,
    STAR,
    Approach,
    TAA,
    MSA,
    // CompanyRoute
    CompanyRoute,
    AlternateRecord,
    // Tables
    CruisingTable,
    GeographicalReference,
    // Airspace
    ControlledAirspace,
    FIRUIR,
    RestrictiveAirspace,
}

macro_rules! sub_code_error {
    ($byte:expr) => {
        Err(Error::InvalidCharacter {
            field: "Subsection Code",
            byte: $byte,
            expected: "SUB CODE according to ARINC 424-23 5.5",
        })
    };
}

pub type SubCode<'a> = Alphanumeric<'a, 1>;

impl<'a> SubCode<'a> {
    /// Subsection code kind for the section.
    ///
    /// # Errors
    ///
    /// Will return an error if the subsection code is invalid for the section.
    pub fn kind(&self, sec_code: &SecCode) -> Result<SubCodeKind, Error> {
        use SecCode::*;
        use SubCodeKind as K;

        match (sec_code, self.first()) {
            (MORA, b'S') => Ok(K::GridMORA),

            (Navaid, b' ') => Ok(K::VHFNavaid),
            (Navaid, b'B') => Ok(K::NDBNavaid),

            (Enroute, b'A') => Ok(K::Waypoint),
            (Enroute, b'M') => Ok(K::AirwayMarker),
            (Enroute, b'P') => Ok(K::HoldingPattern),
            (Enroute, b'R') => Ok(K::Airway),
            (Enroute, b'T') => Ok(K::PreferredRoute),
            (Enroute, b'U') => Ok(K::AirwayRestriction),
            (Enroute, b'V') => Ok(K::Communication),

            (Heliport, b'A') => Ok(K::Pad),
            (Airport, b'A') => Ok(K::ReferencePoint),
            (Airport, b'B') => Ok(K::Gate),
            (Airport, b'G') => Ok(K::Runway),
            (Airport, b'I') => Ok(K::Localizer),
            (Airport, b'L') => Ok(K::MLS),
            (Airport, b'M') => Ok(K::Marker),
            (Airport, b'N') => Ok(K::TerminalNDB),
            (Airport, b'P') => Ok(K::PathPoint),
            (Airport, b'R') => Ok(K::FlightPlanningArrivalDeparture),
            (Airport, b'T') => Ok(K::GLS),
            (Airport | Heliport, b'C') => Ok(K::TerminalWaypoint),
            (Airport | Heliport, b'D') => Ok(K::SID),
            (Airport | Heliport, b'E') => Ok(K::STAR),
            (Airport | Heliport, b'F') => Ok(K::Approach),
            (Airport | Heliport, b'K') => Ok(K::TAA),
            (Airport | Heliport, b'S') => Ok(K::MSA),

            (CompanyRoute, b' ') => Ok(K::CompanyRoute),
            (CompanyRoute, b'A') => Ok(K::AlternateRecord),

            (Table, b'C') => Ok(K::CruisingTable),
            (Table, b'G') => Ok(K::GeographicalReference),

            (Airspace, b'C') => Ok(K::ControlledAirspace),
            (Airspace, b'F') => Ok(K::FIRUIR),
            (Airspace, b'R') => Ok(K::RestrictiveAirspace),

            (_, byte) => sub_code_error!(byte),
        }
    }
}
