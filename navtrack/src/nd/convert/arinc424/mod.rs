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

use arinc424::fields::ApplicationType;
use arinc424::records::RecordKind;
use log::{debug, trace, warn};

use crate::error::Error;
use crate::nd::*;

mod fields;
mod records;

use records::{continuation_key, AirspaceRecord};

impl NavigationData {
    /// Creates navigation data from an ARINC 424 feed.
    ///
    /// Records that can't be decoded are skipped. Their errors are kept in
    /// the navigation data's [`errors`](Self::errors).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use navtrack::nd::NavigationData;
    /// let data = std::fs::read("FAACIFP18").expect("file should be readable");
    /// let nd = NavigationData::try_from_arinc424(&data);
    ///
    /// for e in nd.errors() {
    ///     eprintln!("{e}");
    /// }
    /// ```
    pub fn try_from_arinc424(data: &[u8]) -> Self {
        let mut builder = NavigationData::builder();

        for (kind, bytes) in arinc424::records::Records::new(data) {
            if let Err(e) = builder.decode(kind, bytes) {
                warn!("skipping record: {e}");
                builder.add_error(Error::InvalidRecord {
                    record: bytes.to_vec(),
                    error: Box::new(e),
                });
            }
        }

        builder.build()
    }
}

impl NavigationDataBuilder {
    /// Decodes one record and adds it to the navigation data.
    ///
    /// Continuations of points, procedures and airways as well as records of
    /// sections without counterpart in the navigation data are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSectionCode`] for a record of unknown section
    /// and any error while decoding its fields.
    pub fn decode_record(&mut self, record: &[u8]) -> Result<(), Error> {
        self.decode(RecordKind::of(record), record)
    }

    fn decode(&mut self, kind: RecordKind, bytes: &[u8]) -> Result<(), Error> {
        match kind {
            RecordKind::Airport => {
                let record = arinc424::records::Airport::try_from(bytes)?;
                self.add_airport(Point::try_from(record)?);
            }

            RecordKind::Runway => {
                let record = arinc424::records::Runway::try_from(bytes)?;
                let airport = record.arpt_ident.to_string();
                let declination = self.airport_declination(&airport);
                self.add_runway(&airport, Point::try_from((record, declination))?);
            }

            RecordKind::Waypoint => {
                let record = arinc424::records::Waypoint::try_from(bytes)?;
                let region = record.regn_code.to_string();
                let wp = Point::try_from(record)?;

                match wp.kind {
                    PointKind::TerminalWaypoint => self.add_terminal_waypoint(&region, wp),
                    _ => self.add_waypoint(wp),
                }
            }

            RecordKind::VhfNavaid => {
                let record = arinc424::records::VhfNavaid::try_from(bytes)?;
                self.add_navaid(Point::try_from(record)?);
            }

            RecordKind::NdbNavaid => {
                let record = arinc424::records::NdbNavaid::try_from(bytes)?;
                let airport = record.arpt_ident.map(|ident| ident.to_string());
                let ndb = Point::try_from(record)?;

                match (ndb.kind, airport) {
                    (PointKind::TerminalNdb, Some(airport)) => self.add_terminal_ndb(&airport, ndb),
                    (PointKind::TerminalNdb, None) => {
                        return Err(Error::FieldFormat(format!(
                            "terminal NDB {} has no airport",
                            ndb.ident
                        )))
                    }
                    _ => self.add_ndb(ndb),
                }
            }

            RecordKind::Localizer => {
                let record = arinc424::records::Localizer::try_from(bytes)?;
                let airport = record.arpt_ident.to_string();
                self.add_localizer(&airport, Point::try_from(record)?);
            }

            RecordKind::Procedure => {
                let record = arinc424::records::Procedure::try_from(bytes)?;
                let kind = match record.sub_code.first() {
                    b'D' => ProcedureKind::Sid,
                    b'E' => ProcedureKind::Star,
                    _ => ProcedureKind::Approach,
                };

                let procedure = ProcedureKey {
                    airport: record.arpt_ident.to_string(),
                    kind,
                    ident: record.procedure_ident.to_string(),
                };
                let transition = TransitionKey::new(
                    Bucket::from_route_type(kind, record.route_type.code())?,
                    record
                        .transition_ident
                        .map(|ident| ident.to_string())
                        .unwrap_or_default(),
                );

                let leg = Leg::try_from(record)?;
                trace!("{} {transition} leg {leg}", procedure.ident);
                self.add_leg(procedure, transition, leg)?;
            }

            RecordKind::Airway => {
                let record = arinc424::records::Airway::try_from(bytes)?;
                let ident = record.route_ident.to_string();
                self.add_airway_fix(&ident, AirwayFix::try_from(record)?)?;
            }

            RecordKind::ControlledAirspace => {
                let record = arinc424::records::ControlledAirspace::try_from(bytes)?;
                let AirspaceRecord {
                    key,
                    airspace,
                    segment,
                } = AirspaceRecord::try_from(record)?;
                self.add_boundary_segment(key, airspace, segment)?;
            }

            RecordKind::RestrictiveAirspace => {
                let record = arinc424::records::RestrictiveAirspace::try_from(bytes)?;
                let AirspaceRecord {
                    key,
                    airspace,
                    segment,
                } = AirspaceRecord::try_from(record)?;
                self.add_boundary_segment(key, airspace, segment)?;
            }

            RecordKind::AirspaceContinuation => {
                let record = arinc424::records::AirspaceContinuation::try_from(bytes)?;
                let key = continuation_key(&record);

                match (record.application_type, record.controlling_agency) {
                    (ApplicationType::ControllingAgency, Some(agency)) => {
                        self.set_controlling_agency(&key, agency.as_str());
                    }
                    (application, _) => {
                        warn!("continuation {application:?} of airspace {key} is not supported");
                    }
                }
            }

            RecordKind::Continuation => debug!("skipping continuation record"),

            RecordKind::Unsupported => debug!("skipping record of unsupported section"),

            RecordKind::Unknown => {
                return Err(match arinc424::classify(bytes) {
                    Err(e) => e.into(),
                    Ok(classification) => Error::FieldFormat(format!(
                        "unknown record {:?}",
                        classification.subsection
                    )),
                });
            }
        }

        Ok(())
    }

    fn airport_declination(&self, airport: &str) -> f64 {
        self.airport(airport)
            .and_then(|arpt| arpt.declination)
            .unwrap_or_else(|| {
                debug!("runway of {airport} without known declination");
                0.0
            })
    }
}
