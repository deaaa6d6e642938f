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

//! ARINC 424 record types and an iterator over a navigation database.

mod airport;
mod airspace_continuation;
mod airway;
mod controlled_airspace;
mod localizer;
mod ndb_navaid;
mod procedure;
mod restrictive_airspace;
mod runway;
mod vhf_navaid;
mod waypoint;

pub use airport::Airport;
pub use airspace_continuation::AirspaceContinuation;
pub use airway::Airway;
pub use controlled_airspace::ControlledAirspace;
pub use localizer::Localizer;
pub use ndb_navaid::NdbNavaid;
pub use procedure::Procedure;
pub use restrictive_airspace::RestrictiveAirspace;
pub use runway::Runway;
pub use vhf_navaid::VhfNavaid;
pub use waypoint::Waypoint;

use log::trace;

use crate::fields::SubCodeKind;
use crate::record::{classify, RECORD_LENGTH};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum RecordKind {
    Airport,
    Runway,
    Waypoint,
    VhfNavaid,
    NdbNavaid,
    Localizer,
    Procedure,
    Airway,
    ControlledAirspace,
    RestrictiveAirspace,
    /// A continuation of a controlled or restrictive airspace record.
    AirspaceContinuation,
    /// A continuation of any other record kind.
    ///
    /// Continuations of points, procedures and airways only carry
    /// supplemental data which is not decoded.
    Continuation,
    /// A record of a known section and subsection that is not decoded.
    Unsupported,
    /// A record with an unknown section or subsection.
    Unknown,
}

impl RecordKind {
    /// Returns the kind of a single record.
    ///
    /// Primary and continuation records are told apart by the continuation
    /// number whose column depends on the record kind.
    pub fn of(record: &[u8]) -> Self {
        let Ok(classification) = classify(record) else {
            return Self::Unknown;
        };

        let (kind, cont_col) = match classification.subsection {
            SubCodeKind::ReferencePoint => (Self::Airport, 22),
            SubCodeKind::Runway => (Self::Runway, 22),
            SubCodeKind::Waypoint | SubCodeKind::TerminalWaypoint => (Self::Waypoint, 22),
            SubCodeKind::VHFNavaid => (Self::VhfNavaid, 22),
            SubCodeKind::NDBNavaid | SubCodeKind::TerminalNDB => (Self::NdbNavaid, 22),
            SubCodeKind::Localizer => (Self::Localizer, 22),
            SubCodeKind::SID | SubCodeKind::STAR | SubCodeKind::Approach => {
                (Self::Procedure, 39)
            }
            SubCodeKind::Airway => (Self::Airway, 39),
            SubCodeKind::ControlledAirspace => (Self::ControlledAirspace, 25),
            SubCodeKind::RestrictiveAirspace => (Self::RestrictiveAirspace, 25),
            _ => return Self::Unsupported,
        };

        match record.get(cont_col - 1) {
            Some(b'0' | b'1' | b' ') => kind,
            _ => match kind {
                Self::ControlledAirspace | Self::RestrictiveAirspace => Self::AirspaceContinuation,
                _ => Self::Continuation,
            },
        }
    }
}

pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crate::arinc424::records::{Airport, RecordKind, Records};
    /// # use crate::arinc424::Error;
    /// #
    /// # fn parse_records(data: &[u8]) -> Result<(), Error> {
    /// for (kind, bytes) in Records::new(data) {
    ///     match kind {
    ///         RecordKind::Airport => {
    ///             let arpt = Airport::try_from(bytes)?;
    ///             // now you can read the airport's fields or convert it
    ///             // to some other type
    ///         },
    ///         _ => {},
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (RecordKind, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos + RECORD_LENGTH <= self.data.len() {
            // Standard or tailored record type
            match self.data[self.pos] {
                b'S' | b'T' => {
                    let record = &self.data[self.pos..self.pos + RECORD_LENGTH];
                    self.pos += RECORD_LENGTH;

                    let kind = RecordKind::of(record);
                    trace!("record at {} is {kind:?}", self.pos - RECORD_LENGTH);

                    return Some((kind, record));
                }
                _ => {
                    // Skip byte (likely newline or header data)
                    self.pos += 1;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
    const RESTRICTIVE: &[u8] = b"SUSAURK1MEEL A     A00101L    H N46200000W124215300                              11000M17999MEEL A MOA                     715681713";
    const CONTINUATION: &[u8] = b"SUSAURK1MEEL A     A00102C                                                                         FAA SEATTLE ARTCC       715691713";
    const RF_LEG: &[u8] = b"SUSAP KJFKK6FR04L  R      040ZALPOK6PC0E  FL   RF       003000        04360057      01900          180    RF04L K6PC       304201709";

    #[test]
    fn splits_primary_and_continuation_records() {
        assert_eq!(RecordKind::of(AIRPORT), RecordKind::Airport);
        assert_eq!(RecordKind::of(RESTRICTIVE), RecordKind::RestrictiveAirspace);
        assert_eq!(RecordKind::of(CONTINUATION), RecordKind::AirspaceContinuation);
        assert_eq!(RecordKind::of(RF_LEG), RecordKind::Procedure);

        let mut cont = RF_LEG.to_vec();
        cont[38] = b'2';
        assert_eq!(RecordKind::of(&cont), RecordKind::Continuation);
    }

    #[test]
    fn iterates_over_lines() {
        let data = [
            AIRPORT,
            b"\n".as_slice(),
            RESTRICTIVE,
            b"\r\n".as_slice(),
            CONTINUATION,
            b"\n".as_slice(),
        ]
        .concat();
        let kinds: Vec<RecordKind> = Records::new(&data).map(|(kind, _)| kind).collect();

        assert_eq!(
            kinds,
            vec![
                RecordKind::Airport,
                RecordKind::RestrictiveAirspace,
                RecordKind::AirspaceContinuation
            ]
        );
    }

    #[test]
    fn reports_unknown_sections() {
        let mut record = AIRPORT.to_vec();
        record[4] = b'X';
        assert_eq!(RecordKind::of(&record), RecordKind::Unknown);

        let mut msa = AIRPORT.to_vec();
        msa[12] = b'S';
        assert_eq!(RecordKind::of(&msa), RecordKind::Unsupported);
    }
}
