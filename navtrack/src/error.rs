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

use std::fmt;

use arinc424::fields::PathTerm;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A fixed-column field could not be decoded.
    FieldFormat(String),
    /// The section and subsection of a record or fix reference is unknown.
    UnknownSectionCode { section: char, subsection: char },
    /// A procedure leg whose path and termination can't be constructed.
    UnsupportedLegType(PathTerm),
    /// A boundary segment whose via code can't be constructed.
    UnsupportedBoundarySegment(char),
    /// A fix that is not in the navigation data.
    UnresolvedFixReference(String),
    /// The fix is not part of the airway.
    FixNotOnAirway { airway: String, fix: String },
    /// Near-parallel courses or a radius inconsistent with its chord.
    GeometryDegenerate(&'static str),
    /// The boundary of an airspace ends without returning to its origin.
    UnterminatedBoundary(String),
    /// The procedure has no such transition.
    UnknownTransition(String),
    /// A record of the navigation data that was skipped.
    InvalidRecord { record: Vec<u8>, error: Box<Error> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldFormat(reason) => write!(f, "invalid field: {reason}"),
            Self::UnknownSectionCode {
                section,
                subsection,
            } => write!(f, "unknown section code \"{section}{subsection}\""),
            Self::UnsupportedLegType(path_term) => {
                write!(f, "{path_term} legs are not supported")
            }
            Self::UnsupportedBoundarySegment(via) => {
                write!(f, "boundary via \"{via}\" is not supported")
            }
            Self::UnresolvedFixReference(ident) => write!(f, "unknown fix {ident}"),
            Self::FixNotOnAirway { airway, fix } => write!(f, "{fix} is not on airway {airway}"),
            Self::GeometryDegenerate(reason) => write!(f, "degenerate geometry: {reason}"),
            Self::UnterminatedBoundary(airspace) => {
                write!(f, "boundary of {airspace} does not return to its origin")
            }
            Self::UnknownTransition(transition) => write!(f, "unknown transition {transition}"),
            Self::InvalidRecord { record, error } => {
                let s = String::from_utf8_lossy(record);
                write!(f, "{error} in record \"{}\"", s.trim_end())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<arinc424::Error> for Error {
    fn from(e: arinc424::Error) -> Self {
        match e {
            arinc424::Error::UnknownSection {
                section,
                subsection,
            } => Self::UnknownSectionCode {
                section: section as char,
                subsection: subsection as char,
            },
            e => Self::FieldFormat(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_section_errors() {
        let e: Error = arinc424::Error::UnknownSection {
            section: b'X',
            subsection: b' ',
        }
        .into();

        assert_eq!(
            e,
            Error::UnknownSectionCode {
                section: 'X',
                subsection: ' '
            }
        );

        let e: Error = arinc424::Error::NotANumber {
            bytes: b"A1".to_vec(),
        }
        .into();

        assert_eq!(
            e,
            Error::FieldFormat(String::from("field should be a number but is \"A1\""))
        );
    }
}
