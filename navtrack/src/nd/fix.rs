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

use std::fmt::{Display, Formatter, Result};

use crate::error::Error;

/// The section a fix referenced by a procedure leg or airway is stored in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FixSection {
    VhfNavaid,
    Ndb,
    EnrouteWaypoint,
    Airport,
    TerminalWaypoint,
    Runway,
    Localizer,
    TerminalNdb,
}

impl FixSection {
    /// Returns the section from the section and subsection code of a
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSectionCode`] if no points are stored for the
    /// code.
    pub fn from_code(section: u8, subsection: u8) -> std::result::Result<Self, Error> {
        match (section, subsection) {
            (b'D', b' ') => Ok(Self::VhfNavaid),
            (b'D', b'B') => Ok(Self::Ndb),
            (b'E', b'A') => Ok(Self::EnrouteWaypoint),
            (b'P' | b'H', b'A') => Ok(Self::Airport),
            (b'P' | b'H', b'C') => Ok(Self::TerminalWaypoint),
            (b'P', b'G') => Ok(Self::Runway),
            (b'P', b'I') => Ok(Self::Localizer),
            (b'P', b'N') => Ok(Self::TerminalNdb),
            _ => Err(Error::UnknownSectionCode {
                section: section as char,
                subsection: subsection as char,
            }),
        }
    }

    /// Returns `true` if the points of the section belong to an airport.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::TerminalWaypoint | Self::Runway | Self::Localizer | Self::TerminalNdb
        )
    }
}

/// A reference to a point by its identifier and section.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FixRef {
    pub ident: String,
    pub section: FixSection,
}

impl FixRef {
    pub fn new(ident: impl Into<String>, section: FixSection) -> Self {
        Self {
            ident: ident.into(),
            section,
        }
    }
}

impl Display for FixRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.ident)
    }
}
