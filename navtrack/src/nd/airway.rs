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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{FixRef, NavigationData};
use crate::error::Error;

/// A fix of an airway in sequence.
#[derive(Clone, PartialEq, Debug)]
pub struct AirwayFix {
    pub seq_nr: u16,
    pub fix: FixRef,
    /// Magnetic outbound course to the next fix.
    pub outbound_course: Option<f64>,
    /// Distance to the next fix in nautical miles.
    pub distance_nm: Option<f64>,
    pub min_altitude_ft: Option<u32>,
    pub max_altitude_ft: Option<u32>,
}

/// A point along an airway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirwayPoint {
    pub ident: String,
    pub position: geo::Point<f64>,
    pub description: String,
}

/// An airway as ordered list of fixes.
#[derive(Clone, PartialEq, Debug)]
pub struct Airway {
    ident: String,
    fixes: Vec<AirwayFix>,
}

impl Airway {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            fixes: Vec::new(),
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn fixes(&self) -> &[AirwayFix] {
        &self.fixes
    }

    /// Appends the next fix of the airway.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldFormat`] if the sequence number doesn't follow
    /// the last fix.
    pub fn add_fix(&mut self, fix: AirwayFix) -> Result<(), Error> {
        match self.fixes.last() {
            Some(last) if last.seq_nr >= fix.seq_nr => Err(Error::FieldFormat(format!(
                "{} sequence {} follows {}",
                self.ident, fix.seq_nr, last.seq_nr
            ))),
            _ => {
                self.fixes.push(fix);
                Ok(())
            }
        }
    }

    /// Returns the fixes from one fix to another.
    ///
    /// The range defaults to the first and last fix of the airway. It is
    /// reversed if `to` comes before `from`. The endpoints themselves are
    /// only part of the range if they are included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FixNotOnAirway`] if the airway doesn't have one of
    /// the fixes and [`Error::UnresolvedFixReference`] if a fix within the
    /// range is missing in the navigation data.
    ///
    /// # Examples
    ///
    /// ```
    /// # use navtrack::nd::NavigationData;
    /// # use navtrack::Error;
    /// # fn route(nd: &NavigationData) -> Result<(), Error> {
    /// if let Some(v16) = nd.airway("V16") {
    ///     for point in v16.sub_range(Some("IRW"), None, nd, true)? {
    ///         println!("{} {:?}", point.ident, point.position);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn sub_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        nd: &NavigationData,
        include_endpoints: bool,
    ) -> Result<Vec<AirwayPoint>, Error> {
        if self.fixes.is_empty() {
            return Ok(Vec::new());
        }

        let start = self.position_of(from, 0)?;
        let end = self.position_of(to, self.fixes.len() - 1)?;

        let mut range: Vec<&AirwayFix> = if start <= end {
            self.fixes[start..=end].iter().collect()
        } else {
            self.fixes[end..=start].iter().rev().collect()
        };

        if !include_endpoints {
            range.pop();
            if !range.is_empty() {
                range.remove(0);
            }
        }

        range
            .into_iter()
            .map(|airway_fix| {
                let point = nd
                    .resolve(&airway_fix.fix, "")
                    .ok_or_else(|| Error::UnresolvedFixReference(airway_fix.fix.ident.clone()))?;

                Ok(AirwayPoint {
                    ident: point.ident.clone(),
                    position: point.position,
                    description: point.name.clone(),
                })
            })
            .collect()
    }

    fn position_of(&self, ident: Option<&str>, default: usize) -> Result<usize, Error> {
        match ident {
            None => Ok(default),
            Some(ident) => self
                .fixes
                .iter()
                .position(|f| f.fix.ident == ident.trim())
                .ok_or_else(|| Error::FixNotOnAirway {
                    airway: self.ident.clone(),
                    fix: ident.to_string(),
                }),
        }
    }
}
