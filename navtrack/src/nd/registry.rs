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

use std::collections::HashMap;

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;

/// Points of one section of the navigation data by identifier.
///
/// Identifiers are unique within a registry. The points keep the order in
/// which they were added.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointRegistry {
    points: Vec<Point>,
    index: HashMap<String, usize>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the point unless its identifier is taken.
    ///
    /// Returns `false` if there is a point with the same identifier already,
    /// which is kept.
    pub fn add(&mut self, point: Point) -> bool {
        if let Some(&i) = self.index.get(&point.ident) {
            warn!(
                "duplicate identifier {}: keeping {} and ignoring {}",
                point.ident, self.points[i], point
            );
            return false;
        }

        self.index.insert(point.ident.clone(), self.points.len());
        self.points.push(point);
        true
    }

    /// Returns the point with the identifier.
    ///
    /// The identifier is matched exactly first and with surrounding
    /// whitespace removed second.
    pub fn get(&self, ident: &str) -> Option<&Point> {
        self.index
            .get(ident)
            .or_else(|| self.index.get(ident.trim()))
            .map(|&i| &self.points[i])
    }

    /// Returns all points in the order they were added.
    pub fn get_all(&self) -> &[Point] {
        self.points.as_slice()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::PointKind;

    #[test]
    fn first_point_wins() {
        let mut registry = PointRegistry::new();

        assert!(registry.add(Point::new("CRI", PointKind::Ndb, coord!(40.6, -73.8))));
        assert!(!registry.add(Point::new("CRI", PointKind::Ndb, coord!(0.0, 0.0))));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("CRI").map(|p| p.position),
            Some(coord!(40.6, -73.8))
        );
    }

    #[test]
    fn falls_back_to_trimmed_identifier() {
        let mut registry = PointRegistry::new();
        registry.add(Point::new("IRW", PointKind::VorDme, coord!(35.4, -97.6)));

        assert!(registry.get("IRW  ").is_some());
        assert!(registry.get(" IRW").is_some());
        assert!(registry.get("IRX").is_none());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut registry = PointRegistry::new();
        registry.add(Point::new("B", PointKind::EnrouteWaypoint, coord!(1.0, 1.0)));
        registry.add(Point::new("A", PointKind::EnrouteWaypoint, coord!(2.0, 2.0)));

        let idents: Vec<&str> = registry.get_all().iter().map(|p| p.ident.as_str()).collect();
        assert_eq!(idents, vec!["B", "A"]);
    }
}
