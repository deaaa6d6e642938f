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

use arinc424::fields::BoundaryPath;
use geo::{Coord, LineString};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::VerticalDistance;
use crate::error::Error;
use crate::geom::{arc_path, circle, distance_nm};

/// ICAO Airspace Classification (ICAO Annex 11, Chapter 2).
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceClassification {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl AirspaceClassification {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            _ => None,
        }
    }
}

/// Airspace type of controlled or restrictive airspace.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceType {
    ClassB,
    ClassC,
    /// Control Area (CTA)
    CTA,
    /// Control Zone (CTR)
    CTR,
    /// Terminal Control Area (TMA)
    TMA,
    RadarZone,
    /// Radio Mandatory Zone
    RMZ,
    /// Transponder Mandatory Zone
    TMZ,
    Alert,
    Caution,
    Danger,
    LongTermTFR,
    /// Military Operations Area
    MOA,
    NationalSecurityArea,
    Prohibited,
    Restricted,
    Training,
    Warning,
    Unspecified,
}

impl Display for AirspaceClassification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AirspaceClassification::A => write!(f, "A"),
            AirspaceClassification::B => write!(f, "B"),
            AirspaceClassification::C => write!(f, "C"),
            AirspaceClassification::D => write!(f, "D"),
            AirspaceClassification::E => write!(f, "E"),
            AirspaceClassification::F => write!(f, "F"),
            AirspaceClassification::G => write!(f, "G"),
        }
    }
}

impl Display for AirspaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AirspaceType::ClassB => write!(f, "Class B"),
            AirspaceType::ClassC => write!(f, "Class C"),
            AirspaceType::CTA => write!(f, "CTA"),
            AirspaceType::CTR => write!(f, "CTR"),
            AirspaceType::TMA => write!(f, "TMA"),
            AirspaceType::RadarZone => write!(f, "Radar Zone"),
            AirspaceType::RMZ => write!(f, "RMZ"),
            AirspaceType::TMZ => write!(f, "TMZ"),
            AirspaceType::Alert => write!(f, "Alert"),
            AirspaceType::Caution => write!(f, "Caution"),
            AirspaceType::Danger => write!(f, "Danger"),
            AirspaceType::LongTermTFR => write!(f, "TFR"),
            AirspaceType::MOA => write!(f, "MOA"),
            AirspaceType::NationalSecurityArea => write!(f, "NSA"),
            AirspaceType::Prohibited => write!(f, "Prohibited"),
            AirspaceType::Restricted => write!(f, "Restricted"),
            AirspaceType::Training => write!(f, "Training"),
            AirspaceType::Warning => write!(f, "Warning"),
            AirspaceType::Unspecified => write!(f, "Unspecified"),
        }
    }
}

/// Airspace metadata.
///
/// The airspace has a structural or special-use [`airspace_type`](Self::airspace_type)
/// and an optional ICAO [`classification`](Self::classification). It ranges
/// from the `floor` to `ceiling` vertically.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub name: String,
    pub airspace_type: AirspaceType,
    pub classification: Option<AirspaceClassification>,
    pub ceiling: VerticalDistance,
    pub floor: VerticalDistance,
    pub controlling_agency: Option<String>,
}

impl Airspace {
    pub fn new(name: impl Into<String>, airspace_type: AirspaceType) -> Self {
        Self {
            name: name.into(),
            airspace_type,
            classification: None,
            ceiling: VerticalDistance::Unlimited,
            floor: VerticalDistance::Gnd,
            controlling_agency: None,
        }
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.classification {
            Some(class) => write!(
                f,
                "{}: {} (Class {}) | {}/{}",
                self.name, self.airspace_type, class, self.ceiling, self.floor
            ),
            None => write!(
                f,
                "{}: {} | {}/{}",
                self.name, self.airspace_type, self.ceiling, self.floor
            ),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AirspaceSection {
    Controlled,
    Restrictive,
}

/// Identifies the boundary records of one airspace.
///
/// The `type_code` is the airspace or restrictive type as coded in the
/// records and the `designation` is the airspace center or restrictive
/// designation.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AirspaceKey {
    pub icao: String,
    pub section: AirspaceSection,
    pub type_code: char,
    pub designation: String,
    pub multiple_code: char,
}

impl Display for AirspaceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {}{} {}",
            self.icao, self.type_code, self.multiple_code, self.designation
        )
    }
}

/// One record of an airspace boundary.
#[derive(Clone, PartialEq, Debug)]
pub struct BoundarySegment {
    pub seq_nr: u16,
    /// How the boundary continues from this segment's point to the next.
    pub path: BoundaryPath,
    /// Position of the segment. Circles may only define their center.
    pub point: Option<geo::Point<f64>>,
    pub arc_center: Option<geo::Point<f64>>,
    pub arc_radius_nm: Option<f64>,
    /// The boundary returns from this segment to the first point.
    pub shape_end: bool,
}

/// The boundary segments of one airspace in sequence.
#[derive(Clone, PartialEq, Debug)]
pub struct AirspaceShape {
    key: AirspaceKey,
    airspace: Airspace,
    segments: Vec<BoundarySegment>,
}

enum Boundary {
    AwaitingFirst,
    Accumulating {
        first: geo::Point<f64>,
        coords: Vec<Coord<f64>>,
    },
}

impl AirspaceShape {
    pub fn new(key: AirspaceKey, airspace: Airspace) -> Self {
        Self {
            key,
            airspace,
            segments: Vec::new(),
        }
    }

    pub fn key(&self) -> &AirspaceKey {
        &self.key
    }

    pub fn airspace(&self) -> &Airspace {
        &self.airspace
    }

    pub fn segments(&self) -> &[BoundarySegment] {
        &self.segments
    }

    /// Appends the next segment of the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldFormat`] if the sequence number doesn't follow
    /// the last segment. The segment is not added.
    pub fn add_segment(&mut self, segment: BoundarySegment) -> std::result::Result<(), Error> {
        match self.segments.last() {
            Some(last) if last.seq_nr >= segment.seq_nr => Err(Error::FieldFormat(format!(
                "{} segment {} follows {}",
                self.key, segment.seq_nr, last.seq_nr
            ))),
            _ => {
                self.segments.push(segment);
                Ok(())
            }
        }
    }

    pub fn set_controlling_agency(&mut self, agency: impl Into<String>) {
        self.airspace.controlling_agency = Some(agency.into());
    }

    /// Builds the closed rings of the boundary.
    ///
    /// A boundary may consist of several shapes sharing the same key, each
    /// ending with a segment that returns to its first point. A circle as
    /// first segment is a shape on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBoundarySegment`] for arcs by edge and
    /// circles within a shape, [`Error::UnterminatedBoundary`] if the last
    /// shape doesn't return to its origin and [`Error::FieldFormat`] for
    /// segments without the points their path needs.
    pub fn build_polygons(&self) -> std::result::Result<Vec<LineString<f64>>, Error> {
        let (boundary, rings) = self.segments.iter().enumerate().try_fold(
            (Boundary::AwaitingFirst, Vec::new()),
            |(boundary, mut rings): (Boundary, Vec<LineString<f64>>),
             (i, segment)|
             -> std::result::Result<_, Error> {
                let (first, mut coords) = match boundary {
                    Boundary::AwaitingFirst if segment.path == BoundaryPath::Circle => {
                        rings.push(self.circle(segment)?);
                        return Ok((Boundary::AwaitingFirst, rings));
                    }
                    Boundary::AwaitingFirst => {
                        trace!("{} starts shape at segment {}", self.key, segment.seq_nr);
                        (self.point_of(segment)?, Vec::new())
                    }
                    Boundary::Accumulating { first, coords } => (first, coords),
                };

                let point = self.point_of(segment)?;
                coords.push(point.into());

                let target = if segment.shape_end {
                    first
                } else {
                    self.segments
                        .get(i + 1)
                        .ok_or_else(|| self.unterminated())
                        .and_then(|next| self.point_of(next))?
                };

                coords.extend(self.segment_points(segment, point, target)?);

                if segment.shape_end {
                    coords.push(first.into());
                    rings.push(LineString::new(coords));
                    Ok((Boundary::AwaitingFirst, rings))
                } else {
                    Ok((Boundary::Accumulating { first, coords }, rings))
                }
            },
        )?;

        match boundary {
            Boundary::AwaitingFirst => Ok(rings),
            Boundary::Accumulating { .. } => Err(self.unterminated()),
        }
    }

    /// Builds the first closed ring of the boundary.
    ///
    /// # Errors
    ///
    /// Returns any error of [`build_polygons`](Self::build_polygons) or
    /// [`Error::UnterminatedBoundary`] if there are no segments.
    pub fn build_polygon(&self) -> std::result::Result<LineString<f64>, Error> {
        self.build_polygons()?
            .into_iter()
            .next()
            .ok_or_else(|| self.unterminated())
    }

    // Points between the segment's point and the target, both excluded.
    fn segment_points(
        &self,
        segment: &BoundarySegment,
        point: geo::Point<f64>,
        target: geo::Point<f64>,
    ) -> std::result::Result<Vec<Coord<f64>>, Error> {
        match segment.path {
            BoundaryPath::GreatCircle => Ok(Vec::new()),
            BoundaryPath::RhumbLine => {
                debug!(
                    "{} segment {} approximates rhumb line by great circle",
                    self.key, segment.seq_nr
                );
                Ok(Vec::new())
            }
            BoundaryPath::ClockwiseArc | BoundaryPath::CounterClockwiseArc => {
                let center = segment.arc_center.ok_or_else(|| {
                    Error::FieldFormat(format!(
                        "{} segment {} has no arc origin",
                        self.key, segment.seq_nr
                    ))
                })?;
                let radius = segment
                    .arc_radius_nm
                    .unwrap_or_else(|| distance_nm(center, point));
                let clockwise = segment.path == BoundaryPath::ClockwiseArc;

                let arc = arc_path(point, target, center, radius, clockwise);
                let n = arc.len().saturating_sub(1);

                Ok(arc
                    .into_iter()
                    .take(n)
                    .skip(1)
                    .map(Coord::from)
                    .collect())
            }
            BoundaryPath::Circle | BoundaryPath::ArcByEdge => {
                Err(Error::UnsupportedBoundarySegment(segment.path.code()))
            }
        }
    }

    fn circle(&self, segment: &BoundarySegment) -> std::result::Result<LineString<f64>, Error> {
        let center = segment.arc_center.or(segment.point);

        match (center, segment.arc_radius_nm) {
            (Some(center), Some(radius)) => Ok(circle(center, radius)),
            _ => Err(Error::FieldFormat(format!(
                "{} circle has no center or radius",
                self.key
            ))),
        }
    }

    fn point_of(&self, segment: &BoundarySegment) -> std::result::Result<geo::Point<f64>, Error> {
        segment.point.ok_or_else(|| {
            Error::FieldFormat(format!(
                "{} segment {} has no position",
                self.key, segment.seq_nr
            ))
        })
    }

    fn unterminated(&self) -> Error {
        Error::UnterminatedBoundary(self.key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::forward_true;

    fn shape() -> AirspaceShape {
        AirspaceShape::new(
            AirspaceKey {
                icao: String::from("K1"),
                section: AirspaceSection::Restrictive,
                type_code: 'M',
                designation: String::from("EEL A"),
                multiple_code: 'A',
            },
            Airspace::new("EEL A MOA", AirspaceType::MOA),
        )
    }

    fn segment(seq_nr: u16, path: BoundaryPath, point: geo::Point<f64>) -> BoundarySegment {
        BoundarySegment {
            seq_nr,
            path,
            point: Some(point),
            arc_center: None,
            arc_radius_nm: None,
            shape_end: false,
        }
    }

    #[test]
    fn closes_great_circle_boundary() {
        let mut arsp = shape();
        let a = coord!(46.0, -124.0);
        let b = coord!(46.0, -123.0);
        let c = coord!(45.0, -123.5);

        arsp.add_segment(segment(10, BoundaryPath::GreatCircle, a)).unwrap();
        arsp.add_segment(segment(20, BoundaryPath::RhumbLine, b)).unwrap();
        arsp.add_segment(BoundarySegment {
            shape_end: true,
            ..segment(30, BoundaryPath::GreatCircle, c)
        })
        .unwrap();

        let ring = arsp.build_polygon().expect("boundary should close");
        assert_eq!(ring.0.len(), 4);
        assert_eq!(ring.0.first(), ring.0.last());
    }

    #[test]
    fn arcs_around_origin() {
        let mut arsp = shape();
        let center = coord!(46.0, -124.0);
        let north = forward_true(center, 0.0, 10.0);
        let east = forward_true(center, 90.0, 10.0);

        arsp.add_segment(BoundarySegment {
            arc_center: Some(center),
            arc_radius_nm: Some(10.0),
            ..segment(10, BoundaryPath::ClockwiseArc, north)
        })
        .unwrap();
        arsp.add_segment(BoundarySegment {
            shape_end: true,
            ..segment(20, BoundaryPath::GreatCircle, east)
        })
        .unwrap();

        let ring = arsp.build_polygon().expect("boundary should close");
        // 90° in 3° steps
        assert_eq!(ring.0.len(), 32);
        assert!(ring
            .points()
            .take(31)
            .all(|p| (distance_nm(center, p) - 10.0).abs() < 50.0 / 1852.0));
    }

    #[test]
    fn circle_is_a_shape() {
        let mut arsp = shape();
        arsp.add_segment(BoundarySegment {
            arc_center: Some(coord!(40.0, -100.0)),
            arc_radius_nm: Some(5.0),
            point: None,
            ..segment(10, BoundaryPath::Circle, coord!(0.0, 0.0))
        })
        .unwrap();

        let rings = arsp.build_polygons().expect("circle should build");
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].0.len(), 121);
    }

    #[test]
    fn arc_by_edge_is_unsupported() {
        let mut arsp = shape();
        arsp.add_segment(segment(10, BoundaryPath::ArcByEdge, coord!(46.0, -124.0)))
            .unwrap();
        arsp.add_segment(BoundarySegment {
            shape_end: true,
            ..segment(20, BoundaryPath::GreatCircle, coord!(46.0, -123.0))
        })
        .unwrap();

        assert_eq!(
            arsp.build_polygon(),
            Err(Error::UnsupportedBoundarySegment('A'))
        );
    }

    #[test]
    fn missing_shape_end_is_unterminated() {
        let mut arsp = shape();
        arsp.add_segment(segment(10, BoundaryPath::GreatCircle, coord!(46.0, -124.0)))
            .unwrap();
        arsp.add_segment(segment(20, BoundaryPath::GreatCircle, coord!(46.0, -123.0)))
            .unwrap();

        assert!(matches!(
            arsp.build_polygon(),
            Err(Error::UnterminatedBoundary(_))
        ));
    }

    #[test]
    fn rejects_segments_out_of_sequence() {
        let mut arsp = shape();
        arsp.add_segment(segment(20, BoundaryPath::GreatCircle, coord!(46.0, -124.0)))
            .unwrap();

        assert!(arsp
            .add_segment(segment(10, BoundaryPath::GreatCircle, coord!(46.0, -123.0)))
            .is_err());
        assert_eq!(arsp.segments().len(), 1);
    }
}
