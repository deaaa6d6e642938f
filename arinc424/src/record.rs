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

use crate::fields::{CustArea, SecCode, SubCode, SubCodeKind};
use crate::{Error, FixedField};

/// The fixed length of an ARINC 424 record in bytes.
pub const RECORD_LENGTH: usize = 132;

/// An ARINC 424 record type.
pub trait Record<'a>: Sized {
    /// The section and subsection codes (e.g. `"PF"`) this record type can
    /// be parsed from. Any record is accepted if empty.
    const KINDS: &'static [&'static str] = &[];

    /// Parse this record type from a field iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short or contains invalid data.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this record type from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not 132 bytes or any error returned by
    /// [`parse`][Record::parse].
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        if bytes.len() == RECORD_LENGTH {
            Self::parse(Fields::new(bytes))
        } else {
            Err(Error::InvalidRecordLength {
                actual: bytes.len(),
            })
        }
    }
}

/// Returns the byte index of the subsection code.
///
/// Airport and heliport records have their subsection in column 13 while all
/// other sections use column 6. Some providers put the subsection of
/// airport records into column 6 too and leave column 13 blank.
#[inline]
pub(crate) fn subsection_index(bytes: &[u8]) -> usize {
    match (bytes[4], bytes[12]) {
        (b'P' | b'H', b' ') => 5,
        (b'P' | b'H', _) => 12,
        _ => 5,
    }
}

/// The area, section and subsection of a record.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Classification<'a> {
    pub cust_area: CustArea<'a>,
    pub section: SecCode,
    pub subsection: SubCodeKind,
}

/// Classifies a record by its customer area, section and subsection code.
///
/// The classification decides which record type is used to parse the
/// remaining fields.
///
/// # Errors
///
/// Returns [`Error::UnknownSection`] if the section or the subsection within
/// the section is not known.
///
/// # Examples
///
/// ```
/// use arinc424::classify;
/// use arinc424::fields::{SecCode, SubCodeKind};
///
/// # fn main() -> Result<(), arinc424::Error> {
/// let record = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";
/// let classification = classify(record)?;
///
/// assert_eq!(classification.section, SecCode::Airport);
/// assert_eq!(classification.subsection, SubCodeKind::Runway);
/// #     Ok(())
/// # }
/// ```
pub fn classify(bytes: &[u8]) -> Result<Classification<'_>, Error> {
    if bytes.len() < 13 {
        return Err(Error::InvalidRecordLength {
            actual: bytes.len(),
        });
    }

    let section = bytes[4];
    let subsection = bytes[subsection_index(bytes)];
    let unknown = || Error::UnknownSection {
        section,
        subsection,
    };

    let sec_code = SecCode::from_bytes(&bytes[4..5]).map_err(|_| unknown())?;
    let sub_code = SubCode::from_bytes(&bytes[subsection_index(bytes)..])?;

    Ok(Classification {
        cust_area: CustArea::from_bytes(&bytes[1..4])?,
        section: sec_code,
        subsection: sub_code.kind(&sec_code).map_err(|_| unknown())?,
    })
}

pub struct Fields<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, index: 0 }
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        let bytes = self.bytes.get(self.index..).unwrap_or_default();
        let field = F::from_bytes(bytes)?;
        self.index += F::LENGTH;
        Ok(field)
    }

    /// Skips `n` bytes, advancing the position without parsing.
    #[inline]
    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.index += n;
        self
    }

    /// Jumps to the position and get the field.
    ///
    /// The next field will be the one following this field's position.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn get<F>(&mut self, position: usize) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        self.index = position - 1;
        self.next()
    }

    /// Checks that the record is one of the `kinds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedKind`] if the section and subsection code
    /// of the record is not listed.
    pub fn expect_kind(&self, kinds: &[&str], record: &'static str) -> Result<(), Error> {
        if kinds.is_empty() || self.bytes.len() < 13 {
            return Ok(());
        }

        let section = self.bytes[4];
        let subsection = self.bytes[subsection_index(self.bytes)];

        if kinds.iter().any(|kind| kind.as_bytes() == [section, subsection]) {
            Ok(())
        } else {
            Err(Error::UnexpectedKind {
                record,
                section,
                subsection,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVAID: &[u8] = b"SUSAD        IRW   K4011400VTHW N35225850W097355870IRW N35225850W097355870E0070012861     NARWILL ROGERS                   128831507";

    #[test]
    fn classifies_subsection_by_section() {
        let navaid = classify(NAVAID).expect("navaid should classify");
        assert_eq!(navaid.cust_area, CustArea::USA);
        assert_eq!(navaid.section, SecCode::Navaid);
        assert_eq!(navaid.subsection, SubCodeKind::VHFNavaid);
    }

    #[test]
    fn rejects_unknown_section() {
        let mut record = NAVAID.to_vec();
        record[4] = b'X';
        assert_eq!(
            classify(&record),
            Err(Error::UnknownSection {
                section: b'X',
                subsection: b' '
            })
        );
    }

    #[test]
    fn rejects_unexpected_kind() {
        let fields = Fields::new(NAVAID);
        assert!(fields.expect_kind(&["D "], "VhfNavaid").is_ok());
        assert_eq!(
            fields.expect_kind(&["PF"], "Procedure"),
            Err(Error::UnexpectedKind {
                record: "Procedure",
                section: b'D',
                subsection: b' '
            })
        );
    }
}
