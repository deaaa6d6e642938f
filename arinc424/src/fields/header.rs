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

//! Fields that open or close every record regardless of its section.

use std::fmt;

use crate::{Alphanumeric, Error, FixedField, Numeric};

/// 5.2 Record Type (S/T)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RecordType {
    Standard,
    Tailored,
}

impl FixedField<'_> for RecordType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'S' => Ok(Self::Standard),
            b'T' => Ok(Self::Tailored),
            byte => Err(Error::InvalidCharacter {
                field: "Record Type",
                byte,
                expected: "S or T",
            }),
        }
    }
}

/// 5.3 Customer / Area Code (CUST/AREA)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum CustArea<'a> {
    Blank,
    Customer(Alphanumeric<'a, 3>),
    PreferredRoute,
    AFR,
    CAN,
    EEU,
    EUR,
    LAM,
    MES,
    PAC,
    SAM,
    SPA,
    USA,
}

impl<'a> FixedField<'a> for CustArea<'a> {
    const LENGTH: usize = 3;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let code = bytes.get(0..3).ok_or(Error::InvalidFieldLength {
            expected: 3,
            actual: bytes.len(),
        })?;

        Ok(match code {
            b"AFR" => Self::AFR,
            b"CAN" => Self::CAN,
            b"EEU" => Self::EEU,
            b"EUR" => Self::EUR,
            b"LAM" => Self::LAM,
            b"MES" => Self::MES,
            b"PAC" => Self::PAC,
            b"SAM" => Self::SAM,
            b"SPA" => Self::SPA,
            b"USA" => Self::USA,
            b"PDR" => Self::PreferredRoute,
            b"   " => Self::Blank,
            code => Self::Customer(Alphanumeric::from_bytes(code)?),
        })
    }
}

/// 5.16 Continuation Record Number (CONT NR)
pub type ContNr<'a> = Alphanumeric<'a, 1>;

impl ContNr<'_> {
    /// Returns `true` for a primary record.
    ///
    /// Primary records are numbered `0` or `1` depending on whether a
    /// continuation follows. Continuations count up from `2`.
    pub fn is_primary(&self) -> bool {
        matches!(self.first(), b'0' | b'1')
    }
}

/// 5.12 and 5.101 Sequence Number (SEQ NR)
pub type SequenceNumber<'a, const N: usize> = Numeric<'a, N>;

/// 5.31 File Record Number (FRN)
pub type FileRecordNumber<'a> = Numeric<'a, 5>;

/// 5.32 Cycle Date (CYCLE)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cycle<'a> {
    year: Numeric<'a, 2>,
    cycle: Numeric<'a, 2>,
}

impl<'a> Cycle<'a> {
    /// The last two digits of the cycle's year.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn year(&self) -> Result<u8, Error> {
        self.year.as_u8()
    }

    /// The numeric identity of the 28-day data update cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn cycle(&self) -> Result<u8, Error> {
        self.cycle.as_u8()
    }
}

impl<'a> FixedField<'a> for Cycle<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self {
            year: Numeric::from_bytes(bytes)?,
            cycle: Numeric::from_bytes(bytes.get(2..).unwrap_or_default())?,
        })
    }
}

impl fmt::Display for Cycle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.year(), self.cycle()) {
            (Ok(year), Ok(cycle)) => write!(f, "{year:02}{cycle:02}"),
            _ => write!(f, "????"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_customer_area() {
        assert_eq!(CustArea::from_bytes(b"USA"), Ok(CustArea::USA));
        assert_eq!(CustArea::from_bytes(b"   "), Ok(CustArea::Blank));
        assert!(matches!(
            CustArea::from_bytes(b"XYZ"),
            Ok(CustArea::Customer(code)) if code.as_str() == "XYZ"
        ));
    }

    #[test]
    fn primary_and_continuation_numbers() {
        let primary = ContNr::from_bytes(b"0").expect("cont nr should parse");
        let primary_with_cont = ContNr::from_bytes(b"1").expect("cont nr should parse");
        let cont = ContNr::from_bytes(b"2").expect("cont nr should parse");

        assert!(primary.is_primary());
        assert!(primary_with_cont.is_primary());
        assert!(!cont.is_primary());
    }

    #[test]
    fn displays_cycle() {
        let cycle = Cycle::from_bytes(b"2407").expect("cycle should parse");
        assert_eq!(cycle.year(), Ok(24));
        assert_eq!(cycle.cycle(), Ok(7));
        assert_eq!(cycle.to_string(), "2407");
    }
}
