// Copyright (c) 2018-2023  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Tablas de energía de referencia
===============================

Define ReferenceTerm y ReferenceTable (lista de términos + metadatos).

Each term gives monthly reference energy (MJ) for one item, per unit of a household basis:

```text
#META REGION: 6
HW, PER_PERSON, 620.0, 560.0, 560.0, 480.0, 420.0, 350.0, 300.0, 280.0, 320.0, 400.0, 480.0, 580.0 # per occupant
HW, BASE, 180.0, 160.0, 165.0, 140.0, 120.0, 100.0, 90.0, 85.0, 95.0, 120.0, 140.0, 170.0
```
*/

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};

use crate::error::{EpbillsError, Result};
use crate::types::{Basis, HouseholdProfile, Meta, MetaVec, RefUse, NUM_MONTHS};

/// Reference energy term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTerm {
    /// Item the term belongs to
    pub target: RefUse,
    /// Household parameter that multiplies the values
    pub basis: Basis,
    /// Monthly values, MJ per unit of basis
    pub values: Vec<f32>,
    /// Descriptive comment
    pub comment: String,
}

impl ReferenceTerm {
    /// Monthly reference energy of the term for a household, MJ
    pub fn energy(&self, profile: &HouseholdProfile) -> Vec<f32> {
        let k = match self.basis {
            Basis::BASE => 1.0,
            Basis::PER_PERSON => profile.people as f32,
            Basis::PER_MAIN_AREA => profile.area_main,
            Basis::PER_OTHER_AREA => profile.area_other,
            Basis::PER_TOTAL_AREA => profile.area_total,
        };
        self.values.iter().map(|v| v * k).collect()
    }
}

impl fmt::Display for ReferenceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valuelist = self
            .values
            .iter()
            .map(|v| format!("{:.2}", v))
            .collect::<Vec<_>>()
            .join(", ");
        let comment = if !self.comment.is_empty() {
            format!(" # {}", self.comment)
        } else {
            "".to_owned()
        };
        write!(
            f,
            "{}, {}, {}{}",
            self.target, self.basis, valuelist, comment
        )
    }
}

impl str::FromStr for ReferenceTerm {
    type Err = EpbillsError;

    fn from_str(s: &str) -> std::result::Result<ReferenceTerm, Self::Err> {
        let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
        let comment = items.get(1).unwrap_or(&"").to_string();
        let items: Vec<&str> = items[0].split(',').map(str::trim).collect();
        if items.len() != NUM_MONTHS + 2 {
            return Err(EpbillsError::ParseError(format!(
                "expected {} monthly values in line `{}`",
                NUM_MONTHS, s
            )));
        }
        let target: RefUse = items[0].parse()?;
        let basis: Basis = items[1].parse()?;
        let values = items[2..]
            .iter()
            .map(|v| v.parse::<f32>())
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|_| {
                EpbillsError::ParseError(format!("expected numeric values in line `{}`", s))
            })?;
        Ok(ReferenceTerm {
            target,
            basis,
            values,
            comment,
        })
    }
}

/// Reference terms of a climate region bundled with its metadata
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Metadata
    pub rmeta: Vec<Meta>,
    /// Reference terms
    pub rdata: Vec<ReferenceTerm>,
}

impl ReferenceTable {
    /// Climate region of the table, from the REGION metadata
    pub fn region(&self) -> Result<u8> {
        let value = self.get_meta("REGION").ok_or_else(|| {
            EpbillsError::ParseError("reference table without #META REGION".into())
        })?;
        Ok(value.trim().parse::<u8>()?)
    }

    /// Terms of an item
    pub fn terms(&self, target: RefUse) -> impl Iterator<Item = &ReferenceTerm> {
        self.rdata.iter().filter(move |t| t.target == target)
    }
}

impl MetaVec for ReferenceTable {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.rmeta
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metalines = self
            .rmeta
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join("\n");
        let datalines = self
            .rdata
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}\n{}", metalines, datalines)
    }
}

impl str::FromStr for ReferenceTable {
    type Err = EpbillsError;

    fn from_str(s: &str) -> std::result::Result<ReferenceTable, Self::Err> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let lines: Vec<&str> = s_nobom.lines().map(str::trim).collect();
        let metalines = lines.iter().filter(|l| l.starts_with("#META"));
        let datalines = lines
            .iter()
            .filter(|l| !(l.starts_with('#') || l.starts_with("item,") || l.is_empty()));
        let rmeta = metalines
            .map(|e| e.parse())
            .collect::<std::result::Result<Vec<Meta>, _>>()?;
        let rdata = datalines
            .map(|e| e.parse())
            .collect::<std::result::Result<Vec<ReferenceTerm>, _>>()?;
        let table = ReferenceTable { rmeta, rdata };
        // Checks the region metadata
        table.region()?;
        Ok(table)
    }
}
