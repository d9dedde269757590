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
Modelo de referencia
====================

Reference energy of each end use, used to split the non heating / cooling consumption
of a carrier among ventilation, lighting, hot water, appliances and cooking.

The `ReferenceModel` trait is the contract the balance needs. `TabulatedReference` implements it
from reference tables (one per climate region), with an embedded default table for region 6.
*/

use std::collections::{HashMap, HashSet};

use serde_derive::{Deserialize, Serialize};

use crate::error::{EpbillsError, Result};
use crate::formulas::share;
use crate::types::{EndUse, HouseholdProfile, RefUse, ReferenceTable, NUM_MONTHS};
use crate::vecops::{veckmul, veclistsum, vecsum};

/// Default reference table, climate region 6
///
/// Illustrative monthly values, MJ per unit of basis.
pub const REFERENCE_TABLE_DEFAULT: &str = "#META REGION: 6
#META SOURCE: default illustrative values
V, PER_TOTAL_AREA, 1.86, 1.68, 1.86, 1.80, 1.86, 1.80, 1.86, 1.86, 1.80, 1.86, 1.80, 1.86 # ventilation, per m2 of floor area
L, PER_MAIN_AREA, 3.30, 3.20, 3.20, 3.10, 3.00, 2.90, 2.90, 3.00, 3.10, 3.20, 3.30, 3.30 # lighting, main room
L, PER_OTHER_AREA, 1.65, 1.50, 1.45, 1.35, 1.25, 1.15, 1.15, 1.20, 1.30, 1.45, 1.55, 1.65 # lighting, other rooms
L, PER_TOTAL_AREA, 0.52, 0.48, 0.47, 0.44, 0.41, 0.36, 0.36, 0.38, 0.42, 0.46, 0.49, 0.52 # lighting, non habitable rooms
HW, PER_PERSON, 620.00, 560.00, 560.00, 480.00, 420.00, 350.00, 300.00, 280.00, 320.00, 400.00, 480.00, 580.00 # hot water, per occupant
HW, BASE, 180.00, 160.00, 165.00, 140.00, 120.00, 100.00, 90.00, 85.00, 95.00, 120.00, 140.00, 170.00 # hot water, baths
AP, PER_PERSON, 118.00, 106.00, 112.00, 104.00, 102.00, 100.00, 108.00, 110.00, 102.00, 104.00, 108.00, 116.00 # appliances, per occupant
AP, BASE, 450.00, 405.00, 430.00, 400.00, 395.00, 380.00, 420.00, 430.00, 390.00, 405.00, 420.00, 445.00 # appliances, fixed
AP, PER_TOTAL_AREA, 0.90, 0.81, 0.88, 0.84, 0.84, 0.80, 0.85, 0.86, 0.81, 0.84, 0.85, 0.90 # appliances, per m2 of floor area
CC, PER_PERSON, 62.00, 56.00, 60.00, 57.00, 56.00, 52.00, 53.00, 54.00, 52.00, 56.00, 57.00, 62.00 # cooking, per occupant
CC, BASE, 56.00, 50.00, 55.00, 53.00, 53.00, 51.00, 52.00, 53.00, 51.00, 53.00, 53.00, 56.00 # cooking, fixed
";

/// Reference energy adjustment coefficients of the share based end uses [-]
#[allow(non_snake_case)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Ventilation
    pub V: f32,
    /// Lighting
    pub L: f32,
    /// Hot water
    pub HW: f32,
    /// Appliances
    pub AP: f32,
    /// Cooking
    pub CC: f32,
}

impl Coefficients {
    /// Build from a function returning the coefficient of each share based end use
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(EndUse) -> f32,
    {
        Self {
            V: f(EndUse::V),
            L: f(EndUse::L),
            HW: f(EndUse::HW),
            AP: f(EndUse::AP),
            CC: f(EndUse::CC),
        }
    }

    /// Coefficient of an end use (0.0 for heating and cooling)
    pub fn get(&self, enduse: EndUse) -> f32 {
        match enduse {
            EndUse::V => self.V,
            EndUse::L => self.L,
            EndUse::HW => self.HW,
            EndUse::AP => self.AP,
            EndUse::CC => self.CC,
            EndUse::H | EndUse::C => 0.0,
        }
    }
}

/// Monthly reference energy, MJ
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEnergy {
    /// Ventilation
    pub V: Vec<f32>,
    /// Lighting
    pub L: Vec<f32>,
    /// Hot water
    pub HW: Vec<f32>,
    /// Appliances
    pub AP: Vec<f32>,
    /// Cooking
    pub CC: Vec<f32>,
    /// Total of all the non heating / cooling reference energy
    pub exHC: Vec<f32>,
}

impl ReferenceEnergy {
    /// Reference energy of an end use (zeros for heating and cooling)
    pub fn get(&self, enduse: EndUse) -> &[f32] {
        const ZEROS: [f32; NUM_MONTHS] = [0.0; NUM_MONTHS];
        match enduse {
            EndUse::V => &self.V,
            EndUse::L => &self.L,
            EndUse::HW => &self.HW,
            EndUse::AP => &self.AP,
            EndUse::CC => &self.CC,
            EndUse::H | EndUse::C => &ZEROS,
        }
    }

    /// Monthly share of an end use in the non heating / cooling reference energy
    pub fn share(&self, enduse: EndUse) -> Vec<f32> {
        share(self.get(enduse), &self.exHC)
    }
}

/// Reference energy model
pub trait ReferenceModel {
    /// Monthly reference energy of the share based end uses and its non heating / cooling total
    ///
    /// `intermediate` flags the months with neither heating nor cooling.
    fn reference_energy(
        &self,
        profile: &HouseholdProfile,
        intermediate: &[bool],
        coefs: &Coefficients,
    ) -> Result<ReferenceEnergy>;

    /// Monthly non heating / cooling consumption (S_exHC), in carrier units
    ///
    /// In intermediate months all the consumption is non heating / cooling. In the other months
    /// it is estimated from the intermediate months, following the profile of the non heating /
    /// cooling reference energy, or their mean consumption when that reference is zero.
    /// Without intermediate months nothing is assigned to heating or cooling.
    fn non_heating_cooling_consumption(
        &self,
        reference: &ReferenceEnergy,
        intermediate: &[bool],
        consumption: &[f32],
    ) -> Vec<f32> {
        let num_im = intermediate.iter().filter(|im| **im).count();
        if num_im == 0 {
            tracing::warn!("No intermediate months, heating and cooling consumption set to zero");
            return consumption.to_vec();
        }
        let im_values = |values: &[f32]| -> f32 {
            values
                .iter()
                .zip(intermediate.iter())
                .filter(|(_, im)| **im)
                .map(|(v, _)| *v)
                .sum()
        };
        let s_im = im_values(consumption);
        let ref_im = im_values(&reference.exHC);

        let estimate: Vec<f32> = if ref_im > 0.0 {
            veckmul(&reference.exHC, s_im / ref_im)
        } else {
            tracing::warn!(
                "Zero reference energy in intermediate months, using their mean consumption"
            );
            vec![s_im / num_im as f32; consumption.len()]
        };

        consumption
            .iter()
            .zip(intermediate.iter())
            .zip(estimate.iter())
            .map(|((s, im), e)| if *im { *s } else { *e })
            .collect()
    }
}

/// Reference model built from reference tables, one per climate region
#[derive(Debug, Clone, Default)]
pub struct TabulatedReference {
    tables: HashMap<u8, ReferenceTable>,
    embedded: HashSet<u8>,
}

impl TabulatedReference {
    /// Model without tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with the embedded default table
    pub fn with_defaults() -> Result<Self> {
        let mut model = Self::new();
        let region = model.insert(REFERENCE_TABLE_DEFAULT.parse()?)?;
        model.embedded.insert(region);
        Ok(model)
    }

    /// Add a table, replacing any previous table of the same region
    pub fn insert(&mut self, table: ReferenceTable) -> Result<u8> {
        let region = table.region()?;
        if !(1..=8).contains(&region) {
            return Err(EpbillsError::RegionUnknown(region));
        }
        self.tables.insert(region, table);
        self.embedded.remove(&region);
        Ok(region)
    }

    /// The table of the region is the embedded default one
    pub fn is_embedded(&self, region: u8) -> bool {
        self.embedded.contains(&region)
    }

    /// Table of a region
    pub fn table(&self, region: u8) -> Result<&ReferenceTable> {
        self.tables
            .get(&region)
            .ok_or(EpbillsError::RegionUnknown(region))
    }

    /// Regions with a reference table, sorted
    pub fn regions(&self) -> Vec<u8> {
        let mut regions: Vec<u8> = self.tables.keys().cloned().collect();
        regions.sort();
        regions
    }
}

impl ReferenceModel for TabulatedReference {
    #[allow(non_snake_case)]
    fn reference_energy(
        &self,
        profile: &HouseholdProfile,
        _intermediate: &[bool],
        coefs: &Coefficients,
    ) -> Result<ReferenceEnergy> {
        let table = self.table(profile.region)?;

        let item_energy = |item: RefUse| -> Vec<f32> {
            let terms: Vec<Vec<f32>> = table.terms(item).map(|t| t.energy(profile)).collect();
            let terms: Vec<&[f32]> = terms.iter().map(Vec::as_slice).collect();
            let mut res = veclistsum(&terms);
            res.resize(NUM_MONTHS, 0.0);
            res
        };
        // Items tied to an end use are scaled by its coefficient, the baseline is not
        let adjusted_energy = |item: RefUse| -> Vec<f32> {
            match item.enduse() {
                Some(enduse) => veckmul(&item_energy(item), coefs.get(enduse)),
                None => item_energy(item),
            }
        };

        let V = adjusted_energy(RefUse::V);
        let L = adjusted_energy(RefUse::L);
        let HW = adjusted_energy(RefUse::HW);
        let AP = adjusted_energy(RefUse::AP);
        let CC = adjusted_energy(RefUse::CC);
        let other = adjusted_energy(RefUse::OTHER);
        let exHC = veclistsum(&[
            V.as_slice(),
            L.as_slice(),
            HW.as_slice(),
            AP.as_slice(),
            CC.as_slice(),
            other.as_slice(),
        ]);

        tracing::trace!(
            region = profile.region,
            annual_exhc = vecsum(&exHC),
            "Reference energy"
        );

        Ok(ReferenceEnergy {
            V,
            L,
            HW,
            AP,
            CC,
            exHC,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn profile() -> HouseholdProfile {
        HouseholdProfile::new(4, 6, 30.0, 60.0, 120.0).unwrap()
    }

    const TABLE_FLAT: &str = "#META REGION: 5
HW, PER_PERSON, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10
CC, BASE, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20
OTHER, BASE, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100";

    #[test]
    fn default_table_parses() {
        let model = TabulatedReference::with_defaults().unwrap();
        assert_eq!(model.regions(), vec![6]);
        assert!(model.is_embedded(6));
        let table = model.table(6).unwrap();
        assert_eq!(
            format!("{}\n", table).parse::<ReferenceTable>().unwrap(),
            *table
        );
    }

    #[test]
    fn user_table_replaces_embedded_one() {
        let mut model = TabulatedReference::with_defaults().unwrap();
        let table: ReferenceTable = TABLE_FLAT.replace("REGION: 5", "REGION: 6").parse().unwrap();
        assert_eq!(model.insert(table).unwrap(), 6);
        assert_eq!(model.regions(), vec![6]);
        assert!(!model.is_embedded(6));

        let coefs = Coefficients {
            HW: 1.0,
            CC: 1.0,
            ..Default::default()
        };
        let re = model
            .reference_energy(&profile(), &[true; 12], &coefs)
            .unwrap();
        assert_eq!(re.HW, vec![40.0; 12]);
        assert_eq!(re.CC, vec![20.0; 12]);
        assert_eq!(re.exHC, vec![160.0; 12]);
    }

    #[test]
    fn unknown_region() {
        let model = TabulatedReference::with_defaults().unwrap();
        let profile = HouseholdProfile::new(4, 3, 30.0, 60.0, 120.0).unwrap();
        match model.reference_energy(&profile, &[true; 12], &Coefficients::default()) {
            Err(EpbillsError::RegionUnknown(3)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn tabulated_reference_energy() {
        let mut model = TabulatedReference::new();
        model.insert(TABLE_FLAT.parse().unwrap()).unwrap();
        let profile = HouseholdProfile::new(4, 5, 30.0, 60.0, 120.0).unwrap();
        let coefs = Coefficients {
            HW: 0.5,
            CC: 1.0,
            ..Default::default()
        };
        let re = model
            .reference_energy(&profile, &[true; 12], &coefs)
            .unwrap();
        assert_eq!(re.HW, vec![20.0; 12]);
        assert_eq!(re.CC, vec![20.0; 12]);
        assert_eq!(re.V, vec![0.0; 12]);
        assert_eq!(re.exHC, vec![140.0; 12]);
        assert_relative_eq!(re.share(EndUse::HW)[0], 20.0 / 140.0);
        assert_eq!(re.share(EndUse::H), vec![0.0; 12]);
    }

    #[test]
    fn zero_coefficients_leave_baseline() {
        let model = TabulatedReference::with_defaults().unwrap();
        let re = model
            .reference_energy(&profile(), &[true; 12], &Coefficients::default())
            .unwrap();
        for eu in EndUse::NON_HC.iter() {
            assert_eq!(re.get(*eu), &[0.0; 12][..]);
        }
        assert_eq!(re.exHC, vec![0.0; 12]);
    }

    #[test]
    fn non_heating_cooling_consumption() {
        let model = TabulatedReference::new();
        let mut im = vec![true; 12];
        im[0] = false;
        im[6] = false;
        let mut exhc = vec![100.0; 12];
        exhc[0] = 150.0;
        let reference = ReferenceEnergy {
            V: vec![0.0; 12],
            L: vec![0.0; 12],
            HW: vec![0.0; 12],
            AP: vec![0.0; 12],
            CC: vec![0.0; 12],
            exHC: exhc,
        };
        let consumption = vec![
            400.0, 200.0, 200.0, 200.0, 200.0, 200.0, 500.0, 200.0, 200.0, 200.0, 200.0, 200.0,
        ];
        let s_exhc = model.non_heating_cooling_consumption(&reference, &im, &consumption);
        // intermediate months keep their consumption
        assert_eq!(s_exhc[1], 200.0);
        // other months follow the reference profile
        assert_relative_eq!(s_exhc[0], 300.0);
        assert_relative_eq!(s_exhc[6], 200.0);

        // zero reference: mean of intermediate months
        let reference = ReferenceEnergy {
            exHC: vec![0.0; 12],
            ..reference
        };
        let s_exhc = model.non_heating_cooling_consumption(&reference, &im, &consumption);
        assert_relative_eq!(s_exhc[0], 200.0);

        // no intermediate months
        let s_exhc = model.non_heating_cooling_consumption(&reference, &[false; 12], &consumption);
        assert_eq!(s_exhc, consumption);
    }
}
