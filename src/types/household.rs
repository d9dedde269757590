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

//! Datos del hogar

use serde_derive::{Deserialize, Serialize};

use crate::error::{EpbillsError, Result};
use crate::types::{Carrier, CarrierUsage};

/// Climate region used when a record doesn't define one
pub const REGION_DEFAULT: u8 = 6;

/// Household and building parameters used by the reference model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    /// Number of occupants
    pub people: u32,
    /// Climate region (1 to 8)
    pub region: u8,
    /// Main habitable room floor area, m2
    pub area_main: f32,
    /// Other habitable rooms floor area, m2
    pub area_other: f32,
    /// Total floor area, m2
    pub area_total: f32,
}

impl HouseholdProfile {
    /// Constructor with domain checks
    ///
    /// Total floor area is expected to be at least the sum of the room areas,
    /// but this is not enforced.
    pub fn new(
        people: u32,
        region: u8,
        area_main: f32,
        area_other: f32,
        area_total: f32,
    ) -> Result<Self> {
        if people == 0 {
            return Err(EpbillsError::WrongInput(
                "the number of occupants must be positive".into(),
            ));
        }
        if !(1..=8).contains(&region) {
            return Err(EpbillsError::WrongInput(format!(
                "climate region must be between 1 and 8 and is {}",
                region
            )));
        }
        for (name, area) in &[
            ("main room", area_main),
            ("other rooms", area_other),
            ("total", area_total),
        ] {
            if *area < 0.0 || !area.is_finite() {
                return Err(EpbillsError::WrongInput(format!(
                    "{} floor area must be a non negative number and is {}",
                    name, area
                )));
            }
        }
        Ok(Self {
            people,
            region,
            area_main,
            area_other,
            area_total,
        })
    }
}

/// One input record: household profile and metered use of each carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Household profile
    pub profile: HouseholdProfile,
    /// Electricity use
    pub electricity: CarrierUsage,
    /// Gas use
    pub gas: CarrierUsage,
    /// Kerosene use
    pub kerosene: CarrierUsage,
}

impl Household {
    /// Household with no carrier in use
    pub fn new(profile: HouseholdProfile) -> Self {
        Self {
            profile,
            electricity: CarrierUsage::unused(Carrier::ELECTRICITY),
            gas: CarrierUsage::unused(Carrier::GAS),
            kerosene: CarrierUsage::unused(Carrier::KEROSENE),
        }
    }

    /// Metered use of a carrier
    pub fn usage(&self, carrier: Carrier) -> &CarrierUsage {
        match carrier {
            Carrier::ELECTRICITY => &self.electricity,
            Carrier::GAS => &self.gas,
            Carrier::KEROSENE => &self.kerosene,
        }
    }

    /// Set the metered use of its carrier
    pub fn with_usage(mut self, usage: CarrierUsage) -> Self {
        match usage.carrier {
            Carrier::ELECTRICITY => self.electricity = usage,
            Carrier::GAS => self.gas = usage,
            Carrier::KEROSENE => self.kerosene = usage,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_domain() {
        assert!(HouseholdProfile::new(3, 6, 30.0, 60.0, 120.0).is_ok());
        assert!(HouseholdProfile::new(0, 6, 30.0, 60.0, 120.0).is_err());
        assert!(HouseholdProfile::new(3, 9, 30.0, 60.0, 120.0).is_err());
        assert!(HouseholdProfile::new(3, 6, -1.0, 60.0, 120.0).is_err());
        // total area below the sum of room areas is accepted
        assert!(HouseholdProfile::new(3, 6, 30.0, 60.0, 50.0).is_ok());
    }

    #[test]
    fn household_usage_slots() {
        let profile = HouseholdProfile::new(2, 6, 20.0, 40.0, 80.0).unwrap();
        let hh = Household::new(profile);
        for cr in Carrier::ALL.iter() {
            assert!(!hh.usage(*cr).used);
            assert_eq!(hh.usage(*cr).carrier, *cr);
        }
    }
}
