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

//! Resultados: energía primaria mensual por uso final, por vector energético y total

use serde_derive::{Deserialize, Serialize};

use crate::types::{Carrier, EndUse, NUM_MONTHS};
use crate::vecops::{veclistsum, vecsum};

/// Monthly primary energy of one carrier (or of all carriers), by end use, MJ
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierBalance {
    /// Heating
    pub H: Vec<f32>,
    /// Cooling
    pub C: Vec<f32>,
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
}

impl CarrierBalance {
    /// All end uses at zero for every month
    pub fn zeros() -> Self {
        Self::from_fn(|_| vec![0.0; NUM_MONTHS])
    }

    /// Build from a function returning the monthly values of each end use
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(EndUse) -> Vec<f32>,
    {
        Self {
            H: f(EndUse::H),
            C: f(EndUse::C),
            V: f(EndUse::V),
            L: f(EndUse::L),
            HW: f(EndUse::HW),
            AP: f(EndUse::AP),
            CC: f(EndUse::CC),
        }
    }

    /// Monthly values of an end use
    pub fn get(&self, enduse: EndUse) -> &[f32] {
        match enduse {
            EndUse::H => &self.H,
            EndUse::C => &self.C,
            EndUse::V => &self.V,
            EndUse::L => &self.L,
            EndUse::HW => &self.HW,
            EndUse::AP => &self.AP,
            EndUse::CC => &self.CC,
        }
    }

    /// Monthly sum of all end uses
    pub fn total(&self) -> Vec<f32> {
        let uses: Vec<&[f32]> = EndUse::ALL.iter().map(|e| self.get(*e)).collect();
        veclistsum(&uses)
    }

    /// Annual value of an end use
    pub fn annual(&self, enduse: EndUse) -> f32 {
        vecsum(self.get(enduse))
    }

    /// Annual sum of all end uses
    pub fn annual_total(&self) -> f32 {
        vecsum(&self.total())
    }

    /// Values in output order: end uses in `EndUse::ALL` order, 12 months each
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        let enduses: &'static [EndUse] = &EndUse::ALL;
        enduses
            .iter()
            .flat_map(move |e| self.get(*e).iter().cloned())
    }
}

/// Household balance: per carrier, all carriers combined and grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Electricity
    pub electricity: CarrierBalance,
    /// Gas
    pub gas: CarrierBalance,
    /// Kerosene
    pub kerosene: CarrierBalance,
    /// Sum of the three carriers, by end use
    pub combined: CarrierBalance,
    /// Sum of all end uses of the combined balance, by month
    pub total: Vec<f32>,
}

impl Balance {
    /// Balance of a carrier
    pub fn carrier(&self, carrier: Carrier) -> &CarrierBalance {
        match carrier {
            Carrier::ELECTRICITY => &self.electricity,
            Carrier::GAS => &self.gas,
            Carrier::KEROSENE => &self.kerosene,
        }
    }

    /// Flat output row: electricity, gas, kerosene and combined blocks
    pub fn to_row(&self) -> Vec<f32> {
        self.electricity
            .values()
            .chain(self.gas.values())
            .chain(self.kerosene.values())
            .chain(self.combined.values())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn carrier_balance_totals() {
        let cb = CarrierBalance::from_fn(|e| match e {
            EndUse::H => vec![1.0; NUM_MONTHS],
            EndUse::HW => vec![2.0; NUM_MONTHS],
            _ => vec![0.0; NUM_MONTHS],
        });
        assert_eq!(cb.total(), vec![3.0; NUM_MONTHS]);
        assert_eq!(cb.annual(EndUse::HW), 24.0);
        assert_eq!(cb.annual_total(), 36.0);
        assert_eq!(cb.values().count(), 7 * NUM_MONTHS);
        assert_eq!(CarrierBalance::zeros().annual_total(), 0.0);
    }
}
