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
Fórmulas de reparto por usos finales
====================================

Monthly formulas applied to the consumption of a single carrier:

- heating and cooling consumption: `S_H = S - S_exHC` (heating months), `S_C = S - S_exHC` (cooling months)
- consumption of the other end uses from reference shares: `S_X = r_X · S_exHC`, `r_X = E_X_ref / E_exHC_ref`
- primary energy: `E_p = S · f_PE`

Capabilities of each carrier:

| Carrier     | H | C | V | L | HW | AP | CC |
|-------------|---|---|---|---|----|----|----|
| ELECTRICITY | x | x | x | x | x  | x  | x  |
| GAS         | x |   |   |   | x  |    | x  |
| KEROSENE    | x |   |   |   | x  |    |    |
*/

use crate::types::{Adjustments, Carrier, EndUse};
use crate::vecops::{veckmul, vecmask, vecvecdif, vecvecdiv, vecvecmul};

impl Carrier {
    /// The carrier can supply the end use
    pub fn serves(&self, enduse: EndUse) -> bool {
        use EndUse::*;
        match self {
            Carrier::ELECTRICITY => true,
            Carrier::GAS => matches!(enduse, H | HW | CC),
            Carrier::KEROSENE => matches!(enduse, H | HW),
        }
    }

    /// Effective heating flag of the carrier in a month
    pub fn heating_active(&self, flag: bool) -> bool {
        flag && self.serves(EndUse::H)
    }

    /// Effective cooling flag of the carrier in a month (false unless the carrier can cool)
    pub fn cooling_active(&self, flag: bool) -> bool {
        flag && self.serves(EndUse::C)
    }

    /// Reference energy adjustment coefficient of an end use for this carrier
    ///
    /// Zero for heating, cooling and for end uses the carrier doesn't supply.
    pub fn adjustment_coefficient(&self, enduse: EndUse, adjustments: &Adjustments) -> f32 {
        if !self.serves(enduse) {
            return 0.0;
        }
        adjustments
            .get(enduse)
            .map(|adj| adj.coefficient())
            .unwrap_or(0.0)
    }
}

/// Effective heating and cooling monthly flags of a carrier
pub fn effective_flags(
    carrier: Carrier,
    heating: &[bool],
    cooling: &[bool],
) -> (Vec<bool>, Vec<bool>) {
    (
        heating.iter().map(|f| carrier.heating_active(*f)).collect(),
        cooling.iter().map(|f| carrier.cooling_active(*f)).collect(),
    )
}

/// Intermediate months: neither heating nor cooling is active
pub fn intermediate_months(heating: &[bool], cooling: &[bool]) -> Vec<bool> {
    heating
        .iter()
        .zip(cooling.iter())
        .map(|(h, c)| !h && !c)
        .collect()
}

/// Heating or cooling consumption: `S - S_exHC` in active months, 0 otherwise
pub fn hc_consumption(consumption: &[f32], consumption_exhc: &[f32], active: &[bool]) -> Vec<f32> {
    vecmask(&vecvecdif(consumption, consumption_exhc), active)
}

/// Months (0 based) with a negative value
///
/// Heating and cooling are not clamped, a negative value means the non heating / cooling
/// estimate is above the metered consumption.
pub fn negative_months(values: &[f32]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v < 0.0)
        .map(|(i, _)| i)
        .collect()
}

/// Reference share of an end use, `E_X_ref / E_exHC_ref` (0 when the total is 0)
pub fn share(reference: &[f32], reference_exhc: &[f32]) -> Vec<f32> {
    vecvecdiv(reference, reference_exhc)
}

/// Consumption of a share based end use, `r_X · S_exHC`
pub fn share_consumption(share: &[f32], consumption_exhc: &[f32]) -> Vec<f32> {
    vecvecmul(share, consumption_exhc)
}

/// Primary energy from consumption, `S · f_PE`
pub fn primary_energy(consumption: &[f32], f_pe: f32) -> Vec<f32> {
    veckmul(consumption, f_pe)
}
