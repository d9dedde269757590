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
Balance de energía primaria
===========================

Reparto del consumo de cada vector energético por usos finales y agregación de los
vectores en el balance del hogar.

- `carrier_balance`: primary energy of one carrier, by end use
- `combine`: sum of the carrier balances, by end use, and monthly total
- `energy_balance`: balance of a household record

*/

use crate::{
    error::Result,
    formulas::{
        effective_flags, hc_consumption, intermediate_months, negative_months, primary_energy,
        share_consumption,
    },
    reference::{Coefficients, ReferenceModel},
    types::{Balance, Carrier, CarrierBalance, CarrierUsage, EndUse, Household, HouseholdProfile},
    vecops::{veclistsum, vecsum},
};

/// Primary energy of a carrier by end use, MJ
///
/// # Arguments
///
/// * `profile` - household profile, used by the reference model
/// * `usage` - metered use of the carrier
/// * `model` - reference energy model
///
/// An unused carrier gives all end uses at zero and the reference model is not called.
///
/// # Errors
///
/// * Errors of the reference model (e.g. no reference data for the household region)
///
pub fn carrier_balance(
    profile: &HouseholdProfile,
    usage: &CarrierUsage,
    model: &dyn ReferenceModel,
) -> Result<CarrierBalance> {
    if !usage.used {
        return Ok(CarrierBalance::zeros());
    }
    let carrier = usage.carrier;

    let (heating, cooling) = effective_flags(carrier, &usage.heating, &usage.cooling);
    let intermediate = intermediate_months(&heating, &cooling);

    let coefs = Coefficients::from_fn(|e| carrier.adjustment_coefficient(e, &usage.adjustments));
    let reference = model.reference_energy(profile, &intermediate, &coefs)?;

    // S_m and S_exHC_m
    let consumption = &usage.consumption;
    let consumption_exhc =
        model.non_heating_cooling_consumption(&reference, &intermediate, consumption);

    let balance = CarrierBalance::from_fn(|enduse| {
        if !carrier.serves(enduse) {
            return vec![0.0; consumption.len()];
        }
        let s_enduse = match enduse {
            // S_H_m = S_m - S_exHC_m
            EndUse::H => hc_consumption(consumption, &consumption_exhc, &heating),
            // S_C_m = S_m - S_exHC_m
            EndUse::C => hc_consumption(consumption, &consumption_exhc, &cooling),
            // S_X_m = r_X_m · S_exHC_m
            _ => share_consumption(&reference.share(enduse), &consumption_exhc),
        };
        if enduse == EndUse::H || enduse == EndUse::C {
            let negative = negative_months(&s_enduse);
            if !negative.is_empty() {
                tracing::warn!(
                    carrier = %carrier,
                    enduse = %enduse,
                    months = ?negative,
                    "Negative consumption, estimated non heating / cooling use above metered use"
                );
            }
        }
        // E_p_X_m = S_X_m · f_PE
        primary_energy(&s_enduse, usage.f_pe)
    });

    tracing::debug!(
        carrier = %carrier,
        intermediate_months = intermediate.iter().filter(|im| **im).count(),
        consumption = vecsum(consumption),
        primary_energy = balance.annual_total(),
        "Carrier balance"
    );

    Ok(balance)
}

/// Sum of the carrier balances by end use and monthly total of the combined balance
pub fn combine(
    electricity: &CarrierBalance,
    gas: &CarrierBalance,
    kerosene: &CarrierBalance,
) -> (CarrierBalance, Vec<f32>) {
    let combined = CarrierBalance::from_fn(|enduse| {
        veclistsum(&[
            electricity.get(enduse),
            gas.get(enduse),
            kerosene.get(enduse),
        ])
    });
    let total = combined.total();
    (combined, total)
}

/// Primary energy balance of a household
///
/// # Errors
///
/// * Errors of the reference model for any of the used carriers
///
pub fn energy_balance(household: &Household, model: &dyn ReferenceModel) -> Result<Balance> {
    let profile = &household.profile;
    let balance_or_zeros = |usage: &CarrierUsage| -> Result<CarrierBalance> {
        if usage.used {
            carrier_balance(profile, usage, model)
        } else {
            Ok(CarrierBalance::zeros())
        }
    };

    let electricity = balance_or_zeros(household.usage(Carrier::ELECTRICITY))?;
    let gas = balance_or_zeros(household.usage(Carrier::GAS))?;
    let kerosene = balance_or_zeros(household.usage(Carrier::KEROSENE))?;

    let (combined, total) = combine(&electricity, &gas, &kerosene);

    Ok(Balance {
        electricity,
        gas,
        kerosene,
        combined,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceEnergy;
    use crate::types::{Adjustments, EndUseAdjustment, NUM_MONTHS};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    // Flat reference: 10 MJ for each end use, times its coefficient, and a 50 MJ baseline
    struct FlatReference {
        calls: Cell<usize>,
    }

    impl ReferenceModel for FlatReference {
        fn reference_energy(
            &self,
            _profile: &HouseholdProfile,
            _intermediate: &[bool],
            coefs: &Coefficients,
        ) -> Result<ReferenceEnergy> {
            self.calls.set(self.calls.get() + 1);
            let v = |e: EndUse| vec![10.0 * coefs.get(e); NUM_MONTHS];
            let exhc = EndUse::NON_HC
                .iter()
                .fold(vec![50.0; NUM_MONTHS], |acc, e| {
                    acc.iter().map(|a| a + 10.0 * coefs.get(*e)).collect()
                });
            Ok(ReferenceEnergy {
                V: v(EndUse::V),
                L: v(EndUse::L),
                HW: v(EndUse::HW),
                AP: v(EndUse::AP),
                CC: v(EndUse::CC),
                exHC: exhc,
            })
        }
    }

    fn profile() -> HouseholdProfile {
        HouseholdProfile::new(3, 6, 30.0, 50.0, 100.0).unwrap()
    }

    fn all_used() -> Adjustments {
        let adj = EndUseAdjustment::new(true, 1.0);
        Adjustments {
            V: adj,
            L: adj,
            HW: adj,
            AP: adj,
            CC: adj,
        }
    }

    #[test]
    fn unused_carrier_skips_model() {
        let model = FlatReference { calls: Cell::new(0) };
        let usage = CarrierUsage::unused(Carrier::GAS);
        let bal = carrier_balance(&profile(), &usage, &model).unwrap();
        assert_eq!(bal, CarrierBalance::zeros());
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn gas_never_cools() {
        let model = FlatReference { calls: Cell::new(0) };
        let usage = CarrierUsage::new(
            Carrier::GAS,
            vec![30.0; NUM_MONTHS],
            vec![true; NUM_MONTHS],
            vec![true; NUM_MONTHS],
            45.0,
            all_used(),
        )
        .unwrap();
        let bal = carrier_balance(&profile(), &usage, &model).unwrap();
        assert_eq!(model.calls.get(), 1);
        assert_eq!(bal.C, vec![0.0; NUM_MONTHS]);
        assert_eq!(bal.V, vec![0.0; NUM_MONTHS]);
        assert_eq!(bal.L, vec![0.0; NUM_MONTHS]);
        assert_eq!(bal.AP, vec![0.0; NUM_MONTHS]);
    }

    #[test]
    fn electricity_split() {
        let model = FlatReference { calls: Cell::new(0) };
        let mut heating = vec![false; NUM_MONTHS];
        heating[0] = true;
        let mut consumption = vec![100.0; NUM_MONTHS];
        consumption[0] = 250.0;
        let usage = CarrierUsage::new(
            Carrier::ELECTRICITY,
            consumption,
            heating,
            vec![false; NUM_MONTHS],
            2.0,
            all_used(),
        )
        .unwrap();
        let bal = carrier_balance(&profile(), &usage, &model).unwrap();
        // flat reference: S_exHC = 100 in every month
        assert_eq!(bal.H[0], 300.0);
        assert_eq!(bal.H[1], 0.0);
        // each share based end use is 10 / 100 of S_exHC
        assert_eq!(bal.HW[0], 20.0);
        assert_eq!(bal.CC[5], 20.0);
        assert_eq!(bal.total()[0], 400.0);
    }

    #[test]
    fn gas_heating_below_estimate_stays_negative() {
        let model = FlatReference { calls: Cell::new(0) };
        let mut heating = vec![false; NUM_MONTHS];
        heating[0] = true;
        let mut consumption = vec![100.0; NUM_MONTHS];
        consumption[0] = 50.0;
        let usage = CarrierUsage::new(
            Carrier::GAS,
            consumption,
            heating,
            vec![false; NUM_MONTHS],
            45.0,
            all_used(),
        )
        .unwrap();
        let bal = carrier_balance(&profile(), &usage, &model).unwrap();
        // S_exHC = 100, S_H = 50 - 100, HW and CC are 10 / 70 of S_exHC each
        assert_relative_eq!(bal.H[0], -50.0 * 45.0, max_relative = 1e-5);
        assert_relative_eq!(
            bal.total()[0],
            (-50.0 + 200.0 / 7.0) * 45.0,
            max_relative = 1e-5
        );
    }

    #[test]
    fn combine_sums_carriers() {
        let a = CarrierBalance::from_fn(|_| vec![1.0; NUM_MONTHS]);
        let b = CarrierBalance::from_fn(|e| {
            vec![if e == EndUse::HW { 2.0 } else { 0.0 }; NUM_MONTHS]
        });
        let c = CarrierBalance::zeros();
        let (combined, total) = combine(&a, &b, &c);
        assert_eq!(combined.HW, vec![3.0; NUM_MONTHS]);
        assert_eq!(combined.C, vec![1.0; NUM_MONTHS]);
        assert_eq!(total, vec![9.0; NUM_MONTHS]);
    }
}
