use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use epbills::*;

const TABLE_FLAT: &str = "#META REGION: 5
V, BASE, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10
L, BASE, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10
HW, PER_PERSON, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10
AP, BASE, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10
CC, BASE, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10
OTHER, BASE, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50, 50";

fn model() -> TabulatedReference {
    let mut model = TabulatedReference::with_defaults().unwrap();
    model.insert(TABLE_FLAT.parse().unwrap()).unwrap();
    model
}

fn months(active: &[usize]) -> Vec<bool> {
    (1..=NUM_MONTHS).map(|m| active.contains(&m)).collect()
}

fn all_used(coef: f32) -> Adjustments {
    let adj = EndUseAdjustment::new(true, coef);
    Adjustments {
        V: adj,
        L: adj,
        HW: adj,
        AP: adj,
        CC: adj,
    }
}

fn household(region: u8) -> Household {
    let profile = HouseholdProfile::new(2, region, 25.0, 50.0, 100.0).unwrap();
    let electricity = CarrierUsage::new(
        Carrier::ELECTRICITY,
        vec![
            420.0, 380.0, 300.0, 260.0, 250.0, 300.0, 410.0, 450.0, 280.0, 250.0, 270.0, 390.0,
        ],
        months(&[1, 2, 12]),
        months(&[6, 7, 8]),
        F_PE_ELECTRICITY,
        all_used(1.0),
    )
    .unwrap();
    let gas = CarrierUsage::new(
        Carrier::GAS,
        vec![45.0, 40.0, 35.0, 30.0, 25.0, 20.0, 18.0, 18.0, 20.0, 25.0, 32.0, 42.0],
        months(&[1, 2, 3, 11, 12]),
        // cooling flags are ignored for gas
        months(&[6, 7, 8]),
        F_PE_LPG,
        all_used(1.2),
    )
    .unwrap();
    let kerosene = CarrierUsage::new(
        Carrier::KEROSENE,
        vec![60.0, 55.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 20.0, 50.0],
        months(&[1, 2, 3, 11, 12]),
        months(&[7]),
        F_PE_KEROSENE,
        all_used(1.0),
    )
    .unwrap();
    Household::new(profile)
        .with_usage(electricity)
        .with_usage(gas)
        .with_usage(kerosene)
}

#[test]
fn unused_carrier_is_zero() {
    let profile = HouseholdProfile::new(2, 5, 25.0, 50.0, 100.0).unwrap();
    let hh = Household::new(profile.clone()).with_usage(household(5).electricity);
    let bal = energy_balance(&hh, &model()).unwrap();
    assert_eq!(bal.gas, CarrierBalance::zeros());
    assert_eq!(bal.kerosene, CarrierBalance::zeros());
    let row = bal.to_row();
    assert_eq!(row.len(), 336);
    assert!(row[84..252].iter().all(|v| *v == 0.0));

    // no carrier in use at all
    let bal = energy_balance(&Household::new(profile), &model()).unwrap();
    assert!(bal.to_row().iter().all(|v| *v == 0.0));
}

#[test]
fn no_cooling_without_electricity() {
    for region in &[5, 6] {
        let bal = energy_balance(&household(*region), &model()).unwrap();
        assert_eq!(bal.gas.C, vec![0.0; NUM_MONTHS]);
        assert_eq!(bal.kerosene.C, vec![0.0; NUM_MONTHS]);
        assert!(bal.electricity.C[6] > 0.0);
        // gas and kerosene don't supply ventilation, lighting or appliances
        for enduse in &[EndUse::V, EndUse::L, EndUse::AP] {
            assert_eq!(bal.gas.get(*enduse), &[0.0; NUM_MONTHS][..]);
            assert_eq!(bal.kerosene.get(*enduse), &[0.0; NUM_MONTHS][..]);
        }
        assert_eq!(bal.kerosene.CC, vec![0.0; NUM_MONTHS]);
    }
}

#[test]
fn combined_is_sum_of_carriers() {
    let bal = energy_balance(&household(6), &model()).unwrap();
    for enduse in EndUse::ALL.iter() {
        for m in 0..NUM_MONTHS {
            assert_eq!(
                bal.combined.get(*enduse)[m],
                bal.electricity.get(*enduse)[m]
                    + bal.gas.get(*enduse)[m]
                    + bal.kerosene.get(*enduse)[m]
            );
        }
    }
    for m in 0..NUM_MONTHS {
        let sum: f32 = EndUse::ALL.iter().map(|e| bal.combined.get(*e)[m]).sum();
        assert_relative_eq!(bal.total[m], sum, max_relative = 1e-6);
    }
}

#[test]
fn carrier_total_is_sum_of_enduses() {
    let bal = energy_balance(&household(5), &model()).unwrap();
    let total = bal.electricity.total();
    for m in 0..NUM_MONTHS {
        let sum: f32 = EndUse::ALL.iter().map(|e| bal.electricity.get(*e)[m]).sum();
        assert_relative_eq!(total[m], sum, max_relative = 1e-6);
    }
}

#[test]
fn zero_reference_gives_zero_shares() {
    // default table has no baseline: zero coefficients give zero reference energy
    let mut hh = household(6);
    hh.electricity.adjustments = Adjustments::default();
    let bal = energy_balance(&hh, &model()).unwrap();
    for enduse in EndUse::NON_HC.iter() {
        assert_eq!(bal.electricity.get(*enduse), &[0.0; NUM_MONTHS][..]);
    }
}

#[test]
fn heating_plus_non_hc_is_consumption() {
    let hh = household(5);
    let model = model();
    let usage = &hh.electricity;
    let (heating, cooling) = effective_flags(usage.carrier, &usage.heating, &usage.cooling);
    let intermediate = intermediate_months(&heating, &cooling);
    let coefs =
        Coefficients::from_fn(|e| usage.carrier.adjustment_coefficient(e, &usage.adjustments));
    let reference = model
        .reference_energy(&hh.profile, &intermediate, &coefs)
        .unwrap();
    let s_exhc =
        model.non_heating_cooling_consumption(&reference, &intermediate, &usage.consumption);
    let s_h = hc_consumption(&usage.consumption, &s_exhc, &heating);
    for m in 0..NUM_MONTHS {
        if heating[m] {
            assert_relative_eq!(s_h[m] + s_exhc[m], usage.consumption[m], max_relative = 1e-6);
        } else {
            assert_eq!(s_h[m], 0.0);
        }
    }
}

#[test]
fn electricity_only_zero_coefficients() {
    let profile = HouseholdProfile::new(3, 6, 30.0, 60.0, 120.0).unwrap();
    let electricity = CarrierUsage::new(
        Carrier::ELECTRICITY,
        vec![300.0; NUM_MONTHS],
        months(&[1, 2, 12]),
        months(&[6, 7, 8]),
        electricity_calorific_value(),
        Adjustments::default(),
    )
    .unwrap();
    let hh = Household::new(profile).with_usage(electricity);
    let bal = energy_balance(&hh, &model()).unwrap();
    for enduse in EndUse::NON_HC.iter() {
        assert_eq!(bal.electricity.get(*enduse), &[0.0; NUM_MONTHS][..]);
    }
    // no reference baseline: mean of intermediate months, equal to the constant consumption
    assert_eq!(bal.electricity.H, vec![0.0; NUM_MONTHS]);
    assert_eq!(bal.electricity.C, vec![0.0; NUM_MONTHS]);
}

#[test]
fn electricity_only_with_baseline() {
    // flat table: exHC reference is 50 MJ every month with zero coefficients
    let profile = HouseholdProfile::new(3, 5, 30.0, 60.0, 120.0).unwrap();
    let mut consumption = vec![300.0; NUM_MONTHS];
    consumption[0] = 500.0;
    consumption[6] = 400.0;
    let electricity = CarrierUsage::new(
        Carrier::ELECTRICITY,
        consumption,
        months(&[1, 2, 12]),
        months(&[6, 7, 8]),
        F_PE_ELECTRICITY,
        Adjustments::default(),
    )
    .unwrap();
    let hh = Household::new(profile).with_usage(electricity);
    let bal = energy_balance(&hh, &model()).unwrap();
    // S_exHC = 300 in every month
    assert_relative_eq!(bal.electricity.H[0], 200.0 * 9.76, max_relative = 1e-6);
    assert_eq!(bal.electricity.H[1], 0.0);
    assert_relative_eq!(bal.electricity.C[6], 100.0 * 9.76, max_relative = 1e-6);
    assert_eq!(bal.electricity.C[0], 0.0);
    assert_eq!(bal.electricity.HW, vec![0.0; NUM_MONTHS]);
}

#[test]
fn calorific_values() {
    assert_eq!(gas_calorific_value("使用する", "都市ガス", None).unwrap(), 45.0);
    assert_eq!(gas_calorific_value("使用する", "ＬＰガス", None).unwrap(), 100.0);
    assert!(gas_calorific_value("使用する", "天然ガス", None).is_err());
    assert_eq!(kerosene_calorific_value("使用する", Some(30.0)).unwrap(), 37.0);
    assert_eq!(kerosene_calorific_value("使用しない", Some(30.0)).unwrap(), 30.0);
    assert!(kerosene_calorific_value("不明", Some(30.0)).is_err());
}

#[test]
fn read_and_compute_test_data() {
    let file = std::fs::File::open("test_data/hogares.csv").unwrap();
    let households = read_households(file, REGION_DEFAULT).unwrap();
    assert_eq!(households.len(), 3);
    assert_eq!(households[0].profile.region, 5);
    assert_eq!(households[1].profile.region, 6);
    let model = model();
    let balances: Vec<Balance> = households
        .iter()
        .map(|hh| energy_balance(hh, &model).unwrap())
        .collect();
    assert_relative_eq!(
        balances[0].electricity.annual_total(),
        7808.0,
        max_relative = 1e-5
    );
    assert_relative_eq!(
        balances[1].kerosene.annual_total(),
        280.0 * 36.5,
        max_relative = 1e-5
    );
    assert_eq!(balances[2].combined.annual_total(), 0.0);
}
