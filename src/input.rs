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
Lectura de datos de entrada
===========================

Households are read from a delimited file with a header row. Columns are addressed by name:

- household: `people`, `region` (optional), `area_main`, `area_other`, `area_total`
- carriers in use: `use_electricity`, `use_gas`, `use_kerosene`
- calorific values: `gas_type`, `gas_cv_specified`, `gas_cv`, `kerosene_cv_specified`, `kerosene_cv`
- adjustments: `elec_hw_use`, `elec_hw_coef`, ... (only the end uses each carrier supplies)
- monthly data: `elec_cons_01`..`elec_cons_12`, `elec_heat_01`.., `elec_cool_01`..,
  `gas_cons_01`.., `gas_heat_01`.., `kerosene_cons_01`.., `kerosene_heat_01`..

Columns of a carrier are only needed when the carrier is in use.
Flags accept `1` / `0` and `true` / `false`.
*/

use std::collections::HashMap;
use std::io;

use crate::calorific::{electricity_calorific_value, gas_calorific_value, kerosene_calorific_value};
use crate::error::{EpbillsError, Result};
use crate::types::{
    Adjustments, Carrier, CarrierUsage, EndUse, EndUseAdjustment, Household, HouseholdProfile,
    NUM_MONTHS,
};

/// Columns every record must have
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "people",
    "area_main",
    "area_other",
    "area_total",
    "use_electricity",
    "use_gas",
    "use_kerosene",
];

/// Prefix of the columns of a carrier
pub fn column_prefix(carrier: Carrier) -> &'static str {
    match carrier {
        Carrier::ELECTRICITY => "elec",
        Carrier::GAS => "gas",
        Carrier::KEROSENE => "kerosene",
    }
}

/// Names of the twelve monthly columns of a block (e.g. `gas_cons_01`)
pub fn monthly_columns(prefix: &str, block: &str) -> Vec<String> {
    (1..=NUM_MONTHS)
        .map(|m| format!("{}_{}_{:02}", prefix, block, m))
        .collect()
}

/// Column positions by name
struct Columns(HashMap<String, usize>);

impl Columns {
    fn new(headers: &csv::StringRecord) -> Result<Self> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim_start_matches('\u{feff}').to_string(), i))
            .collect();
        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !index.contains_key(**c)) {
            return Err(EpbillsError::ColumnMissing(missing.to_string()));
        }
        Ok(Columns(index))
    }
}

/// Field access of one record
struct Row<'a> {
    columns: &'a Columns,
    record: &'a csv::StringRecord,
}

impl<'a> Row<'a> {
    fn get_opt(&self, name: &str) -> Option<&'a str> {
        self.columns
            .0
            .get(name)
            .and_then(|i| self.record.get(*i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn get(&self, name: &str) -> Result<&'a str> {
        if !self.columns.0.contains_key(name) {
            return Err(EpbillsError::ColumnMissing(name.into()));
        }
        self.get_opt(name)
            .ok_or_else(|| EpbillsError::ParseError(format!("{}: empty value", name)))
    }

    fn f32_opt(&self, name: &str) -> Result<Option<f32>> {
        self.get_opt(name)
            .map(|v| parse_f32(name, v))
            .transpose()
    }

    fn f32(&self, name: &str) -> Result<f32> {
        parse_f32(name, self.get(name)?)
    }

    fn bool(&self, name: &str) -> Result<bool> {
        parse_bool(name, self.get(name)?)
    }

    fn monthly_f32(&self, prefix: &str, block: &str) -> Result<Vec<f32>> {
        monthly_columns(prefix, block)
            .iter()
            .map(|c| self.f32(c))
            .collect()
    }

    fn monthly_bool(&self, prefix: &str, block: &str) -> Result<Vec<bool>> {
        monthly_columns(prefix, block)
            .iter()
            .map(|c| self.bool(c))
            .collect()
    }
}

fn parse_f32(name: &str, value: &str) -> Result<f32> {
    value
        .parse::<f32>()
        .map_err(|_| EpbillsError::ParseError(format!("{}: `{}`", name, value)))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(EpbillsError::ParseError(format!("{}: `{}`", name, value))),
    }
}

fn read_profile(row: &Row, default_region: u8) -> Result<HouseholdProfile> {
    let people = row.get("people")?;
    let people = people
        .parse::<u32>()
        .map_err(|_| EpbillsError::ParseError(format!("people: `{}`", people)))?;
    let region = match row.get_opt("region") {
        Some(v) => v
            .parse::<u8>()
            .map_err(|_| EpbillsError::ParseError(format!("region: `{}`", v)))?,
        None => default_region,
    };
    HouseholdProfile::new(
        people,
        region,
        row.f32("area_main")?,
        row.f32("area_other")?,
        row.f32("area_total")?,
    )
}

fn read_adjustments(row: &Row, carrier: Carrier) -> Result<Adjustments> {
    let prefix = column_prefix(carrier);
    let mut adjustments = Adjustments::default();
    for enduse in EndUse::NON_HC.iter().filter(|e| carrier.serves(**e)) {
        let code = enduse.to_string().to_lowercase();
        let used = row.bool(&format!("{}_{}_use", prefix, code))?;
        let coef_col = format!("{}_{}_coef", prefix, code);
        let coef = if used {
            row.f32(&coef_col)?
        } else {
            row.f32_opt(&coef_col)?.unwrap_or(0.0)
        };
        if let Some(adj) = adjustments.get_mut(*enduse) {
            *adj = EndUseAdjustment::new(used, coef);
        }
    }
    Ok(adjustments)
}

fn read_usage(row: &Row, carrier: Carrier) -> Result<CarrierUsage> {
    let prefix = column_prefix(carrier);
    if !row.bool(&format!("use_{}", carrier_use_column(carrier)))? {
        return Ok(CarrierUsage::unused(carrier));
    }
    let consumption = row.monthly_f32(prefix, "cons")?;
    let heating = row.monthly_bool(prefix, "heat")?;
    let cooling = if carrier.serves(EndUse::C) {
        row.monthly_bool(prefix, "cool")?
    } else {
        vec![false; NUM_MONTHS]
    };
    let f_pe = match carrier {
        Carrier::ELECTRICITY => electricity_calorific_value(),
        Carrier::GAS => gas_calorific_value(
            row.get("gas_cv_specified")?,
            row.get_opt("gas_type").unwrap_or(""),
            row.f32_opt("gas_cv")?,
        )?,
        Carrier::KEROSENE => kerosene_calorific_value(
            row.get("kerosene_cv_specified")?,
            row.f32_opt("kerosene_cv")?,
        )?,
    };
    let adjustments = read_adjustments(row, carrier)?;
    CarrierUsage::new(carrier, consumption, heating, cooling, f_pe, adjustments)
}

fn carrier_use_column(carrier: Carrier) -> &'static str {
    match carrier {
        Carrier::ELECTRICITY => "electricity",
        Carrier::GAS => "gas",
        Carrier::KEROSENE => "kerosene",
    }
}

/// Read households from delimited data with a header row
///
/// `default_region` is used for records without a `region` value.
///
/// # Errors
///
/// * `ColumnMissing` when a required column, or a column of a used carrier, is not in the header
/// * `ParseError` for values that can't be interpreted
/// * errors of the calorific value resolution and of the household and usage constructors
///
pub fn read_households<R: io::Read>(rdr: R, default_region: u8) -> Result<Vec<Household>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let columns = Columns::new(reader.headers()?)?;

    let mut households = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = Row {
            columns: &columns,
            record: &record,
        };
        let household = read_household(&row, default_region).map_err(|e| match e {
            EpbillsError::ParseError(msg) => {
                EpbillsError::ParseError(format!("record {}: {}", i + 1, msg))
            }
            EpbillsError::WrongInput(msg) => {
                EpbillsError::WrongInput(format!("record {}: {}", i + 1, msg))
            }
            other => other,
        })?;
        tracing::debug!(record = i + 1, region = household.profile.region, "Household read");
        households.push(household);
    }
    Ok(households)
}

fn read_household(row: &Row, default_region: u8) -> Result<Household> {
    let profile = read_profile(row, default_region)?;
    let mut household = Household::new(profile);
    for carrier in Carrier::ALL.iter() {
        household = household.with_usage(read_usage(row, *carrier)?);
    }
    Ok(household)
}
