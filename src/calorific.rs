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
Poder calorífico
================

Factores de conversión a energía primaria de cada vector energético, MJ por unidad de consumo.

- Electricidad: valor fijo, 9.76 MJ/kWh
- Gas: valor normalizado según tipo de gas (都市ガス, ＬＰガス) o valor indicado por el usuario
- Queroseno: valor normalizado o valor indicado por el usuario
*/

use crate::error::{EpbillsError, Result};
use crate::types::{Carrier, GasType, Specified};

/// Electricity conversion factor, MJ/kWh
pub const F_PE_ELECTRICITY: f32 = 9.76;
/// City gas standard calorific value, MJ/m3
pub const F_PE_CITYGAS: f32 = 45.0;
/// LPG standard calorific value, MJ/m3
pub const F_PE_LPG: f32 = 100.0;
/// Kerosene standard calorific value, MJ/L
pub const F_PE_KEROSENE: f32 = 37.0;

fn parse_specified(specified: &str) -> Result<Specified> {
    specified
        .trim()
        .parse::<Specified>()
        .map_err(|_| EpbillsError::SpecifiedFlagUnknown(specified.into()))
}

fn supplied_value(carrier: Carrier, supplied: Option<f32>) -> Result<f32> {
    match supplied {
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Some(value) => Err(EpbillsError::WrongInput(format!(
            "{} calorific value must be non negative and is {}",
            carrier, value
        ))),
        None => Err(EpbillsError::WrongInput(format!(
            "{} calorific value is required when the standard value is not used",
            carrier
        ))),
    }
}

/// Standard calorific value of a gas type
pub fn gas_standard_value(gas_type: GasType) -> f32 {
    match gas_type {
        GasType::CITYGAS => F_PE_CITYGAS,
        GasType::LPG => F_PE_LPG,
    }
}

/// Gas conversion factor, MJ/m3
///
/// With `specified` set to 使用する (USE) the standard value of the gas type is used.
/// With 使用しない (NOUSE) the supplied value is returned and the gas type is not checked.
pub fn gas_calorific_value(specified: &str, gas_type: &str, supplied: Option<f32>) -> Result<f32> {
    match parse_specified(specified)? {
        Specified::USE => {
            let gas_type = gas_type
                .trim()
                .parse::<GasType>()
                .map_err(|_| EpbillsError::GasTypeUnknown(gas_type.into()))?;
            Ok(gas_standard_value(gas_type))
        }
        Specified::NOUSE => supplied_value(Carrier::GAS, supplied),
    }
}

/// Kerosene conversion factor, MJ/L
///
/// The supplied value is ignored when the standard value is used.
pub fn kerosene_calorific_value(specified: &str, supplied: Option<f32>) -> Result<f32> {
    match parse_specified(specified)? {
        Specified::USE => Ok(F_PE_KEROSENE),
        Specified::NOUSE => supplied_value(Carrier::KEROSENE, supplied),
    }
}

/// Electricity conversion factor, MJ/kWh
pub fn electricity_calorific_value() -> f32 {
    F_PE_ELECTRICITY
}
