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
EpBills
=======

This crate provides a library and binary that **estimate the monthly primary energy use of a
dwelling, by energy carrier and end use, from its utility bills**.

The metered monthly consumption of each carrier (electricity in kWh, gas in m3 and kerosene in L)
is split among seven end uses (heating, cooling, ventilation, lighting, hot water, appliances and
cooking) and converted to primary energy (MJ) with the calorific value of the carrier:

- the consumption of the months with heating or cooling in excess of the non heating / cooling
  consumption is assigned to heating or cooling
- the non heating / cooling consumption is split among the other end uses following the shares of
  a reference energy model, computed from the household size and floor areas
- the results of the three carriers are added by end use and month

It also holds the following assumptions:

- only electricity supplies cooling, ventilation, lighting and appliances
- gas supplies heating, hot water and cooking, and kerosene heating and hot water
- a carrier that is not used gives zero primary energy for all end uses

Este *crate* proporciona una biblioteca y un programa que **estiman la energía primaria mensual
de una vivienda, por vector energético y uso final, a partir de sus facturas de suministro**.

# Ejemplo

```rust
use epbills::*;

// Hogar de 3 personas, región 6, que solo usa electricidad
let profile = HouseholdProfile::new(3, 6, 30.0, 60.0, 120.0).unwrap();
let mut heating = vec![false; 12];
heating[0] = true;
let electricity = CarrierUsage::new(
    Carrier::ELECTRICITY,
    vec![300.0; 12],
    heating,
    vec![false; 12],
    F_PE_ELECTRICITY,
    Adjustments::default(),
)
.unwrap();
let household = Household::new(profile).with_usage(electricity);

// Modelo de referencia con la tabla predefinida
let model = TabulatedReference::with_defaults().unwrap();

// Balance de energía primaria por vector y uso final
let balance = energy_balance(&household, &model).unwrap();
assert_eq!(balance.to_row().len(), 336);
```

*/

#![deny(missing_docs)]

mod balance;
mod calorific;
mod formulas;
mod input;
mod reference;
mod vecops;

pub mod error;
pub mod logging;
pub mod output;
pub mod types;

pub use balance::*;
pub use calorific::*;
pub use formulas::*;
pub use input::*;
pub use output::{headers, write_balances, write_json};
pub use reference::*;
pub use types::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
