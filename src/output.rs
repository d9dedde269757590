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
Salida de resultados
====================

- Filas de resultados con cabeceras por vector, uso final y mes (336 valores por hogar)
- Resultados detallados en formato JSON
- Resumen en formato de texto simple
*/

use std::io;

use itertools::iproduct;

use crate::error::Result;
use crate::types::{Balance, Carrier, CarrierBalance, EndUse, MONTHS};

/// Prefix of the combined (all carriers) output block
pub const COMBINED_PREFIX: &str = "一次エネルギー";

/// Output column names
///
/// Electricity, gas, kerosene and combined blocks, each with end uses in `EndUse::ALL`
/// order and months January to December, e.g. `電気_暖房_1月` or `一次エネルギー暖房_1月`.
pub fn headers() -> Vec<String> {
    let carriers = iproduct!(Carrier::ALL.iter(), EndUse::ALL.iter(), MONTHS.iter())
        .map(|(c, e, m)| format!("{}_{}_{}", c.label(), e.label(), m));
    let combined = iproduct!(EndUse::ALL.iter(), MONTHS.iter())
        .map(|(e, m)| format!("{}{}_{}", COMBINED_PREFIX, e.label(), m));
    carriers.chain(combined).collect()
}

/// Write the balance rows, with header, as delimited data
pub fn write_balances<W: io::Write>(wtr: W, balances: &[Balance]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(wtr);
    writer.write_record(headers())?;
    for balance in balances {
        writer.write_record(balance.to_row().iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the detailed balances as JSON
pub fn write_json<W: io::Write>(wtr: W, balances: &[Balance]) -> Result<()> {
    serde_json::to_writer_pretty(wtr, balances).map_err(io::Error::from)?;
    Ok(())
}

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Compact plain text representation of the annual results
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

fn by_enduse(bal: &CarrierBalance) -> String {
    EndUse::ALL
        .iter()
        .map(|e| format!("- {}: {:.1}", e.label(), bal.annual(*e)))
        .collect::<Vec<String>>()
        .join("\n")
}

impl AsPlain for Balance {
    fn to_plain(&self) -> String {
        let total: f32 = self.total.iter().sum();
        let by_carrier = Carrier::ALL
            .iter()
            .map(|c| format!("- {}: {:.1}", c.label(), self.carrier(*c).annual_total()))
            .collect::<Vec<String>>()
            .join("\n");
        let by_use = by_enduse(&self.combined);

        format!(
            "** Energía primaria [MJ/año]

Total: {:.1}

* por vector:
{}

* por uso:
{}
",
            total, by_carrier, by_use
        )
    }
}
