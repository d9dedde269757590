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

//! Consumo medido por vector energético y coeficientes de ajuste por uso

use serde_derive::{Deserialize, Serialize};

use crate::error::{EpbillsError, Result};
use crate::types::{Carrier, EndUse, NUM_MONTHS};

/// Adjustment of the reference energy of one end use for one carrier
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndUseAdjustment {
    /// The carrier is used for this end use
    pub used: bool,
    /// Adjustment coefficient [-]
    pub coef: f32,
}

impl EndUseAdjustment {
    /// Constructor
    pub fn new(used: bool, coef: f32) -> Self {
        Self { used, coef }
    }

    /// Effective coefficient: `coef` if the end use is served, 0.0 otherwise
    pub fn coefficient(&self) -> f32 {
        if self.used {
            self.coef
        } else {
            0.0
        }
    }
}

/// Adjustments of the end uses apportioned with reference shares
#[allow(non_snake_case)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    /// Ventilation
    pub V: EndUseAdjustment,
    /// Lighting
    pub L: EndUseAdjustment,
    /// Hot water
    pub HW: EndUseAdjustment,
    /// Appliances
    pub AP: EndUseAdjustment,
    /// Cooking
    pub CC: EndUseAdjustment,
}

impl Adjustments {
    /// Adjustment for an end use (None for heating and cooling)
    pub fn get(&self, enduse: EndUse) -> Option<&EndUseAdjustment> {
        match enduse {
            EndUse::V => Some(&self.V),
            EndUse::L => Some(&self.L),
            EndUse::HW => Some(&self.HW),
            EndUse::AP => Some(&self.AP),
            EndUse::CC => Some(&self.CC),
            EndUse::H | EndUse::C => None,
        }
    }

    /// Mutable adjustment for an end use (None for heating and cooling)
    pub fn get_mut(&mut self, enduse: EndUse) -> Option<&mut EndUseAdjustment> {
        match enduse {
            EndUse::V => Some(&mut self.V),
            EndUse::L => Some(&mut self.L),
            EndUse::HW => Some(&mut self.HW),
            EndUse::AP => Some(&mut self.AP),
            EndUse::CC => Some(&mut self.CC),
            EndUse::H | EndUse::C => None,
        }
    }
}

/// Metered monthly use of one carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierUsage {
    /// Energy carrier
    pub carrier: Carrier,
    /// The carrier is used at all
    pub used: bool,
    /// Monthly consumption, in the carrier unit (kWh, m3, L)
    pub consumption: Vec<f32>,
    /// Heating is active in the month
    pub heating: Vec<bool>,
    /// Cooling is active in the month
    pub cooling: Vec<bool>,
    /// Primary energy conversion factor, MJ per carrier unit
    pub f_pe: f32,
    /// Reference energy adjustments of this carrier
    pub adjustments: Adjustments,
}

impl CarrierUsage {
    /// Used carrier with checked monthly vectors
    pub fn new(
        carrier: Carrier,
        consumption: Vec<f32>,
        heating: Vec<bool>,
        cooling: Vec<bool>,
        f_pe: f32,
        adjustments: Adjustments,
    ) -> Result<Self> {
        if consumption.len() != NUM_MONTHS
            || heating.len() != NUM_MONTHS
            || cooling.len() != NUM_MONTHS
        {
            return Err(EpbillsError::WrongInput(format!(
                "{} monthly vectors must have {} values (consumption: {}, heating: {}, cooling: {})",
                carrier,
                NUM_MONTHS,
                consumption.len(),
                heating.len(),
                cooling.len()
            )));
        }
        if let Some(v) = consumption.iter().find(|v| **v < 0.0 || !v.is_finite()) {
            return Err(EpbillsError::WrongInput(format!(
                "{} consumption must be non negative and found {}",
                carrier, v
            )));
        }
        if f_pe < 0.0 || !f_pe.is_finite() {
            return Err(EpbillsError::WrongInput(format!(
                "{} conversion factor must be non negative and is {}",
                carrier, f_pe
            )));
        }
        Ok(Self {
            carrier,
            used: true,
            consumption,
            heating,
            cooling,
            f_pe,
            adjustments,
        })
    }

    /// Carrier not in use
    pub fn unused(carrier: Carrier) -> Self {
        Self {
            carrier,
            used: false,
            consumption: vec![0.0; NUM_MONTHS],
            heating: vec![false; NUM_MONTHS],
            cooling: vec![false; NUM_MONTHS],
            f_pe: 0.0,
            adjustments: Adjustments::default(),
        }
    }
}
