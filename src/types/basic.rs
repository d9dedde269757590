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

//! Tipos básicos: vectores energéticos, usos finales, bases de referencia y opciones de poder calorífico

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::EpbillsError;

/// Number of monthly steps of every vector
pub const NUM_MONTHS: usize = 12;

/// Month labels used in output headers
pub const MONTHS: [&str; NUM_MONTHS] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

// == Energy carriers ==

/// Energy carrier.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Carrier {
    /// Electricity (kWh)
    ELECTRICITY,
    /// City gas or LPG (m3)
    GAS,
    /// Kerosene (L)
    KEROSENE,
}

impl Carrier {
    /// All carriers, in output order
    pub const ALL: [Carrier; 3] = [Carrier::ELECTRICITY, Carrier::GAS, Carrier::KEROSENE];

    /// Label used in output headers
    pub fn label(&self) -> &'static str {
        match self {
            Carrier::ELECTRICITY => "電気",
            Carrier::GAS => "ガス",
            Carrier::KEROSENE => "灯油",
        }
    }
}

impl str::FromStr for Carrier {
    type Err = EpbillsError;

    fn from_str(s: &str) -> Result<Carrier, Self::Err> {
        match s {
            "ELECTRICITY" | "電気" => Ok(Carrier::ELECTRICITY),
            "GAS" | "ガス" => Ok(Carrier::GAS),
            "KEROSENE" | "灯油" => Ok(Carrier::KEROSENE),
            _ => Err(EpbillsError::CarrierUnknown(s.into())),
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// == End uses ==

/// End use of the consumed energy
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EndUse {
    /// Heating
    H,
    /// Cooling
    C,
    /// Ventilation
    V,
    /// Lighting
    L,
    /// Hot water
    HW,
    /// Appliances
    AP,
    /// Cooking
    CC,
}

impl EndUse {
    /// All end uses, in output order
    pub const ALL: [EndUse; 7] = [
        EndUse::H,
        EndUse::C,
        EndUse::V,
        EndUse::L,
        EndUse::HW,
        EndUse::AP,
        EndUse::CC,
    ];

    /// End uses other than heating and cooling, apportioned with reference energy shares
    pub const NON_HC: [EndUse; 5] = [EndUse::V, EndUse::L, EndUse::HW, EndUse::AP, EndUse::CC];

    /// Label used in output headers
    pub fn label(&self) -> &'static str {
        match self {
            EndUse::H => "暖房",
            EndUse::C => "冷房",
            EndUse::V => "換気",
            EndUse::L => "照明",
            EndUse::HW => "給湯",
            EndUse::AP => "家電",
            EndUse::CC => "調理",
        }
    }
}

impl str::FromStr for EndUse {
    type Err = EpbillsError;

    fn from_str(s: &str) -> Result<EndUse, Self::Err> {
        match s {
            "H" | "HEATING" => Ok(EndUse::H),
            "C" | "COOLING" => Ok(EndUse::C),
            "V" | "VENTILATION" => Ok(EndUse::V),
            "L" | "LIGHTING" => Ok(EndUse::L),
            "HW" | "HOTWATER" => Ok(EndUse::HW),
            "AP" | "APPLIANCES" => Ok(EndUse::AP),
            "CC" | "COOKING" => Ok(EndUse::CC),
            _ => Err(EpbillsError::EndUseUnknown(s.into())),
        }
    }
}

impl std::fmt::Display for EndUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// == Reference table items ==

/// Item of a reference energy table
///
/// Either one of the apportioned end uses or the baseline term (OTHER) that only
/// contributes to the non heating / cooling reference total.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefUse {
    /// Ventilation
    V,
    /// Lighting
    L,
    /// Hot water
    HW,
    /// Appliances
    AP,
    /// Cooking
    CC,
    /// Baseline reference energy not tied to an end use
    OTHER,
}

impl RefUse {
    /// End use of the item, if any
    pub fn enduse(&self) -> Option<EndUse> {
        match self {
            RefUse::V => Some(EndUse::V),
            RefUse::L => Some(EndUse::L),
            RefUse::HW => Some(EndUse::HW),
            RefUse::AP => Some(EndUse::AP),
            RefUse::CC => Some(EndUse::CC),
            RefUse::OTHER => None,
        }
    }
}

impl str::FromStr for RefUse {
    type Err = EpbillsError;

    fn from_str(s: &str) -> Result<RefUse, Self::Err> {
        match s {
            "V" => Ok(RefUse::V),
            "L" => Ok(RefUse::L),
            "HW" => Ok(RefUse::HW),
            "AP" => Ok(RefUse::AP),
            "CC" => Ok(RefUse::CC),
            "OTHER" => Ok(RefUse::OTHER),
            _ => Err(EpbillsError::EndUseUnknown(s.into())),
        }
    }
}

impl std::fmt::Display for RefUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Household parameter a reference term is multiplied by
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Fixed amount per household
    BASE,
    /// Per occupant
    PER_PERSON,
    /// Per m2 of main habitable room
    PER_MAIN_AREA,
    /// Per m2 of other habitable rooms
    PER_OTHER_AREA,
    /// Per m2 of total floor area
    PER_TOTAL_AREA,
}

impl str::FromStr for Basis {
    type Err = EpbillsError;

    fn from_str(s: &str) -> Result<Basis, Self::Err> {
        match s {
            "BASE" => Ok(Basis::BASE),
            "PER_PERSON" => Ok(Basis::PER_PERSON),
            "PER_MAIN_AREA" => Ok(Basis::PER_MAIN_AREA),
            "PER_OTHER_AREA" => Ok(Basis::PER_OTHER_AREA),
            "PER_TOTAL_AREA" => Ok(Basis::PER_TOTAL_AREA),
            _ => Err(EpbillsError::BasisUnknown(s.into())),
        }
    }
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// == Calorific value options ==

/// Gas type, selects the standard calorific value
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum GasType {
    /// City gas (都市ガス)
    #[strum(to_string = "都市ガス", serialize = "CITYGAS")]
    CITYGAS,
    /// Liquefied petroleum gas (ＬＰガス)
    #[strum(to_string = "ＬＰガス", serialize = "LPG")]
    LPG,
}

/// Whether the standard calorific value is used instead of the supplied one
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum Specified {
    /// Use the standard value (使用する)
    #[strum(to_string = "使用する", serialize = "USE")]
    USE,
    /// Use the supplied value (使用しない)
    #[strum(to_string = "使用しない", serialize = "NOUSE")]
    NOUSE,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn carrier_and_enduse_roundtrip() {
        for cr in Carrier::ALL.iter() {
            assert_eq!(cr.to_string().parse::<Carrier>().unwrap(), *cr);
        }
        for eu in EndUse::ALL.iter() {
            assert_eq!(eu.to_string().parse::<EndUse>().unwrap(), *eu);
        }
        assert_eq!("灯油".parse::<Carrier>().unwrap(), Carrier::KEROSENE);
        assert!("COAL".parse::<Carrier>().is_err());
        assert!("DHW".parse::<EndUse>().is_err());
    }

    #[test]
    fn calorific_options() {
        assert_eq!("都市ガス".parse::<GasType>().unwrap(), GasType::CITYGAS);
        assert_eq!("ＬＰガス".parse::<GasType>().unwrap(), GasType::LPG);
        assert_eq!("LPG".parse::<GasType>().unwrap(), GasType::LPG);
        assert_eq!(GasType::LPG.to_string(), "ＬＰガス");
        assert!("プロパン".parse::<GasType>().is_err());

        assert_eq!("使用する".parse::<Specified>().unwrap(), Specified::USE);
        assert_eq!("使用しない".parse::<Specified>().unwrap(), Specified::NOUSE);
        assert_eq!(Specified::NOUSE.to_string(), "使用しない");
        assert!("たぶん".parse::<Specified>().is_err());
    }

    #[test]
    fn refuse_enduses() {
        assert_eq!(RefUse::OTHER.enduse(), None);
        assert_eq!(RefUse::HW.enduse(), Some(EndUse::HW));
    }
}
