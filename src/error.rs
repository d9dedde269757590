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
Errores
=======

Error type of the library and `Result` alias.
*/

use std::fmt;

/// Library errors
#[derive(Debug)]
pub enum EpbillsError {
    /// Generic parse error (line or value that couldn't be interpreted)
    ParseError(String),
    /// Unknown energy carrier
    CarrierUnknown(String),
    /// Unknown end use
    EndUseUnknown(String),
    /// Unknown reference term basis
    BasisUnknown(String),
    /// Gas type not in the calorific value table
    GasTypeUnknown(String),
    /// Value for the "use specified calorific value" flag is not recognized
    SpecifiedFlagUnknown(String),
    /// No reference table is available for the climate region
    RegionUnknown(u8),
    /// Input table lacks a required column
    ColumnMissing(String),
    /// Input data out of its valid domain
    WrongInput(String),
    /// Error reading or writing delimited files
    Csv(csv::Error),
    /// Input / output error
    Io(std::io::Error),
}

impl fmt::Display for EpbillsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EpbillsError::*;
        match self {
            ParseError(s) => write!(f, "Could not parse \"{}\"", s),
            CarrierUnknown(s) => write!(f, "Unknown energy carrier \"{}\"", s),
            EndUseUnknown(s) => write!(f, "Unknown end use \"{}\"", s),
            BasisUnknown(s) => write!(f, "Unknown reference basis \"{}\"", s),
            GasTypeUnknown(s) => write!(f, "Unknown gas type \"{}\"", s),
            SpecifiedFlagUnknown(s) => write!(
                f,
                "Unknown value \"{}\" for the specified calorific value flag",
                s
            ),
            RegionUnknown(region) => write!(f, "No reference table for region {}", region),
            ColumnMissing(s) => write!(f, "Missing column \"{}\" in input data", s),
            WrongInput(s) => write!(f, "Wrong input data: {}", s),
            Csv(e) => write!(f, "Delimited file error: {}", e),
            Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for EpbillsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EpbillsError::Csv(e) => Some(e),
            EpbillsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::num::ParseFloatError> for EpbillsError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EpbillsError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for EpbillsError {
    fn from(err: std::num::ParseIntError) -> Self {
        EpbillsError::ParseError(err.to_string())
    }
}

impl From<csv::Error> for EpbillsError {
    fn from(err: csv::Error) -> Self {
        EpbillsError::Csv(err)
    }
}

impl From<std::io::Error> for EpbillsError {
    fn from(err: std::io::Error) -> Self {
        EpbillsError::Io(err)
    }
}

/// Library result type
pub type Result<T> = std::result::Result<T, EpbillsError>;
