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

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{value_t, App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;

use epbills::output::AsPlain;
use epbills::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn createfile(path: &Path) -> File {
    match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "ERROR: no se ha podido escribir en \"{}\": {}",
                path.display(),
                err
            );
            exit(exitcode::CANTCREAT);
        }
    }
}

/// Región climática por defecto: argumentos de CLI > valor predefinido (REGION_DEFAULT = 6)
fn get_region(matches: &clap::ArgMatches<'_>) -> u8 {
    let region = value_t!(matches, "region", u8).unwrap_or_else(|_| {
        eprintln!("ERROR: la región climática indicada no es un valor numérico válido");
        exit(exitcode::USAGE);
    });
    if !(1..=8).contains(&region) {
        eprintln!(
            "ERROR: la región climática debe estar entre 1 y 8 y vale {}",
            region
        );
        exit(exitcode::USAGE);
    }
    region
}

/// Modelo de referencia: tabla predefinida + tablas de usuario
fn get_reference_model(matches: &clap::ArgMatches<'_>, verbosity: u64) -> TabulatedReference {
    let mut model = TabulatedReference::with_defaults().unwrap_or_else(|error| {
        eprintln!("ERROR: tabla de referencia predefinida incorrecta ({})", error);
        exit(exitcode::SOFTWARE);
    });
    if let Some(archivos) = matches.values_of("tabla") {
        for archivo in archivos {
            let path = Path::new(archivo);
            let tablestring = readfile(path).unwrap_or_else(|error| {
                eprintln!(
                    "ERROR: No se ha podido leer la tabla de referencia \"{}\" -> {}",
                    path.display(),
                    error
                );
                exit(exitcode::IOERR);
            });
            let region = tablestring
                .parse::<ReferenceTable>()
                .and_then(|table| model.insert(table))
                .unwrap_or_else(|error| {
                    eprintln!(
                        "ERROR: Formato incorrecto de la tabla de referencia \"{}\" -> {}",
                        path.display(),
                        error
                    );
                    exit(exitcode::DATAERR);
                });
            if verbosity > 0 {
                println!(
                    "Tabla de referencia (región {}): \"{}\"",
                    region,
                    path.display()
                );
            }
        }
    }
    model
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("EpBills")
        .bin_name("epbills")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2023 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Licencia: Publicado bajo licencia MIT.

")
        .about("EpBills - Energía primaria mensual por vector energético y uso final a partir de facturas.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_entrada")
            .short("i")
            .long("input")
            .value_name("ARCHIVO_ENTRADA")
            .help("Archivo de datos de los hogares (CSV con cabecera)")
            .takes_value(true)
            .required_unless("showlicense")
            .display_order(1))
        .arg(Arg::with_name("archivo_salida")
            .short("o")
            .long("output")
            .value_name("ARCHIVO_SALIDA")
            .help("Archivo de salida de resultados (CSV)")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("region")
            .short("r")
            .long("region")
            .value_name("REGION")
            .default_value("6")
            .help("Región climática de los registros sin columna region (1 a 8)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("tabla")
            .short("t")
            .long("tabla")
            .value_name("TABLA_REFERENCIA")
            .help("Archivo de tabla de energía de referencia de una región.\nPuede indicarse varias veces")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .display_order(4))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2023 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    logging::init(verbosity);

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Región climática y modelo de referencia -----------------------------------------------------
    let region = get_region(&matches);
    println!("Región climática (por defecto): {}", region);

    let model = get_reference_model(&matches, verbosity);
    if verbosity > 0 {
        println!("Regiones con tabla de referencia: {:?}", model.regions());
    }

    // Hogares -------------------------------------------------------------------------------------
    let households = match matches.value_of("archivo_entrada") {
        Some(archivo) => {
            let path = Path::new(archivo);
            let file = File::open(path).unwrap_or_else(|error| {
                eprintln!(
                    "ERROR: No se ha podido leer el archivo de datos \"{}\" -> {}",
                    path.display(),
                    error
                );
                exit(exitcode::IOERR);
            });
            println!("Datos de hogares: \"{}\"", path.display());
            read_households(file, region).unwrap_or_else(|error| {
                eprintln!(
                    "ERROR: Formato incorrecto del archivo de datos \"{}\" -> {}",
                    path.display(),
                    error
                );
                exit(exitcode::DATAERR);
            })
        }
        None => {
            eprintln!("ERROR: Sin archivo de datos de hogares");
            exit(exitcode::USAGE);
        }
    };
    println!("Número de hogares: {}", households.len());

    // Cálculo del balance -------------------------------------------------------------------------
    let balances: Vec<Balance> = households
        .iter()
        .enumerate()
        .map(|(i, household)| {
            let region = household.profile.region;
            if model.is_embedded(region) {
                tracing::warn!(
                    household = i + 1,
                    region,
                    "Reference energy from the embedded table, illustrative values (use -t)"
                );
            }
            energy_balance(household, &model).unwrap_or_else(|error| {
                eprintln!(
                    "ERROR: No se ha podido calcular el balance del hogar {} -> {}",
                    i + 1,
                    error
                );
                exit(exitcode::DATAERR);
            })
        })
        .collect();

    for (i, balance) in balances.iter().enumerate() {
        println!("\n** Hogar {}\n", i + 1);
        println!("{}", balance.to_plain());
    }

    // Salida de resultados ------------------------------------------------------------------------
    if let Some(archivo) = matches.value_of("archivo_salida") {
        let path = Path::new(archivo);
        if let Err(error) = write_balances(createfile(path), &balances) {
            eprintln!(
                "ERROR: No se ha podido escribir el archivo de resultados \"{}\" -> {}",
                path.display(),
                error
            );
            exit(exitcode::IOERR);
        }
        if verbosity > 0 {
            println!("Guardado archivo de resultados: {}", path.display());
        }
    }

    if let Some(archivo) = matches.value_of("archivo_salida_json") {
        let path = Path::new(archivo);
        if let Err(error) = write_json(createfile(path), &balances) {
            eprintln!(
                "ERROR: No se ha podido escribir el archivo JSON \"{}\" -> {}",
                path.display(),
                error
            );
            exit(exitcode::IOERR);
        }
        if verbosity > 0 {
            println!("Guardado archivo de resultados en formato JSON: {}", path.display());
        }
    }
}
