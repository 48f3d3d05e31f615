/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The subcommands of `lina`.
//!
//! Each one reads its operands, calls a single library operation, and
//! returns the result as JSON.  Printing is left to the caller.

use crate::FailResult;
use crate::config::Settings;
use crate::util::{ArgMatchesExt, read_yaml};

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use lina_geometry::Simplex;
use lina_linalg::{Matrix, Tolerance, Vector};
use serde_json::Value;

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("lina")
        .about("Dense matrix and vector operations on YAML/JSON files.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .args(&[
            Arg::with_name("eps")
                .long("eps").takes_value(true).value_name("EPS")
                .help("Absolute tolerance for float comparisons. Overrides --config. [default: 1e-6]"),
            Arg::with_name("config")
                .long("config").short("c").takes_value(true).value_name("FILE")
                .help("YAML settings file, e.g. '{tolerance: {eps: 1e-9}}'."),
            Arg::with_name("verbose")
                .long("verbose").short("v").multiple(true)
                .help("Log more. May be repeated."),
            Arg::with_name("log")
                .long("log").takes_value(true).value_name("FILE")
                .help("Also write the log to this file."),
        ])
        .subcommands(vec![
            SubCommand::with_name("det")
                .about("Determinant of a square matrix.")
                .arg(matrix_arg("MATRIX")),
            SubCommand::with_name("add")
                .about("Sum of two matrices of equal shape.")
                .args(&[matrix_arg("A"), matrix_arg("B")]),
            SubCommand::with_name("mul")
                .about("Product of a matrix with a matrix or (with --vector) a vector.")
                .args(&[
                    matrix_arg("A"),
                    matrix_arg("B"),
                    Arg::with_name("vector")
                        .long("vector")
                        .help("Read B as a vector instead of a matrix."),
                ]),
            SubCommand::with_name("submatrix")
                .about("The matrix with one row and one column deleted.")
                .args(&[
                    matrix_arg("MATRIX"),
                    Arg::with_name("row").long("row").takes_value(true).value_name("R").required(true),
                    Arg::with_name("col").long("col").takes_value(true).value_name("C").required(true),
                ]),
            SubCommand::with_name("normalize")
                .about("Rescale a vector to unit length. Null vectors are left alone.")
                .arg(Arg::with_name("VECTOR").required(true).help("A list of numbers.")),
            SubCommand::with_name("centroid")
                .about("Centroid of the standard simplex in N dimensions.")
                .arg(Arg::with_name("dim").long("dim").takes_value(true).value_name("N").required(true)),
        ])
}

fn matrix_arg<'a, 'b>(name: &'a str) -> Arg<'a, 'b> {
    Arg::with_name(name).required(true).help("A list of rows.")
}

/// Resolve the tolerance from `--config` and `--eps`.
pub fn settings(m: &ArgMatches<'_>) -> FailResult<Settings> {
    let mut settings = match m.value_of("config") {
        Some(path) => Settings::from_path(path)?,
        None => Settings::default(),
    };
    if m.is_present("eps") {
        settings.override_eps(m.parse_value_of("eps")?)?;
    }
    debug!("Using tolerance eps = {:e}.", settings.tolerance.eps());
    Ok(settings)
}

pub fn run(m: &ArgMatches<'_>) -> FailResult<Value> {
    let tol = settings(m)?.tolerance;
    match m.subcommand() {
        ("det", Some(sub)) => det(sub, tol),
        ("add", Some(sub)) => add(sub),
        ("mul", Some(sub)) => mul(sub),
        ("submatrix", Some(sub)) => submatrix(sub),
        ("normalize", Some(sub)) => normalize(sub, tol),
        ("centroid", Some(sub)) => centroid(sub),
        (name, _) => bail!("unknown subcommand {:?}", name),
    }
}

fn read_matrix(m: &ArgMatches<'_>, name: &str) -> FailResult<Matrix> {
    let path = m.expect_value_of(name);
    let matrix: Matrix = read_yaml(path)?;
    debug!("Read {}x{} matrix from '{}'.", matrix.height(), matrix.width(), path);
    Ok(matrix)
}

fn read_vector(m: &ArgMatches<'_>, name: &str) -> FailResult<Vector> {
    let path = m.expect_value_of(name);
    let vector: Vector = read_yaml(path)?;
    debug!("Read vector of dimension {} from '{}'.", vector.dim(), path);
    Ok(vector)
}

fn det(m: &ArgMatches<'_>, tol: Tolerance) -> FailResult<Value> {
    let matrix = read_matrix(m, "MATRIX")?;
    let determinant = matrix.determinant_with(tol)?;
    Ok(json!({ "determinant": determinant }))
}

fn add(m: &ArgMatches<'_>) -> FailResult<Value> {
    let a = read_matrix(m, "A")?;
    let b = read_matrix(m, "B")?;
    Ok(serde_json::to_value(a.checked_add(&b)?)?)
}

fn mul(m: &ArgMatches<'_>) -> FailResult<Value> {
    let a = read_matrix(m, "A")?;
    if m.is_present("vector") {
        let v = read_vector(m, "B")?;
        Ok(serde_json::to_value(a.checked_mul_vector(&v)?)?)
    } else {
        let b = read_matrix(m, "B")?;
        Ok(serde_json::to_value(a.checked_mul(&b)?)?)
    }
}

fn submatrix(m: &ArgMatches<'_>) -> FailResult<Value> {
    let matrix = read_matrix(m, "MATRIX")?;
    let row: usize = m.parse_value_of("row")?;
    let col: usize = m.parse_value_of("col")?;
    Ok(serde_json::to_value(matrix.submatrix(row, col)?)?)
}

fn normalize(m: &ArgMatches<'_>, tol: Tolerance) -> FailResult<Value> {
    let mut vector = read_vector(m, "VECTOR")?;
    let length = vector.length_with(tol);
    if vector.is_null_with(tol) {
        warn!("Vector is null within tolerance; leaving it unchanged.");
    }
    vector.normalize_with(tol);
    Ok(json!({ "vector": vector, "length": length }))
}

fn centroid(m: &ArgMatches<'_>) -> FailResult<Value> {
    let dim: usize = m.parse_value_of("dim")?;
    let simplex = Simplex::new(dim)?;
    let centroid = simplex.centroid()?;
    Ok(json!({ "dim": simplex.dim(), "centroid": centroid }))
}
