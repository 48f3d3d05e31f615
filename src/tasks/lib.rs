/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The `lina` command-line program.
//!
//! Everything here is glue: reading matrices and vectors from YAML,
//! calling into `lina_linalg`/`lina_geometry`, and printing JSON.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;

#[cfg(test)]
#[macro_use] extern crate pretty_assertions;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod entry_points;

mod cmd;
mod config;
mod ui;
mod util;
