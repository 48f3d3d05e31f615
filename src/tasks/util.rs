/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use failure::ResultExt;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::str::FromStr;

pub(crate) trait ArgMatchesExt {
    /// For when the value ought to exist because it was `required(true)`
    /// (and therefore clap would have already bailed out if it were missing).
    fn expect_value_of(&self, s: &str) -> &str;

    /// Parse a required value, naming the argument on failure.
    fn parse_value_of<T>(&self, s: &str) -> FailResult<T>
    where
        T: FromStr,
        T::Err: failure::Fail,
    {
        let text = self.expect_value_of(s);
        Ok(text.parse::<T>().with_context(|_| format!("invalid value for {}: {:?}", s, text))?)
    }
}

impl<'a> ArgMatchesExt for clap::ArgMatches<'a> {
    fn expect_value_of(&self, s: &str) -> &str
    { self.value_of(s).unwrap_or_else(|| panic!("BUG! ({} was required)", s)) }
}

/// Read a YAML (or JSON) document into `T`, naming the file on failure.
pub(crate) fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> FailResult<T> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|_| format!("could not open '{}'", path.display()))?;
    let value = serde_yaml::from_reader(file)
        .with_context(|_| format!("could not parse '{}'", path.display()))?;
    Ok(value)
}
