/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use failure::ResultExt;
use lina_linalg::Tolerance;
use serde::{Serialize, Deserialize};
use std::io::Read;
use std::path::Path;

/// Settings read from `--config`.
///
/// Every field has a default, so an empty document is valid.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub tolerance: Tolerance,
}

impl Settings {
    pub fn from_reader(mut r: impl Read) -> FailResult<Settings> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;

        // an empty document means "all defaults"
        let value = match text.trim().is_empty() {
            true => serde_yaml::Value::Mapping(serde_yaml::Mapping::new()),
            false => serde_yaml::from_str(&text)?,
        };
        let settings: Settings = serde_ignored::deserialize(
            value,
            |path| warn!("Unused config item (possible typo?): {}", path),
        )?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> FailResult<Settings> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|_| format!("could not open config file '{}'", path.display()))?;
        Ok(Settings::from_reader(file)
            .with_context(|_| format!("while reading config file '{}'", path.display()))?)
    }

    /// Apply `--eps`, which takes precedence over the file.
    pub fn override_eps(&mut self, eps: f64) -> FailResult<()> {
        self.tolerance = match Tolerance::checked_new(eps) {
            Some(tol) => tol,
            None => bail!("tolerance must be non-negative (got {})", eps),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Settings::from_reader("".as_bytes()).unwrap(), Settings::default());
        assert_eq!(Settings::from_reader("{}".as_bytes()).unwrap(), Settings::default());
        assert_eq!(Settings::from_reader("tolerance: {}".as_bytes()).unwrap(), Settings::default());
    }

    #[test]
    fn reads_eps() {
        let settings = Settings::from_reader("tolerance:\n  eps: 1.0e-3\n".as_bytes()).unwrap();
        assert_eq!(settings.tolerance, Tolerance::new(1e-3));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings = Settings::from_reader("tolerence: {eps: 0.5}".as_bytes()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn negative_eps_is_rejected() {
        assert!(Settings::from_reader("tolerance: {eps: -1.0}".as_bytes()).is_err());

        let mut settings = Settings::default();
        assert!(settings.override_eps(-1e-3).is_err());
        assert!(settings.override_eps(std::f64::NAN).is_err());
        assert_eq!(settings, Settings::default());

        settings.override_eps(0.25).unwrap();
        assert_eq!(settings.tolerance.eps(), 0.25);
    }
}
