use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Input of a mean computation.
///
/// Either the built-in sample (see [`Input::sample`]) or a TOML file
/// loaded with [`Input::from_file`].
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    /// Sequence of integers to average.
    pub values: Vec<i32>,
    /// Number of leading values to average (defaults to all of them).
    #[serde(default)]
    pub count: Option<usize>,
}

impl Input {
    /// The sequence averaged when no input file is given.
    pub fn sample() -> Self {
        Self {
            values: vec![10, 2, 3, 4, 5, 6, 7, 8, 9],
            count: None,
        }
    }

    /// Load an [`Input`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the input values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate an [`Input`] from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let input: Input = toml::from_str(contents).context("failed to deserialize input")?;

        input.validate().context("failed to validate input")?;

        Ok(input)
    }

    /// Number of leading values to average.
    pub fn count(&self) -> usize {
        self.count.unwrap_or(self.values.len())
    }

    // The count is checked by the calculator itself.
    fn validate(&self) -> Result<()> {
        check_num(self.values.len(), 1..=1_000_000).context("invalid number of values")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
