use std::fmt;
use std::str::FromStr;

/// One simulation run's identity: its target temperature and pressure.
///
/// Condition directories are named after this key (`T_313_P_1`), and the
/// scanner derives the key back from such a name. Ordering is temperature
/// first, then pressure, which is also the row order of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConditionKey {
    /// Temperature in kelvin.
    pub temperature: u32,
    /// Pressure in bar.
    pub pressure: u32,
}

impl ConditionKey {
    pub fn new(temperature: u32, pressure: u32) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// The directory name encoding this key.
    pub fn dir_name(&self) -> String {
        format!("T_{}_P_{}", self.temperature, self.pressure)
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T={} K, P={} bar", self.temperature, self.pressure)
    }
}

/// The string did not have the exact `T_<int>_P_<int>` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("directory name does not match the T_<int>_P_<int> pattern")]
pub struct ParseConditionError;

impl FromStr for ConditionKey {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("T_").ok_or(ParseConditionError)?;
        let (temperature, pressure) = rest.split_once("_P_").ok_or(ParseConditionError)?;

        Ok(Self {
            temperature: parse_digits(temperature)?,
            pressure: parse_digits(pressure)?,
        })
    }
}

// `u32::from_str` tolerates a leading `+`; the directory contract does not.
fn parse_digits(s: &str) -> Result<u32, ParseConditionError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseConditionError);
    }
    s.parse().map_err(|_| ParseConditionError)
}
