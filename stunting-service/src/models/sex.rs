use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sex of the child, as accepted by the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    LakiLaki,
    Perempuan,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::LakiLaki, Sex::Perempuan];

    /// Category string the encoder was fit on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::LakiLaki => "laki-laki",
            Sex::Perempuan => "perempuan",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Jenis kelamin harus 'laki-laki' atau 'perempuan'")]
pub struct ParseSexError;

impl FromStr for Sex {
    type Err = ParseSexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "laki-laki" => Ok(Sex::LakiLaki),
            "perempuan" => Ok(Sex::Perempuan),
            _ => Err(ParseSexError),
        }
    }
}
