use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record kinds cached per domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    A,
    CNAME,
    MX,
    NS,
    PTR,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::TXT => "TXT",
        }
    }

    /// Key used for this kind in the aggregate result.
    ///
    /// These strings are a stable contract for callers rendering
    /// [`AllRecords`](super::AllRecords).
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::A => "A records",
            RecordType::CNAME => "CNAME records",
            RecordType::MX => "MX records",
            RecordType::NS => "NS records",
            RecordType::PTR => "PTR records",
            RecordType::TXT => "TXT records",
        }
    }

    /// All kinds, in the order the aggregate accessor resolves them.
    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::A,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::NS,
            RecordType::PTR,
            RecordType::TXT,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "PTR" => Ok(RecordType::PTR),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}
