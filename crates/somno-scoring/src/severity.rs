use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// AHI severity band. Boundaries are half-open on the lower edge: exactly
/// 5.0 is Mild, 15.0 is Moderate, 30.0 is Severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AhiSeverity {
    Unknown,
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl AhiSeverity {
    pub fn classify(ahi: Option<f64>) -> Self {
        match ahi {
            None => AhiSeverity::Unknown,
            Some(a) if a < 5.0 => AhiSeverity::Normal,
            Some(a) if a < 15.0 => AhiSeverity::Mild,
            Some(a) if a < 30.0 => AhiSeverity::Moderate,
            Some(_) => AhiSeverity::Severe,
        }
    }
}

/// Epworth total-score band: <10 Normal, 10–11 Mild, 12–15 Moderate,
/// 16+ Severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EpworthSeverity {
    Unknown,
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl EpworthSeverity {
    pub fn classify(total: Option<u8>) -> Self {
        match total {
            None => EpworthSeverity::Unknown,
            Some(t) if t < 10 => EpworthSeverity::Normal,
            Some(t) if t < 12 => EpworthSeverity::Mild,
            Some(t) if t < 16 => EpworthSeverity::Moderate,
            Some(_) => EpworthSeverity::Severe,
        }
    }
}
