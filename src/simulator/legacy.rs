//! Legacy marital status codes.

use serde::{Deserialize, Serialize};

use crate::models::MaritalStatus;

/// Marital status codes used by older simulator front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyMaritalStatus {
    /// `CELIBATAIRE`
    Celibataire,
    /// `PACSE`
    Pacse,
    /// `MARIE`
    Marie,
    /// `DIVORCE`
    Divorce,
    /// `VEUF`
    Veuf,
}

impl From<LegacyMaritalStatus> for MaritalStatus {
    fn from(legacy: LegacyMaritalStatus) -> Self {
        match legacy {
            LegacyMaritalStatus::Celibataire => MaritalStatus::Single,
            LegacyMaritalStatus::Pacse => MaritalStatus::CivilUnion,
            LegacyMaritalStatus::Marie => MaritalStatus::Married,
            LegacyMaritalStatus::Divorce => MaritalStatus::Divorced,
            LegacyMaritalStatus::Veuf => MaritalStatus::Widowed,
        }
    }
}
