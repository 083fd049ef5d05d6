//! Dispute status enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the lifecycle state of a bidding dispute.
///
/// Wire labels are the uppercase Portuguese values used by the persisted
/// collection, including the accent in `CONCLUÍDA`.
pub enum StatusDisputa {
    #[serde(rename = "CANCELADA")]
    Cancelada,
    #[serde(rename = "FRACASSADA")]
    Fracassada,
    #[serde(rename = "DESERTA")]
    Deserta,
    #[serde(rename = "PUBLICADA")]
    Publicada,
    #[serde(rename = "SUSPENSA")]
    Suspensa,
    #[serde(rename = "CONCLUÍDA")]
    Concluida,
}

impl StatusDisputa {
    /// Every status, in declaration order. Aggregation iterates this so the
    /// histogram ordering stays stable.
    pub const ALL: [StatusDisputa; 6] = [
        StatusDisputa::Cancelada,
        StatusDisputa::Fracassada,
        StatusDisputa::Deserta,
        StatusDisputa::Publicada,
        StatusDisputa::Suspensa,
        StatusDisputa::Concluida,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusDisputa::Cancelada => "CANCELADA",
            StatusDisputa::Fracassada => "FRACASSADA",
            StatusDisputa::Deserta => "DESERTA",
            StatusDisputa::Publicada => "PUBLICADA",
            StatusDisputa::Suspensa => "SUSPENSA",
            StatusDisputa::Concluida => "CONCLUÍDA",
        }
    }
}

impl fmt::Display for StatusDisputa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusDisputa {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StatusDisputa::ALL
            .into_iter()
            .find(|status| status.label() == value)
            .ok_or(())
    }
}
