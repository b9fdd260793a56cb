use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// The games a session can be opened for. Only checkers has rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Checkers,
    Chess,
}

impl Variant {
    /// Fails for variants without a rules implementation.
    pub fn ensure_supported(self) -> Result<(), SetupError> {
        match self {
            Variant::Checkers => Ok(()),
            Variant::Chess => Err(SetupError::UnsupportedVariant(self)),
        }
    }
}
