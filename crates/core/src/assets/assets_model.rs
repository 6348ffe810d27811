use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A tracked cryptocurrency asset.
///
/// Identified by a globally unique symbol; the integer id is a storage
/// surrogate. Assets are created on first observation from any source and
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for resolving or creating an asset by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    pub symbol: String,
    pub name: String,
}

impl NewAsset {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.symbol.len() > 20 {
            return Err(ValidationError::InvalidInput(format!(
                "symbol '{}' exceeds 20 characters",
                self.symbol
            ))
            .into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_symbol() {
        assert!(NewAsset::new("", "Bitcoin").validate().is_err());
        assert!(NewAsset::new("   ", "Bitcoin").validate().is_err());
    }

    #[test]
    fn validate_rejects_oversized_symbol() {
        let asset = NewAsset::new("X".repeat(21), "Too Long");
        assert!(asset.validate().is_err());
    }

    #[test]
    fn validate_accepts_regular_asset() {
        assert!(NewAsset::new("BTC", "Bitcoin").validate().is_ok());
    }
}
