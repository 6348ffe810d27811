use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use super::ingestion_errors::IngestError;
use crate::errors::Result;

/// One as-fetched item, carried through the pipeline as its raw payload.
///
/// The payload is archived verbatim before any field is interpreted, so a
/// malformed item still leaves an audit trail inside the aborted run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub payload: Value,
}

impl FeedItem {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

/// The normalized fields extracted from a feed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTick {
    pub symbol: String,
    pub name: String,
    pub price_usd: Decimal,
}

impl PriceTick {
    /// Extracts symbol, name and USD price from a payload.
    ///
    /// Both source shapes are understood: the CSV rows carry a flat
    /// `price_usd` column, the tickers API nests the price under
    /// `quotes.USD.price`. A missing or unparsable field is a
    /// [`IngestError::MalformedItem`].
    pub fn from_payload(payload: &Value) -> std::result::Result<Self, IngestError> {
        let symbol = required_str(payload, "symbol")?;
        let name = required_str(payload, "name")?;

        let price_value = payload
            .get("price_usd")
            .or_else(|| payload.pointer("/quotes/USD/price"))
            .ok_or_else(|| {
                IngestError::MalformedItem(format!("item '{}' has no USD price", symbol))
            })?;
        let price_usd = decimal_from_value(price_value).ok_or_else(|| {
            IngestError::MalformedItem(format!(
                "item '{}' has an unparsable USD price: {}",
                symbol, price_value
            ))
        })?;

        Ok(Self {
            symbol,
            name,
            price_usd,
        })
    }
}

fn required_str(payload: &Value, field: &str) -> std::result::Result<String, IngestError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| IngestError::MalformedItem(format!("missing required field '{}'", field)))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s.trim())
            .ok()
            .or_else(|| Decimal::from_scientific(s.trim()).ok()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(|f| Decimal::try_from(f).ok())
            }
        }
        _ => None,
    }
}

/// What one ingestion run did, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub source: String,
    pub skipped: bool,
    pub items: usize,
    pub assets_created: usize,
    pub prices_written: usize,
}

impl RunSummary {
    pub fn new(source: impl Into<String>, items: usize) -> Self {
        Self {
            source: source.into(),
            skipped: false,
            items,
            assets_created: 0,
            prices_written: 0,
        }
    }

    /// A run short-circuited by its checkpoint gate; no side effects.
    pub fn skipped(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            skipped: true,
            items: 0,
            assets_created: 0,
            prices_written: 0,
        }
    }
}

/// Per-source result of a multi-source pipeline invocation.
#[derive(Debug)]
pub struct RunOutcome {
    pub source: String,
    pub outcome: Result<RunSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn extracts_nested_api_shape() {
        let payload = json!({
            "id": "btc-bitcoin",
            "symbol": "BTC",
            "name": "Bitcoin",
            "rank": 1,
            "quotes": { "USD": { "price": 64250.5, "volume_24h": 1.2e10 } }
        });
        let tick = PriceTick::from_payload(&payload).unwrap();
        assert_eq!(tick.symbol, "BTC");
        assert_eq!(tick.name, "Bitcoin");
        assert_eq!(tick.price_usd, dec!(64250.5));
    }

    #[test]
    fn extracts_flat_csv_shape() {
        let payload = json!({ "symbol": "ETH", "name": "Ethereum", "price_usd": "3120.42" });
        let tick = PriceTick::from_payload(&payload).unwrap();
        assert_eq!(tick.price_usd, dec!(3120.42));
    }

    #[test]
    fn missing_symbol_is_malformed() {
        let payload = json!({ "name": "Bitcoin", "price_usd": "1.0" });
        assert!(matches!(
            PriceTick::from_payload(&payload),
            Err(IngestError::MalformedItem(_))
        ));
    }

    #[test]
    fn empty_symbol_is_malformed() {
        let payload = json!({ "symbol": "  ", "name": "Bitcoin", "price_usd": "1.0" });
        assert!(matches!(
            PriceTick::from_payload(&payload),
            Err(IngestError::MalformedItem(_))
        ));
    }

    #[test]
    fn missing_price_is_malformed() {
        let payload = json!({ "symbol": "BTC", "name": "Bitcoin" });
        assert!(matches!(
            PriceTick::from_payload(&payload),
            Err(IngestError::MalformedItem(_))
        ));
    }

    #[test]
    fn unparsable_price_is_malformed() {
        let payload = json!({ "symbol": "BTC", "name": "Bitcoin", "price_usd": "not-a-number" });
        assert!(matches!(
            PriceTick::from_payload(&payload),
            Err(IngestError::MalformedItem(_))
        ));
    }

    #[test]
    fn scientific_notation_price_parses() {
        let payload = json!({ "symbol": "SHIB", "name": "Shiba Inu", "price_usd": "1.8e-5" });
        let tick = PriceTick::from_payload(&payload).unwrap();
        assert_eq!(tick.price_usd, dec!(0.000018));
    }
}
