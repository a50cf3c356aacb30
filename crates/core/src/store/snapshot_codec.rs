//! Conversion between the persisted JSON document and `PortfolioSnapshot`.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{LoadError, Result};
use crate::holdings::collection::{replace_all, Record};
use crate::holdings::{CollectionKind, PortfolioSnapshot};

use super::store_traits::SnapshotRepositoryTrait;

pub fn encode_snapshot(snapshot: &PortfolioSnapshot) -> Result<Value> {
    Ok(serde_json::to_value(snapshot)?)
}

/// Decodes one collection, falling back to the seed's copy when the key is
/// missing or its value doesn't match the expected shape.
fn decode_collection<T>(object: &Map<String, Value>, kind: CollectionKind, fallback: &[T]) -> Vec<T>
where
    T: Record + DeserializeOwned,
{
    match object.get(kind.storage_key()) {
        None | Some(Value::Null) => {
            debug!("Persisted snapshot has no '{}', using seed values", kind);
            fallback.to_vec()
        }
        Some(raw) => match serde_json::from_value::<Vec<T>>(raw.clone()) {
            Ok(items) => replace_all(items),
            Err(e) => {
                warn!(
                    "Persisted '{}' is incompatible ({}), using seed values",
                    kind, e
                );
                fallback.to_vec()
            }
        },
    }
}

/// Decodes a persisted document against `seed`.
///
/// Only a document that isn't a JSON object is rejected; anything else
/// degrades per collection. Records are sanitized and deduplicated by key.
pub fn decode_snapshot(raw: &Value, seed: &PortfolioSnapshot) -> std::result::Result<PortfolioSnapshot, LoadError> {
    let object = raw.as_object().ok_or_else(|| {
        LoadError::Malformed(format!("expected a JSON object, found {}", type_name(raw)))
    })?;

    let mut snapshot = PortfolioSnapshot {
        equities: decode_collection(object, CollectionKind::Equities, &seed.equities),
        income_funds: decode_collection(object, CollectionKind::IncomeFunds, &seed.income_funds),
        intl_equities: decode_collection(object, CollectionKind::IntlEquities, &seed.intl_equities),
        fixed_income: decode_collection(object, CollectionKind::FixedIncome, &seed.fixed_income),
        real_assets: decode_collection(object, CollectionKind::RealAssets, &seed.real_assets),
        dividends: decode_collection(object, CollectionKind::Dividends, &seed.dividends),
        watchlist: decode_collection(object, CollectionKind::Watchlist, &seed.watchlist),
        allocation_targets: decode_collection(
            object,
            CollectionKind::AllocationTargets,
            &seed.allocation_targets,
        ),
        accumulation_goals: decode_collection(
            object,
            CollectionKind::AccumulationGoals,
            &seed.accumulation_goals,
        ),
        patrimonial_history: seed.patrimonial_history.clone(),
    };
    snapshot.normalize_currencies();
    Ok(snapshot)
}

/// Restores the persisted snapshot through `repository`.
pub fn load_snapshot(
    repository: &dyn SnapshotRepositoryTrait,
    seed: &PortfolioSnapshot,
) -> std::result::Result<PortfolioSnapshot, LoadError> {
    let raw = repository.get_snapshot()?.ok_or(LoadError::NotFound)?;
    decode_snapshot(&raw, seed)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
