//! Positional message parameters decoded from a notification record.

use std::collections::BTreeMap;

use serde_json::Value;

use herald_core::error::{AppError, ErrorKind};
use herald_core::types::MessageParam;

/// Largest slot accepted when decoding stored parameters.
///
/// Normalization materializes every slot up to the largest one, so this
/// also bounds the size of a normalized set.
pub const MAX_SLOT: u32 = 1024;

/// Message parameters keyed by 1-based slot.
///
/// Slots are kept in a `BTreeMap<u32, _>`, so iteration is always in
/// ascending numeric order (slot 2 before slot 10).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageParameters {
    slots: BTreeMap<u32, MessageParam>,
}

impl MessageParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the stored `[[slot, value], ...]` payload.
    ///
    /// An empty payload is an empty set. Any element that is not a
    /// two-element array with an integer slot in `0..=MAX_SLOT` and a scalar
    /// value fails the whole decode.
    pub fn decode(payload: &str) -> Result<Self, AppError> {
        if payload.trim().is_empty() {
            return Ok(Self::new());
        }

        let value: Value = serde_json::from_str(payload).map_err(|e| {
            AppError::with_source(
                ErrorKind::DataFormat,
                format!("Message parameters are not valid JSON: {e}"),
                e,
            )
        })?;

        let Value::Array(entries) = value else {
            return Err(AppError::data_format(
                "Message parameters must be a list of [slot, value] pairs",
            ));
        };

        let mut params = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let [slot, value] = match entry {
                Value::Array(pair) => <[Value; 2]>::try_from(pair).map_err(|pair| {
                    AppError::data_format(format!(
                        "Message parameter #{index} has {} elements, expected [slot, value]",
                        pair.len()
                    ))
                })?,
                other => {
                    return Err(AppError::data_format(format!(
                        "Message parameter #{index} is not a [slot, value] pair: {other}"
                    )));
                }
            };

            let slot = parse_slot(&slot).ok_or_else(|| {
                AppError::data_format(format!(
                    "Message parameter #{index} has an invalid slot: {slot}"
                ))
            })?;
            let param = parse_value(value).map_err(|bad| {
                AppError::data_format(format!(
                    "Message parameter #{index} has a non-scalar value: {bad}"
                ))
            })?;

            params.insert(slot, param);
        }

        Ok(params)
    }

    /// Set the value of a slot, replacing any previous value.
    pub fn insert(&mut self, slot: u32, param: MessageParam) {
        self.slots.insert(slot, param);
    }

    /// Value stored at `slot`.
    pub fn get(&self, slot: u32) -> Option<&MessageParam> {
        self.slots.get(&slot)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Smallest slot key.
    pub fn min_slot(&self) -> Option<u32> {
        self.slots.keys().next().copied()
    }

    /// Largest slot key.
    pub fn max_slot(&self) -> Option<u32> {
        self.slots.keys().next_back().copied()
    }

    /// Slot keys in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.keys().copied()
    }

    /// `(slot, value)` pairs in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &MessageParam)> {
        self.slots.iter().map(|(slot, param)| (*slot, param))
    }

    /// Values in ascending slot order, ready for positional rendering.
    pub fn ordered_values(&self) -> Vec<MessageParam> {
        self.slots.values().cloned().collect()
    }

    /// Renumber legacy parameter sets whose first slot is not 1.
    ///
    /// If the set is non-empty and its smallest slot is not exactly 1, the
    /// result holds every slot from 1 through the current largest slot:
    /// existing values stay at their slots and gaps get
    /// [`MessageParam::Missing`]. Slots below 1 are not part of the result.
    /// A set that already starts at 1 is returned unchanged, interior gaps
    /// included.
    pub fn normalize_keys(self) -> Self {
        let (Some(min), Some(max)) = (self.min_slot(), self.max_slot()) else {
            return self;
        };
        if min == 1 {
            return self;
        }

        let mut slots = self.slots;
        let normalized = (1..=max)
            .map(|slot| (slot, slots.remove(&slot).unwrap_or(MessageParam::Missing)))
            .collect();

        Self { slots: normalized }
    }
}

impl FromIterator<(u32, MessageParam)> for MessageParameters {
    fn from_iter<I: IntoIterator<Item = (u32, MessageParam)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

fn parse_slot(slot: &Value) -> Option<u32> {
    let slot = match slot {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok()
        }
        _ => None,
    };
    slot.filter(|slot| *slot <= MAX_SLOT)
}

fn parse_value(value: Value) -> Result<MessageParam, Value> {
    match value {
        Value::String(s) => Ok(MessageParam::Text(s)),
        Value::Number(n) => Ok(MessageParam::Text(n.to_string())),
        Value::Bool(b) => Ok(MessageParam::Text(b.to_string())),
        Value::Null => Ok(MessageParam::Missing),
        other => Err(other),
    }
}
