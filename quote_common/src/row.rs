//! One security's answer to a quote request.
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::attribute::QuoteAttribute;

/// Attribute values for a single symbol, in request order.
///
/// Values are kept exactly as the provider sent them; nothing is parsed as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRow {
    entries: Vec<(QuoteAttribute, String)>,
}

impl QuoteRow {
    /// Empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `attribute`, replacing an earlier value in place.
    pub fn insert(&mut self, attribute: QuoteAttribute, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(a, _)| *a == attribute) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((attribute, value)),
        }
    }

    /// Value for `attribute`, if the provider returned one.
    pub fn get(&self, attribute: QuoteAttribute) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| v.as_str())
    }

    /// `(attribute, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (QuoteAttribute, &str)> + '_ {
        self.entries.iter().map(|(a, v)| (*a, v.as_str()))
    }

    /// Number of attributes present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the provider returned nothing for this symbol.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(QuoteAttribute, String)> for QuoteRow {
    fn from_iter<T: IntoIterator<Item = (QuoteAttribute, String)>>(iter: T) -> Self {
        let mut row = QuoteRow::new();
        for (attribute, value) in iter {
            row.insert(attribute, value);
        }
        row
    }
}

impl Serialize for QuoteRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (attribute, value) in &self.entries {
            map.serialize_entry(attribute.as_ref(), value)?;
        }
        map.end()
    }
}
