//! Wire types shared by the upload and history endpoints.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned identifier of one uploaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryId(pub u64);

impl fmt::Display for SummaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Statistics computed by the backend for one uploaded CSV.
///
/// Averages are `None` when the backend could not compute them (e.g. zero rows) and sends
/// `null` or omits the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub id: SummaryId,
    pub uploaded_at: String,
    pub total_count: u64,
    #[serde(default)]
    pub avg_flowrate: Option<f64>,
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    #[serde(default)]
    pub type_distribution: TypeDistribution,
}

/// Equipment type label -> row count, kept in the order the backend delivered the keys.
///
/// A plain map would lose that order, and chart output must be reproducible against a fixed
/// response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDistribution {
    entries: Vec<(String, u64)>,
}

impl TypeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `label`, replacing the count in place if the label already exists.
    pub fn insert(&mut self, label: impl Into<String>, count: u64) {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((label, count)),
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for TypeDistribution {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (label, count) in iter {
            distribution.insert(label, count);
        }
        distribution
    }
}

impl Serialize for TypeDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TypeDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedCounts;

        impl<'de> Visitor<'de> for OrderedCounts {
            type Value = TypeDistribution;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of equipment type to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut distribution = TypeDistribution::new();
                while let Some((label, count)) = access.next_entry::<String, u64>()? {
                    distribution.insert(label, count);
                }
                Ok(distribution)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(TypeDistribution::new())
            }
        }

        deserializer.deserialize_any(OrderedCounts)
    }
}

/// File bytes plus the name the user picked or dropped. Contents are never inspected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl RawFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn has_csv_extension(&self) -> bool {
        self.filename.to_ascii_lowercase().ends_with(".csv")
    }
}
