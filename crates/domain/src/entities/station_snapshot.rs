//! Station snapshot entity

use serde::{Deserialize, Serialize};

use super::{LineGroup, TrainArrival};

/// The full arrivals payload for one station at one moment
///
/// Each successful fetch produces a new snapshot that replaces the previous
/// one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSnapshot {
    /// Station display name
    pub station: String,
    /// Capture time in machine-readable form
    pub timestamp: String,
    /// Capture time in human-readable form
    pub formatted_time: String,
    /// Line groups keyed by line key, in feed order
    #[serde(with = "ordered_lines")]
    pub lines: Vec<(String, LineGroup)>,
    /// Every arrival across all lines
    pub all_trains: Vec<TrainArrival>,
}

impl StationSnapshot {
    /// Look up a line group by its key
    #[must_use]
    pub fn line(&self, key: &str) -> Option<&LineGroup> {
        self.lines
            .iter()
            .find(|(line_key, _)| line_key == key)
            .map(|(_, group)| group)
    }

    /// Line keys in display order
    pub fn line_keys(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(key, _)| key.as_str())
    }
}

/// Serde adapter that keeps the JSON object order of `lines`
mod ordered_lines {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use crate::entities::LineGroup;

    pub fn serialize<S>(lines: &[(String, LineGroup)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(lines.iter().map(|(key, group)| (key, group)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, LineGroup)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LinesVisitor)
    }

    struct LinesVisitor;

    impl<'de> Visitor<'de> for LinesVisitor {
        type Value = Vec<(String, LineGroup)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of line key to line group")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut lines: Vec<(String, LineGroup)> =
                Vec::with_capacity(access.size_hint().unwrap_or(0));

            while let Some((key, group)) = access.next_entry::<String, LineGroup>()? {
                // Duplicate keys keep their first position, last value wins
                if let Some(slot) = lines.iter_mut().find(|(existing, _)| *existing == key) {
                    slot.1 = group;
                } else {
                    lines.push((key, group));
                }
            }

            Ok(lines)
        }
    }
}
