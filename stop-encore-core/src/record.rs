/// Shown when a game has no `desc` field.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Shown when a game has no `region` field.
pub const DEFAULT_REGION: &str = "Unknown";

/// One `<game>` entry from a gamelist.
///
/// Fields are kept in the order they were authored so that an exported
/// gamelist mirrors the source element. The `path` field doubles as the
/// record's identity within a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    fields: Vec<(String, String)>,
}

impl GameRecord {
    /// Build a record from `(tag, text)` pairs.
    ///
    /// Returns `None` when `path` or `name` is missing.
    pub fn from_fields(fields: Vec<(String, String)>) -> Option<Self> {
        let has = |key: &str| fields.iter().any(|(k, _)| k == key);
        if has("path") && has("name") {
            Some(Self { fields })
        } else {
            None
        }
    }

    /// Convenience constructor for a record with only the required fields.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fields: vec![
                ("path".to_string(), path.into()),
                ("name".to_string(), name.into()),
            ],
        }
    }

    /// Append or replace a field, returning the updated record.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// Look up a field by tag name. The first occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in authored order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Relative path of the game's primary asset. Also its identity.
    pub fn path(&self) -> &str {
        self.get("path").unwrap_or_default()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.get("name").unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.get("desc").unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn region(&self) -> &str {
        self.get("region").unwrap_or(DEFAULT_REGION)
    }

    /// Relative path of the preview image, if one is set and non-empty.
    pub fn image(&self) -> Option<&str> {
        self.get("image").filter(|s| !s.is_empty())
    }
}
