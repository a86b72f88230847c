use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SessionError;

/// Random HTTP session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An HTTP session with named, JSON-encoded attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl Session {
    pub fn new(id: SessionId, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            last_accessed_at: now,
            expires_at,
            attributes: Map::new(),
        }
    }

    /// Reads a typed attribute. Returns `Ok(None)` when it is not set.
    pub fn attribute<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, SessionError> {
        match self.attributes.get(name) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| SessionError::Attribute {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Stores a typed attribute, replacing any previous value.
    pub fn set_attribute<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), SessionError> {
        let value = serde_json::to_value(value).map_err(|e| SessionError::Attribute {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    /// Removes an attribute, returning whether it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}
