// ── Persisted state slot ──
//
// Holds the attribute object the host persists for one resource instance.
// An empty slot means the resource is not (or no longer) tracked.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::decode::{decode, encode};
use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceState {
    attributes: Option<Map<String, Value>>,
}

impl ResourceState {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot holding previously persisted attributes. `null` is empty.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self {
                attributes: Some(map),
            }),
            other => Err(CoreError::type_assertion(format!(
                "state must be an object, got {other}"
            ))),
        }
    }

    pub fn get(&self) -> Option<&Map<String, Value>> {
        self.attributes.as_ref()
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.as_ref().and_then(|m| m.get(name))
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_none()
    }

    /// Replace the whole slot with an encoded model.
    pub fn set<T: Serialize>(&mut self, model: &T) -> Result<(), CoreError> {
        self.attributes = Some(encode(model)?);
        Ok(())
    }

    /// Write one attribute, creating the slot if needed.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(name.to_owned(), value.into());
    }

    /// Stop tracking the resource.
    pub fn remove(&mut self) {
        self.attributes = None;
    }

    /// Decode the slot; `MissingState` when empty.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        let map = self.attributes.as_ref().ok_or(CoreError::MissingState)?;
        decode(&Value::Object(map.clone()))
    }

    pub fn to_value(&self) -> Value {
        self.attributes
            .as_ref()
            .map_or(Value::Null, |m| Value::Object(m.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn set_attribute_creates_slot() {
        let mut state = ResourceState::new();
        assert!(state.is_empty());
        state.set_attribute("zone_id", "z1");
        assert_eq!(state.to_value(), json!({ "zone_id": "z1" }));
    }

    #[test]
    fn remove_empties_slot() {
        let mut state = ResourceState::from_value(json!({ "id": "a,b" })).unwrap();
        state.remove();
        assert!(state.is_empty());
        assert_eq!(state.to_value(), Value::Null);
        assert_eq!(
            state.decode::<Value>().unwrap_err().kind(),
            ErrorKind::MissingState
        );
    }

    #[test]
    fn non_object_state_is_rejected() {
        let err = ResourceState::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeAssertionFailed);
    }
}
