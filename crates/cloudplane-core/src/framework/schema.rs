//! Attribute schemas and configuration validation.
//!
//! Each resource and data source declares its attributes with a kind and
//! optional validators. Mappers and builders rely on the kinds: `Computed`
//! attributes are only ever written from responses, `OptionalComputed`
//! ones fall back to the server value when unset.

use serde_json::Value;

use crate::error::CoreError;
use crate::identifier::SEPARATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Required,
    Optional,
    /// User-settable; the server fills it in when unset.
    OptionalComputed,
    /// Read-only.
    Computed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// String must parse as a UUID.
    Uuid,
    /// String must not contain the composite identifier separator.
    NoSeparator,
    OneOf(&'static [&'static str]),
    IntRange { min: i64, max: i64 },
}

impl Validator {
    fn check(&self, name: &str, value: &Value) -> Result<(), CoreError> {
        if let Value::Array(items) = value {
            return items.iter().try_for_each(|item| self.check(name, item));
        }
        match (self, value) {
            (Self::Uuid, Value::String(s)) => uuid::Uuid::parse_str(s)
                .map(|_| ())
                .map_err(|_| CoreError::validation(format!("{name}: {s:?} is not a valid UUID"))),
            (Self::NoSeparator, Value::String(s)) => {
                if s.contains(SEPARATOR) {
                    Err(CoreError::validation(format!(
                        "{name}: {s:?} must not contain {SEPARATOR:?}"
                    )))
                } else {
                    Ok(())
                }
            }
            (Self::OneOf(allowed), Value::String(s)) => {
                if allowed.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(CoreError::validation(format!(
                        "{name}: {s:?} must be one of {}",
                        allowed.join(", ")
                    )))
                }
            }
            (Self::IntRange { min, max }, Value::Number(n)) => match n.as_i64() {
                Some(v) if (*min..=*max).contains(&v) => Ok(()),
                _ => Err(CoreError::validation(format!(
                    "{name}: {n} must be an integer between {min} and {max}"
                ))),
            },
            (_, Value::Null) => Ok(()),
            (validator, other) => Err(CoreError::type_assertion(format!(
                "{name}: {other} does not fit validator {validator:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub validators: Vec<Validator>,
    /// Changing the value replaces the resource.
    pub requires_replace: bool,
}

impl Attribute {
    fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            validators: Vec::new(),
            requires_replace: false,
        }
    }

    pub fn required(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Required)
    }

    pub fn optional(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Optional)
    }

    pub fn optional_computed(name: &'static str) -> Self {
        Self::new(name, AttributeKind::OptionalComputed)
    }

    pub fn computed(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Computed)
    }

    #[must_use]
    pub fn with(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    #[must_use]
    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    /// Scope identifier: required UUID without separators, forces replacement.
    pub fn scope_id(name: &'static str) -> Self {
        Self::required(name)
            .with(Validator::Uuid)
            .with(Validator::NoSeparator)
            .requires_replace()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Vec<Attribute>) -> Self {
        Self {
            description,
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Validate a user configuration object against this schema.
    ///
    /// Rejects unknown attributes, missing required ones, values set on
    /// computed-only attributes, and validator failures.
    pub fn validate(&self, config: &Value) -> Result<(), CoreError> {
        let Value::Object(map) = config else {
            return Err(CoreError::type_assertion(format!(
                "configuration must be an object, got {config}"
            )));
        };

        if let Some(unknown) = map.keys().find(|k| self.attribute(k).is_none()) {
            return Err(CoreError::validation(format!(
                "unsupported attribute {unknown:?}"
            )));
        }

        for attr in &self.attributes {
            let value = map.get(attr.name).unwrap_or(&Value::Null);
            match (attr.kind, value.is_null()) {
                (AttributeKind::Required, true) => {
                    return Err(CoreError::validation(format!(
                        "attribute {:?} is required",
                        attr.name
                    )));
                }
                (AttributeKind::Computed, false) => {
                    return Err(CoreError::validation(format!(
                        "attribute {:?} is read-only",
                        attr.name
                    )));
                }
                _ => {}
            }
            for validator in &attr.validators {
                validator.check(attr.name, value)?;
            }
        }
        Ok(())
    }
}
