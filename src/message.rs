use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Message represents a proto [message]
/// [message] https://developers.google.com/protocol-buffers/docs/proto3#simple
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// The message name, unqualified
    pub name: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Message {
    /// Returns a new message with no fields
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }
}
