use serde::{Deserialize, Serialize};

/// EnumValue is a single (name, number) member of an enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// Enum defines a proto [emum]
/// Values keep their declaration order, duplicated numbers included
/// [enum] https://developers.google.com/protocol-buffers/docs/proto3#enum
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Enum {
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl Enum {
    /// Returns an empty enum
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Insert a new value with the given key and number
    pub fn insert<S: Into<String>>(&mut self, key: S, number: i32) {
        self.values.push(EnumValue {
            name: key.into(),
            number,
        });
    }
}
