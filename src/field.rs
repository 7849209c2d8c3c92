use derive_more::Display;
use serde::{Deserialize, Serialize};

/// FieldLabel represents a proto [field rule]
/// [field rule] https://developers.google.com/protocol-buffers/docs/proto#specifying_field_rules
#[derive(Display, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldLabel {
    #[display(fmt = "optional")]
    Optional,

    #[display(fmt = "required")]
    Required,

    #[display(fmt = "repeated")]
    Repeated,

    /// A label value this generator does not know about, printed as optional
    #[display(fmt = "unrecognized({})", _0)]
    Unrecognized(i32),
}

impl Default for FieldLabel {
    fn default() -> Self {
        FieldLabel::Optional
    }
}

/// FieldType is the closed set of descriptor [field types]
/// Message and enum references carry their fully qualified name, e.g ".pb.hello.SayHelloRequest"
/// [field types] https://developers.google.com/protocol-buffers/docs/proto#scalar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message(String),
    Bytes,
    Uint32,
    Enum(String),
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,

    /// A type value this generator does not know about
    Unrecognized(i32),
}

impl FieldType {
    /// Returns the fully qualified type reference for message and enum fields
    pub fn type_reference(&self) -> Option<&str> {
        match self {
            FieldType::Message(name) | FieldType::Enum(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Field represents a proto message [field]
/// [field] https://developers.google.com/protocol-buffers/docs/proto#specifying_field_types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    /// The field name, as declared in the proto file
    pub name: String,

    /// The field rule, defaults to optional
    #[serde(default)]
    pub label: FieldLabel,

    /// The type of the field
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    /// Creates a new field
    pub fn new<S: Into<String>>(name: S, label: FieldLabel, field_type: FieldType) -> Field {
        Self {
            name: name.into(),
            label,
            field_type,
        }
    }
}
