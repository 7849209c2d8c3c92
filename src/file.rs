use crate::{message::Message, r#enum::Enum, service::Service};
use serde::{Deserialize, Serialize};

/// ProtoFile is one compilation unit, as handed over by the schema compiler
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProtoFile {
    /// The file identifier, relative to the proto root, e.g "pb/hello/hello.proto"
    pub name: String,

    /// The declared package, e.g "pb.hello"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Identifiers of the imported files, in import order
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub messages: Vec<Message>,

    #[serde(default)]
    pub enums: Vec<Enum>,

    #[serde(default)]
    pub services: Vec<Service>,
}

impl ProtoFile {
    /// Returns an empty file with no package
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the package name, or an empty string when none is declared
    pub fn package_name(&self) -> &str {
        self.package.as_deref().unwrap_or_default()
    }

    /// Returns the absolute path of a type declared in this file, e.g ".pb.hello.Request"
    pub fn absolute_path(&self, type_name: &str) -> String {
        match self.package.as_deref() {
            Some(package) if !package.is_empty() => format!(".{}.{}", package, type_name),
            _ => format!(".{}", type_name),
        }
    }
}
