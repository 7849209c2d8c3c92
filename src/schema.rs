use crate::file::ProtoFile;
use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema is the full set of files submitted for compilation
/// Files are indexed by their identifier, in submission order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    /// All the parsed files, including dependencies that are not generated
    pub files: LinkedHashMap<String, ProtoFile>,

    /// Identifiers of the files we generate an artifact for
    #[serde(default)]
    pub files_to_generate: Vec<String>,

    /// The raw plugin parameter, e.g "client=true,clientType=fetch"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl Schema {
    /// Returns a schema indexing the given files
    pub fn new<I>(files: I) -> Self
    where
        I: IntoIterator<Item = ProtoFile>,
    {
        let mut schema = Self::default();
        for file in files {
            schema.add_file(file);
        }
        schema
    }

    /// Add a file to the schema, replacing any file with the same identifier
    pub fn add_file(&mut self, file: ProtoFile) {
        self.files.insert(file.name.clone(), file);
    }

    /// Mark a file as a generation target
    pub fn with_target<S: Into<String>>(mut self, file_name: S) -> Self {
        self.files_to_generate.push(file_name.into());
        self
    }

    /// Set the raw plugin parameter
    pub fn with_parameter<S: Into<String>>(mut self, parameter: S) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Get a file by its exact identifier
    pub fn file(&self, name: &str) -> Option<&ProtoFile> {
        self.files.get(name)
    }

    /// Build an index of every top level message and enum,
    /// from its absolute path (e.g ".pb.hello.Request") to the declaring file
    pub fn type_index(&self) -> HashMap<String, &str> {
        let mut index = HashMap::new();
        for file in self.files.values() {
            let names = file
                .messages
                .iter()
                .map(|msg| msg.name.as_str())
                .chain(file.enums.iter().map(|e| e.name.as_str()));

            for name in names {
                index.insert(file.absolute_path(name), file.name.as_str());
            }
        }
        index
    }
}
