use super::{
    constants::{OUTPUT_SUFFIX, PACKAGE_NAME_CONST},
    imports::write_imports,
    printer::Printer,
};
use crate::{config::Config, file::ProtoFile, generate_error::GenerateError, schema::Schema};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// A generated Typescript file
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Artifact {
    /// The source identifier with the ".ts" suffix, e.g "pb/hello.proto.ts"
    pub name: String,

    /// The generated source
    pub content: String,
}

/// GeneratorOptions controls how the generation pass is scheduled.
/// It never changes the generated text
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Generate files, and the enum / message / service blocks of each file, on the rayon pool
    pub parallel: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Generator turns the files requested in a schema into Typescript artifacts
pub struct Generator<'a> {
    schema: &'a Schema,
    config: &'a Config,
    options: GeneratorOptions,

    /// absolute type path => declaring file, built once per pass
    type_index: HashMap<String, &'a str>,
}

impl<'a> Generator<'a> {
    /// Create a new generator for the given schema
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self {
            schema,
            config,
            options: GeneratorOptions::default(),
            type_index: schema.type_index(),
        }
    }

    /// Override the scheduling options
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate one artifact per requested file, in request order.
    /// The first error aborts the pass and no artifact is returned
    pub fn generate(&self) -> Result<Vec<Artifact>, GenerateError> {
        let targets = &self.schema.files_to_generate;
        tracing::debug!(
            files = targets.len(),
            parallel = self.options.parallel,
            "generating typescript definitions"
        );

        if self.options.parallel {
            targets
                .par_iter()
                .map(|name| self.generate_file(name))
                .collect()
        } else {
            targets.iter().map(|name| self.generate_file(name)).collect()
        }
    }

    /// Generate the artifact of a single file
    pub fn generate_file(&self, name: &str) -> Result<Artifact, GenerateError> {
        let file = self
            .schema
            .file(name)
            .ok_or_else(|| GenerateError::MissingFile(name.to_string()))?;

        self.report_unresolved_types(file);

        let imports = write_imports(self.schema, file)?;

        // enums, messages and services do not depend on each other
        let (enums, (messages, services)) = if self.options.parallel {
            rayon::join(
                || self.write_enums(file),
                || rayon::join(|| self.write_messages(file), || self.write_services(file)),
            )
        } else {
            (
                self.write_enums(file),
                (self.write_messages(file), self.write_services(file)),
            )
        };
        let services = services?;

        tracing::debug!(file = name, "generated");

        Ok(Artifact {
            name: format!("{}{}", file.name, OUTPUT_SUFFIX),
            content: format!(
                "{}\n\nexport const {} = '{}';\n\n{}\n{}\n{}\n",
                imports,
                PACKAGE_NAME_CONST,
                file.package_name(),
                enums,
                messages,
                services
            ),
        })
    }

    fn write_enums(&self, file: &ProtoFile) -> String {
        let mut printer = Printer::new(file.package.as_deref(), self.config);
        for e in file.enums.iter() {
            printer.write_enum(e);
        }
        printer.into_string()
    }

    fn write_messages(&self, file: &ProtoFile) -> String {
        let mut content = String::new();
        for msg in file.messages.iter() {
            let mut printer = Printer::new(file.package.as_deref(), self.config);
            printer.write_message(msg);
            content.push_str(&printer.into_string());
            content.push('\n');
        }
        content
    }

    fn write_services(&self, file: &ProtoFile) -> Result<String, GenerateError> {
        let mut printer = Printer::new(file.package.as_deref(), self.config);
        for service in file.services.iter() {
            printer.write_service(service)?;
        }
        Ok(printer.into_string())
    }

    /// Log the type references that no file of the schema declares.
    /// The schema is validated upstream, so this only helps to debug the output
    fn report_unresolved_types(&self, file: &ProtoFile) {
        let fields = file
            .messages
            .iter()
            .flat_map(|msg| msg.fields.iter())
            .filter_map(|field| field.field_type.type_reference());

        let rpcs = file
            .services
            .iter()
            .flat_map(|service| service.methods.iter())
            .flat_map(|rpc| [rpc.input_type.as_str(), rpc.output_type.as_str()]);

        for type_name in fields.chain(rpcs) {
            if !self.type_index.contains_key(type_name) {
                tracing::warn!(file = %file.name, type_name, "unresolved type reference");
            }
        }
    }
}

/// Generate the artifacts of a schema, using the configuration carried by its parameter
pub fn generate(schema: &Schema) -> Result<Vec<Artifact>, GenerateError> {
    let config = Config::from_parameter(schema.parameter.as_deref())?;
    Generator::new(schema, &config).generate()
}

#[cfg(test)]
mod tests {
    use super::{generate, Generator, GeneratorOptions};
    use crate::{config::Config, generate_error::GenerateError, schema::Schema};
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn hello_schema() -> Schema {
        serde_json::from_value(json!({
            "files": {
                "pb/common/common.proto": {
                    "name": "pb/common/common.proto",
                    "package": "pb.common",
                    "messages": [{ "name": "Paging", "fields": [
                        { "name": "offset", "label": "required", "type": "uint32" }
                    ]}]
                },
                "pb/hello/hello.proto": {
                    "name": "pb/hello/hello.proto",
                    "package": "pb.hello",
                    "dependencies": ["pb/common/common.proto"],
                    "enums": [
                        { "name": "Mood", "values": [
                            { "name": "HAPPY", "number": 0 },
                            { "name": "GRUMPY", "number": 2 }
                        ]}
                    ],
                    "messages": [
                        { "name": "GetRequest", "fields": [
                            { "name": "id", "label": "required", "type": "int32" },
                            { "name": "paging", "type": { "message": ".pb.common.Paging" } }
                        ]},
                        { "name": "GetResponse", "fields": [
                            { "name": "tags", "label": "repeated", "type": "string" },
                            { "name": "mood", "type": { "enum": ".pb.hello.Mood" } }
                        ]}
                    ],
                    "services": [
                        { "name": "Hello", "methods": [
                            { "name": "Get", "input_type": ".pb.hello.GetRequest", "output_type": ".pb.hello.GetResponse" }
                        ]}
                    ]
                }
            },
            "files_to_generate": ["pb/hello/hello.proto"],
            "parameter": "client=false"
        }))
        .unwrap()
    }

    #[test]
    fn test_generate_file() {
        let artifacts = generate(&hello_schema()).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].name, "pb/hello/hello.proto.ts");
        assert_eq!(
            artifacts[0].content,
            indoc! {"
            import * as pb_common from './../common/common.proto';


            export const PackageName = 'pb.hello';

            export enum Mood
            {
            \tHAPPY = 0,
            \tGRUMPY = 2,
            }

            export interface GetRequest
            {
            \tid : number;
            \tpaging? : pb_common.Paging;
            }

            export interface GetResponse
            {
            \ttags : string[];
            \tmood? : Mood;
            }


            export interface Hello
            {
            \tGet(input: GetRequest) : Promise<GetResponse>;
            }


            "}
        );
    }

    #[test]
    fn test_generate_empty_file_without_package() {
        let mut schema: Schema = serde_json::from_value(json!({
            "files": { "empty.proto": { "name": "empty.proto" } }
        }))
        .unwrap();
        schema = schema.with_target("empty.proto");

        let artifacts = generate(&schema).unwrap();
        assert_eq!(
            artifacts[0].content,
            "\n\nexport const PackageName = '';\n\n\n\n\n"
        );
    }

    #[test]
    fn test_parallel_and_sequential_output_match() {
        let schema = hello_schema()
            .with_target("pb/common/common.proto")
            .with_parameter("client=true");
        let config = Config::from_parameter(schema.parameter.as_deref()).unwrap();

        let parallel = Generator::new(&schema, &config)
            .with_options(GeneratorOptions { parallel: true })
            .generate()
            .unwrap();

        let sequential = Generator::new(&schema, &config)
            .with_options(GeneratorOptions { parallel: false })
            .generate()
            .unwrap();

        assert_eq!(parallel, sequential);
        let names = parallel.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["pb/hello/hello.proto.ts", "pb/common/common.proto.ts"]);
    }

    #[test]
    fn test_invalid_config_fails_before_generation() {
        let schema = hello_schema().with_parameter("clientType=xhr");
        assert_eq!(
            generate(&schema).unwrap_err().to_string(),
            "Invalid ClientType : xhr"
        );
    }

    #[test]
    fn test_ajax_client_fails_the_pass() {
        let schema = hello_schema().with_parameter("client=true,clientType=ajax");
        assert_eq!(
            generate(&schema).unwrap_err().to_string(),
            "not implemented: ajax client generation"
        );
    }

    #[test]
    fn test_missing_dependency_fails_the_pass() {
        let mut schema = hello_schema();
        schema.files.remove("pb/common/common.proto");

        assert_eq!(
            generate(&schema),
            Err(GenerateError::MissingDependency {
                file: "pb/hello/hello.proto".into(),
                dependency: "pb/common/common.proto".into(),
            })
        );
    }

    #[test]
    fn test_missing_target_fails_the_pass() {
        let schema = hello_schema().with_target("unknown.proto");
        assert_eq!(
            generate(&schema),
            Err(GenerateError::MissingFile("unknown.proto".into()))
        );
    }
}
