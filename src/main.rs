use prost::Message;
use prost_types::compiler::{code_generator_response::File, CodeGeneratorRequest, CodeGeneratorResponse};
use protoc_gen_tsi::{generate, Schema};
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

/// protoc plugin: reads a CodeGeneratorRequest from stdin and writes a
/// CodeGeneratorResponse with one ".ts" file per requested proto file to stdout
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the response, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;
    let request = CodeGeneratorRequest::decode(input.as_slice())?;
    let schema = Schema::from(request);

    let response = match generate(&schema) {
        Ok(artifacts) => CodeGeneratorResponse {
            file: artifacts
                .into_iter()
                .map(|artifact| File {
                    name: Some(artifact.name),
                    content: Some(artifact.content),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
        Err(error) => {
            tracing::error!(%error, "generation aborted");
            CodeGeneratorResponse {
                error: Some(error.to_string()),
                ..Default::default()
            }
        }
    };

    let mut output = Vec::new();
    response.encode(&mut output)?;
    std::io::stdout().write_all(&output)?;
    Ok(())
}
