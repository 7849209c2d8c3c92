use crate::{file::ProtoFile, generate_error::GenerateError, schema::Schema};
use std::fmt::Write;

/// Build the import statements of a file, one per dependency, e.g
///
/// ```ts
/// import * as pb_common from './../common/common.proto';
/// ```
///
/// Every dependency must be part of the schema, a missing one fails the whole block
pub fn write_imports(schema: &Schema, file: &ProtoFile) -> Result<String, GenerateError> {
    let dir = parent_dir(&file.name);
    let mut imports = String::new();

    for dependency in file.dependencies.iter() {
        let dep = schema
            .file(dependency)
            .ok_or_else(|| GenerateError::MissingDependency {
                file: file.name.clone(),
                dependency: dependency.clone(),
            })?;

        let _ = writeln!(
            imports,
            "import * as {} from './{}';",
            import_alias(dep),
            relative_path(dir, &dep.name)
        );
    }

    Ok(imports)
}

/// The identifier a dependency is imported as: its package with '.' replaced by '_'
/// Files without a package fall back to their file stem
pub fn import_alias(dep: &ProtoFile) -> String {
    match dep.package.as_deref() {
        Some(package) if !package.is_empty() => package.replace('.', "_"),
        _ => {
            let file_name = dep.name.rsplit('/').next().unwrap_or_default();
            let stem = file_name.split('.').next().unwrap_or_default();
            stem.chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect()
        }
    }
}

/// Directory part of a file identifier, "" for files at the root
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[..index],
        None => "",
    }
}

/// Compute the path of `target` relative to the directory `from`
/// Both are '/' separated paths relative to the same root
pub fn relative_path(from: &str, target: &str) -> String {
    let segments = |path: &str| -> Vec<String> {
        path.split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(String::from)
            .collect()
    };

    let from = segments(from);
    let target = segments(target);

    let common = from
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let path = std::iter::repeat("..")
        .take(from.len() - common)
        .chain(target[common..].iter().map(String::as_str))
        .collect::<Vec<_>>();

    match path.is_empty() {
        true => ".".to_string(),
        false => path.join("/"),
    }
}
