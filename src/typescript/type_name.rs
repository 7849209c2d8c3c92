use crate::field::{FieldLabel, FieldType};
use std::borrow::Cow;

/// Typescript type used for legacy groups and for unknown field types
pub const UNKNOWN_TYPE: &str = "any";

/// Resolve a fully qualified type reference (e.g ".pb.hello.Request") into the
/// name to print from a file declared in `package`.
///
/// References inside the file's own package lose the package prefix, other
/// references get their package segments joined with `_` so that they point at
/// the namespace import of their file, e.g ".pb.other.Request" => "pb_other.Request"
pub fn resolve_type_name<'a>(package: Option<&str>, type_name: &'a str) -> Cow<'a, str> {
    let relative = match type_name.strip_prefix('.') {
        Some(absolute) => match package {
            Some(package) if !package.is_empty() => strip_package(absolute, package),
            _ => absolute,
        },
        None => type_name,
    };

    // keep the last '.' and replace the others with '_'
    match relative.rfind('.') {
        Some(index) if relative[..index].contains('.') => Cow::Owned(format!(
            "{}{}",
            relative[..index].replace('.', "_"),
            &relative[index..]
        )),
        _ => Cow::Borrowed(relative),
    }
}

/// strip "pkg." from the start of path, packages using '/' are matched as if they used '.'
fn strip_package<'a>(path: &'a str, package: &str) -> &'a str {
    let mut segments = package.split(|c| c == '.' || c == '/');
    let mut rest = path;

    loop {
        match segments.next() {
            None => return rest,
            Some(segment) => match rest
                .strip_prefix(segment)
                .and_then(|rest| rest.strip_prefix('.'))
            {
                Some(next) => rest = next,
                None => return path,
            },
        }
    }
}

/// Returns the Typescript type of a field
/// Message and enum references are resolved relative to `package`
pub fn field_type_name<'a>(package: Option<&str>, field_type: &'a FieldType) -> Cow<'a, str> {
    match field_type {
        FieldType::Double
        | FieldType::Float
        | FieldType::Int64
        | FieldType::Uint64
        | FieldType::Int32
        | FieldType::Fixed64
        | FieldType::Fixed32
        | FieldType::Uint32
        | FieldType::Sfixed32
        | FieldType::Sfixed64
        | FieldType::Sint32
        | FieldType::Sint64 => Cow::Borrowed("number"),
        FieldType::Bool => Cow::Borrowed("boolean"),
        FieldType::String => Cow::Borrowed("string"),
        FieldType::Bytes => Cow::Borrowed("Uint8Array"),
        FieldType::Message(name) | FieldType::Enum(name) => resolve_type_name(package, name),
        FieldType::Group | FieldType::Unrecognized(_) => Cow::Borrowed(UNKNOWN_TYPE),
    }
}

/// Format a field declaration, without the trailing ';'
///
/// | label      | output           |
/// |------------|------------------|
/// | optional   | `name? : Type`   |
/// | required   | `name : Type`    |
/// | repeated   | `name : Type[]`  |
/// | other      | `name? : Type`   |
pub fn field_declaration(name: &str, type_name: &str, label: FieldLabel) -> String {
    match label {
        FieldLabel::Required => format!("{} : {}", name, type_name),
        FieldLabel::Repeated => format!("{} : {}[]", name, type_name),
        FieldLabel::Optional | FieldLabel::Unrecognized(_) => format!("{}? : {}", name, type_name),
    }
}
