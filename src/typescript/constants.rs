/// Suffix appended to a proto file identifier to name its artifact
pub const OUTPUT_SUFFIX: &str = ".ts";

/// Name of the exported constant holding the package name.
/// Generated clients pass it to their `makeUrl` builder
pub const PACKAGE_NAME_CONST: &str = "PackageName";
