pub mod config;
pub mod descriptor;
pub mod r#enum;
pub mod field;
pub mod file;
pub mod generate_error;
pub mod message;
pub mod schema;
pub mod service;
pub mod typescript;

pub use config::{ClientTransport, Config};
pub use generate_error::{ConfigError, GenerateError};
pub use schema::Schema;
pub use typescript::{generate, Artifact};
