use crate::generate_error::ConfigError;
use derive_more::Display;
use std::str::FromStr;

/// The flavor of RPC client stub to generate
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientTransport {
    /// Promise based client built on `fetch`
    #[display(fmt = "fetch")]
    Fetch,

    /// Legacy XMLHttpRequest client, recognized but not available
    #[display(fmt = "ajax")]
    Ajax,
}

impl FromStr for ClientTransport {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fetch" => Ok(ClientTransport::Fetch),
            "ajax" => Ok(ClientTransport::Ajax),
            other => Err(ConfigError::InvalidClientType(other.to_string())),
        }
    }
}

/// Config let us configure what we generate for each proto file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Emit a client class for each service (`client`)
    pub generate_client: bool,

    /// Client flavor (`clientType`)
    pub client_transport: ClientTransport,

    /// `nonull`, parsed but not used by any emitter
    pub suppress_null: bool,

    /// `duparray`, parsed but not used by any emitter
    pub duplicate_arrays: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generate_client: true,
            client_transport: ClientTransport::Fetch,
            suppress_null: false,
            duplicate_arrays: true,
        }
    }
}

impl Config {
    /// Build a config from the optional plugin parameter
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self, ConfigError> {
        match parameter {
            Some(parameter) => parameter.parse(),
            None => Ok(Self::default()),
        }
    }
}

/// Parse a flat `key=value,key=value` parameter string
impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(parameter: &str) -> Result<Self, Self::Err> {
        let mut config = Config::default();

        for entry in parameter.split(',') {
            let (key, value) = match entry.split_once('=') {
                Some(pair) => pair,
                None => {
                    if !entry.is_empty() {
                        tracing::debug!(entry, "ignoring parameter without a value");
                    }
                    continue;
                }
            };

            let flag = match key {
                "client" => &mut config.generate_client,
                "nonull" => &mut config.suppress_null,
                "duparray" => &mut config.duplicate_arrays,
                "clientType" => {
                    config.client_transport = value.parse()?;
                    continue;
                }
                _ => {
                    tracing::debug!(key, "ignoring unknown parameter");
                    continue;
                }
            };

            match value {
                "true" => *flag = true,
                "false" => *flag = false,
                _ => tracing::warn!(key, value, "ignoring non boolean value"),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientTransport, Config};
    use crate::generate_error::ConfigError;

    #[test]
    fn test_defaults() {
        let config = Config::from_parameter(None).unwrap();
        assert_eq!(
            config,
            Config {
                generate_client: true,
                client_transport: ClientTransport::Fetch,
                suppress_null: false,
                duplicate_arrays: true,
            }
        );
        assert_eq!("".parse::<Config>().unwrap(), config);
    }

    #[test]
    fn test_parse_all_keys() {
        let config: Config = "client=false,clientType=ajax,nonull=true,duparray=false"
            .parse()
            .unwrap();

        assert_eq!(
            config,
            Config {
                generate_client: false,
                client_transport: ClientTransport::Ajax,
                suppress_null: true,
                duplicate_arrays: false,
            }
        );
    }

    #[test]
    fn test_ignore_unknown_and_malformed_entries() {
        let config: Config = "foo=bar,client,nonull=yes,,clientType=fetch"
            .parse()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_client_type() {
        assert_eq!(
            Config::from_parameter(Some("client=true,clientType=grpc")),
            Err(ConfigError::InvalidClientType("grpc".into()))
        );
    }

    #[test]
    fn test_value_keeps_equal_signs() {
        assert_eq!(
            "clientType=fetch=1".parse::<Config>(),
            Err(ConfigError::InvalidClientType("fetch=1".into()))
        );
    }
}
