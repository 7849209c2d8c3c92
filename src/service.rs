use serde::{Deserialize, Serialize};

/// Rpc is a unary service method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rpc {
    pub name: String,

    /// Fully qualified request type, e.g ".pb.hello.SayHelloRequest"
    pub input_type: String,

    /// Fully qualified response type
    pub output_type: String,
}

impl Rpc {
    pub fn new<N, I, O>(name: N, input_type: I, output_type: O) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        O: Into<String>,
    {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
        }
    }
}

/// Service represents a proto [service]
/// [service] https://developers.google.com/protocol-buffers/docs/proto3#services
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub name: String,

    #[serde(default)]
    pub methods: Vec<Rpc>,
}

impl Service {
    pub fn new<S: Into<String>>(name: S) -> Service {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn add_rpc(&mut self, rpc: Rpc) {
        self.methods.push(rpc);
    }
}
