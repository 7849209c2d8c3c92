//! Conversions from the protoc plugin descriptors into the schema model
//!
//! Only what the generator prints is kept: nested types, oneofs, options and
//! source info are dropped.

use crate::{
    field::{Field, FieldLabel, FieldType},
    file::ProtoFile,
    message::Message,
    r#enum::Enum,
    schema::Schema,
    service::{Rpc, Service},
};
use prost_types::{
    compiler::CodeGeneratorRequest,
    field_descriptor_proto::{Label, Type},
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    ServiceDescriptorProto,
};

impl From<CodeGeneratorRequest> for Schema {
    fn from(request: CodeGeneratorRequest) -> Self {
        let CodeGeneratorRequest {
            file_to_generate,
            parameter,
            proto_file,
            ..
        } = request;

        let mut schema = Schema::new(proto_file.into_iter().map(ProtoFile::from));
        schema.files_to_generate = file_to_generate;
        schema.parameter = parameter;
        schema
    }
}

impl From<FileDescriptorProto> for ProtoFile {
    fn from(file: FileDescriptorProto) -> Self {
        Self {
            name: file.name().to_string(),
            package: file.package,
            dependencies: file.dependency,
            messages: file.message_type.iter().map(Message::from).collect(),
            enums: file.enum_type.iter().map(Enum::from).collect(),
            services: file.service.iter().map(Service::from).collect(),
        }
    }
}

impl From<&DescriptorProto> for Message {
    fn from(msg: &DescriptorProto) -> Self {
        Self {
            name: msg.name().to_string(),
            fields: msg.field.iter().map(Field::from).collect(),
        }
    }
}

impl From<&FieldDescriptorProto> for Field {
    fn from(field: &FieldDescriptorProto) -> Self {
        let label = match field.label {
            None => FieldLabel::Optional,
            Some(value) => match Label::try_from(value) {
                Ok(Label::Optional) => FieldLabel::Optional,
                Ok(Label::Required) => FieldLabel::Required,
                Ok(Label::Repeated) => FieldLabel::Repeated,
                Err(_) => FieldLabel::Unrecognized(value),
            },
        };

        Field::new(field.name(), label, field_type(field))
    }
}

fn field_type(field: &FieldDescriptorProto) -> FieldType {
    let value = match field.r#type {
        Some(value) => value,
        None => return FieldType::Unrecognized(0),
    };

    match Type::try_from(value) {
        Ok(Type::Double) => FieldType::Double,
        Ok(Type::Float) => FieldType::Float,
        Ok(Type::Int64) => FieldType::Int64,
        Ok(Type::Uint64) => FieldType::Uint64,
        Ok(Type::Int32) => FieldType::Int32,
        Ok(Type::Fixed64) => FieldType::Fixed64,
        Ok(Type::Fixed32) => FieldType::Fixed32,
        Ok(Type::Bool) => FieldType::Bool,
        Ok(Type::String) => FieldType::String,
        Ok(Type::Group) => FieldType::Group,
        Ok(Type::Message) => FieldType::Message(field.type_name().to_string()),
        Ok(Type::Bytes) => FieldType::Bytes,
        Ok(Type::Uint32) => FieldType::Uint32,
        Ok(Type::Enum) => FieldType::Enum(field.type_name().to_string()),
        Ok(Type::Sfixed32) => FieldType::Sfixed32,
        Ok(Type::Sfixed64) => FieldType::Sfixed64,
        Ok(Type::Sint32) => FieldType::Sint32,
        Ok(Type::Sint64) => FieldType::Sint64,
        Err(_) => FieldType::Unrecognized(value),
    }
}

impl From<&EnumDescriptorProto> for Enum {
    fn from(e: &EnumDescriptorProto) -> Self {
        let mut result = Enum::new(e.name());
        for value in e.value.iter() {
            result.insert(value.name(), value.number());
        }
        result
    }
}

impl From<&ServiceDescriptorProto> for Service {
    fn from(service: &ServiceDescriptorProto) -> Self {
        let mut result = Service::new(service.name());
        for method in service.method.iter() {
            if method.client_streaming() || method.server_streaming() {
                tracing::warn!(
                    service = service.name(),
                    method = method.name(),
                    "streaming rpc generated as a unary call"
                );
            }

            result.add_rpc(Rpc::new(
                method.name(),
                method.input_type(),
                method.output_type(),
            ));
        }
        result
    }
}
