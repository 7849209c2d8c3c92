use super::type_name::{field_declaration, field_type_name, resolve_type_name};
use crate::{
    config::{ClientTransport, Config},
    generate_error::GenerateError,
    message::Message,
    r#enum::Enum,
    service::Service,
};
use std::fmt::Write;

/// Printer serialize the declarations of a single proto file into an internal buffer
pub struct Printer<'a> {
    /// The internal buffer used to build the TS source
    buffer: String,

    /// Package of the file being printed, used to resolve type references
    package: Option<&'a str>,

    /// Reference to the configuration
    config: &'a Config,

    /// The indent level, in tabs
    indent: usize,
}

/// write! wrapper that write a line to the printer buffer
macro_rules! writeln {
    ($printer:ident) => {{
        $printer.buffer.push('\n');
    }};
    ($printer:ident, $v:expr) => {{
        for _ in 0..$printer.indent {
            $printer.buffer.push('\t');
        }

        $printer.buffer.push_str($v);
        $printer.buffer.push('\n');
    }};
    ($printer:ident, $($arg:tt)*) => {{
        // print indent
        for _ in 0..$printer.indent {
            $printer.buffer.push('\t');
        }

        // writing into a String never fails
        let _ = write!(&mut $printer.buffer, $($arg)*);
        $printer.buffer.push('\n')
    }};
}

/// write! wrapper that write and indent the printer
macro_rules! writeln_and_indent {
    ($printer:ident, $($arg:tt)*) => {{
        writeln!($printer, $($arg)*);
        $printer.indent += 1;
    }};
}

/// write! wrapper that outdent and write into the printer
macro_rules! outdent_and_writeln {
    ($printer:ident, $($arg:tt)*) => {{
        $printer.indent -= 1;
        writeln!($printer, $($arg)*);
    }};
}

impl<'a> Printer<'a> {
    /// Create a new printer for a file declared in `package`
    pub fn new(package: Option<&'a str>, config: &'a Config) -> Self {
        Self {
            buffer: String::new(),
            package,
            config,
            indent: 0,
        }
    }

    /// Returns the printed source
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Write a Proto message as an interface, fields in declaration order
    pub fn write_message(&mut self, msg: &Message) {
        writeln!(self, "export interface {}", msg.name);
        writeln_and_indent!(self, "{");
        for field in msg.fields.iter() {
            let type_name = field_type_name(self.package, &field.field_type);
            writeln!(
                self,
                "{};",
                field_declaration(&field.name, &type_name, field.label)
            );
        }
        outdent_and_writeln!(self, "}");
    }

    /// Write a Proto enum, values in declaration order
    pub fn write_enum(&mut self, e: &Enum) {
        writeln!(self, "export enum {}", e.name);
        writeln_and_indent!(self, "{");
        for value in e.values.iter() {
            writeln!(self, "{} = {},", value.name, value.number);
        }
        outdent_and_writeln!(self, "}");
    }

    /// Write a Proto service as an interface, followed by its client when enabled
    pub fn write_service(&mut self, service: &Service) -> Result<(), GenerateError> {
        writeln!(self, "export interface {}", service.name);
        writeln_and_indent!(self, "{");
        for rpc in service.methods.iter() {
            writeln!(
                self,
                "{}(input: {}) : Promise<{}>;",
                rpc.name,
                resolve_type_name(self.package, &rpc.input_type),
                resolve_type_name(self.package, &rpc.output_type)
            );
        }
        outdent_and_writeln!(self, "}");
        writeln!(self);

        if !self.config.generate_client {
            return Ok(());
        }

        match self.config.client_transport {
            ClientTransport::Fetch => {
                self.write_fetch_client(service);
                Ok(())
            }
            transport @ ClientTransport::Ajax => Err(GenerateError::UnsupportedTransport(transport)),
        }
    }

    /// Write a client class implementing the service interface on top of `fetch`
    fn write_fetch_client(&mut self, service: &Service) {
        writeln!(self, "export class {}Client", service.name);
        writeln!(self, "\timplements {}", service.name);
        writeln_and_indent!(self, "{");

        writeln_and_indent!(self, "constructor(");
        writeln!(self, "private basePath: string = '',");
        writeln!(
            self,
            "private makeUrl: (basePath: string, packageName: string, className: string, methodName: string) => string"
        );
        writeln!(self, "\t= (b, _, c, m) => `${b}${c}/${m}`,");
        writeln!(self, "private makeHeaders: (baseHeaders: {}) => {} = (h) => h,");
        writeln!(self, "private makeQuery: (baseQuery: {}) => {} = (q) => q");
        outdent_and_writeln!(self, ") {}");

        for rpc in service.methods.iter() {
            let input = resolve_type_name(self.package, &rpc.input_type);
            let output = resolve_type_name(self.package, &rpc.output_type);

            writeln!(self);
            writeln_and_indent!(
                self,
                "async {}(input: {}) : Promise<{}> {{",
                rpc.name,
                input,
                output
            );
            writeln!(
                self,
                "const url = this.makeUrl(this.basePath, PackageName, '{}', '{}');",
                service.name,
                rpc.name
            );
            writeln!(
                self,
                "const headers = this.makeHeaders({'Content-Type': 'application/json'});"
            );
            writeln_and_indent!(self, "const query = this.makeQuery({");
            writeln!(self, "method: 'POST',");
            writeln!(self, "headers,");
            writeln!(self, "body: JSON.stringify(input)");
            outdent_and_writeln!(self, "});");
            writeln!(self, "const response = await fetch(url, query);");
            writeln!(self, "return (await response.json()) as {};", output);
            outdent_and_writeln!(self, "}");
        }

        outdent_and_writeln!(self, "}");
        writeln!(self);
    }
}

#[cfg(test)]
mod tests {
    use super::Printer;
    use crate::{
        config::{ClientTransport, Config},
        field::{Field, FieldLabel, FieldType},
        generate_error::GenerateError,
        message::Message,
        r#enum::Enum,
        service::{Rpc, Service},
    };
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn no_client() -> Config {
        Config {
            generate_client: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_write_message() {
        let config = Config::default();
        let mut msg = Message::new("Item");
        msg.add_field(Field::new("id", FieldLabel::Required, FieldType::Int32));
        msg.add_field(Field::new("tags", FieldLabel::Repeated, FieldType::String));
        msg.add_field(Field::new(
            "owner",
            FieldLabel::Optional,
            FieldType::Message(".pb.users.User".into()),
        ));
        msg.add_field(Field::new(
            "kind",
            FieldLabel::Unrecognized(5),
            FieldType::Enum(".pb.items.Kind".into()),
        ));

        let mut printer = Printer::new(Some("pb.items"), &config);
        printer.write_message(&msg);

        assert_eq!(
            printer.into_string(),
            indoc! {"
            export interface Item
            {
            \tid : number;
            \ttags : string[];
            \towner? : pb_users.User;
            \tkind? : Kind;
            }
            "}
        );
    }

    #[test]
    fn test_write_empty_message() {
        let config = Config::default();
        let mut printer = Printer::new(None, &config);
        printer.write_message(&Message::new("Empty"));
        assert_eq!(printer.into_string(), "export interface Empty\n{\n}\n");
    }

    #[test]
    fn test_write_enum_keeps_duplicates_and_order() {
        let config = Config::default();
        let mut e = Enum::new("Status");
        e.insert("B", 1);
        e.insert("A", 0);
        e.insert("B", 1);
        e.insert("Z", -7);

        let mut printer = Printer::new(None, &config);
        printer.write_enum(&e);

        assert_eq!(
            printer.into_string(),
            indoc! {"
            export enum Status
            {
            \tB = 1,
            \tA = 0,
            \tB = 1,
            \tZ = -7,
            }
            "}
        );
    }

    fn hello_service() -> Service {
        let mut service = Service::new("Hello");
        service.add_rpc(Rpc::new("Get", ".pb.hello.GetRequest", ".pb.hello.GetResponse"));
        service.add_rpc(Rpc::new("Ping", ".pb.common.Ping", ".pb.common.Pong"));
        service
    }

    #[test]
    fn test_write_service_interface() {
        let config = no_client();
        let mut printer = Printer::new(Some("pb.hello"), &config);
        printer.write_service(&hello_service()).unwrap();

        assert_eq!(
            printer.into_string(),
            indoc! {"
            export interface Hello
            {
            \tGet(input: GetRequest) : Promise<GetResponse>;
            \tPing(input: pb_common.Ping) : Promise<pb_common.Pong>;
            }

            "}
        );
    }

    #[test]
    fn test_write_service_fetch_client() {
        let config = Config::default();
        let mut service = Service::new("Hello");
        service.add_rpc(Rpc::new("Get", ".pb.hello.GetRequest", ".pb.hello.GetResponse"));

        let mut printer = Printer::new(Some("pb.hello"), &config);
        printer.write_service(&service).unwrap();

        assert_eq!(
            printer.into_string(),
            indoc! {"
            export interface Hello
            {
            \tGet(input: GetRequest) : Promise<GetResponse>;
            }

            export class HelloClient
            \timplements Hello
            {
            \tconstructor(
            \t\tprivate basePath: string = '',
            \t\tprivate makeUrl: (basePath: string, packageName: string, className: string, methodName: string) => string
            \t\t\t= (b, _, c, m) => `${b}${c}/${m}`,
            \t\tprivate makeHeaders: (baseHeaders: {}) => {} = (h) => h,
            \t\tprivate makeQuery: (baseQuery: {}) => {} = (q) => q
            \t) {}

            \tasync Get(input: GetRequest) : Promise<GetResponse> {
            \t\tconst url = this.makeUrl(this.basePath, PackageName, 'Hello', 'Get');
            \t\tconst headers = this.makeHeaders({'Content-Type': 'application/json'});
            \t\tconst query = this.makeQuery({
            \t\t\tmethod: 'POST',
            \t\t\theaders,
            \t\t\tbody: JSON.stringify(input)
            \t\t});
            \t\tconst response = await fetch(url, query);
            \t\treturn (await response.json()) as GetResponse;
            \t}
            }

            "}
        );
    }

    #[test]
    fn test_write_service_ajax_client_is_not_available() {
        let config = Config {
            client_transport: ClientTransport::Ajax,
            ..Config::default()
        };

        let mut printer = Printer::new(Some("pb.hello"), &config);
        assert_eq!(
            printer.write_service(&hello_service()),
            Err(GenerateError::UnsupportedTransport(ClientTransport::Ajax))
        );
    }

    #[test]
    fn test_ajax_is_ignored_without_client() {
        let config = Config {
            generate_client: false,
            client_transport: ClientTransport::Ajax,
            ..Config::default()
        };

        let mut printer = Printer::new(Some("pb.hello"), &config);
        assert!(printer.write_service(&hello_service()).is_ok());
    }
}
