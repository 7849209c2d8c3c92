//! Generate Typescript declarations from proto files
//!
//! # Example:
//! Given the following proto file, saved as `pb/hello/hello.proto`
//!
//! ```proto
//! package pb.hello;
//!
//! import "pb/common/common.proto";
//!
//! service HelloWorld {
//!   rpc SayHello(SayHelloRequest) returns (SayHelloResponse) {}
//! }
//!
//! message SayHelloRequest {
//!   required string name = 1;
//!   optional pb.common.Locale locale = 2;
//! }
//!
//! message SayHelloResponse {
//!   repeated string hello = 1;
//! }
//! ```
//! This module generates `pb/hello/hello.proto.ts`, with `client=false`:
//!
//! ```ts
//! import * as pb_common from './../common/common.proto';
//!
//!
//! export const PackageName = 'pb.hello';
//!
//!
//! export interface SayHelloRequest
//! {
//!     name : string;
//!     locale? : pb_common.Locale;
//! }
//!
//! export interface SayHelloResponse
//! {
//!     hello : string[];
//! }
//!
//!
//! export interface HelloWorld
//! {
//!     SayHello(input: SayHelloRequest) : Promise<SayHelloResponse>;
//! }
//! ```
//!
//! With `client=true` (the default) every service interface is followed by a
//! `<Service>Client` class that POSTs JSON with `fetch`.

mod constants;
pub mod generator;
pub mod imports;
pub mod printer;
pub mod type_name;

pub use generator::{generate, Artifact, Generator, GeneratorOptions};
