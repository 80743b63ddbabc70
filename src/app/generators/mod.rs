pub mod grpc;
pub mod project;

pub use grpc::GrpcGenerator;
pub use project::ProjectGenerator;
