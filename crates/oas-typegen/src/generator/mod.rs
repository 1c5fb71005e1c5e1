pub(crate) mod codegen;
pub(crate) mod converter;
pub mod metrics;
pub mod orchestrator;
pub(crate) mod schema_registry;
pub(crate) mod type_model;
