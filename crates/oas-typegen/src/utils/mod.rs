pub mod refs;
pub mod schema_ext;
pub mod spec;
pub mod text;

pub(crate) use refs::{get_ref_name, is_local_ref};
pub(crate) use schema_ext::SchemaExt;
