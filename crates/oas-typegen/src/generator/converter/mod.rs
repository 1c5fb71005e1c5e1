pub(crate) mod normalizer;
pub(crate) mod type_resolver;

pub(crate) use normalizer::normalize_schemas;

#[cfg(test)]
mod tests;
