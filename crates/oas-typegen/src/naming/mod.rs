pub mod identifiers;
pub(crate) mod name_index;
pub mod operations;

#[cfg(test)]
mod tests;
