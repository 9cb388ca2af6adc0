pub mod memory;
pub mod query;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
