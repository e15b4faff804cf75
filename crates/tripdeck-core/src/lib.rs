pub mod backend;
pub mod catalog;
pub mod config;
pub mod doctor;
pub mod store;
#[cfg(test)]
pub(crate) mod test_support;
pub mod time;
pub mod trip;
