pub mod artifacts;
pub mod data;
pub mod json;
pub mod loader;
pub mod matching;
pub mod views;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
