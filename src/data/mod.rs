pub mod loader;
pub mod mysql;
pub mod schema;
pub mod store;
pub mod transliteration;

#[cfg(test)]
pub mod memory;
