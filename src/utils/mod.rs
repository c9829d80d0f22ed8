//! Utility helpers: output serializers for the CLI.
pub mod serialization;

pub use serialization::JsonSerializer;
pub use serialization::Serializer;
pub use serialization::YamlSerializer;
