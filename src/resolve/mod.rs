/// Registries of renderable implementations.
pub mod registry;
/// Type-name resolution with PascalCase fallback.
pub mod resolver;
