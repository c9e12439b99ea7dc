pub mod attributes;
pub(crate) mod rules;
/// The per-type property transformer.
pub mod transform;
