/// Arena-backed component tree.
pub mod builder;
