/// Serde model of specification documents.
pub mod model;
/// Lenient parser with subtree-local error recovery.
pub mod parse;
