/// Binding of action references to callbacks.
pub mod binder;
/// Named callbacks and the context that carries them.
pub mod handler;
/// Discovery of referenced handler names.
pub mod refs;
