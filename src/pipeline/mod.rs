/// Non-fatal problems recorded during a pass.
pub mod diagnostics;
/// The rendering host contract and the tree-dump host.
pub mod host;
/// The orchestrator.
pub mod process;
