//! Non-visual plumbing: preference storage, the OS appearance bridge and the
//! theme coordinator that ties them together.

pub mod appearance;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod paths;
pub mod preferences;
pub mod theme_coordinator;
