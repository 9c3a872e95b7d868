pub mod content;
pub mod motion;
pub mod reveal;
pub mod selection;
pub mod signal;
pub mod ticker;
pub mod tracker;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
