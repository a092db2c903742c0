//! Shopfront storefront site.
//!
//! The browser app is behind the `web` feature on wasm32. Other builds keep
//! only the content and boot code, which the app and the tests share.
//!
//! Build the app with: `--features web --target wasm32-unknown-unknown`.

pub mod boot;
pub mod content;

/// Placeholder for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod app;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use app::start;
