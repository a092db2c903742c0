//! Observability infrastructure for the Shopfront storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating all log lines of one page session
//! - `StructuredLogger` - Structured logging with session and component context
//! - `LogSink` - Where entries go (stderr, browser console, or memory)

mod logging;
mod session;
mod sink;

pub use logging::*;
pub use session::*;
pub use sink::*;
