//! Quote adapters.
//!
//! - `HttpQuoteProvider` - Remote quote service plus translation
//! - `FallbackQuoteProvider` - Never fails; substitutes a local quote

mod fallback_provider;
mod http_provider;

pub use fallback_provider::FallbackQuoteProvider;
pub use http_provider::{HttpQuoteConfig, HttpQuoteProvider};
