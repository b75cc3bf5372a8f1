//! Language support: the registry of supported languages and the script
//! detector used for "auto" sources.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their
//!   plugin/provider code mapping
//! - `detect`: Unicode-block detection for untagged source text
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::lang::{LanguageDetector, LanguageRegistry, AUTO};
//!
//! let registry = LanguageRegistry::get();
//! assert_eq!(registry.name_of("zh-Hans"), "简体中文");
//!
//! let detected = LanguageDetector::detect("你好");
//! assert!(registry.is_known(detected));
//! ```

mod detect;
mod registry;

pub use detect::LanguageDetector;
pub use registry::{LanguageEntry, LanguageRegistry, AUTO};
