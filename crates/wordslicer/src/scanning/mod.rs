//! # Text Scanning
//!
//! This module splits encoded text into tokens.
//!
//! [`ScanConfig`] describes the split rules:
//! * `delimiters` - bytes which always split, and are never emitted;
//! * `split_on_punctuation` - whether ASCII punctuation also splits;
//! * `keep_punctuation` - whether split punctuation is emitted as tokens;
//! * `lowercase` - whether emitted tokens are ASCII lowercased.
//!
//! [`TextScanner`] runs the scan.
//!
//! ```rust
//! use wordslicer::scanning::{ScanConfig, TextScanner};
//!
//! let config = ScanConfig::default()
//!     .with_split_on_punctuation(true)
//!     .with_keep_punctuation(true);
//! let scanner = TextScanner::new(config);
//!
//! assert_eq!(scanner.tokenize("Hello, world!"), vec!["Hello", ",", "world", "!"]);
//! assert_eq!(scanner.count_tokens("Hello, world!"), 4);
//! ```

mod scan_config;
mod text_scanner;

#[doc(inline)]
pub use scan_config::*;
#[doc(inline)]
pub use text_scanner::*;
