//! Variant parse errors.

use compact_str::CompactString;
use thiserror::Error;

/// Error parsing an enumerated variant from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("unknown form mode `{0}`, expected `login` or `signup`")]
    UnknownFormMode(CompactString),
    #[error("unknown position variant `{0}`, expected `center` or `top-left`")]
    UnknownPosition(CompactString),
}
