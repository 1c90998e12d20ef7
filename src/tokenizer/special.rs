//! Reserved vocabulary entries shared by every Chatterbox vocabulary.

/// Start of text
pub const SOT: &str = "[START]";
/// End of text
pub const EOT: &str = "[STOP]";
pub const UNK: &str = "[UNK]";
/// Stands in for a literal space; the vocabulary has no whitespace tokens
pub const SPACE: &str = "[SPACE]";
pub const PAD: &str = "[PAD]";
pub const SEP: &str = "[SEP]";
pub const CLS: &str = "[CLS]";
pub const MASK: &str = "[MASK]";

/// All reserved entries, in vocabulary order.
pub const ALL: [&str; 8] = [SOT, EOT, UNK, SPACE, PAD, SEP, CLS, MASK];

/// Tokens a vocabulary must contain to be usable.
pub const REQUIRED: [&str; 2] = [SOT, EOT];
