//! Lenient decoding for numeric fields.
//!
//! The server declares some numbers as `BigInt` or `String` scalars, and
//! older releases quote others, so the same field may arrive as `1024` or
//! `"1024"`. Every numeric response field is decoded through
//! [`NumberOrString`]; anything that is neither the number itself nor a
//! string that parses as one is a decode error.

use serde_with::{DisplayFromStr, PickFirst, Same};

/// `serde_as` adapter: the value as-is, or parsed from its string form.
pub(crate) type NumberOrString = PickFirst<(Same, DisplayFromStr)>;
