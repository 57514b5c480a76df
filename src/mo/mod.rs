// SPDX-License-Identifier: PMPL-1.0-or-later

//! Binary catalog writer
//!
//! Emits the little-endian `.mo` layout: a 7-word header, the key and value
//! tables of `(length, offset)` pairs, then the NUL-terminated key and value
//! strings. The optional hash table is never written.

pub mod layout;
pub mod writer;

pub use layout::Layout;
pub use writer::{encode, write_atomic, MO_MAGIC, MO_REVISION};
