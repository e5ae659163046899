//! General-purpose extension traits and helpers over the standard library.
//!
//! Every helper here is a small, stateless function or iterator adapter:
//! pagination and random selection over sequences, query-string merging over
//! URLs, byte encoding, hashing and symmetric encryption, file/stream I/O,
//! XML (de)serialization, and process output capture. Helpers validate their
//! arguments and delegate the heavy lifting to the underlying library.

pub mod collections;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod fs;
pub mod numeric;
pub mod process;
pub mod strings;
pub mod uri;
pub mod xml;

// Re-export the types most callers touch.
pub use collections::{paginate, random_element, random_element_with, IterExtensions, Paginate, SliceExtensions};
pub use error::{ExtensionError, ExtensionResult};
pub use uri::{with_query, with_query_str, UrlExtensions};
