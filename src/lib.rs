//! A reference table of HTTP status codes and their reason phrases.
//!
//! The table follows the [IANA registry](http://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml)
//! plus a handful of codes in common use that never made it in (e.g. `418`, `509`, `599`).
//!
//! ```
//! use status_registry::{status, StatusRegistry};
//!
//! let registry = StatusRegistry::new();
//!
//! assert_eq!(registry.get_reason(status::NOT_FOUND).unwrap(), "Not Found");
//! assert_eq!(registry.get_reason("201").unwrap(), "Created");
//! assert!(registry.is_success(status::NO_CONTENT));
//! assert_eq!(registry.code("MOVED_PERMANENTLY"), Some(301));
//! ```
//!
//! The two queries deliberately disagree on what they accept.
//! [`StatusRegistry::get_reason`] is a validated lookup: the input must be exactly an integer, and
//! that integer must be an assigned code.
//! [`StatusRegistry::is_success`] is a plain range check over whatever integer the input starts
//! with, and never fails.
//!
//! # Quirks
//!
//! - `207` has two names, [`status::PARTIAL_UPDATE_OK`] and [`status::MULTI_STATUS`]. Both
//!   resolve to the phrase "Multi-Status".
//! - `306` is reserved by the registry but unused. It has no constant, and looking it up yields
//!   [`Error::ReservedCode`] rather than [`Error::UnassignedCode`].

mod class;
mod error;
mod input;
mod registry;
pub mod status;

pub use class::StatusClass;
pub use error::Error;
pub use input::CodeInput;
pub use registry::StatusRegistry;
pub use status::StatusEntry;
