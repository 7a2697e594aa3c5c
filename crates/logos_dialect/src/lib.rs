//! # logos_dialect
//!
//! Theos/Logos dialect support for logos-format.
//!
//! clang-format does not understand Logos directives such as `%hook`,
//! `%orig` or `%end`. This crate masks them into Objective-C at-keyword
//! tokens before formatting and restores them afterwards.
//!
//! # Example
//!
//! ```rust
//! use logos_dialect::{mask, unmask};
//!
//! let source = "%hook SpringBoard\n%end\n";
//! let masked = mask(source);
//! assert_eq!(masked.content, "@logosformathook SpringBoard;\n@logosformatend;\n");
//!
//! let restored = unmask(&masked.content, &masked.markers).unwrap();
//! assert_eq!(restored, source);
//! ```

pub mod directive;
pub mod error;
pub mod mask;
pub mod source;

pub use directive::{Directive, DirectiveScope};
pub use error::{DialectError, DialectResult};
pub use mask::{choose_sigil, mask, unmask, DialectMarker, MarkerSet, MaskedSource, SIGIL_BASE};
pub use source::{SourceKind, LOGOS_EXTENSIONS};
