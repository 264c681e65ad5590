//! Custom attributes applied to parameters.
//!
//! Attributes are rendered inline in front of a parameter declaration, e.g.
//! `[CallerMemberName] string caller`. The attribute decoder itself lives outside this crate;
//! parameters only query it through the [`AttributeSource`] seam. [`CustomAttributeTable`] is
//! an in-memory implementation, filled by whatever decoded the attribute data.
//!
//! # Examples
//!
//! ```rust
//! use il2scope::prelude::*;
//!
//! let attribute = CustomAttribute::new("System.Runtime.CompilerServices", "CallerMemberNameAttribute");
//! assert_eq!(attribute.to_inline_string(), "[CallerMemberName]");
//!
//! let mut table = CustomAttributeTable::default();
//! table.insert(3, attribute);
//! assert_eq!(table.len(), 1);
//! ```

mod table;
mod types;

pub use table::*;
pub use types::*;
