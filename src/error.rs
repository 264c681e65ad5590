use thiserror::Error;

use crate::metadata::tables::TypeUsageIndex;

macro_rules! corruption_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::MetadataCorruption {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::MetadataCorruption {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which covers every failure this library can report.
///
/// # Error Categories
///
/// - [`Error::MetadataCorruption`] - An index into one of the metadata tables is out of its
///   declared bounds, or the referenced data is invalid. The package handed to this crate is
///   inconsistent with itself; the operation is not retried.
/// - [`Error::UnresolvedTypeReference`] - A type usage could not be mapped to a type. This can
///   happen while a model is only partially built and is recoverable by resolving again later.
/// - [`Error::RecursionLimit`] - Nested type usages exceeded the configured depth.
///
/// A parameter that claims a default value without a recorded one is *not* an error; it is
/// represented as an absent value on the descriptor.
///
/// # Examples
///
/// ```rust
/// use il2scope::{Error, metadata::package::PackageBuilder};
///
/// let package = PackageBuilder::new().build()?;
/// match package.string_at(4096) {
///     Ok(name) => println!("name: {name}"),
///     Err(Error::MetadataCorruption { message, .. }) => println!("corrupt: {message}"),
///     Err(e) => println!("other: {e}"),
/// }
/// # Ok::<(), il2scope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The metadata package is internally inconsistent.
    ///
    /// Raised when a table index lies outside the declared table bounds or the data it points
    /// to cannot be decoded. The source location where the inconsistency was detected is kept
    /// for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of the inconsistency
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Metadata corruption - {file}:{line}: {message}")]
    MetadataCorruption {
        /// The message to be printed for the corruption error
        message: String,
        /// The source file in which this error occurred
        file: &'static str,
        /// The source line in which this error occurred
        line: u32,
    },

    /// A type usage could not be mapped to a type.
    ///
    /// Unlike [`Error::MetadataCorruption`] this does not imply a broken package; the owning
    /// member may have been dropped, or the model may not yet know the referenced type.
    #[error("Unresolved type usage {usage} - {reason}")]
    UnresolvedTypeReference {
        /// The type usage index that failed to resolve
        usage: TypeUsageIndex,
        /// Why resolution failed
        reason: String,
    },

    /// Recursion limit reached while resolving nested type usages.
    ///
    /// The associated value is the limit that was exceeded.
    #[error("Reached the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}
