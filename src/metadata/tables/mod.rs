//! IL2CPP metadata tables
//!
//! Each table lives in its own module and follows the same dual-variant pattern:
//! - `*Raw`: the row as decoded by the file format parser, with unresolved indexes
//! - the owned variant (where one exists): indexes resolved against a
//!   [`crate::metadata::package::Package`] and ready for queries
//!
//! All cross references are plain signed 32-bit indices into the flat tables, with `-1` as the
//! "none" sentinel wherever the format allows one.

mod genericparam;
mod method;
mod param;
mod typedef;
mod typeusage;

pub use genericparam::*;
pub use method::*;
pub use param::*;
pub use typedef::*;
pub use typeusage::*;

/// Byte offset into the string table
pub type StringIndex = u32;
/// Index into the type definition table
pub type TypeDefinitionIndex = i32;
/// Index into the type usage table
pub type TypeUsageIndex = i32;
/// Index into the flat parameter definition table; `-1` denotes a return value
pub type ParameterIndex = i32;
/// Index into the method definition table
pub type MethodIndex = i32;
/// Index into the generic container table
pub type GenericContainerIndex = i32;
/// Index into the generic parameter table
pub type GenericParameterIndex = i32;

/// Converts a signed table index into a `usize`, rejecting negative values
///
/// ## Arguments
/// * 'index' - The signed index as stored in the metadata
/// * 'table' - Table name, used in the error message
///
/// # Errors
/// Returns [`crate::Error::MetadataCorruption`] if the index is negative
pub(crate) fn table_index(index: i32, table: &str) -> crate::Result<usize> {
    usize::try_from(index)
        .map_err(|_| corruption_error!("Negative index {} into the {} table", index, table))
}
