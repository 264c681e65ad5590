//! String table of IL2CPP metadata
//!
//! Provides access to the identifier string table of `global-metadata.dat`, which stores
//! nul-terminated UTF-8 strings addressed by their byte offset from the start of the table.

use std::ffi::CStr;

use crate::Result;

/// The string table holds identifiers which are referenced from the other metadata tables,
/// e.g. type names, namespaces, method names and parameter names.
///
/// `Strings` is a borrowed view; the bytes are owned by the [`crate::metadata::package::Package`].
///
/// # Examples
///
/// ```rust
/// use il2scope::metadata::streams::Strings;
/// let data = &[0u8, b'v', b'a', b'l', b'u', b'e', 0u8];
/// let strings = Strings::from(data).unwrap();
/// assert_eq!(strings.get(1).unwrap(), "value");
/// ```
#[derive(Clone, Copy)]
pub struct Strings<'a> {
    data: &'a [u8],
}

impl<'a> Strings<'a> {
    /// Create a `Strings` view over a sequence of bytes
    ///
    /// # Arguments
    /// * 'data'    - The byte slice from which this object shall be created
    ///
    /// # Errors
    /// Returns an error if the table is empty or does not start with the empty string
    pub fn from(data: &'a [u8]) -> Result<Strings<'a>> {
        if data.is_empty() || data[0] != 0 {
            return Err(corruption_error!("Provided string table is empty"));
        }

        Ok(Strings { data })
    }

    /// Get the string starting at the provided offset
    ///
    /// ## Arguments
    /// * 'index' - The offset within the table (comes from the metadata tables)
    ///
    /// # Errors
    /// Returns an error if the offset is out of bounds, the string is not terminated or is not
    /// valid UTF-8
    pub fn get(&self, index: usize) -> Result<&'a str> {
        if index >= self.data.len() {
            return Err(corruption_error!(
                "String index {} exceeds string table size {}",
                index,
                self.data.len()
            ));
        }

        match CStr::from_bytes_until_nul(&self.data[index..]) {
            Ok(result) => match result.to_str() {
                Ok(result) => Ok(result),
                Err(_) => Err(corruption_error!("Invalid string at index - {}", index)),
            },
            Err(_) => Err(corruption_error!("Unterminated string at index - {}", index)),
        }
    }
}
