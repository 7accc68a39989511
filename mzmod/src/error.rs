//! The [`RegistryError`] which makes it easy for downstream users of the error type to match on the exact error.

use context_error::ErrorKind;
use serde::{Deserialize, Serialize};

/// All errors that can be raised by the modification registry.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RegistryError {
    /// The registry file could not be opened
    #[default]
    FileCouldNotBeOpened,
    /// The registry file could not be created
    FileCouldNotBeMade,
    /// The registry file did not contain a valid registry
    FileCouldNotBeParsed,
    /// The registry could not be written to the file
    FileCouldNotBeWritten,
    /// The folder to store the registry in could not be created
    FolderCouldNotBeMade,
    /// The registry file was written by an incompatible version
    IncompatibleVersion,
    /// A default modification cannot be removed
    DefaultModificationRemoval,
    /// The modification is not known to the registry
    UnknownModification,
    /// No folder could be found to store the registry in
    NoStorageFolder,
}

impl ErrorKind for RegistryError {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        "error"
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        true
    }
}
