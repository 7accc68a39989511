//! Storing and loading a [`ModificationRegistry`].
//! The registry is stored as JSON, files with the extension `.gz` are gzip compressed.

use std::{
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use context_error::{BoxedError, Context, CreateError};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::{RegistryError, chemistry::IonRegistries, registry::ModificationRegistry};

/// The version of the stored format, files with any other version are rejected
pub const FORMAT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct Header {
    version: u32,
}

#[derive(Deserialize, Serialize)]
struct Snapshot<R> {
    version: u32,
    registry: R,
}

fn file_error(
    kind: RegistryError,
    short: &'static str,
    error: impl ToString,
    path: &Path,
) -> BoxedError<'static, RegistryError> {
    BoxedError::new(
        kind,
        short,
        error.to_string(),
        Context::none().source(path.to_string_lossy()).to_owned(),
    )
}

fn is_compressed(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

impl ModificationRegistry {
    /// Load a registry from a file.
    /// # Errors
    /// If the file could not be opened or read, does not contain a registry, or was written with
    /// a different format version.
    pub fn load_from_file(path: &Path) -> Result<Self, BoxedError<'static, RegistryError>> {
        let file = std::fs::File::open(path).map_err(|e| {
            file_error(
                RegistryError::FileCouldNotBeOpened,
                "Modification registry file could not be opened",
                e,
                path,
            )
        })?;
        let mut text = String::new();
        if is_compressed(path) {
            flate2::bufread::GzDecoder::new(BufReader::new(file)).read_to_string(&mut text)
        } else {
            BufReader::new(file).read_to_string(&mut text)
        }
        .map_err(|e| {
            file_error(
                RegistryError::FileCouldNotBeOpened,
                "Modification registry file could not be read",
                e,
                path,
            )
        })?;

        let header: Header = serde_json::from_str(&text).map_err(|e| {
            file_error(
                RegistryError::FileCouldNotBeParsed,
                "Modification registry file could not be parsed",
                e,
                path,
            )
        })?;
        if header.version != FORMAT_VERSION {
            return Err(file_error(
                RegistryError::IncompatibleVersion,
                "Incompatible modification registry file",
                format!(
                    "The file has format version {} while version {FORMAT_VERSION} is supported",
                    header.version
                ),
                path,
            ));
        }
        let snapshot: Snapshot<Self> = serde_json::from_str(&text).map_err(|e| {
            file_error(
                RegistryError::FileCouldNotBeParsed,
                "Modification registry file could not be parsed",
                e,
                path,
            )
        })?;
        tracing::debug!(
            "Loaded {} modifications from {}",
            snapshot.registry.len(),
            path.display()
        );
        Ok(snapshot.registry)
    }

    /// Store this registry in a file, the parent folder is created if needed.
    /// # Errors
    /// If the folder or file could not be created or written to.
    pub fn save_to_file(&self, path: &Path) -> Result<(), BoxedError<'static, RegistryError>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                file_error(
                    RegistryError::FolderCouldNotBeMade,
                    "Modification registry folder could not be made",
                    e,
                    parent,
                )
            })?;
        }
        let file = std::fs::File::create(path).map_err(|e| {
            file_error(
                RegistryError::FileCouldNotBeMade,
                "Modification registry file could not be made",
                e,
                path,
            )
        })?;
        let snapshot = Snapshot {
            version: FORMAT_VERSION,
            registry: self,
        };
        let write_error = |e: &dyn ToString| {
            file_error(
                RegistryError::FileCouldNotBeWritten,
                "Modification registry could not be written",
                e.to_string(),
                path,
            )
        };
        if is_compressed(path) {
            let mut encoder = flate2::write::GzEncoder::new(
                BufWriter::new(file),
                flate2::Compression::default(),
            );
            serde_json::to_writer(&mut encoder, &snapshot).map_err(|e| write_error(&e))?;
            encoder
                .finish()
                .and_then(|mut writer| writer.flush())
                .map_err(|e| write_error(&e))?;
        } else {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &snapshot).map_err(|e| write_error(&e))?;
            writer.flush().map_err(|e| write_error(&e))?;
        }
        tracing::debug!("Saved {} modifications to {}", self.len(), path.display());
        Ok(())
    }

    /// Load a registry from a file, if the file does not exist the default registry is returned.
    /// # Errors
    /// If the file exists but could not be loaded, see [`Self::load_from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, BoxedError<'static, RegistryError>> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(
                "No modification registry at {}, using the defaults",
                path.display()
            );
            Ok(Self::new())
        }
    }

    /// Initialise the registry, the first successful source from the list is used:
    /// 1. Load from the given path.
    /// 2. The default registry.
    ///
    /// Afterwards the neutral losses and reporter ions of all user modifications are registered.
    /// All errors encountered on the way are returned.
    pub fn init(
        path: &Path,
        ions: &mut IonRegistries,
    ) -> (Self, Vec<BoxedError<'static, RegistryError>>) {
        let mut errors = Vec::new();
        let registry = match Self::load_or_default(path) {
            Ok(registry) => registry,
            Err(error) => {
                tracing::warn!(
                    "Could not load the modification registry, falling back to the defaults: {error}"
                );
                errors.push(error);
                Self::new()
            }
        };
        registry.register_user_ions(ions);
        (registry, errors)
    }
}

/// The location where a registry is stored
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageLocation {
    folder: Option<PathBuf>,
}

impl Default for StorageLocation {
    /// The data folder of the user, or the home folder if that is not available
    fn default() -> Self {
        let folder = ProjectDirs::from("org", "rusteomics", "mzcore")
            .map(|p| p.data_dir().to_owned())
            .or_else(|| BaseDirs::new().map(|b| b.home_dir().to_owned()));
        Self { folder }
    }
}

impl StorageLocation {
    /// Store in the given folder
    pub fn with_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: Some(folder.into()),
        }
    }

    /// The folder, if any could be found
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// The name of the file, this contains the version of this crate
    pub fn file_name() -> String {
        format!("modification_registry-{}.json", env!("CARGO_PKG_VERSION"))
    }

    /// The full path of the registry file.
    /// # Errors
    /// If no folder is set and no default folder could be found.
    pub fn path(&self) -> Result<PathBuf, BoxedError<'static, RegistryError>> {
        self.folder
            .as_ref()
            .map(|folder| folder.join(Self::file_name()))
            .ok_or_else(|| {
                BoxedError::new(
                    RegistryError::NoStorageFolder,
                    "No folder to store the modification registry",
                    "Neither a data folder nor a home folder could be found for this user",
                    Context::none(),
                )
            })
    }
}
