use context_error::BoxedError;

use crate::{
    RegistryError,
    chemistry::IonRegistries,
    registry::{ModificationRegistry, StorageLocation},
};

/// Owns the registry of an application together with the neutral loss and reporter ion
/// registries and the place where it is stored. The registry is loaded on first use.
#[derive(Debug)]
pub struct RegistryStore {
    location: StorageLocation,
    ions: IonRegistries,
    registry: Option<ModificationRegistry>,
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new(StorageLocation::default())
    }
}

impl RegistryStore {
    /// Create a store for the given location, nothing is loaded yet
    pub fn new(location: StorageLocation) -> Self {
        Self {
            location,
            ions: IonRegistries::default(),
            registry: None,
        }
    }

    /// The storage location
    pub const fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Get the registry, loading it if this is the first access since creation or the last
    /// [`Self::reload`]. Any errors while loading are logged and the default registry is used.
    pub fn get(&mut self) -> &mut ModificationRegistry {
        self.registry_and_ions().0
    }

    /// Check if the registry is currently loaded
    pub const fn is_loaded(&self) -> bool {
        self.registry.is_some()
    }

    /// Replace the registry with one containing only the default modifications
    pub fn clear(&mut self) {
        self.registry = Some(ModificationRegistry::new());
    }

    /// Forget the registry, the next [`Self::get`] loads it again from disk
    pub fn reload(&mut self) {
        self.registry = None;
    }

    /// Save the registry to the storage location, if the registry was never loaded it is
    /// loaded first.
    /// # Errors
    /// If there is no storage location or the file could not be written.
    pub fn save(&mut self) -> Result<(), BoxedError<'static, RegistryError>> {
        let path = self.location.path()?;
        self.get().save_to_file(&path)
    }

    /// The neutral losses and reporter ions
    pub const fn ions(&self) -> &IonRegistries {
        &self.ions
    }

    /// The neutral losses and reporter ions, mutable
    pub const fn ions_mut(&mut self) -> &mut IonRegistries {
        &mut self.ions
    }

    /// Get both the registry and the neutral losses and reporter ions, as needed for
    /// [`ModificationRegistry::add_user_modification`]. The registry is loaded if needed.
    pub fn registry_and_ions(&mut self) -> (&mut ModificationRegistry, &mut IonRegistries) {
        let Self {
            location,
            ions,
            registry,
        } = self;
        let registry = registry.get_or_insert_with(|| load(location, ions));
        (registry, ions)
    }
}

fn load(location: &StorageLocation, ions: &mut IonRegistries) -> ModificationRegistry {
    match location.path() {
        Ok(path) => ModificationRegistry::init(&path, ions).0,
        Err(error) => {
            tracing::warn!("{error}");
            ModificationRegistry::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let folder = tempfile::tempdir().unwrap();
        let mut store = RegistryStore::new(StorageLocation::with_folder(folder.path()));
        assert!(!store.is_loaded());
        assert!(store.get().contains("Oxidation of M"));
        assert!(store.is_loaded());
        store.reload();
        assert!(!store.is_loaded());
        store.clear();
        assert!(store.is_loaded());
        store.save().unwrap();
        assert!(store.location().path().unwrap().exists());
    }
}
