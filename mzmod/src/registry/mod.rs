//! The [`ModificationRegistry`] with everything needed to manage it: the built in catalog,
//! colours, reconciling backed up search parameters, translating PRIDE names, storing the
//! registry on disk, and the [`RegistryStore`] handle that ties it together for an application.

mod backup;
mod catalog;
mod color;
mod persistence;
mod pride;
mod registry;
mod store;
mod substitutions;

pub use color::Color;
pub use persistence::{FORMAT_VERSION, StorageLocation};
pub use pride::{Assumed, PrideMapping, pride_mapping};
pub use registry::ModificationRegistry;
pub use store::RegistryStore;
