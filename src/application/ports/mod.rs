mod blob_store;
mod id_generator;
mod key_store;

pub use blob_store::{BlobStore, StorageError};
pub use id_generator::{IdError, IdGenerator};
pub use key_store::{KeyStore, KeyStoreError};

#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use id_generator::MockIdGenerator;
#[cfg(test)]
pub use key_store::MockKeyStore;
