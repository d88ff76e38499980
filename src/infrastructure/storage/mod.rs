mod flat_file_key_store;
mod local_filesystem_store;
mod path_builder;

pub use flat_file_key_store::FlatFileKeyStore;
pub use local_filesystem_store::LocalFilesystemStore;
pub use path_builder::PathBuilder;
