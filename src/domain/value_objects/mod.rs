mod content_hash;
mod public_id;
mod stored_name;

pub use content_hash::ContentHash;
pub use public_id::{PublicId, MIN_PUBLIC_ID_LENGTH};
pub use stored_name::{extension_of, StoredName};
