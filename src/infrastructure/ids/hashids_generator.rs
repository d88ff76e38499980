use chrono::{DateTime, Utc};
use harsh::Harsh;

use crate::application::ports::{IdError, IdGenerator};
use crate::domain::value_objects::{PublicId, MIN_PUBLIC_ID_LENGTH};

/// Hashids encoding of the upload time.
///
/// The encoded value is `unix_seconds << 32 | subsec_nanos`, so IDs stay
/// short but differ between uploads landing in the same second. No check is
/// made against existing files.
pub struct HashidsGenerator {
    harsh: Harsh,
}

impl HashidsGenerator {
    pub fn new() -> Result<Self, IdError> {
        let harsh = Harsh::builder()
            .length(MIN_PUBLIC_ID_LENGTH)
            .build()
            .map_err(|e| IdError::Build(e.to_string()))?;

        Ok(Self { harsh })
    }

    pub fn generate_at(&self, now: DateTime<Utc>) -> Result<PublicId, IdError> {
        let encoded = self.harsh.encode(&[time_value(now)]);
        Ok(PublicId::new(encoded)?)
    }
}

fn time_value(now: DateTime<Utc>) -> u64 {
    let seconds = now.timestamp().max(0) as u64;
    (seconds << 32) | u64::from(now.timestamp_subsec_nanos())
}

impl IdGenerator for HashidsGenerator {
    fn generate(&self) -> Result<PublicId, IdError> {
        self.generate_at(Utc::now())
    }
}
