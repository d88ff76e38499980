pub mod health;
pub mod landing;
pub mod upload;


pub use health::health_handler;
pub use landing::{landing_handler, method_unsupported_handler};
pub use upload::upload_handler;
