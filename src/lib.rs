//! # hashdrop - deduplicating file drop
//!
//! Clients POST a file, the server hashes it, stores each distinct content
//! once and answers with a short public URL. Stored files are served back
//! under `/storage/<name>`.
//!
//! ## Architecture Layers
//!
//! - **Domain**: value objects (content hash, public ID, stored name)
//! - **Application**: use cases and ports (interfaces)
//! - **Infrastructure**: flat-file adapters and the hashids ID generator
//! - **API**: HTTP handlers and middleware
//!
//! ## On-disk layout
//!
//! ```text
//! <root>/keys            upload keys, one per line
//! <root>/files/<name>    stored files, <id><ext>
//! <root>/hashes/<hex>    one entry per distinct content, holding the file name
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use hashdrop::{api::create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let state = ApplicationBuilder::new(config)
//!     .with_infrastructure()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::value_objects;
