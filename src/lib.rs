//! Kenall Models
//!
//! Typed records for the kenall registry API (postal codes, cities,
//! holidays, corporate registry, banks, qualified invoice issuers) across
//! every published wire-schema version.
//!
//! ## Features
//!
//! - **Strict Models**: one module per schema version mirroring its wire shape exactly
//! - **Canonical Records**: a single version-tolerant shape per entity family
//! - **Version Inference**: structural probes when the caller does not pin a version
//! - **Structural Transforms**: corporate address flattening, branch reshaping
//!
//! ## Architecture
//!
//! ```text
//! raw JSON ──► resolve (explicit or inferred version)
//!                │
//!                ├── pinned ──► models::vYYYY_MM_DD  (Decoded::Strict)
//!                │
//!                └── inferred ──► transform ──► compat  (Decoded::Canonical)
//! ```

pub mod compat;
pub mod config;
pub mod entity;
pub mod error;
pub mod facets;
pub mod factory;
pub mod models;
pub mod presence;
pub mod resolve;
pub mod transform;
pub mod version;

pub use compat::Normalize;
pub use config::{ModelsConfig, OutputFormat};
pub use entity::Entity;
pub use error::{ModelError, Result};
pub use facets::{FacetBucket, FacetDimension, NTACorporateInfoFacetResults};
pub use factory::{
    create_address_resolver_response, create_address_searcher_response,
    create_bank_branch_resolver_response, create_bank_branches_response,
    create_bank_resolver_response, create_banks_response, create_city_resolver_response,
    create_corporate_info_resolver_response, create_corporate_info_searcher_response,
    create_holiday_search_result, create_invoice_issuer_resolver_response, decode, render,
    DecodeMode, Decoded, ResponseKind,
};
pub use models::{Pinned, StrictModel};
pub use presence::Presence;
pub use resolve::Probe;
pub use version::SchemaVersion;
