//! # Wolfpack Portal
//!
//! List pages for the Wolfpack Defence member portal: orders, tactical
//! loadouts and commendations, each searchable, filterable by category and
//! sortable by column.
//!
//! ## Features
//!
//! - **One generic engine**: [`QueryEngine`](core::QueryEngine) is parameterized
//!   by a [`RecordSchema`](core::RecordSchema) instead of being rewritten per page
//! - **Closed categories**: category fields are enums; unknown values are
//!   rejected before any record is examined
//! - **Deterministic ordering**: sorts are stable, with ties broken by record id
//! - **Injected backends**: pages load through [`RecordSource`](core::RecordSource)
//!   handles passed to [`Portal::new`](portal::Portal::new)
//! - **Configuration-Based**: list definitions can be loaded from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wolfpack::prelude::*;
//!
//! let portal = Portal::with_fixtures();
//! let loadouts = portal.loadouts().await?;
//!
//! let view = loadouts.view(
//!     &Query::new()
//!         .search("assault")
//!         .filter("terrain", "urban")
//!         .sort("name", SortDirection::Ascending),
//! )?;
//!
//! if view.has_no_matches() {
//!     println!("No loadouts match your filters");
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod portal;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Query engine ===
    pub use crate::core::{
        Category, CategoryFilter, ConfigurationError, DynamicRecord, FieldKind, FieldValue,
        ListView, PaginatedResponse, PaginationMeta, PortalError, Query, QueryEngine, QueryParams,
        Record, RecordComparator, RecordPredicate, RecordSchema, RecordSource, RecordStore,
        SortDirection,
    };

    // === Macros ===
    pub use crate::define_category;

    // === Entities ===
    pub use crate::entities::{
        CatalogRecord, Commendation, CommendationCategory, CustomLoadout, ItemKind, Loadout,
        LoadoutItem, Mission, Order, OrderStatus, OrderType, Rank, RankProgress, Terrain,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryRecordSource, JsonRecordSource};

    // === Config ===
    pub use crate::config::{ListDefinition, ListsConfig};

    // === Portal ===
    pub use crate::portal::{ListPage, Portal};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
