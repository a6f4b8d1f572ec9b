//! Record types of the Communication Centre list pages

pub mod commendation;
pub mod loadout;
pub mod macros;
pub mod order;
pub mod rank;

pub use commendation::{Commendation, CommendationCategory};
pub use loadout::{CustomLoadout, ItemKind, Loadout, LoadoutItem, Mission, Terrain};
pub use order::{Order, OrderStatus, OrderType};
pub use rank::{Rank, RankProgress};

use crate::core::{ConfigurationError, Record, RecordSchema};

/// A record type with a list page of its own
pub trait CatalogRecord: Record {
    /// Name of the list page (e.g., "orders")
    fn list_name() -> &'static str;

    /// Searchable, category and sortable fields of this record type
    fn schema() -> Result<RecordSchema, ConfigurationError>;

    /// Static rows shown when no backend is connected
    fn fixtures() -> Vec<Self>;
}
