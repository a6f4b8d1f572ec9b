//! Tactical loadouts: preset kits and the custom loadout builder

use crate::core::{ConfigurationError, FieldKind, FieldValue, Record, RecordSchema, SortDirection};
use crate::define_category;
use crate::entities::CatalogRecord;
use serde::{Deserialize, Serialize};

define_category! {
    /// Operating environment a loadout is packed for
    pub enum Terrain {
        Urban => "urban",
        Desert => "desert",
        Jungle => "jungle",
        Arctic => "arctic",
    }
}

define_category! {
    /// Mission profile a loadout is packed for
    pub enum Mission {
        Assault => "assault",
        Recon => "recon",
        Support => "support",
    }
}

define_category! {
    pub enum ItemKind {
        Weapon => "weapon",
        Armor => "armor",
        Gear => "gear",
    }
}

/// A single piece of equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl LoadoutItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Equipment catalog items can be picked from
    pub fn catalog() -> Vec<LoadoutItem> {
        vec![
            LoadoutItem::new("w1", "M4A1 Carbine", ItemKind::Weapon),
            LoadoutItem::new("w2", "Glock 19", ItemKind::Weapon),
            LoadoutItem::new("a1", "Kevlar Vest", ItemKind::Armor),
            LoadoutItem::new("a2", "Ballistic Helmet", ItemKind::Armor),
            LoadoutItem::new("g1", "Night Vision Goggles", ItemKind::Gear),
            LoadoutItem::new("g2", "Tactical Radio", ItemKind::Gear),
            LoadoutItem::new("g3", "First Aid Kit", ItemKind::Gear),
            LoadoutItem::new("g4", "Tactical Headset", ItemKind::Gear),
        ]
    }
}

/// A preset loadout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<LoadoutItem>,
    pub terrain: Terrain,
    pub mission: Mission,
}

impl Loadout {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        terrain: Terrain,
        mission: Mission,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            terrain,
            mission,
        }
    }

    pub fn with_items(mut self, items: Vec<LoadoutItem>) -> Self {
        self.items = items;
        self
    }
}

impl Record for Loadout {
    fn record_type() -> &'static str {
        "loadout"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::String(self.name.clone())),
            "description" => Some(FieldValue::String(self.description.clone())),
            "terrain" => Some(self.terrain.into()),
            "mission" => Some(self.mission.into()),
            "item_count" => Some(FieldValue::Integer(self.items.len() as i64)),
            _ => None,
        }
    }
}

impl CatalogRecord for Loadout {
    fn list_name() -> &'static str {
        "loadouts"
    }

    fn schema() -> Result<RecordSchema, ConfigurationError> {
        RecordSchema::builder(Self::record_type())
            .searchable("name")
            .searchable("description")
            .category::<Terrain>("terrain")
            .category::<Mission>("mission")
            .sortable("name", FieldKind::Text)
            .sortable("terrain", FieldKind::Category)
            .sortable("mission", FieldKind::Category)
            .sortable("item_count", FieldKind::Number)
            .default_sort("id", SortDirection::Ascending)
            .build()
    }

    fn fixtures() -> Vec<Self> {
        let catalog = LoadoutItem::catalog();
        let pick = |indices: &[usize]| -> Vec<LoadoutItem> {
            indices
                .iter()
                .filter_map(|&i| catalog.get(i).cloned())
                .collect()
        };

        vec![
            Loadout::new(
                "1",
                "Urban Assault",
                "Optimized for close-quarters combat in urban environments",
                Terrain::Urban,
                Mission::Assault,
            )
            .with_items(pick(&[0, 1, 2, 3, 5, 6])),
            Loadout::new(
                "2",
                "Desert Recon",
                "Lightweight setup for long-range reconnaissance in arid conditions",
                Terrain::Desert,
                Mission::Recon,
            )
            .with_items(pick(&[0, 1, 2, 4, 5, 7])),
            Loadout::new(
                "3",
                "Jungle Support",
                "Versatile loadout for providing support in dense jungle terrain",
                Terrain::Jungle,
                Mission::Support,
            )
            .with_items(pick(&[0, 1, 2, 3, 4, 5, 6])),
            Loadout::new(
                "4",
                "Arctic Assault",
                "Heavy-duty setup for assault operations in extreme cold conditions",
                Terrain::Arctic,
                Mission::Assault,
            )
            .with_items(pick(&[0, 1, 2, 3, 4, 5, 6, 7])),
        ]
    }
}

/// A loadout assembled item by item
///
/// Each item appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLoadout {
    items: Vec<LoadoutItem>,
}

impl CustomLoadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset's items
    pub fn from_preset(preset: &Loadout) -> Self {
        let mut loadout = Self::new();
        for item in &preset.items {
            loadout.add(item.clone());
        }
        loadout
    }

    /// Add an item; returns false if it was already in the loadout
    pub fn add(&mut self, item: LoadoutItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item by id; returns false if it was not in the loadout
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        self.items.len() != before
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.id == item_id)
    }

    pub fn items(&self) -> &[LoadoutItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|i| i.kind == kind).count()
    }
}
