//! Commendations (badges) earned by a member

use crate::core::{ConfigurationError, FieldKind, FieldValue, Record, RecordSchema, SortDirection};
use crate::define_category;
use crate::entities::CatalogRecord;
use serde::{Deserialize, Serialize};

define_category! {
    pub enum CommendationCategory {
        Performance => "performance",
        Achievement => "achievement",
        Service => "service",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commendation {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Award date as `YYYY-MM-DD`
    pub date_earned: String,
    pub category: CommendationCategory,
}

impl Commendation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        date_earned: impl Into<String>,
        category: CommendationCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            date_earned: date_earned.into(),
            category,
        }
    }
}

impl Record for Commendation {
    fn record_type() -> &'static str {
        "commendation"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::String(self.name.clone())),
            "description" => Some(FieldValue::String(self.description.clone())),
            "date_earned" => Some(FieldValue::String(self.date_earned.clone())),
            "category" => Some(self.category.into()),
            _ => None,
        }
    }
}

impl CatalogRecord for Commendation {
    fn list_name() -> &'static str {
        "commendations"
    }

    fn schema() -> Result<RecordSchema, ConfigurationError> {
        RecordSchema::builder(Self::record_type())
            .searchable("name")
            .searchable("description")
            .category::<CommendationCategory>("category")
            .sortable("name", FieldKind::Text)
            .sortable("date_earned", FieldKind::Date)
            .default_sort("date_earned", SortDirection::Descending)
            .build()
    }

    fn fixtures() -> Vec<Self> {
        use CommendationCategory::*;

        vec![
            Commendation::new("1", "Sharpshooter", "Achieved exceptional accuracy in marksmanship training.", "2023-05-15", Achievement),
            Commendation::new("2", "First Responder", "Demonstrated quick thinking and action in emergency situations.", "2023-06-22", Performance),
            Commendation::new("3", "Team Leader", "Successfully led a team through high-pressure scenarios.", "2023-07-10", Achievement),
            Commendation::new("4", "Tactical Excellence", "Displayed superior tactical decision-making in combat simulations.", "2023-08-05", Performance),
            Commendation::new("5", "Endurance Star", "Completed a grueling 72-hour field exercise with distinction.", "2023-09-18", Achievement),
            Commendation::new("6", "Rapid Deployment", "Consistently achieved rapid response times in deployment drills.", "2023-10-30", Performance),
            Commendation::new("7", "Combat Medic", "Demonstrated exceptional medical skills in simulated combat scenarios.", "2023-11-15", Service),
            Commendation::new("8", "Strategic Planner", "Developed innovative strategies that improved team performance.", "2023-12-07", Achievement),
        ]
    }
}
