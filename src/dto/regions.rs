use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::region::{AreaStatus, Region};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub kana_name: String,
    pub kana_en: String,
    pub status: AreaStatus,
    pub status_label: &'static str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Region> for RegionResponse {
    fn from(region: Region) -> Self {
        Self {
            id: region.id.to_string(),
            code: region.code.into_inner(),
            name: region.name.into_inner(),
            kana_name: region.kana_name.into_inner(),
            kana_en: region.kana_en.into_inner(),
            status: region.status,
            status_label: region.status.label(),
            created_at: region.created_at,
            updated_at: region.updated_at,
        }
    }
}
