use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::prefecture::{Prefecture, PrefectureWithStoreCount};
use crate::domain::region::AreaStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefectureResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub kana_name: String,
    pub kana_en: String,
    pub status: AreaStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Prefecture> for PrefectureResponse {
    fn from(prefecture: Prefecture) -> Self {
        Self {
            id: prefecture.id.to_string(),
            code: prefecture.code.into_inner(),
            name: prefecture.name.into_inner(),
            kana_name: prefecture.kana_name.into_inner(),
            kana_en: prefecture.kana_en.into_inner(),
            status: prefecture.status,
            status_label: prefecture.status.label(),
            region_id: prefecture.region_id.map(String::from),
            created_at: prefecture.created_at,
            updated_at: prefecture.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefectureWithStoreCountResponse {
    #[serde(flatten)]
    pub prefecture: PrefectureResponse,
    pub store_count: usize,
}

impl From<PrefectureWithStoreCount> for PrefectureWithStoreCountResponse {
    fn from(value: PrefectureWithStoreCount) -> Self {
        Self {
            prefecture: value.prefecture.into(),
            store_count: value.store_count,
        }
    }
}
