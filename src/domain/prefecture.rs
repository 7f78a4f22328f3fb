use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::region::AreaStatus;
use crate::domain::types::{AreaCode, AreaName, KanaName, PrefectureId, RegionId};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Prefecture {
    pub id: PrefectureId,
    pub code: AreaCode,
    pub name: AreaName,
    pub kana_name: KanaName,
    pub kana_en: KanaName,
    pub status: AreaStatus,
    pub region_id: Option<RegionId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewPrefecture {
    pub id: PrefectureId,
    pub code: AreaCode,
    pub name: AreaName,
    pub kana_name: KanaName,
    pub kana_en: KanaName,
    pub status: AreaStatus,
    pub region_id: Option<RegionId>,
}

impl NewPrefecture {
    #[must_use]
    pub fn new(
        code: AreaCode,
        name: AreaName,
        kana_name: KanaName,
        kana_en: KanaName,
        status: AreaStatus,
        region_id: Option<RegionId>,
    ) -> Self {
        Self {
            id: PrefectureId::new(),
            code,
            name,
            kana_name,
            kana_en,
            status,
            region_id,
        }
    }
}

/// Which stores contribute to [`PrefectureWithStoreCount::store_count`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreCountScope {
    /// Every store regardless of status.
    All,
    /// Only stores whose status is `published`.
    #[default]
    Published,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrefectureWithStoreCount {
    pub prefecture: Prefecture,
    pub store_count: usize,
}
