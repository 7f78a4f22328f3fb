use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::labels::area_status_label;
use crate::domain::types::{AreaCode, AreaName, KanaName, RegionId, TypeConstraintError, UserId};

/// Publication state shared by regions and prefectures.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    #[default]
    Published,
    Suspended,
}

impl AreaStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            AreaStatus::Published => "published",
            AreaStatus::Suspended => "suspended",
        }
    }

    pub fn label(self) -> &'static str {
        area_status_label(self.as_str())
    }
}

impl Display for AreaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AreaStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "published" => Ok(AreaStatus::Published),
            "suspended" => Ok(AreaStatus::Suspended),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown area status `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub code: AreaCode,
    pub name: AreaName,
    pub kana_name: KanaName,
    pub kana_en: KanaName,
    pub status: AreaStatus,
    /// User who registered the region, if any.
    pub user_id: Option<UserId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewRegion {
    pub id: RegionId,
    pub code: AreaCode,
    pub name: AreaName,
    pub kana_name: KanaName,
    pub kana_en: KanaName,
    pub status: AreaStatus,
    pub user_id: Option<UserId>,
}

impl NewRegion {
    #[must_use]
    pub fn new(
        code: AreaCode,
        name: AreaName,
        kana_name: KanaName,
        kana_en: KanaName,
        status: AreaStatus,
        user_id: Option<UserId>,
    ) -> Self {
        Self {
            id: RegionId::new(),
            code,
            name,
            kana_name,
            kana_en,
            status,
            user_id,
        }
    }
}
