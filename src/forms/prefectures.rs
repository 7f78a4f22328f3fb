use serde::Deserialize;
use validator::Validate;

use crate::domain::prefecture::{NewPrefecture, StoreCountScope};
use crate::domain::region::AreaStatus;
use crate::domain::types::{AreaCode, AreaName, KanaName, RegionId};
use crate::forms::{FormError, field_error, non_blank};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrefectureForm {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(length(min = 1, max = 2))]
    pub code: String,
    #[validate(length(min = 1, max = 40))]
    pub kana_name: String,
    pub status: AreaStatus,
    #[validate(length(min = 1, max = 40))]
    pub kana_en: String,
    /// Code of the region the prefecture belongs to.
    #[validate(length(max = 2))]
    pub region_code: Option<String>,
}

pub struct CreatePrefecturePayload {
    pub code: AreaCode,
    pub name: AreaName,
    pub kana_name: KanaName,
    pub kana_en: KanaName,
    pub status: AreaStatus,
    pub region_code: Option<AreaCode>,
}

impl TryFrom<CreatePrefectureForm> for CreatePrefecturePayload {
    type Error = FormError;

    fn try_from(form: CreatePrefectureForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            code: AreaCode::new(form.code).map_err(field_error("code"))?,
            name: AreaName::new(form.name).map_err(field_error("name"))?,
            kana_name: KanaName::new(form.kana_name).map_err(field_error("kanaName"))?,
            kana_en: KanaName::new(form.kana_en).map_err(field_error("kanaEn"))?,
            status: form.status,
            region_code: non_blank(form.region_code)
                .map(AreaCode::new)
                .transpose()
                .map_err(field_error("regionCode"))?,
        })
    }
}

impl CreatePrefecturePayload {
    pub fn into_domain(self, region_id: Option<RegionId>) -> NewPrefecture {
        NewPrefecture::new(
            self.code,
            self.name,
            self.kana_name,
            self.kana_en,
            self.status,
            region_id,
        )
    }
}

/// Query string of `GET /prefectures/with-store-count`.
#[derive(Debug, Default, Deserialize)]
pub struct StoreCountParams {
    #[serde(default)]
    pub scope: StoreCountScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(code: &str) -> CreatePrefectureForm {
        CreatePrefectureForm {
            name: "東京都".to_string(),
            code: code.to_string(),
            kana_name: "トウキョウト".to_string(),
            status: AreaStatus::Published,
            kana_en: "tokyo".to_string(),
            region_code: Some(" ".to_string()),
        }
    }

    #[test]
    fn code_longer_than_two_characters_is_rejected() {
        assert!(matches!(
            CreatePrefecturePayload::try_from(form("130")),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn blank_region_code_is_ignored() {
        let payload = CreatePrefecturePayload::try_from(form("13")).unwrap();
        assert!(payload.region_code.is_none());
    }
}
