use serde::Deserialize;
use validator::Validate;

use crate::domain::region::{AreaStatus, NewRegion};
use crate::domain::types::{AreaCode, AreaName, KanaName, UserId};
use crate::forms::{FormError, field_error};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionForm {
    #[validate(length(min = 1, max = 2))]
    pub code: String,
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(length(min = 1, max = 40))]
    pub kana_name: String,
    #[validate(length(min = 1, max = 40))]
    pub kana_en: String,
    pub status: AreaStatus,
}

pub struct CreateRegionPayload {
    pub code: AreaCode,
    pub name: AreaName,
    pub kana_name: KanaName,
    pub kana_en: KanaName,
    pub status: AreaStatus,
}

impl TryFrom<CreateRegionForm> for CreateRegionPayload {
    type Error = FormError;

    fn try_from(form: CreateRegionForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            code: AreaCode::new(form.code).map_err(field_error("code"))?,
            name: AreaName::new(form.name).map_err(field_error("name"))?,
            kana_name: KanaName::new(form.kana_name).map_err(field_error("kanaName"))?,
            kana_en: KanaName::new(form.kana_en).map_err(field_error("kanaEn"))?,
            status: form.status,
        })
    }
}

impl CreateRegionPayload {
    pub fn into_domain(self, created_by: UserId) -> NewRegion {
        NewRegion::new(
            self.code,
            self.name,
            self.kana_name,
            self.kana_en,
            self.status,
            Some(created_by),
        )
    }
}
