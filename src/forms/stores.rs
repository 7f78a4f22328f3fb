use serde::Deserialize;
use validator::Validate;

use crate::domain::store::{NewStore, StoreStatus, Weekday};
use crate::domain::types::{
    Address, AreaCode, BusinessHours, Email, KanaName, PhoneNumber, PrefectureId, StoreId,
    StoreName, UserId, ZipCode,
};
use crate::forms::{FormError, field_error, non_blank, unique_items};
use crate::repository::{SortDirection, StoreFilter, StoreSortField};

fn unique_weekdays(holidays: &[Weekday]) -> Result<(), validator::ValidationError> {
    unique_items(holidays)
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreForm {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(length(max = 40))]
    pub kana_name: Option<String>,
    pub status: StoreStatus,
    #[validate(length(max = 8))]
    pub zip_code: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub address: Option<String>,
    #[validate(length(max = 2))]
    pub prefecture_code: Option<String>,
    #[validate(length(min = 1, max = 13))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 100))]
    pub business_hours: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "unique_weekdays"))]
    pub holidays: Vec<Weekday>,
}

pub struct CreateStorePayload {
    pub name: StoreName,
    pub kana_name: Option<KanaName>,
    pub status: StoreStatus,
    pub zip_code: Option<ZipCode>,
    pub email: Email,
    pub address: Option<Address>,
    pub prefecture_code: Option<AreaCode>,
    pub phone_number: PhoneNumber,
    pub business_hours: Option<BusinessHours>,
    pub holidays: Vec<Weekday>,
}

impl TryFrom<CreateStoreForm> for CreateStorePayload {
    type Error = FormError;

    fn try_from(form: CreateStoreForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            name: StoreName::new(form.name).map_err(field_error("name"))?,
            kana_name: non_blank(form.kana_name)
                .map(KanaName::new)
                .transpose()
                .map_err(field_error("kanaName"))?,
            status: form.status,
            zip_code: non_blank(form.zip_code)
                .map(ZipCode::new)
                .transpose()
                .map_err(field_error("zipCode"))?,
            email: Email::new(form.email).map_err(field_error("email"))?,
            address: non_blank(form.address)
                .map(Address::new)
                .transpose()
                .map_err(field_error("address"))?,
            prefecture_code: non_blank(form.prefecture_code)
                .map(AreaCode::new)
                .transpose()
                .map_err(field_error("prefectureCode"))?,
            phone_number: PhoneNumber::new(form.phone_number)
                .map_err(field_error("phoneNumber"))?,
            business_hours: form
                .business_hours
                .map(BusinessHours::new)
                .transpose()
                .map_err(field_error("businessHours"))?,
            holidays: form.holidays,
        })
    }
}

impl CreateStorePayload {
    pub fn into_domain(self, owner: UserId, prefecture_id: Option<PrefectureId>) -> NewStore {
        NewStore {
            id: StoreId::new(),
            name: self.name,
            kana_name: self.kana_name,
            status: self.status,
            zip_code: self.zip_code,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            business_hours: self.business_hours,
            holidays: self.holidays,
            user_id: owner,
            prefecture_id,
        }
    }
}

/// Query string of `GET /stores`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoreListParams {
    #[validate(length(max = 40))]
    pub name: Option<String>,
    pub status: Option<StoreStatus>,
    #[validate(length(max = 2))]
    pub prefecture_code: Option<String>,
    #[validate(length(max = 2))]
    pub region_code: Option<String>,
    pub sort_by: Option<StoreSortField>,
    pub sort_order: Option<SortDirection>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl From<StoreListParams> for StoreFilter {
    fn from(params: StoreListParams) -> Self {
        Self {
            name: params.name,
            status: params.status,
            prefecture_code: params.prefecture_code,
            region_code: params.region_code,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            page: params.page,
            size: params.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateStoreForm {
        CreateStoreForm {
            name: "Cafe Mori".to_string(),
            kana_name: Some(String::new()),
            status: StoreStatus::Published,
            zip_code: None,
            email: "mori@example.com".to_string(),
            address: None,
            prefecture_code: Some("13".to_string()),
            phone_number: "03-1234-5678".to_string(),
            business_hours: Some("10:00〜20:00".to_string()),
            holidays: vec![Weekday::Monday, Weekday::Sunday],
        }
    }

    #[test]
    fn valid_form_converts_to_payload() {
        let payload = CreateStorePayload::try_from(form()).unwrap();
        assert!(payload.kana_name.is_none());
        assert_eq!(payload.prefecture_code.unwrap().as_str(), "13");
        assert_eq!(payload.holidays, vec![Weekday::Monday, Weekday::Sunday]);
    }

    #[test]
    fn duplicate_holidays_are_rejected() {
        let mut form = form();
        form.holidays = vec![Weekday::Monday, Weekday::Monday];
        assert!(matches!(
            CreateStorePayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn empty_business_hours_are_rejected() {
        let mut form = form();
        form.business_hours = Some(String::new());
        assert!(CreateStorePayload::try_from(form).is_err());
    }

    #[test]
    fn unknown_holiday_token_fails_to_deserialize() {
        let body = r#"{"name":"A","status":"published","email":"a@example.com",
            "phoneNumber":"1","holidays":["HOLIDAY"]}"#;
        assert!(serde_json::from_str::<CreateStoreForm>(body).is_err());
    }

    #[test]
    fn list_params_map_onto_filter() {
        let params = StoreListParams {
            name: Some("Cafe".to_string()),
            sort_by: Some(StoreSortField::Name),
            size: Some(-3),
            ..Default::default()
        };
        let filter = StoreFilter::from(params);
        assert_eq!(filter.name.as_deref(), Some("Cafe"));
        assert_eq!(filter.sort_by, Some(StoreSortField::Name));
        assert_eq!(filter.size, Some(-3));
    }
}
