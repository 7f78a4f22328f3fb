use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::store::{StoreStatus, StoreWithPrefecture, Weekday};
use crate::dto::prefectures::PrefectureResponse;
use crate::pagination::Page;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kana_name: Option<String>,
    pub status: StoreStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<Weekday>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays_label: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<PrefectureResponse>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<StoreWithPrefecture> for StoreResponse {
    fn from(value: StoreWithPrefecture) -> Self {
        let StoreWithPrefecture { store, prefecture } = value;

        // An empty holiday list is omitted like any other absent value.
        let holidays = Some(store.holidays).filter(|days| !days.is_empty());
        let holidays_label = holidays
            .as_ref()
            .map(|days| days.iter().map(|day| day.label()).collect());

        Self {
            id: store.id.to_string(),
            name: store.name.into_inner(),
            kana_name: store.kana_name.map(|v| v.into_inner()),
            status: store.status,
            status_label: store.status.label(),
            zip_code: store.zip_code.map(|v| v.into_inner()),
            email: store.email.into_inner(),
            address: store.address.map(|v| v.into_inner()),
            phone_number: store.phone_number.into_inner(),
            business_hours: store.business_hours.map(|v| v.into_inner()),
            holidays,
            holidays_label,
            prefecture: prefecture.map(PrefectureResponse::from),
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: usize,
    pub page: usize,
    pub size: usize,
}

/// Body of `GET /stores`: `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Serialize)]
pub struct StoreListResponse {
    pub data: Vec<StoreResponse>,
    pub meta: PageMeta,
}

impl From<Page<StoreWithPrefecture>> for StoreListResponse {
    fn from(page: Page<StoreWithPrefecture>) -> Self {
        let page = page.map(StoreResponse::from);
        Self {
            meta: PageMeta {
                total_count: page.total_count,
                page: page.page,
                size: page.size,
            },
            data: page.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::store::Store;
    use crate::domain::types::{Email, PhoneNumber, StoreId, StoreName, UserId};
    use crate::pagination::PageWindow;

    fn bare_store(holidays: Vec<Weekday>) -> StoreWithPrefecture {
        let now = Utc::now().naive_utc();
        StoreWithPrefecture {
            store: Store {
                id: StoreId::new(),
                name: StoreName::new("Cafe Mori").unwrap(),
                kana_name: None,
                status: StoreStatus::Suspended,
                zip_code: None,
                email: Email::new("mori@example.com").unwrap(),
                address: None,
                phone_number: PhoneNumber::new("03-1234-5678").unwrap(),
                business_hours: None,
                holidays,
                user_id: UserId::new(),
                prefecture_id: None,
                created_at: now,
                updated_at: now,
            },
            prefecture: None,
        }
    }

    #[test]
    fn absent_values_are_omitted() {
        let body = serde_json::to_value(StoreResponse::from(bare_store(vec![]))).unwrap();
        let object = body.as_object().unwrap();
        for key in [
            "kanaName",
            "zipCode",
            "address",
            "businessHours",
            "holidays",
            "holidaysLabel",
            "prefecture",
        ] {
            assert!(!object.contains_key(key), "{key} should be omitted");
        }
        assert_eq!(body["statusLabel"], "閉店");
    }

    #[test]
    fn holidays_carry_labels_in_order() {
        let body = serde_json::to_value(StoreResponse::from(bare_store(vec![
            Weekday::Saturday,
            Weekday::Sunday,
        ])))
        .unwrap();
        assert_eq!(body["holidays"], json!(["SATURDAY", "SUNDAY"]));
        assert_eq!(body["holidaysLabel"], json!(["土", "日"]));
    }

    #[test]
    fn list_response_nests_meta() {
        let page = Page::new(vec![bare_store(vec![])], 41, PageWindow::new(Some(3), Some(20)));
        let body = serde_json::to_value(StoreListResponse::from(page)).unwrap();
        assert_eq!(body["meta"], json!({"totalCount": 41, "page": 3, "size": 20}));
        assert!(matches!(&body["data"], Value::Array(items) if items.len() == 1));
    }
}
