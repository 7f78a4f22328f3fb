use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use log::warn;

use crate::domain::store::{NewStore as DomainNewStore, Store as DomainStore, Weekday};
use crate::domain::types::{
    Address, BusinessHours, KanaName, PrefectureId, TypeConstraintError, ZipCode,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::stores)]
/// Diesel model for [`crate::domain::store::Store`].
pub struct Store {
    pub id: String,
    pub name: String,
    pub kana_name: Option<String>,
    pub status: String,
    pub zip_code: Option<String>,
    pub email: String,
    pub address: Option<String>,
    pub phone_number: String,
    pub business_hours: Option<String>,
    /// JSON array of weekday tokens.
    pub holidays: String,
    pub user_id: String,
    pub prefecture_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::stores)]
/// Insertable form of [`Store`].
pub struct NewStore<'a> {
    pub id: String,
    pub name: &'a str,
    pub kana_name: Option<&'a str>,
    pub status: &'a str,
    pub zip_code: Option<&'a str>,
    pub email: &'a str,
    pub address: Option<&'a str>,
    pub phone_number: &'a str,
    pub business_hours: Option<&'a str>,
    pub holidays: String,
    pub user_id: String,
    pub prefecture_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Decodes the stored holiday column, skipping tokens that are not weekdays.
fn decode_holidays(raw: &str) -> Result<Vec<Weekday>, TypeConstraintError> {
    let tokens: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("holidays: {e}")))?;
    Ok(tokens
        .iter()
        .filter_map(|token| match Weekday::try_from(token.as_str()) {
            Ok(day) => Some(day),
            Err(_) => {
                warn!("Skipping unknown holiday token `{token}`");
                None
            }
        })
        .collect())
}

fn encode_holidays(holidays: &[Weekday]) -> String {
    let tokens: Vec<&str> = holidays.iter().map(|day| day.as_str()).collect();
    serde_json::to_string(&tokens).unwrap_or_else(|_| "[]".to_string())
}

impl TryFrom<Store> for DomainStore {
    type Error = TypeConstraintError;

    fn try_from(db: Store) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id.as_str().try_into()?,
            name: db.name.try_into()?,
            kana_name: db.kana_name.map(KanaName::new).transpose()?,
            status: db.status.as_str().try_into()?,
            zip_code: db.zip_code.map(ZipCode::new).transpose()?,
            email: db.email.try_into()?,
            address: db.address.map(Address::new).transpose()?,
            phone_number: db.phone_number.try_into()?,
            business_hours: db.business_hours.map(BusinessHours::new).transpose()?,
            holidays: decode_holidays(&db.holidays)?,
            user_id: db.user_id.as_str().try_into()?,
            prefecture_id: db.prefecture_id.map(PrefectureId::try_from).transpose()?,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewStore> for NewStore<'a> {
    fn from(store: &'a DomainNewStore) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: store.id.to_string(),
            name: store.name.as_str(),
            kana_name: store.kana_name.as_ref().map(|v| v.as_str()),
            status: store.status.as_str(),
            zip_code: store.zip_code.as_ref().map(|v| v.as_str()),
            email: store.email.as_str(),
            address: store.address.as_ref().map(|v| v.as_str()),
            phone_number: store.phone_number.as_str(),
            business_hours: store.business_hours.as_ref().map(|v| v.as_str()),
            holidays: encode_holidays(&store.holidays),
            user_id: store.user_id.to_string(),
            prefecture_id: store.prefecture_id.map(String::from),
            created_at: now,
            updated_at: now,
        }
    }
}
