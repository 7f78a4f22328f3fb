use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::labels::{store_status_label, weekday_label};
use crate::domain::prefecture::Prefecture;
use crate::domain::types::{
    Address, BusinessHours, Email, KanaName, PhoneNumber, PrefectureId, StoreId, StoreName,
    TypeConstraintError, UserId, ZipCode,
};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Published,
    #[default]
    Editing,
    Suspended,
}

impl StoreStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            StoreStatus::Published => "published",
            StoreStatus::Editing => "editing",
            StoreStatus::Suspended => "suspended",
        }
    }

    pub fn label(self) -> &'static str {
        store_status_label(self.as_str())
    }
}

impl Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StoreStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "published" => Ok(StoreStatus::Published),
            "editing" => Ok(StoreStatus::Editing),
            "suspended" => Ok(StoreStatus::Suspended),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown store status `{other}`"
            ))),
        }
    }
}

/// Day of the week a store may be closed on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "SUNDAY",
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
        }
    }

    pub fn label(self) -> &'static str {
        weekday_label(self.as_str())
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Weekday {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown weekday `{value}`")))
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Store {
    pub id: StoreId,
    pub name: StoreName,
    pub kana_name: Option<KanaName>,
    pub status: StoreStatus,
    pub zip_code: Option<ZipCode>,
    pub email: Email,
    pub address: Option<Address>,
    pub phone_number: PhoneNumber,
    pub business_hours: Option<BusinessHours>,
    /// Closing days in the order they were submitted.
    pub holidays: Vec<Weekday>,
    pub user_id: UserId,
    pub prefecture_id: Option<PrefectureId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A store joined with its prefecture, when it has one.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreWithPrefecture {
    pub store: Store,
    pub prefecture: Option<Prefecture>,
}

#[derive(Clone, Debug)]
pub struct NewStore {
    pub id: StoreId,
    pub name: StoreName,
    pub kana_name: Option<KanaName>,
    pub status: StoreStatus,
    pub zip_code: Option<ZipCode>,
    pub email: Email,
    pub address: Option<Address>,
    pub phone_number: PhoneNumber,
    pub business_hours: Option<BusinessHours>,
    pub holidays: Vec<Weekday>,
    pub user_id: UserId,
    pub prefecture_id: Option<PrefectureId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_tokens_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::try_from(day.as_str()), Ok(day));
        }
        assert!(Weekday::try_from("monday").is_err());
    }

    #[test]
    fn typed_labels_match_raw_labels() {
        assert_eq!(StoreStatus::Published.label(), "営業中");
        assert_eq!(StoreStatus::Suspended.label(), "閉店");
        assert_eq!(Weekday::Saturday.label(), "土");
    }
}
