//! Prefecture use cases.

use crate::domain::prefecture::{Prefecture, PrefectureWithStoreCount, StoreCountScope};
use crate::domain::types::AreaCode;
use crate::forms::prefectures::{CreatePrefectureForm, CreatePrefecturePayload};
use crate::repository::{PrefectureReader, PrefectureWriter, RegionReader};
use crate::services::{ServiceError, ServiceResult};

pub fn list_prefectures<R>(repo: &R) -> ServiceResult<Vec<Prefecture>>
where
    R: PrefectureReader + ?Sized,
{
    Ok(repo.list_prefectures()?)
}

/// Lists every prefecture with the number of stores counted under `scope`.
pub fn list_prefectures_with_store_count<R>(
    repo: &R,
    scope: StoreCountScope,
) -> ServiceResult<Vec<PrefectureWithStoreCount>>
where
    R: PrefectureReader + ?Sized,
{
    Ok(repo.list_prefectures_with_store_count(scope)?)
}

pub fn get_prefecture_by_code<R>(repo: &R, code: &str) -> ServiceResult<Prefecture>
where
    R: PrefectureReader + ?Sized,
{
    let not_found =
        || ServiceError::NotFound(format!("Prefecture with code {code} does not exist."));
    let code = AreaCode::new(code).map_err(|_| not_found())?;
    repo.get_prefecture_by_code(&code)?.ok_or_else(not_found)
}

/// Creates a prefecture, resolving its optional region code first.
pub fn create_prefecture<R>(repo: &R, form: CreatePrefectureForm) -> ServiceResult<Prefecture>
where
    R: PrefectureWriter + RegionReader + ?Sized,
{
    let payload = CreatePrefecturePayload::try_from(form)?;

    let region_id = match &payload.region_code {
        Some(code) => {
            let region = repo.get_region_by_code(code)?.ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "The specified regionCode does not exist. regionCode: {code}"
                ))
            })?;
            Some(region.id)
        }
        None => None,
    };

    let new_prefecture = payload.into_domain(region_id);
    Ok(repo.create_prefecture(&new_prefecture)?)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::region::{AreaStatus, Region};
    use crate::domain::types::{AreaName, KanaName, PrefectureId, RegionId};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn form(region_code: Option<&str>) -> CreatePrefectureForm {
        CreatePrefectureForm {
            name: "東京都".to_string(),
            code: "13".to_string(),
            kana_name: "トウキョウト".to_string(),
            status: AreaStatus::Published,
            kana_en: "tokyo".to_string(),
            region_code: region_code.map(str::to_string),
        }
    }

    fn region(code: &str) -> Region {
        let now = Utc::now().naive_utc();
        Region {
            id: RegionId::new(),
            code: AreaCode::new(code).unwrap(),
            name: AreaName::new("関東").unwrap(),
            kana_name: KanaName::new("カントウ").unwrap(),
            kana_en: KanaName::new("kanto").unwrap(),
            status: AreaStatus::Published,
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unknown_region_code_stops_before_insert() {
        let mut repo = MockRepository::new();
        repo.expect_get_region_by_code().returning(|_| Ok(None));
        repo.expect_create_prefecture().never();

        match create_prefecture(&repo, form(Some("99"))) {
            Err(ServiceError::NotFound(message)) => assert!(message.contains("99")),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn known_region_code_is_linked() {
        let kanto = region("03");
        let region_id = kanto.id;
        let mut repo = MockRepository::new();
        repo.expect_get_region_by_code()
            .returning(move |_| Ok(Some(kanto.clone())));
        repo.expect_create_prefecture().returning(move |new| {
            assert_eq!(new.region_id, Some(region_id));
            let now = Utc::now().naive_utc();
            Ok(Prefecture {
                id: PrefectureId::new(),
                code: new.code.clone(),
                name: new.name.clone(),
                kana_name: new.kana_name.clone(),
                kana_en: new.kana_en.clone(),
                status: new.status,
                region_id: new.region_id,
                created_at: now,
                updated_at: now,
            })
        });

        let created = create_prefecture(&repo, form(Some("03"))).unwrap();
        assert_eq!(created.region_id, Some(region_id));
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_prefecture().returning(|_| {
            Err(RepositoryError::Conflict {
                fields: vec!["code".to_string()],
            })
        });

        assert!(matches!(
            create_prefecture(&repo, form(None)),
            Err(ServiceError::Conflict(_))
        ));
    }
}
