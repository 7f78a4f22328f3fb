//! Store use cases, including the filtered and paginated listing.

use validator::Validate;

use crate::domain::store::StoreWithPrefecture;
use crate::domain::types::StoreId;
use crate::forms::stores::{CreateStoreForm, CreateStorePayload, StoreListParams};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Page;
use crate::repository::{PrefectureReader, StoreListQuery, StoreReader, StoreWriter};
use crate::services::{ServiceError, ServiceResult};

/// Runs the store listing described by `params`.
pub fn list_stores<R>(repo: &R, params: StoreListParams) -> ServiceResult<Page<StoreWithPrefecture>>
where
    R: StoreReader + ?Sized,
{
    params.validate()?;

    let query = StoreListQuery::from_filter(params.into());
    let (total, stores) = repo.list_stores(&query)?;

    Ok(Page::new(stores, total, query.window))
}

pub fn get_store<R>(repo: &R, id: StoreId) -> ServiceResult<StoreWithPrefecture>
where
    R: StoreReader + ?Sized,
{
    repo.get_store_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Store {id} does not exist.")))
}

/// Creates a store owned by the caller. An unknown `prefectureCode` aborts
/// before anything is written.
pub fn create_store<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateStoreForm,
) -> ServiceResult<StoreWithPrefecture>
where
    R: StoreWriter + PrefectureReader + ?Sized,
{
    let payload = CreateStorePayload::try_from(form)?;

    let prefecture = match &payload.prefecture_code {
        Some(code) => Some(repo.get_prefecture_by_code(code)?.ok_or_else(|| {
            ServiceError::NotFound(format!(
                "The specified prefectureCode does not exist. prefectureCode: {code}"
            ))
        })?),
        None => None,
    };

    let new_store = payload.into_domain(user.id, prefecture.as_ref().map(|p| p.id));
    let store = repo.create_store(&new_store)?;

    log::info!("User {} created store {}", user.id, store.id);
    Ok(StoreWithPrefecture { store, prefecture })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::store::{NewStore, Store, StoreStatus, Weekday};
    use crate::domain::types::UserId;
    use crate::domain::user::UserStatus;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::repository::{SortDirection, StoreSortField};

    fn caller() -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId::new(),
            name: "Taro".to_string(),
            status: UserStatus::Premium,
        }
    }

    fn form(prefecture_code: Option<&str>) -> CreateStoreForm {
        CreateStoreForm {
            name: "Cafe Mori".to_string(),
            kana_name: None,
            status: StoreStatus::Published,
            zip_code: None,
            email: "mori@example.com".to_string(),
            address: None,
            prefecture_code: prefecture_code.map(str::to_string),
            phone_number: "03-1234-5678".to_string(),
            business_hours: None,
            holidays: vec![Weekday::Wednesday],
        }
    }

    fn stored(new_store: &NewStore) -> Store {
        let now = Utc::now().naive_utc();
        Store {
            id: new_store.id,
            name: new_store.name.clone(),
            kana_name: new_store.kana_name.clone(),
            status: new_store.status,
            zip_code: new_store.zip_code.clone(),
            email: new_store.email.clone(),
            address: new_store.address.clone(),
            phone_number: new_store.phone_number.clone(),
            business_hours: new_store.business_hours.clone(),
            holidays: new_store.holidays.clone(),
            user_id: new_store.user_id,
            prefecture_id: new_store.prefecture_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unknown_prefecture_code_aborts_without_insert() {
        let mut repo = MockRepository::new();
        repo.expect_get_prefecture_by_code().returning(|_| Ok(None));
        repo.expect_create_store().never();

        match create_store(&repo, &caller(), form(Some("99"))) {
            Err(ServiceError::NotFound(message)) => {
                assert!(message.contains("prefectureCode: 99"))
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn store_without_prefecture_skips_lookup() {
        let user = caller();
        let mut repo = MockRepository::new();
        repo.expect_get_prefecture_by_code().never();
        repo.expect_create_store()
            .returning(|new_store| Ok(stored(new_store)));

        let created = create_store(&repo, &user, form(None)).unwrap();
        assert_eq!(created.store.user_id, user.id);
        assert!(created.prefecture.is_none());
        assert_eq!(created.store.holidays, vec![Weekday::Wednesday]);
    }

    #[test]
    fn listing_clamps_window_and_reports_meta() {
        let mut repo = MockRepository::new();
        repo.expect_list_stores()
            .withf(|query| {
                query.window.size() == 100
                    && query.window.page() == 1
                    && query.order.field == StoreSortField::Name
                    && query.order.direction == SortDirection::Desc
            })
            .returning(|_| Ok((250, Vec::new())));

        let params = StoreListParams {
            sort_by: Some(StoreSortField::Name),
            sort_order: Some(SortDirection::Desc),
            page: Some(0),
            size: Some(1000),
            ..Default::default()
        };
        let page = list_stores(&repo, params).unwrap();
        assert_eq!((page.total_count, page.page, page.size), (250, 1, 100));
    }

    #[test]
    fn listing_propagates_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_stores()
            .returning(|_| Err(RepositoryError::ConnectionError("pool exhausted".into())));

        assert!(matches!(
            list_stores(&repo, StoreListParams::default()),
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn missing_store_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_store_by_id().returning(|_| Ok(None));
        assert!(matches!(
            get_store(&repo, StoreId::new()),
            Err(ServiceError::NotFound(_))
        ));
    }
}
