//! Delivery-address business logic.
//!
//! All operations act on the caller's own addresses; the repository scopes
//! every query by user id.

use crate::api::common::validation_errors_to_service_error;
use crate::database::models::{Address, CreateAddress};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::address_repository::AddressRepository;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

pub struct AddressService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> AddressService<'a> {
    /// Creates a new AddressService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds an address for the user.
    pub async fn add_address(
        &self,
        user_id: &str,
        create_address: CreateAddress,
    ) -> ServiceResult<Address> {
        if let Err(validation_errors) = create_address.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let repo = AddressRepository::new(self.pool);
        let address = repo
            .create_address(Uuid::now_v7().to_string(), user_id, create_address)
            .await?;

        Ok(address)
    }

    /// Lists the user's addresses.
    pub async fn get_addresses(&self, user_id: &str) -> ServiceResult<Vec<Address>> {
        let repo = AddressRepository::new(self.pool);
        Ok(repo.get_addresses_by_user(user_id).await?)
    }

    /// Overwrites one of the user's addresses.
    pub async fn update_address(
        &self,
        user_id: &str,
        address_id: &str,
        create_address: CreateAddress,
    ) -> ServiceResult<Address> {
        if let Err(validation_errors) = create_address.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let repo = AddressRepository::new(self.pool);
        repo.update_address(user_id, address_id, create_address)
            .await?
            .ok_or_else(|| ServiceError::not_found("Address", address_id))
    }

    /// Deletes one of the user's addresses.
    pub async fn delete_address(&self, user_id: &str, address_id: &str) -> ServiceResult<()> {
        let repo = AddressRepository::new(self.pool);

        if !repo.delete_address(user_id, address_id).await? {
            return Err(ServiceError::not_found("Address", address_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::RegisterRequest;
    use crate::database::test_pool;
    use crate::services::user_service::UserService;

    async fn seed_user(pool: &SqlitePool, email: &str) -> String {
        UserService::new(pool)
            .register_user(RegisterRequest {
                user_name: "alice".to_string(),
                email: email.to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    fn home() -> CreateAddress {
        CreateAddress {
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            pincode: "12345".to_string(),
            phone: "555-0100".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn addresses_are_scoped_to_their_owner() {
        let pool = test_pool().await;
        let service = AddressService::new(&pool);

        let alice = seed_user(&pool, "a@x.com").await;
        let bob = seed_user(&pool, "b@x.com").await;

        let created = service.add_address(&alice, home()).await.unwrap();
        assert_eq!(service.get_addresses(&alice).await.unwrap().len(), 1);
        assert!(service.get_addresses(&bob).await.unwrap().is_empty());

        // Bob cannot touch Alice's address.
        assert!(service
            .update_address(&bob, &created.id, home())
            .await
            .is_err());
        assert!(service.delete_address(&bob, &created.id).await.is_err());

        let mut edit = home();
        edit.city = "Shelbyville".to_string();
        let updated = service
            .update_address(&alice, &created.id, edit)
            .await
            .unwrap();
        assert_eq!(updated.city, "Shelbyville");

        service.delete_address(&alice, &created.id).await.unwrap();
        assert!(service.get_addresses(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_fields_fail_validation() {
        let pool = test_pool().await;
        let service = AddressService::new(&pool);
        let alice = seed_user(&pool, "a@x.com").await;

        let mut bad = home();
        bad.city = String::new();
        let err = service.add_address(&alice, bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}
