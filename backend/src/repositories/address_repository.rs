//! Database repository for delivery addresses.
//!
//! Every operation is scoped by the owning user id; a mismatched owner
//! behaves exactly like a missing row.

use crate::database::models::{Address, CreateAddress};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

const ADDRESS_COLUMNS: &str =
    "id, user_id, address, city, pincode, phone, notes, created_at, updated_at";

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> AddressRepository<'a> {
    /// Creates a new AddressRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new address for a user.
    pub async fn create_address(
        &self,
        id: String,
        user_id: &str,
        address: CreateAddress,
    ) -> Result<Address> {
        let now = Utc::now();

        let address = sqlx::query_as::<_, Address>(&format!(
            r#"
            INSERT INTO addresses (id, user_id, address, city, pincode, phone, notes,
                                   created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(address.address)
        .bind(address.city)
        .bind(address.pincode)
        .bind(address.phone)
        .bind(address.notes)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(address)
    }

    /// Lists a user's addresses, oldest first.
    pub async fn get_addresses_by_user(&self, user_id: &str) -> Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE user_id = ? ORDER BY created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }

    /// Retrieves one of a user's addresses.
    pub async fn get_address(&self, user_id: &str, address_id: &str) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = ? AND user_id = ?"
        ))
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(address)
    }

    /// Overwrites one of a user's addresses.
    ///
    /// # Returns
    /// The updated address, or `None` when the user owns no such row.
    pub async fn update_address(
        &self,
        user_id: &str,
        address_id: &str,
        address: CreateAddress,
    ) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(&format!(
            r#"
            UPDATE addresses
            SET address = ?, city = ?, pincode = ?, phone = ?, notes = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING {ADDRESS_COLUMNS}
            "#
        ))
        .bind(address.address)
        .bind(address.city)
        .bind(address.pincode)
        .bind(address.phone)
        .bind(address.notes)
        .bind(Utc::now())
        .bind(address_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(address)
    }

    /// Deletes one of a user's addresses.
    ///
    /// # Returns
    /// `false` when the user owns no such row.
    pub async fn delete_address(&self, user_id: &str, address_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ? AND user_id = ?")
            .bind(address_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
