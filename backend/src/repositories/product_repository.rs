//! Database repository for catalog products.
//!
//! Provides CRUD operations for products plus the filtered/sorted listing
//! and keyword search used by the storefront.

use crate::api::product::models::{ProductFilter, SortBy};
use crate::database::models::{CreateProduct, Product};
use anyhow::Result;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const PRODUCT_COLUMNS: &str = "id, image, title, description, category, brand, price, \
     sale_price, total_stock, average_review, created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new product in the catalog.
    pub async fn create_product(&self, id: String, product: CreateProduct) -> Result<Product> {
        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products
                (id, image, title, description, category, brand, price, sale_price,
                 total_stock, average_review, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(product.image)
        .bind(product.title)
        .bind(product.description)
        .bind(product.category)
        .bind(product.brand)
        .bind(product.price)
        .bind(product.sale_price)
        .bind(product.total_stock)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites a product's editable fields.
    ///
    /// # Returns
    /// The updated product, or `None` when the id is unknown.
    pub async fn update_product(
        &self,
        id: &str,
        product: CreateProduct,
    ) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET image = ?, title = ?, description = ?, category = ?, brand = ?,
                price = ?, sale_price = ?, total_stock = ?, updated_at = ?
            WHERE id = ?
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.image)
        .bind(product.title)
        .bind(product.description)
        .bind(product.category)
        .bind(product.brand)
        .bind(product.price)
        .bind(product.sale_price)
        .bind(product.total_stock)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Deletes a product together with the cart lines and reviews that
    /// reference it. Past orders keep their snapshot rows.
    ///
    /// # Returns
    /// `true` when a product row was removed.
    pub async fn delete_product(&self, id: &str) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cart_items WHERE product_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM reviews WHERE product_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Retrieves a product by its unique identifier.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Lists every product, newest first (admin view).
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Lists products matching the storefront filter, with the total count
    /// for pagination.
    pub async fn list_filtered(&self, filter: &ProductFilter) -> Result<(Vec<Product>, u64)> {
        let mut count_query: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM products");
        Self::push_filters(&mut count_query, filter);
        let total: i64 = count_query.build_query_scalar().fetch_one(self.pool).await?;

        let mut query: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        Self::push_filters(&mut query, filter);

        let order_by = match filter.sort_by.unwrap_or_default() {
            SortBy::PriceLowToHigh => " ORDER BY COALESCE(sale_price, price) ASC",
            SortBy::PriceHighToLow => " ORDER BY COALESCE(sale_price, price) DESC",
            SortBy::TitleAToZ => " ORDER BY title COLLATE NOCASE ASC",
            SortBy::TitleZToA => " ORDER BY title COLLATE NOCASE DESC",
        };
        query.push(order_by);

        let pagination = filter.pagination();
        query.push(" LIMIT ");
        query.push_bind(pagination.limit() as i64);
        query.push(" OFFSET ");
        query.push_bind(pagination.offset() as i64);

        let products = query.build_query_as().fetch_all(self.pool).await?;

        Ok((products, total as u64))
    }

    /// Keyword search across title, description, category, and brand.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>> {
        let pattern = format!("%{}%", keyword);

        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE title LIKE ? OR description LIKE ? OR category LIKE ? OR brand LIKE ?
            ORDER BY title COLLATE NOCASE ASC
            "#
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    fn push_filters(query: &mut QueryBuilder<'_, Sqlite>, filter: &ProductFilter) {
        let mut prefix = " WHERE ";

        if let Some(categories) = &filter.category {
            query.push(prefix);
            query.push("category IN (");
            let mut separated = query.separated(", ");
            for category in categories {
                separated.push_bind(category.clone());
            }
            query.push(")");
            prefix = " AND ";
        }

        if let Some(brands) = &filter.brand {
            query.push(prefix);
            query.push("brand IN (");
            let mut separated = query.separated(", ");
            for brand in brands {
                separated.push_bind(brand.clone());
            }
            query.push(")");
        }
    }
}
