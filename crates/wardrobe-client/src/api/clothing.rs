//! Clothing endpoints: item CRUD, wear records, categories, tags and
//! statistics.

use std::collections::BTreeMap;

use reqwest::Method;
use url::form_urlencoded;
use validator::Validate;
use wardrobe_types::clothing::{
    CategoryNode, CategorySummary, ClothingItem, ClothingItemQuery, ClothingItemSummary,
    ClothingStats, CreatedItem, NewClothingItem, NewWearRecord, Tag, UpdateClothingItem,
};
use wardrobe_types::envelope::Page;

use crate::client::{RequestOptions, WardrobeClient};
use crate::error::ClientError;

impl WardrobeClient {
    /// Add an item to the wardrobe; resolves to its identifier.
    pub async fn create_item(&self, item: &NewClothingItem) -> Result<CreatedItem, ClientError> {
        item.validate()?;
        self.post("/api/clothing/item", item).await
    }

    /// Page through the wardrobe with optional filters and sorting.
    pub async fn list_items(
        &self,
        query: &ClothingItemQuery,
    ) -> Result<Page<ClothingItemSummary>, ClientError> {
        let mut path = "/api/clothing/items".to_string();
        let pairs = query.query_pairs();
        if !pairs.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            path.push('?');
            path.push_str(&encoded);
        }
        self.get(&path).await
    }

    pub async fn get_item(&self, id: u64) -> Result<ClothingItem, ClientError> {
        self.get(&format!("/api/clothing/items/{id}")).await
    }

    pub async fn update_item(
        &self,
        id: u64,
        update: &UpdateClothingItem,
    ) -> Result<ClothingItem, ClientError> {
        self.put(&format!("/api/clothing/items/{id}"), update).await
    }

    pub async fn delete_item(&self, id: u64) -> Result<(), ClientError> {
        self.execute(
            Method::DELETE,
            &format!("/api/clothing/items/{id}"),
            RequestOptions::default(),
        )
        .await
    }

    /// Aggregate wardrobe statistics (counts, value, top items).
    pub async fn clothing_stats(&self) -> Result<ClothingStats, ClientError> {
        self.get("/api/clothing/stats").await
    }

    /// Log one wearing of an item.
    pub async fn record_wear(&self, id: u64, record: &NewWearRecord) -> Result<(), ClientError> {
        record.validate()?;
        self.execute(
            Method::POST,
            &format!("/api/clothing/items/{id}/wear"),
            RequestOptions::json(record)?,
        )
        .await
    }

    /// System category tree. Public, sent without credentials.
    pub async fn category_tree(&self) -> Result<Vec<CategoryNode>, ClientError> {
        self.call(
            Method::GET,
            "/api/public/clothing/categories/tree",
            RequestOptions::public(),
        )
        .await
    }

    /// Flat category list. Public, sent without credentials.
    pub async fn categories(&self) -> Result<Vec<CategorySummary>, ClientError> {
        self.call(
            Method::GET,
            "/api/public/clothing/categories",
            RequestOptions::public(),
        )
        .await
    }

    /// System tag enums for one tag type (season, occasion, style, ...).
    /// Public, sent without credentials.
    pub async fn system_tags(&self, kind: &str) -> Result<Vec<Tag>, ClientError> {
        self.call(
            Method::GET,
            &format!("/api/public/clothing/tags/enums/{kind}"),
            RequestOptions::public(),
        )
        .await
    }

    /// Every system tag enum, keyed by tag type.
    pub async fn all_system_tags(&self) -> Result<BTreeMap<String, Vec<Tag>>, ClientError> {
        self.call(
            Method::GET,
            "/api/public/clothing/tags/enums/all",
            RequestOptions::public(),
        )
        .await
    }
}
