//! Clothing domain types: items, categories, tags, wear records, statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Size label plus the sizing system it belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClothingSize {
    /// Size identifier (XS, S, M, L, XL, 38, 40, ...).
    #[serde(default)]
    pub size: String,
    /// Sizing system (US, EU, CN, UK, ...).
    #[serde(default)]
    pub system: String,
}

/// Category-specific attributes; which fields apply depends on the
/// garment category (tops, trousers, shoes, accessories).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpecificAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neckline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg: Option<String>,
    /// Inseam in centimeters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inseam: Option<i32>,
    /// Heel height in centimeters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heel_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoe_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
}

/// Payload for `POST /api/clothing/item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct NewClothingItem {
    pub category_id: u64,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[validate(length(min = 1, message = "color is required"))]
    pub color: String,
    #[serde(default)]
    pub size: ClothingSize,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub specific_attributes: SpecificAttributes,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tag_ids: Vec<u64>,
}

impl NewClothingItem {
    /// Bare item with the required fields; everything else at defaults.
    pub fn new(category_id: u64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            category_id,
            name: name.into(),
            brand: String::new(),
            model: String::new(),
            color: color.into(),
            size: ClothingSize::default(),
            material: String::new(),
            price: 0.0,
            purchase_date: None,
            condition: String::new(),
            specific_attributes: SpecificAttributes::default(),
            image_urls: Vec::new(),
            notes: String::new(),
            tag_ids: Vec::new(),
        }
    }
}

/// Partial update for `PUT /api/clothing/items/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateClothingItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ClothingSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_attributes: Option<SpecificAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
}

/// Identifier handed back by `POST /api/clothing/item`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedItem {
    pub id: u64,
}

/// Full item record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    pub id: u64,
    pub user_id: u64,
    pub category_id: u64,
    pub category: CategorySummary,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub color: String,
    #[serde(default)]
    pub size: ClothingSize,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub price: f64,
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default)]
    pub durability_score: f64,
    pub last_worn_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub specific_attributes: SpecificAttributes,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub cost_per_wear: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact row used in list and statistics responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItemSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub category_name: String,
    /// Primary image.
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub durability_score: f64,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Filtering, sorting and paging for `GET /api/clothing/items`.
///
/// `sort_by` is one of name, price, wear_count, durability_score,
/// created_at; `sort_order` is asc or desc.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClothingItemQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category_id: Option<u64>,
    pub tag_ids: Vec<u64>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub material: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub is_favorite: Option<bool>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ClothingItemQuery {
    /// Flatten the set fields into query-string pairs. `tag_ids` repeats
    /// its key once per value.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        for tag_id in &self.tag_ids {
            pairs.push(("tag_ids", tag_id.to_string()));
        }
        if let Some(color) = &self.color {
            pairs.push(("color", color.clone()));
        }
        if let Some(brand) = &self.brand {
            pairs.push(("brand", brand.clone()));
        }
        if let Some(material) = &self.material {
            pairs.push(("material", material.clone()));
        }
        if let Some(condition) = &self.condition {
            pairs.push(("condition", condition.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price", max_price.to_string()));
        }
        if let Some(is_favorite) = self.is_favorite {
            pairs.push(("is_favorite", is_favorite.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
        }
        if let Some(sort_order) = &self.sort_order {
            pairs.push(("sort_order", sort_order.clone()));
        }
        pairs
    }
}

/// Payload for `POST /api/clothing/items/{id}/wear`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct NewWearRecord {
    pub wear_date: DateTime<Utc>,
    #[validate(range(min = 1, max = 24))]
    pub duration_hours: i32,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub weather_condition: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub activity: String,
    #[validate(range(min = 1, max = 10))]
    pub comfort_rating: i32,
    #[validate(range(min = 1, max = 10))]
    pub style_rating: i32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub location: String,
}

impl NewWearRecord {
    pub fn new(wear_date: DateTime<Utc>, duration_hours: i32) -> Self {
        Self {
            wear_date,
            duration_hours,
            occasion: String::new(),
            weather_condition: String::new(),
            temperature: 0.0,
            activity: String::new(),
            comfort_rating: 5,
            style_rating: 5,
            notes: String::new(),
            photos: Vec::new(),
            location: String::new(),
        }
    }
}

/// Flat category record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub parent_name: String,
}

/// Node of the category tree from
/// `GET /api/public/clothing/categories/tree`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryNode {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub item_count: u64,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

/// Tag record; also used for the system tag enums, which omit `icon`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Wardrobe statistics from `GET /api/clothing/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingStats {
    pub total_items: u64,
    pub total_value: f64,
    #[serde(default)]
    pub average_durability: f64,
    pub most_worn_item: Option<ClothingItemSummary>,
    #[serde(default)]
    pub recently_added: Vec<ClothingItemSummary>,
    #[serde(default)]
    pub category_stats: Vec<CategoryStats>,
    #[serde(default)]
    pub brand_stats: Vec<BrandStats>,
    #[serde(default)]
    pub color_stats: Vec<ColorStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStats {
    pub category_name: String,
    pub count: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub avg_wear_count: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandStats {
    pub brand_name: String,
    pub count: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub avg_wear_count: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStats {
    pub color: String,
    pub count: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub avg_wear_count: f64,
}
