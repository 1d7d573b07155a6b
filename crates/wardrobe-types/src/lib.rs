//! # Wardrobe Types
//!
//! Wire types for the what-to-wear wardrobe API.
//!
//! This crate provides the data layer shared by anything that talks to the
//! backend:
//!
//! - **`envelope`** - The uniform `{code, message, data}` response wrapper
//!   and pagination payload
//! - **`auth`** - Login and registration requests
//! - **`user`** - Profile and password types
//! - **`weather`** - Current conditions, forecast, and alert types
//! - **`clothing`** - Items, categories, tags, wear records, and statistics
//!
//! ## Architecture Role
//!
//! `wardrobe-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!         wardrobe-types (this crate)
//!                 │
//!                 ▼
//!         wardrobe-client
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde, matching the backend's snake_case JSON
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison
//!
//! Request types additionally carry `validator` derives mirroring the
//! backend's binding rules, so malformed input can be rejected before a
//! request is ever issued.

pub mod auth;
pub mod clothing;
pub mod envelope;
pub mod user;
pub mod weather;

// Re-export the envelope types for convenience
pub use envelope::{ApiEnvelope, Page, SUCCESS_CODE};

// Re-export core request/response types
pub use auth::{LoginRequest, RegisterRequest};
pub use clothing::{
    CategoryNode, CategorySummary, ClothingItem, ClothingItemQuery, ClothingItemSummary,
    ClothingSize, ClothingStats, CreatedItem, NewClothingItem, NewWearRecord, SpecificAttributes,
    Tag, UpdateClothingItem,
};
pub use user::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};
pub use weather::{CurrentWeather, ForecastDay, WeatherForecast, WeatherReport};
