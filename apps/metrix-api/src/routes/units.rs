//! # Unit Listing Routes
//!
//! Feed the category and unit dropdowns of the browser client.
//!
//! ```text
//! category select ──► GET /api/units/length
//!                          │
//!                          ▼
//!        { "success": true, "category": "length",
//!          "units": [ { "code": "m", "name": "メートル（m）" }, ... ] }
//!                          │
//!                          ▼
//!             from/to <option> elements, registry order
//! ```

use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use metrix_core::dispatch::resolve_listing_category;
use metrix_core::{Category, UnitInfo};

use crate::error::ApiError;

/// Units of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitsResponse {
    pub success: bool,
    pub category: Category,
    pub units: Vec<UnitInfo>,
}

/// Every known category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// `GET /api/units/{category}`
///
/// Unknown categories are a missing resource here (404), unlike on the
/// conversion routes.
pub async fn list_units_handler(
    Path(category): Path<String>,
) -> Result<Json<UnitsResponse>, ApiError> {
    debug!(%category, "list_units");

    let category = resolve_listing_category(&category)?;
    Ok(Json(UnitsResponse {
        success: true,
        category,
        units: category.unit_info(),
    }))
}

/// `GET /api/categories`
pub async fn list_categories_handler() -> Json<CategoriesResponse> {
    debug!("list_categories");

    Json(CategoriesResponse {
        success: true,
        categories: Category::ALL.to_vec(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_units() {
        let Json(body) = list_units_handler(Path("weight".to_string())).await.unwrap();
        assert!(body.success);
        assert_eq!(body.category, Category::Weight);

        let codes: Vec<&str> = body.units.iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes, vec!["g", "kg", "mg", "lb", "oz"]);
    }

    #[tokio::test]
    async fn test_list_units_unknown_category() {
        let err = list_units_handler(Path("volume".to_string())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert_eq!(err.message, "Category not found: volume");
    }

    #[tokio::test]
    async fn test_list_categories() {
        let Json(body) = list_categories_handler().await;
        assert_eq!(
            body.categories,
            vec![Category::Length, Category::Weight, Category::Temperature]
        );
    }
}
