//! Menu items with nutrition data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RestaurantId;
use super::geo::CalorieClass;

/// Store-assigned menu item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct MenuItemId(i32);

impl MenuItemId {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Validation failures for [`NewMenuItem`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuItemValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("price must be a finite, non-negative amount")]
    InvalidPrice,
}

impl MenuItemValidationError {
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::Negative { field } => field,
            Self::InvalidPrice => "price",
        }
    }
}

/// Menu item payload; the owning restaurant is supplied separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    #[schema(example = "Veggie Bibimbap")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(example = 420)]
    pub calories: i32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub protein: Option<i32>,
    #[serde(default)]
    pub carbs: Option<i32>,
    #[serde(default)]
    pub fat: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_healthy: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewMenuItem {
    pub fn validate(&self) -> Result<(), MenuItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(MenuItemValidationError::EmptyName);
        }
        if self.calories < 0 {
            return Err(MenuItemValidationError::Negative { field: "calories" });
        }
        for (field, grams) in [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if grams.is_some_and(|g| g < 0) {
                return Err(MenuItemValidationError::Negative { field });
            }
        }
        if self.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err(MenuItemValidationError::InvalidPrice);
        }
        Ok(())
    }
}

/// A stored menu item belonging to exactly one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub calories: i32,
    pub price: Option<f64>,
    pub protein: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,
    pub image_url: Option<String>,
    pub is_healthy: bool,
    pub tags: Vec<String>,
}

impl MenuItem {
    #[must_use]
    pub fn from_new(id: MenuItemId, restaurant_id: RestaurantId, new: NewMenuItem) -> Self {
        let NewMenuItem {
            name,
            description,
            calories,
            price,
            protein,
            carbs,
            fat,
            image_url,
            is_healthy,
            tags,
        } = new;
        Self {
            id,
            restaurant_id,
            name,
            description,
            calories,
            price,
            protein,
            carbs,
            fat,
            image_url,
            is_healthy,
            tags,
        }
    }

    #[must_use]
    pub fn calorie_class(&self) -> CalorieClass {
        CalorieClass::classify(self.calories)
    }

    /// Whether this item fits under an optional calorie ceiling.
    #[must_use]
    pub fn within(&self, ceiling: Option<i32>) -> bool {
        ceiling.is_none_or(|limit| self.calories <= limit)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn soup() -> NewMenuItem {
        NewMenuItem {
            name: "Soft Tofu Soup".into(),
            description: None,
            calories: 310,
            price: Some(10.9),
            protein: Some(15),
            carbs: Some(28),
            fat: Some(8),
            image_url: None,
            is_healthy: true,
            tags: vec!["Low carb".into()],
        }
    }

    #[rstest]
    fn valid_item_passes(soup: NewMenuItem) {
        assert!(soup.validate().is_ok());
    }

    #[rstest]
    fn negative_calories_rejected(mut soup: NewMenuItem) {
        soup.calories = -1;
        assert_eq!(soup.validate().map_err(|e| e.field()), Err("calories"));
    }

    #[rstest]
    fn negative_fat_rejected(mut soup: NewMenuItem) {
        soup.fat = Some(-2);
        assert_eq!(soup.validate().map_err(|e| e.field()), Err("fat"));
    }

    #[rstest]
    #[case(Some(f64::INFINITY))]
    #[case(Some(-0.5))]
    fn invalid_price_rejected(mut soup: NewMenuItem, #[case] price: Option<f64>) {
        soup.price = price;
        assert_eq!(soup.validate(), Err(MenuItemValidationError::InvalidPrice));
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(310), true)]
    #[case(Some(309), false)]
    #[case(Some(0), false)]
    fn ceiling_is_inclusive(soup: NewMenuItem, #[case] ceiling: Option<i32>, #[case] expected: bool) {
        let item = MenuItem::from_new(MenuItemId::new(1), RestaurantId::new(1), soup);
        assert_eq!(item.within(ceiling), expected);
        assert_eq!(item.calorie_class(), CalorieClass::Low);
    }
}
