//! Example catalogue seeding.
//!
//! Loads the two Jurong East restaurants, their menus and walking directions
//! into an empty store. A store that already holds restaurants is left
//! untouched so restarts against a database do not duplicate rows.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    MenuItemRepository, RestaurantRepository, StoreError, WalkingDirectionRepository,
};
use crate::domain::{
    DirectionStep, DirectionsValidationError, NewMenuItem, NewRestaurant, NewWalkingDirection,
    RestaurantCriteria,
};

const SEOUL_GARDEN_IMAGE: &str = "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80";
const K_GRILL_IMAGE: &str = "https://images.unsplash.com/photo-1590301157890-4810ed352733?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80";
const VEGGIE_BIBIMBAP_IMAGE: &str = "https://images.unsplash.com/photo-1590301157890-4810ed352733?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80";
const SOFT_TOFU_SOUP_IMAGE: &str = "https://images.unsplash.com/photo-1533007716222-4b465613a984?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80";
const BULGOGI_WRAPS_IMAGE: &str = "https://images.unsplash.com/photo-1635361184202-ecc9a435388c?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80";
const CHICKEN_BIBIMBAP_IMAGE: &str = "https://images.unsplash.com/photo-1583502070936-ebbf8f60bc3d?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80";

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    Applied {
        restaurants: usize,
        menu_items: usize,
        directions: usize,
    },
    AlreadySeeded,
}

#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    #[error("example directions failed validation: {0}")]
    Directions(#[from] DirectionsValidationError),
    #[error("example data persistence error: {0}")]
    Persistence(#[from] StoreError),
}

struct RestaurantSeed {
    restaurant: NewRestaurant,
    menu: Vec<NewMenuItem>,
    steps: Vec<DirectionStep>,
    calories_burned: i32,
}

#[expect(clippy::too_many_arguments, reason = "mirrors the menu table columns")]
fn dish(
    name: &str,
    description: &str,
    calories: i32,
    price: f64,
    protein: i32,
    carbs: i32,
    fat: i32,
    tags: &[&str],
    image_url: &str,
) -> NewMenuItem {
    NewMenuItem {
        name: name.to_owned(),
        description: Some(description.to_owned()),
        calories,
        price: Some(price),
        protein: Some(protein),
        carbs: Some(carbs),
        fat: Some(fat),
        image_url: Some(image_url.to_owned()),
        is_healthy: true,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

fn catalogue() -> Vec<RestaurantSeed> {
    vec![
        RestaurantSeed {
            restaurant: NewRestaurant {
                name: "Seoul Garden".into(),
                cuisine_type: "Korean".into(),
                location: "JEM Shopping Mall, #03-14".into(),
                latitude: 1.3329,
                longitude: 103.7436,
                rating: Some(4.8),
                is_hpb_healthy: true,
                image_url: Some(SEOUL_GARDEN_IMAGE.into()),
                opening_hours: Some("10:00 AM - 10:00 PM".into()),
                address: Some("JEM Shopping Mall, #03-14, 50 Jurong Gateway Rd".into()),
                distance_in_meters: Some(650),
                walk_time_minutes: Some(8),
            },
            menu: vec![
                dish(
                    "Veggie Bibimbap",
                    "Mixed vegetables, rice, egg, gochujang sauce",
                    420,
                    12.90,
                    12,
                    65,
                    12,
                    &["High protein", "Vegetarian"],
                    VEGGIE_BIBIMBAP_IMAGE,
                ),
                dish(
                    "Soft Tofu Soup",
                    "Tofu, vegetables, seafood, served with small bowl of rice",
                    310,
                    10.90,
                    15,
                    28,
                    8,
                    &["Low carb", "Seafood"],
                    SOFT_TOFU_SOUP_IMAGE,
                ),
                dish(
                    "Bulgogi Lettuce Wraps",
                    "Marinated beef, lettuce leaves, vegetables, dipping sauce",
                    450,
                    15.90,
                    28,
                    18,
                    14,
                    &["Low carb", "High protein"],
                    BULGOGI_WRAPS_IMAGE,
                ),
            ],
            steps: vec![
                DirectionStep::new(1, "Exit Jurong East MRT station from Exit A", 150, 2),
                DirectionStep::new(
                    2,
                    "Walk straight along Gateway Drive until you reach JEM mall entrance",
                    250,
                    3,
                ),
                DirectionStep::new(3, "Enter JEM mall and take the escalator to Level 3", 150, 2),
                DirectionStep::new(4, "Seoul Garden is located at unit #03-14", 100, 1),
            ],
            calories_burned: 45,
        },
        RestaurantSeed {
            restaurant: NewRestaurant {
                name: "K-Grill BBQ".into(),
                cuisine_type: "Korean".into(),
                location: "Jurong East".into(),
                latitude: 1.3331,
                longitude: 103.7431,
                rating: Some(4.6),
                is_hpb_healthy: false,
                image_url: Some(K_GRILL_IMAGE.into()),
                opening_hours: Some("11:00 AM - 9:30 PM".into()),
                address: Some("Jurong East Street 31, #01-22".into()),
                distance_in_meters: Some(250),
                walk_time_minutes: Some(3),
            },
            menu: vec![
                dish(
                    "Chicken Bibimbap",
                    "Rice bowl with chicken, vegetables, and gochujang sauce",
                    580,
                    14.90,
                    25,
                    70,
                    18,
                    &["Balanced meal", "High protein"],
                    CHICKEN_BIBIMBAP_IMAGE,
                ),
                dish(
                    "Bulgogi Lettuce Wraps",
                    "Korean BBQ beef served with lettuce leaves for wrapping",
                    450,
                    16.90,
                    30,
                    15,
                    18,
                    &["Low carb", "High protein"],
                    BULGOGI_WRAPS_IMAGE,
                ),
            ],
            steps: vec![
                DirectionStep::new(1, "Exit Jurong East MRT station from Exit B", 100, 1),
                DirectionStep::new(2, "Walk straight along Jurong East Street 31", 150, 2),
            ],
            calories_burned: 18,
        },
    ]
}

/// Seeds the example catalogue through the store ports.
#[derive(Clone)]
pub struct ExampleDataSeeder<R: ?Sized, M: ?Sized, W: ?Sized> {
    restaurants: Arc<R>,
    menu_items: Arc<M>,
    directions: Arc<W>,
}

impl<R: ?Sized, M: ?Sized, W: ?Sized> ExampleDataSeeder<R, M, W> {
    pub fn new(restaurants: Arc<R>, menu_items: Arc<M>, directions: Arc<W>) -> Self {
        Self {
            restaurants,
            menu_items,
            directions,
        }
    }
}

impl<R: ?Sized, M: ?Sized, W: ?Sized> ExampleDataSeeder<R, M, W>
where
    R: RestaurantRepository,
    M: MenuItemRepository,
    W: WalkingDirectionRepository,
{
    /// Insert the example catalogue unless restaurants already exist.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] when a store call fails.
    pub async fn seed_catalogue(&self) -> Result<SeedingResult, ExampleDataSeedingError> {
        if !self
            .restaurants
            .list(&RestaurantCriteria::default())
            .await?
            .is_empty()
        {
            info!("catalogue already populated; skipping example data");
            return Ok(SeedingResult::AlreadySeeded);
        }

        let mut counts = (0, 0, 0);
        for seed in catalogue() {
            let restaurant = self.restaurants.create(seed.restaurant).await?;
            counts.0 += 1;
            for item in seed.menu {
                self.menu_items.create(restaurant.id, item).await?;
                counts.1 += 1;
            }
            let directions =
                NewWalkingDirection::try_new(seed.steps, None, None, Some(seed.calories_burned))?;
            self.directions.create(restaurant.id, directions).await?;
            counts.2 += 1;
        }

        info!(
            restaurants = counts.0,
            menu_items = counts.1,
            directions = counts.2,
            "example catalogue seeded"
        );
        Ok(SeedingResult::Applied {
            restaurants: counts.0,
            menu_items: counts.1,
            directions: counts.2,
        })
    }
}
