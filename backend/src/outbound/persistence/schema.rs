//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Restaurants with their location and precomputed walk estimate.
    restaurants (id) {
        id -> Int4,
        name -> Text,
        cuisine_type -> Text,
        location -> Text,
        latitude -> Float8,
        longitude -> Float8,
        rating -> Nullable<Float8>,
        is_hpb_healthy -> Bool,
        image_url -> Nullable<Text>,
        opening_hours -> Nullable<Text>,
        address -> Nullable<Text>,
        distance_in_meters -> Nullable<Int4>,
        walk_time_minutes -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Menu items; `restaurant_id` references `restaurants.id`.
    menu_items (id) {
        id -> Int4,
        restaurant_id -> Int4,
        name -> Text,
        description -> Nullable<Text>,
        calories -> Int4,
        price -> Nullable<Float8>,
        protein -> Nullable<Int4>,
        carbs -> Nullable<Int4>,
        fat -> Nullable<Int4>,
        image_url -> Nullable<Text>,
        is_healthy -> Bool,
        tags -> Array<Text>,
    }
}

diesel::table! {
    /// One row per restaurant (unique `restaurant_id`); steps stored as JSONB.
    walking_directions (id) {
        id -> Int4,
        restaurant_id -> Int4,
        steps -> Jsonb,
        total_distance_meters -> Int4,
        total_time_minutes -> Int4,
        calories_burned -> Int4,
    }
}

diesel::table! {
    /// Accounts; `password` holds the Argon2 PHC string.
    users (id) {
        id -> Int4,
        username -> Text,
        password -> Text,
    }
}

diesel::joinable!(menu_items -> restaurants (restaurant_id));
diesel::joinable!(walking_directions -> restaurants (restaurant_id));

diesel::allow_tables_to_appear_in_same_query!(restaurants, menu_items, walking_directions, users);
