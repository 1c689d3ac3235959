//! Behaviour tests for the calorie filter pipeline.
//!
//! Scenarios run the pipeline directly against an in-memory store holding
//! the example catalogue, so ceilings outside the HTTP request bounds can be
//! exercised too.

use std::sync::Arc;

use eatinery::domain::{
    ExampleDataSeeder, RestaurantCriteria, RestaurantWithMenu, filter_restaurants,
};
use eatinery::outbound::memory::InMemoryStore;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct FilterWorld {
    runtime: Slot<RuntimeHandle>,
    store: Slot<Arc<InMemoryStore>>,
    cuisine: Slot<String>,
    healthy_only: Slot<bool>,
    results: Slot<Vec<RestaurantWithMenu>>,
}

impl FilterWorld {
    fn criteria(&self) -> RestaurantCriteria {
        RestaurantCriteria::new(
            self.cuisine.get(),
            self.healthy_only.get().filter(|flag| *flag),
        )
    }

    fn results(&self) -> Vec<RestaurantWithMenu> {
        self.results.get().expect("filter should have run")
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

fn split_names(list: &str) -> Vec<String> {
    unquote(list)
        .split(',')
        .map(|name| name.trim().to_owned())
        .collect()
}

#[fixture]
fn world() -> FilterWorld {
    FilterWorld::default()
}

#[given("the example catalogue is loaded")]
fn the_example_catalogue_is_loaded(world: &FilterWorld) {
    let runtime = Runtime::new().expect("create runtime");
    let store = Arc::new(InMemoryStore::new());
    runtime
        .block_on(ExampleDataSeeder::new(store.clone(), store.clone(), store.clone()).seed_catalogue())
        .expect("seed example catalogue");
    world.runtime.set(RuntimeHandle(Arc::new(runtime)));
    world.store.set(store);
}

#[given("the cuisine is {cuisine}")]
fn the_cuisine_is(world: &FilterWorld, cuisine: String) {
    world.cuisine.set(unquote(&cuisine).to_owned());
}

#[given("only health promotion board restaurants are wanted")]
fn only_healthy_restaurants_are_wanted(world: &FilterWorld) {
    world.healthy_only.set(true);
}

#[when("the menu is filtered at {ceiling} kcal")]
fn the_menu_is_filtered_at(world: &FilterWorld, ceiling: i32) {
    let runtime = world.runtime.get().expect("runtime");
    let store = world.store.get().expect("store");
    let criteria = world.criteria();
    let results = runtime
        .0
        .block_on(filter_restaurants(
            store.as_ref(),
            store.as_ref(),
            &criteria,
            ceiling,
        ))
        .expect("filter succeeds");
    world.results.set(results);
}

#[then("the restaurants returned are {names}")]
fn the_restaurants_returned_are(world: &FilterWorld, names: String) {
    let actual: Vec<String> = world
        .results()
        .into_iter()
        .map(|entry| entry.restaurant.name)
        .collect();
    assert_eq!(actual, split_names(&names));
}

#[then("the recommended items for {restaurant} are {items}")]
fn the_recommended_items_are(world: &FilterWorld, restaurant: String, items: String) {
    let restaurant = unquote(&restaurant);
    let entry = world
        .results()
        .into_iter()
        .find(|entry| entry.restaurant.name == restaurant)
        .unwrap_or_else(|| panic!("{restaurant} should be recommended"));
    let actual: Vec<String> = entry
        .recommended_menu_items
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(actual, split_names(&items));
}

#[then("no restaurants are returned")]
fn no_restaurants_are_returned(world: &FilterWorld) {
    assert!(world.results().is_empty());
}

#[scenario(
    path = "tests/features/calorie_filter.feature",
    name = "Korean restaurants under a 420 kcal ceiling"
)]
fn korean_restaurants_under_420(world: FilterWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calorie_filter.feature",
    name = "The ceiling is inclusive"
)]
fn ceiling_is_inclusive(world: FilterWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calorie_filter.feature",
    name = "A ceiling below every item recommends nothing"
)]
fn ceiling_below_every_item(world: FilterWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calorie_filter.feature",
    name = "The health flag narrows the candidates"
)]
fn health_flag_narrows_candidates(world: FilterWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calorie_filter.feature",
    name = "An unknown cuisine recommends nothing"
)]
fn unknown_cuisine(world: FilterWorld) {
    let _ = world;
}
