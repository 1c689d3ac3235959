//! Walking directions from the reference origin to a restaurant.
//!
//! ## Invariants
//! - At least one step, numbered `1..=n` in order.
//! - `total_distance_meters` and `total_time_minutes` equal the step sums.
//! - `calories_burned` is kept as supplied; when omitted it is derived from
//!   the total distance at 65 kcal/km.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RestaurantId;
use super::geo::calories_burned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct WalkingDirectionId(i32);

impl WalkingDirectionId {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// One leg of a walking route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectionStep {
    pub step_number: i32,
    pub instruction: String,
    pub distance_meters: i32,
    pub time_minutes: i32,
}

impl DirectionStep {
    #[must_use]
    pub fn new(
        step_number: i32,
        instruction: impl Into<String>,
        distance_meters: i32,
        time_minutes: i32,
    ) -> Self {
        Self {
            step_number,
            instruction: instruction.into(),
            distance_meters,
            time_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectionsValidationError {
    #[error("directions need at least one step")]
    NoSteps,
    #[error("step {position} is numbered {found}")]
    StepOutOfOrder { position: usize, found: i32 },
    #[error("step {step_number} has an empty instruction")]
    EmptyInstruction { step_number: i32 },
    #[error("step {step_number} has a negative distance or time")]
    NegativeStep { step_number: i32 },
    #[error("{field} is {supplied} but the steps add up to {computed}")]
    TotalMismatch {
        field: &'static str,
        supplied: i32,
        computed: i32,
    },
    #[error("caloriesBurned must not be negative")]
    NegativeCalories,
}

impl DirectionsValidationError {
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NoSteps
            | Self::StepOutOfOrder { .. }
            | Self::EmptyInstruction { .. }
            | Self::NegativeStep { .. } => "steps",
            Self::TotalMismatch { field, .. } => field,
            Self::NegativeCalories => "caloriesBurned",
        }
    }
}

/// Validated directions awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWalkingDirection {
    steps: Vec<DirectionStep>,
    total_distance_meters: i32,
    total_time_minutes: i32,
    calories_burned: i32,
}

impl NewWalkingDirection {
    /// Validate steps and reconcile the aggregate totals.
    ///
    /// Totals that are omitted are computed from the steps.
    ///
    /// # Examples
    /// ```
    /// use eatinery::domain::{DirectionStep, NewWalkingDirection};
    ///
    /// let directions = NewWalkingDirection::try_new(
    ///     vec![
    ///         DirectionStep::new(1, "Exit from Exit B", 100, 1),
    ///         DirectionStep::new(2, "Walk straight", 150, 2),
    ///     ],
    ///     None,
    ///     None,
    ///     Some(18),
    /// )
    /// .expect("valid directions");
    /// assert_eq!(directions.total_distance_meters(), 250);
    /// assert_eq!(directions.total_time_minutes(), 3);
    /// ```
    pub fn try_new(
        steps: Vec<DirectionStep>,
        total_distance_meters: Option<i32>,
        total_time_minutes: Option<i32>,
        calories: Option<i32>,
    ) -> Result<Self, DirectionsValidationError> {
        if steps.is_empty() {
            return Err(DirectionsValidationError::NoSteps);
        }
        for (index, step) in steps.iter().enumerate() {
            let expected = i32::try_from(index + 1).unwrap_or(i32::MAX);
            if step.step_number != expected {
                return Err(DirectionsValidationError::StepOutOfOrder {
                    position: index + 1,
                    found: step.step_number,
                });
            }
            if step.instruction.trim().is_empty() {
                return Err(DirectionsValidationError::EmptyInstruction {
                    step_number: step.step_number,
                });
            }
            if step.distance_meters < 0 || step.time_minutes < 0 {
                return Err(DirectionsValidationError::NegativeStep {
                    step_number: step.step_number,
                });
            }
        }

        let distance = reconcile(
            "totalDistanceMeters",
            total_distance_meters,
            steps.iter().fold(0, |acc, s| acc.saturating_add(s.distance_meters)),
        )?;
        let time = reconcile(
            "totalTimeMinutes",
            total_time_minutes,
            steps.iter().fold(0, |acc, s| acc.saturating_add(s.time_minutes)),
        )?;
        let calories = calories.unwrap_or_else(|| calories_burned(distance));
        if calories < 0 {
            return Err(DirectionsValidationError::NegativeCalories);
        }

        Ok(Self {
            steps,
            total_distance_meters: distance,
            total_time_minutes: time,
            calories_burned: calories,
        })
    }

    pub fn steps(&self) -> &[DirectionStep] {
        &self.steps
    }

    pub fn total_distance_meters(&self) -> i32 {
        self.total_distance_meters
    }

    pub fn total_time_minutes(&self) -> i32 {
        self.total_time_minutes
    }

    pub fn calories_burned(&self) -> i32 {
        self.calories_burned
    }
}

fn reconcile(
    field: &'static str,
    supplied: Option<i32>,
    computed: i32,
) -> Result<i32, DirectionsValidationError> {
    match supplied {
        None => Ok(computed),
        Some(value) if value == computed => Ok(value),
        Some(value) => Err(DirectionsValidationError::TotalMismatch {
            field,
            supplied: value,
            computed,
        }),
    }
}

/// Stored walking directions; each restaurant has at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkingDirection {
    pub id: WalkingDirectionId,
    pub restaurant_id: RestaurantId,
    pub steps: Vec<DirectionStep>,
    pub total_distance_meters: i32,
    pub total_time_minutes: i32,
    pub calories_burned: i32,
}

impl WalkingDirection {
    #[must_use]
    pub fn from_new(
        id: WalkingDirectionId,
        restaurant_id: RestaurantId,
        new: NewWalkingDirection,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            steps: new.steps,
            total_distance_meters: new.total_distance_meters,
            total_time_minutes: new.total_time_minutes,
            calories_burned: new.calories_burned,
        }
    }
}
