use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::common::fields::{lenient_number, lenient_number_opt, present, zero};
use crate::common::{ApiError, ApiResult, Entity};

/// One logged workout. `duration` is in minutes.
///
/// Numeric fields keep the JSON number the client sent, so `2.5` sets stay
/// `2.5` and `10` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: u64,
    pub exercise: Option<String>,
    pub sets: Number,
    pub reps: Number,
    pub weight: Number,
    pub duration: Number,
    pub notes: String,
    /// Day the workout was logged, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Request body for `POST /workouts`. The `exercise` key is required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkout {
    #[serde(default, deserialize_with = "present")]
    pub exercise: Option<Option<String>>,
    #[serde(default = "zero", deserialize_with = "lenient_number")]
    pub sets: Number,
    #[serde(default = "zero", deserialize_with = "lenient_number")]
    pub reps: Number,
    #[serde(default = "zero", deserialize_with = "lenient_number")]
    pub weight: Number,
    #[serde(default = "zero", deserialize_with = "lenient_number")]
    pub duration: Number,
    #[serde(default)]
    pub notes: String,
}

impl Default for NewWorkout {
    fn default() -> Self {
        Self {
            exercise: None,
            sets: zero(),
            reps: zero(),
            weight: zero(),
            duration: zero(),
            notes: String::new(),
        }
    }
}

/// A validated [`NewWorkout`] stamped with its date.
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub exercise: Option<String>,
    pub sets: Number,
    pub reps: Number,
    pub weight: Number,
    pub duration: Number,
    pub notes: String,
    pub date: NaiveDate,
}

impl NewWorkout {
    pub fn validate(self, date: NaiveDate) -> ApiResult<WorkoutDraft> {
        let exercise = self
            .exercise
            .ok_or(ApiError::BadRequest("Exercise name is required"))?;
        Ok(WorkoutDraft {
            exercise,
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            duration: self.duration,
            notes: self.notes,
            date,
        })
    }
}

/// Request body for `PUT /workouts/:id`. The date is never changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutPatch {
    #[serde(default, deserialize_with = "present")]
    pub exercise: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient_number_opt")]
    pub sets: Option<Number>,
    #[serde(default, deserialize_with = "lenient_number_opt")]
    pub reps: Option<Number>,
    #[serde(default, deserialize_with = "lenient_number_opt")]
    pub weight: Option<Number>,
    #[serde(default, deserialize_with = "lenient_number_opt")]
    pub duration: Option<Number>,
    pub notes: Option<String>,
}

impl WorkoutPatch {
    pub fn apply(self, workout: &mut Workout) {
        if let Some(exercise) = self.exercise {
            workout.exercise = exercise;
        }
        if let Some(sets) = self.sets {
            workout.sets = sets;
        }
        if let Some(reps) = self.reps {
            workout.reps = reps;
        }
        if let Some(weight) = self.weight {
            workout.weight = weight;
        }
        if let Some(duration) = self.duration {
            workout.duration = duration;
        }
        if let Some(notes) = self.notes {
            workout.notes = notes;
        }
    }
}

impl Entity for Workout {
    type Draft = WorkoutDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: WorkoutDraft) -> Self {
        Self {
            id,
            exercise: draft.exercise,
            sets: draft.sets,
            reps: draft.reps,
            weight: draft.weight,
            duration: draft.duration,
            notes: draft.notes,
            date: draft.date,
        }
    }
}
