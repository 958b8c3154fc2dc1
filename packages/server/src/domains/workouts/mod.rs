pub mod edges;
pub mod models;

pub use edges::routes;
pub use models::{NewWorkout, Workout, WorkoutDraft, WorkoutPatch};
