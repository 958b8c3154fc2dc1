// Business domains
pub mod motivation;
pub mod scraping;
pub mod tasks;
pub mod todos;
pub mod workouts;
