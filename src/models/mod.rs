pub mod food;
pub mod goal;
pub mod reading;

pub use food::{FoodCategory, FoodEntry, FoodInput, GlycemicIndex};
pub use goal::{partition_goals, Goal, GoalCategory, GoalInput};
pub use reading::{Reading, ReadingInput};
