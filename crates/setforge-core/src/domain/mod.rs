//! Domain model for problem-set selection
//!
//! - `ProblemRecord`: a raw problem as read from input
//! - `PreferenceList`: ordered topics that define preference ranks
//! - `Item`: a problem annotated with its derived rank
//! - `ProblemSet`: the canonically ordered, ranked items of one instance

mod item;
mod preference;
mod problem_set;


pub use item::{Item, ItemId, Points, ProblemRecord};
pub use preference::PreferenceList;
pub use problem_set::ProblemSet;
