//! Domain models shared by the repository and HTTP layers
//!
//! Request payloads are checked when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod loose_int;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use category::{Category, CategoryMap};
pub use loose_int::LooseInt;
pub use pagination::{PageParams, Pagination, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use quiz::QuizCategory;
pub use validation::ValidationError;
