pub mod course;
pub mod quiz_attempt;
pub mod quiz_question;
pub use course::{Course, LessonSection};
pub use quiz_attempt::{GradedResult, QuizSummary};
pub use quiz_question::{AnswerLetter, QuizQuestion};
