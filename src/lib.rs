pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod network;
pub mod quiz;
pub mod repository;
pub mod ui;
pub mod utils;
pub mod view_model;


// Re-exports for convenience
pub use config::Config;
pub use error::FetchError;
pub use models::{AnswerState, AppState, DataOrException, QuestionItem, QuestionSet};
pub use network::{HttpQuestionApi, QuestionApi};
pub use quiz::{handle_quiz_input, QuizView};
pub use repository::QuestionRepository;
pub use ui::{draw_questions, draw_quit_confirmation};
pub use view_model::QuestionsViewModel;
