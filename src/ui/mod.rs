pub mod layout;
mod quiz;

pub use layout::{calculate_quiz_chunks, centered_rect};
pub use quiz::{draw_loading, draw_question_display, draw_questions, draw_quit_confirmation};
