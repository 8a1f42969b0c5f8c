use crate::logger;
use crate::models::{AnswerState, AppState, QuestionItem};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

const LOG_TAG: &str = "QUIZ";

/// Position from which the score progress bar is shown.
pub const SCORE_PROGRESS_THRESHOLD: usize = 3;
/// Bar fill per question index.
pub const SCORE_PROGRESS_STEP: f64 = 0.005;

/// View-local quiz state: where we are and what was picked on this question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub question_index: usize,
    pub selected_choice: Option<usize>,
    pub answer_state: AnswerState,
    pub highlighted_choice: usize,
    pub questions_answered: usize,
}

impl Default for QuizView {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizView {
    pub fn new() -> Self {
        Self {
            question_index: 0,
            selected_choice: None,
            answer_state: AnswerState::Unanswered,
            highlighted_choice: 0,
            questions_answered: 0,
        }
    }

    /// Question at the current position; `None` once we run past the end.
    pub fn current_question<'a>(&self, questions: &'a [QuestionItem]) -> Option<&'a QuestionItem> {
        questions.get(self.question_index)
    }

    /// Records the pick and compares the picked choice text with the answer text.
    pub fn select_answer(&mut self, question: &QuestionItem, choice_index: usize) -> AnswerState {
        let is_correct = question.choice_text(choice_index) == question.answer.as_deref();

        if self.answer_state == AnswerState::Unanswered {
            self.questions_answered += 1;
        }
        self.selected_choice = Some(choice_index);
        self.highlighted_choice = choice_index;
        self.answer_state = if is_correct {
            AnswerState::Correct
        } else {
            AnswerState::Incorrect
        };

        logger::log(
            LOG_TAG,
            &format!(
                "Question {} choice {} -> {:?}",
                self.question_index, choice_index, self.answer_state
            ),
        );
        self.answer_state
    }

    /// Advances unconditionally; there is no upper bound check.
    pub fn next(&mut self) {
        self.question_index += 1;
        self.selected_choice = None;
        self.answer_state = AnswerState::Unanswered;
        self.highlighted_choice = 0;
    }

    pub fn highlight_next(&mut self, choice_count: usize) {
        if choice_count > 0 {
            self.highlighted_choice = (self.highlighted_choice + 1) % choice_count;
        }
    }

    pub fn highlight_previous(&mut self, choice_count: usize) {
        if choice_count > 0 {
            self.highlighted_choice = (self.highlighted_choice + choice_count - 1) % choice_count;
        }
    }

    pub fn shows_score_progress(&self) -> bool {
        self.question_index >= SCORE_PROGRESS_THRESHOLD
    }

    /// Filled fraction of the score bar, clamped for rendering.
    pub fn score_progress(&self) -> f64 {
        (self.question_index as f64 * SCORE_PROGRESS_STEP).clamp(0.0, 1.0)
    }
}

pub fn handle_quiz_input(
    view: &mut QuizView,
    key: KeyEvent,
    app_state: &mut AppState,
    questions: Option<&[QuestionItem]>,
) -> io::Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        *app_state = AppState::Exit;
        return Ok(());
    }

    match *app_state {
        AppState::QuizQuitConfirm => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => *app_state = AppState::Exit,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    *app_state = AppState::Quiz
                }
                _ => {}
            }
            Ok(())
        }
        AppState::Exit => Ok(()),
        AppState::Quiz => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                *app_state = AppState::QuizQuitConfirm;
                return Ok(());
            }

            // Still loading, or the fetch failed.
            let Some(questions) = questions else {
                return Ok(());
            };

            let current = view.current_question(questions);
            let choice_count = current.map_or(0, QuestionItem::choice_count);

            match key.code {
                KeyCode::Down => view.highlight_next(choice_count),
                KeyCode::Up => view.highlight_previous(choice_count),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(question) = current
                        && view.highlighted_choice < choice_count
                    {
                        view.select_answer(question, view.highlighted_choice);
                    }
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let choice_index = (c as usize) - ('1' as usize);
                    if let Some(question) = current
                        && choice_index < choice_count
                    {
                        view.select_answer(question, choice_index);
                    }
                }
                KeyCode::Char('n') | KeyCode::Right | KeyCode::Tab => view.next(),
                _ => {}
            }
            Ok(())
        }
    }
}
