use crate::error::FetchError;
use serde::Deserialize;

/// A single trivia question as served by the remote endpoint.
///
/// Every field is optional: the feed is not validated and the view has to
/// cope with whatever comes back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionItem {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub question: Option<String>,
}

impl QuestionItem {
    /// Text of the choice at `index`, `None` when out of range or null.
    pub fn choice_text(&self, index: usize) -> Option<&str> {
        self.choices
            .as_ref()
            .and_then(|choices| choices.get(index))
            .and_then(|choice| choice.as_deref())
    }

    pub fn choice_count(&self) -> usize {
        self.choices.as_ref().map_or(0, Vec::len)
    }
}

pub type QuestionSet = Vec<QuestionItem>;

/// Fetch outcome handed to the presentation layer.
///
/// The three fields are set independently; nothing ties them together.
#[derive(Debug, Clone)]
pub struct DataOrException<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for DataOrException<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuizQuitConfirm,
    Exit,
}
