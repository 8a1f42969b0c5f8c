use crate::logger;
use crate::models::{DataOrException, QuestionSet};
use crate::network::QuestionApi;

const LOG_TAG: &str = "QUESTION REPOSITORY";

pub struct QuestionRepository<A: QuestionApi> {
    api: A,
}

impl<A: QuestionApi> QuestionRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// One network call; faults end up in `error`, never propagated.
    pub async fn get_all_questions(&self) -> DataOrException<QuestionSet> {
        let mut result = DataOrException {
            loading: true,
            ..DataOrException::default()
        };

        match self.api.get_all_questions().await {
            Ok(questions) => {
                result.data = Some(questions);
                result.loading = false;
            }
            Err(e) => {
                logger::log(LOG_TAG, &format!("Exception: {}", e));
                result.error = Some(e);
                result.loading = false;
            }
        }

        result
    }
}
