use crate::logger;
use crate::models::{DataOrException, QuestionSet};
use crate::network::QuestionApi;
use crate::repository::QuestionRepository;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const LOG_TAG: &str = "QUESTIONS VIEW MODEL";

/// Holds the fetch outcome for the lifetime of the quiz screen.
///
/// The single fetch is spawned on construction; dropping the view model
/// aborts it if it is still running.
pub struct QuestionsViewModel {
    data: watch::Receiver<DataOrException<QuestionSet>>,
    fetch_task: JoinHandle<()>,
}

impl QuestionsViewModel {
    /// Must be called from within a tokio runtime.
    pub fn new<A>(repository: QuestionRepository<A>) -> Self
    where
        A: QuestionApi + 'static,
    {
        let (tx, rx) = watch::channel(DataOrException::default());

        let fetch_task = tokio::spawn(async move {
            let result = repository.get_all_questions().await;
            logger::log(
                LOG_TAG,
                &format!(
                    "Fetch finished: {} questions, error: {}",
                    result.data.as_ref().map_or(0, Vec::len),
                    result.error.is_some()
                ),
            );
            tx.send_replace(result);
        });

        Self {
            data: rx,
            fetch_task,
        }
    }

    /// Observable fetch state. Cloning or reading it never refetches.
    pub fn data(&self) -> watch::Receiver<DataOrException<QuestionSet>> {
        self.data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.data.borrow().loading
    }

    pub fn total_question_count(&self) -> usize {
        self.data.borrow().data.as_ref().map_or(0, Vec::len)
    }
}

impl Drop for QuestionsViewModel {
    fn drop(&mut self) {
        self.fetch_task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::{FakeApi, sample_question};
    use std::sync::atomic::Ordering;

    async fn wait_for_fetch(view_model: &QuestionsViewModel) -> DataOrException<QuestionSet> {
        let mut rx = view_model.data();
        rx.wait_for(|state| !state.loading)
            .await
            .expect("fetch task dropped the sender")
            .clone()
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let view_model = QuestionsViewModel::new(QuestionRepository::new(FakeApi::ok(vec![])));
        // Nothing has been published before the first await point.
        assert!(view_model.is_loading());
        assert_eq!(view_model.total_question_count(), 0);
    }

    #[tokio::test]
    async fn test_publishes_success() {
        let view_model = QuestionsViewModel::new(QuestionRepository::new(FakeApi::ok(vec![
            sample_question(),
            sample_question(),
        ])));

        let state = wait_for_fetch(&view_model).await;
        assert!(!state.loading);
        assert!(state.data.is_some());
        assert!(state.error.is_none());
        assert_eq!(view_model.total_question_count(), 2);
    }

    #[tokio::test]
    async fn test_publishes_failure() {
        let view_model =
            QuestionsViewModel::new(QuestionRepository::new(FakeApi::failing("offline")));

        let state = wait_for_fetch(&view_model).await;
        assert!(!state.loading);
        assert!(state.data.is_none());
        assert!(state.error.is_some());
        assert_eq!(view_model.total_question_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_runs_exactly_once() {
        let api = FakeApi::ok(vec![sample_question()]);
        let calls = api.calls.clone();
        let view_model = QuestionsViewModel::new(QuestionRepository::new(api));

        wait_for_fetch(&view_model).await;
        for _ in 0..5 {
            let rx = view_model.data();
            assert!(rx.borrow().data.is_some());
            let _ = view_model.total_question_count();
        }
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_drop_aborts_pending_fetch() {
        use crate::error::FetchError;
        use async_trait::async_trait;

        struct NeverApi;

        #[async_trait]
        impl QuestionApi for NeverApi {
            async fn get_all_questions(&self) -> Result<QuestionSet, FetchError> {
                futures::future::pending().await
            }
        }

        let view_model = QuestionsViewModel::new(QuestionRepository::new(NeverApi));
        let mut rx = view_model.data();
        drop(view_model);

        // The aborted task drops its sender, so the receiver sees a closed channel.
        assert!(rx.changed().await.is_err());
        assert!(rx.borrow().loading);
    }
}
