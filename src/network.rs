use crate::config::Config;
use crate::error::FetchError;
use crate::models::QuestionSet;
use async_trait::async_trait;

/// Source of the question set.
#[async_trait]
pub trait QuestionApi: Send + Sync {
    async fn get_all_questions(&self) -> Result<QuestionSet, FetchError>;
}

/// Plain HTTP GET against the configured feed URL.
#[derive(Debug, Clone)]
pub struct HttpQuestionApi {
    client: reqwest::Client,
    url: String,
}

impl HttpQuestionApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.questions_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionApi for HttpQuestionApi {
    async fn get_all_questions(&self) -> Result<QuestionSet, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| FetchError::new(&self.url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::new(&self.url, e))?;

        serde_json::from_slice::<QuestionSet>(&body)
            .map_err(|e| FetchError::new(&self.url, format!("invalid question payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned HTTP response and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_fetch_parses_question_set() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"answer":"4","category":"math","choices":["3","4","5"],"question":"2+2?"}]"#,
        )
        .await;
        let api = HttpQuestionApi::new(&Config::with_base_url(base));

        let questions = api.get_all_questions().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question.as_deref(), Some("2+2?"));
        assert_eq!(questions[0].choice_text(1), Some("4"));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_fetch_error() {
        let base = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
        let api = HttpQuestionApi::new(&Config::with_base_url(base));

        let err = api.get_all_questions().await.unwrap_err();
        assert_eq!(err.url, api.url());
        assert!(err.message.contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_bad_json_is_fetch_error() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"not": "an array"}"#).await;
        let api = HttpQuestionApi::new(&Config::with_base_url(base));

        let err = api.get_all_questions().await.unwrap_err();
        assert!(err.message.starts_with("invalid question payload"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_fetch_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpQuestionApi::new(&Config::with_base_url(format!("http://{}/", addr)));
        assert!(api.get_all_questions().await.is_err());
    }
}
