//! Recording adapter for the `HttpClient` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::http::{HttpClient, HttpFuture, HttpRequest};

/// Records HTTP exchanges while delegating to an inner implementation.
pub struct RecordingHttpClient {
    inner: Box<dyn HttpClient>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingHttpClient {
    /// Creates a new recording HTTP client wrapping the given implementation.
    pub fn new(inner: Box<dyn HttpClient>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl HttpClient for RecordingHttpClient {
    fn post(&self, request: &HttpRequest) -> HttpFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let result = self.inner.post(&request).await;
            record_result(&self.recorder, "http", "post", &request, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ports::http::HttpResponse;
    use crate::ports::PortError;

    struct FixedHttpClient;

    impl HttpClient for FixedHttpClient {
        fn post(&self, request: &HttpRequest) -> HttpFuture<'_> {
            let fail = request.body.contains("down");
            let result: Result<HttpResponse, PortError> = if fail {
                Err("connection refused".into())
            } else {
                Ok(HttpResponse { status: 200, body: "Deleted.".into() })
            };
            Box::pin(async move { result })
        }
    }

    #[tokio::test]
    async fn records_success_and_transport_failure() {
        let dir = std::env::temp_dir().join("songdel_recording_http_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("http.cassette.yaml");

        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(&path, "rec", "http://127.0.0.1:8000")));
        let client = RecordingHttpClient::new(Box::new(FixedHttpClient), Arc::clone(&recorder));

        let ok = client.post(&HttpRequest::json("/api/delete", r#"{"id":"1"}"#)).await;
        assert_eq!(ok.unwrap().body, "Deleted.");
        let err = client.post(&HttpRequest::json("/api/delete", r#"{"id":"down"}"#)).await;
        assert!(err.is_err());

        recorder.lock().unwrap().save().unwrap();
        let cassette = crate::cassette::format::Cassette::load(&path).unwrap();

        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].port, "http");
        assert_eq!(cassette.interactions[0].method, "post");
        assert_eq!(cassette.interactions[0].input["body"], json!(r#"{"id":"1"}"#));
        assert_eq!(
            cassette.interactions[0].output,
            json!({"Ok": {"status": 200, "body": "Deleted."}})
        );
        assert_eq!(cassette.interactions[1].output, json!({"Err": "connection refused"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
