use async_trait::async_trait;
use bill_analyzer::{Error, Result, gemini::BillExtractor};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Image handed to the extractor, as seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractCall {
    pub image: Vec<u8>,
    pub mime_type: String,
}

/// Mock extractor for testing the HTTP layer without a Gemini endpoint
#[derive(Debug)]
pub struct MockBillExtractor {
    pub calls: Arc<Mutex<Vec<ExtractCall>>>,
    /// `None` makes every call fail with `EmptyResponse`.
    pub response: Option<Value>,
}

impl MockBillExtractor {
    pub fn returning(data: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Some(data),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: None,
        }
    }

    pub fn get_calls(&self) -> Vec<ExtractCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillExtractor for MockBillExtractor {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(ExtractCall {
            image: image.to_vec(),
            mime_type: mime_type.to_string(),
        });

        self.response.clone().ok_or(Error::EmptyResponse)
    }
}
