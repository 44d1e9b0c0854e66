use crate::{BoxFuture, CaptureEngine, CaptureTarget, Error};
use std::sync::Mutex;

/// Engine returning a fixed payload, recording every target it sees.
pub struct StubEngine {
    bytes: Vec<u8>,
    captured: Mutex<Vec<CaptureTarget>>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::with_bytes(b"png-bytes".to_vec())
    }

    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn captured(&self) -> Vec<CaptureTarget> {
        self.captured.lock().unwrap().clone()
    }
}

impl Default for StubEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureEngine for StubEngine {
    fn capture<'e>(
        &'e self,
        target: &'e CaptureTarget,
    ) -> BoxFuture<'e, Result<Vec<u8>, Error>> {
        Box::pin(async move {
            self.captured
                .lock()
                .unwrap()
                .push(target.clone());
            Ok(self.bytes.clone())
        })
    }
}

/// Engine that fails every capture with the given cause.
pub struct FailingEngine {
    cause: String,
}

impl FailingEngine {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

impl CaptureEngine for FailingEngine {
    fn capture<'e>(
        &'e self,
        _target: &'e CaptureTarget,
    ) -> BoxFuture<'e, Result<Vec<u8>, Error>> {
        Box::pin(async move { Err(Error::Capture(self.cause.clone())) })
    }
}

#[tokio::test]
async fn stub_records_targets() {
    let engine = StubEngine::with_bytes(vec![1, 2, 3]);

    let target = CaptureTarget::new("https://example.com").header("X-Test", "1");
    let bytes = engine.capture(&target).await.unwrap();

    assert_eq!(bytes, vec![1, 2, 3]);
    assert_eq!(engine.captured(), vec![target]);
}

#[tokio::test]
async fn failing_engine_reports_cause() {
    let engine = FailingEngine::new("no browser");

    let err = engine
        .capture(&CaptureTarget::new("https://example.com"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no browser"));
}
