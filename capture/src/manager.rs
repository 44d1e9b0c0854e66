use crate::CaptureEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct EngineManager {
    engine: Arc<dyn CaptureEngine>,
}

impl EngineManager {
    pub fn new(engine: Arc<dyn CaptureEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> Arc<dyn CaptureEngine> {
        Arc::clone(&self.engine)
    }
}

impl std::ops::Deref for EngineManager {
    type Target = Arc<dyn CaptureEngine>;

    fn deref(&self) -> &Self::Target {
        &self.engine
    }
}

impl AsRef<Arc<dyn CaptureEngine>> for EngineManager {
    fn as_ref(&self) -> &Arc<dyn CaptureEngine> {
        &self.engine
    }
}

impl crate::CaptureEngine for EngineManager {
    fn capture<'e>(
        &'e self,
        target: &'e crate::CaptureTarget,
    ) -> crate::BoxFuture<'e, Result<Vec<u8>, crate::Error>> {
        self.engine.capture(target)
    }
}
