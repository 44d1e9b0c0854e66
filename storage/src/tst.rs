use tempfile::TempDir;

/// Tempdir-backed store context for tests.
pub struct TestStoreCtx {
    pub dir: TempDir,
    pub config: crate::Config,
}

impl TestStoreCtx {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create store tempdir");
        let config = crate::Config {
            root: dir.path().join("static"),
        };
        Self { dir, config }
    }

    pub async fn store(&self) -> crate::ScreenshotStore {
        crate::ScreenshotStore::new(&self.config)
            .await
            .expect("failed to open test store")
    }
}

impl Default for TestStoreCtx {
    fn default() -> Self {
        Self::new()
    }
}

#[tokio::test]
async fn ctx() {
    let ctx = TestStoreCtx::new();
    let _ = ctx.store().await;
}
