use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use anemo_core::{AnemoError, WindReadings, WindRequest, WindSource};

/// Instruction for how the next `wind_readings` calls should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(AnemoError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    behavior: Option<MockBehavior<WindReadings>>,
    requests: Vec<WindRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `wind_readings` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior<WindReadings>) {
        let mut guard = self.state.lock().await;
        guard.behavior = Some(behavior);
    }

    /// Return a copy of the request log, oldest first.
    pub async fn requests(&self) -> Vec<WindRequest> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear the configured behavior and the request log.
    pub async fn clear_all(&self) {
        let mut guard = self.state.lock().await;
        guard.behavior = None;
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn WindSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn WindSource>, controller)
    }
}

#[async_trait]
impl WindSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn wind_readings(&self, req: &WindRequest) -> Result<WindReadings, AnemoError> {
        // Log and snapshot without holding the lock across the behavior
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(*req);
            guard.behavior.clone()
        };

        match behavior {
            Some(MockBehavior::Return(readings)) => Ok(readings),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(AnemoError::transport("dynamic mock: no behavior configured")),
        }
    }
}
