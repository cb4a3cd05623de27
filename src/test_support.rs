use crate::genai::{CompletionRequest, GenerationError, TextGenerator};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; serialize tests that change it.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Text generator that plays back queued replies in order.
///
/// Once the queue is empty every further call fails with a request error.
#[derive(Default)]
pub(crate) struct ScriptedGenerator {
    replies: RefCell<VecDeque<Result<String, GenerationError>>>,
    requests: RefCell<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, text: impl Into<String>) -> Self {
        self.replies.borrow_mut().push_back(Ok(text.into()));
        self
    }

    pub(crate) fn fail(self, err: GenerationError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Request("no scripted reply".to_string())))
    }
}

pub(crate) fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
