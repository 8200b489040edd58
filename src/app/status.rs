use std::fmt;

/// Progress of loading the schema into a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => write!(f, "loading"),
            LoadState::Ready => write!(f, "ready"),
            LoadState::Failed => write!(f, "failed"),
        }
    }
}
