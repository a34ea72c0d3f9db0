use std::rc::Rc;
use yew::functional::Reducible;

/// Result of the most recent invocation of an async producer.
///
/// `Settled` carries either the resolved value or the error, never both, and
/// `Loading` carries neither.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T, E> {
    /// No invocation has started. Only reachable when the automatic first
    /// invocation is skipped.
    Idle,
    Loading,
    Settled(Result<T, E>),
}

impl<T, E> FetchState<T, E> {
    /// State before the first render: `Loading` unless the first invocation
    /// is skipped, in which case nothing happens until a refetch.
    pub fn initial(skip: bool) -> Self {
        if skip { Self::Idle } else { Self::Loading }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Settled(Ok(data)) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Settled(Err(error)) => Some(error),
            _ => None,
        }
    }
}

/// Transition labels dispatched by an invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T, E> {
    Loading,
    Success(T),
    Failure(E),
}

impl<T, E> FetchAction<T, E> {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

/// The next state depends only on the action, never on the previous state.
impl<T, E> From<FetchAction<T, E>> for FetchState<T, E> {
    fn from(action: FetchAction<T, E>) -> Self {
        match action {
            FetchAction::Loading => Self::Loading,
            FetchAction::Success(data) => Self::Settled(Ok(data)),
            FetchAction::Failure(error) => Self::Settled(Err(error)),
        }
    }
}

impl<T, E> Reducible for FetchState<T, E> {
    type Action = FetchAction<T, E>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(action.into())
    }
}
