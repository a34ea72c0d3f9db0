use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchAction, FetchState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseAsyncOptions {
    /// Don't invoke the producer on mount. The state stays `Idle` until
    /// `refetch` is called or the dependencies change.
    pub skip: bool,
}

/// Hook return type
pub struct UseAsyncHandle<T, E> {
    pub state: UseReducerHandle<FetchState<T, E>>,
    /// Starts a new invocation, regardless of the dependencies.
    pub refetch: Callback<()>,
}

impl<T, E: std::fmt::Display> UseAsyncHandle<T, E> {
    /// Render the one view that matches the current state.
    ///
    /// - `Idle`: a prompt with a button that starts the first fetch
    /// - `Loading`: "Loading {context}..."
    /// - error: "Error loading {context}: ..."
    /// - data: whatever `render_fn` returns
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: FnOnce(&T) -> Html,
    {
        match &*self.state {
            FetchState::Idle => {
                let onclick = self.refetch.reform(|_: MouseEvent| ());
                html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400 mb-4">
                            {format!("No {} loaded yet", context)}
                        </p>
                        <button
                            {onclick}
                            class="px-4 py-2 rounded-md text-sm font-medium \
                                   text-white bg-neutral-900 \
                                   hover:bg-neutral-700 \
                                   dark:bg-neutral-100 dark:text-neutral-900"
                        >
                            {format!("Load {}", context)}
                        </button>
                    </div>
                }
            }
            FetchState::Loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            },
            FetchState::Settled(Err(error)) => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {}: {}", context, error)}
                    </p>
                </div>
            },
            FetchState::Settled(Ok(data)) => render_fn(data),
        }
    }
}

/// Decides when dependency values call for an automatic invocation.
///
/// The first observation triggers one unless the first invocation is
/// skipped. After that, each change of value triggers exactly one.
#[derive(Debug)]
pub struct DepsTracker<D> {
    last: Option<D>,
    skip_initial: bool,
}

impl<D: PartialEq + Clone> DepsTracker<D> {
    pub fn new(skip_initial: bool) -> Self {
        Self {
            last: None,
            skip_initial,
        }
    }

    pub fn observe(&mut self, deps: &D) -> bool {
        match &self.last {
            Some(last) if last == deps => false,
            Some(_) => {
                self.last = Some(deps.clone());
                true
            }
            None => {
                self.last = Some(deps.clone());
                !self.skip_initial
            }
        }
    }
}

/// Run the producer once, dispatching `Loading` before it starts and
/// `Success` or `Failure` when it finishes.
///
/// Nothing is cancelled: when invocations overlap, whichever finishes last
/// decides the state.
pub async fn invoke<T, E, P, Fut>(
    producer: P,
    dispatch: impl Fn(FetchAction<T, E>),
) where
    P: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    dispatch(FetchAction::Loading);

    let action = match producer().await {
        Ok(data) => FetchAction::Success(data),
        Err(error) => FetchAction::Failure(error),
    };
    tracing::debug!("Async producer settled: {}", action.label());

    dispatch(action);
}

/// Generic async state hook.
///
/// Invokes `producer` on mount (unless `options.skip` is set) and again
/// whenever `deps` changes, and exposes a `refetch` callback that invokes it
/// on demand. Each invocation resets the state to `Loading` and settles it
/// with the producer's result.
///
/// The producer from the latest render is always the one invoked, so it may
/// freely capture props.
///
/// # Example
///
/// ```rust
/// # use payloads::UserId;
/// # use ui::{get_api_client, hooks::{UseAsyncOptions, use_async}};
/// # use yew::prelude::*;
/// # #[derive(Properties, PartialEq)]
/// # struct Props {
/// #     id: UserId,
/// # }
/// #[function_component]
/// fn UserDetail(props: &Props) -> Html {
///     let id = props.id;
///     let user = use_async(
///         id,
///         move || async move {
///             let api_client = get_api_client();
///             api_client.get_user(&id).await.map_err(|e| e.to_string())
///         },
///         UseAsyncOptions::default(),
///     );
///
///     user.render("user", |user| html! { <h2>{&user.username}</h2> })
/// }
/// ```
#[hook]
pub fn use_async<T, E, D, F, Fut>(
    deps: D,
    producer: F,
    options: UseAsyncOptions,
) -> UseAsyncHandle<T, E>
where
    T: 'static,
    E: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let state = use_reducer(|| FetchState::initial(options.skip));
    let tracker = use_mut_ref(|| DepsTracker::<D>::new(options.skip));

    let producer = Rc::new(producer);
    let latest_producer = use_mut_ref(|| producer.clone());
    *latest_producer.borrow_mut() = producer;

    let refetch = {
        let dispatcher = state.dispatcher();
        let latest_producer = latest_producer.clone();

        use_callback((), move |_: (), _| {
            let producer = latest_producer.borrow().clone();
            let dispatcher = dispatcher.clone();

            tracing::debug!("Async producer invoked");
            yew::platform::spawn_local(invoke(
                move || producer(),
                move |action| dispatcher.dispatch(action),
            ));
        })
    };

    // Auto-fetch on mount and when deps change. The tests' `Harness::render`
    // replays this step; keep the two in sync.
    {
        let refetch = refetch.clone();

        use_effect(move || {
            if tracker.borrow_mut().observe(&deps) {
                refetch.emit(());
            }
        });
    }

    UseAsyncHandle { state, refetch }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};
    use yew::functional::Reducible;

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        id: u64,
        username: &'static str,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ProducerError {
        NetworkError(&'static str),
    }

    type State = FetchState<Profile, ProducerError>;

    fn alice() -> Profile {
        Profile {
            id: 1,
            username: "alice",
        }
    }

    fn dispatcher(
        state: Rc<RefCell<Rc<State>>>,
    ) -> impl Fn(FetchAction<Profile, ProducerError>) {
        move |action| {
            let next = state.borrow().clone().reduce(action);
            *state.borrow_mut() = next;
        }
    }

    /// Drives `DepsTracker` and `invoke` the way the hook does, on a
    /// single-threaded executor standing in for the browser event loop.
    /// `render` mirrors the `use_effect` step of `use_async` and `refetch`
    /// mirrors its `use_callback`.
    struct Harness {
        pool: LocalPool,
        state: Rc<RefCell<Rc<State>>>,
        tracker: DepsTracker<u64>,
        invocations: Rc<Cell<usize>>,
    }

    impl Harness {
        fn new(skip: bool) -> Self {
            Self {
                pool: LocalPool::new(),
                state: Rc::new(RefCell::new(Rc::new(State::initial(skip)))),
                tracker: DepsTracker::new(skip),
                invocations: Rc::new(Cell::new(0)),
            }
        }

        fn state(&self) -> State {
            (**self.state.borrow()).clone()
        }

        /// Start an invocation whose result is delivered through a channel.
        fn spawn_pending(
            &mut self,
        ) -> oneshot::Sender<Result<Profile, ProducerError>> {
            let (tx, rx) = oneshot::channel();
            let invocations = self.invocations.clone();
            let producer = move || {
                invocations.set(invocations.get() + 1);
                async move {
                    rx.await.unwrap_or(Err(ProducerError::NetworkError(
                        "dropped",
                    )))
                }
            };
            self.pool
                .spawner()
                .spawn_local(invoke(producer, dispatcher(self.state.clone())))
                .unwrap();
            self.pool.run_until_stalled();
            tx
        }

        /// Start an invocation that settles immediately.
        fn spawn_ready(&mut self, result: Result<Profile, ProducerError>) {
            let tx = self.spawn_pending();
            tx.send(result).unwrap();
            self.pool.run_until_stalled();
        }

        /// What the hook's effect does after each render.
        fn render(&mut self, deps: u64) {
            if self.tracker.observe(&deps) {
                self.spawn_ready(Ok(alice()));
            }
        }

        fn refetch(&mut self) {
            self.spawn_ready(Ok(alice()));
        }
    }

    #[test]
    fn tracker_fires_on_first_observation() {
        let mut tracker = DepsTracker::new(false);
        assert!(tracker.observe(&1));
        assert!(!tracker.observe(&1));
    }

    #[test]
    fn tracker_skips_first_observation() {
        let mut tracker = DepsTracker::new(true);
        assert!(!tracker.observe(&1));
        assert!(!tracker.observe(&1));
        assert!(tracker.observe(&2));
    }

    #[test]
    fn tracker_fires_once_per_change() {
        let mut tracker = DepsTracker::new(false);
        assert!(tracker.observe(&"a"));
        assert!(tracker.observe(&"b"));
        assert!(!tracker.observe(&"b"));
        assert!(tracker.observe(&"a"));
    }

    #[test]
    fn resolved_producer_settles_with_data() {
        let mut harness = Harness::new(false);
        harness.spawn_ready(Ok(alice()));
        assert_eq!(harness.state(), State::Settled(Ok(alice())));
    }

    #[test]
    fn rejected_producer_settles_with_error() {
        let mut harness = Harness::new(false);
        harness.spawn_ready(Err(ProducerError::NetworkError("timeout")));
        assert_eq!(
            harness.state(),
            State::Settled(Err(ProducerError::NetworkError("timeout")))
        );
    }

    #[test]
    fn state_is_loading_while_producer_is_pending() {
        let mut harness = Harness::new(false);
        harness.spawn_ready(Ok(alice()));

        let tx = harness.spawn_pending();
        let state = harness.state();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);

        tx.send(Ok(alice())).unwrap();
        harness.pool.run_until_stalled();
        assert!(harness.state().is_settled());
    }

    #[test]
    fn invoke_dispatches_loading_then_result() {
        let actions = RefCell::new(Vec::new());
        futures::executor::block_on(invoke(
            || async { Ok::<_, ProducerError>(alice()) },
            |action| actions.borrow_mut().push(action),
        ));
        assert_eq!(
            actions.into_inner(),
            vec![FetchAction::Loading, FetchAction::Success(alice())]
        );
    }

    #[test]
    fn skipped_mount_stays_idle() {
        let mut harness = Harness::new(true);
        harness.render(1);
        harness.render(1);
        assert_eq!(harness.invocations.get(), 0);
        assert!(harness.state().is_idle());
    }

    #[test]
    fn skipped_mount_then_refetch_invokes_once() {
        let mut harness = Harness::new(true);
        harness.render(1);
        harness.refetch();
        assert_eq!(harness.invocations.get(), 1);
        assert_eq!(harness.state(), State::Settled(Ok(alice())));
    }

    #[test]
    fn dependency_change_invokes_exactly_once() {
        let mut harness = Harness::new(false);
        harness.render(1);
        assert_eq!(harness.invocations.get(), 1);

        harness.render(1);
        assert_eq!(harness.invocations.get(), 1);

        harness.render(2);
        harness.render(2);
        assert_eq!(harness.invocations.get(), 2);
    }

    #[test]
    fn refetch_ignores_dependencies() {
        let mut harness = Harness::new(false);
        harness.render(1);
        harness.refetch();
        harness.refetch();
        harness.render(1);
        assert_eq!(harness.invocations.get(), 3);
    }

    #[test]
    fn last_invocation_to_complete_wins() {
        let mut harness = Harness::new(false);
        let first = harness.spawn_pending();
        let second = harness.spawn_pending();

        let bob = Profile {
            id: 2,
            username: "bob",
        };
        second.send(Ok(bob.clone())).unwrap();
        harness.pool.run_until_stalled();
        assert_eq!(harness.state(), State::Settled(Ok(bob)));

        // the superseded invocation still applies its result
        first
            .send(Err(ProducerError::NetworkError("timeout")))
            .unwrap();
        harness.pool.run_until_stalled();
        assert_eq!(
            harness.state(),
            State::Settled(Err(ProducerError::NetworkError("timeout")))
        );
    }
}
