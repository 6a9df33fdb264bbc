use std::rc::Rc;

use isukuhub_model::toast::{TOAST_TIMEOUT_MS, expiry_for};
use isukuhub_model::{Notice, ToastId, ToastQueue};
use jiff::Timestamp;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub queue: ToastQueue,
}

pub enum ToastAction {
    Show(Notice, Timestamp),
    Dismiss(ToastId),
    Expire(Timestamp),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();

        match action {
            ToastAction::Show(notice, now) => {
                queue.show(notice, now);
            }
            ToastAction::Dismiss(id) => {
                queue.dismiss(id);
            }
            ToastAction::Expire(now) => {
                queue.expire(now);
            }
        }

        Rc::new(ToastState { queue })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    /// Show a notice and sweep it once its timeout has passed.
    ///
    /// The sweep carries the deadline computed at show time, so a timer
    /// that fires early by the wall clock still removes the toast. It is
    /// not tied to any component and still runs if the caller unmounts; a
    /// toast dismissed by hand is simply gone by then.
    pub fn show(&self, notice: Notice) {
        tracing::debug!(kind = %notice.kind, text = %notice.text, "toast");
        let shown_at = Timestamp::now();
        self.context.dispatch(ToastAction::Show(notice, shown_at));

        let context = self.context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            context.dispatch(ToastAction::Expire(expiry_for(shown_at)));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Notice::error(message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Notice::success(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(Notice::info(message));
    }

    pub fn dismiss(&self, id: ToastId) {
        self.context.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millisecond(ms).unwrap()
    }

    fn apply(state: Rc<ToastState>, action: ToastAction) -> Rc<ToastState> {
        state.reduce(action)
    }

    #[test]
    fn scheduled_sweep_removes_its_toast() {
        let shown_at = at(1_700_000_000_000);
        let state = apply(
            Rc::default(),
            ToastAction::Show(Notice::success("Payment received"), shown_at),
        );
        assert_eq!(state.queue.len(), 1);

        let state = apply(state, ToastAction::Expire(expiry_for(shown_at)));
        assert!(state.queue.is_empty());
    }

    #[test]
    fn sweep_leaves_later_toasts_alone() {
        let first = at(1_700_000_000_000);
        let second = at(1_700_000_001_000);
        let state = apply(Rc::default(), ToastAction::Show(Notice::info("one"), first));
        let state = apply(state, ToastAction::Show(Notice::info("two"), second));

        let state = apply(state, ToastAction::Expire(expiry_for(first)));
        let texts: Vec<_> = state.queue.iter().map(|t| t.text.clone()).collect();
        assert_eq!(texts, ["two"]);
    }

    #[test]
    fn sweep_after_manual_dismiss_is_a_no_op() {
        let shown_at = at(5_000);
        let state = apply(Rc::default(), ToastAction::Show(Notice::error("Offline"), shown_at));
        let id = state.queue.iter().next().map(|t| t.id).unwrap();

        let state = apply(state, ToastAction::Dismiss(id));
        let state = apply(state, ToastAction::Expire(expiry_for(shown_at)));
        assert!(state.queue.is_empty());
    }
}
