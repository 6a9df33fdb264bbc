use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    if context.queue.is_empty() {
        return html! {};
    }

    // Queue order is insertion order, oldest first.
    html! {
        <div class="fixed bottom-6 right-6 z-[60] space-y-3 max-w-sm w-full">
            {for context.queue.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}
