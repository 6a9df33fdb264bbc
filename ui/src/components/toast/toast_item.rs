use crate::contexts::toast::use_toast;
use isukuhub_model::{Toast, ToastKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (bg_class, border_class, text_class, icon) = match toast.kind {
        ToastKind::Error => (
            "bg-red-50",
            "border-red-200",
            "text-red-700",
            "✕",
        ),
        ToastKind::Success => (
            "bg-green-50",
            "border-green-200",
            "text-green-700",
            "✓",
        ),
        ToastKind::Info => (
            "bg-white",
            "border-slate-200",
            "text-slate-700",
            "ℹ",
        ),
    };

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_| {
            toast_handle.dismiss(toast_id);
        })
    };

    html! {
        <div
            role="status"
            class={classes!(
                "relative", "p-4", "rounded-xl", "border", "shadow-lg",
                "transition-all", "duration-300", "ease-out",
                bg_class, border_class, text_class
            )}
        >
            <div class="flex items-start space-x-3">
                <div class="flex-shrink-0">
                    <span class="text-sm font-bold">{icon}</span>
                </div>
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium leading-5">
                        {&toast.text}
                    </p>
                </div>
                <div class="flex-shrink-0">
                    <button
                        onclick={on_close}
                        class="inline-flex text-slate-400 hover:text-slate-600 focus:outline-none transition-colors"
                        title="Dismiss"
                    >
                        <span class="text-lg leading-none">{"×"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
