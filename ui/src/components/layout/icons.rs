//! Inline stroke icons shared by the site and dashboard chrome.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct StrokeIconProps {
    path: &'static str,
    #[prop_or_else(|| AttrValue::from("w-6 h-6"))]
    class: AttrValue,
}

#[function_component]
fn StrokeIcon(props: &StrokeIconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d={props.path}
            />
        </svg>
    }
}

#[function_component]
pub fn MenuIcon() -> Html {
    html! { <StrokeIcon path="M4 6h16M4 12h16M4 18h16" /> }
}

#[function_component]
pub fn CloseIcon() -> Html {
    html! { <StrokeIcon path="M6 18L18 6M6 6l12 12" /> }
}

#[function_component]
pub fn LeafIcon() -> Html {
    html! {
        <StrokeIcon
            class="w-[18px] h-[18px]"
            path="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 \
                  0 5.5-4.78 10-10 10ZM2 21c0-3 1.85-5.36 5.08-6"
        />
    }
}

#[function_component]
pub fn BellIcon() -> Html {
    html! {
        <StrokeIcon
            class="w-5 h-5"
            path="M15 17h5l-1.4-1.4A2 2 0 0 1 18 14.2V11a6 6 0 1 0-12 0v3.2 \
                  c0 .5-.2 1-.6 1.4L4 17h5m6 0v1a3 3 0 1 1-6 0v-1m6 0H9"
        />
    }
}

#[function_component]
pub fn SearchIcon() -> Html {
    html! {
        <StrokeIcon
            class="w-[18px] h-[18px]"
            path="M21 21l-6-6m2-5a7 7 0 1 1-14 0 7 7 0 0 1 14 0z"
        />
    }
}

#[function_component]
pub fn UserIcon() -> Html {
    html! {
        <StrokeIcon
            class="w-[18px] h-[18px]"
            path="M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0zM12 14a7 7 0 0 0-7 7h14 \
                  a7 7 0 0 0-7-7z"
        />
    }
}
