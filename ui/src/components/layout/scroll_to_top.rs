use yew::prelude::*;
use yew_router::prelude::*;

/// Scrolls the window to the top whenever the path changes. Renders nothing.
#[function_component]
pub fn ScrollToTop() -> Html {
    let path = use_location().map(|l| l.path().to_string());

    use_effect_with(path, |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {}
}
