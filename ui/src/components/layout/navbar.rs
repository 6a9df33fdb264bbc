use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use yew::prelude::*;
use yew_router::prelude::*;

use super::icons::{CloseIcon, LeafIcon, MenuIcon};
use crate::Route;
use crate::hooks::use_push_route;

/// Top-level marketing links, in display order.
pub const NAV_LINKS: &[(&str, Route)] = &[
    ("Features", Route::Features),
    ("Impact", Route::Impact),
    ("Dashboard", Route::Dashboard),
    ("Resources", Route::Resources),
];

const SCROLLED_OFFSET_PX: f64 = 10.0;

const LINK_ACTIVE_CLASSES: &str =
    "text-sm transition-colors text-brand-600 font-semibold";
const LINK_INACTIVE_CLASSES: &str =
    "text-sm font-medium transition-colors text-slate-600 hover:text-brand-600";

/// True once the page has scrolled past the hero's top edge.
#[hook]
fn use_scrolled() -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let reader = window.clone();
                let closure = Closure::<dyn Fn()>::new(move || {
                    let y = reader.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > SCROLLED_OFFSET_PX);
                });
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                ) {
                    tracing::warn!(error = ?e, "could not watch scrolling");
                }
                closure
            });

            move || {
                if let (Some(window), Some(closure)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *scrolled
}

#[function_component]
pub fn Navbar() -> Html {
    let route = use_route::<Route>();
    let scrolled = use_scrolled();
    let menu_open = use_state(|| false);
    let push_route = use_push_route();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let start_free = {
        let push_route = push_route.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            push_route.emit(Route::Signup);
        })
    };

    let bar_classes = if scrolled {
        "bg-white/90 backdrop-blur-md shadow-sm py-3"
    } else {
        "bg-transparent py-5"
    };

    html! {
        <nav class={classes!(
            "fixed", "w-full", "z-50", "transition-all", "duration-300",
            bar_classes
        )}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="flex items-center gap-2 group">
                    <div class="w-8 h-8 bg-brand-600 rounded-lg flex items-center \
                                justify-center text-white group-hover:bg-brand-700 \
                                transition-colors">
                        <LeafIcon />
                    </div>
                    <span class="text-xl font-bold tracking-tight text-slate-900">
                        {"IsukuHub"}
                    </span>
                </Link<Route>>

                <div class="hidden md:flex items-center space-x-8">
                    {for NAV_LINKS.iter().map(|(label, target)| {
                        let classes = if route.as_ref() == Some(target) {
                            LINK_ACTIVE_CLASSES
                        } else {
                            LINK_INACTIVE_CLASSES
                        };
                        html! {
                            <Link<Route> to={target.clone()} {classes}>
                                {*label}
                            </Link<Route>>
                        }
                    })}
                </div>

                <div class="hidden md:block">
                    <button
                        onclick={start_free.clone()}
                        class="px-5 py-2.5 text-sm font-semibold text-brand-700 \
                               bg-brand-50 hover:bg-brand-100 rounded-full \
                               transition-colors border border-brand-200"
                    >
                        {"Start Free"}
                    </button>
                </div>

                <div class="md:hidden">
                    <button
                        onclick={toggle_menu}
                        class="text-slate-600"
                        aria-label="Toggle menu"
                    >
                        if *menu_open { <CloseIcon /> } else { <MenuIcon /> }
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="md:hidden absolute top-full left-0 w-full bg-white \
                            border-b border-slate-100 shadow-lg py-4 px-4 flex \
                            flex-col space-y-4">
                    {for NAV_LINKS.iter().map(|(label, target)| {
                        let on_click = {
                            let push_route = push_route.clone();
                            let menu_open = menu_open.clone();
                            let target = target.clone();
                            Callback::from(move |_: MouseEvent| {
                                menu_open.set(false);
                                push_route.emit(target.clone());
                            })
                        };
                        html! {
                            <button
                                onclick={on_click}
                                class="text-left text-base font-medium \
                                       text-slate-700 hover:text-brand-600"
                            >
                                {*label}
                            </button>
                        }
                    })}
                    <button
                        onclick={start_free}
                        class="w-full py-3 text-center font-semibold text-white \
                               bg-brand-600 rounded-lg"
                    >
                        {"Start Free"}
                    </button>
                </div>
            }
        </nav>
    }
}
