use isukuhub_model::content::page_title_from_path;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

/// Placeholder for any path without a page of its own.
#[function_component]
pub fn GenericPage() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let title = page_title_from_path(&path);
    use_title(&title);

    html! {
        <div class="pt-40 pb-24 px-4 text-center min-h-[60vh]">
            <h1 class="text-4xl font-bold text-slate-900 mb-4">{&title}</h1>
            <p class="text-slate-500 text-lg max-w-xl mx-auto mb-2">
                {"This page is under construction. Please check back soon."}
            </p>
            <p class="text-slate-400 text-sm mb-10">
                {format!("Content for {path} will appear here.")}
            </p>
            <Link<Route>
                to={Route::Home}
                classes="inline-block px-6 py-3 bg-brand-600 hover:bg-brand-700 text-white \
                         font-bold rounded-xl transition-colors"
            >
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
