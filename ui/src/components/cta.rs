use yew::prelude::*;

use crate::Route;
use crate::hooks::use_push_route;

/// Closing call-to-action band on the marketing pages.
#[function_component]
pub fn Cta() -> Html {
    let push_route = use_push_route();
    let onclick = Callback::from(move |_: MouseEvent| push_route.emit(Route::Signup));

    html! {
        <section class="py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="bg-gradient-to-br from-brand-700 to-brand-900 rounded-[2.5rem] \
                            py-20 px-8 text-center text-white shadow-2xl relative overflow-hidden">
                    <div class="absolute top-0 left-0 w-64 h-64 bg-white opacity-5 rounded-full \
                                -translate-x-1/2 -translate-y-1/2"></div>
                    <div class="absolute bottom-0 right-0 w-96 h-96 bg-brand-500 opacity-20 \
                                rounded-full translate-x-1/3 translate-y-1/3 blur-3xl"></div>

                    <div class="relative z-10 max-w-2xl mx-auto">
                        <h2 class="text-3xl md:text-5xl font-bold mb-6 tracking-tight">
                            {"Take Control of Your"}<br />
                            <span class="text-brand-200">{"Kigali's Waste Future"}</span>
                        </h2>
                        <p class="text-lg text-brand-100 mb-10 max-w-xl mx-auto">
                            {"AI-powered automation that helps you manage your waste \
                              collection with clarity and ease."}
                        </p>
                        <button
                            {onclick}
                            class="inline-flex items-center justify-center px-8 py-4 text-base \
                                   font-bold text-brand-900 bg-white rounded-full \
                                   hover:bg-brand-50 transition-colors shadow-lg"
                        >
                            {"Get Started with IsukuHub ↗"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
