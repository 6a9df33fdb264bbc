use yew::prelude::*;
use yew_router::prelude::*;

use super::icons::LeafIcon;
use crate::Route;
use crate::utils::time::now_local;

const FOOTER_COLUMNS: &[(&str, &[(&str, Route)])] = &[
    (
        "Company",
        &[
            ("About Us", Route::About),
            ("Careers", Route::Careers),
            ("Blog", Route::Blog),
        ],
    ),
    (
        "Product",
        &[
            ("Features Overview", Route::Features),
            ("FAQs", Route::Faq),
            ("Contact Us", Route::Contact),
        ],
    ),
    (
        "Resources",
        &[
            ("Privacy Policy", Route::Privacy),
            ("Terms & Conditions", Route::Terms),
            ("Investment Guides", Route::Resources),
        ],
    ),
];

const SOCIAL_LINKS: &[&str] = &["Facebook", "Twitter", "Instagram", "LinkedIn"];

#[function_component]
pub fn Footer() -> Html {
    let year = now_local().year();

    html! {
        <footer class="bg-brand-900 text-white pt-20 pb-10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-16">
                    <div>
                        <div class="flex items-center gap-2 mb-6">
                            <div class="w-8 h-8 bg-white rounded-lg flex items-center \
                                        justify-center text-brand-800">
                                <LeafIcon />
                            </div>
                            <span class="text-xl font-bold tracking-tight">{"IsukuHub"}</span>
                        </div>
                        <p class="text-brand-200 text-sm leading-relaxed mb-6">
                            {"742 KG Avenue, Kigali, Rwanda"}<br />
                            {"support@isukuhub.rw"}
                        </p>
                        <div class="flex gap-4 text-sm">
                            {for SOCIAL_LINKS.iter().map(|name| html! {
                                <a href="#" class="text-brand-200 hover:text-white transition-colors">
                                    {*name}
                                </a>
                            })}
                        </div>
                    </div>

                    {for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                        <div>
                            <h4 class="font-bold text-white mb-6">{*heading}</h4>
                            <ul class="space-y-4 text-sm text-brand-200">
                                {for links.iter().map(|(label, route)| html! {
                                    <li>
                                        <Link<Route>
                                            to={route.clone()}
                                            classes="hover:text-white transition-colors"
                                        >
                                            {*label}
                                        </Link<Route>>
                                    </li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>

                <div class="border-t border-brand-800 pt-8 text-center text-xs text-brand-300">
                    <p>{format!("© {year} IsukuHub Ltd. All rights reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
