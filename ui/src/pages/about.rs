use yew::prelude::*;

use crate::components::{Cta, PageHero};
use crate::hooks::use_title;

const VISION: [&str; 3] = [
    "Zero illegal dumping in Kigali sectors.",
    "100% digital payment adoption for waste services.",
    "Create 5,000+ green jobs in recycling and logistics.",
];

/// `(glyph, tint, title, body)`
const VALUES: [(&str, &str, &str, &str); 3] = [
    (
        "🛡",
        "bg-blue-50 text-blue-600",
        "Transparency",
        "No hidden fees, no missed pickups without explanation. We build trust \
         through open data.",
    ),
    (
        "👥",
        "bg-green-50 text-green-600",
        "Community First",
        "Technology works best when it serves people. We design for everyone, \
         from households to collectors.",
    ),
    (
        "♥",
        "bg-purple-50 text-purple-600",
        "Sustainability",
        "Every line of code we write is aimed at preserving our environment for \
         future generations.",
    ),
];

#[function_component]
pub fn AboutPage() -> Html {
    use_title("About Us");

    html! {
        <>
            <PageHero
                title="Building a Cleaner Kigali"
                subtitle="IsukuHub is a technology company dedicated to modernizing waste \
                          management infrastructure in Rwanda through smart data, transparency, \
                          and community engagement."
            />

            <section class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl font-bold text-slate-900 mb-6">{"Our Mission"}</h2>
                        <p class="text-lg text-slate-600 mb-6 leading-relaxed">
                            {"We believe that a clean city is the foundation of a healthy society. \
                              Our mission is to eliminate illegal dumping and inefficiency by \
                              connecting households, waste collectors, and recyclers on a single, \
                              transparent digital platform."}
                        </p>
                        <p class="text-lg text-slate-600 leading-relaxed">
                            {"By digitizing the waste value chain, we empower citizens to take \
                              ownership of their environment while providing city leaders with the \
                              data they need to make smarter infrastructure decisions."}
                        </p>
                    </div>
                    <div class="bg-brand-50 rounded-3xl p-8 md:p-12">
                        <h3 class="text-2xl font-bold text-brand-900 mb-4">{"The 2030 Vision"}</h3>
                        <ul class="space-y-4">
                            {for VISION.iter().enumerate().map(|(i, goal)| html! {
                                <li class="flex items-start gap-3">
                                    <div class="w-6 h-6 rounded-full bg-brand-500 text-white flex \
                                                items-center justify-center text-sm font-bold mt-0.5">
                                        {(i + 1).to_string()}
                                    </div>
                                    <p class="text-brand-800">{*goal}</p>
                                </li>
                            })}
                        </ul>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-slate-50 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center max-w-2xl mx-auto mb-16">
                        <h2 class="text-3xl font-bold text-slate-900 mb-4">{"Our Core Values"}</h2>
                        <p class="text-slate-600">
                            {"The principles that guide every feature we build and every \
                              partnership we form."}
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {for VALUES.iter().map(|(glyph, tint, title, body)| html! {
                            <div class="bg-white p-8 rounded-2xl border border-slate-100 shadow-sm \
                                        text-center hover:shadow-md transition-shadow">
                                <div class={classes!(
                                    "w-12", "h-12", "rounded-xl", "flex", "items-center",
                                    "justify-center", "mx-auto", "mb-6", "text-xl", *tint
                                )}>
                                    {*glyph}
                                </div>
                                <h3 class="text-xl font-bold text-slate-900 mb-2">{*title}</h3>
                                <p class="text-slate-600">{*body}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <Cta />
        </>
    }
}
