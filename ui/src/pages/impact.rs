use isukuhub_model::MapKind;
use yew::prelude::*;

use super::home::{StatsBar, Testimonials};
use crate::components::{Cta, MapCard, PageHero};
use crate::hooks::use_title;

const OUTCOMES: [&str; 3] = [
    "Reduced carbon emissions from collection trucks",
    "Higher recycling participation rates",
    "Improved public hygiene scores",
];

#[function_component]
pub fn ImpactPage() -> Html {
    use_title("Impact");

    html! {
        <>
            <PageHero
                title="Our Impact"
                subtitle="Transforming waste into opportunity for a cleaner, greener Rwanda."
            />
            <StatsBar />
            <section class="py-24 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                    <MapCard title="Impact Map Visualization" kind={MapKind::Heatmap} />
                    <div>
                        <h2 class="text-3xl font-bold text-slate-900 mb-6">
                            {"Cleaner Streets, Better Health"}
                        </h2>
                        <p class="text-lg text-slate-600 mb-8 leading-relaxed">
                            {"By optimizing collection routes and enabling rapid reporting of \
                              illegal dumping, IsukuHub has directly contributed to a significant \
                              reduction in street-level waste accumulation in pilot sectors."}
                        </p>
                        <ul class="space-y-4">
                            {for OUTCOMES.iter().map(|outcome| html! {
                                <li class="flex items-center gap-3 text-slate-700">
                                    <span class="w-6 h-6 rounded-full bg-brand-100 text-brand-700 \
                                                 flex items-center justify-center text-sm font-bold">
                                        {"✓"}
                                    </span>
                                    {*outcome}
                                </li>
                            })}
                        </ul>
                    </div>
                </div>
            </section>
            <Testimonials />
            <Cta />
        </>
    }
}
