use isukuhub_model::content::{RESOURCES, ResourceKind};
use yew::prelude::*;

use crate::components::PageHero;
use crate::hooks::use_title;

fn kind_glyph(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Guide => "📘",
        ResourceKind::Policy => "📄",
        ResourceKind::Video => "🎬",
        ResourceKind::Download => "⬇",
        ResourceKind::Article => "📰",
    }
}

#[function_component]
pub fn ResourcesPage() -> Html {
    use_title("Resources");

    html! {
        <>
            <PageHero
                title="Resources"
                subtitle="Everything you need to know about using IsukuHub and managing waste effectively."
            />
            <section class="py-20 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {for RESOURCES.iter().map(|res| html! {
                        <a
                            href="#"
                            class="group flex items-center gap-4 p-6 bg-white rounded-2xl border \
                                   border-slate-100 hover:shadow-md hover:border-brand-200 \
                                   transition-all"
                        >
                            <div class="w-12 h-12 bg-brand-50 text-brand-600 rounded-xl flex \
                                        items-center justify-center text-xl shrink-0">
                                {kind_glyph(res.kind)}
                            </div>
                            <div>
                                <h3 class="font-bold text-slate-900 group-hover:text-brand-700 \
                                           transition-colors">
                                    {res.title}
                                </h3>
                                <p class="text-sm text-slate-500">{res.label}</p>
                            </div>
                        </a>
                    })}
                </div>
            </section>
        </>
    }
}
