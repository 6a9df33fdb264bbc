use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Optional slot under the subtitle, e.g. a search box.
    #[prop_or_default]
    pub children: Html,
}

/// Dark banner at the top of the secondary marketing pages.
#[function_component]
pub fn PageHero(props: &PageHeroProps) -> Html {
    html! {
        <div class="bg-slate-900 pt-36 pb-20 px-4 sm:px-6 lg:px-8 text-center text-white \
                    relative overflow-hidden">
            <div class="absolute -top-24 -right-24 w-96 h-96 bg-brand-500 opacity-20 \
                        rounded-full blur-3xl"></div>
            <div class="relative z-10 max-w-3xl mx-auto">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">{&props.title}</h1>
                <p class="text-slate-300 text-lg md:text-xl leading-relaxed">
                    {&props.subtitle}
                </p>
                {props.children.clone()}
            </div>
        </div>
    }
}
