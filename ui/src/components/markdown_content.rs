use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_push_route;

/// `(heading, anchor, body_html)` as produced by `markdown_sections!`.
pub type Section = (&'static str, &'static str, &'static str);

/// Route an anchor click through the router when its href names one of our
/// pages. Other links keep their default behaviour.
fn route_internal_link(e: &MouseEvent, push_route: &Callback<Route>) {
    let anchor = e
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| {
            if el.tag_name() == "A" {
                Some(el)
            } else {
                el.closest("a").ok().flatten()
            }
        });

    if let Some(anchor) = anchor
        && let Some(href) = anchor.get_attribute("href")
        && href.starts_with('/')
        && let Some(route) = Route::recognize(&href)
    {
        e.prevent_default();
        push_route.emit(route);
    }
}

#[derive(Properties, PartialEq)]
pub struct MarkdownContentProps {
    pub html: &'static str,
}

/// Compile-time HTML with internal links routed client-side.
#[function_component]
pub fn MarkdownContent(props: &MarkdownContentProps) -> Html {
    let push_route = use_push_route();
    let onclick =
        Callback::from(move |e: MouseEvent| route_internal_link(&e, &push_route));

    html! {
        <div {onclick} class="prose prose-slate max-w-none prose-headings:text-slate-900 \
                              prose-headings:font-bold prose-p:text-slate-600 \
                              prose-a:text-brand-600">
            { Html::from_html_unchecked(props.html.into()) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalDocumentProps {
    pub title: AttrValue,
    pub updated: AttrValue,
    pub sections: &'static [Section],
}

/// Long-form policy page: a jump list of headings, then each section.
#[function_component]
pub fn LegalDocument(props: &LegalDocumentProps) -> Html {
    let headed = || props.sections.iter().filter(|(heading, ..)| !heading.is_empty());

    html! {
        <div class="pt-32 pb-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">
                    {&props.title}
                </h1>
                <p class="text-slate-500 mb-8">{format!("Last updated: {}", props.updated)}</p>

                <nav class="mb-12 p-6 bg-white rounded-2xl border border-slate-100">
                    <p class="text-xs font-bold text-slate-500 uppercase mb-3">{"Contents"}</p>
                    <ol class="grid sm:grid-cols-2 gap-2 text-sm">
                        {for headed().map(|(heading, anchor, _)| html! {
                            <li>
                                <a
                                    href={format!("#{anchor}")}
                                    class="text-brand-700 hover:text-brand-900 hover:underline"
                                >
                                    {*heading}
                                </a>
                            </li>
                        })}
                    </ol>
                </nav>

                {for props.sections.iter().map(|(heading, anchor, body)| html! {
                    <section id={*anchor} class="mb-10 scroll-mt-28">
                        if !heading.is_empty() {
                            <h3 class="text-xl font-bold text-slate-900 mb-3">{*heading}</h3>
                        }
                        <MarkdownContent html={*body} />
                    </section>
                })}
            </div>
        </div>
    }
}
