use yew::prelude::*;

use super::{MarkdownText, Spinner};

#[derive(Properties, PartialEq)]
pub struct AiResultBoxProps {
    pub loading: bool,
    pub result: Option<String>,
    pub title: AttrValue,
}

/// Placeholder while a generated answer loads, then the answer itself.
/// Renders nothing before the first request.
#[function_component]
pub fn AiResultBox(props: &AiResultBoxProps) -> Html {
    if !props.loading && props.result.is_none() {
        return html! {};
    }

    html! {
        <div class="mt-4 p-4 bg-brand-50 border border-brand-100 rounded-xl">
            <div class="flex items-center gap-2 mb-2 text-brand-700 font-bold \
                        text-sm uppercase tracking-wider">
                if props.loading {
                    <Spinner class={classes!("w-3.5", "h-3.5")} />
                    {"Analyzing..."}
                } else {
                    <span aria-hidden="true">{"✦"}</span>
                    {&props.title}
                }
            </div>
            if props.loading {
                <div class="h-4 bg-brand-200/50 rounded w-3/4 animate-pulse"></div>
            } else {
                {for props.result.iter().map(|result| html! {
                    <MarkdownText text={result.clone()} class={classes!("text-slate-700")} />
                })}
            }
        </div>
    }
}
