use isukuhub_model::content::filter_faqs;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::Cta;
use crate::hooks::use_title;
use crate::utils::event_value;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component]
fn FaqItem(props: &FaqItemProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="border-b border-slate-200">
            <button
                onclick={toggle}
                aria-expanded={open.to_string()}
                class="w-full py-6 flex items-center justify-between text-left focus:outline-none"
            >
                <span class={classes!(
                    "text-lg", "font-semibold",
                    if *open { "text-brand-700" } else { "text-slate-900" }
                )}>
                    {props.question}
                </span>
                <span class={classes!(
                    "w-7", "h-7", "rounded-full", "flex", "items-center", "justify-center",
                    "transition-colors", "shrink-0", "ml-4",
                    if *open { "bg-brand-100 text-brand-700" } else { "bg-slate-100 text-slate-500" }
                )}>
                    {if *open { "−" } else { "+" }}
                </span>
            </button>
            <div class={classes!(
                "overflow-hidden", "transition-all", "duration-300", "ease-in-out",
                if *open { "max-h-96 opacity-100 pb-6" } else { "max-h-0 opacity-0" }
            )}>
                <p class="text-slate-600 leading-relaxed">{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component]
pub fn FaqPage() -> Html {
    use_title("FAQ");
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(event_value(&e)))
    };

    let matches = filter_faqs(&query);

    html! {
        <div class="pt-20">
            <div class="bg-slate-50 py-20 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-bold text-slate-900 mb-6">
                    {"Frequently Asked Questions"}
                </h1>
                <div class="max-w-xl mx-auto relative">
                    <input
                        type="text"
                        value={(*query).clone()}
                        {oninput}
                        placeholder="Search for answers..."
                        class="w-full pl-12 pr-4 py-4 rounded-full border border-slate-200 \
                               focus:border-brand-500 focus:ring-2 focus:ring-brand-200 \
                               outline-none shadow-sm"
                    />
                    <span class="absolute left-5 top-1/2 -translate-y-1/2 text-slate-400">
                        {"⌕"}
                    </span>
                </div>
            </div>

            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-20 min-h-[50vh]">
                if matches.is_empty() {
                    <p class="text-center text-slate-500">
                        {format!("No answers match \u{201c}{}\u{201d}.", query.trim())}
                    </p>
                } else {
                    <div class="space-y-2">
                        {for matches.iter().map(|faq| html! {
                            <FaqItem
                                key={faq.question}
                                question={faq.question}
                                answer={faq.answer}
                            />
                        })}
                    </div>
                }
                <div class="mt-16 text-center">
                    <p class="text-slate-600">{"Still have questions?"}</p>
                    <Link<Route>
                        to={Route::Contact}
                        classes="text-brand-600 font-bold hover:underline mt-2 inline-block"
                    >
                        {"Contact our Support Team"}
                    </Link<Route>>
                </div>
            </div>
            <Cta />
        </div>
    }
}
