use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-slate-900/50 z-50 flex items-center \
                   justify-center p-4"
        >
            <div
                role="dialog"
                class={classes!(
                    "bg-white", "rounded-2xl", "shadow-xl", "w-full", "p-6",
                    props.max_width.to_string()
                )}
            >
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-lg font-bold text-slate-900">
                        {&props.title}
                    </h3>
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="text-slate-400 hover:text-slate-600 text-xl leading-none"
                        aria-label="Close"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
