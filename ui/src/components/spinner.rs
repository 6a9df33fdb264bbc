use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_else(|| classes!("w-5", "h-5"))]
    pub class: Classes,
}

#[function_component]
pub fn Spinner(props: &SpinnerProps) -> Html {
    html! {
        <span
            role="status"
            aria-label="Loading"
            class={classes!(
                "inline-block", "border-2", "border-current",
                "border-t-transparent", "rounded-full", "animate-spin",
                props.class.clone()
            )}
        ></span>
    }
}
