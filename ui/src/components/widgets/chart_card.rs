use isukuhub_model::ChartDatum;
use isukuhub_model::chart::{bar_fractions, percent_style};
use yew::prelude::*;

const DEFAULT_BAR_COLOR: &str = "bg-brand-500";
const SKELETON_HEIGHTS: [&str; 5] = ["45%", "70%", "30%", "60%", "50%"];

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub data: Vec<ChartDatum>,
    /// Unit shown in the hover tooltip.
    #[prop_or_else(|| AttrValue::from("units"))]
    pub unit: AttrValue,
    #[prop_or_default]
    pub is_loading: bool,
}

/// Bar chart scaled to the tallest bar.
#[function_component]
pub fn ChartCard(props: &ChartCardProps) -> Html {
    if props.is_loading {
        return html! {
            <div class="bg-white rounded-2xl border border-slate-100 shadow-sm p-6 h-full flex flex-col">
                <div class="mb-6 space-y-2">
                    <div class="w-48 h-6 bg-slate-100 rounded animate-pulse"></div>
                    <div class="w-32 h-4 bg-slate-50 rounded animate-pulse"></div>
                </div>
                <div class="flex-1 flex items-end justify-between gap-2 min-h-[150px]">
                    {for SKELETON_HEIGHTS.iter().map(|height| html! {
                        <div class="w-full h-32 flex flex-col justify-end items-center gap-2">
                            <div
                                class="w-full bg-slate-100 rounded-t-lg animate-pulse"
                                style={format!("height: {height}")}
                            ></div>
                            <div class="w-8 h-3 bg-slate-50 rounded animate-pulse"></div>
                        </div>
                    })}
                </div>
            </div>
        };
    }

    let values: Vec<f64> = props.data.iter().map(|d| d.value).collect();
    let fractions = bar_fractions(&values);

    html! {
        <div class="bg-white rounded-2xl border border-slate-100 shadow-sm \
                    hover:shadow-md transition-all duration-300 p-6 h-full flex flex-col">
            <div class="mb-6">
                <h3 class="text-lg font-bold text-slate-900">{&props.title}</h3>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-slate-500">{subtitle}</p>
                }
            </div>

            <div class="flex-1 flex items-end justify-between gap-2 min-h-[150px]">
                {for props.data.iter().zip(fractions).map(|(datum, fraction)| html! {
                    <div class="flex flex-col items-center gap-2 w-full group relative">
                        <div class="relative w-full flex items-end justify-center h-32 \
                                    bg-slate-50 rounded-lg overflow-hidden">
                            <div
                                class={classes!(
                                    "w-full", "mx-1", "rounded-t-lg",
                                    "transition-all", "duration-1000",
                                    "group-hover:opacity-80",
                                    datum.color.unwrap_or(DEFAULT_BAR_COLOR)
                                )}
                                style={format!("height: {}", percent_style(fraction))}
                            ></div>
                        </div>
                        <div class="absolute -top-8 left-1/2 -translate-x-1/2 \
                                    bg-slate-800 text-white text-xs font-bold py-1 px-2 \
                                    rounded opacity-0 group-hover:opacity-100 \
                                    transition-all pointer-events-none z-10 whitespace-nowrap">
                            {format!("{} {}", datum.value, props.unit)}
                        </div>
                        <span class="text-xs font-medium text-slate-500 truncate w-full \
                                     text-center group-hover:text-brand-600">
                            {&datum.label}
                        </span>
                    </div>
                })}
            </div>
        </div>
    }
}
