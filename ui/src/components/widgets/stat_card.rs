use isukuhub_model::{Trend, TrendDirection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    /// Glyph shown in the badge.
    pub icon: AttrValue,
    #[prop_or_default]
    pub trend: Option<Trend>,
    #[prop_or_else(|| AttrValue::from("text-brand-600"))]
    pub color_class: AttrValue,
    #[prop_or_else(|| AttrValue::from("bg-brand-50"))]
    pub bg_class: AttrValue,
    #[prop_or_default]
    pub is_loading: bool,
}

fn trend_classes(direction: TrendDirection) -> (&'static str, &'static str) {
    match direction {
        TrendDirection::Up => ("bg-green-50 text-green-700 border-green-100", "↑"),
        TrendDirection::Down => ("bg-red-50 text-red-700 border-red-100", "↓"),
        TrendDirection::Neutral => {
            ("bg-slate-50 text-slate-600 border-slate-100", "–")
        }
    }
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    if props.is_loading {
        return html! {
            <div class="bg-white rounded-2xl p-6 border border-slate-100 shadow-sm h-full">
                <div class="flex justify-between mb-4">
                    <div class="w-10 h-10 rounded-xl bg-slate-100 animate-pulse"></div>
                    <div class="w-16 h-6 rounded-full bg-slate-50 animate-pulse"></div>
                </div>
                <div class="w-24 h-4 bg-slate-100 rounded mb-2 animate-pulse"></div>
                <div class="w-32 h-8 bg-slate-100 rounded animate-pulse"></div>
            </div>
        };
    }

    let trend = props.trend.as_ref().map(|trend| {
        let (classes, arrow) = trend_classes(trend.direction);
        html! {
            <div class={classes!(
                "flex", "items-center", "text-xs", "font-bold", "px-2.5",
                "py-1", "rounded-full", "border", classes
            )}>
                <span class="mr-1">{arrow}</span>
                {&trend.label}
            </div>
        }
    });

    html! {
        <div class="bg-white rounded-2xl p-6 border border-slate-100 shadow-sm \
                    hover:shadow-lg hover:-translate-y-1 transition-all duration-300">
            <div class="flex items-start justify-between mb-4">
                <div class={classes!(
                    "p-3", "rounded-xl", "text-xl", "leading-none",
                    props.bg_class.to_string(), props.color_class.to_string()
                )}>
                    {&props.icon}
                </div>
                {trend}
            </div>
            <h3 class="text-slate-500 text-sm font-medium mb-1 tracking-wide">
                {&props.title}
            </h3>
            <p class="text-2xl font-extrabold text-slate-900 tracking-tight">
                {&props.value}
            </p>
        </div>
    }
}
