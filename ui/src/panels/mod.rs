//! One component per dashboard panel, grouped by role. Each panel seeds its
//! own records on mount and forgets them on unmount.

mod collector;
mod household;
mod official;
mod recycler;
mod settings;

use isukuhub_model::Panel;
use yew::prelude::*;

pub use settings::SettingsPanel;

/// Render the panel for the current `(role, tab)` pair.
pub fn render(panel: Panel, loading: bool) -> Html {
    match panel {
        Panel::Household(panel) => household::view(panel, loading),
        Panel::Collector(panel) => collector::view(panel, loading),
        Panel::Recycler(panel) => recycler::view(panel, loading),
        Panel::Official(panel) => official::view(panel, loading),
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Buttons aligned to the right of the heading.
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn PanelHeader(props: &PanelHeaderProps) -> Html {
    html! {
        <div class="flex flex-col sm:flex-row sm:justify-between sm:items-end gap-4 mb-2">
            <div>
                <h1 class="text-2xl font-bold text-slate-900">{&props.title}</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-slate-500">{subtitle}</p>
                }
            </div>
            {props.children.clone()}
        </div>
    }
}

/// Coloured pill used for record statuses.
pub fn status_pill(label: impl Into<String>, tone: &'static str) -> Html {
    html! {
        <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", "font-bold", tone)}>
            {label.into()}
        </span>
    }
}

pub const TONE_GOOD: &str = "bg-green-100 text-green-700";
pub const TONE_BAD: &str = "bg-red-100 text-red-700";
pub const TONE_WARN: &str = "bg-orange-100 text-orange-700";
pub const TONE_NEUTRAL: &str = "bg-slate-100 text-slate-600";
pub const TONE_BRAND: &str = "bg-brand-100 text-brand-700";

pub const PRIMARY_BUTTON: &str = "px-4 py-2 bg-brand-600 text-white font-bold rounded-lg \
    text-sm hover:bg-brand-700 transition-colors flex items-center gap-2 \
    disabled:opacity-60 disabled:cursor-not-allowed";
pub const SECONDARY_BUTTON: &str = "px-4 py-2 bg-slate-100 text-slate-700 font-bold \
    rounded-lg text-sm hover:bg-slate-200 transition-colors flex items-center gap-2 \
    disabled:opacity-60 disabled:cursor-not-allowed";
pub const CELL: &str = "px-6 py-4 text-sm";
