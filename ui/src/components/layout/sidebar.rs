use isukuhub_model::role::MenuItem;
use isukuhub_model::{Role, Tab};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub role: Role,
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

const LINK_BASE_CLASSES: &str = "flex-shrink-0 md:flex-shrink w-auto md:w-full \
    flex items-center gap-2 md:gap-3 px-3 md:px-4 py-2 md:py-3 text-sm \
    font-medium rounded-xl transition-all whitespace-nowrap";
const LINK_INACTIVE_CLASSES: &str =
    "text-slate-500 hover:bg-slate-50 hover:text-slate-900";
const LINK_ACTIVE_CLASSES: &str = "bg-brand-50 text-brand-700 shadow-sm";

fn tab_glyph(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "▦",
        Tab::Settings => "⚙",
        Tab::Schedule => "📅",
        Tab::Payments | Tab::Earnings | Tab::Market => "💵",
        Tab::Report | Tab::Compliance => "⚠",
        Tab::Guide => "📖",
        Tab::Support => "🛟",
        Tab::Tasks | Tab::Requests => "📋",
        Tab::Map | Tab::Gis => "🗺",
        Tab::Fleet => "🔧",
        Tab::Chat => "💬",
        Tab::History => "🕘",
        Tab::Inventory => "📦",
        Tab::Logistics => "🚚",
        Tab::Impact => "📈",
        Tab::Analytics => "📊",
        Tab::Users => "👥",
        Tab::Policy => "📜",
        Tab::Reports => "📄",
    }
}

/// Role menu. Horizontal strip on mobile, column on desktop.
#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let is_active =
        |item: &MenuItem| item.tab == props.active_tab
            || (item.tab == Tab::Overview && !props.role.offers(props.active_tab));

    html! {
        <aside class="w-full md:w-64 bg-white border-b md:border-b-0 md:border-r \
                      border-slate-200 h-auto md:min-h-screen p-4 flex flex-col shrink-0">
            <div class="mb-4 md:mb-8 px-2 flex items-center gap-3">
                <div class="w-8 h-8 bg-brand-600 rounded-lg flex items-center \
                            justify-center text-white font-bold">
                    {"IH"}
                </div>
                <span class="font-bold text-slate-900 text-lg tracking-tight">
                    {"IsukuHub"}
                </span>
            </div>

            <nav class="space-y-1 flex-1 overflow-x-auto md:overflow-visible flex \
                        md:block gap-2 md:gap-0 pb-2 md:pb-0">
                {for props.role.menu().iter().map(|item| {
                    let active = is_active(item);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let tab = item.tab;
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            {onclick}
                            class={format!(
                                "{} {}",
                                LINK_BASE_CLASSES,
                                if active { LINK_ACTIVE_CLASSES } else { LINK_INACTIVE_CLASSES }
                            )}
                        >
                            <span class={if active { "text-brand-600" } else { "text-slate-400" }}>
                                {tab_glyph(item.tab)}
                            </span>
                            <span>{item.label}</span>
                        </button>
                    }
                })}
            </nav>

            <div class="hidden md:block mt-auto pt-6 border-t border-slate-100">
                <div class="px-4 py-3 bg-slate-50 rounded-xl mb-4">
                    <p class="text-xs font-bold text-slate-500 uppercase mb-1">
                        {"Current Role"}
                    </p>
                    <p class="text-sm font-bold text-slate-900">
                        {props.role.to_string()}
                    </p>
                </div>
            </div>
        </aside>
    }
}
