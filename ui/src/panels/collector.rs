use isukuhub_model::records::collector::{
    ChatMessage, HistoryEntry, PickupTask, Vehicle, VehicleStatus, Wallet, gauge_label,
    route_progress, toggle_task,
};
use isukuhub_model::role::CollectorPanel;
use isukuhub_model::{ChartDatum, MapKind, SimulatedAction, format_rwf};
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use super::{
    CELL, PRIMARY_BUTTON, PanelHeader, SettingsPanel, TONE_BAD, TONE_GOOD, TONE_NEUTRAL,
    status_pill,
};
use crate::components::{ChartCard, MapCard, Spinner, StatCard, TableCard};
use crate::hooks::use_simulated_action;
use crate::utils::event_value;
use crate::utils::time::{clock_time, now_local};

pub fn view(panel: CollectorPanel, loading: bool) -> Html {
    match panel {
        CollectorPanel::Overview => html! { <Overview {loading} /> },
        CollectorPanel::Tasks => html! { <Tasks /> },
        CollectorPanel::Map => html! {
            <div class="h-[80vh]">
                <MapCard title="Full Map View" kind={MapKind::Route} />
            </div>
        },
        CollectorPanel::Fleet => html! { <Fleet {loading} /> },
        CollectorPanel::Chat => html! { <Chat /> },
        CollectorPanel::History => html! { <History {loading} /> },
        CollectorPanel::Earnings => html! { <Earnings /> },
        CollectorPanel::Settings => html! { <SettingsPanel /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoadingProps {
    loading: bool,
}

fn columns(names: &[&'static str]) -> Vec<AttrValue> {
    names.iter().map(|name| AttrValue::from(*name)).collect()
}

#[function_component]
fn Overview(props: &LoadingProps) -> Html {
    let loading = props.loading;
    let weekly = vec![
        ChartDatum::new("Mon", 3.0),
        ChartDatum::new("Tue", 2.0),
        ChartDatum::new("Wed", 4.0),
    ];

    html! {
        <div class="space-y-6">
            <PanelHeader title="Route Dashboard" />
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Stops" value="34 / 120" icon="📍" is_loading={loading} />
                <StatCard title="Weight" value="2.4 T" icon="🚚"
                    color_class="text-blue-600" bg_class="bg-blue-50" is_loading={loading} />
                <StatCard title="Efficiency" value="94%" icon="📈"
                    color_class="text-green-600" bg_class="bg-green-50" is_loading={loading} />
                <StatCard title="Alerts" value="3" icon="⚠"
                    color_class="text-red-600" bg_class="bg-red-50" is_loading={loading} />
            </div>
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 h-96">
                    <MapCard title="Live Route" kind={MapKind::Route} is_loading={loading} />
                </div>
                <div class="h-96">
                    <ChartCard title="Weekly Volume" data={weekly} unit="T" is_loading={loading} />
                </div>
            </div>
        </div>
    }
}

#[function_component]
fn Tasks() -> Html {
    let tasks = use_state(PickupTask::seed);
    let (collected, total) = route_progress(&tasks);

    html! {
        <div class="space-y-6">
            <PanelHeader title="Daily Pickup List" subtitle="Sector 4 Route - Today">
                <span class="text-sm font-bold text-slate-600">
                    {format!("{collected} of {total} collected")}
                </span>
            </PanelHeader>
            <div class="bg-white rounded-2xl border border-slate-100 overflow-hidden">
                {for tasks.iter().map(|task| {
                    let onclick = {
                        let tasks = tasks.clone();
                        let id = task.id;
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*tasks).clone();
                            toggle_task(&mut next, id);
                            tasks.set(next);
                        })
                    };
                    html! {
                        <div
                            key={task.id}
                            {onclick}
                            role="checkbox"
                            aria-checked={task.done.to_string()}
                            class={classes!(
                                "p-4", "border-b", "border-slate-50", "flex", "items-center",
                                "justify-between", "cursor-pointer",
                                if task.done { "bg-slate-50" } else { "hover:bg-slate-50" }
                            )}
                        >
                            <div class="flex items-center gap-4">
                                <div class={classes!(
                                    "w-6", "h-6", "rounded", "border", "flex", "items-center",
                                    "justify-center", "text-white", "text-sm",
                                    if task.done { "bg-brand-600 border-brand-600" } else { "border-slate-300" }
                                )}>
                                    if task.done { {"✓"} }
                                </div>
                                <span class={classes!(
                                    "font-medium",
                                    if task.done { "text-slate-400 line-through" } else { "text-slate-900" }
                                )}>
                                    {&task.address}
                                </span>
                            </div>
                            if task.done {
                                {status_pill("Collected", TONE_GOOD)}
                            } else {
                                {status_pill("Pending", TONE_NEUTRAL)}
                            }
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[function_component]
fn Fleet(props: &LoadingProps) -> Html {
    let vehicles = use_memo((), |_| Vehicle::seed());

    html! {
        <div class="space-y-6">
            <PanelHeader title="Fleet Management" />
            <TableCard
                title="Vehicle Status"
                columns={columns(&["ID", "Type", "Driver", "Status", "Load", "Fuel"])}
                is_loading={props.loading}
            >
                {for vehicles.iter().map(|v| {
                    let tone = match v.status {
                        VehicleStatus::Active => TONE_GOOD,
                        VehicleStatus::Maintenance => TONE_BAD,
                        VehicleStatus::Idle => TONE_NEUTRAL,
                    };
                    html! {
                        <tr class="hover:bg-slate-50">
                            <td class={classes!(CELL, "font-mono", "text-xs")}>{v.id}</td>
                            <td class={CELL}>{v.kind}</td>
                            <td class={CELL}>{v.driver}</td>
                            <td class={CELL}>{status_pill(v.status.to_string(), tone)}</td>
                            <td class={classes!(CELL, "font-bold")}>{gauge_label(v.load)}</td>
                            <td class={CELL}>{gauge_label(v.fuel)}</td>
                        </tr>
                    }
                })}
            </TableCard>
        </div>
    }
}

#[function_component]
fn Chat() -> Html {
    let messages = use_state(ChatMessage::seed);
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| draft.set(event_value(&e)))
    };

    let onsubmit = {
        let messages = messages.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(message) = ChatMessage::outgoing(&draft, &clock_time(&now_local())) else {
                return;
            };
            let mut next = (*messages).clone();
            next.push(message);
            messages.set(next);
            draft.set(String::new());
        })
    };

    html! {
        <div class="space-y-6">
            <PanelHeader title="Team Chat" subtitle="Dispatch and drivers on today's routes." />
            <div class="bg-white rounded-2xl border border-slate-100 flex flex-col h-[60vh]">
                <div class="flex-1 overflow-y-auto p-6 space-y-4">
                    {for messages.iter().map(|m| html! {
                        <div class={classes!("flex", "flex-col", if m.mine { "items-end" } else { "items-start" })}>
                            <span class="text-xs text-slate-400 mb-1">
                                {format!("{} · {}", m.author, m.time)}
                            </span>
                            <p class={classes!(
                                "max-w-md", "px-4", "py-2", "rounded-2xl", "text-sm",
                                if m.mine { "bg-brand-600 text-white" } else { "bg-slate-100 text-slate-800" }
                            )}>
                                {&m.text}
                            </p>
                        </div>
                    })}
                </div>
                <form {onsubmit} class="border-t border-slate-100 p-4 flex gap-2">
                    <input
                        type="text"
                        value={(*draft).clone()}
                        {oninput}
                        placeholder="Type a message..."
                        class="flex-1 px-4 py-2 rounded-lg border border-slate-200 \
                               focus:ring-2 focus:ring-brand-500 outline-none"
                    />
                    <button type="submit" class={PRIMARY_BUTTON}>{"Send"}</button>
                </form>
            </div>
        </div>
    }
}

#[function_component]
fn History(props: &LoadingProps) -> Html {
    let entries = use_memo((), |_| HistoryEntry::seed());

    html! {
        <div class="space-y-6">
            <PanelHeader title="History" subtitle="Past routes and collection logs." />
            <TableCard
                title="Completed Routes"
                columns={columns(&["Date", "Route", "Stops", "Weight"])}
                is_loading={props.loading}
            >
                {for entries.iter().map(|entry| html! {
                    <tr class="hover:bg-slate-50">
                        <td class={CELL}>{entry.date}</td>
                        <td class={CELL}>{entry.route}</td>
                        <td class={CELL}>{entry.stops.to_string()}</td>
                        <td class={classes!(CELL, "font-bold")}>{format!("{} T", entry.weight_t)}</td>
                    </tr>
                })}
            </TableCard>
        </div>
    }
}

#[function_component]
fn Earnings() -> Html {
    let wallet = use_state(Wallet::seed);
    let action = use_simulated_action();

    let cash_out = {
        let wallet = wallet.clone();
        let action = action.clone();
        Callback::from(move |_: MouseEvent| {
            let wallet = wallet.clone();
            action.run_then(
                SimulatedAction::cash_out(),
                Callback::from(move |()| {
                    let mut next = (*wallet).clone();
                    if let Some(amount) = next.cash_out() {
                        tracing::info!(%amount, "collector cash out");
                    }
                    wallet.set(next);
                }),
            );
        })
    };

    let weekly: Vec<ChartDatum> = wallet
        .entries
        .iter()
        .map(|e| ChartDatum::new(e.week, e.amount.to_f64().unwrap_or(0.0)))
        .collect();
    let pending = action.is_pending();
    let empty = wallet.balance.is_zero();

    html! {
        <div class="space-y-6">
            <PanelHeader title="Earnings" subtitle="Financial performance dashboard." />
            <div class="bg-white rounded-2xl border border-slate-100 p-6 flex flex-col \
                        md:flex-row md:items-center justify-between gap-4">
                <div>
                    <p class="text-sm font-semibold text-slate-500">{"Available balance"}</p>
                    <p class="text-3xl font-bold text-slate-900">{format_rwf(wallet.balance)}</p>
                </div>
                <button onclick={cash_out} disabled={pending || empty} class={PRIMARY_BUTTON}>
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                        {"Processing..."}
                    } else {
                        {"Cash Out to Mobile Money"}
                    }
                </button>
            </div>
            <div class="h-80">
                <ChartCard title="Weekly Earnings" data={weekly} unit="RWF" />
            </div>
        </div>
    }
}
