use isukuhub_model::records::household::{
    Bill, PaymentRecord, PaymentStatus, PickupStatus, ScheduledPickup, search_guide,
};
use isukuhub_model::report::SubmittedReport;
use isukuhub_model::role::HouseholdPanel;
use isukuhub_model::{
    ChartDatum, MapKind, Prompt, SimulatedAction, Tab, Trend, format_rwf,
};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::{
    CELL, PRIMARY_BUTTON, PanelHeader, SECONDARY_BUTTON, SettingsPanel, TONE_BRAND,
    TONE_BAD, TONE_GOOD, TONE_NEUTRAL, TONE_WARN, status_pill,
};
use crate::Route;
use crate::State;
use crate::components::{AiResultBox, ChartCard, MapCard, ReportForm, Spinner, StatCard, TableCard};
use crate::hooks::{use_ai_answer, use_simulated_action};
use crate::utils::event_value;
use crate::utils::time::{now_local, short_date};

pub fn view(panel: HouseholdPanel, loading: bool) -> Html {
    match panel {
        HouseholdPanel::Overview => html! { <Overview {loading} /> },
        HouseholdPanel::Schedule => html! { <Schedule /> },
        HouseholdPanel::Payments => html! { <Payments {loading} /> },
        HouseholdPanel::Report => html! { <Report /> },
        HouseholdPanel::Guide => html! { <Guide /> },
        HouseholdPanel::Support => html! { <Support /> },
        HouseholdPanel::Settings => html! { <SettingsPanel /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoadingProps {
    loading: bool,
}

fn waste_composition() -> Vec<ChartDatum> {
    [
        ("Organic", 45.0),
        ("Plastic", 20.0),
        ("Paper", 15.0),
        ("Glass", 10.0),
        ("Metal", 5.0),
    ]
    .into_iter()
    .map(|(label, value)| ChartDatum::new(label, value))
    .collect()
}

#[function_component]
fn Overview(props: &LoadingProps) -> Html {
    let loading = props.loading;
    let bill = Bill::current();

    html! {
        <div class="space-y-6">
            <PanelHeader
                title="My Household Overview"
                subtitle="Welcome back! Here is your waste summary."
            />
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Compliance Score" value="98/100" icon="✓"
                    trend={Trend::up("+2%")} is_loading={loading} />
                <StatCard title="Next Pickup" value="Tomorrow, 9AM" icon="🚚"
                    color_class="text-blue-600" bg_class="bg-blue-50" is_loading={loading} />
                <StatCard title="Recycling Points" value="1,240 pts" icon="🍃"
                    color_class="text-green-600" bg_class="bg-green-50"
                    trend={Trend::neutral("Gold Tier")} is_loading={loading} />
                <StatCard title="Monthly Bill" value={format_rwf(bill.amount)} icon="💵"
                    color_class="text-orange-600" bg_class="bg-orange-50"
                    trend={Trend::neutral(if bill.paid { "Paid" } else { "Due" })}
                    is_loading={loading} />
            </div>
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 h-96">
                    <ChartCard
                        title="My Waste Composition"
                        subtitle={AttrValue::from("Breakdown by weight (kg) this month")}
                        data={waste_composition()}
                        unit="kg"
                        is_loading={loading}
                    />
                </div>
                <div class="h-96">
                    <MapCard title="Truck ETA Tracker" kind={MapKind::Basic} is_loading={loading} />
                </div>
            </div>
        </div>
    }
}

#[function_component]
fn Schedule() -> Html {
    let pickups = use_state(ScheduledPickup::seed);
    let action = use_simulated_action();

    let request_extra = {
        let pickups = pickups.clone();
        let action = action.clone();
        Callback::from(move |_: MouseEvent| {
            let pickups = pickups.clone();
            action.run_then(
                SimulatedAction::extra_pickup(),
                Callback::from(move |()| {
                    let mut next = (*pickups).clone();
                    next.push(ScheduledPickup::extra_request());
                    pickups.set(next);
                }),
            );
        })
    };

    let pending = action.is_pending();

    html! {
        <div class="space-y-6">
            <PanelHeader title="Pickup Schedule" subtitle="Upcoming collection dates.">
                <button onclick={request_extra} disabled={pending} class={PRIMARY_BUTTON}>
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                        {"Requesting..."}
                    } else {
                        {"Request Extra Pickup"}
                    }
                </button>
            </PanelHeader>
            <div class="bg-white rounded-2xl border border-slate-100 overflow-hidden">
                {for pickups.iter().map(|item| {
                    let tone = match item.status {
                        PickupStatus::Scheduled => TONE_BRAND,
                        PickupStatus::Requested => TONE_WARN,
                        PickupStatus::Completed => TONE_GOOD,
                    };
                    html! {
                        <div class="p-6 border-b border-slate-50 last:border-none flex flex-col \
                                    md:flex-row md:items-center justify-between hover:bg-slate-50 gap-4">
                            <div class="flex items-center gap-6">
                                <div class="bg-slate-100 rounded-xl p-4 text-center min-w-[80px]">
                                    <p class="text-xs font-bold text-slate-500 uppercase">{&item.day}</p>
                                    <p class="text-xl font-bold text-slate-900">{&item.date}</p>
                                </div>
                                <div>
                                    <h3 class="text-lg font-bold text-slate-900">{&item.waste_type}</h3>
                                    <p class="text-slate-500 text-sm mt-1">{format!("🕘 {}", item.window)}</p>
                                </div>
                            </div>
                            {status_pill(item.status.to_string(), tone)}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[function_component]
fn Payments(props: &LoadingProps) -> Html {
    let bill = use_state(Bill::current);
    let history = use_state(PaymentRecord::seed);
    let action = use_simulated_action();

    let pay = {
        let bill = bill.clone();
        let history = history.clone();
        let action = action.clone();
        Callback::from(move |_: MouseEvent| {
            if bill.paid {
                return;
            }
            let bill = bill.clone();
            let history = history.clone();
            action.run_then(
                SimulatedAction::pay_bill(),
                Callback::from(move |()| {
                    let mut next_bill = (*bill).clone();
                    let mut next_history = (*history).clone();
                    if next_bill.pay(&mut next_history, &short_date(&now_local())) {
                        bill.set(next_bill);
                        history.set(next_history);
                    }
                }),
            );
        })
    };

    let pending = action.is_pending();

    html! {
        <div class="space-y-6">
            <PanelHeader title="Payments" subtitle="Your sanitation bills and receipts." />

            <div class="bg-white rounded-2xl border border-slate-100 p-6 flex flex-col \
                        md:flex-row md:items-center justify-between gap-4">
                <div>
                    <p class="text-sm font-semibold text-slate-500">
                        {format!("Current bill · {}", bill.period)}
                    </p>
                    <p class="text-3xl font-bold text-slate-900">{format_rwf(bill.amount)}</p>
                    <p class="text-sm text-slate-500">
                        if bill.paid {
                            {"Paid. Thank you!"}
                        } else {
                            {format!("Due {}", bill.due)}
                        }
                    </p>
                </div>
                <button onclick={pay} disabled={pending || bill.paid} class={PRIMARY_BUTTON}>
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                        {"Processing..."}
                    } else {
                        {if bill.paid { "Paid" } else { "Pay with Mobile Money" }}
                    }
                </button>
            </div>

            <TableCard
                title="History"
                columns={vec![
                    AttrValue::from("ID"),
                    AttrValue::from("Amount"),
                    AttrValue::from("Date"),
                    AttrValue::from("Method"),
                    AttrValue::from("Status"),
                ]}
                is_loading={props.loading}
            >
                {for history.iter().map(|record| {
                    let tone = match record.status {
                        PaymentStatus::Paid => TONE_GOOD,
                        PaymentStatus::Pending => TONE_WARN,
                        PaymentStatus::Overdue => TONE_BAD,
                    };
                    html! {
                        <tr class="hover:bg-slate-50">
                            <td class={classes!(CELL, "font-mono")}>{&record.reference}</td>
                            <td class={CELL}>{format_rwf(record.amount)}</td>
                            <td class={CELL}>{&record.date}</td>
                            <td class={CELL}>{&record.method}</td>
                            <td class={CELL}>{status_pill(record.status.to_string(), tone)}</td>
                        </tr>
                    }
                })}
            </TableCard>
        </div>
    }
}

/// Same form as the public page; a finished report returns to the overview.
#[function_component]
fn Report() -> Html {
    let (_state, dispatch) = use_store::<State>();
    let on_submitted = Callback::from(move |_: SubmittedReport| {
        dispatch.reduce_mut(|state| state.session.select_tab(Tab::Overview));
    });

    html! {
        <div class="max-w-3xl space-y-6">
            <PanelHeader
                title="Report an Issue"
                subtitle="Flag illegal dumping or missed pickups instantly."
            />
            <div class="bg-white rounded-2xl border border-slate-100 p-6 md:p-8">
                <ReportForm {on_submitted} />
            </div>
        </div>
    }
}

#[function_component]
fn Guide() -> Html {
    let query = use_state(String::new);
    let answer = use_ai_answer();

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(event_value(&e)))
    };

    let ask = {
        let query = query.clone();
        let answer = answer.clone();
        Callback::from(move |()| {
            let item = query.trim();
            if !item.is_empty() {
                answer.ask(Prompt::disposal(item));
            }
        })
    };
    let onclick = ask.reform(|_: MouseEvent| ());
    let onkeydown = {
        let ask = ask.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                ask.emit(());
            }
        })
    };

    let items = search_guide(&query);

    html! {
        <div class="space-y-6">
            <PanelHeader
                title="Waste Sorting Guide"
                subtitle="Not sure where to throw it? Ask our AI or search the database."
            />
            <div class="max-w-xl flex gap-2">
                <input
                    type="text"
                    value={(*query).clone()}
                    {oninput}
                    {onkeydown}
                    placeholder="e.g., 'Broken glass', 'Pizza box'..."
                    class="flex-1 px-4 py-4 rounded-xl border border-slate-200 \
                           focus:ring-2 focus:ring-brand-500 outline-none shadow-sm"
                />
                <button
                    {onclick}
                    disabled={answer.loading}
                    class="px-6 rounded-xl bg-brand-600 text-white font-bold hover:bg-brand-700 \
                           disabled:opacity-50 flex items-center gap-2"
                >
                    if answer.loading {
                        <Spinner />
                    } else {
                        <span aria-hidden="true">{"✦"}</span>
                    }
                    {"Ask AI"}
                </button>
            </div>

            <AiResultBox loading={answer.loading} result={answer.text.clone()} title="Isuku AI Advice" />

            if items.is_empty() {
                <p class="text-sm text-slate-500">
                    {"No match in the guide. Try asking the AI instead."}
                </p>
            } else {
                <div class="grid md:grid-cols-3 gap-6 pt-4">
                    {for items.into_iter().map(|item| html! {
                        <div class="bg-white p-6 rounded-2xl border border-slate-100 flex \
                                    items-center justify-between">
                            <div>
                                <p class="font-bold text-slate-900">{item.name}</p>
                                <p class="text-xs text-slate-400">{item.bin.stream()}</p>
                            </div>
                            {status_pill(item.bin.to_string(), TONE_NEUTRAL)}
                        </div>
                    })}
                </div>
            }
        </div>
    }
}

#[function_component]
fn Support() -> Html {
    let action = use_simulated_action();
    let start_chat = {
        let action = action.clone();
        Callback::from(move |_: MouseEvent| action.run(SimulatedAction::start_chat()))
    };
    let pending = action.is_pending();

    html! {
        <div class="space-y-6">
            <PanelHeader title="Help & Support" />
            <div class="grid md:grid-cols-2 gap-6">
                <div class="bg-white p-6 rounded-2xl border border-slate-100">
                    <h3 class="font-bold mb-4">{"Contact Support"}</h3>
                    <p class="text-slate-500 text-sm mb-4">
                        {"Need help with a missed pickup or billing issue?"}
                    </p>
                    <button
                        onclick={start_chat}
                        disabled={pending}
                        class={classes!(SECONDARY_BUTTON, "w-full", "justify-center")}
                    >
                        if pending {
                            <Spinner class={classes!("w-4", "h-4")} />
                            {"Connecting..."}
                        } else {
                            {"Start Chat"}
                        }
                    </button>
                </div>
                <div class="bg-white p-6 rounded-2xl border border-slate-100">
                    <h3 class="font-bold mb-4">{"FAQs"}</h3>
                    <ul class="space-y-2 text-sm text-brand-600 font-medium">
                        <li>
                            <Link<Route> to={Route::Faq} classes="hover:underline">
                                {"How to report illegal dumping?"}
                            </Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::Faq} classes="hover:underline">
                                {"What goes in the green bin?"}
                            </Link<Route>>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isukuhub_model::chart::bar_fractions;

    #[test]
    fn organic_is_the_tallest_bar() {
        let values: Vec<f64> = waste_composition().iter().map(|d| d.value).collect();
        let fractions = bar_fractions(&values);
        assert_eq!(fractions[0], 1.0);
        assert!(fractions.iter().all(|f| *f <= 1.0));
    }
}
