use std::rc::Rc;
use std::str::FromStr;

use gloo_timers::callback::Interval;
use isukuhub_model::records::recycler::{
    InventoryItem, MarketListing, PickupRequest, RequestStatus, Shipment, ShipmentStatus,
};
use isukuhub_model::role::RecyclerPanel;
use isukuhub_model::{ChartDatum, MapKind, SimulatedAction, Trend, TrendDirection, format_rwf};
use rust_decimal::Decimal;
use yew::prelude::*;

use super::{
    CELL, PRIMARY_BUTTON, PanelHeader, SECONDARY_BUTTON, SettingsPanel, TONE_BAD, TONE_BRAND,
    TONE_GOOD, TONE_NEUTRAL, TONE_WARN, status_pill,
};
use crate::components::{ChartCard, MapCard, Modal, Spinner, StatCard, TableCard};
use crate::contexts::toast::use_toast;
use crate::hooks::use_simulated_action;
use crate::utils::{event_value, random_unit, select_value};

/// How often marketplace prices move.
const MARKET_TICK_MS: u32 = 5000;

pub fn view(panel: RecyclerPanel, loading: bool) -> Html {
    match panel {
        RecyclerPanel::Overview => html! { <Overview {loading} /> },
        RecyclerPanel::Requests => html! { <Requests /> },
        RecyclerPanel::Inventory => html! { <Inventory /> },
        RecyclerPanel::Market => html! { <Market {loading} /> },
        RecyclerPanel::Logistics => html! { <Logistics {loading} /> },
        RecyclerPanel::Impact => html! { <Impact {loading} /> },
        RecyclerPanel::Settings => html! { <SettingsPanel /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoadingProps {
    loading: bool,
}

#[function_component]
fn Overview(props: &LoadingProps) -> Html {
    let loading = props.loading;
    html! {
        <div class="space-y-6">
            <PanelHeader title="Sourcing Hub" />
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Sourced" value="850 kg" icon="🍃" is_loading={loading} />
                <StatCard title="Nearby" value="1.2 T" icon="📍"
                    color_class="text-orange-600" bg_class="bg-orange-50" is_loading={loading} />
                <StatCard title="Requests" value="12" icon="👥"
                    color_class="text-blue-600" bg_class="bg-blue-50" is_loading={loading} />
                <StatCard title="Offset" value="3.2 T" icon="✓"
                    color_class="text-green-600" bg_class="bg-green-50" is_loading={loading} />
            </div>
            <div class="h-96">
                <MapCard title="Material Source Map" kind={MapKind::Points} is_loading={loading} />
            </div>
        </div>
    }
}

#[function_component]
fn Requests() -> Html {
    let requests = use_state(PickupRequest::seed);
    let toasts = use_toast();

    let decide = |id: u32, accept: bool| {
        let requests = requests.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*requests).clone();
            let Some(request) = next.iter_mut().find(|r| r.id == id) else {
                return;
            };
            if request.decide(accept) {
                let verb = if accept { "accepted" } else { "declined" };
                toasts.info(format!("Request from {} {verb}.", request.requester));
                requests.set(next);
            }
        })
    };

    html! {
        <div class="space-y-6">
            <PanelHeader
                title="Pickup Requests"
                subtitle="Incoming requests from households and businesses."
            />
            <div class="grid gap-4">
                {for requests.iter().map(|request| {
                    let tone = match request.status {
                        RequestStatus::Pending => TONE_WARN,
                        RequestStatus::Accepted => TONE_GOOD,
                        RequestStatus::Rejected => TONE_BAD,
                    };
                    html! {
                        <div key={request.id} class="bg-white p-6 rounded-2xl border border-slate-100 \
                                                     flex flex-col md:flex-row md:items-center \
                                                     justify-between gap-4">
                            <div>
                                <h3 class="font-bold text-slate-900">{request.requester}</h3>
                                <p class="text-sm text-slate-500">
                                    {format!(
                                        "{} · {} kg · {}",
                                        request.material, request.quantity_kg, request.location
                                    )}
                                </p>
                            </div>
                            <div class="flex items-center gap-3">
                                {status_pill(request.status.to_string(), tone)}
                                if request.status == RequestStatus::Pending {
                                    <button onclick={decide(request.id, true)} class={PRIMARY_BUTTON}>
                                        {"Accept"}
                                    </button>
                                    <button onclick={decide(request.id, false)} class={SECONDARY_BUTTON}>
                                        {"Decline"}
                                    </button>
                                }
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[function_component]
fn Inventory() -> Html {
    let items = use_state(InventoryItem::seed);
    let editing = use_state(|| false);

    let open = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };
    let close = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(false))
    };
    let on_apply = {
        let items = items.clone();
        let editing = editing.clone();
        Callback::from(move |(material, delta): (&'static str, Decimal)| {
            let mut next = (*items).clone();
            if let Some(item) = next.iter_mut().find(|i| i.material == material) {
                item.apply_delta(delta);
            }
            items.set(next);
            editing.set(false);
        })
    };

    html! {
        <div class="space-y-6">
            <PanelHeader title="Inventory Management">
                <button onclick={open} class={PRIMARY_BUTTON}>{"Update Stock"}</button>
            </PanelHeader>
            <div class="grid md:grid-cols-3 gap-6">
                {for items.iter().map(|item| html! {
                    <div class="bg-white p-6 rounded-2xl border border-slate-100">
                        <div class="flex justify-between mb-4">
                            <span class="font-bold text-lg">{item.material}</span>
                            <span class="text-brand-500">{"📦"}</span>
                        </div>
                        <div class="text-3xl font-bold mb-2">{item.quantity_label()}</div>
                        <div class="w-full bg-slate-100 rounded-full h-2 mb-1">
                            <div
                                class="bg-brand-500 h-2 rounded-full transition-all"
                                style={format!("width: {}%", item.fill_percent())}
                            ></div>
                        </div>
                        <span class="text-xs text-slate-500">
                            {format!("{}% Capacity Filled", item.fill_percent())}
                        </span>
                    </div>
                })}
            </div>
            if *editing {
                <Modal title="Update Stock" on_close={close}>
                    <StockForm
                        materials={items.iter().map(|i| i.material).collect::<Vec<_>>()}
                        {on_apply}
                    />
                </Modal>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StockFormProps {
    materials: Vec<&'static str>,
    on_apply: Callback<(&'static str, Decimal)>,
}

#[function_component]
fn StockForm(props: &StockFormProps) -> Html {
    let material = use_state(|| props.materials.first().copied().unwrap_or_default());
    let delta = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let action = use_simulated_action();

    let on_material = {
        let material = material.clone();
        let materials = props.materials.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            if let Some(found) = materials.iter().find(|m| **m == value) {
                material.set(*found);
            }
        })
    };
    let on_delta = {
        let delta = delta.clone();
        Callback::from(move |e: InputEvent| delta.set(event_value(&e)))
    };

    let onsubmit = {
        let material = material.clone();
        let delta = delta.clone();
        let error = error.clone();
        let action = action.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let amount = match Decimal::from_str(delta.trim()) {
                Ok(amount) if !amount.is_zero() => amount,
                _ => {
                    error.set(Some("Enter a non-zero quantity in tonnes."));
                    return;
                }
            };
            error.set(None);
            let material = *material;
            let on_apply = on_apply.clone();
            action.run_then(
                SimulatedAction::update_stock(material),
                Callback::from(move |()| on_apply.emit((material, amount))),
            );
        })
    };

    let pending = action.is_pending();

    html! {
        <form {onsubmit} novalidate=true class="space-y-4">
            <div>
                <label for="material" class="block text-sm font-semibold text-slate-700 mb-2">
                    {"Material"}
                </label>
                <select id="material" onchange={on_material}
                    class="w-full px-4 py-2 bg-slate-50 border border-slate-200 rounded-lg">
                    {for props.materials.iter().map(|m| html! {
                        <option selected={*m == *material}>{*m}</option>
                    })}
                </select>
            </div>
            <div>
                <label for="delta" class="block text-sm font-semibold text-slate-700 mb-2">
                    {"Change in tonnes"}
                </label>
                <input
                    id="delta"
                    type="number"
                    step="0.1"
                    value={(*delta).clone()}
                    oninput={on_delta}
                    placeholder="e.g. 0.5 or -1.2"
                    class="w-full px-4 py-2 bg-slate-50 border border-slate-200 rounded-lg"
                />
            </div>
            if let Some(message) = *error {
                <p class="text-sm text-red-600">{message}</p>
            }
            <button type="submit" disabled={pending} class={classes!(PRIMARY_BUTTON, "w-full", "justify-center")}>
                if pending {
                    <Spinner class={classes!("w-4", "h-4")} />
                    {"Updating..."}
                } else {
                    {"Save"}
                }
            </button>
        </form>
    }
}

#[derive(Clone, PartialEq)]
struct MarketBoard {
    listings: Vec<MarketListing>,
}

/// One random roll per listing.
struct PriceTick(Vec<f64>);

impl Reducible for MarketBoard {
    type Action = PriceTick;

    fn reduce(self: Rc<Self>, PriceTick(rolls): PriceTick) -> Rc<Self> {
        let mut listings = self.listings.clone();
        for (listing, roll) in listings.iter_mut().zip(rolls) {
            listing.jitter(roll);
        }
        Rc::new(MarketBoard { listings })
    }
}

#[function_component]
fn Market(props: &LoadingProps) -> Html {
    let board = use_reducer(|| MarketBoard {
        listings: MarketListing::seed(),
    });
    let alerts = use_simulated_action();

    {
        let dispatcher = board.dispatcher();
        let count = board.listings.len();
        use_effect_with((), move |_| {
            let interval = Interval::new(MARKET_TICK_MS, move || {
                dispatcher.dispatch(PriceTick((0..count).map(|_| random_unit()).collect()));
            });
            move || drop(interval)
        });
    }

    let enable_alerts = {
        let alerts = alerts.clone();
        Callback::from(move |_: MouseEvent| alerts.run(SimulatedAction::price_alerts()))
    };
    let pending = alerts.is_pending();
    let enabled = alerts.is_completed();

    html! {
        <div class="space-y-6">
            <PanelHeader title="Marketplace" subtitle="Live buy prices for sorted materials.">
                <button onclick={enable_alerts} disabled={pending || enabled} class={SECONDARY_BUTTON}>
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                    }
                    {if enabled { "Price Alerts On" } else { "Enable Price Alerts" }}
                </button>
            </PanelHeader>
            <TableCard
                title="Buy Prices"
                columns={vec![
                    AttrValue::from("Material"),
                    AttrValue::from("Price / kg"),
                    AttrValue::from("Change"),
                ]}
                is_loading={props.loading}
            >
                {for board.listings.iter().map(|listing| {
                    let trend = if listing.change.is_sign_negative() && !listing.change.is_zero() {
                        Trend::down(format!("{}%", listing.change))
                    } else if listing.change.is_zero() {
                        Trend::neutral("0%")
                    } else {
                        Trend::up(format!("+{}%", listing.change))
                    };
                    let tone = match trend.direction {
                        TrendDirection::Up => "text-green-600",
                        TrendDirection::Down => "text-red-600",
                        TrendDirection::Neutral => "text-slate-500",
                    };
                    html! {
                        <tr class="hover:bg-slate-50">
                            <td class={classes!(CELL, "font-bold")}>{listing.material}</td>
                            <td class={CELL}>{format_rwf(listing.price)}</td>
                            <td class={classes!(CELL, "font-semibold", tone)}>{trend.label}</td>
                        </tr>
                    }
                })}
            </TableCard>
        </div>
    }
}

#[function_component]
fn Logistics(props: &LoadingProps) -> Html {
    let shipments = use_memo((), |_| Shipment::seed());

    html! {
        <div class="space-y-6">
            <PanelHeader title="Logistics" subtitle="Transport coordination view." />
            <TableCard
                title="Shipments"
                columns={vec![
                    AttrValue::from("ID"),
                    AttrValue::from("Material"),
                    AttrValue::from("Destination"),
                    AttrValue::from("ETA"),
                    AttrValue::from("Status"),
                ]}
                is_loading={props.loading}
            >
                {for shipments.iter().map(|s| {
                    let tone = match s.status {
                        ShipmentStatus::Scheduled => TONE_NEUTRAL,
                        ShipmentStatus::InTransit => TONE_BRAND,
                        ShipmentStatus::Delivered => TONE_GOOD,
                    };
                    html! {
                        <tr class="hover:bg-slate-50">
                            <td class={classes!(CELL, "font-mono", "text-xs")}>{s.id}</td>
                            <td class={CELL}>{s.material}</td>
                            <td class={CELL}>{s.destination}</td>
                            <td class={CELL}>{s.eta}</td>
                            <td class={CELL}>{status_pill(s.status.to_string(), tone)}</td>
                        </tr>
                    }
                })}
            </TableCard>
        </div>
    }
}

#[function_component]
fn Impact(props: &LoadingProps) -> Html {
    let loading = props.loading;
    let diverted = vec![
        ChartDatum::new("Jul", 2.1),
        ChartDatum::new("Aug", 2.6),
        ChartDatum::new("Sep", 3.0),
        ChartDatum::new("Oct", 3.2),
    ];

    html! {
        <div class="space-y-6">
            <PanelHeader title="Impact Reports" subtitle="Environmental metrics." />
            <div class="grid sm:grid-cols-3 gap-6">
                <StatCard title="CO₂ Offset" value="3.2 T" icon="🌍"
                    trend={Trend::up("+7%")} is_loading={loading} />
                <StatCard title="Landfill Diverted" value="10.9 T" icon="♻"
                    color_class="text-green-600" bg_class="bg-green-50" is_loading={loading} />
                <StatCard title="Jobs Supported" value="24" icon="👥"
                    color_class="text-blue-600" bg_class="bg-blue-50" is_loading={loading} />
            </div>
            <div class="h-80">
                <ChartCard title="Tonnes Diverted" subtitle={AttrValue::from("Last four months")}
                    data={diverted} unit="T" is_loading={loading} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_tick_moves_every_listing() {
        let board = Rc::new(MarketBoard {
            listings: MarketListing::seed(),
        });
        let before = board.listings.clone();
        let after = board.reduce(PriceTick(vec![1.0; before.len()]));
        for (old, new) in before.iter().zip(&after.listings) {
            assert!(new.price > old.price, "{}", old.material);
        }
    }

    #[test]
    fn a_short_tick_leaves_the_rest_alone() {
        let board = Rc::new(MarketBoard {
            listings: MarketListing::seed(),
        });
        let before = board.listings.clone();
        let after = board.reduce(PriceTick(vec![0.0]));
        assert!(after.listings[0].price < before[0].price);
        assert_eq!(after.listings[1..], before[1..]);
    }
}
