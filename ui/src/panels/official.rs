use isukuhub_model::records::official::{
    AccountStatus, CaseStatus, CitizenReport, ComplianceCase, RegistryEntry, filter_registry,
};
use isukuhub_model::role::OfficialPanel;
use isukuhub_model::{ChartDatum, MapKind, Prompt, Role};
use yew::prelude::*;

use super::{
    CELL, PanelHeader, SECONDARY_BUTTON, SettingsPanel, TONE_BAD, TONE_GOOD,
    TONE_WARN, status_pill,
};
use crate::components::{AiResultBox, ChartCard, MapCard, Spinner, StatCard, TableCard};
use crate::hooks::use_ai_answer;
use crate::utils::select_value;

const AI_BUTTON: &str = "px-4 py-2 bg-brand-50 hover:bg-brand-100 text-brand-700 \
    rounded-lg text-sm font-bold flex items-center gap-2 disabled:opacity-60";

pub fn view(panel: OfficialPanel, loading: bool) -> Html {
    match panel {
        OfficialPanel::Overview => html! { <Overview {loading} /> },
        OfficialPanel::Gis => html! {
            <div class="h-[80vh]">
                <MapCard title="Zoning & GIS Data" kind={MapKind::Heatmap} />
            </div>
        },
        OfficialPanel::Compliance => html! { <Compliance /> },
        OfficialPanel::Analytics => html! { <Analytics {loading} /> },
        OfficialPanel::Users => html! { <Users {loading} /> },
        OfficialPanel::Policy => html! { <Policy /> },
        OfficialPanel::Reports => html! { <Reports {loading} /> },
        OfficialPanel::Settings => html! { <SettingsPanel /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoadingProps {
    loading: bool,
}

fn case_tone(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Open => TONE_BAD,
        CaseStatus::Investigating => TONE_WARN,
        CaseStatus::Closed => TONE_GOOD,
    }
}

#[function_component]
fn Overview(props: &LoadingProps) -> Html {
    let loading = props.loading;
    html! {
        <div class="space-y-6">
            <PanelHeader title="City Operations" />
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Compliance" value="87.4%" icon="✓" is_loading={loading} />
                <StatCard title="Reports" value="42" icon="⚠"
                    color_class="text-red-600" bg_class="bg-red-50" is_loading={loading} />
                <StatCard title="Diverted" value="12,450 T" icon="🍃"
                    color_class="text-green-600" bg_class="bg-green-50" is_loading={loading} />
                <StatCard title="Fleets" value="18" icon="🚚"
                    color_class="text-blue-600" bg_class="bg-blue-50" is_loading={loading} />
            </div>
            <div class="h-96">
                <MapCard title="City Heatmap" kind={MapKind::Heatmap} is_loading={loading} />
            </div>
        </div>
    }
}

#[function_component]
fn Compliance() -> Html {
    let cases = use_state(ComplianceCase::seed);

    html! {
        <div class="space-y-6">
            <PanelHeader title="Compliance & Enforcement" />
            <div class="grid gap-6">
                {for cases.iter().map(|case| {
                    let on_advance = {
                        let cases = cases.clone();
                        let id = case.id;
                        Callback::from(move |()| {
                            let mut next = (*cases).clone();
                            if let Some(case) = next.iter_mut().find(|c| c.id == id)
                                && case.advance()
                            {
                                cases.set(next);
                            }
                        })
                    };
                    html! { <CaseCard key={case.id} case={case.clone()} {on_advance} /> }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CaseCardProps {
    case: ComplianceCase,
    on_advance: Callback<()>,
}

/// One enforcement case with its own AI assessment.
#[function_component]
fn CaseCard(props: &CaseCardProps) -> Html {
    let case = &props.case;
    let assessment = use_ai_answer();

    let analyze = {
        let assessment = assessment.clone();
        let prompt = Prompt::compliance(case.id, case.finding);
        Callback::from(move |_: MouseEvent| assessment.ask(prompt.clone()))
    };

    html! {
        <div class="bg-white p-6 rounded-2xl border border-slate-100 flex flex-col md:flex-row gap-6">
            <div class="w-24 h-24 bg-slate-100 rounded-xl shrink-0 flex items-center \
                        justify-center text-slate-400 text-3xl">
                {"📄"}
            </div>
            <div class="flex-1">
                <div class="flex justify-between items-start mb-2 gap-4">
                    <h3 class="font-bold text-lg">{case.title}</h3>
                    {status_pill(case.status.to_string(), case_tone(case.status))}
                </div>
                <p class="text-slate-600 text-sm mb-4">{case.summary}</p>
                <div class="flex flex-wrap gap-3">
                    if let Some(label) = case.status.next_action() {
                        <button
                            onclick={props.on_advance.reform(|_: MouseEvent| ())}
                            class={SECONDARY_BUTTON}
                        >
                            {label}
                        </button>
                    }
                    <button onclick={analyze} disabled={assessment.loading} class={AI_BUTTON}>
                        <span aria-hidden="true">{"✦"}</span>
                        {if assessment.loading { "Analyzing..." } else { "Analyze with AI" }}
                    </button>
                </div>
                <AiResultBox
                    loading={assessment.loading}
                    result={assessment.text.clone()}
                    title="AI Assessment"
                />
            </div>
        </div>
    }
}

#[function_component]
fn Analytics(props: &LoadingProps) -> Html {
    let loading = props.loading;
    let trends = vec![
        ChartDatum::new("Jan", 50.0),
        ChartDatum::new("Feb", 65.0),
        ChartDatum::new("Mar", 45.0),
    ];
    let by_district = vec![
        ChartDatum::new("Gasabo", 42.0).colored("bg-blue-500"),
        ChartDatum::new("Kicukiro", 31.0).colored("bg-orange-500"),
        ChartDatum::new("Nyarugenge", 27.0).colored("bg-green-500"),
    ];

    html! {
        <div class="space-y-6">
            <PanelHeader title="Analytics" subtitle="Collection trends across the city." />
            <div class="grid lg:grid-cols-2 gap-6">
                <div class="h-96">
                    <ChartCard title="Waste Trends" data={trends} unit="T" is_loading={loading} />
                </div>
                <div class="h-96">
                    <ChartCard
                        title="Share by District"
                        subtitle={AttrValue::from("Percent of tonnage this quarter")}
                        data={by_district}
                        unit="%"
                        is_loading={loading}
                    />
                </div>
            </div>
        </div>
    }
}

#[function_component]
fn Users(props: &LoadingProps) -> Html {
    let rows = use_memo((), |_| RegistryEntry::seed());
    let role = use_state(|| None::<Role>);

    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| role.set(Role::from_id(&select_value(&e))))
    };

    let toolbar = html! {
        <select
            onchange={on_role}
            aria-label="Filter by role"
            class="text-sm bg-slate-50 border border-slate-200 rounded-lg px-2 py-1"
        >
            <option value="" selected={role.is_none()}>{"All roles"}</option>
            {for Role::ALL.iter().map(|r| html! {
                <option value={r.id()} selected={*role == Some(*r)}>{r.to_string()}</option>
            })}
        </select>
    };

    html! {
        <div class="space-y-6">
            <PanelHeader
                title="User Registry"
                subtitle="Database of 12,500+ registered households."
            />
            <TableCard
                title="Accounts"
                columns={vec![
                    AttrValue::from("Name"),
                    AttrValue::from("Role"),
                    AttrValue::from("Sector"),
                    AttrValue::from("Status"),
                ]}
                {toolbar}
                is_loading={props.loading}
            >
                {for filter_registry(&rows, *role).into_iter().map(|row| {
                    let tone = match row.status {
                        AccountStatus::Active => TONE_GOOD,
                        AccountStatus::Suspended => TONE_BAD,
                        AccountStatus::PendingVerification => TONE_WARN,
                    };
                    html! {
                        <tr class="hover:bg-slate-50">
                            <td class={classes!(CELL, "font-bold")}>{row.name}</td>
                            <td class={CELL}>{row.role.to_string()}</td>
                            <td class={CELL}>{row.sector}</td>
                            <td class={CELL}>{status_pill(row.status.to_string(), tone)}</td>
                        </tr>
                    }
                })}
            </TableCard>
        </div>
    }
}

#[function_component]
fn Policy() -> Html {
    let summary = use_ai_answer();
    let summarize = {
        let summary = summary.clone();
        Callback::from(move |_: MouseEvent| summary.ask(Prompt::policy_summary()))
    };

    html! {
        <div class="space-y-6">
            <PanelHeader title="Policy Documents" />
            <div class="grid md:grid-cols-2 gap-6">
                <div class="bg-white p-6 rounded-2xl border border-slate-100">
                    <div class="flex items-center gap-3 mb-4">
                        <div class="p-3 bg-blue-50 text-blue-600 rounded-lg text-xl">{"⚖"}</div>
                        <div>
                            <h3 class="font-bold">{"Sanitation Master Plan"}</h3>
                            <p class="text-xs text-slate-500">{"Updated: Jan 2024"}</p>
                        </div>
                    </div>
                    <button
                        onclick={summarize}
                        disabled={summary.loading}
                        class="w-full py-2 border border-brand-200 text-brand-700 font-bold \
                               rounded-lg hover:bg-brand-50 flex items-center justify-center gap-2 \
                               disabled:opacity-60"
                    >
                        if summary.loading {
                            <Spinner class={classes!("w-4", "h-4")} />
                        } else {
                            <span aria-hidden="true">{"✦"}</span>
                        }
                        {"Summarize Key Points"}
                    </button>
                    <AiResultBox loading={summary.loading} result={summary.text.clone()} title="Policy Summary" />
                </div>
            </div>
        </div>
    }
}

#[function_component]
fn Reports(props: &LoadingProps) -> Html {
    let reports = use_memo((), |_| CitizenReport::seed());

    html! {
        <div class="space-y-6">
            <PanelHeader title="Submitted Reports" subtitle="Citizen reports from the last week." />
            <TableCard
                title="Citizen Reports"
                columns={vec![
                    AttrValue::from("Reference"),
                    AttrValue::from("Issue"),
                    AttrValue::from("Area"),
                    AttrValue::from("Submitted"),
                    AttrValue::from("Status"),
                ]}
                is_loading={props.loading}
            >
                {for reports.iter().map(|report| html! {
                    <tr class="hover:bg-slate-50">
                        <td class={classes!(CELL, "font-mono", "text-xs")}>{report.id.to_string()}</td>
                        <td class={CELL}>{report.issue.to_string()}</td>
                        <td class={CELL}>{report.area}</td>
                        <td class={CELL}>{report.submitted}</td>
                        <td class={CELL}>{status_pill(report.status.to_string(), case_tone(report.status))}</td>
                    </tr>
                })}
            </TableCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_cases_read_as_resolved() {
        assert_eq!(case_tone(CaseStatus::Closed), TONE_GOOD);
        assert_ne!(case_tone(CaseStatus::Open), case_tone(CaseStatus::Closed));
    }
}
