use isukuhub_model::ReportId;
use isukuhub_model::report::SubmittedReport;
use yew::prelude::*;

use crate::Route;
use crate::components::ReportForm;
use crate::hooks::{use_push_route, use_title};

/// Public incident report, reachable without signing in.
#[function_component]
pub fn ReportPage() -> Html {
    use_title("Report an Issue");
    let submitted = use_state(|| None::<ReportId>);
    let push_route = use_push_route();

    let on_submitted = {
        let submitted = submitted.clone();
        Callback::from(move |report: SubmittedReport| {
            submitted.set(Some(report.id));
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let submit_another = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| submitted.set(None))
    };

    let to_dashboard = Callback::from(move |_: MouseEvent| push_route.emit(Route::Dashboard));

    html! {
        <div class="pt-32 pb-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-2xl mx-auto">
                if let Some(id) = *submitted {
                    <div class="bg-white rounded-3xl border border-slate-100 shadow-xl p-10 text-center">
                        <div class="w-20 h-20 bg-green-100 text-green-600 rounded-full flex \
                                    items-center justify-center mx-auto mb-6 text-4xl">
                            {"✓"}
                        </div>
                        <h1 class="text-3xl font-bold text-slate-900 mb-2">{"Report Submitted!"}</h1>
                        <p class="text-slate-600 mb-2">
                            {"Thank you for helping keep Kigali clean. Our team will review it shortly."}
                        </p>
                        <p class="text-sm text-slate-500 mb-8">
                            {"Reference: "}
                            <span class="font-mono font-bold text-slate-900">{id.to_string()}</span>
                        </p>
                        <div class="flex flex-col sm:flex-row gap-3 justify-center">
                            <button
                                onclick={submit_another}
                                class="px-6 py-3 bg-slate-100 text-slate-700 font-bold rounded-xl \
                                       hover:bg-slate-200"
                            >
                                {"Submit Another Report"}
                            </button>
                            <button
                                onclick={to_dashboard}
                                class="px-6 py-3 bg-brand-600 text-white font-bold rounded-xl \
                                       hover:bg-brand-700"
                            >
                                {"Return to Dashboard"}
                            </button>
                        </div>
                    </div>
                } else {
                    <div class="text-center mb-10">
                        <h1 class="text-3xl md:text-4xl font-bold text-slate-900 mb-3">
                            {"Report an Issue"}
                        </h1>
                        <p class="text-slate-500 text-lg">
                            {"Flag illegal dumping or missed pickups instantly."}
                        </p>
                    </div>
                    <div class="bg-white rounded-3xl border border-slate-100 shadow-xl p-6 md:p-10">
                        <ReportForm {on_submitted} />
                    </div>
                }
            </div>
        </div>
    }
}
