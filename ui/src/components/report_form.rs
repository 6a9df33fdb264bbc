use isukuhub_model::report::{
    IssueType, PhotoAttachment, ReportDraft, SubmittedReport, submit_report,
};
use isukuhub_model::ActionPhase;
use jiff::Timestamp;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{LocationPicker, Spinner};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_location, use_scoped_spawner};
use crate::utils::{TimerDelay, event_value, select_value};

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-xl border border-slate-200 \
    focus:border-brand-500 focus:ring-2 focus:ring-brand-200 outline-none bg-white";

#[derive(Properties, PartialEq)]
pub struct ReportFormProps {
    pub on_submitted: Callback<SubmittedReport>,
}

/// Incident report: location, issue type, optional photo and notes.
///
/// Validation failures are toasted and nothing is uploaded. On success the
/// completion toast is shown before `on_submitted` fires.
#[function_component]
pub fn ReportForm(props: &ReportFormProps) -> Html {
    let draft = use_state(ReportDraft::default);
    let phase = use_state(ActionPhase::default);
    let location = use_location();
    let spawner = use_scoped_spawner();
    let toasts = use_toast();

    let on_issue = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let label = select_value(&e);
            let mut next = (*draft).clone();
            next.issue = IssueType::ALL.into_iter().find(|i| i.to_string() == label);
            draft.set(next);
        })
    };

    let on_details = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.details = event_value(&e);
            draft.set(next);
        })
    };

    let on_photo = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let photo = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| PhotoAttachment {
                    name: file.name(),
                    size_bytes: file.size() as u64,
                });
            let mut next = (*draft).clone();
            next.photo = photo;
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let phase = phase.clone();
        let point = location.state.point();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if phase.is_pending() {
                return;
            }
            let mut submission = (*draft).clone();
            submission.location = point;

            let phase = phase.clone();
            let toasts = toasts.clone();
            let on_submitted = on_submitted.clone();
            spawner.spawn(async move {
                let result = submit_report(
                    &submission,
                    &TimerDelay,
                    Timestamp::now(),
                    |p| phase.set(p),
                )
                .await;
                match result {
                    Ok(submitted) => {
                        if let Some(notice) = submitted.notice.clone() {
                            toasts.show(notice);
                        }
                        on_submitted.emit(submitted);
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "report rejected");
                        toasts.error(e.to_string());
                    }
                }
            });
        })
    };

    let pending = phase.is_pending();

    html! {
        <form {onsubmit} novalidate=true class="space-y-6">
            <LocationPicker location={location.clone()} />

            <div>
                <label for="issue" class="block text-sm font-bold text-slate-700 mb-2">
                    {"Issue Type"}
                </label>
                <select id="issue" onchange={on_issue} class={FIELD_CLASSES}>
                    <option value="" selected={draft.issue.is_none()} disabled=true>
                        {"Select issue type"}
                    </option>
                    {for IssueType::ALL.iter().map(|issue| html! {
                        <option selected={draft.issue == Some(*issue)}>{issue.to_string()}</option>
                    })}
                </select>
            </div>

            <div>
                <span class="block text-sm font-bold text-slate-700 mb-2">
                    {"Evidence Photo"}
                </span>
                <label class="border-2 border-dashed border-slate-200 rounded-xl p-8 flex \
                              flex-col items-center justify-center text-center cursor-pointer \
                              hover:bg-slate-50 transition-colors">
                    <input
                        type="file"
                        accept="image/png,image/jpeg"
                        onchange={on_photo}
                        class="hidden"
                    />
                    <span class="text-3xl text-slate-400 mb-2">{"📷"}</span>
                    if let Some(photo) = &draft.photo {
                        <span class="text-sm font-semibold text-slate-700">{&photo.name}</span>
                        <span class="text-xs text-slate-400">
                            {format!("{:.1} MB", photo.size_bytes as f64 / (1024.0 * 1024.0))}
                        </span>
                    } else {
                        <span class="text-sm font-semibold text-slate-600">
                            {"Click to upload image"}
                        </span>
                        <span class="text-xs text-slate-400">{"JPG, PNG up to 10MB"}</span>
                    }
                </label>
            </div>

            <div>
                <label for="details" class="block text-sm font-bold text-slate-700 mb-2">
                    {"Additional Details"}
                </label>
                <textarea
                    id="details"
                    rows="4"
                    value={draft.details.clone()}
                    oninput={on_details}
                    placeholder="Describe the issue..."
                    class={FIELD_CLASSES}
                ></textarea>
            </div>

            <button
                type="submit"
                disabled={pending}
                class="w-full py-4 bg-brand-600 hover:bg-brand-700 text-white font-bold \
                       rounded-xl transition-colors flex items-center justify-center gap-2 \
                       disabled:opacity-70"
            >
                if pending {
                    <Spinner class={classes!("w-4", "h-4")} />
                    {"Submitting..."}
                } else {
                    {"Submit Report"}
                }
            </button>
        </form>
    }
}
