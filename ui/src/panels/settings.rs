use isukuhub_model::SimulatedAction;
use isukuhub_model::forms::SettingsForm;
use yew::prelude::*;

use super::{PRIMARY_BUTTON, PanelHeader};
use crate::components::Spinner;
use crate::contexts::toast::use_toast;
use crate::hooks::use_simulated_action;
use crate::utils::event_value;

const INPUT_CLASSES: &str = "w-full px-4 py-2 bg-slate-50 border border-slate-200 \
    rounded-lg focus:ring-2 focus:ring-brand-500 outline-none";

/// Profile and alert preferences. Shared by every role.
#[function_component]
pub fn SettingsPanel() -> Html {
    let form = use_state(SettingsForm::default);
    let action = use_simulated_action();
    let toasts = use_toast();

    let edit = |apply: fn(&mut SettingsForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, event_value(&e));
            form.set(next);
        })
    };
    let on_name = edit(|f, v| f.full_name = v);
    let on_email = edit(|f, v| f.email = v);

    let toggle = |apply: fn(&mut SettingsForm)| {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            apply(&mut next);
            form.set(next);
        })
    };
    let on_sms = toggle(|f| f.sms_alerts = !f.sms_alerts);
    let on_email_alerts = toggle(|f| f.email_alerts = !f.email_alerts);

    let on_save = {
        let form = form.clone();
        let action = action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => action.run(SimulatedAction::save_settings()),
                Err(e) => toasts.error(e.to_string()),
            }
        })
    };

    let pending = action.is_pending();

    html! {
        <form onsubmit={on_save} novalidate=true class="max-w-4xl mx-auto space-y-8">
            <PanelHeader title="Account Settings" subtitle="Manage your profile and preferences." />

            <div class="bg-white rounded-2xl p-8 border border-slate-100 shadow-sm">
                <h3 class="text-lg font-bold text-slate-900 mb-6">{"Profile Information"}</h3>
                <div class="grid md:grid-cols-2 gap-6">
                    <div>
                        <label for="full-name" class="block text-sm font-semibold text-slate-700 mb-2">
                            {"Full Name"}
                        </label>
                        <input id="full-name" type="text" value={form.full_name.clone()}
                            oninput={on_name} class={INPUT_CLASSES} />
                    </div>
                    <div>
                        <label for="settings-email" class="block text-sm font-semibold text-slate-700 mb-2">
                            {"Email Address"}
                        </label>
                        <input id="settings-email" type="email" value={form.email.clone()}
                            oninput={on_email} class={INPUT_CLASSES} />
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-2xl p-8 border border-slate-100 shadow-sm">
                <h3 class="text-lg font-bold text-slate-900 mb-6">{"Notifications"}</h3>
                <div class="space-y-4">
                    <label class="flex items-center justify-between">
                        <span class="text-sm font-medium text-slate-700">{"SMS alerts for pickups"}</span>
                        <input type="checkbox" checked={form.sms_alerts} onchange={on_sms}
                            class="h-5 w-5 rounded border-slate-300 text-brand-600" />
                    </label>
                    <label class="flex items-center justify-between">
                        <span class="text-sm font-medium text-slate-700">{"Email summaries"}</span>
                        <input type="checkbox" checked={form.email_alerts} onchange={on_email_alerts}
                            class="h-5 w-5 rounded border-slate-300 text-brand-600" />
                    </label>
                </div>
            </div>

            <div class="flex justify-end">
                <button type="submit" disabled={pending} class={PRIMARY_BUTTON}>
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                        {"Saving..."}
                    } else {
                        {"Save Changes"}
                    }
                </button>
            </div>
        </form>
    }
}
