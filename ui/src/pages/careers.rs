use isukuhub_model::SimulatedAction;
use isukuhub_model::content::{JOB_OPENINGS, JobOpening};
use yew::prelude::*;

use crate::components::{Modal, Spinner};
use crate::hooks::{use_simulated_action, use_title};
use crate::utils::input_value;

#[function_component]
pub fn CareersPage() -> Html {
    use_title("Careers");
    let applying = use_state(|| None::<&'static JobOpening>);
    let roles_ref = use_node_ref();

    let scroll_to_roles = {
        let roles_ref = roles_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(el) = roles_ref.cast::<web_sys::Element>() {
                el.scroll_into_view();
            }
        })
    };

    let close = {
        let applying = applying.clone();
        Callback::from(move |()| applying.set(None))
    };

    html! {
        <div class="pt-20">
            <div class="bg-brand-900 py-24 px-4 sm:px-6 lg:px-8 text-center text-white">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">{"Join the Green Revolution"}</h1>
                <p class="text-brand-100 text-lg max-w-2xl mx-auto mb-8">
                    {"We're looking for passionate problem solvers to help us build the future \
                      of waste management in Africa."}
                </p>
                <button
                    onclick={scroll_to_roles}
                    class="px-8 py-3 bg-white text-brand-900 rounded-full font-bold \
                           hover:bg-brand-50 transition-colors"
                >
                    {"View Open Roles"}
                </button>
            </div>

            <div ref={roles_ref} class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-20 scroll-mt-20">
                <div class="mb-12">
                    <h2 class="text-3xl font-bold text-slate-900 mb-4">{"Open Positions"}</h2>
                    <p class="text-slate-600">{"Come do the best work of your life."}</p>
                </div>
                <div class="space-y-4">
                    {for JOB_OPENINGS.iter().map(|job| {
                        let onclick = {
                            let applying = applying.clone();
                            Callback::from(move |_: MouseEvent| applying.set(Some(job)))
                        };
                        html! {
                            <button
                                {onclick}
                                class="w-full text-left bg-white p-6 rounded-xl border border-slate-200 \
                                       hover:border-brand-300 hover:shadow-md transition-all flex \
                                       flex-col sm:flex-row items-center justify-between gap-4 group"
                            >
                                <div class="flex items-start gap-4 w-full">
                                    <div class="w-12 h-12 bg-slate-50 rounded-lg flex items-center \
                                                justify-center text-slate-500 shrink-0">
                                        {"💼"}
                                    </div>
                                    <div>
                                        <h3 class="text-lg font-bold text-slate-900 \
                                                   group-hover:text-brand-700 transition-colors">
                                            {job.title}
                                        </h3>
                                        <p class="mt-1 text-sm text-slate-500">
                                            {format!("{} • {} • {}", job.department, job.kind, job.location)}
                                        </p>
                                    </div>
                                </div>
                                <span class="shrink-0 text-brand-600 font-semibold text-sm">
                                    {"Apply Now →"}
                                </span>
                            </button>
                        }
                    })}
                </div>

                <div class="mt-16 p-8 bg-slate-50 rounded-2xl border border-slate-100 text-center">
                    <h3 class="text-xl font-bold text-slate-900 mb-2">{"Don't see your role?"}</h3>
                    <p class="text-slate-600 mb-6">
                        {"We are always looking for talent. Send your CV and a cover letter to \
                          careers@isukuhub.rw."}
                    </p>
                    <a href="mailto:careers@isukuhub.rw" class="text-brand-600 font-bold hover:underline">
                        {"Email Us"}
                    </a>
                </div>
            </div>

            if let Some(job) = *applying {
                <ApplyModal {job} on_close={close} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ApplyModalProps {
    job: &'static JobOpening,
    on_close: Callback<()>,
}

#[function_component]
fn ApplyModal(props: &ApplyModalProps) -> Html {
    let action = use_simulated_action();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let error = use_state(|| None::<&'static str>);

    let onsubmit = {
        let action = action.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let title = props.job.title;
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if input_value(&name_ref).trim().is_empty()
                || input_value(&email_ref).trim().is_empty()
            {
                error.set(Some("Please enter your name and email."));
                return;
            }
            error.set(None);
            action.run_then(SimulatedAction::apply_job(title), on_close.clone());
        })
    };

    let pending = action.is_pending();

    html! {
        <Modal title={format!("Apply: {}", props.job.title)} on_close={props.on_close.clone()}>
            <form {onsubmit} class="space-y-4">
                <input
                    ref={name_ref}
                    type="text"
                    placeholder="Full name"
                    class="w-full px-4 py-3 rounded-lg border border-slate-200 \
                           focus:ring-2 focus:ring-brand-500 outline-none"
                />
                <input
                    ref={email_ref}
                    type="email"
                    placeholder="Email address"
                    class="w-full px-4 py-3 rounded-lg border border-slate-200 \
                           focus:ring-2 focus:ring-brand-500 outline-none"
                />
                <textarea
                    rows="3"
                    placeholder="Why do you want to join? (optional)"
                    class="w-full px-4 py-3 rounded-lg border border-slate-200 \
                           focus:ring-2 focus:ring-brand-500 outline-none"
                ></textarea>
                if let Some(message) = *error {
                    <p class="text-sm text-red-600">{message}</p>
                }
                <button
                    type="submit"
                    disabled={pending}
                    class="w-full flex items-center justify-center gap-2 py-3 bg-brand-600 \
                           text-white font-bold rounded-lg hover:bg-brand-700 \
                           disabled:opacity-70 transition-colors"
                >
                    if pending {
                        <Spinner class={classes!("w-4", "h-4")} />
                        {"Submitting..."}
                    } else {
                        {"Submit Application"}
                    }
                </button>
            </form>
        </Modal>
    }
}
