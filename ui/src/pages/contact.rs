use isukuhub_model::forms::{ContactForm, ContactSubject};
use isukuhub_model::{MapKind, SimulatedAction};
use yew::prelude::*;

use crate::components::{MapCard, PageHero, Spinner};
use crate::hooks::{use_simulated_action, use_title};
use crate::utils::{event_value, select_value};

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-xl border border-slate-200 \
    focus:border-brand-500 focus:ring-2 focus:ring-brand-200 outline-none \
    transition-all bg-slate-50";

/// `(glyph, heading, lines)`
const CONTACT_DETAILS: [(&str, &str, [&str; 2]); 3] = [
    ("📍", "Head Office", ["742 KG Avenue, Nyarugenge", "Kigali, Rwanda"]),
    ("✉", "Email Us", ["General: hello@isukuhub.rw", "Support: support@isukuhub.rw"]),
    ("☎", "Call Us", ["+250 788 000 000", "+250 730 000 000"]),
];

#[function_component]
pub fn ContactPage() -> Html {
    use_title("Contact Us");
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);
    let submitted = use_state(|| false);
    let action = use_simulated_action();

    let edit = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, event_value(&e));
            form.set(next);
        })
    };
    let on_name = edit(|f, v| f.name = v);
    let on_email = edit(|f, v| f.email = v);
    let on_message = edit(|f, v| f.message = v);

    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(subject) = ContactSubject::from_label(&select_value(&e)) {
                let mut next = (*form).clone();
                next.subject = subject;
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let action = action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }
            error.set(None);
            tracing::debug!(subject = %form.subject, "sending contact message");
            let submitted = submitted.clone();
            let form = form.clone();
            action.run_then(
                SimulatedAction::send_contact(),
                Callback::from(move |()| {
                    submitted.set(true);
                    form.set(ContactForm::default());
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }),
            );
        })
    };

    let send_another = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| submitted.set(false))
    };

    let pending = action.is_pending();

    html! {
        <div>
            <PageHero
                title="Get in Touch"
                subtitle="Have a question about our services or need technical support? We're here to help."
            />

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid lg:grid-cols-2 gap-16">
                    <div>
                        <h2 class="text-2xl font-bold text-slate-900 mb-6">{"Contact Information"}</h2>
                        <p class="text-slate-600 mb-8 leading-relaxed">
                            {"Our support team is available Monday through Friday, 8:00 AM to 5:00 PM \
                              CAT. For emergency waste hazards, please use the in-app reporting tool \
                              for 24/7 assistance."}
                        </p>
                        <div class="space-y-6">
                            {for CONTACT_DETAILS.iter().map(|(glyph, heading, lines)| html! {
                                <div class="flex items-start gap-4">
                                    <div class="w-12 h-12 bg-brand-50 rounded-lg flex items-center \
                                                justify-center text-brand-600 text-xl shrink-0">
                                        {*glyph}
                                    </div>
                                    <div>
                                        <h3 class="font-bold text-slate-900">{*heading}</h3>
                                        {for lines.iter().map(|line| html! {
                                            <p class="text-slate-600">{*line}</p>
                                        })}
                                    </div>
                                </div>
                            })}
                        </div>
                        <div class="mt-12">
                            <MapCard title="Find Us" kind={MapKind::Basic} />
                        </div>
                    </div>

                    <div class="bg-white p-8 rounded-3xl border border-slate-100 shadow-xl">
                        if *submitted {
                            <div class="h-full flex flex-col items-center justify-center text-center py-10">
                                <div class="w-20 h-20 bg-green-100 text-green-600 rounded-full flex \
                                            items-center justify-center mb-6 text-4xl">
                                    {"✓"}
                                </div>
                                <h3 class="text-2xl font-bold text-slate-900 mb-2">{"Message Sent!"}</h3>
                                <p class="text-slate-600 mb-8">
                                    {"We've received your inquiry and will get back to you within 24 hours."}
                                </p>
                                <button
                                    onclick={send_another}
                                    class="px-6 py-2 bg-slate-100 text-slate-700 font-bold rounded-lg \
                                           hover:bg-slate-200"
                                >
                                    {"Send Another Message"}
                                </button>
                            </div>
                        } else {
                            <h2 class="text-2xl font-bold text-slate-900 mb-6">{"Send us a message"}</h2>
                            <form {onsubmit} class="space-y-6" novalidate=true>
                                <div class="grid md:grid-cols-2 gap-6">
                                    <div>
                                        <label for="name" class="block text-sm font-semibold text-slate-700 mb-2">
                                            {"Full Name"}
                                        </label>
                                        <input
                                            id="name"
                                            type="text"
                                            value={form.name.clone()}
                                            oninput={on_name}
                                            placeholder="John Doe"
                                            class={FIELD_CLASSES}
                                        />
                                    </div>
                                    <div>
                                        <label for="email" class="block text-sm font-semibold text-slate-700 mb-2">
                                            {"Email Address"}
                                        </label>
                                        <input
                                            id="email"
                                            type="email"
                                            value={form.email.clone()}
                                            oninput={on_email}
                                            placeholder="john@example.com"
                                            class={FIELD_CLASSES}
                                        />
                                    </div>
                                </div>
                                <div>
                                    <label for="subject" class="block text-sm font-semibold text-slate-700 mb-2">
                                        {"Subject"}
                                    </label>
                                    <select id="subject" onchange={on_subject} class={FIELD_CLASSES}>
                                        {for ContactSubject::ALL.iter().map(|subject| html! {
                                            <option selected={*subject == form.subject}>
                                                {subject.to_string()}
                                            </option>
                                        })}
                                    </select>
                                </div>
                                <div>
                                    <label for="message" class="block text-sm font-semibold text-slate-700 mb-2">
                                        {"Message"}
                                    </label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        value={form.message.clone()}
                                        oninput={on_message}
                                        placeholder="How can we help you?"
                                        class={FIELD_CLASSES}
                                    ></textarea>
                                </div>
                                if let Some(message) = &*error {
                                    <p class="text-sm text-red-600">{message}</p>
                                }
                                <button
                                    type="submit"
                                    disabled={pending}
                                    class="w-full py-4 bg-brand-600 hover:bg-brand-700 text-white font-bold \
                                           rounded-xl transition-colors flex items-center justify-center \
                                           gap-2 disabled:opacity-70"
                                >
                                    if pending {
                                        <Spinner class={classes!("w-4", "h-4")} />
                                        {"Sending..."}
                                    } else {
                                        {"Send Message ➤"}
                                    }
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
