use isukuhub_model::forms::SignupForm;
use isukuhub_model::{Role, SimulatedAction};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::Spinner;
use crate::components::layout::icons::LeafIcon;
use crate::hooks::{use_push_route, use_simulated_action, use_title};
use crate::state::{DemoUser, State};
use crate::utils::event_value;
use crate::Route;

const INPUT_CLASSES: &str = "block w-full px-4 py-3 border border-slate-200 rounded-xl \
    focus:ring-brand-500 focus:border-brand-500 bg-slate-50 focus:bg-white \
    transition-all outline-none";

fn role_glyph(role: Role) -> &'static str {
    match role {
        Role::Household => "🏠",
        Role::Collector => "🚚",
        Role::Recycler => "♻",
        Role::Official => "🏛",
    }
}

#[function_component]
pub fn SignupPage() -> Html {
    use_title("Create Account");
    let form = use_state(SignupForm::default);
    let error = use_state(|| None::<String>);
    let action = use_simulated_action();
    let (_state, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    let edit = |apply: fn(&mut SignupForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, event_value(&e));
            form.set(next);
        })
    };
    let on_name = edit(|f, v| f.name = v);
    let on_email = edit(|f, v| f.email = v);
    let on_password = edit(|f, v| f.password = v);

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let action = action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let role = match form.validate() {
                Ok(role) => role,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);

            let user = DemoUser {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
            };
            let dispatch = dispatch.clone();
            let push_route = push_route.clone();
            action.run_then(
                SimulatedAction::signup(),
                Callback::from(move |()| {
                    let user = user.clone();
                    dispatch.reduce_mut(move |state| state.sign_in(user, role));
                    push_route.emit(Route::Dashboard);
                }),
            );
        })
    };

    let pending = action.is_pending();

    html! {
        <div class="min-h-screen bg-slate-50 flex flex-col justify-center py-12 sm:px-6 lg:px-8">
            <div class="sm:mx-auto sm:w-full sm:max-w-md text-center">
                <Link<Route> to={Route::Home} classes="inline-flex items-center gap-2 justify-center mb-6">
                    <span class="w-10 h-10 bg-brand-600 rounded-xl flex items-center \
                                 justify-center text-white shadow-lg">
                        <LeafIcon />
                    </span>
                    <span class="text-2xl font-bold tracking-tight text-slate-900">{"IsukuHub"}</span>
                </Link<Route>>
                <h1 class="text-3xl font-bold tracking-tight text-slate-900">
                    {"Create your account"}
                </h1>
                <p class="mt-2 text-sm text-slate-600">{"Start managing waste efficiently today."}</p>
            </div>

            <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-[480px]">
                <div class="bg-white py-8 px-4 shadow-xl sm:rounded-2xl sm:px-10 border border-slate-100">
                    <form {onsubmit} novalidate=true class="space-y-6">
                        <div>
                            <span class="block text-sm font-semibold text-slate-700 mb-3">
                                {"Select Account Type"}
                            </span>
                            <div class="grid grid-cols-3 gap-3">
                                {for Role::SELF_SERVICE.iter().map(|&role| {
                                    let selected = form.role == role;
                                    let onclick = {
                                        let form = form.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            let mut next = (*form).clone();
                                            next.role = role;
                                            form.set(next);
                                        })
                                    };
                                    html! {
                                        <button
                                            type="button"
                                            {onclick}
                                            aria-pressed={selected.to_string()}
                                            class={classes!(
                                                "flex", "flex-col", "items-center", "justify-center",
                                                "p-3", "rounded-xl", "border-2", "transition-all",
                                                if selected {
                                                    "border-brand-500 bg-brand-50 text-brand-700"
                                                } else {
                                                    "border-slate-100 hover:border-slate-300 text-slate-600"
                                                }
                                            )}
                                        >
                                            <span class="text-xl mb-1">{role_glyph(role)}</span>
                                            <span class="text-xs font-bold">{role.to_string()}</span>
                                            <span class="text-[10px] text-slate-400">{role.audience()}</span>
                                        </button>
                                    }
                                })}
                            </div>
                        </div>

                        <div>
                            <label for="name" class="block text-sm font-semibold text-slate-700 mb-2">
                                {"Full Name"}
                            </label>
                            <input id="name" type="text" value={form.name.clone()}
                                oninput={on_name} placeholder="John Doe" class={INPUT_CLASSES} />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-semibold text-slate-700 mb-2">
                                {"Email Address"}
                            </label>
                            <input id="email" type="email" value={form.email.clone()}
                                oninput={on_email} placeholder="you@example.com" class={INPUT_CLASSES} />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-semibold text-slate-700 mb-2">
                                {"Password"}
                            </label>
                            <input id="password" type="password" value={form.password.clone()}
                                oninput={on_password} placeholder="••••••••" class={INPUT_CLASSES} />
                        </div>

                        if let Some(message) = &*error {
                            <div class="flex items-center gap-2 text-red-600 text-sm bg-red-50 p-3 rounded-lg">
                                {"⚠ "}{message}
                            </div>
                        }

                        <button
                            type="submit"
                            disabled={pending}
                            class="flex w-full justify-center items-center rounded-xl bg-brand-600 \
                                   py-3.5 px-4 text-sm font-bold text-white shadow-lg \
                                   hover:bg-brand-700 transition-all disabled:opacity-70 \
                                   disabled:cursor-not-allowed"
                        >
                            if pending {
                                <Spinner />
                            } else {
                                {"Create Account"}
                            }
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm text-slate-500">
                        {"By signing up, you agree to our "}
                        <Link<Route> to={Route::Terms} classes="underline">{"Terms"}</Link<Route>>
                    </p>
                </div>

                <p class="mt-8 text-center text-sm text-slate-600">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="font-bold text-brand-600 hover:underline">
                        {"Log in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_self_service_role_has_a_glyph() {
        for role in Role::SELF_SERVICE {
            assert!(!role_glyph(role).is_empty());
        }
    }
}
