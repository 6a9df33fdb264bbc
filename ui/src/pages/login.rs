use isukuhub_model::SimulatedAction;
use isukuhub_model::forms::LoginForm;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::Spinner;
use crate::components::layout::icons::LeafIcon;
use crate::hooks::{use_push_route, use_simulated_action, use_title};
use crate::state::{DemoUser, State};
use crate::utils::event_value;
use crate::Route;

const INPUT_CLASSES: &str = "w-full px-4 py-3 rounded-xl border border-slate-200 \
    focus:border-brand-500 focus:ring-4 focus:ring-brand-50 outline-none \
    transition-all bg-slate-50 focus:bg-white";

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign In");
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);
    let action = use_simulated_action();
    let (_state, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.email = event_value(&e);
            form.set(next);
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.password = event_value(&e);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let action = action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            if let Err(e) = form.check_required() {
                error.set(Some(e.to_string()));
                return;
            }

            let submitted = (*form).clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            let push_route = push_route.clone();
            action.run_then(
                SimulatedAction::login(),
                Callback::from(move |()| match submitted.check_response() {
                    Ok(()) => {
                        let user = DemoUser::from_email(submitted.email.trim());
                        dispatch.reduce_mut(move |state| {
                            let role = state.session.role();
                            state.sign_in(user, role);
                        });
                        push_route.emit(Route::Dashboard);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }),
            );
        })
    };

    let pending = action.is_pending();

    html! {
        <div class="min-h-screen bg-white flex flex-col lg:flex-row">
            <div class="flex-1 flex flex-col justify-center px-4 sm:px-6 lg:px-20 xl:px-24 \
                        pt-20 lg:pt-0">
                <div class="max-w-sm w-full mx-auto">
                    <div class="mb-10">
                        <Link<Route> to={Route::Home} classes="inline-flex items-center gap-2 mb-8">
                            <span class="w-8 h-8 bg-brand-600 rounded-lg flex items-center \
                                         justify-center text-white shadow-sm">
                                <LeafIcon />
                            </span>
                            <span class="text-xl font-bold tracking-tight text-slate-900">
                                {"IsukuHub"}
                            </span>
                        </Link<Route>>
                        <h1 class="text-3xl font-bold text-slate-900 mb-2">{"Welcome back"}</h1>
                        <p class="text-slate-600">{"Please enter your details to sign in."}</p>
                    </div>

                    <form {onsubmit} novalidate=true class="space-y-5">
                        <div>
                            <label for="email" class="block text-sm font-semibold text-slate-700 mb-2">
                                {"Email address"}
                            </label>
                            <input
                                id="email"
                                type="email"
                                value={form.email.clone()}
                                oninput={on_email}
                                placeholder="name@company.com"
                                class={INPUT_CLASSES}
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-semibold text-slate-700 mb-2">
                                {"Password"}
                            </label>
                            <input
                                id="password"
                                type="password"
                                value={form.password.clone()}
                                oninput={on_password}
                                placeholder="••••••••"
                                class={INPUT_CLASSES}
                            />
                        </div>
                        <div class="flex items-center justify-between">
                            <label class="flex items-center gap-2 text-sm text-slate-600">
                                <input type="checkbox" class="h-4 w-4 rounded border-slate-300" />
                                {"Remember me"}
                            </label>
                            <a href="#" class="text-sm font-bold text-brand-600 hover:underline">
                                {"Forgot password?"}
                            </a>
                        </div>

                        if let Some(message) = &*error {
                            <div class="flex items-center gap-2 text-red-600 text-sm bg-red-50 p-3 rounded-lg">
                                {"⚠ "}{message}
                            </div>
                        }

                        <button
                            type="submit"
                            disabled={pending}
                            class="w-full flex justify-center items-center py-3.5 px-4 rounded-xl \
                                   shadow-lg shadow-brand-200 text-sm font-bold text-white \
                                   bg-brand-600 hover:bg-brand-700 transition-all \
                                   disabled:opacity-70 disabled:cursor-not-allowed"
                        >
                            if pending {
                                <Spinner />
                            } else {
                                {"Sign in"}
                            }
                        </button>
                    </form>

                    <p class="mt-8 text-center text-sm text-slate-600">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Signup} classes="font-bold text-brand-600 hover:underline">
                            {"Sign up for free"}
                        </Link<Route>>
                    </p>
                </div>
            </div>

            <div class="hidden lg:flex lg:w-1/2 bg-brand-900 relative overflow-hidden \
                        flex-col justify-end p-20 text-white">
                <div class="mb-6">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/10 \
                                border border-white/20 text-sm font-medium mb-6">
                        <span class="w-2 h-2 rounded-full bg-green-400 animate-pulse"></span>
                        {"Live System Status"}
                    </div>
                    <h2 class="text-4xl font-bold mb-4 leading-tight">
                        {"Manage your city's waste smarter, not harder."}
                    </h2>
                    <p class="text-brand-100 text-lg">
                        {"Join 10,000+ households and collectors making Kigali cleaner every day."}
                    </p>
                </div>
                <div class="bg-white/10 border border-white/10 rounded-2xl p-6">
                    <div class="text-yellow-400 mb-3">{"★★★★★"}</div>
                    <p class="text-white/90 text-sm leading-relaxed italic mb-4">
                        {"\"IsukuHub completely transformed how our neighborhood handles waste \
                          collection. No more missed pickups!\""}
                    </p>
                    <p class="text-xs font-bold">{"Alex M."}</p>
                    <p class="text-[10px] text-brand-200">{"Kicukiro Sector Leader"}</p>
                </div>
            </div>
        </div>
    }
}
