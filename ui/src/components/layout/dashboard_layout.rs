use isukuhub_model::records::NotificationCenter;
use isukuhub_model::{Role, Tab};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::*;

use super::icons::{BellIcon, SearchIcon, UserIcon};
use super::sidebar::Sidebar;
use crate::State;
use crate::contexts::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Html,
}

/// Sidebar, top bar and scrolling content area for every dashboard role.
#[function_component]
pub fn DashboardLayout(props: &DashboardLayoutProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();
    let role = state.session.role();

    let on_select_tab = {
        let dispatch = dispatch.clone();
        Callback::from(move |tab: Tab| {
            dispatch.reduce_mut(|state| state.session.select_tab(tab));
        })
    };

    let on_switch_role = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let Some(next) = Role::from_id(&value) else {
                tracing::warn!(%value, "unknown role in switcher");
                return;
            };
            let mut session = dispatch.get().session.clone();
            let notice = session.switch_role(next);
            dispatch.reduce_mut(move |state| state.session = session);
            toasts.show(notice);
        })
    };

    html! {
        <div class="flex flex-col md:flex-row min-h-screen bg-slate-50">
            <Sidebar
                {role}
                active_tab={state.session.active_tab()}
                on_select={on_select_tab}
            />

            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 bg-white border-b border-slate-200 flex items-center \
                               justify-between px-4 sm:px-8 sticky top-0 z-20">
                    <div class="flex items-center gap-4 flex-1">
                        <div class="relative hidden md:block max-w-md w-full">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">
                                <SearchIcon />
                            </span>
                            <input
                                type="text"
                                placeholder={role.search_placeholder()}
                                class="pl-10 pr-4 py-2 bg-slate-50 border-none rounded-xl \
                                       text-sm font-medium text-slate-600 focus:outline-none \
                                       focus:ring-2 focus:ring-brand-200 w-full"
                            />
                        </div>
                    </div>

                    <div class="flex items-center gap-4">
                        <select
                            onchange={on_switch_role}
                            class="text-xs font-bold bg-slate-100 border-none rounded-lg \
                                   px-2 py-1 text-slate-600 focus:ring-0 cursor-pointer \
                                   hover:bg-slate-200"
                        >
                            {for Role::ALL.iter().map(|option| html! {
                                <option value={option.id()} selected={*option == role}>
                                    {format!("{option} View")}
                                </option>
                            })}
                        </select>

                        <NotificationBell {role} />

                        <div
                            title={state.display_name().to_string()}
                            class="w-9 h-9 bg-brand-100 rounded-full flex items-center \
                                   justify-center text-brand-700 border border-brand-200"
                        >
                            <UserIcon />
                        </div>
                    </div>
                </header>

                <main class="flex-1 p-4 sm:p-8 overflow-y-auto">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationBellProps {
    role: Role,
}

/// Bell with an unread dot and a dropdown of the role's notices.
/// Read marks live only as long as the role stays selected.
#[function_component]
fn NotificationBell(props: &NotificationBellProps) -> Html {
    let center = use_state(|| NotificationCenter::for_role(props.role));
    let open = use_state(|| false);

    {
        let center = center.clone();
        let open = open.clone();
        use_effect_with(props.role, move |role| {
            center.set(NotificationCenter::for_role(*role));
            open.set(false);
        });
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let mark_all = {
        let center = center.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*center).clone();
            next.mark_all_read();
            center.set(next);
        })
    };

    let unread = center.unread_count();

    html! {
        <div class="relative">
            <button
                onclick={toggle}
                class="p-2 text-slate-500 hover:bg-slate-50 rounded-full relative"
                aria-label="Notifications"
            >
                <BellIcon />
                if unread > 0 {
                    <span class="absolute top-1.5 right-1.5 w-2 h-2 bg-red-500 \
                                 rounded-full border border-white"></span>
                }
            </button>

            if *open {
                <div class="absolute right-0 mt-2 w-80 bg-white rounded-xl shadow-lg \
                            border border-slate-100 z-30 overflow-hidden">
                    <div class="flex items-center justify-between px-4 py-3 \
                                border-b border-slate-100">
                        <span class="text-sm font-bold text-slate-900">
                            {"Notifications"}
                        </span>
                        <button
                            onclick={mark_all}
                            disabled={unread == 0}
                            class="text-xs font-semibold text-brand-600 \
                                   hover:text-brand-700 disabled:text-slate-300"
                        >
                            {"Mark all read"}
                        </button>
                    </div>
                    <ul class="max-h-72 overflow-y-auto divide-y divide-slate-50">
                        {for center.items().iter().map(|item| {
                            let on_read = {
                                let center = center.clone();
                                let id = item.id;
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*center).clone();
                                    next.mark_read(id);
                                    center.set(next);
                                })
                            };
                            html! {
                                <li
                                    onclick={on_read}
                                    class={classes!(
                                        "px-4", "py-3", "cursor-pointer",
                                        "hover:bg-slate-50",
                                        (!item.read).then_some("bg-brand-50/40")
                                    )}
                                >
                                    <p class={classes!(
                                        "text-sm",
                                        if item.read { "text-slate-500" } else { "text-slate-900 font-medium" }
                                    )}>
                                        {&item.text}
                                    </p>
                                    <p class="text-xs text-slate-400 mt-0.5">{item.time}</p>
                                </li>
                            }
                        })}
                    </ul>
                </div>
            }
        </div>
    }
}
