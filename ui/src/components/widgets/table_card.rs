use yew::prelude::*;

const SKELETON_ROWS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct TableCardProps {
    pub title: AttrValue,
    pub columns: Vec<AttrValue>,
    /// `<tr>` rows.
    #[prop_or_default]
    pub children: Html,
    #[prop_or_else(|| AttrValue::from("View All"))]
    pub action_label: AttrValue,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
    /// Extra controls placed in the header, e.g. a filter select.
    #[prop_or_default]
    pub toolbar: Html,
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component]
pub fn TableCard(props: &TableCardProps) -> Html {
    let body = if props.is_loading {
        html! {
            {for (0..SKELETON_ROWS).map(|_| html! {
                <tr>
                    {for props.columns.iter().map(|_| html! {
                        <td class="px-6 py-4">
                            <div class="h-4 bg-slate-100 rounded w-full animate-pulse"></div>
                        </td>
                    })}
                </tr>
            })}
        }
    } else {
        props.children.clone()
    };

    let on_action = props
        .on_action
        .clone()
        .map(|cb| cb.reform(|_: MouseEvent| ()));

    html! {
        <div class="bg-white rounded-2xl border border-slate-100 shadow-sm overflow-hidden \
                    flex flex-col h-full hover:shadow-md transition-shadow duration-300">
            <div class="p-6 border-b border-slate-50 flex items-center justify-between gap-4">
                <h3 class="text-lg font-bold text-slate-900">{&props.title}</h3>
                <div class="flex gap-2 items-center">{props.toolbar.clone()}</div>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead class="bg-slate-50 text-slate-500 text-xs uppercase font-semibold">
                        <tr>
                            {for props.columns.iter().map(|col| html! {
                                <th class="px-6 py-4 whitespace-nowrap">{col}</th>
                            })}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-50">{body}</tbody>
                </table>
            </div>
            <div class="mt-auto p-4 border-t border-slate-50 bg-slate-50/50 text-center">
                <button
                    onclick={on_action}
                    class="text-sm font-bold text-brand-600 hover:text-brand-700 \
                           hover:underline focus:outline-none focus:ring-2 \
                           focus:ring-brand-500 rounded px-2"
                >
                    {&props.action_label}
                </button>
            </div>
        </div>
    }
}
