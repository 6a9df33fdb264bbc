use isukuhub_model::content::{FEATURES, HEADLINE_STATS, TESTIMONIALS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::Cta;
use crate::hooks::{use_push_route, use_title};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Smarter Waste Management");

    html! {
        <>
            <Hero />
            <StatsBar />
            <FeatureCards />
            <PhoneShowcase />
            <SmartManagement />
            <Testimonials />
            <Cta />
        </>
    }
}

#[function_component]
fn Hero() -> Html {
    let push_route = use_push_route();
    let start = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| push_route.emit(Route::Signup))
    };
    let dashboard = Callback::from(move |_: MouseEvent| push_route.emit(Route::Dashboard));

    html! {
        <section class="relative pt-32 pb-20 lg:pt-40 lg:pb-28 overflow-hidden">
            <div class="absolute top-0 right-0 w-[600px] h-[600px] bg-brand-100 rounded-full \
                        blur-3xl opacity-50 translate-x-1/3 -translate-y-1/4"></div>
            <div class="absolute bottom-0 left-0 w-[400px] h-[400px] bg-blue-50 rounded-full \
                        blur-3xl opacity-60 -translate-x-1/3 translate-y-1/4"></div>

            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 \
                        gap-16 items-center">
                <div>
                    <span class="inline-block px-4 py-1.5 mb-6 text-xs font-bold uppercase \
                                 tracking-wider text-brand-700 bg-brand-50 rounded-full \
                                 border border-brand-100">
                        {"Smart City Infrastructure"}
                    </span>
                    <h1 class="text-5xl lg:text-6xl font-bold tracking-tight text-slate-900 \
                               leading-[1.1] mb-6">
                        {"Smarter Waste Management "}
                        <span class="text-brand-600">{"Powered by Technology"}</span>
                    </h1>
                    <p class="text-lg text-slate-600 mb-10 max-w-xl leading-relaxed">
                        {"Manage waste pickups, optimize routes, prevent illegal dumping, and \
                          enable recycling, all in one transparent digital platform for Kigali."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 mb-10">
                        <button
                            onclick={start}
                            class="px-8 py-4 text-base font-bold text-white bg-brand-600 \
                                   rounded-full hover:bg-brand-700 transition-colors shadow-lg \
                                   shadow-brand-600/20"
                        >
                            {"Start with IsukuHub"}
                        </button>
                        <button
                            onclick={dashboard}
                            class="px-8 py-4 text-base font-bold text-slate-700 bg-white \
                                   rounded-full border border-slate-200 hover:bg-slate-50 \
                                   transition-colors"
                        >
                            {"View Dashboard"}
                        </button>
                    </div>
                    <div class="flex flex-wrap gap-3 mb-10">
                        {for ["AI Route Optimization", "Geo-Tagged Reporting", "Government Ready"]
                            .iter()
                            .map(|badge| html! {
                                <span class="px-3 py-1.5 text-xs font-semibold text-slate-600 \
                                             bg-white border border-slate-200 rounded-lg">
                                    {format!("✓ {badge}")}
                                </span>
                            })}
                    </div>
                    <div>
                        <p class="text-xs font-bold text-slate-400 uppercase tracking-wider mb-3">
                            {"Trusted Partners"}
                        </p>
                        <div class="flex gap-8 text-lg font-black text-slate-300">
                            <span>{"COOPED"}</span>
                            <span>{"AGRUNI"}</span>
                            <span>{"RURA"}</span>
                        </div>
                    </div>
                </div>

                <div class="relative hidden lg:flex justify-center">
                    <div class="absolute w-[420px] h-[420px] bg-brand-50 rounded-full"></div>
                    <PhoneMockup />
                    <div class="absolute top-16 -left-4 bg-white p-4 rounded-2xl shadow-xl \
                                border border-slate-100 w-48">
                        <p class="text-xs text-slate-500">{"Recycling Rate"}</p>
                        <p class="text-2xl font-bold text-brand-600">{"+12%"}</p>
                        <p class="text-[10px] text-slate-400">{"Last updated 2 mins ago"}</p>
                    </div>
                    <div class="absolute bottom-16 -right-4 bg-white p-4 rounded-2xl shadow-xl \
                                border border-slate-100 w-60">
                        <p class="text-sm font-bold text-slate-900">{"Dumping Reported"}</p>
                        <p class="text-xs text-slate-500">
                            {"Illegal waste detected at Nyarugenge District."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Stylised phone frame showing a miniature household dashboard.
#[function_component]
fn PhoneMockup() -> Html {
    html! {
        <div class="relative w-64 h-[520px] bg-slate-900 rounded-[3rem] p-3 shadow-2xl">
            <div class="w-full h-full bg-slate-50 rounded-[2.4rem] overflow-hidden p-4 space-y-3">
                <div class="h-4 w-20 bg-slate-900 rounded-full mx-auto"></div>
                <div class="p-4 bg-brand-600 rounded-2xl text-white">
                    <p class="text-[10px] opacity-80">{"Next Pickup"}</p>
                    <p class="font-bold">{"Tomorrow, 9AM"}</p>
                </div>
                <div class="grid grid-cols-2 gap-2">
                    <div class="p-3 bg-white rounded-xl">
                        <p class="text-[10px] text-slate-400">{"Points"}</p>
                        <p class="text-sm font-bold">{"1,240"}</p>
                    </div>
                    <div class="p-3 bg-white rounded-xl">
                        <p class="text-[10px] text-slate-400">{"Score"}</p>
                        <p class="text-sm font-bold">{"98/100"}</p>
                    </div>
                </div>
                {for ["Organic", "Plastic", "Paper"].iter().zip([80, 45, 30]).map(|(label, pct)| html! {
                    <div class="p-3 bg-white rounded-xl">
                        <div class="flex justify-between text-[10px] text-slate-500 mb-1">
                            <span>{*label}</span>
                            <span>{format!("{pct}%")}</span>
                        </div>
                        <div class="h-1.5 bg-slate-100 rounded-full">
                            <div
                                class="h-1.5 bg-brand-500 rounded-full"
                                style={format!("width: {pct}%")}
                            ></div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[function_component]
pub fn StatsBar() -> Html {
    html! {
        <section class="py-12 bg-white border-y border-slate-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-2 md:grid-cols-4 gap-8">
                {for HEADLINE_STATS.iter().map(|stat| html! {
                    <div class="text-center">
                        <p class="text-4xl font-bold text-slate-900 mb-2">{stat.value}</p>
                        <p class="text-sm font-medium text-slate-500">{stat.label}</p>
                    </div>
                })}
            </div>
        </section>
    }
}

/// Per-card badge, tint and destination, in `FEATURES` order.
const FEATURE_DECOR: [(&str, &str, Route); 3] = [
    ("LIVE", "bg-brand-50", Route::Features),
    ("AUTO MODE", "bg-blue-50", Route::Features),
    ("AI VERIFIED", "bg-purple-50", Route::Impact),
];

#[function_component]
pub fn FeatureCards() -> Html {
    html! {
        <section class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center max-w-2xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">
                        {"What Makes IsukuHub Different"}
                    </h2>
                    <p class="text-slate-600">
                        {"Real advantages designed to simplify waste decisions and help you \
                          move towards a cleaner city with confidence."}
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {for FEATURES.iter().zip(FEATURE_DECOR).map(|(feature, (badge, tint, to))| html! {
                        <Link<Route>
                            {to}
                            classes="group block bg-white rounded-3xl border border-slate-100 \
                                     p-8 hover:shadow-xl transition-all duration-300"
                        >
                            <div class={classes!(
                                "h-40", "rounded-2xl", "mb-6", "flex", "items-center",
                                "justify-center", tint
                            )}>
                                <span class="px-3 py-1 text-[10px] font-bold tracking-wider \
                                             bg-white rounded-full text-slate-600 shadow-sm">
                                    {badge}
                                </span>
                            </div>
                            <h3 class="text-xl font-bold text-slate-900 mb-2 \
                                       group-hover:text-brand-700 transition-colors">
                                {feature.title}
                            </h3>
                            <p class="text-slate-600">{feature.description}</p>
                        </Link<Route>>
                    })}
                </div>
            </div>
        </section>
    }
}

const SHOWCASE_CARDS: [(&str, &str); 4] = [
    ("Pickup Scheduling", "Track trucks and collection times in real-time."),
    ("Geo-Tagged Reports", "AI categorizes dumping incidents automatically."),
    ("Recycler Access", "Connect directly with buyers for recyclable materials."),
    ("Smart Alerts", "Instant notifications for risks and pickup changes."),
];

#[function_component]
fn PhoneShowcase() -> Html {
    let (left, right) = SHOWCASE_CARDS.split_at(2);
    let card = |(title, body): &(&str, &str)| html! {
        <div class="bg-white p-6 rounded-2xl shadow-lg border border-slate-100 max-w-xs">
            <h4 class="font-bold text-slate-900 mb-1">{*title}</h4>
            <p class="text-sm text-slate-500">{*body}</p>
        </div>
    };

    html! {
        <section class="py-24 bg-slate-50 px-4 sm:px-6 lg:px-8 overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <div class="text-center max-w-2xl mx-auto mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">
                        {"Powerful Features, "}
                        <span class="text-brand-600">{"Designed for Clarity"}</span>
                    </h2>
                    <p class="text-slate-600">
                        {"A complete toolkit to simplify your waste management workflows with \
                          AI automation and real-time insights."}
                    </p>
                </div>
                <div class="grid lg:grid-cols-3 gap-8 items-center">
                    <div class="space-y-8 flex flex-col items-center lg:items-end">
                        {for left.iter().map(card)}
                    </div>
                    <div class="flex justify-center"><PhoneMockup /></div>
                    <div class="space-y-8 flex flex-col items-center lg:items-start">
                        {for right.iter().map(card)}
                    </div>
                </div>
            </div>
        </section>
    }
}

const SMART_CARDS: [(&str, &str); 3] = [
    (
        "Intelligent Portfolio Mapping",
        "Your pickup points are continuously analyzed and structured into smarter \
         route allocation models driven by traffic patterns and AI insights.",
    ),
    (
        "Seamless Collection Flow",
        "Transactions, scheduling, and recycling records move automatically through \
         one system. No spreadsheets, no manual sorting.",
    ),
    (
        "Insight-Driven Decisions",
        "Every action is supported by contextual data that helps you act with \
         clarity rather than emotion or guesswork.",
    ),
];

#[function_component]
pub fn SmartManagement() -> Html {
    html! {
        <section class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row md:items-end justify-between gap-6 mb-12">
                    <div class="max-w-xl">
                        <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mb-4">
                            {"The Smart Way to Manage Your Waste"}
                        </h2>
                        <p class="text-slate-600">
                            {"Effortlessly manage collections, reporting, and recycling goals \
                              with AI automation and real-time insights."}
                        </p>
                    </div>
                    <Link<Route>
                        to={Route::Features}
                        classes="inline-flex px-6 py-3 font-semibold text-brand-700 \
                                 bg-brand-50 rounded-full hover:bg-brand-100 transition-colors"
                    >
                        {"Explore Features →"}
                    </Link<Route>>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {for SMART_CARDS.iter().enumerate().map(|(i, (title, body))| html! {
                        <div class="p-8 bg-slate-50 rounded-3xl border border-slate-100">
                            <span class="text-sm font-bold text-brand-600">
                                {format!("0{}", i + 1)}
                            </span>
                            <h3 class="text-xl font-bold text-slate-900 mt-4 mb-3">{*title}</h3>
                            <p class="text-slate-600 leading-relaxed">{*body}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Testimonials() -> Html {
    html! {
        <section class="py-24 bg-slate-900 text-white px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">
                    {"Trusted by Smart Citizens & Leaders"}
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {for TESTIMONIALS.iter().map(|t| html! {
                        <figure class="p-8 bg-white/5 rounded-3xl border border-white/10">
                            <blockquote class="text-slate-200 leading-relaxed mb-6">
                                {format!("\u{201c}{}\u{201d}", t.quote)}
                            </blockquote>
                            <figcaption>
                                <p class="font-bold">{t.name}</p>
                                <p class="text-sm text-slate-400">{t.role}</p>
                            </figcaption>
                        </figure>
                    })}
                </div>
            </div>
        </section>
    }
}
