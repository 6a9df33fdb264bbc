use isukuhub_model::AppConfig;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod interop;
mod logs;
mod pages;
mod panels;
mod state;
mod utils;

use components::layout::{Footer, Navbar, ScrollToTop};
use components::toast::ToastContainer;
use contexts::toast::ToastProvider;
use pages::*;
pub use state::State;

/// Credentials baked in at build time; see `build.rs`.
pub fn app_config() -> AppConfig {
    AppConfig::from_values(
        option_env!("GEMINI_API_KEY"),
        option_env!("GEMINI_MODEL"),
        option_env!("MAPS_API_KEY"),
    )
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <ToastProvider>
            <BrowserRouter>
                <ScrollToTop />
                <AppShell />
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[at("/impact")]
    Impact,
    #[at("/dashboard")]
    Dashboard,
    #[at("/resources")]
    Resources,
    #[at("/report")]
    Report,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/about")]
    About,
    #[at("/careers")]
    Careers,
    #[at("/blog")]
    Blog,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Full-screen routes draw their own chrome instead of the site navbar
    /// and footer.
    pub fn is_full_screen(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Login | Route::Signup)
    }
}

/// Site chrome around the routed page.
#[function_component]
fn AppShell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let chrome = !route.is_full_screen();

    html! {
        <div class="min-h-screen bg-slate-50 font-sans text-slate-900 \
                    selection:bg-brand-200 selection:text-brand-900 \
                    flex flex-col">
            if chrome {
                <Navbar />
            }
            <main class="flex-grow">
                <Switch<Route> render={switch} />
            </main>
            if chrome {
                <Footer />
            }
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Features => html! { <FeaturesPage /> },
        Route::Impact => html! { <ImpactPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Resources => html! { <ResourcesPage /> },
        Route::Report => html! { <ReportPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Careers => html! { <CareersPage /> },
        Route::Blog => html! { <BlogPage /> },
        Route::Faq => html! { <FaqPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::NotFound => html! { <GenericPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_is_routed() {
        for (path, route) in [
            ("/", Route::Home),
            ("/features", Route::Features),
            ("/impact", Route::Impact),
            ("/dashboard", Route::Dashboard),
            ("/resources", Route::Resources),
            ("/report", Route::Report),
            ("/login", Route::Login),
            ("/signup", Route::Signup),
            ("/about", Route::About),
            ("/careers", Route::Careers),
            ("/blog", Route::Blog),
            ("/faq", Route::Faq),
            ("/contact", Route::Contact),
            ("/privacy", Route::Privacy),
            ("/terms", Route::Terms),
        ] {
            assert_eq!(Route::recognize(path), Some(route), "{path}");
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_the_generic_page() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn only_app_screens_hide_the_site_chrome() {
        assert!(Route::Dashboard.is_full_screen());
        assert!(Route::Login.is_full_screen());
        assert!(Route::Signup.is_full_screen());
        assert!(!Route::Report.is_full_screen());
        assert!(!Route::NotFound.is_full_screen());
    }
}
