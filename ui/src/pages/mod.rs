pub mod about;
pub mod blog;
pub mod careers;
pub mod contact;
pub mod dashboard;
pub mod faq;
pub mod features;
pub mod generic;
pub mod home;
pub mod impact;
pub mod login;
pub mod privacy;
pub mod report;
pub mod resources;
pub mod signup;
pub mod terms;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use careers::CareersPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use faq::FaqPage;
pub use features::FeaturesPage;
pub use generic::GenericPage;
pub use home::HomePage;
pub use impact::ImpactPage;
pub use login::LoginPage;
pub use privacy::PrivacyPage;
pub use report::ReportPage;
pub use resources::ResourcesPage;
pub use signup::SignupPage;
pub use terms::TermsPage;
