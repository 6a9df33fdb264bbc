pub mod ai_result_box;
pub mod cta;
pub mod layout;
pub mod location_picker;
pub mod map_view;
pub mod markdown_content;
pub mod markdown_text;
pub mod modal;
pub mod page_hero;
pub mod report_form;
pub mod spinner;
pub mod toast;
pub mod widgets;

pub use ai_result_box::AiResultBox;
pub use cta::Cta;
pub use location_picker::LocationPicker;
pub use markdown_content::{LegalDocument, MarkdownContent};
pub use markdown_text::MarkdownText;
pub use modal::Modal;
pub use page_hero::PageHero;
pub use report_form::ReportForm;
pub use spinner::Spinner;
pub use toast::ToastContainer;
pub use widgets::{ChartCard, MapCard, StatCard, TableCard};
