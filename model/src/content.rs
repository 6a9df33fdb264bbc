//! Static copy for the marketing pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HEADLINE_STATS: &[Stat] = &[
    Stat {
        value: "+40%",
        label: "Reduction in illegal dumping",
    },
    Stat {
        value: "3×",
        label: "Faster collection routes",
    },
    Stat {
        value: "35%",
        label: "Recycling rate improvement",
    },
    Stat {
        value: "24/7",
        label: "City monitoring",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Less Waste, More Control",
        description: "Automate daily waste workflows and stay fully in \
                      control without the manual coordination.",
    },
    Feature {
        title: "Save Time, Every Day",
        description: "Manage routes, pickups, and payments in minutes \
                      instead of hours of phone calls.",
    },
    Feature {
        title: "Clarity for Every Decision",
        description: "AI-powered insights replace manual logs with \
                      data-backed confidence.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I used to chase the collector every week. Now I get an SMS \
                the day before and pay from my phone.",
        name: "Claudine U.",
        role: "Resident, Kicukiro",
    },
    Testimonial {
        quote: "Route planning that took my supervisor a morning is done \
                before the first truck leaves the depot.",
        name: "Patrick N.",
        role: "Fleet lead, Gasabo",
    },
    Testimonial {
        quote: "We finally know where clean PET is piling up, and we can \
                send a truck the same day.",
        name: "Diane M.",
        role: "Recycling plant manager",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I schedule a waste pickup?",
        answer: "You can schedule a pickup directly through the IsukuHub \
                 dashboard or mobile app. Simply select 'Schedule Pickup', \
                 choose your waste type, and pick a available time slot that \
                 works for you.",
    },
    FaqEntry {
        question: "Is IsukuHub available in all of Kigali?",
        answer: "We currently cover Gasabo and Kicukiro districts, with \
                 Nyarugenge rolling out in Q3 2024. Check the coverage map in \
                 the app to see if your specific sector is supported.",
    },
    FaqEntry {
        question: "What types of waste can I recycle?",
        answer: "We accept plastics (PET, HDPE), paper, cardboard, glass, and \
                 metal. All recyclables must be clean and separated from \
                 general organic waste.",
    },
    FaqEntry {
        question: "How does the pricing work?",
        answer: "Pricing is based on a monthly subscription for households, \
                 which includes weekly pickups. Special bulk pickups or \
                 hazardous waste removal incur additional one-time fees.",
    },
    FaqEntry {
        question: "Can I report illegal dumping anonymously?",
        answer: "Yes. The 'Report' feature allows you to submit geo-tagged \
                 photos of illegal dumping sites without attaching your \
                 personal profile information to the public report.",
    },
    FaqEntry {
        question: "How do I pay for the service?",
        answer: "We support Mobile Money (MTN/Airtel) and major credit cards \
                 directly within the app. You can set up auto-pay to never \
                 miss a bill.",
    },
];

/// FAQ entries whose question or answer contains every word of `query`,
/// ignoring case. A blank query keeps every entry.
pub fn filter_faqs(query: &str) -> Vec<&'static FaqEntry> {
    let words: Vec<String> =
        query.split_whitespace().map(str::to_lowercase).collect();
    FAQS.iter()
        .filter(|faq| {
            let haystack =
                format!("{} {}", faq.question, faq.answer).to_lowercase();
            words.iter().all(|w| haystack.contains(w.as_str()))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "smart-city-revolution",
        title: "How Kigali is Leading Africa's Smart City Revolution",
        excerpt: "From automated street lights to AI-driven waste collection, \
                  explore how technology is reshaping urban living in Rwanda.",
        date: "Oct 24, 2023",
        author: "Jean-Paul M.",
        category: "Smart City",
        image: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?q=80&w=2144&auto=format&fit=crop",
    },
    BlogPost {
        slug: "recycling-codes",
        title: "Understanding Recycling Codes: A Household Guide",
        excerpt: "Not all plastics are created equal. Here is a simple guide \
                  to separating your household waste for maximum recycling \
                  value.",
        date: "Nov 12, 2023",
        author: "Sarah K.",
        category: "Education",
        image: "https://images.unsplash.com/photo-1532996122724-e3c354a0b15b?q=80&w=2070&auto=format&fit=crop",
    },
    BlogPost {
        slug: "district-partnership",
        title: "IsukuHub Partners with District Administration for Clean \
                Streets",
        excerpt: "We are thrilled to announce a new public-private \
                  partnership aiming to reduce illegal dumping by 40% in the \
                  next year.",
        date: "Dec 05, 2023",
        author: "Press Team",
        category: "Company News",
        image: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?q=80&w=2070&auto=format&fit=crop",
    },
    BlogPost {
        slug: "sanitation-economy",
        title: "The Economic Impact of Proper Waste Management",
        excerpt: "Clean cities attract more tourism and investment. We break \
                  down the numbers behind the sanitation economy.",
        date: "Jan 15, 2024",
        author: "Dr. Alex R.",
        category: "Insights",
        image: "https://images.unsplash.com/photo-1530587191325-3db32d826c18?q=80&w=2069&auto=format&fit=crop",
    },
];

/// Distinct categories in publication order, for the filter chips.
pub fn blog_categories() -> Vec<&'static str> {
    let mut categories = Vec::new();
    for post in BLOG_POSTS {
        if !categories.contains(&post.category) {
            categories.push(post.category);
        }
    }
    categories
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobOpening {
    pub title: &'static str,
    pub kind: &'static str,
    pub department: &'static str,
    pub location: &'static str,
}

pub const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        title: "Senior Backend Engineer",
        kind: "Full-time",
        department: "Engineering",
        location: "Kigali / Hybrid",
    },
    JobOpening {
        title: "Product Manager (Mobile)",
        kind: "Full-time",
        department: "Product",
        location: "Kigali",
    },
    JobOpening {
        title: "Customer Success Specialist",
        kind: "Full-time",
        department: "Operations",
        location: "Kigali",
    },
    JobOpening {
        title: "GIS Data Analyst",
        kind: "Contract",
        department: "Data Science",
        location: "Remote",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Guide,
    Policy,
    Video,
    Download,
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceItem {
    pub title: &'static str,
    pub label: &'static str,
    pub kind: ResourceKind,
}

pub const RESOURCES: &[ResourceItem] = &[
    ResourceItem {
        title: "Waste Separation Guide",
        label: "PDF Guide",
        kind: ResourceKind::Guide,
    },
    ResourceItem {
        title: "Kigali Sanitation Policy",
        label: "Official Doc",
        kind: ResourceKind::Policy,
    },
    ResourceItem {
        title: "Recycling 101 Video",
        label: "Video Tutorial",
        kind: ResourceKind::Video,
    },
    ResourceItem {
        title: "Annual Impact Report 2024",
        label: "Report",
        kind: ResourceKind::Download,
    },
    ResourceItem {
        title: "Composting at Home",
        label: "Article",
        kind: ResourceKind::Article,
    },
    ResourceItem {
        title: "Partner Onboarding Kit",
        label: "Zip Bundle",
        kind: ResourceKind::Download,
    },
];

/// Heading for pages that have no content of their own, derived from the
/// URL path: `/help-center` becomes `Help Center`.
pub fn page_title_from_path(path: &str) -> String {
    let words: Vec<String> = path
        .split(['/', '-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars).collect::<String>()
                }
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "IsukuHub".to_string()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_faq_query_keeps_everything() {
        assert_eq!(filter_faqs("").len(), FAQS.len());
        assert_eq!(filter_faqs("   ").len(), FAQS.len());
    }

    #[test]
    fn faq_query_matches_answers_and_all_words() {
        let hits = filter_faqs("mobile money");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "How do I pay for the service?");

        assert_eq!(filter_faqs("DUMPING").len(), 1);
        assert!(filter_faqs("dumping bitcoin").is_empty());
    }

    #[test]
    fn categories_are_distinct() {
        let categories = blog_categories();
        assert_eq!(categories.len(), BLOG_POSTS.len());
        assert_eq!(categories[0], "Smart City");
    }

    #[test]
    fn titles_from_paths() {
        assert_eq!(page_title_from_path("/help-center"), "Help Center");
        assert_eq!(page_title_from_path("/partners/api-docs"), "Partners Api Docs");
        assert_eq!(page_title_from_path("/"), "IsukuHub");
    }
}
