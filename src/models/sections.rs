use serde::{Deserialize, Serialize};

// Each model reads its slice of the content document. Fields missing from the
// slice are filled from `Default`, which carries the site's built-in copy.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

impl NavLink {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

impl Default for NavLink {
    fn default() -> Self {
        Self::new("hero", "Home")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarContent {
    pub logo: String,
    pub links: Vec<NavLink>,
    pub cta: String,
}

impl Default for NavbarContent {
    fn default() -> Self {
        Self {
            logo: "Wellnex Systems".into(),
            links: vec![
                NavLink::new("about", "About"),
                NavLink::new("apps", "Apps"),
                NavLink::new("why", "Why Us"),
                NavLink::new("roadmap", "Roadmap"),
                NavLink::new("testimonials", "Testimonials"),
            ],
            cta: "Join Waitlist".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Wellnex Systems".into(),
            highlight: "Wellness, Reimagined".into(),
            subtitle: "for the Next Generation".into(),
            primary_cta: "Join the Movement".into(),
            secondary_cta: "Explore Our Apps".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub title: String,
    pub body: String,
    pub tagline: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "Where Wellness Meets What's Next".into(),
            body: "At Wellnex Systems, we believe the future of health and fitness lies in \
                   intelligent, integrated, and deeply human-centered technology. Born from the \
                   fusion of \"Wellness\" and \"Next,\" our platform is designed to elevate how \
                   people connect with their bodies, minds, and communities, anytime, anywhere."
                .into(),
            tagline: "We're Not Just Building Apps. We're Building a Movement.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppCard {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppsContent {
    pub apps: Vec<AppCard>,
}

impl Default for AppsContent {
    fn default() -> Self {
        Self {
            apps: vec![
                AppCard {
                    title: "SoulWhispers".into(),
                    subtitle: "Your Pocket-Sized Wellness Companion".into(),
                    features: strings(&[
                        "Telehealth and diagnostics",
                        "Mood journaling with AI insights",
                        "Personalized providers",
                        "Seamless booking & check-in",
                    ]),
                    cta: "Download SoulWhispers".into(),
                },
                AppCard {
                    title: "GymKey".into(),
                    subtitle: "Smart Access to Fitness, Anytime".into(),
                    features: strings(&[
                        "Seamless check-in at partner gyms",
                        "Workout tracking & performance analytics",
                        "Membership management for gym owners",
                        "Realtime class schedules & bookings",
                    ]),
                    cta: "Explore GymKey".into(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reason {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhyContent {
    pub heading: String,
    pub intro: String,
    pub reasons: Vec<Reason>,
}

impl Default for WhyContent {
    fn default() -> Self {
        let reason = |title: &str, desc: &str| Reason {
            title: title.into(),
            desc: desc.into(),
        };
        Self {
            heading: "Why Wellnex?".into(),
            intro: "Integrated features, AI personalization, and enterprise-ready tooling make \
                    Wellnex the platform for the next generation of wellness."
                .into(),
            reasons: vec![
                reason("Integrated Wellness", "Physical, mental, and emotional health in one ecosystem"),
                reason("AI-Driven Personalization", "Smart recommendations tailored to your goals"),
                reason("Scalable for Providers", "From boutique studios to national gym chains"),
                reason("Built for the Future", "Cloud-native, mobile-first, and privacy-conscious"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapContent {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub features: Vec<String>,
    pub cta: String,
}

impl Default for RoadmapContent {
    fn default() -> Self {
        Self {
            eyebrow: "What's Coming Next".into(),
            title: "Unified Wellnex Platform".into(),
            description: "Bringing fitness, nutrition, mental health, and diagnostics into a \
                          single intelligent dashboard."
                .into(),
            status: "Coming Soon".into(),
            features: strings(&[
                "Wearable integration",
                "Nutrition and meal planning",
                "Corporate wellness dashboards",
            ]),
            cta: "Get Early Access".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    pub heading: String,
    pub items: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            heading: "What early users say".into(),
            items: vec![
                Testimonial {
                    quote: "SoulWhispers helped me find calm in chaos. It's like therapy in my pocket."
                        .into(),
                    author: "Ayesha R., Karachi".into(),
                },
                Testimonial {
                    quote: "GymKey has transformed how I manage my gym. My members love the convenience."
                        .into(),
                    author: "Imran M., Gym Owner, Lahore".into(),
                },
            ],
        }
    }
}

impl TestimonialsContent {
    pub fn next_index(&self, current: usize) -> usize {
        match self.items.len() {
            0 => 0,
            len => (current + 1) % len,
        }
    }

    pub fn prev_index(&self, current: usize) -> usize {
        match self.items.len() {
            0 => 0,
            len => (current % len + len - 1) % len,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        match self.items.len() {
            0 => None,
            len => self.items.get(index % len),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistContent {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub button: String,
    pub success: String,
    pub contact_email: String,
}

impl Default for WaitlistContent {
    fn default() -> Self {
        Self {
            eyebrow: "Stay Connected".into(),
            title: "Be the first to experience the full Wellnex platform".into(),
            description: "Join our waitlist for early access, beta invites, and partner offers."
                .into(),
            placeholder: "Your email address".into(),
            button: "Join Our Waitlist".into(),
            success: "Thanks, you're on the waitlist!".into(),
            contact_email: "info@wellnexsystems.com".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub brand: String,
    pub tagline: String,
    pub email: String,
    pub website: String,
    pub copyright: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand: "Wellnex Systems".into(),
            tagline: "Empowering Wellness Through Technology".into(),
            email: "info@wellnexsystems.com".into(),
            website: "www.wellnexsystems.com".into(),
            copyright: "© 2025 Wellnex Systems. All rights reserved.".into(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
