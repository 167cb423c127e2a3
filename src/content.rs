//! Brand, palette and section content for both landing pages.
//!
//! Everything here is compile-time literal data. The section components in
//! `sections` render these tables verbatim; nothing is computed, filtered or
//! sorted at runtime.

#[derive(Clone, PartialEq)]
pub struct Palette {
    /// Gradient start for logo marks, headline accents and badges.
    pub accent_a: &'static str,
    /// Gradient end.
    pub accent_b: &'static str,
    /// Pale wash used behind badges and icon tiles.
    pub accent_soft: &'static str,
    /// Border tone matching the wash.
    pub accent_border: &'static str,
    /// Text on the pale wash.
    pub accent_ink: &'static str,
    /// Solid accent for checkmarks, dots and links.
    pub accent: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_accent: &'static str,
    pub lede: &'static str,
    pub primary: Cta,
    pub secondary: Cta,
    pub stats: &'static [Stat],
}

#[derive(Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    /// Per-card icon tile tint, background and foreground.
    pub tint_bg: &'static str,
    pub tint_fg: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct BenefitGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub clinic: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub cta: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct ChatLine {
    /// true for the patient side of the conversation, false for the bot.
    pub inbound: bool,
    pub text: &'static str,
    /// Quick-reply style chips rendered under the bubble text.
    pub chips: &'static [&'static str],
    /// Extra note lines rendered in a softer box under the bubble.
    pub note: &'static [&'static str],
}

#[derive(Clone, PartialEq)]
pub struct ChatScript {
    pub clinic: &'static str,
    pub status: &'static str,
    pub lines: &'static [ChatLine],
}

#[derive(Clone, PartialEq)]
pub struct SectionIntro {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub sub: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Closer {
    pub title: &'static str,
    pub sub: &'static str,
    pub cta: Cta,
}

#[derive(Clone, PartialEq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub logo_icon: &'static str,
    pub palette: Palette,
    pub nav: &'static [NavLink],
    pub nav_cta: Cta,
    pub hero: Hero,
    pub chat: ChatScript,
    pub features_intro: SectionIntro,
    pub features: &'static [Feature],
    pub steps_intro: SectionIntro,
    pub steps: &'static [Step],
    pub benefits_title: &'static str,
    pub benefits: &'static [BenefitGroup],
    pub testimonials_title: &'static str,
    pub testimonials: &'static [Testimonial],
    pub pricing_intro: SectionIntro,
    pub plans: &'static [Plan],
    pub pricing_note: &'static str,
    pub closer: Closer,
    pub footer_brand: &'static str,
    pub footer_icon: &'static str,
    pub footer_tagline: &'static str,
}

// 24x24 stroke icon paths, shared by both brands.
pub mod icons {
    pub const STETHOSCOPE: &str =
        "M6 4v6a5 5 0 0 0 10 0V4M6 3v2M16 3v2M11 15v2a5 5 0 0 0 10 0v-3M21 12a2 2 0 1 0 0 4";
    pub const SPARKLES: &str =
        "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9L12 3zM19 16l.9 2.1L22 19l-2.1.9L19 22l-.9-2.1L16 19l2.1-.9L19 16z";
    pub const CALENDAR: &str =
        "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z";
    pub const BELL: &str =
        "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9M10.3 21a1.94 1.94 0 0 0 3.4 0";
    pub const BOT: &str =
        "M12 8V4M8 4h8M5 8h14a1 1 0 0 1 1 1v9a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V9a1 1 0 0 1 1-1zM9 14h.01M15 14h.01";
    pub const CLIPBOARD: &str =
        "M9 2h6a1 1 0 0 1 1 1v2H8V3a1 1 0 0 1 1-1zM8 4H6a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2h-2M9 12h6M9 16h6";
    pub const USERS: &str =
        "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";
    pub const SHIELD: &str =
        "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4";
    pub const CHECK: &str = "M20 6L9 17l-5-5";
    pub const MESSAGE: &str =
        "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6A8.38 8.38 0 0 1 12.5 3h.5a8.48 8.48 0 0 1 8 8v.5z";
    pub const ARROW: &str = "M5 12h14M12 5l7 7-7 7";
    pub const HEART: &str =
        "M20.8 4.6a5.5 5.5 0 0 0-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 0 0-7.8 7.8l1 1L12 21l7.8-7.6 1-1a5.5 5.5 0 0 0 0-7.8z";
    pub const SUN: &str =
        "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10zM12 1v2M12 21v2M4.2 4.2l1.4 1.4M18.4 18.4l1.4 1.4M1 12h2M21 12h2M4.2 19.8l1.4-1.4M18.4 5.6l1.4-1.4";
    pub const ZAP: &str = "M13 2L3 14h9l-1 8 10-12h-9l1-8z";
    pub const CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2";
    pub const GLOBE: &str =
        "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";
}

pub static MEDIBOOK: SiteContent = SiteContent {
    brand: "MediBook",
    logo_icon: icons::STETHOSCOPE,
    palette: Palette {
        accent_a: "#10b981",
        accent_b: "#0d9488",
        accent_soft: "#ecfdf5",
        accent_border: "#a7f3d0",
        accent_ink: "#047857",
        accent: "#059669",
    },
    nav: &[
        NavLink { label: "Features", anchor: "#features" },
        NavLink { label: "How it Works", anchor: "#howitworks" },
        NavLink { label: "Pricing", anchor: "#pricing" },
    ],
    nav_cta: Cta { label: "Book a Demo", href: "#pricing" },
    hero: Hero {
        badge: "WhatsApp Appointment Automation for Clinics",
        title: "Let Patients Book",
        title_accent: "Appointments on WhatsApp",
        lede: "Transform your clinic's phone chaos into seamless WhatsApp bookings. \
               Patients book instantly, get automated reminders, and your staff \
               focuses on care, not phones.",
        primary: Cta { label: "Start Free Trial", href: "#pricing" },
        secondary: Cta { label: "See How It Works", href: "#howitworks" },
        stats: &[
            Stat { value: "70%", label: "Fewer Missed Calls" },
            Stat { value: "50%", label: "Less No-Shows" },
            Stat { value: "24/7", label: "Booking Availability" },
        ],
    },
    chat: ChatScript {
        clinic: "City Medical Clinic",
        status: "Online • Typically replies instantly",
        lines: &[
            ChatLine {
                inbound: true,
                text: "Hi, I need to book an appointment with Dr. Johnson",
                chips: &[],
                note: &[],
            },
            ChatLine {
                inbound: false,
                text: "Hello! I'd be happy to help you schedule with Dr. Johnson. \
                       What type of appointment do you need?",
                chips: &["🩺 General Consultation", "🔬 Follow-up Visit", "💉 Health Checkup"],
                note: &[],
            },
            ChatLine { inbound: true, text: "General consultation please", chips: &[], note: &[] },
            ChatLine {
                inbound: false,
                text: "Perfect! Here are Dr. Johnson's available slots this week:",
                chips: &["📅 Tomorrow, Wed 10:30 AM", "📅 Thursday, 2:00 PM", "📅 Friday, 11:00 AM"],
                note: &[],
            },
            ChatLine { inbound: true, text: "Tomorrow 10:30 works great!", chips: &[], note: &[] },
            ChatLine {
                inbound: false,
                text: "✅ Booked! Appointment confirmed for tomorrow at 10:30 AM with Dr. Johnson.",
                chips: &[],
                note: &[
                    "📍 City Medical Clinic, 123 Main St",
                    "You'll receive a reminder 24 hours before.",
                ],
            },
        ],
    },
    features_intro: SectionIntro {
        eyebrow: "Features",
        title: "Everything your clinic needs",
        sub: "Streamline appointments and improve patient experience",
    },
    features: &[
        Feature {
            icon: icons::CALENDAR,
            title: "Instant Appointment Booking",
            text: "Patients book appointments directly on WhatsApp in seconds, any time of day.",
            tint_bg: "#ecfdf5",
            tint_fg: "#059669",
        },
        Feature {
            icon: icons::BELL,
            title: "Automated Reminders",
            text: "Send automatic SMS and WhatsApp reminders to reduce no-shows by 50%.",
            tint_bg: "#f0fdfa",
            tint_fg: "#0d9488",
        },
        Feature {
            icon: icons::BOT,
            title: "AI-Powered Assistant",
            text: "Smart chatbot handles FAQs, doctor availability, and service inquiries 24/7.",
            tint_bg: "#ecfeff",
            tint_fg: "#0891b2",
        },
        Feature {
            icon: icons::CLIPBOARD,
            title: "Calendar Sync",
            text: "Seamlessly integrates with your existing calendar system and practice \
                   management software.",
            tint_bg: "#eff6ff",
            tint_fg: "#2563eb",
        },
        Feature {
            icon: icons::USERS,
            title: "Staff Relief",
            text: "Free your front desk from constant phone calls. Let them focus on in-person \
                   patient care.",
            tint_bg: "#eef2ff",
            tint_fg: "#4f46e5",
        },
        Feature {
            icon: icons::SHIELD,
            title: "HIPAA Compliant",
            text: "End-to-end encrypted, secure patient data handling with full healthcare \
                   compliance.",
            tint_bg: "#f5f3ff",
            tint_fg: "#7c3aed",
        },
    ],
    steps_intro: SectionIntro {
        eyebrow: "How It Works",
        title: "Get started in 3 simple steps",
        sub: "Set up in under 10 minutes",
    },
    steps: &[
        Step {
            number: "1",
            icon: icons::CALENDAR,
            title: "Connect Your Calendar",
            text: "Link your practice management system or calendar. We integrate with all \
                   major platforms.",
        },
        Step {
            number: "2",
            icon: icons::BOT,
            title: "Customize Your Bot",
            text: "Set up your services, doctor schedules, and automated responses in minutes.",
        },
        Step {
            number: "3",
            icon: icons::MESSAGE,
            title: "Share Your WhatsApp",
            text: "Give patients your WhatsApp number and let them book instantly. That's it!",
        },
    ],
    benefits_title: "Why clinics love MediBook",
    benefits: &[
        BenefitGroup {
            icon: icons::HEART,
            title: "For Your Patients",
            bullets: &[
                "Book appointments anytime, anywhere on their favorite app",
                "Get instant confirmation and appointment details",
                "Receive timely reminders so they never miss appointments",
                "No more waiting on hold or playing phone tag",
            ],
        },
        BenefitGroup {
            icon: icons::STETHOSCOPE,
            title: "For Your Clinic",
            bullets: &[
                "Reduce front desk workload by 70%",
                "Eliminate missed calls and lost appointment opportunities",
                "Cut no-shows in half with automated reminders",
                "Fill cancellation slots automatically with waitlist management",
            ],
        },
    ],
    testimonials_title: "Trusted by healthcare providers",
    testimonials: &[
        Testimonial {
            quote: "Our phone lines are finally quiet! Patients love booking on WhatsApp, and \
                    our staff can focus on patient care instead of answering calls.",
            author: "Dr. Sarah Mitchell",
            role: "Family Medicine",
            clinic: "Wellness Family Clinic",
        },
        Testimonial {
            quote: "No-shows dropped from 30% to under 10%. The automated reminders are a \
                    game-changer for our practice.",
            author: "Dr. Rajesh Kumar",
            role: "Dental Surgeon",
            clinic: "Smile Dental Care",
        },
        Testimonial {
            quote: "We're booking 40% more appointments because we never miss a call anymore. \
                    Patients can schedule even at midnight!",
            author: "Maria Garcia",
            role: "Practice Manager",
            clinic: "City Medical Center",
        },
    ],
    pricing_intro: SectionIntro {
        eyebrow: "Pricing",
        title: "Simple pricing for clinics",
        sub: "Choose the plan that fits your practice size",
    },
    plans: &[
        Plan {
            name: "Solo Practice",
            price: "$49",
            period: "/month",
            features: &[
                "Up to 200 appointments/month",
                "1 doctor/practitioner",
                "WhatsApp booking bot",
                "Automated reminders",
                "Basic calendar sync",
                "Email support",
            ],
            popular: false,
            cta: "Get Started",
        },
        Plan {
            name: "Multi-Doctor Clinic",
            price: "$129",
            period: "/month",
            features: &[
                "Up to 1,000 appointments/month",
                "Up to 5 doctors/practitioners",
                "Advanced AI assistant",
                "Priority support",
                "Full calendar integration",
                "Custom workflows",
                "Analytics dashboard",
            ],
            popular: true,
            cta: "Start Free Trial",
        },
        Plan {
            name: "Large Practice",
            price: "Custom",
            period: "",
            features: &[
                "Unlimited appointments",
                "Unlimited doctors",
                "Dedicated account manager",
                "Custom integrations",
                "Multi-location support",
                "Advanced analytics",
                "SLA guarantee",
            ],
            popular: false,
            cta: "Get Started",
        },
    ],
    pricing_note: "All plans include 14-day free trial • No credit card required • Cancel anytime",
    closer: Closer {
        title: "Ready to automate your WhatsApp?",
        sub: "Join thousands of businesses using FlowChat to scale customer conversations",
        cta: Cta { label: "Start Free Trial", href: "#pricing" },
    },
    footer_brand: "FlowChat",
    footer_icon: icons::MESSAGE,
    footer_tagline: "All rights reserved. Empowering businesses through WhatsApp automation.",
};

pub static LUMINIVIA: SiteContent = SiteContent {
    brand: "Luminivia",
    logo_icon: icons::SUN,
    palette: Palette {
        accent_a: "#8b5cf6",
        accent_b: "#4f46e5",
        accent_soft: "#f5f3ff",
        accent_border: "#ddd6fe",
        accent_ink: "#6d28d9",
        accent: "#7c3aed",
    },
    nav: &[
        NavLink { label: "Features", anchor: "#features" },
        NavLink { label: "How it Works", anchor: "#howitworks" },
        NavLink { label: "Pricing", anchor: "#pricing" },
    ],
    nav_cta: Cta { label: "Book a Demo", href: "#demo" },
    hero: Hero {
        badge: "The AI Front Desk That Never Sleeps",
        title: "Your Clinic, Open",
        title_accent: "Around the Clock on WhatsApp",
        lede: "Luminivia answers every patient message, fills your calendar and sends the \
               reminders, so mornings start with a full schedule instead of a full voicemail \
               box.",
        primary: Cta { label: "Try Luminivia Free", href: "#pricing" },
        secondary: Cta { label: "Watch the Demo", href: "#demo" },
        stats: &[
            Stat { value: "3 min", label: "Average Time to Book" },
            Stat { value: "40%", label: "More Appointments Filled" },
            Stat { value: "24/7", label: "Patient Coverage" },
        ],
    },
    chat: ChatScript {
        clinic: "Brightside Health Studio",
        status: "Online • Replies in seconds",
        lines: &[
            ChatLine {
                inbound: true,
                text: "Hello! Can I get a physiotherapy session this week?",
                chips: &[],
                note: &[],
            },
            ChatLine {
                inbound: false,
                text: "Of course! Which practitioner would you like to see?",
                chips: &["🧘 Anna Lindholm", "💪 Marco Ruiz", "✨ First available"],
                note: &[],
            },
            ChatLine { inbound: true, text: "First available is fine", chips: &[], note: &[] },
            ChatLine {
                inbound: false,
                text: "Marco has these openings:",
                chips: &["📅 Wednesday, 9:00 AM", "📅 Wednesday, 4:30 PM", "📅 Friday, 1:00 PM"],
                note: &[],
            },
            ChatLine { inbound: true, text: "Wednesday 4:30 please", chips: &[], note: &[] },
            ChatLine {
                inbound: false,
                text: "✨ Done! You're booked with Marco on Wednesday at 4:30 PM.",
                chips: &[],
                note: &[
                    "📍 Brightside Health Studio, Harbour Lane 8",
                    "We'll remind you the evening before.",
                ],
            },
        ],
    },
    features_intro: SectionIntro {
        eyebrow: "Features",
        title: "A calmer front desk, a fuller calendar",
        sub: "Every conversation handled, every slot accounted for",
    },
    features: &[
        Feature {
            icon: icons::MESSAGE,
            title: "Conversational Booking",
            text: "Patients book in a chat they already use daily. No apps, no portals, no \
                   passwords.",
            tint_bg: "#f5f3ff",
            tint_fg: "#7c3aed",
        },
        Feature {
            icon: icons::CLOCK,
            title: "After-Hours Coverage",
            text: "Half of booking requests arrive outside office hours. Luminivia answers all \
                   of them.",
            tint_bg: "#eef2ff",
            tint_fg: "#4f46e5",
        },
        Feature {
            icon: icons::ZAP,
            title: "Smart Waitlists",
            text: "Cancellations are offered to waiting patients automatically, keeping the day \
                   fully booked.",
            tint_bg: "#faf5ff",
            tint_fg: "#9333ea",
        },
        Feature {
            icon: icons::BELL,
            title: "Gentle Reminders",
            text: "Friendly nudges the evening before and the morning of, timed to each \
                   patient's visit.",
            tint_bg: "#fdf4ff",
            tint_fg: "#c026d3",
        },
        Feature {
            icon: icons::GLOBE,
            title: "Speaks Every Language",
            text: "Patients write in their own language; your schedule stays in yours.",
            tint_bg: "#eff6ff",
            tint_fg: "#2563eb",
        },
        Feature {
            icon: icons::SHIELD,
            title: "Private by Design",
            text: "Encrypted conversations and regional data residency keep patient details \
                   safe.",
            tint_bg: "#f0f9ff",
            tint_fg: "#0284c7",
        },
    ],
    steps_intro: SectionIntro {
        eyebrow: "How It Works",
        title: "Live in an afternoon",
        sub: "Three steps, no IT project",
    },
    steps: &[
        Step {
            number: "1",
            icon: icons::CALENDAR,
            title: "Plug In Your Schedule",
            text: "Connect the calendar your clinic already runs on. Nothing migrates, nothing \
                   breaks.",
        },
        Step {
            number: "2",
            icon: icons::SPARKLES,
            title: "Teach It Your Services",
            text: "List practitioners, visit types and durations once. Luminivia learns the \
                   rest from context.",
        },
        Step {
            number: "3",
            icon: icons::MESSAGE,
            title: "Point Patients at WhatsApp",
            text: "Put the number on your door and your website. Bookings start the same day.",
        },
    ],
    benefits_title: "Why practices switch to Luminivia",
    benefits: &[
        BenefitGroup {
            icon: icons::HEART,
            title: "For Your Patients",
            bullets: &[
                "A reply in seconds at any hour, in any language",
                "Rebooking and cancelling without a single phone call",
                "Reminders that actually arrive where they look",
                "Directions, prep instructions and parking info on request",
            ],
        },
        BenefitGroup {
            icon: icons::SUN,
            title: "For Your Team",
            bullets: &[
                "Mornings without a voicemail backlog",
                "A schedule that fills itself, nights and weekends included",
                "Cancellation gaps offered to the waitlist automatically",
                "One inbox instead of a ringing phone",
            ],
        },
    ],
    testimonials_title: "Loved by independent practices",
    testimonials: &[
        Testimonial {
            quote: "We turned Luminivia on during our holiday closure and came back to a fully \
                    booked January. I didn't believe the calendar at first.",
            author: "Dr. Elena Brandt",
            role: "General Practitioner",
            clinic: "Brandt Family Practice",
        },
        Testimonial {
            quote: "Our receptionists used to spend whole afternoons on reschedules. Now the \
                    waitlist handles itself and they greet patients instead.",
            author: "Tomas Keller",
            role: "Clinic Manager",
            clinic: "Harbour Physio",
        },
        Testimonial {
            quote: "Patients message us in four languages. Luminivia answers all of them and my \
                    schedule just shows booked slots.",
            author: "Dr. Aisha Rahman",
            role: "Dermatologist",
            clinic: "Clear Skin Clinic",
        },
    ],
    pricing_intro: SectionIntro {
        eyebrow: "Pricing",
        title: "Pay for a front desk, not a phone bill",
        sub: "Every plan starts with a free trial",
    },
    plans: &[
        Plan {
            name: "Starter",
            price: "€39",
            period: "/month",
            features: &[
                "Up to 150 bookings/month",
                "1 practitioner",
                "WhatsApp booking assistant",
                "Evening-before reminders",
                "Calendar connection",
                "Email support",
            ],
            popular: false,
            cta: "Get Started",
        },
        Plan {
            name: "Practice",
            price: "€109",
            period: "/month",
            features: &[
                "Up to 800 bookings/month",
                "Up to 5 practitioners",
                "Smart waitlist refill",
                "Multilingual conversations",
                "Two-stage reminders",
                "Priority support",
                "Booking analytics",
            ],
            popular: true,
            cta: "Try Luminivia Free",
        },
        Plan {
            name: "Network",
            price: "Custom",
            period: "",
            features: &[
                "Unlimited bookings",
                "Unlimited practitioners",
                "Multi-location routing",
                "Dedicated onboarding",
                "Custom integrations",
                "SLA guarantee",
            ],
            popular: false,
            cta: "Talk to Us",
        },
    ],
    pricing_note: "14-day free trial on every plan • No credit card required • Cancel anytime",
    closer: Closer {
        title: "Give your front desk the night off",
        sub: "Luminivia keeps the calendar full while your team sleeps",
        cta: Cta { label: "Try Luminivia Free", href: "#pricing" },
    },
    footer_brand: "Luminivia",
    footer_icon: icons::SUN,
    footer_tagline: "All rights reserved. Bright scheduling for independent clinics.",
};

#[cfg(test)]
mod tests {
    use super::*;

    // Section ids the page template actually renders.
    const RENDERED_IDS: [&str; 4] = ["features", "howitworks", "pricing", "demo"];

    fn check_site(site: &SiteContent) {
        assert_eq!(site.plans.len(), 3, "{} must offer 3 tiers", site.brand);
        assert_eq!(
            site.plans.iter().filter(|p| p.popular).count(),
            1,
            "{} must flag exactly one popular tier",
            site.brand
        );
        assert_eq!(site.features.len(), 6);
        assert_eq!(site.steps.len(), 3);
        assert_eq!(site.testimonials.len(), 3);
        assert_eq!(site.hero.stats.len(), 3);
        assert_eq!(site.benefits.len(), 2);
        assert!(!site.chat.lines.is_empty());

        for link in site.nav {
            let target = link.anchor.trim_start_matches('#');
            assert!(
                RENDERED_IDS.contains(&target),
                "{}: nav anchor {} has no section",
                site.brand,
                link.anchor
            );
        }
        let nav_cta_target = site.nav_cta.href.trim_start_matches('#');
        assert!(RENDERED_IDS.contains(&nav_cta_target));
    }

    #[test]
    fn medibook_content_invariants() {
        check_site(&MEDIBOOK);
    }

    #[test]
    fn luminivia_content_invariants() {
        check_site(&LUMINIVIA);
    }

    #[test]
    fn popular_tier_is_the_middle_one() {
        for site in [&MEDIBOOK, &LUMINIVIA] {
            assert!(site.plans[1].popular);
            assert!(!site.plans[0].popular);
            assert!(!site.plans[2].popular);
        }
    }

    #[test]
    fn chat_scripts_alternate_sides() {
        for site in [&MEDIBOOK, &LUMINIVIA] {
            assert!(site.chat.lines[0].inbound);
            for pair in site.chat.lines.windows(2) {
                assert_ne!(pair[0].inbound, pair[1].inbound);
            }
        }
    }
}
