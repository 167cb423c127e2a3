use yew::prelude::*;

use crate::content::SiteContent;
use crate::motion::hooks::use_scroll_progress;
use crate::motion::spring::Spring;
use crate::sections::benefits::Benefits;
use crate::sections::closer::Closer;
use crate::sections::features::Features;
use crate::sections::footer::Footer;
use crate::sections::header::Header;
use crate::sections::hero::Hero;
use crate::sections::pricing::Pricing;
use crate::sections::steps::Steps;
use crate::sections::testimonials::Testimonials;

/// Stiffness of the optional scroll smoothing spring.
const SCROLL_SPRING_STIFFNESS: f64 = 170.0;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: &'static SiteContent,
    /// Smooth the scroll progress through the critically damped spring
    /// before it drives the hero parallax.
    #[prop_or(false)]
    pub smooth_scroll: bool,
    /// Replay the chat demo as a looping timed sequence.
    #[prop_or(false)]
    pub animate_chat: bool,
}

/// The landing page template. Both brands render this with their own
/// content and palette tables.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let site = props.site;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let spring = props
        .smooth_scroll
        .then(|| Spring::critically_damped(SCROLL_SPRING_STIFFNESS));
    let progress = use_scroll_progress(spring);

    let palette = &site.palette;
    let palette_vars = format!(
        "--accent-a: {}; --accent-b: {}; --accent-soft: {}; --accent-border: {}; \
         --accent-ink: {}; --accent: {};",
        palette.accent_a,
        palette.accent_b,
        palette.accent_soft,
        palette.accent_border,
        palette.accent_ink,
        palette.accent,
    );

    html! {
        <main class="landing" style={palette_vars}>
            <style>
                {r#"
                    .landing {
                        background: #fff;
                        color: #0f172a;
                        overflow-x: hidden;
                    }
                    .section-inner {
                        max-width: 1120px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    /* Reveal-on-view: hidden preset, 0.6s ease-out to rest. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }

                    /* Mount entrance used by the header and hero. */
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: none; }
                    }
                    .rise { animation: riseIn 0.6s ease-out both; }
                    @keyframes navFade {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: none; }
                    }
                    .nav-fade { animation: navFade 0.4s ease-out both; }

                    /* Header */
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease,
                                    border-color 0.3s ease;
                        border-bottom: 1px solid transparent;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(16px);
                        border-bottom-color: #e2e8f0;
                        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    }
                    .header-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand { display: flex; align-items: center; gap: 0.5rem; }
                    .logo-mark {
                        width: 36px;
                        height: 36px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: linear-gradient(135deg, var(--accent-a), var(--accent-b));
                    }
                    .logo-mark.small { width: 28px; height: 28px; border-radius: 8px; }
                    .brand-name { font-size: 1.25rem; font-weight: 700; }
                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .nav-link { color: #475569; text-decoration: none; transition: color 0.2s; }
                    .nav-link:hover { color: #0f172a; }
                    .nav-cta {
                        background: #0f172a;
                        color: #fff;
                        text-decoration: none;
                        border-radius: 12px;
                        padding: 0.625rem 1.25rem;
                        font-weight: 600;
                        transition: background 0.2s;
                    }
                    .nav-cta:hover { background: #1e293b; }
                    @media (max-width: 768px) {
                        .header-nav .nav-link { display: none; }
                    }

                    /* Hero */
                    .hero {
                        padding: 8rem 1.5rem 6rem;
                        text-align: center;
                        will-change: transform;
                    }
                    .hero-copy { max-width: 72rem; margin: 0 auto; }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        background: var(--accent-soft);
                        border: 1px solid var(--accent-border);
                        color: var(--accent-ink);
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                        margin: 0 0 1.5rem;
                    }
                    .accent-text {
                        background: linear-gradient(90deg, var(--accent-a), var(--accent-b));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-lede {
                        font-size: 1.25rem;
                        color: #475569;
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.6;
                    }
                    .hero-ctas {
                        margin-top: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .cta-primary {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 12px;
                        background: #0f172a;
                        color: #fff;
                        text-decoration: none;
                        padding: 1rem 2rem;
                        font-weight: 600;
                        box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.25);
                        transition: background 0.2s, transform 0.2s;
                    }
                    .cta-primary:hover { background: #1e293b; transform: scale(1.02); }
                    .cta-primary.inverted { background: #fff; color: var(--accent-ink); }
                    .cta-ghost {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #334155;
                        text-decoration: none;
                        font-weight: 600;
                        transition: color 0.2s;
                    }
                    .cta-ghost:hover { color: #0f172a; }
                    .hero-stats {
                        margin: 5rem auto 0;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 48rem;
                    }
                    .stat-value { font-size: 2.25rem; font-weight: 700; }
                    .stat-label { font-size: 0.875rem; color: #475569; margin-top: 0.25rem; }
                    .hero-chat { margin-top: 5rem; will-change: transform; }

                    /* Section frame */
                    section { padding: 6rem 0; }
                    .section-intro { text-align: center; margin-bottom: 4rem; }
                    .eyebrow {
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        color: var(--accent);
                    }
                    .section-intro h2 {
                        margin: 0.75rem 0 0;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                    }
                    .section-intro p {
                        margin: 1rem auto 0;
                        font-size: 1.25rem;
                        color: #475569;
                        max-width: 42rem;
                    }

                    /* Features */
                    .features { background: #f8fafc; }
                    .feature-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    }
                    .feature-card {
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .icon-tile {
                        width: 48px;
                        height: 48px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.25rem;
                    }
                    .feature-card h3 { margin: 0 0 0.5rem; font-size: 1.125rem; }
                    .feature-card p { margin: 0; color: #475569; line-height: 1.6; }

                    /* Steps */
                    .step-row {
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    }
                    .step-card { text-align: center; padding: 1rem; }
                    .step-number {
                        width: 48px;
                        height: 48px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: #fff;
                        background: linear-gradient(135deg, var(--accent-a), var(--accent-b));
                    }
                    .step-icon { color: var(--accent); margin-bottom: 0.75rem; }
                    .step-card h3 { margin: 0 0 0.5rem; }
                    .step-card p { margin: 0; color: #475569; line-height: 1.6; }

                    /* Benefits */
                    .benefits { background: #f8fafc; }
                    .benefit-row {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    }
                    .benefit-card {
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        padding: 2.5rem;
                    }
                    .benefit-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .benefit-head h3 { margin: 0; font-size: 1.25rem; }
                    .benefit-icon {
                        width: 44px;
                        height: 44px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--accent-soft);
                        color: var(--accent-ink);
                    }
                    .benefit-card ul { list-style: none; margin: 0; padding: 0; }
                    .benefit-card li {
                        display: flex;
                        gap: 0.625rem;
                        align-items: flex-start;
                        color: #334155;
                        line-height: 1.6;
                    }
                    .benefit-card li + li { margin-top: 0.875rem; }
                    .check { color: var(--accent); flex-shrink: 0; margin-top: 0.2rem; }

                    /* Testimonials */
                    .testimonial-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    }
                    .testimonial-card {
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .stars { color: #f59e0b; letter-spacing: 0.2em; margin-bottom: 1rem; }
                    .testimonial-card blockquote {
                        margin: 0 0 1.5rem;
                        color: #334155;
                        line-height: 1.7;
                        font-style: italic;
                    }
                    .attribution .author { font-weight: 600; }
                    .attribution .role { font-size: 0.875rem; color: #64748b; }

                    /* Pricing */
                    .pricing { background: #f8fafc; }
                    .pricing-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        align-items: start;
                    }
                    .pricing-card {
                        position: relative;
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        padding: 2.5rem 2rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .pricing-card.popular {
                        border: 2px solid var(--accent);
                        box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.12);
                    }
                    .popular-tag {
                        position: absolute;
                        top: -14px;
                        left: 50%;
                        transform: translateX(-50%);
                        background: linear-gradient(90deg, var(--accent-a), var(--accent-b));
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 600;
                        border-radius: 9999px;
                        padding: 0.375rem 1rem;
                        white-space: nowrap;
                    }
                    .pricing-card h3 { margin: 0; font-size: 1.125rem; }
                    .price { margin: 1rem 0 1.5rem; }
                    .price .amount { font-size: 2.5rem; font-weight: 700; }
                    .price .period { color: #64748b; }
                    .pricing-card ul {
                        list-style: none;
                        margin: 0 0 2rem;
                        padding: 0;
                        flex: 1;
                    }
                    .pricing-card li {
                        display: flex;
                        gap: 0.625rem;
                        align-items: flex-start;
                        color: #334155;
                        font-size: 0.9375rem;
                        line-height: 1.5;
                    }
                    .pricing-card li + li { margin-top: 0.75rem; }
                    .plan-cta {
                        display: block;
                        text-align: center;
                        border-radius: 12px;
                        padding: 0.875rem 1rem;
                        font-weight: 600;
                        text-decoration: none;
                        color: #0f172a;
                        border: 1px solid #cbd5e1;
                        transition: background 0.2s, color 0.2s;
                    }
                    .plan-cta:hover { background: #f1f5f9; }
                    .pricing-card.popular .plan-cta {
                        background: var(--accent);
                        border-color: var(--accent);
                        color: #fff;
                    }
                    .pricing-note {
                        text-align: center;
                        color: #64748b;
                        font-size: 0.875rem;
                        margin-top: 3rem;
                    }

                    /* Closer */
                    .closer { padding: 6rem 1.5rem; }
                    .closer-band {
                        max-width: 1120px;
                        margin: 0 auto;
                        border-radius: 24px;
                        padding: 4rem 2rem;
                        text-align: center;
                        color: #fff;
                        background: linear-gradient(135deg, var(--accent-a), var(--accent-b));
                    }
                    .closer-band h2 { margin: 0; font-size: clamp(2rem, 4vw, 2.75rem); }
                    .closer-band p {
                        margin: 1rem auto 2rem;
                        font-size: 1.125rem;
                        opacity: 0.9;
                        max-width: 38rem;
                    }

                    /* Footer */
                    .site-footer {
                        border-top: 1px solid #e2e8f0;
                        padding: 3rem 1.5rem;
                    }
                    .footer-inner {
                        max-width: 1120px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                    }
                    .footer-tagline { color: #64748b; font-size: 0.875rem; margin: 0; }
                "#}
            </style>
            <Header site={site} />
            <Hero site={site} progress={progress} animate_chat={props.animate_chat} />
            <Features site={site} />
            <Steps site={site} />
            <Benefits site={site} />
            <Testimonials site={site} />
            <Pricing site={site} />
            <Closer site={site} />
            <Footer site={site} />
        </main>
    }
}
