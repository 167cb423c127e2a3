use yew::prelude::*;

use crate::content::{icons, SiteContent};
use crate::motion::interpolate::{sample, Stops};
use crate::sections::chat_demo::ChatDemo;
use crate::sections::icon::Icon;

// Scroll-progress breakpoint tables, one per animated property. The hero
// copy drifts down and fades as the page leaves it; the chat panel shrinks
// slightly so the drift reads as depth.
const HERO_PARALLAX: &Stops = &[(0.0, 0.0), (0.3, 100.0)];
const HERO_FADE: &Stops = &[(0.0, 1.0), (0.08, 1.0), (0.3, 0.25)];
const CHAT_SCALE: &Stops = &[(0.0, 1.0), (0.3, 0.96)];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub site: &'static SiteContent,
    /// Normalized page scroll progress, raw or spring-smoothed.
    pub progress: f64,
    /// Replay the chat script as a timed sequence instead of showing it whole.
    #[prop_or(false)]
    pub animate_chat: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let site = props.site;
    let shift = sample(HERO_PARALLAX, props.progress);
    let fade = sample(HERO_FADE, props.progress);
    let scale = sample(CHAT_SCALE, props.progress);

    html! {
        <section class="hero" style={format!("transform: translateY({shift:.2}px);")}>
            <div class="hero-copy" style={format!("opacity: {fade:.3};")}>
                <div class="hero-badge rise" style="animation-delay: 0ms;">
                    <Icon path={icons::SPARKLES} size={16} />
                    <span>{ site.hero.badge }</span>
                </div>
                <h1 class="rise" style="animation-delay: 100ms;">
                    { site.hero.title }
                    <br />
                    <span class="accent-text">{ site.hero.title_accent }</span>
                </h1>
                <p class="hero-lede rise" style="animation-delay: 200ms;">{ site.hero.lede }</p>
                <div class="hero-ctas rise" style="animation-delay: 300ms;">
                    <a class="cta-primary" href={site.hero.primary.href}>
                        { site.hero.primary.label }
                        <Icon path={icons::ARROW} size={18} />
                    </a>
                    <a class="cta-ghost" href={site.hero.secondary.href}>
                        { site.hero.secondary.label }
                        <Icon path={icons::ARROW} size={18} />
                    </a>
                </div>
                <div class="hero-stats rise" style="animation-delay: 400ms;">
                    { for site.hero.stats.iter().map(|stat| html! {
                        <div class="stat" key={stat.label}>
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </div>
            // The mount animation and the scroll-driven scale must not share
            // one transform, so the scale lives on an inner wrapper.
            <div class="hero-chat rise" style="animation-delay: 500ms;">
                <div style={format!("transform: scale({scale:.4});")}>
                    <ChatDemo site={site} animate={props.animate_chat} />
                </div>
            </div>
        </section>
    }
}
