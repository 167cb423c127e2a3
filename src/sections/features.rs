use yew::prelude::*;

use crate::content::SiteContent;
use crate::motion::hooks::use_reveal;
use crate::motion::reveal::stagger_delay_ms;
use crate::sections::icon::Icon;

/// Early-trigger margin shared by every reveal-on-view section: the reveal
/// fires while the element is still 100px below the fold.
pub const REVEAL_MARGIN: &str = "0px 0px -100px 0px";
/// Gap between cards of one revealed group.
pub const CARD_STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub site: &'static SiteContent,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let site = props.site;
    let (intro_ref, intro_visible) = use_reveal(REVEAL_MARGIN);
    let (grid_ref, grid_visible) = use_reveal(REVEAL_MARGIN);

    html! {
        <section class="features" id="features">
            <div class="section-inner">
                <div
                    ref={intro_ref}
                    class={classes!("section-intro", "reveal", intro_visible.then_some("visible"))}
                >
                    <span class="eyebrow">{ site.features_intro.eyebrow }</span>
                    <h2>{ site.features_intro.title }</h2>
                    <p>{ site.features_intro.sub }</p>
                </div>
                <div ref={grid_ref} class="feature-grid">
                    { for site.features.iter().enumerate().map(|(i, feature)| html! {
                        <div
                            key={feature.title}
                            class={classes!("feature-card", "reveal", grid_visible.then_some("visible"))}
                            style={format!("transition-delay: {}ms;", stagger_delay_ms(i, CARD_STAGGER_MS))}
                        >
                            <div
                                class="icon-tile"
                                style={format!("background: {}; color: {};", feature.tint_bg, feature.tint_fg)}
                            >
                                <Icon path={feature.icon} />
                            </div>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
