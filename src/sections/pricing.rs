use yew::prelude::*;

use crate::content::{icons, SiteContent};
use crate::motion::hooks::use_reveal;
use crate::motion::reveal::stagger_delay_ms;
use crate::sections::features::{CARD_STAGGER_MS, REVEAL_MARGIN};
use crate::sections::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub site: &'static SiteContent,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let site = props.site;
    let (intro_ref, intro_visible) = use_reveal(REVEAL_MARGIN);
    let (grid_ref, grid_visible) = use_reveal(REVEAL_MARGIN);

    html! {
        <section class="pricing" id="pricing">
            <div class="section-inner">
                <div
                    ref={intro_ref}
                    class={classes!("section-intro", "reveal", intro_visible.then_some("visible"))}
                >
                    <span class="eyebrow">{ site.pricing_intro.eyebrow }</span>
                    <h2>{ site.pricing_intro.title }</h2>
                    <p>{ site.pricing_intro.sub }</p>
                </div>
                <div ref={grid_ref} class="pricing-grid">
                    { for site.plans.iter().enumerate().map(|(i, plan)| html! {
                        <div
                            key={plan.name}
                            class={classes!(
                                "pricing-card",
                                plan.popular.then_some("popular"),
                                "reveal",
                                grid_visible.then_some("visible"),
                            )}
                            style={format!("transition-delay: {}ms;", stagger_delay_ms(i, CARD_STAGGER_MS))}
                        >
                            {
                                if plan.popular {
                                    html! { <div class="popular-tag">{ "Most Popular" }</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <h3>{ plan.name }</h3>
                            <div class="price">
                                <span class="amount">{ plan.price }</span>
                                <span class="period">{ plan.period }</span>
                            </div>
                            <ul>
                                { for plan.features.iter().map(|feature| html! {
                                    <li key={*feature}>
                                        <Icon path={icons::CHECK} size={16} class={classes!("check")} />
                                        <span>{ *feature }</span>
                                    </li>
                                }) }
                            </ul>
                            <a class="plan-cta" href="#demo">{ plan.cta }</a>
                        </div>
                    }) }
                </div>
                <p class="pricing-note">{ site.pricing_note }</p>
            </div>
        </section>
    }
}
