use yew::prelude::*;

use crate::content::{icons, SiteContent};
use crate::motion::hooks::use_reveal;
use crate::motion::reveal::stagger_delay_ms;
use crate::sections::features::{CARD_STAGGER_MS, REVEAL_MARGIN};
use crate::sections::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub site: &'static SiteContent,
}

#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    let site = props.site;
    let (title_ref, title_visible) = use_reveal(REVEAL_MARGIN);
    let (row_ref, row_visible) = use_reveal(REVEAL_MARGIN);

    html! {
        <section class="benefits">
            <div class="section-inner">
                <div
                    ref={title_ref}
                    class={classes!("section-intro", "reveal", title_visible.then_some("visible"))}
                >
                    <h2>{ site.benefits_title }</h2>
                </div>
                <div ref={row_ref} class="benefit-row">
                    { for site.benefits.iter().enumerate().map(|(i, group)| html! {
                        <div
                            key={group.title}
                            class={classes!("benefit-card", "reveal", row_visible.then_some("visible"))}
                            style={format!("transition-delay: {}ms;", stagger_delay_ms(i, CARD_STAGGER_MS))}
                        >
                            <div class="benefit-head">
                                <span class="benefit-icon">
                                    <Icon path={group.icon} size={22} />
                                </span>
                                <h3>{ group.title }</h3>
                            </div>
                            <ul>
                                { for group.bullets.iter().map(|bullet| html! {
                                    <li key={*bullet}>
                                        <Icon path={icons::CHECK} size={16} class={classes!("check")} />
                                        <span>{ *bullet }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
