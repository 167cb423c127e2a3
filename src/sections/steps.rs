use yew::prelude::*;

use crate::content::SiteContent;
use crate::motion::hooks::use_reveal;
use crate::motion::reveal::stagger_delay_ms;
use crate::sections::features::{CARD_STAGGER_MS, REVEAL_MARGIN};
use crate::sections::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct StepsProps {
    pub site: &'static SiteContent,
}

#[function_component(Steps)]
pub fn steps(props: &StepsProps) -> Html {
    let site = props.site;
    let (intro_ref, intro_visible) = use_reveal(REVEAL_MARGIN);
    let (row_ref, row_visible) = use_reveal(REVEAL_MARGIN);

    html! {
        <section class="steps" id="howitworks">
            <div class="section-inner">
                <div
                    ref={intro_ref}
                    class={classes!("section-intro", "reveal", intro_visible.then_some("visible"))}
                >
                    <span class="eyebrow">{ site.steps_intro.eyebrow }</span>
                    <h2>{ site.steps_intro.title }</h2>
                    <p>{ site.steps_intro.sub }</p>
                </div>
                <div ref={row_ref} class="step-row">
                    { for site.steps.iter().enumerate().map(|(i, step)| html! {
                        <div
                            key={step.number}
                            class={classes!("step-card", "reveal", row_visible.then_some("visible"))}
                            style={format!("transition-delay: {}ms;", stagger_delay_ms(i, CARD_STAGGER_MS))}
                        >
                            <div class="step-number">{ step.number }</div>
                            <div class="step-icon">
                                <Icon path={step.icon} />
                            </div>
                            <h3>{ step.title }</h3>
                            <p>{ step.text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
