use yew::prelude::*;

use crate::content::{icons, SiteContent};
use crate::motion::hooks::use_reveal;
use crate::sections::features::REVEAL_MARGIN;
use crate::sections::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct CloserProps {
    pub site: &'static SiteContent,
}

/// Full-width call-to-action band above the footer.
#[function_component(Closer)]
pub fn closer(props: &CloserProps) -> Html {
    let site = props.site;
    let (band_ref, band_visible) = use_reveal(REVEAL_MARGIN);

    html! {
        <section class="closer">
            <div
                ref={band_ref}
                class={classes!("closer-band", "reveal", band_visible.then_some("visible"))}
            >
                <h2>{ site.closer.title }</h2>
                <p>{ site.closer.sub }</p>
                <a class="cta-primary inverted" href={site.closer.cta.href}>
                    { site.closer.cta.label }
                    <Icon path={icons::ARROW} size={18} />
                </a>
            </div>
        </section>
    }
}
