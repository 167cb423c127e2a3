use yew::prelude::*;

use crate::content::SiteContent;
use crate::motion::hooks::use_reveal;
use crate::motion::reveal::stagger_delay_ms;
use crate::sections::features::{CARD_STAGGER_MS, REVEAL_MARGIN};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub site: &'static SiteContent,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let site = props.site;
    let (title_ref, title_visible) = use_reveal(REVEAL_MARGIN);
    let (grid_ref, grid_visible) = use_reveal(REVEAL_MARGIN);

    html! {
        <section class="testimonials">
            <div class="section-inner">
                <div
                    ref={title_ref}
                    class={classes!("section-intro", "reveal", title_visible.then_some("visible"))}
                >
                    <h2>{ site.testimonials_title }</h2>
                </div>
                <div ref={grid_ref} class="testimonial-grid">
                    { for site.testimonials.iter().enumerate().map(|(i, t)| html! {
                        <div
                            key={t.author}
                            class={classes!("testimonial-card", "reveal", grid_visible.then_some("visible"))}
                            style={format!("transition-delay: {}ms;", stagger_delay_ms(i, CARD_STAGGER_MS))}
                        >
                            <div class="stars">{ "★★★★★" }</div>
                            <blockquote>{ t.quote }</blockquote>
                            <div class="attribution">
                                <div class="author">{ t.author }</div>
                                <div class="role">{ format!("{} • {}", t.role, t.clinic) }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
