use yew::prelude::*;

use crate::content::LUMINIVIA;
use crate::pages::landing::Landing;

/// The Luminivia landing page. Scroll progress is spring-smoothed before it
/// drives the hero, and the chat demo replays its script on a loop.
#[function_component(Luminivia)]
pub fn luminivia() -> Html {
    html! { <Landing site={&LUMINIVIA} smooth_scroll=true animate_chat=true /> }
}
