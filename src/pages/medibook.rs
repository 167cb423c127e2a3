use yew::prelude::*;

use crate::content::MEDIBOOK;
use crate::pages::landing::Landing;

/// The MediBook landing page. Raw scroll progress drives the hero parallax
/// and the chat demo is shown as a finished conversation.
#[function_component(MediBook)]
pub fn medibook() -> Html {
    html! { <Landing site={&MEDIBOOK} /> }
}
