use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::SiteContent;
use crate::sections::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub site: &'static SiteContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let site = props.site;
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="logo-mark small">
                        <Icon path={site.footer_icon} size={16} />
                    </span>
                    <span>{ site.footer_brand }</span>
                </div>
                <p class="footer-tagline">
                    { format!("© {} {}. {}", year, site.footer_brand, site.footer_tagline) }
                </p>
            </div>
        </footer>
    }
}
