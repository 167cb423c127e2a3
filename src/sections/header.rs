use yew::prelude::*;

use crate::content::SiteContent;
use crate::motion::hooks::use_scrolled;
use crate::motion::reveal::stagger_delay_ms;
use crate::sections::icon::Icon;

/// Scroll depth past which the header turns solid.
const SOLID_AFTER_PX: f64 = 20.0;
/// Gap between successive nav links fading in on mount.
const NAV_STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub site: &'static SiteContent,
}

/// Fixed page header. Transparent over the hero, solid and blurred once the
/// page scrolls; brand and links fade in staggered on mount.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let site = props.site;
    let scrolled = use_scrolled(SOLID_AFTER_PX);

    html! {
        <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
            <div class="header-inner">
                <div class="brand nav-fade">
                    <span class="logo-mark">
                        <Icon path={site.logo_icon} size={20} />
                    </span>
                    <span class="brand-name">{ site.brand }</span>
                </div>
                <nav class="header-nav">
                    { for site.nav.iter().enumerate().map(|(i, link)| html! {
                        <a
                            key={link.anchor}
                            class="nav-link nav-fade"
                            style={format!("animation-delay: {}ms;", stagger_delay_ms(i, NAV_STAGGER_MS))}
                            href={link.anchor}
                        >
                            { link.label }
                        </a>
                    }) }
                    <a
                        class="nav-cta nav-fade"
                        style={format!("animation-delay: {}ms;", stagger_delay_ms(site.nav.len(), NAV_STAGGER_MS))}
                        href={site.nav_cta.href}
                    >
                        { site.nav_cta.label }
                    </a>
                </nav>
            </div>
        </header>
    }
}
