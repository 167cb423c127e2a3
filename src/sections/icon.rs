use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// One of the stroke paths from `content::icons`.
    pub path: &'static str,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Inline 24x24 stroke icon. All icons on the site share one viewBox and
/// stroke treatment, only the path differs.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d={props.path} />
        </svg>
    }
}
