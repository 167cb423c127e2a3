use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content::SiteContent;
use crate::sections::icon::Icon;

/// Pause before the first bubble appears.
const OPEN_MS: u32 = 800;
/// Pause between bubbles.
const LINE_MS: u32 = 1200;
/// Hold on the finished conversation before the loop restarts.
const HOLD_MS: u32 = 5000;

#[derive(Properties, PartialEq)]
pub struct ChatDemoProps {
    pub site: &'static SiteContent,
    /// Replay the script as a looping timed sequence. When false the whole
    /// conversation is shown at once.
    #[prop_or(false)]
    pub animate: bool,
}

/// Mock WhatsApp conversation booking an appointment, rendered from the
/// site's literal chat script.
#[function_component(ChatDemo)]
pub fn chat_demo(props: &ChatDemoProps) -> Html {
    let site = props.site;
    let lines = site.chat.lines;

    // Number of bubbles currently shown. Saturated when not animating.
    let stage = use_state(|| if props.animate { 0usize } else { lines.len() });

    {
        let stage = stage.clone();
        let animate = props.animate;
        let total = lines.len();
        let deps = *stage;
        use_effect_with_deps(
            move |shown: &usize| {
                let mut pending = None;
                if animate {
                    let shown = *shown;
                    let (delay, next) = if shown == 0 {
                        (OPEN_MS, 1)
                    } else if shown < total {
                        (LINE_MS, shown + 1)
                    } else {
                        (HOLD_MS, 0)
                    };
                    pending = Some(Timeout::new(delay, move || stage.set(next)));
                }
                // Dropping the handle cancels the tick on unmount.
                move || drop(pending)
            },
            deps,
        );
    }

    html! {
        <div class="chat-demo" id="demo">
            <style>
                {r#"
                    .chat-demo {
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.18);
                        padding: 1.5rem;
                        max-width: 560px;
                        margin: 0 auto;
                        text-align: left;
                    }
                    .chat-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding-bottom: 1rem;
                        margin-bottom: 1.25rem;
                        border-bottom: 1px solid #f1f5f9;
                    }
                    .chat-avatar {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: linear-gradient(135deg, var(--accent-a), var(--accent-b));
                    }
                    .chat-clinic { font-weight: 600; color: #0f172a; }
                    .chat-status {
                        font-size: 0.75rem;
                        color: var(--accent);
                        display: flex;
                        align-items: center;
                        gap: 0.35rem;
                    }
                    .chat-status::before {
                        content: "";
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: var(--accent);
                    }
                    .chat-lines { display: flex; flex-direction: column; gap: 0.75rem; }
                    .chat-line { display: flex; }
                    .chat-line.outbound { justify-content: flex-end; }
                    .bubble {
                        max-width: 26rem;
                        padding: 0.75rem 1rem;
                        border-radius: 16px;
                        font-size: 0.875rem;
                        line-height: 1.5;
                    }
                    .chat-line.inbound .bubble {
                        background: #f1f5f9;
                        color: #334155;
                        border-top-left-radius: 4px;
                    }
                    .chat-line.outbound .bubble {
                        background: var(--accent);
                        color: #fff;
                        border-top-right-radius: 4px;
                    }
                    .bubble .chips { margin-top: 0.75rem; display: flex; flex-direction: column; gap: 0.5rem; }
                    .bubble .chip {
                        background: rgba(255, 255, 255, 0.2);
                        border-radius: 8px;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                    .bubble .note {
                        margin-top: 0.5rem;
                        background: rgba(255, 255, 255, 0.2);
                        border-radius: 8px;
                        padding: 0.5rem 0.75rem;
                    }
                    .bubble .note p { font-size: 0.75rem; margin: 0; }
                    .bubble .note p + p { margin-top: 0.25rem; }
                    .chat-line {
                        opacity: 0;
                        transform: translateY(10px);
                        transition: opacity 0.4s ease-out, transform 0.4s ease-out;
                    }
                    .chat-line.shown { opacity: 1; transform: none; }
                "#}
            </style>
            <div class="chat-head">
                <div class="chat-avatar">
                    <Icon path={site.logo_icon} size={20} />
                </div>
                <div>
                    <div class="chat-clinic">{ site.chat.clinic }</div>
                    <div class="chat-status">{ site.chat.status }</div>
                </div>
            </div>
            <div class="chat-lines">
                { for lines.iter().enumerate().map(|(i, line)| {
                    let side = if line.inbound { "inbound" } else { "outbound" };
                    let shown = i < *stage;
                    html! {
                        <div key={i} class={classes!("chat-line", side, shown.then_some("shown"))}>
                            <div class="bubble">
                                <p>{ line.text }</p>
                                {
                                    if !line.chips.is_empty() {
                                        html! {
                                            <div class="chips">
                                                { for line.chips.iter().map(|chip| html! {
                                                    <div class="chip" key={*chip}>{ *chip }</div>
                                                }) }
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if !line.note.is_empty() {
                                        html! {
                                            <div class="note">
                                                { for line.note.iter().map(|note| html! {
                                                    <p key={*note}>{ *note }</p>
                                                }) }
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
