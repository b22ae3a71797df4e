use chrono::{Datelike, Local};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::overlay::WelcomeOverlay;
use crate::components::timeline::Timeline;
use crate::config;
use crate::controller::panels::PanelState;

#[function_component(Landing)]
pub fn landing() -> Html {
    let panels = use_state(|| PanelState::new(config::DEFAULT_PANEL));
    let content_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Drop the current year into the footer so it stays up to date. Skipped
    // quietly if the slot is missing from the markup.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(slot) = document.get_element_by_id("year") {
                        slot.set_text_content(Some(&Local::now().year().to_string()));
                    }
                }
                || ()
            },
            (),
        );
    }

    // One handler for every control carrying data-target: nav buttons and
    // in-panel CTAs alike switch the panel, then the content scrolls into
    // view.
    let on_nav = {
        let panels = panels.clone();
        let content_ref = content_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let target = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.get_attribute("data-target"));
            if let Some(target) = target {
                let mut next = (*panels).clone();
                if next.activate(&target) {
                    panels.set(next);
                }
            }
            if let Some(element) = content_ref.cast::<HtmlElement>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    let nav_button = |id: &'static str, label: &'static str| {
        html! {
            <button
                class={classes!("nav-link", panels.is_active(id).then(|| "is-active"))}
                data-target={id}
                onclick={on_nav.clone()}
            >
                {label}
            </button>
        }
    };

    let panel_class = |id: &str| {
        classes!("panel", panels.is_active(id).then(|| "panel--active"))
    };

    html! {
        <div class="landing-page">
            <WelcomeOverlay />

            <header class="hero">
                <p class="hero-wordmark">{"tidelight"}</p>
                <h1 class="hero-title">{"Status pages that read like tide tables"}</h1>
                <p class="hero-subtitle">
                    {"One calm page for your team's services. No sirens, no \
                      dashboards-of-dashboards, just what changed and when."}
                </p>
                <nav class="hero-nav">
                    { nav_button("about", "About") }
                    { nav_button("story", "Our story") }
                    { nav_button("contact", "Contact") }
                </nav>
            </header>

            <main id="app" ref={content_ref} class="panel-stack">
                <section id="about" data-panel="about" class={panel_class("about")}>
                    <h2>{"Built for slow mornings"}</h2>
                    <p>
                        {"tidelight watches your services and writes a short, \
                          honest line when something shifts. Your team reads it \
                          with their first coffee, not at 3am."}
                    </p>
                    <ul class="about-list">
                        <li>{"One page per team, one sentence per change"}</li>
                        <li>{"History that reads like a logbook, not a graph wall"}</li>
                        <li>{"Made by four people who answer their own email"}</li>
                    </ul>
                    <button class="cta" data-target="story" onclick={on_nav.clone()}>
                        {"How we got here"}
                    </button>
                </section>

                <section id="story" data-panel="story" class={panel_class("story")}>
                    <h2>{"Six years of staying small"}</h2>
                    <p class="story-intro">
                        {"Scroll through the milestones. They appear in the \
                          order we lived them."}
                    </p>
                    <Timeline />
                    <button class="cta" data-target="contact" onclick={on_nav.clone()}>
                        {"Write to us"}
                    </button>
                </section>

                <section id="contact" data-panel="contact" class={panel_class("contact")}>
                    <h2>{"Say hello"}</h2>
                    <p>
                        {"No sales team, no sequences. The four of us read \
                          everything that lands here."}
                    </p>
                    <ContactForm />
                </section>
            </main>

            <footer class="site-footer">
                <p>{"© "}<span id="year"></span>{" tidelight. Made at sea level."}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        background: #101418;
                        color: #e8ecef;
                        font-family: system-ui, -apple-system, sans-serif;
                        margin: 0 auto;
                        width: 100%;
                        overflow-x: hidden;
                        box-sizing: border-box;
                    }

                    /* Welcome overlay: plays its entry animation once, then the
                       animationend handler parks it behind --done for good. */
                    .welcome-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 20;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #0b0e11;
                        animation: overlay-in 1.6s ease-out forwards;
                    }

                    .welcome-overlay--done {
                        display: none;
                    }

                    @keyframes overlay-in {
                        0% { opacity: 1; }
                        70% { opacity: 1; }
                        100% { opacity: 0; }
                    }

                    .welcome-wordmark {
                        font-size: 2.5rem;
                        letter-spacing: 0.35em;
                        color: #8fd0c6;
                        margin: 0;
                    }

                    .welcome-tagline {
                        color: #6b7680;
                        margin-top: 0.75rem;
                    }

                    .hero {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 4rem 2rem 2rem;
                    }

                    .hero-wordmark {
                        letter-spacing: 0.35em;
                        color: #8fd0c6;
                        text-transform: uppercase;
                        font-size: 0.9rem;
                    }

                    .hero-title {
                        font-size: 3rem;
                        max-width: 640px;
                        line-height: 1.2;
                        background: linear-gradient(45deg, #fff, #8fd0c6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin: 0.5rem 0 1rem;
                    }

                    .hero-subtitle {
                        color: #9aa5ad;
                        font-size: 1.15rem;
                        max-width: 520px;
                        line-height: 1.6;
                    }

                    .hero-nav {
                        margin-top: 2.5rem;
                        display: flex;
                        gap: 1rem;
                    }

                    .nav-link {
                        background: none;
                        border: 1px solid rgba(143, 208, 198, 0.25);
                        color: #c6ced4;
                        padding: 0.6rem 1.4rem;
                        border-radius: 999px;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .nav-link:hover {
                        border-color: rgba(143, 208, 198, 0.6);
                        color: #fff;
                    }

                    .nav-link.is-active {
                        background: rgba(143, 208, 198, 0.15);
                        border-color: #8fd0c6;
                        color: #fff;
                    }

                    .panel-stack {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 2rem;
                    }

                    /* Panels are exclusive: only the active one is rendered
                       visible, the rest stay in the tree but off screen. */
                    .panel {
                        display: none;
                    }

                    .panel--active {
                        display: block;
                        animation: panel-in 0.4s ease;
                    }

                    @keyframes panel-in {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .panel h2 {
                        font-size: 2rem;
                        color: #8fd0c6;
                        margin-bottom: 1rem;
                    }

                    .panel p {
                        color: #9aa5ad;
                        line-height: 1.7;
                    }

                    .about-list {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                    }

                    .about-list li {
                        padding: 0.4rem 0 0.4rem 1.6rem;
                        position: relative;
                        color: #e8ecef;
                    }

                    .about-list li::before {
                        content: '~';
                        position: absolute;
                        left: 0.3rem;
                        color: #8fd0c6;
                    }

                    .cta {
                        margin-top: 1.5rem;
                        padding: 0.8rem 1.6rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #5aa79b, #8fd0c6);
                        color: #0b0e11;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(143, 208, 198, 0.25);
                    }

                    .timeline {
                        list-style: none;
                        padding: 0;
                        margin: 2rem 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }

                    /* Cards start hidden; the reveal cascade adds .visible one
                       card at a time and never removes it. */
                    .timeline-card {
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(143, 208, 198, 0.15);
                        border-radius: 14px;
                        padding: 1.5rem;
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease,
                                    border-color 0.3s ease, box-shadow 0.3s ease;
                    }

                    .timeline-card.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .timeline-card.glow {
                        border-color: #8fd0c6;
                        box-shadow: 0 0 24px rgba(143, 208, 198, 0.2);
                    }

                    .timeline-card:focus {
                        outline: none;
                    }

                    .timeline-year {
                        color: #8fd0c6;
                        font-size: 0.85rem;
                        letter-spacing: 0.15em;
                    }

                    .timeline-card h3 {
                        margin: 0.4rem 0;
                        color: #fff;
                    }

                    .timeline-card p {
                        margin: 0;
                        color: #9aa5ad;
                        line-height: 1.6;
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }

                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                        color: #c6ced4;
                        font-size: 0.9rem;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(143, 208, 198, 0.2);
                        border-radius: 8px;
                        padding: 0.7rem;
                        color: #e8ecef;
                        font-size: 1rem;
                        font-family: inherit;
                    }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #8fd0c6;
                    }

                    .contact-submit {
                        align-self: flex-start;
                        padding: 0.8rem 1.6rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #5aa79b, #8fd0c6);
                        color: #0b0e11;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: opacity 0.3s ease;
                    }

                    .contact-submit:disabled {
                        opacity: 0.7;
                        cursor: default;
                    }

                    .site-footer {
                        text-align: center;
                        padding: 3rem 1rem 2rem;
                        color: #6b7680;
                        border-top: 1px solid rgba(143, 208, 198, 0.1);
                        margin-top: 4rem;
                    }

                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2rem;
                        }

                        .hero-nav {
                            flex-wrap: wrap;
                            justify-content: center;
                        }

                        .panel-stack {
                            padding: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
