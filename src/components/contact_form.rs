use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::controller::contact::SubmitButton;
use crate::controller::schedule::{Scheduler, TimeoutScheduler};

/// The contact form never talks to a server. Submitting thanks the visitor
/// on the button itself, then the button re-arms after a short cooldown.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let button = use_state(SubmitButton::idle);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let button = button.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let visitor = (*name).clone();
            log!("Contact form submitted, acknowledging locally");

            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            button.set(SubmitButton::acknowledging(&visitor));

            // A repeat submit during the cooldown schedules another restore;
            // the earlier one just fires first. No queue.
            let button = button.clone();
            TimeoutScheduler.after(
                config::FORM_COOLDOWN_MS,
                Box::new(move || button.set(SubmitButton::idle())),
            );
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <label>
                {"Name"}
                <input
                    type="text"
                    name="name"
                    placeholder="How should we greet you?"
                    value={(*name).clone()}
                    onchange={let name = name.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
            </label>
            <label>
                {"Email"}
                <input
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </label>
            <label>
                {"Message"}
                <textarea
                    name="message"
                    rows="5"
                    placeholder="What's on your mind?"
                    value={(*message).clone()}
                    onchange={let message = message.clone(); move |e: Event| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />
            </label>
            <button type="submit" class="contact-submit" disabled={button.disabled}>
                { button.label.clone() }
            </button>
        </form>
    }
}
