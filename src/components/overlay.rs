use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Full-page welcome card shown while the entry animation plays. Once the
/// animation reports completion the overlay is hidden for good; there is no
/// way back to the visible state.
#[function_component(WelcomeOverlay)]
pub fn welcome_overlay() -> Html {
    let done = use_state(|| false);
    let overlay_ref = use_node_ref();

    {
        let done = done.clone();
        use_effect_with_deps(
            move |overlay_ref: &NodeRef| {
                let cleanup: Box<dyn FnOnce()> =
                    if let Some(element) = overlay_ref.cast::<HtmlElement>() {
                        let callback = Closure::<dyn FnMut()>::new(move || done.set(true));
                        let _ = element.add_event_listener_with_callback(
                            "animationend",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = element.remove_event_listener_with_callback(
                                "animationend",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    };
                cleanup
            },
            overlay_ref.clone(),
        );
    }

    html! {
        <div
            ref={overlay_ref}
            class={classes!("welcome-overlay", (*done).then(|| "welcome-overlay--done"))}
        >
            <p class="welcome-wordmark">{"tidelight"}</p>
            <p class="welcome-tagline">{"calm software for small teams"}</p>
        </div>
    }
}
