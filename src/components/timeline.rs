use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};
use yew::prelude::*;

use crate::config;
use crate::controller::schedule::{Scheduler, TimeoutScheduler};
use crate::controller::timeline::{reveal_plan, TimelineAction, TimelineState};
use crate::observer::IntersectionWatcher;

struct Milestone {
    year: &'static str,
    title: &'static str,
    detail: &'static str,
}

const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2019",
        title: "First sketch",
        detail: "One weekend, one whiteboard, and the idea that a status page \
                 should read like a tide table, not a stock ticker.",
    },
    Milestone {
        year: "2020",
        title: "tidelight 0.1",
        detail: "The first release goes out to three teams we know by name. \
                 It does one thing and refuses to do more.",
    },
    Milestone {
        year: "2021",
        title: "The quiet rewrite",
        detail: "We tear out every feature that made the page louder and keep \
                 the ones that made it calmer.",
    },
    Milestone {
        year: "2023",
        title: "A thousand teams",
        detail: "Still no growth dashboard in the office. We hear about the \
                 milestone from a customer's thank-you note.",
    },
    Milestone {
        year: "2025",
        title: "Small on purpose",
        detail: "Four people, no roadmap theater, and mornings that start \
                 with the kettle instead of a pager.",
    },
];

impl Reducible for TimelineState {
    type Action = TimelineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// True when the place the pointer/focus went to is itself a timeline card;
/// the glow then stays put until that card's own enter event claims it.
fn moves_into_card(target: Option<EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(".timeline-card").ok().flatten())
        .is_some()
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let state = use_reducer(|| TimelineState::new(MILESTONES.len()));
    let card_refs = use_mut_ref(|| {
        (0..MILESTONES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let wired = use_mut_ref(|| vec![false; MILESTONES.len()]);
    let watcher = use_mut_ref(|| None::<IntersectionWatcher>);

    // Wiring pass. Runs after every render; the wired flags keep each card
    // observed at most once.
    {
        let state = state.clone();
        let card_refs = card_refs.clone();
        let wired = wired.clone();
        let watcher = watcher.clone();
        use_effect(move || {
            if watcher.borrow().is_none() {
                let dispatch = state.clone();
                *watcher.borrow_mut() = IntersectionWatcher::new(
                    config::REVEAL_THRESHOLD,
                    config::REVEAL_ROOT_MARGIN,
                    Rc::new(move |seen: usize| {
                        // Crossing any card's threshold reveals it and every
                        // card before it, on a cascade.
                        for step in reveal_plan(seen, MILESTONES.len(), config::STAGGER_STEP_MS) {
                            let dispatch = dispatch.clone();
                            TimeoutScheduler.after(
                                step.delay_ms,
                                Box::new(move || dispatch.dispatch(TimelineAction::Reveal(step.index))),
                            );
                        }
                    }),
                );
            }
            if let Some(watcher) = watcher.borrow().as_ref() {
                for (index, node) in card_refs.borrow().iter().enumerate() {
                    if wired.borrow()[index] {
                        continue;
                    }
                    if let Some(element) = node.cast::<Element>() {
                        watcher.observe(&element);
                        wired.borrow_mut()[index] = true;
                    }
                }
            }
            || ()
        });
    }

    let cards = MILESTONES.iter().enumerate().map(|(index, milestone)| {
        let node = card_refs.borrow()[index].clone();

        let onmouseenter = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(TimelineAction::Highlight(index)))
        };
        let onmouseleave = {
            let state = state.clone();
            Callback::from(move |event: MouseEvent| {
                state.dispatch(TimelineAction::Unhighlight {
                    into_card: moves_into_card(event.related_target()),
                })
            })
        };
        let onfocus = {
            let state = state.clone();
            Callback::from(move |_: FocusEvent| state.dispatch(TimelineAction::Highlight(index)))
        };
        let onblur = {
            let state = state.clone();
            Callback::from(move |event: FocusEvent| {
                state.dispatch(TimelineAction::Unhighlight {
                    into_card: moves_into_card(event.related_target()),
                })
            })
        };

        html! {
            <li
                key={index}
                ref={node}
                class={classes!(
                    "timeline-card",
                    state.is_revealed(index).then(|| "visible"),
                    state.is_highlighted(index).then(|| "glow"),
                )}
                data-index={index.to_string()}
                tabindex="0"
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
                onfocus={onfocus}
                onblur={onblur}
            >
                <span class="timeline-year">{milestone.year}</span>
                <h3>{milestone.title}</h3>
                <p>{milestone.detail}</p>
            </li>
        }
    });

    html! {
        <ol class="timeline">
            { for cards }
        </ol>
    }
}
