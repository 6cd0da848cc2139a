use std::time::Duration;

use leptos::prelude::*;

use crate::typewriter::{tints, Tick, Typewriter, TypewriterTiming};

fn random_unit() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.5
    }
}

/// Arm a browser timer for `tick`. When it fires the sequencer advances and
/// the next tick is armed, so only one timer is ever pending.
fn schedule(
    state: RwSignal<Typewriter>,
    pending: StoredValue<Option<TimeoutHandle>>,
    tick: Tick,
) {
    let handle = set_timeout_with_handle(
        move || {
            // None once the view is disposed
            let next = state
                .try_update(|tw| tw.advance(tick.generation, &mut random_unit))
                .flatten();
            if let Some(next) = next {
                schedule(state, pending, next);
            }
        },
        tick.delay,
    );
    match handle {
        Ok(handle) => {
            pending.try_update_value(|p| *p = Some(handle));
        }
        Err(err) => log::warn!("couldn't schedule typewriter tick: {err:?}"),
    }
}

/// Code listing typed out character by character, looping forever.
#[component]
pub fn TypewriterCode(
    lines: &'static [&'static str],
    #[prop(optional)] delay: Duration,
) -> impl IntoView {
    let timing = TypewriterTiming::default().with_start_delay(delay);
    let state = RwSignal::new(Typewriter::new(lines.iter().copied(), timing));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    // effects only run in the browser
    Effect::new(move |_| {
        if let Some(tick) = state.try_update(|tw| tw.start()).flatten() {
            schedule(state, pending, tick);
        }
    });

    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        state.try_update_untracked(|tw| tw.cancel());
    });

    view! {
        <div class="flex-1 space-y-0.5">
            {lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let line_tints = tints(line);
                    view! {
                        <div class="h-5 sm:h-6 flex items-center whitespace-pre">
                            {move || {
                                state
                                    .with(|tw| {
                                        let chars = tw
                                            .revealed(i)
                                            .chars()
                                            .zip(line_tints.iter())
                                            .map(|(c, tint)| {
                                                let c = if c == ' ' { '\u{a0}' } else { c };
                                                view! { <span class=tint.class()>{c.to_string()}</span> }
                                            })
                                            .collect_view();
                                        let caret = (tw.caret_line() == Some(i))
                                            .then(|| {
                                                view! {
                                                    <span class="inline-block w-0.5 h-4 sm:h-5 bg-primary-500 ml-0.5 animate-caret" />
                                                }
                                            });
                                        (chars, caret)
                                    })
                            }}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
