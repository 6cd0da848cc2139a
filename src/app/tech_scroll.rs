use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_media_query};

use crate::carousel::{per_view_for, Carousel, CarouselOptions};
use crate::content::{Technology, TECHNOLOGIES};
use crate::motion::{tech_card_delay, TECH_CARD};

/// How long a touch tooltip lingers after the finger lifts.
const TOUCH_LINGER: Duration = Duration::from_millis(200);

#[component]
pub fn TechScroll() -> impl IntoView {
    let options = CarouselOptions::default();
    let carousel = RwSignal::new(Carousel::new(TECHNOLOGIES.len(), per_view_for(false, false, false, false), options));
    let hovered = RwSignal::new(None::<usize>);
    let touched = RwSignal::new(None::<usize>);

    let sm = use_media_query("(min-width: 640px)");
    let md = use_media_query("(min-width: 768px)");
    let lg = use_media_query("(min-width: 1024px)");
    let xl = use_media_query("(min-width: 1280px)");
    Effect::new(move |_| {
        let per_view = per_view_for(sm.get(), md.get(), lg.get(), xl.get());
        carousel.update(|c| c.set_per_view(per_view));
    });

    // cleared with the owner; ticks are ignored while the pointer hovers
    let _ = use_interval_fn(
        move || {
            carousel.update(|c| {
                c.autoplay_tick();
            });
        },
        options.autoplay_interval.as_millis() as u64,
    );

    let track_style = move || {
        carousel.with(|c| {
            format!(
                "transform: translateX(-{}%);",
                c.offset() as f64 * 100.0 / c.per_view() as f64
            )
        })
    };
    let item_style = move || carousel.with(|c| format!("flex: 0 0 {}%;", 100.0 / c.per_view() as f64));

    view! {
        <div
            class="relative w-full px-10 sm:px-12"
            on:mouseenter=move |_| carousel.update(|c| c.pointer_enter())
            on:mouseleave=move |_| carousel.update(|c| c.pointer_leave())
        >
            <div class="overflow-hidden py-6">
                <div class="flex transition-transform duration-700 ease-out" style=track_style>
                    {TECHNOLOGIES
                        .iter()
                        .enumerate()
                        .map(|(index, tech)| {
                            view! {
                                <div class="min-w-0 px-2 sm:px-3" style=item_style>
                                    <TechCard index=index tech=tech hovered=hovered touched=touched />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                type="button"
                aria-label="Previous technologies"
                class="absolute left-0 top-1/2 -translate-y-1/2 w-9 h-9 sm:w-10 sm:h-10 rounded-full glass flex items-center justify-center hover:scale-110 transition-transform disabled:opacity-40"
                disabled=move || carousel.with(|c| !c.can_scroll_prev())
                on:click=move |_| {
                    carousel.update(|c| {
                        c.navigate_prev();
                    })
                }
            >
                "‹"
            </button>
            <button
                type="button"
                aria-label="Next technologies"
                class="absolute right-0 top-1/2 -translate-y-1/2 w-9 h-9 sm:w-10 sm:h-10 rounded-full glass flex items-center justify-center hover:scale-110 transition-transform disabled:opacity-40"
                disabled=move || carousel.with(|c| !c.can_scroll_next())
                on:click=move |_| {
                    carousel.update(|c| {
                        c.navigate_next();
                    })
                }
            >
                "›"
            </button>

            <div class="flex justify-center mt-2">
                <span class=move || {
                    if carousel.with(Carousel::is_playing) {
                        "px-3 py-1 rounded-full glass text-xs font-semibold text-primary-500 animate-pulse"
                    } else {
                        "px-3 py-1 rounded-full glass text-xs font-semibold text-foreground/60 opacity-70"
                    }
                }>
                    {move || if carousel.with(Carousel::is_playing) { "Auto" } else { "Paused" }}
                </span>
            </div>
        </div>
    }
}

#[component]
fn TechCard(
    index: usize,
    tech: &'static Technology,
    hovered: RwSignal<Option<usize>>,
    touched: RwSignal<Option<usize>>,
) -> impl IntoView {
    let is_hovered = move || hovered.get() == Some(index);
    let is_touched = move || touched.get() == Some(index);
    let is_active = move || is_hovered() || is_touched();
    let entrance = TECH_CARD.delayed(tech_card_delay(index, TECHNOLOGIES.len())).style();

    view! {
        <div
            class="group relative cursor-pointer hover:scale-110 hover:-translate-y-2 active:scale-95 animate-rise"
            style=entrance
            on:mouseenter=move |_| hovered.set(Some(index))
            on:mouseleave=move |_| hovered.set(None)
            on:touchstart=move |_| touched.set(Some(index))
            on:touchend=move |_| {
                set_timeout(
                    move || {
                        // the card may be gone by now
                        touched.try_update(|t| {
                            if *t == Some(index) {
                                *t = None;
                            }
                        });
                    },
                    TOUCH_LINGER,
                )
            }
        >
            <div
                class=format!(
                    "absolute inset-0 rounded-2xl bg-gradient-to-br {} blur-xl transition-all duration-300",
                    tech.color,
                )
                style=move || {
                    if is_active() {
                        "opacity: 0.4; transform: scale(1.2);"
                    } else {
                        "opacity: 0; transform: scale(1);"
                    }
                }
            />
            <div class="relative aspect-square rounded-2xl glass border border-border/50 flex items-center justify-center p-4 sm:p-5 overflow-hidden">
                <div
                    class=format!(
                        "absolute inset-0 bg-gradient-to-br {} transition-opacity duration-300",
                        tech.color,
                    )
                    style=move || if is_active() { "opacity: 0.2;" } else { "opacity: 0;" }
                />
                <img
                    src=tech.src
                    alt=tech.alt
                    width="70"
                    height="70"
                    loading=if index < 6 { "eager" } else { "lazy" }
                    class="relative z-10 w-full h-full object-contain"
                />
                <div
                    class="absolute inset-0 bg-gradient-to-r from-transparent via-white/30 to-transparent skew-x-12 transition-transform duration-[600ms] ease-in-out"
                    style=move || {
                        if is_active() {
                            "transform: translateX(200%);"
                        } else {
                            "transform: translateX(-100%);"
                        }
                    }
                />
            </div>
            <div
                class="absolute -bottom-8 left-1/2 -translate-x-1/2 whitespace-nowrap px-2 py-1 rounded-md bg-foreground text-background text-xs font-semibold pointer-events-none transition-all duration-200"
                style=move || {
                    if is_active() {
                        "opacity: 1; transform: translate(-50%, 0);"
                    } else {
                        "opacity: 0; transform: translate(-50%, 5px);"
                    }
                }
            >
                {tech.name}
            </div>
            {move || {
                is_hovered()
                    .then(|| {
                        view! {
                            <div class="absolute inset-0 rounded-2xl border-2 border-primary-500 animate-ping-slow pointer-events-none" />
                        }
                    })
            }}
        </div>
    }
}
