use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::reveal::{use_reveal_once, Appear};
use super::tech_scroll::TechScroll;
use crate::content::{SkillCategory, Section, SKILL_CATEGORIES};
use crate::motion::{
    gradient_for, skill_item_delay, spotlight_color, Entrance, SKILLS_STAGGER, SKILL_CARD,
    SKILL_ITEM,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(section_ref);
    // index into SKILL_CATEGORIES of the category shown in the details dialog
    let selected = RwSignal::new(None::<usize>);

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            selected.set(None);
        }
    });

    view! {
        <section
            id=Section::Skills.anchor()
            node_ref=section_ref
            class="relative py-20 sm:py-24 px-4 sm:px-6 lg:px-8 overflow-hidden"
        >
            <div class="max-w-7xl mx-auto">
                <Appear
                    shown=revealed
                    entrance=Entrance::FadeUp
                    transition=SKILL_CARD
                    class="text-center mb-12 sm:mb-16"
                >
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary-500/10 text-primary-600 text-sm font-semibold mb-4">
                        "Technical Expertise"
                    </span>
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">
                        "Skills & Technologies"
                    </h2>
                    <p class="text-foreground/70 max-w-2xl mx-auto">
                        "A comprehensive overview of the technologies and tools I work with"
                    </p>
                </Appear>

                <div
                    class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6"
                    role="list"
                    aria-label="Technology skills"
                >
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <Appear
                                    shown=revealed
                                    entrance=Entrance::FadeUpScale
                                    transition=SKILLS_STAGGER.apply(SKILL_CARD, index)
                                >
                                    <SkillCard
                                        index=index
                                        category=category
                                        revealed=revealed
                                        on_details=move || selected.set(Some(index))
                                    />
                                </Appear>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    selected
                        .get()
                        .and_then(|i| SKILL_CATEGORIES.get(i))
                        .map(|category| {
                            view! { <SkillDialog category=category on_close=move || selected.set(None) /> }
                        })
                }}

                <div id=Section::Projects.anchor() class="mt-20 sm:mt-24">
                    <Appear
                        shown=revealed
                        entrance=Entrance::FadeUp
                        transition=SKILL_CARD
                        class="text-center mb-10"
                    >
                        <h3 class="text-2xl sm:text-3xl font-bold mb-3">
                            "Technologies I Work With"
                        </h3>
                        <p class="text-foreground/70">
                            "A showcase of the tools and technologies in my stack"
                        </p>
                    </Appear>
                    <TechScroll />
                </div>

                <div class="mt-16 text-center text-sm text-foreground/60">
                    <p>
                        "🚀 Always learning and exploring new technologies "
                        "💡 Open to new challenges"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    index: usize,
    category: &'static SkillCategory,
    revealed: Signal<bool>,
    on_details: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let gradient = gradient_for(category.color);
    let spotlight = spotlight_color(category.color);
    let hidden = category.hidden_count();

    view! {
        <div
            role="listitem"
            class="group relative h-full rounded-2xl p-[1px] bg-gradient-to-br from-border/50 to-transparent hover:-translate-y-2 transition-transform duration-300"
            style=format!("--spotlight: {spotlight}")
        >
            <div class="spotlight-card relative h-full rounded-2xl glass p-6 sm:p-8 flex flex-col">
                <div class=format!(
                    "w-14 h-14 rounded-xl bg-gradient-to-br {gradient} flex items-center justify-center text-2xl text-white shadow-lg mb-6 group-hover:scale-110 group-hover:rotate-6 transition-transform",
                )>{category.icon.glyph()}</div>
                <h3 class="text-xl font-bold mb-4">{category.title}</h3>
                <ul class="space-y-2 flex-1">
                    {category
                        .preview()
                        .iter()
                        .enumerate()
                        .map(|(skill_index, skill)| {
                            let delay = skill_item_delay(index, skill_index);
                            view! {
                                <li>
                                    <Appear
                                        shown=revealed
                                        entrance=Entrance::FadeLeft
                                        transition=SKILL_ITEM.delayed(delay)
                                        class="flex items-center gap-2 text-foreground/80"
                                    >
                                        <span class=format!(
                                            "w-1.5 h-1.5 rounded-full bg-gradient-to-r {gradient}",
                                        ) />
                                        <span>{*skill}</span>
                                    </Appear>
                                </li>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <li class="text-sm text-foreground/50 italic">
                                    {format!("+{hidden} more skills")}
                                </li>
                            }
                        })}
                </ul>
                {if category.has_details() {
                    Either::Left(
                        view! {
                            <button
                                type="button"
                                on:click=move |_| on_details()
                                class=format!(
                                    "mt-6 inline-flex items-center justify-center gap-2 px-4 py-2 rounded-lg bg-gradient-to-r {gradient} text-white text-sm font-semibold hover:scale-105 transition-transform",
                                )
                            >
                                <span>"View Details"</span>
                                <span>"›"</span>
                            </button>
                        },
                    )
                } else {
                    Either::Right(())
                }}
            </div>
        </div>
    }
}

#[component]
fn SkillDialog(
    category: &'static SkillCategory,
    on_close: impl Fn() + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let gradient = gradient_for(category.color);
    let close_backdrop = on_close.clone();

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm"
            on:click=move |_| close_backdrop()
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="skill-dialog-title"
                class="relative w-full max-w-lg max-h-[80vh] overflow-y-auto rounded-2xl glass border border-border p-6 sm:p-8 shadow-2xl"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute top-4 right-4 text-foreground/60 hover:text-foreground"
                    on:click=move |_| on_close()
                >
                    "✕"
                </button>
                <div class="flex items-center gap-4 mb-2">
                    <div class=format!(
                        "w-12 h-12 rounded-xl bg-gradient-to-br {gradient} flex items-center justify-center text-xl text-white",
                    )>{category.icon.glyph()}</div>
                    <h3 id="skill-dialog-title" class="text-2xl font-bold">
                        {category.title}
                    </h3>
                </div>
                <p class="text-sm text-foreground/60 mb-6">
                    "Complete list of skills and technologies"
                </p>
                <ul class="grid sm:grid-cols-2 gap-3">
                    {category
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <li class="flex items-center gap-2 px-3 py-2 rounded-lg bg-background/50 border border-border/50">
                                    <span class=format!(
                                        "w-1.5 h-1.5 rounded-full bg-gradient-to-r {gradient}",
                                    ) />
                                    <span class="text-sm">{*skill}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
