use leptos::{html, prelude::*};

use super::reveal::{use_reveal_once, Appear};
use crate::content::{ContactLink, Section, CONTACT_LINKS};
use crate::motion::{Entrance, CONTACT_FOOTER, CONTACT_HEADER, CONTACT_ITEM, CONTACT_STAGGER};

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal_once(section_ref);

    view! {
        <section
            id=Section::Contact.anchor()
            node_ref=section_ref
            class="relative py-20 sm:py-24 px-4 sm:px-6 lg:px-8 overflow-hidden"
        >
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-transparent via-primary-500/5 to-transparent" />
            <div class="max-w-5xl mx-auto">
                <Appear
                    shown=revealed
                    entrance=Entrance::FadeUp
                    transition=CONTACT_HEADER
                    class="text-center mb-12 sm:mb-16"
                >
                    <span class="inline-block px-4 py-1.5 rounded-full bg-primary-500/10 text-primary-600 text-sm font-semibold mb-4">
                        "Get In Touch"
                    </span>
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">
                        "Let's Work Together"
                    </h2>
                    <p class="text-foreground/70 max-w-2xl mx-auto">
                        "Have a project in mind or just want to say hello? Feel free to reach out."
                    </p>
                </Appear>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {CONTACT_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, link)| {
                            view! {
                                <Appear
                                    shown=revealed
                                    entrance=Entrance::FadeUp
                                    transition=CONTACT_STAGGER.apply(CONTACT_ITEM, index)
                                >
                                    <ContactCard link=link />
                                </Appear>
                            }
                        })
                        .collect_view()}
                </div>

                <Appear
                    shown=revealed
                    entrance=Entrance::Fade
                    transition=CONTACT_FOOTER
                    class="mt-12 text-center"
                >
                    <p class="text-foreground/60 max-w-xl mx-auto">
                        "I'm currently open to new opportunities and collaborations. "
                        "Whether it's a question or a project idea, my inbox is always open."
                    </p>
                </Appear>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(link: &'static ContactLink) -> impl IntoView {
    let body = view! {
        <div class="w-14 h-14 rounded-xl bg-gradient-to-br from-primary-500 to-primary-700 flex items-center justify-center text-2xl text-white shadow-lg mb-4 group-hover:scale-110 transition-transform">
            {link.glyph()}
        </div>
        <h3 class="text-lg font-bold mb-2">{link.label}</h3>
        {link
            .lines
            .iter()
            .map(|line| view! { <p class="text-sm text-foreground/70 break-all">{*line}</p> })
            .collect_view()}
    };
    let class = "group flex flex-col items-center text-center h-full rounded-2xl glass border border-border/50 p-6 sm:p-8 hover:-translate-y-2 hover:shadow-xl transition-all duration-300";

    match link.href {
        Some(href) if link.external => view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                aria-label=link.aria_label
                class=class
            >
                {body}
            </a>
        }
        .into_any(),
        Some(href) => view! {
            <a href=href aria-label=link.aria_label class=class>
                {body}
            </a>
        }
        .into_any(),
        None => view! {
            <div aria-label=link.aria_label class=class>
                {body}
            </div>
        }
        .into_any(),
    }
}
