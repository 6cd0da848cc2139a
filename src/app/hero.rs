use std::time::Duration;

use leptos::prelude::*;

use super::reveal::{use_mounted, Appear};
use super::typewriter::TypewriterCode;
use crate::content::{mailto, Section, DEVELOPER_NAME, DEVELOPER_SCRIPT, GITHUB_URL, ROLE};
use crate::motion::{Ease, Entrance, Transition, HERO_CARD, HERO_ITEM, HERO_STAGGER};

struct Badge {
    glyph: &'static str,
    label: &'static str,
    position: &'static str,
    delay_ms: u64,
    color: &'static str,
}

const BADGES: [Badge; 4] = [
    Badge {
        glyph: "</>",
        label: "Code",
        position: "top-0 left-0 -translate-x-1/2 -translate-y-1/2",
        delay_ms: 200,
        color: "from-blue-500 to-cyan-500",
    },
    Badge {
        glyph: "✦",
        label: "Creative",
        position: "top-0 right-0 translate-x-1/2 -translate-y-1/2",
        delay_ms: 400,
        color: "from-purple-500 to-pink-500",
    },
    Badge {
        glyph: "⚡",
        label: "Fast",
        position: "bottom-0 left-0 -translate-x-1/2 translate-y-1/2",
        delay_ms: 600,
        color: "from-yellow-500 to-orange-500",
    },
    Badge {
        glyph: "↗",
        label: "Growing",
        position: "bottom-0 right-0 translate-x-1/2 translate-y-1/2",
        delay_ms: 800,
        color: "from-green-500 to-emerald-500",
    },
];

const STATS: Transition =
    Transition::new(300, Ease::EaseOut).delayed(Duration::from_millis(800));

/// Delay before the code card starts typing.
const TYPEWRITER_DELAY: Duration = Duration::from_millis(1000);

#[component]
pub fn HeroSection() -> impl IntoView {
    let mounted = use_mounted();
    let item = |i: usize| HERO_STAGGER.apply(HERO_ITEM, i);

    view! {
        <section
            id=Section::About.anchor()
            class="relative min-h-screen flex items-center justify-center pt-16 sm:pt-20 pb-12 sm:pb-16 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-background via-background to-primary-50/20 overflow-hidden"
        >
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-20 hidden md:flex flex-col items-center gap-2">
                <div class="text-xs text-foreground/60 font-semibold uppercase tracking-wider animate-pulse">
                    "Scroll"
                </div>
                <div class="w-6 h-10 rounded-full border-2 border-primary-500/50 flex justify-center p-1">
                    <div class="w-1.5 h-1.5 rounded-full bg-primary-500 animate-bounce" />
                </div>
            </div>

            <div class="relative z-10 max-w-7xl w-full grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                <div class="space-y-6 sm:space-y-8">
                    <Appear shown=mounted entrance=Entrance::FadeUp transition=item(0)>
                        <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-primary-500/10 border border-primary-500/30 text-primary-600 text-sm font-semibold">
                            <span class="animate-pulse">"⚡"</span>
                            {ROLE}
                        </span>
                    </Appear>

                    <Appear shown=mounted entrance=Entrance::FadeUp transition=item(1)>
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold leading-tight">
                            <span class="text-foreground">"Hey! I'm "</span>
                            <br />
                            <span class="bg-gradient-to-r from-primary-500 via-purple-500 to-pink-500 bg-clip-text text-transparent bg-[length:200%_auto] animate-gradient">
                                {DEVELOPER_NAME}
                            </span>
                            <span class="inline-block ml-2 animate-wave origin-[70%_70%]">"👋"</span>
                        </h1>
                    </Appear>

                    <Appear shown=mounted entrance=Entrance::FadeUp transition=item(2)>
                        <p class="text-lg sm:text-xl text-foreground/70 leading-relaxed max-w-xl">
                            "Building "
                            <span class="font-semibold text-primary-500">"dope web apps"</span>
                            " with React, Next.js & Java. "
                            <span class="font-semibold text-purple-500">"Full-stack dev"</span>
                            " who loves clean code & modern tech. 🚀"
                        </p>
                    </Appear>

                    <Appear
                        shown=mounted
                        entrance=Entrance::FadeUp
                        transition=item(3)
                        class="flex flex-wrap gap-4"
                    >
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Visit GitHub profile (opens in new tab)"
                            class="group relative overflow-hidden inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-gradient-to-r from-primary-500 to-purple-600 text-white font-semibold shadow-lg hover:scale-105 transition-transform"
                        >
                            <span class="absolute inset-0 bg-gradient-to-r from-transparent via-white/20 to-transparent -translate-x-full group-hover:translate-x-full transition-transform duration-1000" />
                            <span class="relative">"View My Work"</span>
                            <span class="relative group-hover:translate-x-1 transition-transform">"→"</span>
                        </a>
                        <a
                            href=Section::Contact.href()
                            aria-label="Navigate to contact section"
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-xl border-2 border-primary-500/50 text-foreground font-semibold hover:bg-primary-500/10 hover:scale-105 transition-all"
                        >
                            <span>"Let's Connect"</span>
                            <span>"💬"</span>
                        </a>
                    </Appear>

                    <Appear
                        shown=mounted
                        entrance=Entrance::FadeUp
                        transition=item(4)
                        class="flex items-center gap-6"
                    >
                        <div class="flex gap-3" role="list" aria-label="Social links">
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Visit GitHub profile (opens in new tab)"
                                role="listitem"
                                class="w-12 h-12 rounded-xl glass flex items-center justify-center text-xl hover:scale-110 hover:-translate-y-1 transition-transform"
                            >
                                "🐙"
                            </a>
                            <a
                                href=mailto()
                                aria-label="Send email"
                                role="listitem"
                                class="w-12 h-12 rounded-xl glass flex items-center justify-center text-xl hover:scale-110 hover:-translate-y-1 transition-transform"
                            >
                                "✉"
                            </a>
                        </div>
                        <Appear
                            shown=mounted
                            entrance=Entrance::FadeLeft
                            transition=STATS
                            class="flex items-center gap-4 pl-6 border-l border-primary-500/30"
                        >
                            <Stat value="100%" label="Passionate" />
                            <div class="w-px h-8 bg-primary-500/30" />
                            <Stat value="24/7" label="Learning" />
                        </Appear>
                    </Appear>
                </div>

                <Appear
                    shown=mounted
                    entrance=Entrance::ScaleIn
                    transition=HERO_CARD
                    class="relative flex items-center justify-center"
                >
                    <div class="absolute inset-0 rounded-full bg-gradient-to-br from-primary-500/30 to-purple-500/30 blur-3xl animate-pulse-slow" />
                    <div class="relative w-full max-w-md">
                        {BADGES
                            .iter()
                            .map(|badge| {
                                view! {
                                    <div
                                        class=format!("absolute z-20 {} animate-float", badge.position)
                                        style=format!("animation-delay: {}ms", badge.delay_ms)
                                    >
                                        <div class=format!(
                                            "flex items-center gap-1.5 px-3 py-1.5 rounded-full bg-gradient-to-r {} text-white text-xs font-semibold shadow-lg",
                                            badge.color,
                                        )>
                                            <span>{badge.glyph}</span>
                                            <span>{badge.label}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <FlipCard />
                    </div>
                </Appear>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-lg sm:text-xl font-bold bg-gradient-to-r from-primary-500 to-primary-600 bg-clip-text text-transparent">
                {value}
            </div>
            <div class="text-xs text-foreground/60 font-medium">{label}</div>
        </div>
    }
}

#[component]
fn WindowDots() -> impl IntoView {
    view! {
        <div class="w-3 h-3 rounded-full bg-red-500" />
        <div class="w-3 h-3 rounded-full bg-yellow-500" />
        <div class="w-3 h-3 rounded-full bg-green-500" />
    }
}

/// Code editor on the front, portfolio blurb on the back; flips on hover.
#[component]
fn FlipCard() -> impl IntoView {
    let line_count = DEVELOPER_SCRIPT.len();
    view! {
        <div class="group relative w-full h-[400px] sm:h-[450px] [perspective:1000px] animate-float">
            <div class="relative w-full h-full [transform-style:preserve-3d] transition-transform duration-500 group-hover:[transform:rotateY(180deg)_scale(1.02)]">
                <div class="absolute inset-0 [backface-visibility:hidden] rounded-2xl glass border border-border/50 shadow-2xl overflow-hidden flex flex-col">
                    <div class="flex items-center space-x-2 p-4 border-b border-border/50">
                        <WindowDots />
                        <span class="ml-4 text-xs text-foreground/70 font-mono font-semibold">
                            "developer.js"
                        </span>
                        <span class="ml-auto flex items-center gap-1 text-xs font-mono">
                            <span class="text-green-500">"●"</span>
                            <span class="text-foreground/50">"Live"</span>
                        </span>
                    </div>
                    <div class="flex-1 p-4 sm:p-6 md:p-8 font-mono text-xs sm:text-sm overflow-auto">
                        <div class="flex gap-6 sm:gap-8">
                            <div class="text-foreground/30 select-none text-right min-w-[2rem]">
                                {(1..=line_count)
                                    .map(|n| {
                                        view! {
                                            <div class="h-5 sm:h-6 flex items-center justify-end pr-2">
                                                {n}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <TypewriterCode lines=&DEVELOPER_SCRIPT delay=TYPEWRITER_DELAY />
                        </div>
                    </div>
                    <div class="px-4 py-2 border-t border-border/50 flex items-center justify-between text-xs text-foreground/60 font-mono">
                        <div class="flex items-center space-x-4">
                            <span>{format!("Ln {line_count}, Col 1")}</span>
                            <span>"Spaces: 2"</span>
                        </div>
                        <div class="flex items-center space-x-2">
                            <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse" />
                            <span>"Ready"</span>
                        </div>
                    </div>
                </div>

                <div class="absolute inset-0 [backface-visibility:hidden] [transform:rotateY(180deg)] rounded-2xl glass border border-border shadow-2xl overflow-hidden flex flex-col">
                    <div class="flex items-center space-x-2 p-4 border-b border-border/50">
                        <WindowDots />
                        <span class="ml-4 text-xs text-foreground/60 font-mono">"portfolio.js"</span>
                    </div>
                    <div class="flex-1 p-4 sm:p-6 md:p-8 space-y-4 sm:space-y-6">
                        <h3 class="text-xl sm:text-2xl md:text-3xl font-bold">
                            <a
                                href=Section::Projects.href()
                                class="text-foreground hover:text-primary-500 transition-colors"
                            >
                                "Portfolio"
                            </a>
                        </h3>
                        <p class="text-sm sm:text-base text-foreground/70">
                            "This is where I showcase my projects and build my professional portfolio."
                        </p>
                        <pre class="p-4 rounded-xl bg-background/50 font-mono text-xs sm:text-sm">
                            <code>
                                <span class="text-blue-400">"const"</span>
                                " portfolio = {\n  "
                                <span class="text-purple-400">"name"</span>
                                ": "
                                <span class="text-emerald-400">{format!("\"{DEVELOPER_NAME}\"")}</span>
                                ",\n  "
                                <span class="text-purple-400">"role"</span>
                                ": "
                                <span class="text-emerald-400">{format!("\"{ROLE}\"")}</span>
                                ",\n};"
                            </code>
                        </pre>
                    </div>
                </div>
            </div>
        </div>
    }
}
