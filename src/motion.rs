use std::time::Duration;

/// Timing curve for an entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
    /// Overshooting curve standing in for a spring.
    Spring,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
            Ease::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Ease::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration_ms: u64, ease: Ease) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            ease,
        }
    }

    pub const fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    pub fn style(&self) -> String {
        format!(
            "transition-property: opacity, transform; transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {};",
            self.duration.as_millis(),
            self.delay.as_millis(),
            self.ease.css()
        )
    }
}

/// Parent-driven delay for a list of children, revealed one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger: Duration,
}

impl Stagger {
    pub const fn new(delay_children_ms: u64, stagger_ms: u64) -> Self {
        Self {
            delay_children: Duration::from_millis(delay_children_ms),
            stagger: Duration::from_millis(stagger_ms),
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.delay_children + self.stagger * index as u32
    }

    pub fn apply(&self, item: Transition, index: usize) -> Transition {
        item.delayed(item.delay + self.delay_for(index))
    }
}

pub const HERO_STAGGER: Stagger = Stagger::new(300, 200);
pub const HERO_ITEM: Transition = Transition::new(600, Ease::EaseOut);
pub const HERO_CARD: Transition =
    Transition::new(800, Ease::EaseOut).delayed(Duration::from_millis(500));

pub const SKILLS_STAGGER: Stagger = Stagger::new(0, 100);
pub const SKILL_CARD: Transition = Transition::new(500, Ease::EaseOut);
pub const SKILL_ITEM: Transition = Transition::new(400, Ease::EaseOut);

pub const CONTACT_STAGGER: Stagger = Stagger::new(0, 150);
pub const CONTACT_ITEM: Transition = Transition::new(600, Ease::EaseOut);
pub const CONTACT_HEADER: Transition = Transition::new(600, Ease::EaseOut);
pub const CONTACT_FOOTER: Transition =
    Transition::new(600, Ease::EaseOut).delayed(Duration::from_millis(800));

pub const TECH_CARD: Transition = Transition::new(300, Ease::Spring);

/// Delay of the `skill_index`-th preview skill inside the `category_index`-th card.
pub fn skill_item_delay(category_index: usize, skill_index: usize) -> Duration {
    Duration::from_millis(100) * category_index as u32
        + Duration::from_millis(50) * skill_index as u32
        + Duration::from_millis(300)
}

pub fn tech_card_delay(index: usize, len: usize) -> Duration {
    if len == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(30) * (index % len) as u32
}

/// Hidden and shown utility classes for each kind of entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Fade,
    FadeUp,
    FadeUpScale,
    FadeLeft,
    ScaleIn,
}

impl Entrance {
    pub fn classes(self, shown: bool) -> &'static str {
        match (self, shown) {
            (_, true) => "opacity-100 translate-x-0 translate-y-0 scale-100",
            (Entrance::Fade, false) => "opacity-0",
            (Entrance::FadeUp, false) => "opacity-0 translate-y-[30px]",
            (Entrance::FadeUpScale, false) => "opacity-0 translate-y-[50px] scale-90",
            (Entrance::FadeLeft, false) => "opacity-0 -translate-x-5",
            (Entrance::ScaleIn, false) => "opacity-0 scale-75",
        }
    }
}

const GRADIENTS: [(&str, &str, &str); 6] = [
    ("orange", "from-orange-500 to-orange-700", "rgba(249, 115, 22, 0.5)"),
    ("blue", "from-blue-500 to-blue-700", "rgba(59, 130, 246, 0.5)"),
    ("green", "from-green-500 to-green-700", "rgba(34, 197, 94, 0.5)"),
    ("purple", "from-purple-500 to-purple-700", "rgba(168, 85, 247, 0.5)"),
    ("indigo", "from-indigo-500 to-indigo-700", "rgba(99, 102, 241, 0.5)"),
    ("teal", "from-teal-500 to-teal-700", "rgba(20, 184, 166, 0.5)"),
];

const PRIMARY_GRADIENT: &str = "from-primary-500 to-primary-700";
const PRIMARY_SPOTLIGHT: &str = "rgba(14, 165, 233, 0.5)";

/// Collapse a color token onto one of the card gradients. First matching hue wins.
pub fn gradient_for(color: &str) -> &'static str {
    GRADIENTS
        .iter()
        .find(|(hue, _, _)| color.contains(hue))
        .map(|(_, gradient, _)| *gradient)
        .unwrap_or(PRIMARY_GRADIENT)
}

pub fn spotlight_color(color: &str) -> &'static str {
    GRADIENTS
        .iter()
        .find(|(hue, _, _)| color.contains(hue))
        .map(|(_, _, rgba)| *rgba)
        .unwrap_or(PRIMARY_SPOTLIGHT)
}
