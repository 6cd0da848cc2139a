//! Autoplaying, looping showcase carousel.
//!
//! [`Carousel`] only tracks which snap is selected and whether autoplay is
//! currently held; the component owns the interval and the markup.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidesToScroll {
    /// One full view per step.
    Auto,
    Count(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub align: Align,
    pub looping: bool,
    pub slides_to_scroll: SlidesToScroll,
    pub autoplay_interval: Duration,
    /// Hold autoplay while the pointer is over the carousel.
    pub stop_on_mouse_enter: bool,
    /// Stop autoplay for good after manual navigation.
    pub stop_on_interaction: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            align: Align::Start,
            looping: true,
            slides_to_scroll: SlidesToScroll::Auto,
            autoplay_interval: Duration::from_millis(2000),
            stop_on_mouse_enter: true,
            stop_on_interaction: false,
        }
    }
}

/// Items visible at once for the active `sm`/`md`/`lg`/`xl` breakpoints.
/// The widest matching breakpoint wins.
pub fn per_view_for(sm: bool, md: bool, lg: bool, xl: bool) -> usize {
    if xl {
        7
    } else if lg {
        6
    } else if md {
        5
    } else if sm {
        4
    } else {
        3
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    selected: usize,
    hovered: bool,
    stopped: bool,
    options: CarouselOptions,
}

impl Carousel {
    pub fn new(len: usize, per_view: usize, options: CarouselOptions) -> Self {
        Self {
            len,
            per_view: per_view.max(1),
            selected: 0,
            hovered: false,
            stopped: false,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn step(&self) -> usize {
        match self.options.slides_to_scroll {
            SlidesToScroll::Auto => self.per_view,
            SlidesToScroll::Count(n) => n.max(1),
        }
    }

    pub fn snap_count(&self) -> usize {
        self.len.div_ceil(self.step())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible item. The last snap is pulled back so the
    /// track never scrolls past its final item.
    pub fn offset(&self) -> usize {
        let max = self.len.saturating_sub(self.per_view);
        let raw = self.selected * self.step();
        match self.options.align {
            Align::Start => raw.min(max),
            Align::Center => raw.saturating_sub(self.per_view / 2).min(max),
            Align::End => raw.saturating_sub(self.per_view - 1).min(max),
        }
    }

    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
        let last = self.snap_count().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.snap_count() > 1 && (self.options.looping || self.selected > 0)
    }

    pub fn can_scroll_next(&self) -> bool {
        self.snap_count() > 1 && (self.options.looping || self.selected + 1 < self.snap_count())
    }

    /// Returns whether the selection moved.
    pub fn scroll_next(&mut self) -> bool {
        if !self.can_scroll_next() {
            return false;
        }
        self.selected = (self.selected + 1) % self.snap_count();
        true
    }

    pub fn scroll_prev(&mut self) -> bool {
        if !self.can_scroll_prev() {
            return false;
        }
        self.selected = match self.selected {
            0 => self.snap_count() - 1,
            i => i - 1,
        };
        true
    }

    pub fn scroll_to(&mut self, snap: usize) {
        self.selected = snap.min(self.snap_count().saturating_sub(1));
    }

    /// Manual navigation by the user, as opposed to an autoplay tick.
    pub fn navigate_next(&mut self) -> bool {
        self.interact();
        self.scroll_next()
    }

    pub fn navigate_prev(&mut self) -> bool {
        self.interact();
        self.scroll_prev()
    }

    fn interact(&mut self) {
        if self.options.stop_on_interaction {
            self.stopped = true;
        }
    }

    pub fn pointer_enter(&mut self) {
        if self.options.stop_on_mouse_enter && !self.hovered {
            log::debug!("carousel autoplay paused");
            self.hovered = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.hovered {
            log::debug!("carousel autoplay resumed");
            self.hovered = false;
        }
    }

    pub fn is_playing(&self) -> bool {
        !self.hovered && !self.stopped
    }

    /// Autoplay interval elapsed. Ignored while held.
    pub fn autoplay_tick(&mut self) -> bool {
        self.is_playing() && self.scroll_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CarouselOptions::default();
        assert_eq!(options.align, Align::Start);
        assert!(options.looping);
        assert_eq!(options.slides_to_scroll, SlidesToScroll::Auto);
        assert_eq!(options.autoplay_interval, Duration::from_millis(2000));
        assert!(options.stop_on_mouse_enter);
        assert!(!options.stop_on_interaction);
    }

    #[test]
    fn test_auto_step_follows_per_view() {
        let mut carousel = Carousel::new(13, 4, CarouselOptions::default());
        assert_eq!(carousel.step(), 4);
        assert_eq!(carousel.snap_count(), 4);

        carousel.set_per_view(6);
        assert_eq!(carousel.step(), 6);
        assert_eq!(carousel.snap_count(), 3);
    }

    #[test]
    fn test_loop_wraps_both_ways() {
        let mut carousel = Carousel::new(13, 6, CarouselOptions::default());
        assert!(carousel.scroll_prev());
        assert_eq!(carousel.selected(), 2);
        assert!(carousel.scroll_next());
        assert_eq!(carousel.selected(), 0);
    }

    #[test]
    fn test_clamps_without_loop() {
        let options = CarouselOptions {
            looping: false,
            ..Default::default()
        };
        let mut carousel = Carousel::new(7, 3, options);
        assert!(!carousel.can_scroll_prev());
        assert!(!carousel.scroll_prev());
        assert!(carousel.scroll_next());
        assert!(carousel.scroll_next());
        assert_eq!(carousel.selected(), 2);
        assert!(!carousel.scroll_next());
        assert_eq!(carousel.selected(), 2);
    }

    #[test]
    fn test_offset_never_overscrolls() {
        let mut carousel = Carousel::new(13, 6, CarouselOptions::default());
        assert_eq!(carousel.offset(), 0);
        carousel.scroll_next();
        assert_eq!(carousel.offset(), 6);
        carousel.scroll_next();
        // third snap would start at 12 but only 7 items can lead
        assert_eq!(carousel.offset(), 7);
    }

    #[test]
    fn test_hover_holds_autoplay() {
        let mut carousel = Carousel::new(13, 4, CarouselOptions::default());
        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.selected(), 1);

        carousel.pointer_enter();
        assert!(!carousel.is_playing());
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.selected(), 1);

        // manual navigation still works while hovered
        assert!(carousel.navigate_next());
        assert_eq!(carousel.selected(), 2);

        carousel.pointer_leave();
        assert!(carousel.is_playing());
        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.selected(), 3);
    }

    #[test]
    fn test_hover_ignored_when_not_configured() {
        let options = CarouselOptions {
            stop_on_mouse_enter: false,
            ..Default::default()
        };
        let mut carousel = Carousel::new(13, 4, options);
        carousel.pointer_enter();
        assert!(carousel.is_playing());
        assert!(carousel.autoplay_tick());
    }

    #[test]
    fn test_stop_on_interaction() {
        let options = CarouselOptions {
            stop_on_interaction: true,
            ..Default::default()
        };
        let mut carousel = Carousel::new(13, 4, options);
        carousel.navigate_prev();
        assert!(!carousel.is_playing());
        assert!(!carousel.autoplay_tick());

        let mut carousel = Carousel::new(13, 4, CarouselOptions::default());
        carousel.navigate_prev();
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_single_view_does_not_move() {
        let mut carousel = Carousel::new(3, 6, CarouselOptions::default());
        assert_eq!(carousel.snap_count(), 1);
        assert!(!carousel.autoplay_tick());
        assert!(!carousel.scroll_prev());
        assert_eq!(carousel.offset(), 0);

        let mut empty = Carousel::new(0, 3, CarouselOptions::default());
        assert!(empty.is_empty());
        assert!(!empty.scroll_next());
        empty.scroll_to(5);
        assert_eq!(empty.selected(), 0);
    }

    #[test]
    fn test_resize_clamps_selection() {
        let mut carousel = Carousel::new(13, 3, CarouselOptions::default());
        carousel.scroll_to(4);
        assert_eq!(carousel.selected(), 4);
        carousel.set_per_view(6);
        assert_eq!(carousel.selected(), 2);
    }

    #[test]
    fn test_per_view_breakpoints() {
        assert_eq!(per_view_for(false, false, false, false), 3);
        assert_eq!(per_view_for(true, false, false, false), 4);
        assert_eq!(per_view_for(true, true, false, false), 5);
        assert_eq!(per_view_for(true, true, true, false), 6);
        assert_eq!(per_view_for(true, true, true, true), 7);
        // 13 technologies at 7 per view still leave a second snap
        let carousel = Carousel::new(13, per_view_for(true, true, true, true), CarouselOptions::default());
        assert_eq!(carousel.snap_count(), 2);
    }
}
