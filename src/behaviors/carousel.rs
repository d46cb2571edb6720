//! Testimonial slider.
//!
//! Slides sit side by side at `translateX(100% * (i - current))`; the
//! current slide is the one at offset zero. Navigation wraps in both
//! directions, and there is one indicator dot per slide.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::config::PageConfig;
use crate::dom::{self, Surface};
use crate::error::{BehaviorError, Result};

pub const SLIDE_KEY: &str = "data-slide";

pub struct Carousel<E> {
    slides: Vec<E>,
    dots: Vec<E>,
    dot_active: String,
    current: usize,
}

impl<E: Surface> Carousel<E> {
    /// Builds one dot per slide with `make_dot(index)` and shows slide 0.
    pub fn new<F>(slides: Vec<E>, dot_active: &str, mut make_dot: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<E>,
    {
        if slides.is_empty() {
            return Err(BehaviorError::NoSlides);
        }
        let dots = (0..slides.len())
            .map(|i| {
                let dot = make_dot(i)?;
                dot.set_attribute(SLIDE_KEY, &i.to_string());
                Ok(dot)
            })
            .collect::<Result<Vec<_>>>()?;

        let carousel = Self {
            slides,
            dots,
            dot_active: dot_active.to_string(),
            current: 0,
        };
        carousel.go_to(0);
        carousel.activate_dot(0);
        Ok(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Offset of slide `index` in percent when `target` is current.
    pub fn offset(index: usize, target: usize) -> i64 {
        100 * (index as i64 - target as i64)
    }

    fn go_to(&self, target: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            let transform = format!("translateX({}%)", Self::offset(i, target));
            slide.set_style("transform", &transform);
        }
    }

    fn activate_dot(&self, target: usize) {
        for dot in &self.dots {
            dot.remove_class(&self.dot_active);
        }
        if let Some(dot) = self.dots.get(target) {
            dot.add_class(&self.dot_active);
        }
    }

    pub fn next(&mut self) {
        let target = if self.current == self.len() - 1 {
            0
        } else {
            self.current + 1
        };
        self.jump(target);
    }

    pub fn prev(&mut self) {
        let target = if self.current == 0 {
            self.len() - 1
        } else {
            self.current - 1
        };
        self.jump(target);
    }

    /// Shows slide `target` directly; out-of-range targets are ignored.
    pub fn jump(&mut self, target: usize) -> bool {
        if target >= self.len() {
            return false;
        }
        self.current = target;
        self.go_to(target);
        self.activate_dot(target);
        true
    }

    /// Slide index carried by a dot, if `dot` is one of ours.
    pub fn dot_target(&self, dot: &E) -> Option<usize> {
        dot.attribute(SLIDE_KEY)?.parse().ok()
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }
}

fn make_dot(document: &Document, container: &Element, class: &str) -> Result<Element> {
    let dot = document.create_element("button")?;
    dot.set_class_name(class);
    container.append_child(&dot)?;
    Ok(dot)
}

pub fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let selectors = &config.selectors;
    let slides = dom::query_all(document, &selectors.slides)?;
    let right = dom::query(document, &selectors.slider_right)?;
    let left = dom::query(document, &selectors.slider_left)?;
    let dots_container = dom::query(document, &selectors.dots)?;

    let dot_class = config.classes.dot.clone();
    let carousel = Carousel::new(slides, &config.classes.dot_active, |_| {
        make_dot(document, &dots_container, &dot_class)
    })?;
    debug!("Carousel ready with {} slide(s)", carousel.len());
    let carousel = Rc::new(RefCell::new(carousel));

    {
        let carousel = carousel.clone();
        dom::listen(&right, "click", move |_| carousel.borrow_mut().next())?;
    }
    {
        let carousel = carousel.clone();
        dom::listen(&left, "click", move |_| carousel.borrow_mut().prev())?;
    }
    {
        let carousel = carousel.clone();
        dom::listen(document, "keydown", move |e| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>().map(|k| k.key()) {
                let mut carousel = carousel.borrow_mut();
                if carousel.handle_key(&key) {
                    debug!("Slide {} via {}", carousel.current(), key);
                }
            }
        })?;
    }

    dom::listen(&dots_container, "click", move |e| {
        let Some(dot) = dom::event_element(&e).filter(|el| el.has_class(&dot_class)) else {
            return;
        };
        let mut carousel = carousel.borrow_mut();
        if let Some(target) = carousel.dot_target(&dot) {
            if carousel.jump(target) {
                debug!("Slide {} via dot", target);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    fn carousel(n: usize) -> (Carousel<FakeElement>, Vec<FakeElement>, Vec<FakeElement>) {
        let slides: Vec<FakeElement> = (0..n).map(|_| FakeElement::with_classes(&["slide"])).collect();
        let dots = RefCell::new(Vec::new());
        let carousel = Carousel::new(slides.clone(), "dots__dot--active", |_| {
            let dot = FakeElement::with_classes(&["dots__dot"]);
            dots.borrow_mut().push(dot.clone());
            Ok(dot)
        })
        .unwrap();
        (carousel, slides, dots.into_inner())
    }

    fn active_dots(dots: &[FakeElement]) -> Vec<usize> {
        dots.iter()
            .enumerate()
            .filter(|(_, d)| d.has_class("dots__dot--active"))
            .map(|(i, _)| i)
            .collect()
    }

    fn at_zero(slides: &[FakeElement]) -> Vec<usize> {
        slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.style("transform").as_deref() == Some("translateX(0%)"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn init_shows_first_slide_and_tags_dots() {
        let (carousel, slides, dots) = carousel(3);

        assert_eq!(carousel.current(), 0);
        assert_eq!(dots.len(), 3);
        assert_eq!(active_dots(&dots), vec![0]);
        assert_eq!(slides[2].style("transform").as_deref(), Some("translateX(200%)"));
        for (i, dot) in dots.iter().enumerate() {
            assert_eq!(dot.attribute(SLIDE_KEY), Some(i.to_string()));
        }
    }

    #[test]
    fn four_slides_right_three_times_then_wraps() {
        let (mut carousel, slides, dots) = carousel(4);

        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 3);
        assert_eq!(active_dots(&dots), vec![3]);
        assert_eq!(at_zero(&slides), vec![3]);
        assert_eq!(slides[0].style("transform").as_deref(), Some("translateX(-300%)"));

        carousel.next();
        assert_eq!(carousel.current(), 0);
        assert_eq!(at_zero(&slides), vec![0]);
    }

    #[test]
    fn next_n_times_returns_to_start() {
        let (mut carousel, _, _) = carousel(5);
        for _ in 0..5 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn prev_from_first_lands_on_last() {
        let (mut carousel, slides, dots) = carousel(4);

        carousel.prev();
        assert_eq!(carousel.current(), 3);
        assert_eq!(active_dots(&dots), vec![3]);
        assert_eq!(at_zero(&slides), vec![3]);
    }

    #[test]
    fn exactly_one_dot_active_after_any_navigation() {
        let (mut carousel, slides, dots) = carousel(3);
        let keys = ["ArrowRight", "ArrowLeft", "ArrowLeft", "Tab", "ArrowRight", "ArrowRight"];

        for key in keys {
            carousel.handle_key(key);
            assert_eq!(active_dots(&dots), vec![carousel.current()]);
            assert_eq!(at_zero(&slides), vec![carousel.current()]);
        }
    }

    #[test]
    fn dot_jump_keeps_arrows_in_sync() {
        let (mut carousel, _, dots) = carousel(4);

        let target = carousel.dot_target(&dots[2]).unwrap();
        assert!(carousel.jump(target));
        carousel.next();

        assert_eq!(carousel.current(), 3);
        assert_eq!(active_dots(&dots), vec![3]);
    }

    #[test]
    fn bad_dot_targets_are_ignored() {
        let (mut carousel, _, dots) = carousel(2);

        assert!(!carousel.jump(2));
        assert_eq!(carousel.current(), 0);

        let stray = FakeElement::with_classes(&["dots__dot"]).with_attribute(SLIDE_KEY, "x");
        assert_eq!(carousel.dot_target(&stray), None);
        assert_eq!(active_dots(&dots), vec![0]);
    }

    #[test]
    fn empty_slider_is_rejected() {
        let result = Carousel::<FakeElement>::new(Vec::new(), "active", |_| Ok(FakeElement::default()));
        assert!(matches!(result, Err(BehaviorError::NoSlides)));
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let (mut carousel, _, dots) = carousel(1);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert_eq!(active_dots(&dots), vec![0]);
    }
}
