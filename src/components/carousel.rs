use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

pub const SLIDE_INTERVAL_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    running: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselAction {
    Next,
    Start,
    Stop,
}

impl Carousel {
    pub fn new(len: usize, active: usize) -> Self {
        Self {
            len,
            current: if active < len { active } else { 0 },
            running: len > 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Zero keeps `use_interval` idle.
    pub fn interval_ms(&self) -> u32 {
        if self.is_running() && self.len > 0 {
            SLIDE_INTERVAL_MS
        } else {
            0
        }
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => {
                if self.len > 0 {
                    self.current = (self.current + 1) % self.len;
                }
            }
            CarouselAction::Start => self.running = self.len > 0,
            CarouselAction::Stop => self.running = false,
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct BackgroundCarouselProps {
    pub slides: Vec<String>,
    #[prop_or_default]
    pub active: usize,
}

#[function_component(BackgroundCarousel)]
pub fn background_carousel(props: &BackgroundCarouselProps) -> Html {
    let carousel = {
        let len = props.slides.len();
        let active = props.active;
        use_reducer(move || Carousel::new(len, active))
    };

    {
        let millis = carousel.interval_ms();
        let carousel = carousel.clone();
        use_interval(move || carousel.dispatch(CarouselAction::Next), millis);
    }

    if props.slides.is_empty() {
        return html! {};
    }

    // Paused while the pointer or a finger is on it.
    let pause = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Stop))
    };
    let resume = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Start))
    };
    let touch_pause = {
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| carousel.dispatch(CarouselAction::Stop))
    };
    let touch_resume = {
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| carousel.dispatch(CarouselAction::Start))
    };

    html! {
        <div class="bg"
            onmouseenter={pause}
            onmouseleave={resume}
            ontouchstart={touch_pause}
            ontouchend={touch_resume}
        >
            { for props.slides.iter().enumerate().map(|(i, src)| html! {
                <div
                    class={classes!("bg-slide", (i == carousel.current()).then_some("active"))}
                    style={format!("background-image: url('{}');", src)}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut carousel = Carousel::new(3, 0);
        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.current(), 2);
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn starts_on_configured_slide() {
        assert_eq!(Carousel::new(4, 2).current(), 2);
        assert_eq!(Carousel::new(4, 9).current(), 0);
    }

    #[test]
    fn pause_and_resume() {
        let mut carousel = Carousel::new(2, 0);
        assert_eq!(carousel.interval_ms(), SLIDE_INTERVAL_MS);
        carousel.apply(CarouselAction::Stop);
        assert!(!carousel.is_running());
        assert_eq!(carousel.interval_ms(), 0);
        carousel.apply(CarouselAction::Start);
        assert_eq!(carousel.interval_ms(), SLIDE_INTERVAL_MS);
    }

    #[test]
    fn no_slides_means_no_timer() {
        let mut carousel = Carousel::new(0, 0);
        carousel.apply(CarouselAction::Start);
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.interval_ms(), 0);
        assert_eq!(carousel.current(), 0);
    }
}
