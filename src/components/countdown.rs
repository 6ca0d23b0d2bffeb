//! Offer countdown shown inside the registration card.

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// A bounded hours/minutes/seconds triple. Ticks down through the borrow
/// chain and halts exactly at zero; never negative, never wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const LAUNCH_OFFER: Self = Self {
        hours: 23,
        minutes: 59,
        seconds: 59,
    };

    pub fn is_finished(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn tick(self) -> Self {
        if self.is_finished() {
            return self;
        }
        if self.seconds > 0 {
            Self {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Self {
                hours: self.hours,
                minutes: self.minutes - 1,
                seconds: 59,
            }
        } else {
            Self {
                hours: self.hours - 1,
                minutes: 59,
                seconds: 59,
            }
        }
    }
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let time_left = use_state(|| Countdown::LAUNCH_OFFER);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                // The interval owns the running value; the state handle only
                // publishes it. Dropped on unmount via the cleanup closure.
                let mut current = Countdown::LAUNCH_OFFER;
                let interval = Interval::new(1_000, move || {
                    current = current.tick();
                    time_left.set(current);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="countdown">
            <div class="countdown-digits">
                <div class="countdown-unit">
                    <div class="countdown-value">{ format!("{:02}", time_left.hours) }</div>
                    <div class="countdown-label">{"HRS"}</div>
                </div>
                <div class="countdown-unit">
                    <div class="countdown-value">{ format!("{:02}", time_left.minutes) }</div>
                    <div class="countdown-label">{"MIN"}</div>
                </div>
                <div class="countdown-unit">
                    <div class="countdown-value">{ format!("{:02}", time_left.seconds) }</div>
                    <div class="countdown-label">{"SEC"}</div>
                </div>
            </div>
            <p class="countdown-note">{"* Wait Till End to Get Your BONUS *"}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_borrow_from_minutes_and_hours() {
        let t = Countdown { hours: 5, minutes: 3, seconds: 0 };
        assert_eq!(t.tick(), Countdown { hours: 5, minutes: 2, seconds: 59 });

        let t = Countdown { hours: 5, minutes: 0, seconds: 0 };
        assert_eq!(t.tick(), Countdown { hours: 4, minutes: 59, seconds: 59 });
    }

    #[test]
    fn one_hour_of_ticks_decrements_hours_once() {
        // Scenario: start at 23:59:59, tick 3600 times.
        let mut t = Countdown::LAUNCH_OFFER;
        for _ in 0..3600 {
            t = t.tick();
        }
        assert_eq!(t, Countdown { hours: 22, minutes: 59, seconds: 59 });
    }

    #[test]
    fn halts_at_zero_without_wrapping() {
        let mut t = Countdown { hours: 0, minutes: 0, seconds: 2 };
        t = t.tick();
        assert_eq!(t, Countdown { hours: 0, minutes: 0, seconds: 1 });
        t = t.tick();
        assert!(t.is_finished());
        // Further ticks stay pinned at zero.
        for _ in 0..10 {
            t = t.tick();
            assert_eq!(t, Countdown { hours: 0, minutes: 0, seconds: 0 });
        }
    }

    #[test]
    fn full_run_never_goes_negative() {
        let mut t = Countdown { hours: 0, minutes: 2, seconds: 30 };
        for _ in 0..(3 * 60) {
            t = t.tick();
            assert!(t.minutes <= 59 && t.seconds <= 59);
        }
        assert!(t.is_finished());
    }
}
