//! Rotating headline strip across the top of the page.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content;

const ROTATE_MS: u32 = 4_000;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[function_component(NewsTicker)]
pub fn news_ticker() -> Html {
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        use_effect_with_deps(
            move |_| {
                let mut cursor = 0usize;
                let interval = Interval::new(ROTATE_MS, move || {
                    cursor = next_index(cursor, content::NEWS_ITEMS.len());
                    index.set(cursor);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="news-ticker">
            <span class="news-item">{ content::NEWS_ITEMS[*index] }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_exactly_one_and_wraps() {
        let len = content::NEWS_ITEMS.len();
        let mut i = 0;
        for step in 1..=(len * 3) {
            i = next_index(i, len);
            assert_eq!(i, step % len);
        }
    }

    #[test]
    fn index_stays_in_range() {
        let len = content::NEWS_ITEMS.len();
        let mut i = 0;
        for _ in 0..100 {
            i = next_index(i, len);
            assert!(i < len);
        }
    }

    #[test]
    fn empty_list_pins_index_to_zero() {
        assert_eq!(next_index(0, 0), 0);
    }
}
