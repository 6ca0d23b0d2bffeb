//! Non-blocking notice banner. Replaces the blocking alerts the page
//! would otherwise use for validation, load-failure, and payment outcomes.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 6_000;

/// Ties each auto-dismiss timer to the notice it was started for. Arming
/// for a new notice invalidates any timer still pending for an earlier one,
/// so a stale timeout never closes a notice it was not started for.
#[derive(Clone, Default)]
struct DismissGuard(Rc<Cell<u64>>);

impl DismissGuard {
    fn arm(&self) -> u64 {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let guard = use_mut_ref(DismissGuard::default).borrow().clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                // Payment confirmations stay until closed by hand; everything
                // else fades out on its own. Each notice re-arms the guard,
                // so a timeout spawned for a previous notice becomes a no-op
                // instead of closing whatever replaced it.
                let token = guard.arm();
                if let Some(notice) = notice {
                    if notice.kind != NoticeKind::Success {
                        spawn_local(async move {
                            TimeoutFuture::new(AUTO_DISMISS_MS).await;
                            if guard.is_current(token) {
                                on_close.emit(());
                            }
                        });
                    }
                }
                || ()
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={notice.class()} role="status">
            <span class="notice-message">{ notice.message.clone() }</span>
            <button class="notice-close" {onclick}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_cannot_dismiss_a_newer_notice() {
        let guard = DismissGuard::default();
        // An info notice arms its auto-dismiss timer.
        let stale = guard.arm();
        // A payment confirmation replaces it before the timer fires.
        let current = guard.arm();
        assert!(!guard.is_current(stale));
        assert!(guard.is_current(current));
    }

    #[test]
    fn unreplaced_notice_still_dismisses() {
        let guard = DismissGuard::default();
        let token = guard.arm();
        assert!(guard.is_current(token));
    }
}
