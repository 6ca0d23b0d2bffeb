//! The single marketing page: promotional sections plus the lead-capture
//! form that hands off to the hosted checkout.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::checkout::flow::{
    self, CheckoutError, CheckoutPhase, LeadForm, OutcomeHooks, Settlement, COURSE_PRICE_INR,
};
use crate::checkout::razorpay::RazorpayGateway;
use crate::components::countdown::CountdownTimer;
use crate::components::notification::{Notice, NoticeBanner};
use crate::components::ticker::NewsTicker;
use crate::config;
use crate::content;

/// Every CTA jumps to the registration card and focuses the name input.
fn scroll_to_register() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id("register") {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    if let Ok(Some(input)) = document.query_selector("input[name='name']") {
        if let Ok(input) = input.dyn_into::<HtmlElement>() {
            let _ = input.focus();
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let form = use_state(LeadForm::default);
    let notice = use_state(|| None::<Notice>);
    let phase = use_state(|| CheckoutPhase::Idle);
    let active_week = use_state(|| 0usize);

    let on_field = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.set_field(&input.name(), input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*form).clone();
            let notice = notice.clone();
            let phase = phase.clone();
            spawn_local(async move {
                let key = config::razorpay_key_id();
                if key.is_empty() {
                    warn!("RAZORPAY_KEY_ID is not set; the provider will reject the checkout");
                }

                let hooks = OutcomeHooks {
                    on_success: {
                        let notice = notice.clone();
                        let phase = phase.clone();
                        Callback::from(move |payment_id: String| {
                            info!("payment settled: {payment_id}");
                            phase.set(CheckoutPhase::Settled(Settlement::Success));
                            notice.set(Some(Notice::success(format!(
                                "Payment successful! Payment ID: {payment_id}"
                            ))));
                        })
                    },
                    on_failure: {
                        let notice = notice.clone();
                        let phase = phase.clone();
                        Callback::from(move |err: CheckoutError| {
                            phase.set(CheckoutPhase::Settled(Settlement::Failure));
                            notice.set(Some(Notice::error(err.to_string())));
                        })
                    },
                    on_dismiss: {
                        let notice = notice.clone();
                        let phase = phase.clone();
                        Callback::from(move |_| {
                            phase.set(CheckoutPhase::Idle);
                            notice.set(Some(Notice::info(
                                "Checkout closed before payment completed.",
                            )));
                        })
                    },
                };

                let observe = {
                    let phase = phase.clone();
                    move |p: CheckoutPhase| {
                        info!("checkout phase: {p:?}");
                        phase.set(p);
                    }
                };

                if let Err(err) =
                    flow::run_checkout(&RazorpayGateway, &snapshot, key, hooks, observe).await
                {
                    warn!("checkout rejected: {err}");
                    notice.set(Some(Notice::error(err.to_string())));
                }
            });
        })
    };

    let on_cta = Callback::from(|_: MouseEvent| scroll_to_register());

    let close_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div class="landing">
            <NewsTicker />
            <NoticeBanner notice={(*notice).clone()} on_close={close_notice} />

            <div class="page-body">
                <p class="tagline">{"“Internship today, Data Scientist tomorrow.”"}</p>

                <div class="main-grid">
                    <div class="main-left">
                        <h1 class="main-title">
                            <span>{"30 Days Learning & 30 Days Internship"}</span>
                            <br />
                            <span class="title-accent">{"Machine Learning"}</span>
                        </h1>
                        <div class="certificate-line">{"With Internship E-Certificate"}</div>

                        <div class="instructor-card">
                            <img
                                class="instructor-photo"
                                src="https://raw.githubusercontent.com/swapnil-mayavanshi/Website/main/serviehead.png"
                                alt="Rajendra Mehta - Product Manager & Data Scientist"
                            />
                            <h3>{"Rajendra Mehta"}</h3>
                            <p class="instructor-role">{"Head of Analytics (Gen AI, Agentic AI)"}</p>
                            <div class="stats-grid">
                                <div class="stat"><div class="stat-value">{content::INSTRUCTOR_STATS.followers}</div><div class="stat-label">{"Followers"}</div></div>
                                <div class="stat"><div class="stat-value">{content::INSTRUCTOR_STATS.likes}</div><div class="stat-label">{"Likes"}</div></div>
                                <div class="stat"><div class="stat-value">{content::INSTRUCTOR_STATS.reviews}</div><div class="stat-label">{"Reviews"}</div></div>
                                <div class="stat"><div class="stat-value">{content::INSTRUCTOR_STATS.students}</div><div class="stat-label">{"Students"}</div></div>
                            </div>
                        </div>

                        <div class="feature-list">
                            { for content::FEATURE_BULLETS.iter().map(|(icon, title)| html! {
                                <div class="feature-row">
                                    <span class="feature-icon">{icon}</span>
                                    <span class="feature-title">{title}</span>
                                </div>
                            }) }
                        </div>

                        <button class="cta-button" onclick={on_cta.clone()}>
                            {"≫ YES, I Want to Master Machine Learning"}
                            <div class="cta-sub">
                                { format!("JOIN THE INTERNSHIP FOR JUST ₹{COURSE_PRICE_INR} ") }
                                <span class="strike">{"₹1499"}</span>
                            </div>
                        </button>
                    </div>

                    <div class="register-card" id="register">
                        <div class="register-header">
                            <span class="register-days">{"30 Days"}</span>
                            <span class="register-badge">{"INTERNSHIP"}</span>
                            <p class="register-sub">{"On Data Analytics"}</p>
                        </div>

                        <CountdownTimer />

                        <form {onsubmit} class="register-form">
                            <input type="text" name="name" placeholder="Full Name*"
                                value={form.name.clone()} oninput={on_field.clone()} required=true />
                            <input type="email" name="email" placeholder="Email*"
                                value={form.email.clone()} oninput={on_field.clone()} required=true />
                            <input type="tel" name="phone" placeholder="Phone*"
                                value={form.phone.clone()} oninput={on_field.clone()} required=true />
                            <input type="text" name="state" placeholder="State*"
                                value={form.state.clone()} oninput={on_field.clone()} required=true />
                            <button type="submit" class="register-button">{"Yes! Register Now"}</button>
                            {
                                if phase.in_flight() {
                                    html! { <p class="register-status">{"Opening secure checkout…"}</p> }
                                } else {
                                    html! {}
                                }
                            }
                            <p class="register-secure">{"🔒 Your information is secure with us"}</p>
                        </form>
                    </div>
                </div>

                <section class="section">
                    <h2>{"Who is this "}<span class="accent">{"Program for ?"}</span></h2>
                    <p class="section-sub">{"who wants to opens doors to new possibilities in different fields"}</p>
                    <div class="audience-grid">
                        { for content::TARGET_AUDIENCE.iter().map(|audience| html! {
                            <div class="audience-pill">
                                <span class="pill-dot"></span>
                                <span>{audience}</span>
                            </div>
                        }) }
                    </div>
                    <button class="cta-button" onclick={on_cta.clone()}>
                        {"≫ YES, I Want to Master Machine Learning"}
                        <div class="cta-sub">
                            { format!("JOIN THE INTERNSHIP FOR JUST ₹{COURSE_PRICE_INR} ") }
                            <span class="strike">{"₹1499"}</span>
                        </div>
                    </button>
                    <p class="take-action">{"Take Action Now!!!"}</p>
                </section>

                <section class="section">
                    <h2>{"What You will "}<span class="accent">{"learn in this program ?"}</span></h2>
                    <p class="section-sub gold">{"30 Day Challenge - to become Zero to 🚀🚀🚀🚀 as Machine Learning"}</p>
                    <div class="curriculum-grid">
                        { for content::CURRICULUM.iter().map(|item| {
                            let row_class = classes!(
                                "curriculum-row",
                                format!("category-{}", item.category),
                                item.milestone.then_some("milestone"),
                            );
                            html! {
                                <div class={row_class}>
                                    <div class="day-badge">{item.day}</div>
                                    <div class="day-body">
                                        <span class="category-tag">{item.category}</span>
                                        { if item.milestone { html! { <span class="milestone-tag">{"MILESTONE"}</span> } } else { html! {} } }
                                        <p><b>{format!("Day-{}:", item.day)}</b>{" "}{item.title}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                    <button class="cta-button" onclick={on_cta.clone()}>
                        {"≫ REGISTER FOR 30 DAYS INTERNSHIP"}
                    </button>
                </section>

                <section class="section" id="extra-projects">
                    <h2><span class="accent">{"4 Weeks of Real-World ML Projects"}</span></h2>
                    <p class="section-sub">{"Practice what you learned with job-ready, business-focused projects."}</p>

                    <div class="week-tabs">
                        { for content::EXTRA_WEEKS.iter().enumerate().map(|(i, week)| {
                            let tab_class = if *active_week == i { "week-tab active" } else { "week-tab" };
                            let label = week.title.split(" — ").next().unwrap_or(week.title);
                            let onclick = {
                                let active_week = active_week.clone();
                                Callback::from(move |_: MouseEvent| active_week.set(i))
                            };
                            html! { <button class={tab_class} {onclick}>{label}</button> }
                        }) }
                    </div>

                    {
                        {
                            let week = &content::EXTRA_WEEKS[(*active_week).min(content::EXTRA_WEEKS.len() - 1)];
                            html! {
                                <div class="week-card">
                                    <h3>{week.title}</h3>
                                    <p class="week-problem">{week.problem}</p>
                                    <p><b>{"Aligned With: "}</b>{week.aligns_with}</p>
                                    <p><b>{"Datasets: "}</b>{week.datasets.join(", ")}</p>
                                    <p><b>{"Skills: "}</b>{week.skills.join(", ")}</p>
                                    <p><b>{"Deliverables: "}</b>{week.deliverables.join(", ")}</p>
                                    <ul class="week-steps">
                                        <li>{"Clean & explore dataset; define success metrics."}</li>
                                        <li>{"Build baseline model; iterate & compare."}</li>
                                        <li>{"Explain results; outline next business actions."}</li>
                                    </ul>
                                    <button class="cta-button small" onclick={on_cta.clone()}>
                                        { format!("Build this project (Join @ ₹{COURSE_PRICE_INR})") }
                                    </button>
                                </div>
                            }
                        }
                    }
                </section>

                <section class="section" id="about-me">
                    <h2>{"Meet Your "}<span class="accent">{"Instructor"}</span></h2>
                    <p class="section-sub">{"Industry expert with years of experience helping students transform their careers"}</p>
                    <div class="about-grid">
                        <div class="about-left">
                            <img
                                class="about-photo"
                                src="https://raw.githubusercontent.com/swapnil-mayavanshi/Website/main/aboutImage.png"
                                alt="Professional Instructor Photo"
                            />
                            <div class="stats-grid">
                                <div class="stat"><div class="stat-value">{"20+"}</div><div class="stat-label">{"Years Experience"}</div></div>
                                <div class="stat"><div class="stat-value">{"15K+"}</div><div class="stat-label">{"Students Trained"}</div></div>
                                <div class="stat"><div class="stat-value">{"300+"}</div><div class="stat-label">{"Projects"}</div></div>
                                <div class="stat"><div class="stat-value">{"98%"}</div><div class="stat-label">{"Success Rate"}</div></div>
                            </div>
                        </div>
                        <div class="about-right">
                            <h3>{"Rajendra Mehta"}</h3>
                            <p class="instructor-role">{"Product Manager & Data Science Expert"}</p>
                            <div class="about-block">
                                <h4>{"Professional Background"}</h4>
                                <p>{"With over 20 years of experience in Big Data Management and Machine Learning, I specialize in helping businesses and students master data-driven technologies. My expertise spans across Python programming, advanced analytics, and AI implementation."}</p>
                            </div>
                            <div class="about-block">
                                <h4>{"Global Experience"}</h4>
                                <p>{"International experience across Netherlands, Denmark, and India, working with Fortune 500 companies on cutting-edge data science projects and machine learning implementations."}</p>
                            </div>
                            <div class="about-block">
                                <h4>{"Teaching Philosophy"}</h4>
                                <p>{"I believe in practical, project-based learning that prepares students for real-world challenges. My approach focuses on building strong fundamentals while working on industry-relevant projects."}</p>
                            </div>
                            <h4>{"Core Expertise"}</h4>
                            <div class="expertise-list">
                                { for content::EXPERTISE.iter().map(|name| html! {
                                    <span class="expertise-chip">{name}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                    <div class="about-cta">
                        <h3>{"Ready to Transform Your Career?"}</h3>
                        <p>{"Join thousands of successful students who have launched their data science careers with personalized mentorship and industry-proven curriculum."}</p>
                        <button class="cta-button" onclick={on_cta.clone()}>
                            { format!("Start Learning With Me - ₹{COURSE_PRICE_INR} Only") }
                        </button>
                    </div>
                </section>

                <section class="section">
                    <h2><span class="accent">{"EXCLUSIVE BONUS"}</span></h2>
                    <p class="section-sub">{"Get these amazing bonuses absolutely FREE with your internship"}</p>
                    <div class="bonus-grid">
                        { for content::BONUSES.iter().map(|bonus| html! {
                            <div class="bonus-card">
                                <span class="bonus-badge">{format!("BONUS #{}", bonus.id)}</span>
                                <h3>{bonus.title}</h3>
                                <p class="bonus-subtitle">{bonus.subtitle}</p>
                                <p class="bonus-description">{bonus.description}</p>
                                <ul class="bonus-features">
                                    { for bonus.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                                </ul>
                                <div class="bonus-price">
                                    <div class="bonus-free">{"FREE"}</div>
                                    <div class="bonus-worth">{"Worth ₹2999 each"}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section">
                    <h2>{"What Our "}<span class="gold">{"Students Say"}</span></h2>
                    <p class="section-sub">{"Real success stories from our amazing students"}</p>
                    <div class="testimonial-grid">
                        { for content::TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial-card">
                                <div class="testimonial-head">
                                    <img class="testimonial-photo" src={t.image} alt={t.name} />
                                    <div>
                                        <h4>{t.name}</h4>
                                        <p class="testimonial-role">{t.role}</p>
                                        <div class="testimonial-stars">
                                            { for (0..t.rating).map(|_| html! { <span>{"⭐"}</span> }) }
                                        </div>
                                    </div>
                                </div>
                                <p class="testimonial-review">{format!("\"{}\"", t.review)}</p>
                            </div>
                        }) }
                    </div>
                    <button class="cta-button" onclick={on_cta}>
                        { format!("Join 10,000+ Successful Students - Enroll Now for ₹{COURSE_PRICE_INR}!") }
                    </button>
                </section>
            </div>

            <style>
                {LANDING_CSS}
            </style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing {
        min-height: 100vh;
        background: linear-gradient(135deg, #000 0%, #17171c 50%, #000 100%);
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    .news-ticker {
        background: linear-gradient(90deg, #ff4d8d, #c13584);
        padding: 0.5rem 1rem;
        text-align: center;
        overflow: hidden;
        white-space: nowrap;
        font-size: 0.9rem;
        font-weight: 500;
    }
    .notice {
        position: sticky;
        top: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        padding: 0.75rem 1.25rem;
        font-weight: 500;
    }
    .notice-info { background: #1e3a5f; color: #cfe8ff; }
    .notice-success { background: #14432a; color: #b8f5cd; }
    .notice-error { background: #5a1a1a; color: #ffc9c9; }
    .notice-close {
        background: none;
        border: none;
        color: inherit;
        font-size: 1rem;
        cursor: pointer;
    }
    .page-body {
        max-width: 1200px;
        margin: 0 auto;
        padding: 2rem 1rem;
    }
    .tagline {
        text-align: center;
        font-size: 1.2rem;
        background: linear-gradient(90deg, #f5c542, #fff, #c13584);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .main-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        align-items: start;
    }
    @media (min-width: 1024px) {
        .main-grid { grid-template-columns: 1fr 1fr; }
        .register-card { position: sticky; top: 2rem; }
    }
    .main-title { font-size: 2.5rem; line-height: 1.2; }
    .title-accent {
        background: linear-gradient(90deg, #ff4d8d, #c13584, #833ab4);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .certificate-line { color: #f5c542; font-size: 1.2rem; font-weight: 600; margin: 0.5rem 0 1.5rem; }
    .instructor-card { margin-bottom: 1.5rem; }
    .instructor-photo { width: 16rem; border-radius: 0.5rem; display: block; margin-bottom: 1rem; }
    .instructor-role { color: #ccc; }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 0.75rem;
        max-width: 20rem;
        margin-top: 1rem;
    }
    .stat {
        text-align: center;
        padding: 0.75rem;
        border: 1px solid rgba(255, 77, 141, 0.25);
        border-radius: 0.5rem;
        background: rgba(255, 77, 141, 0.08);
    }
    .stat-value { font-size: 1.2rem; font-weight: 700; color: #ff4d8d; }
    .stat-label { font-size: 0.75rem; color: #aaa; }
    .feature-list { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1.5rem; }
    .feature-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem;
        border: 1px solid rgba(255, 77, 141, 0.3);
        border-radius: 0.5rem;
    }
    .feature-icon { font-size: 1.25rem; }
    .cta-button {
        display: inline-block;
        padding: 1.25rem 2.5rem;
        font-size: 1.1rem;
        font-weight: 700;
        color: #fff;
        background: linear-gradient(90deg, #ff4d8d, #c13584, #833ab4);
        border: none;
        border-radius: 9999px;
        cursor: pointer;
        margin-top: 1rem;
    }
    .cta-button.small { padding: 0.75rem 1.5rem; font-size: 0.95rem; }
    .cta-sub { font-size: 0.8rem; margin-top: 0.25rem; font-weight: 500; }
    .strike { text-decoration: line-through; opacity: 0.7; }
    .take-action { margin-top: 1rem; font-weight: 600; }
    .register-card {
        padding: 1.5rem;
        background: linear-gradient(135deg, #17171c, #000);
        border: 2px solid rgba(245, 197, 66, 0.5);
        border-radius: 0.75rem;
    }
    .register-header { text-align: center; margin-bottom: 1rem; }
    .register-days { font-size: 1.5rem; font-weight: 700; margin-right: 0.5rem; }
    .register-badge { color: #f5c542; font-weight: 700; font-size: 1.25rem; }
    .register-sub { color: #f5c542; font-weight: 600; }
    .countdown { text-align: center; margin: 1rem 0; }
    .countdown-digits { display: flex; justify-content: center; gap: 1.5rem; }
    .countdown-value { font-size: 2rem; font-weight: 700; color: #ef4444; }
    .countdown-label { font-size: 0.7rem; color: #f5c542; }
    .countdown-note { font-size: 0.8rem; color: #ef4444; margin-top: 0.5rem; }
    .register-form { display: flex; flex-direction: column; gap: 1rem; }
    .register-form input {
        height: 3rem;
        padding: 0 1rem;
        background: rgba(40, 40, 46, 0.8);
        border: 2px solid rgba(245, 197, 66, 0.5);
        border-radius: 0.375rem;
        color: #fff;
        font-weight: 500;
    }
    .register-form input:focus { border-color: #f5c542; outline: none; }
    .register-button {
        height: 3rem;
        font-size: 1.1rem;
        font-weight: 600;
        color: #000;
        background: linear-gradient(90deg, #f5c542, #f5c542, #ff4d8d);
        border: none;
        border-radius: 0.375rem;
        cursor: pointer;
    }
    .register-status { text-align: center; color: #f5c542; font-size: 0.9rem; }
    .register-secure { text-align: center; font-size: 0.85rem; color: #f5c542; }
    .section { margin-top: 5rem; text-align: center; }
    .section h2 { font-size: 2.25rem; margin-bottom: 0.75rem; }
    .accent {
        background: linear-gradient(90deg, #ff4d8d, #c13584, #833ab4);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .gold { color: #f5c542; }
    .section-sub { color: #ccc; margin-bottom: 2rem; }
    .audience-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 1rem;
        max-width: 72rem;
        margin: 0 auto 2rem;
    }
    .audience-pill {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem;
        background: rgba(255, 255, 255, 0.08);
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 9999px;
        text-align: left;
    }
    .pill-dot { width: 1rem; height: 1rem; background: #ff4d8d; border-radius: 9999px; flex-shrink: 0; }
    .curriculum-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(24rem, 1fr));
        gap: 1rem;
        max-width: 72rem;
        margin: 0 auto;
        text-align: left;
    }
    .curriculum-row {
        display: flex;
        gap: 1rem;
        padding: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.04);
    }
    .curriculum-row.milestone {
        background: rgba(255, 77, 141, 0.15);
        border-color: rgba(255, 77, 141, 0.5);
    }
    .day-badge {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: #ff4d8d;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        font-size: 0.85rem;
        flex-shrink: 0;
    }
    .milestone-tag {
        display: inline-block;
        padding: 0.15rem 0.6rem;
        margin-bottom: 0.35rem;
        background: linear-gradient(90deg, #ff4d8d, #c13584);
        border-radius: 9999px;
        font-size: 0.7rem;
        font-weight: 700;
    }
    .category-tag {
        display: inline-block;
        margin-right: 0.4rem;
        margin-bottom: 0.35rem;
        font-size: 0.65rem;
        font-weight: 700;
        letter-spacing: 0.08em;
        text-transform: uppercase;
        color: #8ab4ff;
    }
    .curriculum-row.category-project .category-tag,
    .curriculum-row.category-capstone .category-tag {
        color: #f5c542;
    }
    .week-tabs { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; margin-bottom: 2rem; }
    .week-tab {
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: none;
        color: #fff;
        cursor: pointer;
    }
    .week-tab.active { border-color: #f5c542; background: #f5c542; color: #000; font-weight: 600; }
    .week-card {
        max-width: 60rem;
        margin: 0 auto;
        padding: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 0.75rem;
        background: rgba(40, 40, 46, 0.8);
        text-align: left;
    }
    .week-problem { color: #f5c542; font-weight: 500; margin: 0.5rem 0 1rem; }
    .week-steps { margin: 1rem 0 0 1.25rem; color: rgba(255, 255, 255, 0.9); }
    .about-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 3rem;
        text-align: left;
        max-width: 72rem;
        margin: 0 auto;
    }
    .about-photo { width: 100%; max-width: 20rem; border-radius: 1rem; margin-bottom: 1rem; }
    .about-block {
        padding: 1.25rem;
        margin: 1rem 0;
        background: rgba(255, 255, 255, 0.08);
        border-left: 4px solid #ff4d8d;
        border-radius: 0.75rem;
    }
    .about-block h4 { color: #ff4d8d; margin-bottom: 0.5rem; }
    .expertise-list { display: flex; flex-wrap: wrap; gap: 0.6rem; margin-top: 0.75rem; }
    .expertise-chip {
        padding: 0.4rem 1rem;
        background: rgba(255, 255, 255, 0.08);
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 0.5rem;
    }
    .about-cta {
        margin-top: 3rem;
        padding: 2rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 1rem;
        background: rgba(255, 77, 141, 0.1);
    }
    .bonus-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .bonus-card {
        padding: 1.5rem;
        background: linear-gradient(135deg, rgba(40, 40, 46, 0.9), rgba(23, 23, 28, 0.9));
        border: 1px solid rgba(245, 197, 66, 0.5);
        border-radius: 0.75rem;
    }
    .bonus-badge {
        display: inline-block;
        padding: 0.4rem 1rem;
        background: #f5c542;
        color: #000;
        border-radius: 0.375rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .bonus-subtitle { color: #f5c542; font-weight: 600; }
    .bonus-description { font-size: 0.9rem; margin: 0.75rem 0; }
    .bonus-features { list-style: none; padding: 0; font-size: 0.9rem; }
    .bonus-features li { margin: 0.3rem 0; }
    .bonus-features li::before { content: "●"; color: #f5c542; margin-right: 0.5rem; }
    .bonus-free { font-size: 1.5rem; font-weight: 700; color: #f5c542; margin-top: 1rem; }
    .bonus-worth { font-size: 0.85rem; }
    .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
        text-align: left;
    }
    .testimonial-card {
        padding: 1.5rem;
        background: rgba(40, 40, 46, 0.8);
        border: 1px solid rgba(245, 197, 66, 0.5);
        border-radius: 0.75rem;
    }
    .testimonial-head { display: flex; gap: 1rem; margin-bottom: 1rem; }
    .testimonial-photo {
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        object-fit: cover;
        border: 2px solid #f5c542;
    }
    .testimonial-role { color: #f5c542; font-size: 0.85rem; }
    .testimonial-review { font-size: 0.95rem; line-height: 1.5; }
"#;
