//! Lead capture and checkout invocation.
//!
//! The submission pipeline is a small state machine:
//! `Idle → Validating → LoadingWidget → Configuring → AwaitingProvider`,
//! settling through the outcome hooks once the provider reports back.
//! The provider itself sits behind the [`WidgetGateway`] trait so the
//! pipeline can be driven by a fake in tests.

use serde::Serialize;
use std::fmt;
use yew::Callback;

/// Course price as displayed on the page, in rupees.
pub const COURSE_PRICE_INR: u64 = 499;

/// The provider expects the amount in the smallest currency unit.
pub const AMOUNT_PAISE: u64 = COURSE_PRICE_INR * 100;

pub const CURRENCY: &str = "INR";
pub const MERCHANT_NAME: &str = "Aicademi";
pub const COURSE_DESCRIPTION: &str = "30 Days Internship - Machine Learning";
pub const PROGRAM_TAG: &str = "ML 30D";
pub const THEME_COLOR: &str = "#f5c542";

/// The four required lead fields. Mutated one field at a time on input
/// events; validated only at submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
}

impl LeadForm {
    /// Structural update: replaces exactly one field, leaving the rest
    /// unchanged. Unknown field names leave the form as-is.
    pub fn set_field(&self, field: &str, value: String) -> Self {
        let mut next = self.clone();
        match field {
            "name" => next.name = value,
            "email" => next.email = value,
            "phone" => next.phone = value,
            "state" => next.state = value,
            other => log::warn!("ignoring unknown form field {other:?}"),
        }
        next
    }

    /// Names of every empty required field. Whitespace is not trimmed.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.state.is_empty() {
            missing.push("state");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutPhase {
    Idle,
    Validating,
    LoadingWidget,
    Configuring,
    AwaitingProvider,
    Settled(Settlement),
}

impl CheckoutPhase {
    /// True while a submission holds control, before the provider settles
    /// or a rejection edge returns the flow to `Idle`.
    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            Self::Validating | Self::LoadingWidget | Self::Configuring | Self::AwaitingProvider
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutError {
    /// One or more required fields were empty at submission time.
    Validation(Vec<&'static str>),
    /// The provider script failed to load or never exposed its global.
    WidgetUnavailable,
    /// The provider reported a failed payment, with its description when
    /// one was supplied.
    ProviderDecline(Option<String>),
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(_) => write!(f, "Please fill all fields before payment."),
            Self::WidgetUnavailable => write!(f, "Failed to load Razorpay. Check your network."),
            Self::ProviderDecline(Some(description)) => write!(f, "{description}"),
            Self::ProviderDecline(None) => write!(f, "Payment failed. Please try again."),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Notes {
    pub state: String,
    pub program: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Theme {
    pub color: String,
}

/// One checkout attempt. Built fresh per submission and handed to the
/// provider; never retained. The success/failure/dismiss callbacks travel
/// separately (see [`OutcomeHooks`]) because they cannot be serialized.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CheckoutConfig {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub prefill: Prefill,
    pub notes: Notes,
    pub theme: Theme,
}

impl CheckoutConfig {
    pub fn for_submission(key: &str, form: &LeadForm) -> Self {
        Self {
            key: key.to_string(),
            amount: AMOUNT_PAISE,
            currency: CURRENCY.to_string(),
            name: MERCHANT_NAME.to_string(),
            description: COURSE_DESCRIPTION.to_string(),
            prefill: Prefill {
                name: form.name.clone(),
                email: form.email.clone(),
                contact: form.phone.clone(),
            },
            notes: Notes {
                state: form.state.clone(),
                program: PROGRAM_TAG.to_string(),
            },
            theme: Theme {
                color: THEME_COLOR.to_string(),
            },
        }
    }
}

/// Callbacks the provider fires exactly once per attempt. Success carries
/// the provider-assigned payment id; dismiss fires when the user closes
/// the modal without an explicit decline.
#[derive(Clone)]
pub struct OutcomeHooks {
    pub on_success: Callback<String>,
    pub on_failure: Callback<CheckoutError>,
    pub on_dismiss: Callback<()>,
}

/// Seam to the hosted widget: loading its script and opening its modal.
/// The live implementation injects the real provider script; tests drive
/// the pipeline with a fake.
pub trait WidgetGateway {
    async fn ensure_loaded(&self) -> Result<(), CheckoutError>;
    fn open(&self, config: CheckoutConfig, hooks: OutcomeHooks);
}

/// Runs one submission through the pipeline. Phases are strictly
/// sequential; rejection edges observe `Idle` before returning the error.
/// On success the provider owns the interaction from `AwaitingProvider`
/// onward and settles through `hooks`.
pub async fn run_checkout<G: WidgetGateway>(
    gateway: &G,
    form: &LeadForm,
    key: &str,
    hooks: OutcomeHooks,
    observe: impl Fn(CheckoutPhase),
) -> Result<(), CheckoutError> {
    observe(CheckoutPhase::Validating);
    let missing = form.missing_fields();
    if !missing.is_empty() {
        observe(CheckoutPhase::Idle);
        return Err(CheckoutError::Validation(missing));
    }

    observe(CheckoutPhase::LoadingWidget);
    if let Err(err) = gateway.ensure_loaded().await {
        observe(CheckoutPhase::Idle);
        return Err(err);
    }

    observe(CheckoutPhase::Configuring);
    let config = CheckoutConfig::for_submission(key, form);
    gateway.open(config, hooks);
    observe(CheckoutPhase::AwaitingProvider);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeGateway {
        load_ok: bool,
        loads: Cell<usize>,
        opened: RefCell<Option<CheckoutConfig>>,
        hooks: RefCell<Option<OutcomeHooks>>,
    }

    impl FakeGateway {
        fn new(load_ok: bool) -> Self {
            Self {
                load_ok,
                loads: Cell::new(0),
                opened: RefCell::new(None),
                hooks: RefCell::new(None),
            }
        }
    }

    impl WidgetGateway for FakeGateway {
        async fn ensure_loaded(&self) -> Result<(), CheckoutError> {
            self.loads.set(self.loads.get() + 1);
            if self.load_ok {
                Ok(())
            } else {
                Err(CheckoutError::WidgetUnavailable)
            }
        }

        fn open(&self, config: CheckoutConfig, hooks: OutcomeHooks) {
            *self.opened.borrow_mut() = Some(config);
            *self.hooks.borrow_mut() = Some(hooks);
        }
    }

    fn valid_form() -> LeadForm {
        LeadForm {
            name: "Asha".into(),
            email: "a@x.com".into(),
            phone: "9999999999".into(),
            state: "Maharashtra".into(),
        }
    }

    fn noop_hooks() -> OutcomeHooks {
        OutcomeHooks {
            on_success: Callback::noop(),
            on_failure: Callback::noop(),
            on_dismiss: Callback::noop(),
        }
    }

    fn recording_observer() -> (Rc<RefCell<Vec<CheckoutPhase>>>, impl Fn(CheckoutPhase)) {
        let phases = Rc::new(RefCell::new(Vec::new()));
        let sink = phases.clone();
        (phases, move |p| sink.borrow_mut().push(p))
    }

    #[test]
    fn set_field_replaces_exactly_one_field() {
        let form = valid_form();
        let updated = form.set_field("email", "b@y.org".into());
        assert_eq!(updated.email, "b@y.org");
        assert_eq!(updated.name, form.name);
        assert_eq!(updated.phone, form.phone);
        assert_eq!(updated.state, form.state);
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let form = valid_form();
        assert_eq!(form.set_field("bogus", "x".into()), form);
    }

    #[test]
    fn validation_gate_is_total() {
        // Emptying any single field must stop the flow before LoadingWidget.
        for field in ["name", "email", "phone", "state"] {
            let form = valid_form().set_field(field, String::new());
            let gateway = FakeGateway::new(true);
            let (phases, observe) = recording_observer();

            let result = block_on(run_checkout(&gateway, &form, "key_test", noop_hooks(), observe));

            assert!(matches!(
                result,
                Err(CheckoutError::Validation(ref missing)) if missing == &vec![field]
            ));
            assert_eq!(gateway.loads.get(), 0, "no load attempt for empty {field}");
            assert!(gateway.opened.borrow().is_none());
            assert_eq!(
                *phases.borrow(),
                vec![CheckoutPhase::Validating, CheckoutPhase::Idle]
            );
        }
    }

    #[test]
    fn load_failure_returns_to_idle_with_form_intact() {
        // Scenario A: valid fields, the widget fails to load.
        let form = valid_form();
        let before = form.clone();
        let gateway = FakeGateway::new(false);
        let (phases, observe) = recording_observer();

        let result = block_on(run_checkout(&gateway, &form, "key_test", noop_hooks(), observe));

        assert_eq!(result, Err(CheckoutError::WidgetUnavailable));
        assert_eq!(form, before);
        assert!(gateway.opened.borrow().is_none());
        assert_eq!(
            *phases.borrow(),
            vec![
                CheckoutPhase::Validating,
                CheckoutPhase::LoadingWidget,
                CheckoutPhase::Idle
            ]
        );
    }

    #[test]
    fn valid_submission_reaches_provider_with_expected_config() {
        let form = valid_form();
        let gateway = FakeGateway::new(true);
        let (phases, observe) = recording_observer();

        let result = block_on(run_checkout(&gateway, &form, "key_test", noop_hooks(), observe));
        assert_eq!(result, Ok(()));

        let opened = gateway.opened.borrow();
        let config = opened.as_ref().expect("provider was handed a config");
        assert_eq!(config.key, "key_test");
        assert_eq!(config.amount, 49_900);
        assert_eq!(config.currency, "INR");
        assert_eq!(config.description, "30 Days Internship - Machine Learning");
        assert_eq!(config.prefill.name, "Asha");
        assert_eq!(config.prefill.email, "a@x.com");
        assert_eq!(config.prefill.contact, "9999999999");
        assert_eq!(config.notes.state, "Maharashtra");
        assert_eq!(config.notes.program, "ML 30D");
        assert_eq!(config.theme.color, "#f5c542");

        assert_eq!(
            *phases.borrow(),
            vec![
                CheckoutPhase::Validating,
                CheckoutPhase::LoadingWidget,
                CheckoutPhase::Configuring,
                CheckoutPhase::AwaitingProvider
            ]
        );
    }

    #[test]
    fn provider_success_surfaces_payment_id_and_keeps_form() {
        // Scenario B: provider settles with pay_123; fields stay filled.
        let form = valid_form();
        let gateway = FakeGateway::new(true);
        let seen = Rc::new(RefCell::new(None::<String>));
        let hooks = OutcomeHooks {
            on_success: {
                let seen = seen.clone();
                Callback::from(move |id: String| {
                    *seen.borrow_mut() = Some(format!("Payment successful! Payment ID: {id}"));
                })
            },
            on_failure: Callback::noop(),
            on_dismiss: Callback::noop(),
        };

        block_on(run_checkout(&gateway, &form, "key_test", hooks, |_| ())).unwrap();

        // The provider fires the success hook exactly once.
        let hooks = gateway.hooks.borrow();
        hooks.as_ref().unwrap().on_success.emit("pay_123".into());

        let message = seen.borrow().clone().unwrap();
        assert!(message.contains("pay_123"));
        assert!(form.is_complete(), "no field is cleared on success");
    }

    #[test]
    fn repeated_submissions_each_ask_the_gateway_once() {
        let form = valid_form();
        let gateway = FakeGateway::new(true);
        for _ in 0..3 {
            block_on(run_checkout(&gateway, &form, "key_test", noop_hooks(), |_| ())).unwrap();
        }
        // One logical load per submission; never re-entrant within one.
        assert_eq!(gateway.loads.get(), 3);
    }

    #[test]
    fn decline_message_falls_back_when_description_is_absent() {
        assert_eq!(
            CheckoutError::ProviderDecline(Some("Card declined by issuer".into())).to_string(),
            "Card declined by issuer"
        );
        assert_eq!(
            CheckoutError::ProviderDecline(None).to_string(),
            "Payment failed. Please try again."
        );
    }

    #[test]
    fn in_flight_covers_exactly_the_active_phases() {
        assert!(!CheckoutPhase::Idle.in_flight());
        assert!(CheckoutPhase::Validating.in_flight());
        assert!(CheckoutPhase::LoadingWidget.in_flight());
        assert!(CheckoutPhase::Configuring.in_flight());
        assert!(CheckoutPhase::AwaitingProvider.in_flight());
        assert!(!CheckoutPhase::Settled(Settlement::Success).in_flight());
        assert!(!CheckoutPhase::Settled(Settlement::Failure).in_flight());
    }
}
