/// Publishable key for the hosted checkout, baked in at build time.
/// A missing key degrades to an empty string; the provider rejects the
/// open call downstream, and submission logs a warning.
pub fn razorpay_key_id() -> &'static str {
    option_env!("RAZORPAY_KEY_ID").unwrap_or("")
}

pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

/// Element id of the injected checkout script tag. Used to detect an
/// injection that is still in flight so a second tag is never added.
pub const CHECKOUT_SCRIPT_ID: &str = "razorpay-checkout-js";
