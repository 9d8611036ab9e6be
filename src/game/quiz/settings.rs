pub const DEFAULT_EXPLANATION: &str = "No explanation available for this question.";

#[derive(Clone, Debug)]
pub struct Settings {
    /// Whether submitting without a selection counts as skipping the question.
    pub allow_skip: bool,
    pub fallback_explanation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            allow_skip: false,
            fallback_explanation: DEFAULT_EXPLANATION.to_owned(),
        }
    }
}
