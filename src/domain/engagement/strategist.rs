//! Reply strategy - keeps the scammer talking without ever complying.
//!
//! The strategist plays a confused, cautious victim: it asks clarifying
//! questions matched to the tactic in the latest message and avoids
//! repeating itself within a short window. Purely reactive and stateless;
//! all memory is supplied by the caller via `recent_own_replies`.

/// How many of the honeypot's own recent replies are off-limits for reuse.
const REPETITION_WINDOW: usize = 3;

/// Tactic categories, in detection priority order - the first category whose
/// markers appear in the message wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    Upi,
    Otp,
    Password,
    Cvv,
    Link,
    Download,
    Verify,
    AccountBlocked,
    Urgent,
    Default,
}

impl ReplyCategory {
    /// Detection priority order. Ties break by declaration order, not by
    /// how strongly a marker matched.
    const PRIORITY: [ReplyCategory; 9] = [
        ReplyCategory::Upi,
        ReplyCategory::Otp,
        ReplyCategory::Password,
        ReplyCategory::Cvv,
        ReplyCategory::Link,
        ReplyCategory::Download,
        ReplyCategory::Verify,
        ReplyCategory::AccountBlocked,
        ReplyCategory::Urgent,
    ];

    /// Picks the category for a message; `Default` when nothing matches.
    pub fn detect(message: &str) -> ReplyCategory {
        let msg = message.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|category| category.matches(&msg))
            .unwrap_or(ReplyCategory::Default)
    }

    fn matches(&self, msg: &str) -> bool {
        match self {
            ReplyCategory::Upi => msg.contains("upi"),
            ReplyCategory::Otp => msg.contains("otp"),
            ReplyCategory::Password => msg.contains("password"),
            ReplyCategory::Cvv => msg.contains("cvv"),
            ReplyCategory::Link => {
                msg.contains("link") || msg.contains("click") || msg.contains("http")
            }
            ReplyCategory::Download => msg.contains("download") || msg.contains("install"),
            ReplyCategory::Verify => msg.contains("verify"),
            ReplyCategory::AccountBlocked => ["block", "suspended", "locked", "freeze"]
                .iter()
                .any(|w| msg.contains(w)),
            ReplyCategory::Urgent => ["urgent", "immediately", "now", "asap", "today"]
                .iter()
                .any(|w| msg.contains(w)),
            ReplyCategory::Default => true,
        }
    }

    /// The ordered template bank for this category.
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            ReplyCategory::Upi => &[
                "I'm not sure what UPI is, can you explain?",
                "Is it safe to share my UPI ID? I'm worried about security.",
                "Can you tell me why you need my UPI ID?",
            ],
            ReplyCategory::Otp => &[
                "Is it safe to share OTP? What will you use it for?",
                "Why do you need my OTP? I've heard it's dangerous.",
                "Can someone misuse my OTP if I share it?",
            ],
            ReplyCategory::Password => &[
                "Should I really share my password? That sounds risky.",
                "Why do you need access to my account password?",
                "I don't think it's safe to share passwords. Right?",
            ],
            ReplyCategory::Cvv => &[
                "You're asking for my CVV? That's the security code, right?",
                "Is it safe to share CVV over message? I'm concerned.",
                "Why would you need my CVV to verify my account?",
            ],
            ReplyCategory::Link => &[
                "Can you explain what this link is for?",
                "Is this link safe to click? Where does it take me?",
                "Why should I click on this? What happens next?",
            ],
            ReplyCategory::Download => &[
                "Is it safe to download that? What does it do?",
                "Why do I need to download an app to verify my account?",
                "Can you explain what this download is for?",
            ],
            ReplyCategory::Verify => &[
                "How will the verification process work?",
                "What happens after I verify? Is my account safe?",
                "Can you explain this verification process?",
            ],
            ReplyCategory::AccountBlocked => &[
                "Why is my account blocked? What did I do?",
                "When will my account be unblocked? How long does it take?",
                "Is there another way to resolve this without verification?",
            ],
            ReplyCategory::Urgent => &[
                "Why is this so urgent? What happens if I don't act now?",
                "How much time do I have to respond?",
                "Is this really an emergency? Can it wait?",
            ],
            ReplyCategory::Default => &[
                "Can you explain that more clearly?",
                "I didn't understand. Can you rephrase?",
                "What exactly are you asking me to do?",
                "Can you provide more details?",
                "I'm confused about this. Help me understand.",
            ],
        }
    }
}

/// Selects human-sounding deflecting replies from the template bank.
#[derive(Debug, Clone, Default)]
pub struct ReplyStrategist;

impl ReplyStrategist {
    /// Creates a new strategist.
    pub fn new() -> Self {
        Self
    }

    /// Picks a reply for the latest inbound message.
    ///
    /// Chooses the first template of the detected category not used within
    /// the last [`REPETITION_WINDOW`] replies. When every template was used
    /// that recently, falls back to the category's first template - repetition
    /// is accepted rather than failing the turn.
    pub fn select_reply(&self, current_message: &str, recent_own_replies: &[String]) -> &'static str {
        let category = ReplyCategory::detect(current_message);
        let templates = category.templates();

        let window_start = recent_own_replies.len().saturating_sub(REPETITION_WINDOW);
        let window = &recent_own_replies[window_start..];

        let reply = templates
            .iter()
            .find(|template| !window.iter().any(|used| used == *template))
            .copied()
            .unwrap_or(templates[0]);

        tracing::debug!(?category, reply, "selected reply");
        reply
    }
}
