use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::{Arc, Mutex, PoisonError};

pub const GREETING_REPLIES: &[&str] = &[
    "Hello! This is the DevPortal assistant. How can I help you?",
    "Welcome! Ask me anything about web development whenever you like.",
    "Hi there! Let me know if you need help with one of the projects.",
];

pub const TECHNOLOGY_REPLIES: &[&str] = &[
    "React is very effective for building modern UIs. Its component model makes reuse easy.",
    "Vite greatly improves the development experience with a fast dev server and efficient bundling.",
    "Node.js is a runtime that lets you build backends in JavaScript.",
    "SQLite is a light yet capable relational database, well suited to prototypes.",
];

pub const PROJECT_REPLIES: &[&str] = &[
    "When planning a project, set a clear goal and pick the technology stack carefully.",
    "Don't neglect testing and documentation during development.",
    "Always put the user experience first while building.",
];

pub const DEFAULT_REPLIES: &[&str] = &[
    "Interesting question! Could you describe it in a bit more detail?",
    "Sorry, I didn't quite catch that. Could you rephrase?",
    "I'm not certain about that, but I can point you at related information.",
];

#[derive(Debug)]
struct Category {
    pattern: Regex,
    replies: &'static [&'static str],
}

/// Classifies an input line into a reply bucket with a first-match scan over
/// the category patterns, then picks a uniformly random reply from that
/// bucket. Falls back to the default bucket when nothing matches.
///
/// The handle is cheap to clone; all clones share one random source so a
/// seeded generator stays deterministic across the process.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    inner: Arc<GeneratorInner>,
}

#[derive(Debug)]
struct GeneratorInner {
    categories: Vec<Category>,
    rng: Mutex<StdRng>,
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        // Priority order matters: first matching category wins.
        let categories = vec![
            Category {
                pattern: compile(r"(?i)\b(hi|hiya|hello|hey|howdy|greetings|good (morning|afternoon|evening))\b"),
                replies: GREETING_REPLIES,
            },
            Category {
                pattern: compile(r"(?i)\b(react|vite|node|javascript|typescript|html|css|database|sql|tech|technology|stack)\b"),
                replies: TECHNOLOGY_REPLIES,
            },
            Category {
                pattern: compile(r"(?i)\b(project|plan|planning|roadmap|manage|design|build|implement)\b"),
                replies: PROJECT_REPLIES,
            },
        ];

        Self {
            inner: Arc::new(GeneratorInner {
                categories,
                rng: Mutex::new(rng),
            }),
        }
    }

    pub fn generate(&self, message: &str) -> String {
        let replies = self
            .inner
            .categories
            .iter()
            .find(|category| category.pattern.is_match(message))
            .map(|category| category.replies)
            .unwrap_or(DEFAULT_REPLIES);

        let mut rng = self.inner.rng.lock().unwrap_or_else(PoisonError::into_inner);
        replies[rng.gen_range(0..replies.len())].to_string()
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded pattern compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_inputs_draw_from_the_greeting_bucket() {
        let bot = ResponseGenerator::seeded(7);
        for input in ["hello", "Hey there", "HELLO world", "good morning all"] {
            assert!(GREETING_REPLIES.contains(&bot.generate(input).as_str()));
        }
    }

    #[test]
    fn technology_inputs_draw_from_the_technology_bucket() {
        let bot = ResponseGenerator::seeded(7);
        for input in ["what about react?", "is SQL hard", "css tricks"] {
            assert!(TECHNOLOGY_REPLIES.contains(&bot.generate(input).as_str()));
        }
    }

    #[test]
    fn project_inputs_draw_from_the_project_bucket() {
        let bot = ResponseGenerator::seeded(7);
        for input in ["how do I plan this", "project advice", "roadmap tips"] {
            assert!(PROJECT_REPLIES.contains(&bot.generate(input).as_str()));
        }
    }

    #[test]
    fn non_matching_inputs_fall_back_to_the_default_bucket() {
        let bot = ResponseGenerator::seeded(7);
        for input in ["", "qwerty", "what's for lunch?"] {
            assert!(DEFAULT_REPLIES.contains(&bot.generate(input).as_str()));
        }
    }

    #[test]
    fn greetings_win_over_later_categories() {
        let bot = ResponseGenerator::seeded(7);
        // Matches both the greeting and the technology pattern.
        let reply = bot.generate("hello, react question");
        assert!(GREETING_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn same_seed_means_same_replies() {
        let a = ResponseGenerator::seeded(42);
        let b = ResponseGenerator::seeded(42);
        for input in ["hello", "react", "project", "???"] {
            assert_eq!(a.generate(input), b.generate(input));
        }
    }

    #[test]
    fn clones_share_the_random_source() {
        let a = ResponseGenerator::seeded(42);
        let b = a.clone();
        let reference = ResponseGenerator::seeded(42);
        // Two draws from the shared source match two draws from one source.
        assert_eq!(a.generate("hello"), reference.generate("hello"));
        assert_eq!(b.generate("hello"), reference.generate("hello"));
    }
}
