/// Case-insensitive exact comparison of two free-text city names. Whitespace
/// is significant.
pub fn locations_match(first: &str, second: &str) -> bool {
    first.to_lowercase() == second.to_lowercase()
}

/// What the customer chose after their city did not match the restaurant's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchChoice {
    Exit,
    Restart,
}

impl MismatchChoice {
    /// Only `exit` (any case) leaves quietly; every other answer asks for a restart.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("exit") {
            MismatchChoice::Exit
        } else {
            MismatchChoice::Restart
        }
    }
}
