//! Host-provided text editing.

/// Asks the user for replacement text.
///
/// The engine blocks on [`TextPrompt::edit`]; the host may back it with any
/// UI as long as it resolves before returning.
pub trait TextPrompt {
    /// Return the replacement text, or `None` to leave `current` unchanged.
    fn edit(&mut self, current: &str) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn edit(&mut self, current: &str) -> Option<String> {
        self(current)
    }
}

/// A prompt that always answers with the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedText(pub String);

impl TextPrompt for FixedText {
    fn edit(&mut self, _current: &str) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A prompt the user always dismisses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dismiss;

impl TextPrompt for Dismiss {
    fn edit(&mut self, _current: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_prompt() {
        let mut upper = |current: &str| Some(current.to_uppercase());
        assert_eq!(upper.edit("abc"), Some("ABC".to_string()));
        assert_eq!(Dismiss.edit("abc"), None);
        assert_eq!(FixedText("x".into()).edit("abc"), Some("x".to_string()));
    }
}
