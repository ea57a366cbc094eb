use bandcode_core::Color;
use inquire::CustomUserError;
use inquire::autocompletion::{Autocomplete, Replacement};

/// Colors whose name starts with `input`, in table order.
///
/// Matching ignores case and surrounding whitespace, and "gray" matches Grey.
/// Empty input matches every candidate.
pub fn color_suggestions(input: &str, candidates: &[Color]) -> Vec<Color> {
    let needle = input.trim().to_ascii_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|color| {
            color.name().to_ascii_lowercase().starts_with(&needle)
                || (*color == Color::Grey && "gray".starts_with(&needle))
        })
        .collect()
}

/// Prefix completion over the colors legal for one band.
#[derive(Clone, Debug)]
pub struct ColorCompleter {
    candidates: Vec<Color>,
}

impl ColorCompleter {
    pub fn new(candidates: Vec<Color>) -> Self {
        Self { candidates }
    }
}

impl Autocomplete for ColorCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(color_suggestions(input, &self.candidates)
            .into_iter()
            .map(|c| c.name().to_string())
            .collect())
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        if highlighted_suggestion.is_some() {
            return Ok(highlighted_suggestion);
        }
        Ok(color_suggestions(input, &self.candidates)
            .first()
            .map(|c| c.name().to_string()))
    }
}
