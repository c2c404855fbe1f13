//! Fixed prompts for the generative models.

use crate::models::PuzzleCategory;

/// Number of pickup lines requested per category (one per word).
pub const PICKUP_LINES_PER_CATEGORY: usize = 4;

/// Prompt asking for one scored pickup line per word, as JSON.
pub fn pickup_line_prompt(category: &PuzzleCategory) -> String {
    format!(
        "You are a playful comedian writing cheesy pickup lines.\n\
         The category is \"{title}\" and its words are: {words}.\n\
         Write exactly {count} pickup lines, one built around each word, that also \
         nod to the category.\n\
         Score every line from 0 to 10 for Creativity and for Humor, then rank the \
         lines from best to worst by the sum of both scores.\n\
         Respond with a JSON object only, no prose, shaped exactly like:\n\
         {{\"pickupLines\": [{{\"word\": \"<word>\", \"line\": \"<pickup line>\", \
         \"overallScore\": {{\"Creativity\": <0-10>, \"Humor\": <0-10>}}}}]}}",
        title = category.category,
        words = category.words.join(", "),
        count = PICKUP_LINES_PER_CATEGORY,
    )
}

/// Prompt asking for a simple, cute, text-free illustration of a theme.
pub fn image_prompt(title: &str) -> String {
    format!(
        "A simple, cute illustration that embodies the theme \"{}\". \
         Soft pastel colors, a single friendly subject, plain background. \
         Do not include any text, letters, numbers or words in the image.",
        title
    )
}
