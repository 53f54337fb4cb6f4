//! Built-in example used by `freqsum demo`.

use crate::summarizer::Summarizer;
use crate::summary::Summary;

pub const EXAMPLE_TEXT: &str = "Engineering colleges play a crucial role in shaping the future of students by providing top-notch education, cutting-edge research opportunities, and industry connections. Institutes like the Indian Institutes of Technology (IITs) and National Institutes of Technology (NITs) are considered the premier engineering institutions in India. These colleges offer various undergraduate, postgraduate, and research programs across multiple engineering disciplines. With a focus on innovation, technology, and real-world applications, these institutions prepare students to excel in the global job market and contribute to the advancement of engineering and technology.";

pub const EXAMPLE_SENTENCES: i64 = 2;

/// Summarize [`EXAMPLE_TEXT`] to [`EXAMPLE_SENTENCES`] sentences
pub fn example(summarizer: &Summarizer<'_>) -> Summary {
    Summary::create(summarizer, EXAMPLE_TEXT, EXAMPLE_SENTENCES)
}
