//! Factory vocabulary written into an empty word table on first run.

/// Built-in words and short phrases, in button order.
///
/// Core words only (pronouns, verbs, question words, prepositions,
/// conjunctions, polarity words) plus `"swimming"` as a sample content word.
pub const DEFAULT_WORDS: &[&str] = &[
    "I", "you", "we", "he", "she", "they", "it", "this", "that", "the", "a", "is", "can", "will",
    "do", "don't", "want", "like", "need", "have", "get", "stop", "go", "come", "take", "give",
    "eat", "open", "make", "put", "think", "see", "look", "say", "know", "play", "listen", "tell",
    "help", "what", "when", "where", "who", "why", "how", "to", "with", "here", "in", "on", "of",
    "there", "out", "off", "for", "about", "up", "down", "if", "but", "because", "and", "so",
    "or", "now", "not", "more", "too", "all done", "good", "bad", "different", "all", "some",
    "swimming",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn has_expected_size() {
        assert_eq!(DEFAULT_WORDS.len(), 75);
    }

    #[test]
    fn words_are_trimmed_and_non_empty() {
        for word in DEFAULT_WORDS {
            assert!(!word.is_empty());
            assert_eq!(word.trim(), *word, "word {word:?} has stray whitespace");
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn keeps_multi_word_phrase() {
        assert!(DEFAULT_WORDS.contains(&"all done"));
    }
}
