//! Sentence segmentation.
//!
//! Splits text after terminal punctuation (`.`, `!`, `?`, `…`) that is
//! followed by whitespace, then glues back pieces that were cut after a
//! known abbreviation ("проф. Иванов").

use crate::dictionaries::abbreviations::ends_with_abbreviation;

/// Split text into sentences, in document order.
///
/// Blank input yields no sentences. Text without any boundary comes back as
/// a single trimmed sentence. Each returned sentence is trimmed and
/// non-empty.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let candidates = split_at_boundaries(trimmed);
    let sentences = merge_abbreviations(&candidates);
    tracing::trace!(
        candidates = candidates.len(),
        sentences = sentences.len(),
        "segmented text"
    );
    sentences
}

/// Returns true for characters that can end a sentence.
pub const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

/// Cut `text` at every whitespace run that directly follows a terminator.
///
/// The whitespace run is the separator and belongs to neither piece.
fn split_at_boundaries(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && prev.is_some_and(is_sentence_terminator) {
            pieces.push(&text[start..idx]);

            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Join each candidate ending in an abbreviation with its successor.
///
/// A merged sentence is not checked again, so at most two candidates are
/// joined per step.
fn merge_abbreviations(candidates: &[&str]) -> Vec<String> {
    let mut sentences = Vec::with_capacity(candidates.len());
    let mut i = 0;

    while i < candidates.len() {
        let current = candidates[i];

        if i + 1 < candidates.len() && ends_with_abbreviation(current) {
            sentences.push(format!("{current} {}", candidates[i + 1]));
            i += 2;
        } else {
            sentences.push(current.to_string());
            i += 1;
        }
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("Това е първо. Това е второ!");
        assert_eq!(sentences, vec!["Това е първо.", "Това е второ!"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("\n\t ").is_empty());
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Проф. Иванов дойде.");
        assert_eq!(sentences, vec!["Проф. Иванов дойде."]);
    }

    #[test]
    fn abbreviation_in_the_middle() {
        let sentences = split_sentences("Срещнахме се на ул. Раковски. После си тръгнахме.");
        assert_eq!(
            sentences,
            vec!["Срещнахме се на ул. Раковски.", "После си тръгнахме."]
        );
    }

    #[test]
    fn abbreviation_as_last_sentence_is_kept() {
        let sentences = split_sentences("Видях го. Беше през 1990 г.");
        assert_eq!(sentences, vec!["Видях го.", "Беше през 1990 г."]);
    }

    #[test]
    fn merges_do_not_chain() {
        let sentences = split_sentences("Виж ул. бл. Край.");
        assert_eq!(sentences, vec!["Виж ул. бл.", "Край."]);
    }

    #[test]
    fn word_ending_in_abbreviation_letter_splits() {
        let sentences = split_sentences("Видях бог. Той мълчеше.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn question_exclamation_and_ellipsis() {
        let sentences = split_sentences("Трето ли е това? Да! Чакай… Идвам.");
        assert_eq!(sentences, vec!["Трето ли е това?", "Да!", "Чакай…", "Идвам."]);
    }

    #[test]
    fn repeated_terminators_stay_together() {
        let sentences = split_sentences("Наистина?! Да... Добре.");
        assert_eq!(sentences, vec!["Наистина?!", "Да...", "Добре."]);
    }

    #[test]
    fn punctuation_without_whitespace_is_not_a_boundary() {
        let sentences = split_sentences("Версия 3.14 е тук.Нали? Да.");
        assert_eq!(sentences, vec!["Версия 3.14 е тук.Нали?", "Да."]);
    }

    #[test]
    fn newlines_and_whitespace_runs_are_separators() {
        let sentences = split_sentences("  Първо.\n\n   Второ!\tТрето?  ");
        assert_eq!(sentences, vec!["Първо.", "Второ!", "Трето?"]);
    }

    #[test]
    fn no_terminal_punctuation_is_single_sentence() {
        let sentences = split_sentences("  просто текст без край  ");
        assert_eq!(sentences, vec!["просто текст без край"]);
    }

    #[test]
    fn joined_sentences_reconstruct_text() {
        let inputs = [
            "Това е първото изречение. То съдържа няколко думи!\nВторото е по-дълго.",
            "Проф. Иванов и доц.  Петров дойдоха.   Беше хубаво…  Нали?",
            "one",
            "a. b. c.",
        ];
        for input in inputs {
            let sentences = split_sentences(input);
            assert!(!sentences.is_empty(), "no sentences for {input:?}");
            assert_eq!(
                normalize_whitespace(&sentences.join(" ")),
                normalize_whitespace(input),
                "round trip failed for {input:?}"
            );
        }
    }

    #[test]
    fn sentences_are_trimmed_and_non_empty() {
        for sentence in split_sentences("Едно.   Две!  \n  Три?") {
            assert!(!sentence.is_empty());
            assert_eq!(sentence, sentence.trim());
        }
    }
}
