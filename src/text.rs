//! Text normalization.
//!
//! Post text and lexicon phrases go through the same tokenizer, so phrase
//! matching is a comparison of token sequences:
//!
//! - letters and digits form lower-cased word tokens
//! - whitespace and punctuation separate tokens and are dropped
//! - pictographs (emoji, dingbats, flags) become symbol tokens, one per
//!   glyph; joiners, skin-tone modifiers and the second half of a flag stay
//!   attached to the glyph they modify
//! - variation selectors are dropped, so `✡️` and `✡` normalize alike
//!
//! Every token remembers the byte range it covers in the original text.

use std::ops::Range;

/// A normalized token and its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Symbol,
}

struct Pending {
    token: Token,
    kind: Kind,
    // Odd number of regional indicators seen so far (flag half-open)
    open_flag: bool,
    // Last char was a zero-width joiner
    joined: bool,
}

const ZWJ: char = '\u{200D}';

fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{FE0E}' | '\u{FE0F}')
}

fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        // Latin-1 punctuation and the General Punctuation block (’ “ — …)
        || ('\u{00A0}'..='\u{00BF}').contains(&c)
        || ('\u{2000}'..='\u{206F}').contains(&c)
}

fn is_symbol(c: char) -> bool {
    c as u32 >= 0x2100
}

/// Split text into normalized tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending: Option<Pending> = None;

    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();

        if is_variation_selector(c) {
            if let Some(p) = pending.as_mut().filter(|p| p.kind == Kind::Symbol) {
                p.token.span.end = end;
            }
            continue;
        }

        if let Some(p) = pending.as_mut().filter(|p| p.kind == Kind::Symbol) {
            let attaches = c == ZWJ
                || is_skin_tone(c)
                || (p.joined && is_symbol(c) && !is_separator(c))
                || (p.open_flag && is_regional_indicator(c));
            if attaches {
                p.token.text.push(c);
                p.token.span.end = end;
                p.joined = c == ZWJ;
                if is_regional_indicator(c) {
                    p.open_flag = !p.open_flag;
                }
                continue;
            }
        }

        if c.is_alphanumeric() {
            match pending.as_mut().filter(|p| p.kind == Kind::Word) {
                Some(p) => {
                    p.token.text.extend(c.to_lowercase());
                    p.token.span.end = end;
                }
                None => {
                    flush(&mut pending, &mut tokens);
                    pending = Some(Pending {
                        token: Token {
                            text: c.to_lowercase().collect(),
                            span: start..end,
                        },
                        kind: Kind::Word,
                        open_flag: false,
                        joined: false,
                    });
                }
            }
        } else if c != ZWJ && !is_separator(c) && is_symbol(c) {
            flush(&mut pending, &mut tokens);
            pending = Some(Pending {
                token: Token {
                    text: c.to_string(),
                    span: start..end,
                },
                kind: Kind::Symbol,
                open_flag: is_regional_indicator(c),
                joined: false,
            });
        } else {
            flush(&mut pending, &mut tokens);
        }
    }
    flush(&mut pending, &mut tokens);
    tokens
}

fn flush(pending: &mut Option<Pending>, tokens: &mut Vec<Token>) {
    if let Some(p) = pending.take() {
        tokens.push(p.token);
    }
}

/// Normalized form of `text`: its tokens joined by single spaces.
pub fn normalize(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            texts("Free Palestine, END the occupation!"),
            vec!["free", "palestine", "end", "the", "occupation"]
        );
    }

    #[test]
    fn hashtags_and_mentions_lose_their_sigil() {
        assert_eq!(texts("#StandWithIsrael @someone"), vec!["standwithisrael", "someone"]);
    }

    #[test]
    fn apostrophes_split_words() {
        assert_eq!(texts("Israel's don’t"), vec!["israel", "s", "don", "t"]);
    }

    #[test]
    fn hyphen_splits_words() {
        assert_eq!(texts("al-Aqsa"), vec!["al", "aqsa"]);
    }

    #[test]
    fn spans_point_into_original_text() {
        let input = "  Stand WITH Israel";
        let tokens = tokenize(input);
        assert_eq!(&input[tokens[0].span.clone()], "Stand");
        assert_eq!(&input[tokens[2].span.clone()], "Israel");
    }

    #[test]
    fn flags_stay_one_token() {
        assert_eq!(texts("🇮🇱🇵🇸"), vec!["🇮🇱", "🇵🇸"]);
    }

    #[test]
    fn variation_selector_is_dropped() {
        assert_eq!(texts("✡️"), texts("✡"));
        let tokens = tokenize("a ✡️");
        // Span still covers the selector so highlighting keeps it
        assert_eq!(tokens[1].span, 2..8);
    }

    #[test]
    fn emoji_adjacent_to_word_is_separate() {
        assert_eq!(texts("gaza🍉"), vec!["gaza", "🍉"]);
    }

    #[test]
    fn skin_tone_attaches_to_emoji() {
        assert_eq!(texts("🙏🏼🙏"), vec!["🙏🏼", "🙏"]);
    }

    #[test]
    fn zwj_sequence_stays_one_token() {
        assert_eq!(texts("👩\u{200D}👧 hi"), vec!["👩\u{200D}👧", "hi"]);
    }

    #[test]
    fn zwj_does_not_swallow_following_word() {
        assert_eq!(
            texts("🍉\u{200D}free palestine"),
            vec!["🍉\u{200D}", "free", "palestine"]
        );
        assert_eq!(texts("🍉\u{200D} gaza"), vec!["🍉\u{200D}", "gaza"]);
    }

    #[test]
    fn normalize_joins_tokens() {
        assert_eq!(normalize("  Just had   COFFEE... this morning "), "just had coffee this morning");
        assert_eq!(normalize(" \t\n "), "");
    }
}
