//! Tokenizer for free-form intent arguments
//!
//! Operators pass extra `am start` arguments as one string, e.g.
//! `-d http://some-url.com/ -e key some value`. The grammar is small:
//!
//! - words are separated by spaces; runs of spaces between groups are
//!   insignificant, but spacing inside a value is kept as written;
//! - a word is a flag only when it is `-` followed by exactly one ASCII letter;
//! - the words after a flag, up to the next flag, form that flag's argument
//!   group: the first word is the key, the rest are re-joined into one value.
//!
//! Hyphens anywhere else (URLs, `--ez`, `some-key`) never start a new flag.

use tracing::trace;

/// Scanner state
#[derive(Debug)]
enum ScanState<'a> {
    /// At the start of input, nothing pending
    SeekingFlag,
    /// Collecting the words that follow the last flag
    AccumulatingValue(Vec<&'a str>),
}

/// Split an intent argument string into `am start` tokens
///
/// Each flag is emitted, followed by its key and (when more than one word
/// follows) the rest of the group as one value, with its inner spacing
/// intact and its edges trimmed. A flag with no
/// words after it is emitted alone; nothing is invented. Words that appear
/// before the first flag are emitted as a flagless key/value group.
///
/// # Examples
/// ```
/// use droid_adb::intent_args::tokenize;
///
/// assert_eq!(tokenize("-d key value value2"), vec!["-d", "key", "value value2"]);
/// assert_eq!(tokenize("-d key1 -e key2"), vec!["-d", "key1", "-e", "key2"]);
/// ```
pub fn tokenize(args: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut state = ScanState::SeekingFlag;

    for word in args.split(' ') {
        state = match (state, is_flag(word)) {
            (ScanState::SeekingFlag, _) if word.is_empty() => ScanState::SeekingFlag,
            (ScanState::SeekingFlag, true) => {
                tokens.push(word.to_string());
                ScanState::AccumulatingValue(Vec::new())
            }
            (ScanState::SeekingFlag, false) => ScanState::AccumulatingValue(vec![word]),
            (ScanState::AccumulatingValue(words), true) => {
                flush_group(&mut tokens, &words);
                tokens.push(word.to_string());
                ScanState::AccumulatingValue(Vec::new())
            }
            (ScanState::AccumulatingValue(mut words), false) => {
                words.push(word);
                ScanState::AccumulatingValue(words)
            }
        };
        trace!("intent arg {:?} -> {:?}", word, state);
    }

    if let ScanState::AccumulatingValue(words) = state {
        flush_group(&mut tokens, &words);
    }

    tokens
}

/// A flag is exactly `-<letter>`
pub fn is_flag(word: &str) -> bool {
    matches!(word.as_bytes(), [b'-', c] if c.is_ascii_alphabetic())
}

/// Emit a flag's argument group as key, then the joined value
///
/// `words` comes from splitting on single spaces, so empty entries stand for
/// extra spaces. Rejoining them restores the value's spacing.
fn flush_group(tokens: &mut Vec<String>, words: &[&str]) {
    let mut words = words.iter().skip_while(|w| w.is_empty());
    let Some(key) = words.next() else {
        return;
    };
    tokens.push((*key).to_string());

    let value = words.copied().collect::<Vec<_>>().join(" ");
    let value = value.trim_matches(' ');
    if !value.is_empty() {
        tokens.push(value.to_string());
    }
}
