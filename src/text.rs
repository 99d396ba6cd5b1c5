// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use unicode_segmentation::UnicodeSegmentation;

const ETC: &str = "...";

fn is_whitespace(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

/// Shortens `text` to at most `length` graphemes, ending on a word boundary
/// followed by `...`.
pub fn truncate(text: &str, length: usize) -> String {
    truncate_with(text, length, ETC, false)
}

pub fn truncate_with(text: &str, length: usize, etc: &str, break_words: bool) -> String {
    if length == 0 {
        return String::new();
    }

    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= length {
        return text.to_owned();
    }

    let etc_length = etc.graphemes(true).count();
    if etc_length > length {
        return etc.graphemes(true).take(length).collect();
    }

    let length = length - etc_length;
    let mut kept: Vec<&str> = graphemes[..(length + 1).min(graphemes.len())].to_vec();

    if !break_words {
        // Drop the trailing whitespace run together with the word cut after it.
        if let Some(last_space) = kept.iter().rposition(|g| is_whitespace(g)) {
            let start = kept[..=last_space]
                .iter()
                .rposition(|g| !is_whitespace(g))
                .map_or(0, |index| index + 1);
            kept.truncate(start);
        }
    }

    kept.truncate(length);

    let mut out = kept.concat();
    out.push_str(etc);
    out
}
