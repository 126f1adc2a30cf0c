use diacritics::remove_diacritics;
use crate::data::transliteration::*;

fn is_cyrillic_vowel(c: char) -> bool {
  CYRILLIC_VOWELS.contains(&c)
}

fn capitalise(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn starts_with_at(chars: &[char], index: usize, pattern: &str) -> bool {
  pattern.chars().enumerate().all(|(offset, p)| chars.get(index + offset) == Some(&p))
}

/**
 * Convert a user supplied name to the Latin script of the asciiname column.
 * Cyrillic letters are romanised, accented Latin letters lose their diacritics
 * and anything else (ASCII, digits, punctuation) passes through unchanged.
 */
pub fn to_storage_script(input: &str) -> String {
  let mut output = String::with_capacity(input.len());
  let mut prev: Option<char> = None;
  for c in input.chars() {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let latin = if lower == 'е' {
      // iotated at the start of a word and after a vowel or a sign
      let iotated = match prev {
        Some(p) => !p.is_alphabetic() || is_cyrillic_vowel(p) || p == 'ь' || p == 'ъ',
        None => true,
      };
      Some(if iotated { "ye" } else { "e" })
    } else {
      CYRILLIC_TO_LATIN.iter().find(|(cy, _)| *cy == lower).map(|(_, latin)| *latin)
    };
    match latin {
      Some(latin) if c.is_uppercase() => output.push_str(&capitalise(latin)),
      Some(latin) => output.push_str(latin),
      None if c.is_ascii() => output.push(c),
      None => output.push_str(&remove_diacritics(&c.to_string())),
    }
    prev = Some(lower);
  }
  output
}

/**
 * Convert a stored Latin name back to Cyrillic for display.
 * Digraphs are matched greedily; y, e and ye are resolved from the preceding letter
 * so that to_storage_script restores the stored spelling of capitalised names.
 */
pub fn to_presentation_script(input: &str) -> String {
  let chars: Vec<char> = input.chars().collect();
  let lower: Vec<char> = chars.iter().map(|c| c.to_ascii_lowercase()).collect();
  let mut output = String::with_capacity(input.len() * 2);
  let mut last: Option<char> = None;
  let mut index = 0;
  while index < chars.len() {
    let boundary = index == 0 || !chars[index - 1].is_alphabetic();
    let after_vowel = last.map_or(false, is_cyrillic_vowel);
    let (mut letters, consumed) = if starts_with_at(&lower, index, "ye") {
      if boundary || after_vowel {
        (vec!['е'], 2)
      } else {
        (vec!['ь', 'е'], 2)
      }
    } else if let Some((latin, cy)) = LATIN_DIGRAPHS.iter().find(|(latin, _)| starts_with_at(&lower, index, latin)) {
      (vec![*cy], latin.len())
    } else {
      let letter = match lower[index] {
        'y' => if after_vowel { 'й' } else { 'ы' },
        'e' => if boundary || after_vowel { 'э' } else { 'е' },
        c => LATIN_LETTERS.iter().find(|(latin, _)| *latin == c).map(|(_, cy)| *cy).unwrap_or(chars[index]),
      };
      (vec![letter], 1)
    };
    if chars[index].is_uppercase() {
      if let Some(letter) = letters.last_mut() {
        *letter = letter.to_uppercase().next().unwrap_or(*letter);
      }
    }
    for letter in &letters {
      output.push(*letter);
    }
    last = letters.last().map(|c| c.to_lowercase().next().unwrap_or(*c));
    index += consumed;
  }
  output
}
