/// Soft-wraps `text` so that no row exceeds `width` columns, breaking only at spaces.
///
/// Existing line breaks are kept. Words are split on `' '` alone, so runs of spaces inside a row
/// survive and tabs stay part of the word they touch. Each row loses its leading whitespace and
/// its trailing spaces, and a word longer than `width` gets a row of its own rather than being
/// split. Width is counted in `char`s, so wide characters such as CJK ideographs count as one
/// column instead of two.
pub fn wrap_text(text: &str, width: usize) -> String {
  text
    .replace("\r\n", "\n")
    .split('\n')
    .map(|line| wrap_line(line, width))
    .collect::<Vec<_>>()
    .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
  if line.trim().is_empty() {
    return String::new();
  }

  let mut rows = vec![];
  let mut row = String::new();

  for (i, word) in line.split(' ').enumerate() {
    if row.trim_start().len() != row.len() {
      row = row.trim_start().to_string();
    }

    let mut row_width = row.chars().count();
    if i > 0 && row_width > 0 {
      row.push(' ');
      row_width += 1;
    }

    let word_width = word.chars().count();
    if row_width + word_width > width && row_width > 0 && word_width > 0 {
      rows.push(std::mem::take(&mut row));
    }

    row.push_str(word);
  }
  rows.push(row);

  rows.iter().map(|row| row.trim_end_matches(' ')).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_wrap_text() {
  assert_eq!(wrap_text("", 80), "");
  assert_eq!(wrap_text("aaa bbb ccc", 7), "aaa bbb\nccc");
  assert_eq!(wrap_text("first\n\nsecond", 80), "first\n\nsecond");
  assert_eq!(wrap_text("tiny enormousword tiny", 5), "tiny\nenormousword\ntiny");
  assert_eq!(wrap_text("   \n\t", 80), "\n");
}

#[test]
fn test_wrap_text_keeps_spacing_inside_rows() {
  assert_eq!(wrap_text("aaa  bbb", 80), "aaa  bbb");
  assert_eq!(
    wrap_text("Copyright (c) 2014  Jane Doe\n    Indented\tline", 80),
    "Copyright (c) 2014  Jane Doe\nIndented\tline"
  );
  assert_eq!(wrap_text("trailing   ", 80), "trailing");
  assert_eq!(wrap_text("a\r\nb", 80), "a\nb");
}
