/// Greedy word wrap used by the error box. A word longer than `width`
/// gets its own over-long line rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![String::new()];

    for word in text.split_whitespace() {
        let line = lines.last_mut().expect("lines starts non-empty");
        if line.is_empty() {
            line.push_str(word);
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }

    lines
}
