/// Remove code-fence wrapper lines, keeping the enclosed code as plain
/// text. Replies show code inline in the bubble rather than in a block.
pub fn strip_code_fences(markdown: &str) -> String {
    markdown
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}
