// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_comment_text(size: usize) -> String {
    let base = "Status update for **the team**:\n- shipped the *parser*\n- fixed CRLF input\n\nPlain follow-up line.\n***Very important***\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_list(items: usize) -> String {
    (0..items)
        .map(|i| format!("- item number {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}
