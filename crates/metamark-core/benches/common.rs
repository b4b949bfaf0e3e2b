// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_metamark_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\nA second line.\n\n[[diagram]]\ngraph TD\nA --> B\n[[/diagram]]\n\n> note: remember this\n%% internal comment %%\n";
    format!("---\ntitle: Bench\nauthor: Criterion\n---\n{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_long_paragraphs(paragraphs: usize, lines: usize) -> String {
    let mut content = String::new();

    for p in 0..paragraphs {
        for l in 0..lines {
            content.push_str(&format!(
                "Paragraph {p} line {l} with enough words to look like prose.\n"
            ));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_metadata_block(entries: usize) -> String {
    let mut content = String::from("---\n");
    for i in 0..entries {
        content.push_str(&format!("key{i}: value {i}\n"));
    }
    content.push_str("---\n# Body\n");
    content
}
