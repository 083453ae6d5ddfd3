// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use casebook_engine::CitationRecord;

#[allow(dead_code)]
pub fn generate_case_content(cases: usize) -> String {
    let mut content = String::from("Overview of **accelerator** adoption.\n\n## TPU cases\n\n");

    for case in 0..cases {
        content.push_str(&format!("### Company{case} (Cloud)\n"));
        content.push_str("1. **Use**: training large models\n");
        content.push_str("2. **Scale**: thousands of chips https://example.com/scale\n");
        content.push_str(&format!("Source: https://company{case}.example/blog\n"));
        content.push_str("---\n\n");
    }

    content.push_str("## Summary\n\n| Aspect | TPU | GPU |\n|---|---|---|\n");
    for row in 0..cases.min(20) {
        content.push_str(&format!("| row {row} | **fast** | flexible |\n"));
    }
    content
}

#[allow(dead_code)]
pub fn generate_citations(cases: usize) -> Vec<CitationRecord> {
    (0..cases)
        .filter(|case| case % 2 == 0)
        .map(|case| {
            CitationRecord::new(
                format!("https://company{case}.example/blog"),
                Some(format!("Company{case} case study").as_str()),
            )
        })
        .collect()
}
