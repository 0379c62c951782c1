// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline_content(size: usize) -> String {
    let mut content = String::new();
    for i in 0..size {
        content.push_str(&format!("Some leading prose for comment {i}.\n\noutline: pkg{i}\n"));
        content.push_str("  a package generated for benchmarking\n  functions:\n");
        for f in 0..10 {
            content.push_str(&format!(
                "    f{f}(a int, b string) int\n      does thing {f}\n      params:\n        a int\n          the first\n        b string\n"
            ));
        }
        content.push_str("  types:\n");
        for t in 0..5 {
            content.push_str(&format!("    t{t}\n      type number {t}\n\n      spans lines\n      fields:\n"));
            for field in 0..5 {
                content.push_str(&format!("        field{field} int\n"));
            }
            content.push_str("      operators:\n        t + t = t\n      examples:\n        t.star Example\n");
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_tab_indented_content(size: usize) -> String {
    generate_outline_content(size).replace("  ", "\t")
}
