//! Basic usage example of the linewise library

use linewise_core::{diff, DiffCache, DiffOptions, SplitView, UnifiedView};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Linewise Examples ===\n");

    // Example 1: Simple line diff
    example_simple_diff();

    // Example 2: Normalization options
    example_with_options();

    // Example 3: Split and unified views
    example_views();

    // Example 4: Memoized diffing
    example_cache();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "line1\nline2\nline3";
    let modified = "line1\nlineX\nline3";

    let result = diff(original, modified, DiffOptions::default());

    println!("Summary: {}", result.summary());
    for op in &result {
        println!("  {} {}", op.marker(), op.content());
    }
    println!();
}

fn example_with_options() {
    println!("Example 2: Normalization Options");
    println!("{}", LINE);

    let original = "  Hello World  ";
    let modified = "hello world";

    let exact = diff(original, modified, DiffOptions::default());
    println!("Exact comparison:      {}", exact.summary());

    let relaxed = diff(
        original,
        modified,
        DiffOptions::new()
            .with_ignore_whitespace(true)
            .with_ignore_case(true),
    );
    println!("Trimmed, case-folded:  {}", relaxed.summary());
    println!();
}

fn example_views() {
    println!("Example 3: Split and Unified Views");
    println!("{}", LINE);

    let result = diff("a\nb\nc", "a\nx\nc", DiffOptions::default());

    println!("Unified:");
    print!("{}", UnifiedView::project(&result));

    let split = SplitView::project(&result);
    println!("Left column:");
    for row in &split.left {
        println!("  {:>3} {}", row.line_number, row.content);
    }
    println!("Right column:");
    for row in &split.right {
        println!("  {:>3} {}", row.line_number, row.content);
    }
    println!();
}

fn example_cache() {
    println!("Example 4: Memoized Diffing");
    println!("{}", LINE);

    let mut cache = DiffCache::new();
    let options = DiffOptions::default();

    // First call computes, the second returns the stored result.
    let summary = cache.diff("a\nb", "a\nc", options).summary();
    println!("First call:  {}", summary);

    let summary = cache.diff("a\nb", "a\nc", options).summary();
    println!("Second call: {}", summary);
}
