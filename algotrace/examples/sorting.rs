// Example: trace the three sorting engines on the same input and print each step.
use algotrace::{TraceLimits, TraceStep, cap_len, heap_sort, merge_sort, parse_values, quick_sort};

fn main() {
    let limits = TraceLimits::default();
    let values = match parse_values("38, 27, 43, 3, 9, 82, 10") {
        Ok(values) => values,
        Err(err) => {
            eprintln!("invalid input: {err}");
            return;
        }
    };

    let quick = quick_sort::trace(&cap_len(values.clone(), limits.quick_sort_len));
    println!("quicksort: {} steps", quick.len());
    for (i, step) in quick.iter().enumerate() {
        println!("  {i:>3} {:<12} {:?}  {}", step.kind(), step.state.array, step.message());
    }

    let merge = merge_sort::trace(&cap_len(values.clone(), limits.merge_sort_len));
    println!("merge sort: {} steps", merge.len());
    for step in merge.iter().filter(|s| s.kind() == "after-merge") {
        println!("  depth={} {}", step.state.depth, step.message());
    }

    let heap = heap_sort::trace(&cap_len(values, limits.heap_sort_len));
    println!(
        "heap sort: {} steps, result={:?}",
        heap.len(),
        heap.last().map(|s| &s.state.sorted)
    );
}
