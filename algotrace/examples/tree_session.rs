// Example: build an LLRB tree key by key, then delete a few keys, checking invariants as we go.
use algotrace::{RedBlackTree, TraceStep, parse_key};

fn main() {
    let mut tree = RedBlackTree::new();
    for text in ["7", "3", "18", "10", "22", "8", "11", "26", "2", "6", "13"] {
        let Ok(key) = parse_key(text) else {
            continue;
        };
        let steps = tree.put(key, ());
        let rotations = steps.iter().filter(|s| s.kind().starts_with("rotate")).count();
        let check = steps.last().map(|s| s.state.check());
        println!(
            "put {key:>2}: {:>2} steps, {rotations} rotations, height={} {check:?}",
            steps.len(),
            tree.snapshot().height()
        );
    }

    for key in [10, 42, 7] {
        let steps = tree.delete(key);
        println!("delete {key}:");
        for step in &steps {
            println!("  {:<22} {}", step.kind(), step.message());
        }
    }
    println!("keys={:?}", tree.keys());
}
