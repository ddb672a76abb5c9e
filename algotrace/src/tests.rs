use crate::*;

use crate::dijkstra::NodeStatus;
use crate::llrb::LlrbEvent;
use crate::n_queens::{Conflict, QueensEvent};
use crate::union_find::{Operation, UnionFindEvent};
use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

const SAMPLE: [i64; 7] = [38, 27, 43, 3, 9, 82, 10];
const SORTED_SAMPLE: [i64; 7] = [3, 9, 10, 27, 38, 43, 82];
const TREE_KEYS: [i64; 11] = [7, 3, 18, 10, 22, 8, 11, 26, 2, 6, 13];

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort();
    v
}

fn kinds<S: TraceStep>(steps: &[S]) -> Vec<&'static str> {
    steps.iter().map(|s| s.kind()).collect()
}

#[test]
fn quick_sort_sorts_sample() {
    let steps = quick_sort::trace(&SAMPLE);
    let last = steps.last().expect("trace is never empty");
    assert_eq!(last.kind(), "complete");
    assert_eq!(last.state.array, SORTED_SAMPLE);
    assert_eq!(last.state.sorted, (0..SAMPLE.len()).collect::<Vec<_>>());
    assert_eq!(steps[0].kind(), "start");
    assert_eq!(steps[0].state.range, Some(Span::new(0, 6)));
    assert_eq!(steps[0].state.array, SAMPLE);
}

#[test]
fn quick_sort_is_deterministic() {
    assert_eq!(quick_sort::trace(&SAMPLE), quick_sort::trace(&SAMPLE));
}

#[test]
fn every_engine_is_deterministic() {
    assert_eq!(merge_sort::trace(&SAMPLE), merge_sort::trace(&SAMPLE));
    assert_eq!(heap_sort::trace(&SAMPLE), heap_sort::trace(&SAMPLE));

    let graph = Graph::dijkstra_sample();
    assert_eq!(dijkstra::trace(&graph, &'A'), dijkstra::trace(&graph, &'A'));
    let graph = Graph::kruskal_sample();
    assert_eq!(kruskal::trace(&graph), kruskal::trace(&graph));

    assert_eq!(n_queens::trace(8), n_queens::trace(8));

    let build = || {
        let mut tree = RedBlackTree::new();
        let mut steps = Vec::new();
        for key in TREE_KEYS {
            steps.extend(tree.put(key, ()));
        }
        steps.extend(tree.delete(10));
        steps
    };
    assert_eq!(build(), build());

    let a = UnionFind::walkthrough().expect("in range");
    let b = UnionFind::walkthrough().expect("in range");
    assert_eq!(a.operation_states(), b.operation_states());
}

#[test]
fn quick_sort_empty_and_singleton() {
    assert_eq!(kinds(&quick_sort::trace(&[])), vec!["empty", "complete"]);
    assert_eq!(
        kinds(&quick_sort::trace(&[5])),
        vec!["start", "sorted", "complete"]
    );
}

#[test]
fn quick_sort_swap_pairs_straddle_the_exchange() {
    let steps = quick_sort::trace(&SAMPLE);
    for pair in steps.windows(2) {
        if let quick_sort::QuickSortEvent::Swap { i, j } = pair[0].event {
            assert_eq!(
                pair[1].event,
                quick_sort::QuickSortEvent::Swapped { i, j }
            );
            assert_eq!(pair[0].state.array[i], pair[1].state.array[j]);
            assert_eq!(pair[0].state.array[j], pair[1].state.array[i]);
        }
    }
}

#[test]
fn quick_sort_pivot_placed_is_final() {
    let steps = quick_sort::trace(&SAMPLE);
    for step in &steps {
        if let quick_sort::QuickSortEvent::PivotPlaced { index } = step.event {
            assert_eq!(step.state.array[index], SORTED_SAMPLE[index]);
        }
    }
}

#[test]
fn merge_sort_sorts_sample() {
    let steps = merge_sort::trace(&SAMPLE);
    let last = steps.last().expect("trace is never empty");
    assert_eq!(last.kind(), "complete");
    assert_eq!(last.state.array, SORTED_SAMPLE);
    assert_eq!(steps[0].kind(), "divide");
    assert_eq!(steps[0].state.depth, 0);
}

#[test]
fn merge_sort_after_merge_writes_sorted_run() {
    let steps = merge_sort::trace(&SAMPLE);
    let mut seen = 0;
    for step in &steps {
        if step.kind() != "after-merge" {
            continue;
        }
        seen += 1;
        let range = step.state.range.expect("after-merge carries its range");
        let run = &step.state.array[range.start..=range.end];
        assert_eq!(run, step.state.merged.as_slice());
        assert!(run.windows(2).all(|w| w[0] <= w[1]));
    }
    // One merge per internal node of the call tree.
    assert_eq!(seen, SAMPLE.len() - 1);
}

#[test]
fn merge_sort_depth_follows_call_tree() {
    let steps = merge_sort::trace(&[4, 3, 2, 1]);
    let divides: Vec<_> = steps
        .iter()
        .filter(|s| s.kind() == "divide")
        .map(|s| (s.state.depth, s.state.range.map(|r| (r.start, r.end))))
        .collect();
    assert_eq!(
        divides,
        vec![(0, Some((0, 3))), (1, Some((0, 1))), (1, Some((2, 3)))]
    );
}

#[test]
fn merge_sort_empty_input_only_completes() {
    assert_eq!(kinds(&merge_sort::trace(&[])), vec!["complete"]);
}

#[test]
fn heap_sort_sorts_sample() {
    let steps = heap_sort::trace(&SAMPLE);
    let last = steps.last().expect("trace is never empty");
    assert_eq!(last.kind(), "complete");
    assert_eq!(last.state.heap, SORTED_SAMPLE);
    assert_eq!(last.state.sorted, SORTED_SAMPLE);
    assert_eq!(kinds(&steps[..2]), vec!["initial", "phase-change"]);
}

#[test]
fn heap_sort_extracts_maxima_in_order() {
    let steps = heap_sort::trace(&SAMPLE);
    let extracted: Vec<i64> = steps
        .iter()
        .filter_map(|s| match s.event {
            heap_sort::HeapSortEvent::Extract { value, .. } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(extracted, vec![82, 43, 38, 27, 10, 9]);
}

#[test]
fn heap_sort_sorted_tail_grows_monotonically() {
    let steps = heap_sort::trace(&SAMPLE);
    let mut prev = 0;
    for step in &steps {
        assert!(step.state.sorted.len() >= prev);
        prev = step.state.sorted.len();
        let tail = &step.state.heap[step.state.heap_size..];
        if step.kind() != "complete" {
            assert_eq!(tail, step.state.sorted.as_slice());
        }
    }
}

#[test]
fn dijkstra_sample_distances() {
    let graph = Graph::dijkstra_sample();
    let steps = dijkstra::trace(&graph, &'A').expect("A is in the sample graph");
    let last = steps.last().expect("trace is never empty");
    assert_eq!(last.kind(), "complete");

    let expected = [
        ('A', 0),
        ('B', 4),
        ('C', 7),
        ('D', 7),
        ('E', 9),
        ('F', 8),
        ('G', 3),
        ('H', 10),
    ];
    for (node, d) in expected {
        assert_eq!(last.state.distance(&node), Distance::Finite(d), "{node}");
    }
    assert_eq!(
        last.state.path_to(&'H'),
        Some(vec!['A', 'B', 'C', 'E', 'H'])
    );
    assert!(last.state.queue.is_empty());
    assert!(last.state.status.values().all(|s| *s == NodeStatus::Path));
}

#[test]
fn dijkstra_predecessors_are_consistent() {
    let graph = Graph::dijkstra_sample();
    let steps = dijkstra::trace(&graph, &'A').expect("A is in the sample graph");
    let state = &steps.last().expect("trace is never empty").state;
    for (node, prev) in &state.previous {
        let edge = graph
            .edges()
            .iter()
            .find(|e| e.source == *prev && e.target == *node)
            .expect("predecessor is joined by an edge");
        let via = state.distance(prev).finite().expect("finite") + u64::from(edge.weight);
        assert_eq!(state.distance(node), Distance::Finite(via));
    }
}

#[test]
fn dijkstra_visits_in_nondecreasing_distance() {
    let graph = Graph::dijkstra_sample();
    let steps = dijkstra::trace(&graph, &'A').expect("A is in the sample graph");
    let visits: Vec<u64> = steps
        .iter()
        .filter_map(|s| match s.event {
            dijkstra::DijkstraEvent::Visit { distance, .. } => Some(distance),
            _ => None,
        })
        .collect();
    assert_eq!(visits.len(), 8);
    assert!(visits.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn dijkstra_unreachable_node_stays_infinite() {
    let graph = Graph::new(
        vec![1u32, 2, 3],
        vec![Edge::new(1, 2, 5), Edge::new(3, 1, 1)],
    )
    .expect("valid graph");
    let steps = dijkstra::trace(&graph, &1).expect("1 is in the graph");
    let state = &steps.last().expect("trace is never empty").state;
    assert_eq!(state.distance(&3), Distance::Infinite);
    assert_eq!(state.path_to(&3), None);
    assert_eq!(state.status[&3], NodeStatus::Unvisited);
    assert_eq!(Distance::Infinite.to_string(), "∞");
}

#[test]
fn dijkstra_rejects_unknown_start() {
    let graph = Graph::dijkstra_sample();
    assert_eq!(
        dijkstra::trace(&graph, &'Z'),
        Err(InputError::UnknownNode { node: "Z".into() })
    );
}

#[test]
fn graph_rejects_bad_edges() {
    assert_eq!(
        Graph::new(vec!['A'], vec![Edge::new('A', 'B', 1)]),
        Err(InputError::UnknownNode { node: "B".into() })
    );
    assert_eq!(
        Graph::new(vec!['A', 'B'], vec![Edge::new('A', 'B', 0)]),
        Err(InputError::NonPositiveWeight {
            from: "A".into(),
            to: "B".into()
        })
    );
}

#[test]
fn kruskal_sample_mst() {
    let graph = Graph::kruskal_sample();
    let steps = kruskal::trace(&graph);
    let last = steps.last().expect("trace is never empty");
    assert_eq!(
        last.event,
        kruskal::KruskalEvent::Complete { total_weight: 15 }
    );
    assert_eq!(last.state.mst.len(), graph.nodes().len() - 1);
    let weights: Vec<u32> = last.state.mst.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1, 2, 3, 4, 5]);
    assert!(last.state.pending.is_empty());
    // One step per edge plus start and complete.
    assert_eq!(steps.len(), graph.edges().len() + 2);
}

#[test]
fn kruskal_pending_queue_shrinks_in_weight_order() {
    let steps = kruskal::trace(&Graph::kruskal_sample());
    assert_eq!(steps[0].state.pending.len(), 9);
    for pair in steps.windows(2).take(9) {
        assert_eq!(pair[1].state.pending.len() + 1, pair[0].state.pending.len());
        let current = pair[1].state.current.as_ref().expect("edge step");
        assert_eq!(Some(current), pair[0].state.pending.first());
    }
    let rejected = steps.iter().filter(|s| s.kind() == "reject-cycle").count();
    assert_eq!(rejected, 4);
}

#[test]
fn union_find_initial_state() {
    let uf = UnionFind::new(5);
    assert_eq!(uf.parent(), &[0, 1, 2, 3, 4]);
    assert_eq!(uf.size(), &[1, 1, 1, 1, 1]);
    let steps = uf.operation_states();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].event, UnionFindEvent::Initialized { elements: 5 });
    assert_eq!(steps[0].message, "Initialized Union-Find with 5 elements");
}

#[test]
fn union_find_weighted_union_ties_keep_first_root() {
    let mut uf = UnionFind::new(4);
    assert_eq!(uf.union(0, 1), Ok(true));
    assert_eq!(uf.parent()[1], 0);
    assert_eq!(uf.size()[0], 2);

    // Smaller tree goes under the larger even when it is the first argument.
    assert_eq!(uf.union(2, 0), Ok(true));
    assert_eq!(uf.parent()[2], 0);
    assert_eq!(uf.size()[0], 3);

    assert_eq!(uf.union(1, 2), Ok(false));
    assert_eq!(
        uf.operation_states().last().map(|s| s.event.clone()),
        Some(UnionFindEvent::NoUnion { root: 0 })
    );
}

#[test]
fn union_find_walkthrough() {
    let uf = UnionFind::walkthrough().expect("script indices are in range");
    assert_eq!(uf.operations().len(), 12);
    assert_eq!(uf.operation_states().len(), 35);
    assert!((0..10).all(|i| uf.root_of(i) == Ok(0)));
    // 3 hung under 2 before 2 joined 0 and was never searched for afterwards.
    assert_eq!(uf.parent()[3], 2);
    assert_eq!(uf.size()[0], 10);

    let compressed: Vec<(usize, usize)> = uf
        .operation_states()
        .iter()
        .filter_map(|s| match s.event {
            UnionFindEvent::Compression {
                node, old_parent, ..
            } => Some((node, old_parent)),
            _ => None,
        })
        .collect();
    assert_eq!(compressed, vec![(7, 6), (6, 4), (5, 4), (9, 8)]);
}

#[test]
fn union_find_find_compresses_path() {
    let mut uf =
        UnionFind::from_script(4, &[Operation::Union(0, 1), Operation::Union(2, 3)])
            .expect("in range");
    uf.union(0, 2).expect("in range");
    assert_eq!(uf.parent(), &[0, 0, 0, 2]);

    let before = uf.operation_states().len();
    assert_eq!(uf.find(3), Ok(0));
    let new = &uf.operation_states()[before..];
    assert_eq!(kinds(new), vec!["compression", "find"]);
    assert_eq!(new[1].message, "Find(3) = 0");
    assert_eq!(uf.parent(), &[0, 0, 0, 0]);

    // Already flat: only the find step.
    let before = uf.operation_states().len();
    uf.find(3).expect("in range");
    assert_eq!(kinds(&uf.operation_states()[before..]), vec!["find"]);
}

#[test]
fn union_find_read_only_queries_do_not_record() {
    let mut uf = UnionFind::new(3);
    uf.union(0, 1).expect("in range");
    let before = uf.operation_states().len();
    assert_eq!(uf.connected(0, 1), Ok(true));
    assert_eq!(uf.connected(0, 2), Ok(false));
    assert_eq!(uf.root_of(1), Ok(0));
    assert_eq!(uf.operation_states().len(), before);
}

#[test]
fn union_find_rejects_out_of_range() {
    let mut uf = UnionFind::new(3);
    let err = InputError::ElementOutOfRange { element: 3, len: 3 };
    assert_eq!(uf.union(0, 3), Err(err.clone()));
    assert_eq!(uf.find(3), Err(err));
    assert_eq!(uf.operation_states().len(), 1);
    assert!(uf.operations().is_empty());
}

#[test]
fn union_find_reset() {
    let mut uf = UnionFind::walkthrough().expect("in range");
    uf.reset(3);
    assert_eq!(uf.len(), 3);
    assert_eq!(uf.parent(), &[0, 1, 2]);
    assert_eq!(uf.operation_states().len(), 1);
    assert!(uf.operations().is_empty());
}

#[test]
fn llrb_inserts_keep_invariants() {
    let mut tree = RedBlackTree::new();
    for (i, key) in TREE_KEYS.into_iter().enumerate() {
        let steps = tree.put(key, i);
        let last = steps.last().expect("put always records");
        assert_eq!(last.kind(), "set-root-black");
        assert_eq!(last.state.check(), Ok(()), "after inserting {key}");
        assert_eq!(steps[0].event, LlrbEvent::InsertStart { key });
        assert!(steps.iter().any(|s| s.event == LlrbEvent::Create { key }));
    }
    assert_eq!(tree.len(), TREE_KEYS.len());
    assert_eq!(tree.keys(), sorted(&TREE_KEYS));
    assert_eq!(tree.min_key(), Some(2));
    assert_eq!(tree.get(22), Some(&4));
    assert_eq!(tree.snapshot().keys(), tree.keys());
}

#[test]
fn llrb_ascending_inserts_rotate_and_flip() {
    let mut tree = RedBlackTree::new();
    tree.put(1, ());
    let steps = tree.put(2, ());
    assert!(steps.iter().any(|s| s.kind() == "rotate-left"));
    let steps = tree.put(3, ());
    assert!(steps.iter().any(|s| s.kind() == "flip-colors"));
    let snap = tree.snapshot();
    assert_eq!(snap.root().map(|n| n.key), Some(2));
    assert_eq!(snap.check(), Ok(()));
    assert_eq!(snap.black_height(), Some(2));
}

#[test]
fn llrb_update_does_not_restructure() {
    let mut tree = RedBlackTree::new();
    for key in TREE_KEYS {
        tree.put(key, 0);
    }
    let before = tree.snapshot();
    let steps = tree.put(10, 99);
    assert!(steps.iter().any(|s| s.event == LlrbEvent::Update { key: 10 }));
    assert!(!steps.iter().any(|s| s.kind() == "create"));
    assert_eq!(tree.len(), TREE_KEYS.len());
    assert_eq!(tree.get(10), Some(&99));
    assert_eq!(tree.snapshot().keys(), before.keys());
    assert_eq!(tree.snapshot().height(), before.height());
}

#[test]
fn llrb_deletes_keep_invariants() {
    let mut tree = RedBlackTree::new();
    for key in TREE_KEYS {
        tree.put(key, ());
    }
    let mut remaining: BTreeSet<i64> = TREE_KEYS.into_iter().collect();
    for key in [10, 2, 26, 7, 13, 3, 18, 8, 22, 6, 11] {
        let steps = tree.delete(key);
        remaining.remove(&key);
        let last = steps.last().expect("delete always records");
        assert_eq!(last.state.check(), Ok(()), "after deleting {key}");
        assert_eq!(
            last.state.keys(),
            remaining.iter().copied().collect::<Vec<_>>()
        );
        assert!(!tree.contains(key));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn llrb_delete_last_key_empties_tree() {
    let mut tree = RedBlackTree::new();
    tree.put(5, ());
    let steps = tree.delete(5);
    let last = steps.last().expect("delete always records");
    assert_eq!(last.event, LlrbEvent::Emptied { key: 5 });
    assert!(last.state.is_empty());
}

#[test]
fn llrb_delete_absent_key_is_noop() {
    let mut tree = RedBlackTree::new();
    for key in TREE_KEYS {
        tree.put(key, ());
    }
    let before = tree.snapshot();
    let steps = tree.delete(100);
    assert_eq!(kinds(&steps), vec!["delete", "not-found"]);
    assert_eq!(steps[1].state, before);
    assert_eq!(tree.snapshot(), before);

    let mut empty: RedBlackTree<()> = RedBlackTree::new();
    assert_eq!(kinds(&empty.delete(1)), vec!["delete", "not-found"]);
}

#[test]
fn llrb_snapshots_are_independent() {
    let mut tree = RedBlackTree::new();
    let first = tree.put(1, ());
    tree.put(2, ());
    tree.put(3, ());
    let last = first.last().expect("put always records");
    assert_eq!(last.state.keys(), vec![1]);
}

#[test]
fn llrb_random_ops_match_btreeset() {
    let mut rng = Lcg::new(0x5eed);
    let mut tree = RedBlackTree::new();
    let mut model = BTreeSet::new();
    for _ in 0..400 {
        let key = rng.gen_range_i64(0, 64);
        let steps = if rng.gen_bool() || model.is_empty() {
            model.insert(key);
            tree.put(key, key * 2)
        } else {
            model.remove(&key);
            tree.delete(key)
        };
        let state = &steps.last().expect("always records").state;
        assert_eq!(state.check(), Ok(()));
        assert_eq!(tree.keys(), model.iter().copied().collect::<Vec<_>>());
        assert_eq!(tree.len(), model.len());
    }
    for key in model {
        assert_eq!(tree.get(key), Some(&(key * 2)));
    }
}

#[test]
fn snapshot_check_reports_violations() {
    let leaf = |key, color| {
        Some(Box::new(TreeNode {
            key,
            value: (),
            color,
            left: None,
            right: None,
        }))
    };
    let right_red = TreeSnapshot {
        root: Some(Box::new(TreeNode {
            key: 2,
            value: (),
            color: Color::Black,
            left: None,
            right: leaf(3, Color::Red),
        })),
    };
    assert_eq!(
        right_red.check(),
        Err(InvariantViolation::RightLeaningRed { key: 2 })
    );

    let unbalanced = TreeSnapshot {
        root: Some(Box::new(TreeNode {
            key: 2,
            value: (),
            color: Color::Black,
            left: leaf(1, Color::Black),
            right: None,
        })),
    };
    assert!(!unbalanced.is_balanced());
    assert_eq!(unbalanced.check(), Err(InvariantViolation::Unbalanced));

    let red_root = TreeSnapshot {
        root: leaf(1, Color::Red),
    };
    assert_eq!(red_root.check(), Err(InvariantViolation::RedRoot));
}

#[test]
fn n_queens_first_solution_is_valid() {
    for n in 4..=12 {
        let steps = n_queens::trace(n);
        let last = steps.last().expect("trace is never empty");
        assert_eq!(last.event, QueensEvent::SolutionFound, "n = {n}");
        assert_eq!(last.state.queens(), n);
        assert!(last.state.is_solution(), "n = {n}");
        assert_eq!(
            steps.iter().filter(|s| s.kind() == "solution-found").count(),
            1
        );
    }
}

#[test]
fn n_queens_four_trace_shape() {
    let steps = n_queens::trace(4);
    assert_eq!(steps[0].event, QueensEvent::Start { size: 4 });
    assert_eq!(steps[0].state.board, vec![None; 4]);
    assert_eq!(steps[1].event, QueensEvent::Placed { row: 0, col: 0 });
    assert_eq!(
        steps[2].event,
        QueensEvent::Rejected {
            row: 1,
            col: 0,
            conflict: Conflict::Column { row: 0 }
        }
    );
    assert_eq!(
        steps[3].event,
        QueensEvent::Rejected {
            row: 1,
            col: 1,
            conflict: Conflict::Diagonal { row: 0 }
        }
    );
    let last = steps.last().expect("trace is never empty");
    assert_eq!(
        last.state.board,
        vec![Some(1), Some(3), Some(0), Some(2)]
    );
    assert!(steps.iter().any(|s| s.kind() == "backtrack"));
}

#[test]
fn n_queens_rejected_steps_do_not_mutate() {
    let steps = n_queens::trace(6);
    for pair in steps.windows(2) {
        if pair[1].kind() == "rejected" {
            assert_eq!(pair[0].state.board, pair[1].state.board);
        }
    }
}

#[test]
fn input_gate() {
    assert_eq!(parse_values("5, 3 8,,1"), Ok(vec![5, 3, 8, 1]));
    assert_eq!(parse_values("  "), Err(InputError::Empty));
    assert_eq!(
        parse_values("4, x"),
        Err(InputError::NotANumber { token: "x".into() })
    );
    assert_eq!(parse_key(" -7 "), Ok(-7));
    assert_eq!(parse_key(""), Err(InputError::MissingKey));

    let limits = TraceLimits::default();
    assert_eq!(cap_len((0..30).collect(), limits.heap_sort_len).len(), 15);
    assert_eq!(cap_len(vec![1, 2], limits.merge_sort_len), vec![1, 2]);
    assert_eq!(board_size(8, &limits), Ok(8));
    assert_eq!(
        board_size(13, &limits),
        Err(InputError::BoardSize {
            size: 13,
            min: 4,
            max: 12
        })
    );
    let wide = TraceLimits::new().with_queens_board(1..=20);
    assert_eq!(board_size(13, &wide), Ok(13));
}

#[test]
fn union_find_element_count_is_capped() {
    let limits = TraceLimits::default();
    assert_eq!(element_count(500, &limits), 20);
    assert_eq!(element_count(10, &limits), 10);
    assert_eq!(element_count(0, &limits), 0);
    let uf = UnionFind::new(element_count(500, &limits));
    assert_eq!(uf.len(), 20);
    let small = TraceLimits::new().with_union_find_elements(8);
    assert_eq!(element_count(10, &small), 8);
}

#[test]
fn random_values_are_seeded_and_bounded() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let a = random_values(&mut ChaCha8Rng::seed_from_u64(7), 12, 1..=99);
    let b = random_values(&mut ChaCha8Rng::seed_from_u64(7), 12, 1..=99);
    assert_eq!(a, b);
    assert_eq!(a.len(), 12);
    assert!(a.iter().all(|v| (1..=99).contains(v)));
}

#[test]
fn messages_match_operands() {
    let steps = merge_sort::trace(&[2, 1]);
    let messages: Vec<&str> = steps.iter().map(|s| s.message()).collect();
    assert_eq!(
        messages,
        vec![
            "Dividing array [2, 1] at index 0",
            "Merging left [2] and right [1]",
            "Comparing 2 > 1: Choose 1 from right array",
            "Adding remaining element 2 from left array",
            "Merged subarray: [1, 2]",
            "Array sorted completely!",
        ]
    );
}

#[cfg(feature = "serde")]
#[test]
fn steps_serialize() {
    let steps = quick_sort::trace(&[3, 1, 2]);
    let json = serde_json::to_string(&steps).expect("serialize");
    let back: Vec<quick_sort::QuickSortStep> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, steps);

    let mut tree = RedBlackTree::new();
    let steps = tree.put(1, "one".to_string());
    let json = serde_json::to_string(&steps).expect("serialize");
    assert!(json.contains("\"InsertStart\""));
}

#[cfg(feature = "serde")]
#[test]
fn graph_deserialization_is_validated() {
    let graph = Graph::kruskal_sample();
    let json = serde_json::to_string(&graph).expect("serialize");
    let back: Graph<char> = serde_json::from_str(&json).expect("valid graph");
    assert_eq!(back, graph);

    let zero = r#"{"nodes":["A","B"],"edges":[{"source":"A","target":"B","weight":0}]}"#;
    assert!(serde_json::from_str::<Graph<char>>(zero).is_err());
    let unknown = r#"{"nodes":["A"],"edges":[{"source":"A","target":"C","weight":2}]}"#;
    assert!(serde_json::from_str::<Graph<char>>(unknown).is_err());
}

proptest! {
    #[test]
    fn sorting_engines_agree(values in prop::collection::vec(-50i64..50, 0..20)) {
        let expected = sorted(&values);
        let quick = quick_sort::trace(&values);
        prop_assert_eq!(&quick.last().unwrap().state.array, &expected);
        let heap = heap_sort::trace(&values);
        prop_assert_eq!(&heap.last().unwrap().state.heap, &expected);
        if values.len() <= 8 {
            let merge = merge_sort::trace(&values);
            prop_assert_eq!(&merge.last().unwrap().state.array, &expected);
        }
    }

    #[test]
    fn quick_sort_steps_are_permutations(values in prop::collection::vec(0i64..10, 1..12)) {
        let expected = sorted(&values);
        for step in quick_sort::trace(&values) {
            prop_assert_eq!(sorted(&step.state.array), expected.clone());
        }
    }

    #[test]
    fn union_find_matches_naive_components(
        ops in prop::collection::vec((0usize..12, 0usize..12, any::<bool>()), 0..40)
    ) {
        let mut uf = UnionFind::new(12);
        let mut label: Vec<usize> = (0..12).collect();
        for (a, b, is_union) in ops {
            if is_union {
                let merged = uf.union(a, b).unwrap();
                prop_assert_eq!(merged, label[a] != label[b]);
                let (from, to) = (label[b], label[a]);
                for l in label.iter_mut() {
                    if *l == from {
                        *l = to;
                    }
                }
            } else {
                let mut path = vec![a];
                let mut cur = a;
                while uf.parent()[cur] != cur {
                    cur = uf.parent()[cur];
                    path.push(cur);
                }
                let root = uf.find(a).unwrap();
                prop_assert_eq!(path.last().copied(), Some(root));
                for node in path {
                    prop_assert_eq!(uf.parent()[node], root);
                }
            }
        }
        for a in 0..12 {
            for b in 0..12 {
                prop_assert_eq!(uf.connected(a, b).unwrap(), label[a] == label[b]);
            }
        }
        for r in (0..12).filter(|&i| uf.parent()[i] == i) {
            let members = (0..12).filter(|&i| uf.root_of(i) == Ok(r)).count();
            prop_assert_eq!(uf.size()[r], members);
        }
    }
}
