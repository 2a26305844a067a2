use skihill::descent::{Descent, choose_child, select_path_from};
use skihill::model::{BinaryTree, Direction, Segment, Side, SkiHill};
use skihill::{build_hill, select_path};
use test_case::test_case;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Hill with a root and the two given children.
fn fork(left: Segment, right: Segment) -> SkiHill {
    let mut hill = BinaryTree::new();
    let root = hill.add_root(Segment::plain(0));
    hill.add_child(root, Side::Left, left);
    hill.add_child(root, Side::Right, right);
    hill
}

// ============= Child Selection Rule =============
const L: Direction = Direction::Leeward;
const W: Direction = Direction::Windward;

#[test_case(Segment::jump(1, 5), Segment::plain(2), Side::Left ; "jump beats plain on the left")]
#[test_case(Segment::plain(1), Segment::jump(2, 5), Side::Right ; "jump beats plain on the right")]
#[test_case(Segment::jump(1, 7), Segment::jump(2, 7), Side::Right ; "equal jumps favor right")]
#[test_case(Segment::jump(1, 8), Segment::jump(2, 7), Side::Left ; "higher jump on the left")]
#[test_case(Segment::jump(1, 2), Segment::jump(2, 9), Side::Right ; "higher jump on the right")]
#[test_case(Segment::jump(1, 1), Segment::slalom(2, L), Side::Left ; "jump preempts leeward slalom")]
#[test_case(Segment::slalom(1, L), Segment::jump(2, 0), Side::Right ; "jump preempts slalom on the right")]
#[test_case(Segment::slalom(1, L), Segment::plain(2), Side::Left ; "leeward slalom beats plain")]
#[test_case(Segment::slalom(1, W), Segment::plain(2), Side::Right ; "windward slalom loses to plain")]
#[test_case(Segment::plain(1), Segment::slalom(2, L), Side::Right ; "plain loses to leeward slalom")]
#[test_case(Segment::plain(1), Segment::slalom(2, W), Side::Left ; "plain beats windward slalom")]
#[test_case(Segment::slalom(1, L), Segment::slalom(2, L), Side::Right ; "both leeward favor right")]
#[test_case(Segment::slalom(1, W), Segment::slalom(2, L), Side::Right ; "leeward right wins")]
#[test_case(Segment::slalom(1, L), Segment::slalom(2, W), Side::Left ; "windward right loses")]
#[test_case(Segment::slalom(1, W), Segment::slalom(2, W), Side::Left ; "both windward favor left")]
#[test_case(Segment::plain(1), Segment::plain(2), Side::Right ; "plain pair favors right")]
fn test_choose_child(left: Segment, right: Segment, expected: Side) {
    assert_eq!(choose_child(&left, &right), expected);

    let hill = fork(left, right);
    let expected_segment = match expected {
        Side::Left => left,
        Side::Right => right,
    };
    assert_eq!(select_path(&hill), vec![Segment::plain(0), expected_segment]);
}

// ============= Descent =============
#[test]
fn test_empty_hill_has_empty_path() {
    let hill = build_hill(Vec::<Option<&str>>::new()).unwrap();
    assert!(select_path(&hill).is_empty());
    assert_eq!(Descent::new(&hill).count(), 0);
}

#[test]
fn test_single_node_path() {
    let hill = build_hill([Some("jump-4")]).unwrap();
    assert_eq!(select_path(&hill), vec![Segment::jump(0, 4)]);
}

#[test]
fn test_single_child_forced_descent() {
    // Only a windward slalom on the left, only a plain on the right below it
    let hill = build_hill([
        Some("jump-9"),
        Some("slalom-W"), None,
        None, Some(""),
    ])
    .unwrap();
    assert_eq!(
        select_path(&hill),
        vec![Segment::jump(0, 9), Segment::slalom(1, Direction::Windward), Segment::plain(4)]
    );
}

#[test]
fn test_end_to_end_jump_preempts_slalom() {
    init_tracing();
    let hill = build_hill([
        Some(""),
        Some("jump-3"), Some("slalom-L"),
        None, None, Some(""), Some("jump-9"),
    ])
    .unwrap();

    assert_eq!(hill.num_nodes(), 5);
    assert_eq!(select_path(&hill), vec![Segment::plain(0), Segment::jump(1, 3)]);
}

#[test]
fn test_descent_from_inner_node() {
    let hill = build_hill([
        Some(""),
        Some("jump-3"), Some("slalom-L"),
        None, None, Some(""), Some("jump-9"),
    ])
    .unwrap();

    let slalom = hill.root().unwrap().right().unwrap();
    assert_eq!(
        select_path_from(&hill, slalom),
        vec![Segment::slalom(2, Direction::Leeward), Segment::jump(6, 9)]
    );
}

#[test]
fn test_descent_is_lazy_and_repeatable() {
    let hill = build_hill([Some(""), Some(""), Some("")]).unwrap();
    let mut descent = Descent::new(&hill);
    assert_eq!(descent.next(), Some(&Segment::plain(0)));
    assert_eq!(descent.next(), Some(&Segment::plain(2)));
    assert_eq!(descent.next(), None);
    assert_eq!(descent.next(), None);

    // The hill is untouched, a second descent gives the same path
    assert_eq!(select_path(&hill), select_path(&hill));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    const DEPTH: usize = 100_000;
    let mut descriptors = vec![Some("jump-1")];
    for _ in 0..DEPTH {
        descriptors.push(Some(""));
        descriptors.push(None);
    }

    let hill = build_hill(descriptors).unwrap();
    assert_eq!(hill.height(), DEPTH + 1);

    let path = select_path(&hill);
    assert_eq!(path.len(), DEPTH + 1);
    assert_eq!(path[0], Segment::jump(0, 1));
    assert_eq!(path.last().map(Segment::id), Some(2 * DEPTH - 1));
}

#[test]
fn test_deep_chain_renders() {
    const DEPTH: usize = 100_000;
    let mut descriptors = vec![Some("")];
    for _ in 0..DEPTH {
        descriptors.push(Some(""));
        descriptors.push(None);
    }

    let hill = build_hill(descriptors).unwrap();
    let rendered = hill.to_string();

    // every node plus one "(none)" marker per inner node
    assert_eq!(rendered.lines().count(), 2 * DEPTH + 1);
    assert!(rendered.starts_with("[0] \"\"\n  ├─ [1] \"\"\n"));
    assert!(rendered.contains(&format!("[{DEPTH}] \"\"\n")));
    // the root's missing right child comes after the whole left chain
    assert!(rendered.ends_with("\n  └─ (none)\n"));
    // indentation stops growing on deep levels
    assert!(rendered.lines().all(|line| line.chars().count() < 100));
}
