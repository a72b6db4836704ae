//! Tests for the tree-building combinators

use std::cell::Cell;

use rstest::rstest;

use nodekit::elements::{div, li, p, span, ul};
use nodekit::util::testing;
use nodekit::{
    conditional, conditional_with, map_to_nodes, render_to_string, repeat_n, select, select_with,
    try_map_to_nodes, try_repeat_n, Node, NodeTree, TreeView,
};

fn render(node: &Node) -> String {
    render_to_string(node).expect("render node")
}

// ============================================================
// select
// ============================================================

#[rstest]
#[case(true, "yes")]
#[case(false, "no")]
fn given_condition_when_selecting_strings_then_picks_matching_branch(
    #[case] condition: bool,
    #[case] expected: &str,
) {
    assert_eq!(select(condition, "yes", "no"), expected);
}

#[rstest]
#[case(true, "<div>true</div>")]
#[case(false, "<p>false</p>")]
fn given_condition_when_selecting_nodes_then_renders_matching_branch(
    #[case] condition: bool,
    #[case] expected: &str,
) {
    // Arrange
    let true_node = div().with_text("true");
    let false_node = p().with_text("false");

    // Act
    let node = select(condition, true_node, false_node);

    // Assert
    assert_eq!(render(&node), expected);
}

#[test]
fn given_true_condition_when_selecting_class_name_then_returns_active() {
    assert_eq!(select(true, "active", "inactive"), "active");
}

#[test]
fn given_condition_when_selecting_lazily_then_only_chosen_branch_runs() {
    // Arrange
    let result_calls = Cell::new(0);
    let alternative_calls = Cell::new(0);

    // Act
    let value = select_with(
        false,
        || {
            result_calls.set(result_calls.get() + 1);
            "result"
        },
        || {
            alternative_calls.set(alternative_calls.get() + 1);
            "alternative"
        },
    );

    // Assert
    assert_eq!(value, "alternative");
    assert_eq!(result_calls.get(), 0);
    assert_eq!(alternative_calls.get(), 1);
}

#[test]
fn given_true_condition_when_selecting_lazily_then_alternative_never_runs() {
    // Arrange
    let result_calls = Cell::new(0);
    let alternative_calls = Cell::new(0);

    // Act
    let value = select_with(
        true,
        || {
            result_calls.set(result_calls.get() + 1);
            "result"
        },
        || {
            alternative_calls.set(alternative_calls.get() + 1);
            "alternative"
        },
    );

    // Assert
    assert_eq!(value, "result");
    assert_eq!(result_calls.get(), 1);
    assert_eq!(alternative_calls.get(), 0);
}

// ============================================================
// conditional
// ============================================================

#[rstest]
#[case(true, "<div>content</div>")]
#[case(false, "")]
fn given_condition_when_conditional_then_renders_node_or_nothing(
    #[case] condition: bool,
    #[case] expected: &str,
) {
    let node = conditional(condition, div().with_text("content"));
    assert_eq!(render(&node), expected);
}

#[test]
fn given_false_condition_when_conditional_then_result_is_usable_tree_member() {
    // Arrange
    let hidden = conditional(false, div().with_text("x"));

    // Act
    let page = div().child(hidden).child(p().with_text("main"));

    // Assert
    assert_eq!(render(&page), "<div><p>main</p></div>");
    assert_eq!(page.child_count(), 2);
}

#[test]
fn given_false_condition_when_conditional_lazily_then_factory_not_called() {
    let mut calls = 0;
    let node = conditional_with(false, || {
        calls += 1;
        div().with_text("expensive")
    });

    assert!(node.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn given_true_condition_when_conditional_lazily_then_returns_built_node() {
    let node = conditional_with(true, || div().with_text("built"));
    assert_eq!(render(&node), "<div>built</div>");
}

// ============================================================
// repeat_n
// ============================================================

#[rstest]
#[case(-5, "")]
#[case(0, "")]
#[case(1, "<div>item</div>")]
#[case(3, "<div>item</div><div>item</div><div>item</div>")]
fn given_count_when_repeating_then_renders_count_copies(#[case] n: i64, #[case] expected: &str) {
    let node = repeat_n(n, || div().with_text("item"));
    assert_eq!(render(&node), expected);
}

#[rstest]
#[case(-1, 0)]
#[case(0, 0)]
#[case(4, 4)]
fn given_count_when_repeating_then_factory_called_exactly_count_times(
    #[case] n: i64,
    #[case] expected_calls: usize,
) {
    // Arrange
    let mut calls = 0;

    // Act
    let node: Node = repeat_n(n, || {
        calls += 1;
        li().with_text("x")
    });

    // Assert
    assert_eq!(calls, expected_calls);
    assert_eq!(node.child_count(), expected_calls);
}

#[test]
fn given_list_item_factory_when_repeating_three_times_then_renders_three_items() {
    let node = repeat_n(3, || li().with_text("x"));
    assert_eq!(render(&node), "<li>x</li><li>x</li><li>x</li>");
}

#[test]
fn given_stateful_factory_when_repeating_then_children_follow_call_order() {
    // Each child must come from its own factory call, not a shared instance
    let mut counter = 0;
    let node = repeat_n(3, || {
        counter += 1;
        li().with_text(counter.to_string())
    });

    assert_eq!(render(&node), "<li>1</li><li>2</li><li>3</li>");
    let children = node.child_nodes();
    assert_ne!(children[0], children[1]);
    assert_ne!(children[1], children[2]);
}

#[test]
fn given_repeated_node_when_mutating_one_child_then_siblings_unchanged() {
    // Arrange
    let node = repeat_n(2, || div().with_text("same"));
    let mut children: Vec<Node> = node.child_nodes().to_vec();

    // Act
    children[0] = children[0].clone().with_text("!");

    // Assert
    assert_eq!(render(&children[0]), "<div>same!</div>");
    assert_eq!(render(&children[1]), "<div>same</div>");
}

// ============================================================
// map_to_nodes
// ============================================================

#[rstest]
#[case(vec![], "")]
#[case(vec!["apple"], "<li>apple</li>")]
#[case(vec!["apple", "banana", "cherry"], "<li>apple</li><li>banana</li><li>cherry</li>")]
fn given_items_when_mapping_then_renders_in_input_order(
    #[case] input: Vec<&str>,
    #[case] expected: &str,
) {
    let node = map_to_nodes(input, |s| li().with_text(s));
    assert_eq!(render(&node), expected);
}

#[test]
fn given_letters_when_mapping_to_list_items_then_renders_abc() {
    let node = map_to_nodes(["a", "b", "c"], |s| li().with_text(s));
    assert_eq!(render(&node), "<li>a</li><li>b</li><li>c</li>");
}

#[test]
fn given_empty_sequence_when_mapping_then_renders_empty_string() {
    let input: Vec<String> = Vec::new();
    let node = map_to_nodes(input, |s| li().with_text(s));
    assert_eq!(render(&node), "");
    assert!(node.is_empty());
}

#[test]
fn given_transform_with_branching_when_mapping_then_applies_per_item() {
    let node = map_to_nodes(["apple", "banana"], |s| {
        li().with_text(s)
            .child(conditional(s == "apple", span().with_text(" (popular)")))
    });
    assert_eq!(
        render(&node),
        "<li>apple<span> (popular)</span></li><li>banana</li>"
    );
}

#[test]
fn given_integers_when_mapping_then_renders_each_number() {
    let node = map_to_nodes(vec![1, 2, 3], |n| div().with_text(n.to_string()));
    assert_eq!(render(&node), "<div>1</div><div>2</div><div>3</div>");
}

#[test]
fn given_transform_returning_empty_nodes_when_mapping_then_still_one_child_per_item() {
    let node = map_to_nodes(0..4, |_| Node::empty());
    assert_eq!(node.child_count(), 4);
    assert_eq!(render(&node), "");
}

#[test]
fn given_duplicate_items_when_mapping_then_keeps_duplicates() {
    let node = map_to_nodes(["a", "a", "b"], |s| li().with_text(s));
    assert_eq!(render(&node), "<li>a</li><li>a</li><li>b</li>");
}

#[test]
fn given_nested_combinators_when_building_then_composes_as_plain_calls() {
    // Arrange
    testing::init_test_setup();
    let rows = ["x", "y"];

    // Act
    let table = ul().child(map_to_nodes(rows, |row| {
        li().child(repeat_n(2, || span().with_text(row)))
    }));

    // Assert
    assert_eq!(
        render(&table),
        "<ul><li><span>x</span><span>x</span></li><li><span>y</span><span>y</span></li></ul>"
    );
}

#[test]
fn given_same_inputs_when_building_twice_then_renderings_identical() {
    let build = || {
        div()
            .attr("class", select(true, "active", "inactive"))
            .child(conditional(false, p().with_text("hidden")))
            .child(repeat_n(2, || span().with_text("s")))
            .child(map_to_nodes(["a", "b"], |s| li().with_text(s)))
    };
    assert_eq!(render(&build()), render(&build()));
}

// ============================================================
// fallible variants
// ============================================================

#[test]
fn given_ok_factory_when_try_repeating_then_collects_all() {
    let node: Result<Node, String> = try_repeat_n(2, || Ok(li().with_text("ok")));
    assert_eq!(render(&node.unwrap()), "<li>ok</li><li>ok</li>");
}

#[test]
fn given_failing_factory_when_try_repeating_then_stops_at_first_error() {
    // Arrange
    let mut calls = 0;

    // Act
    let result: Result<Node, String> = try_repeat_n(5, || {
        calls += 1;
        if calls == 2 {
            Err(format!("failed at call {}", calls))
        } else {
            Ok(li().with_text("ok"))
        }
    });

    // Assert
    assert_eq!(result.unwrap_err(), "failed at call 2");
    assert_eq!(calls, 2);
}

#[test]
fn given_parse_failure_when_try_mapping_then_propagates_caller_error() {
    // Arrange
    let mut visited = Vec::new();

    // Act
    let result = try_map_to_nodes(["1", "x", "3"], |s| {
        visited.push(s);
        s.parse::<u32>().map(|n| li().with_text(n.to_string()))
    });

    // Assert
    assert!(result.is_err());
    assert_eq!(visited, vec!["1", "x"]);
}

#[test]
fn given_valid_input_when_try_mapping_then_renders_all() {
    let result = try_map_to_nodes(["1", "2"], |s| {
        s.parse::<u32>().map(|n| li().with_text(n.to_string()))
    });
    assert_eq!(render(&result.unwrap()), "<li>1</li><li>2</li>");
}

// ============================================================
// other node trees
// ============================================================

#[test]
fn given_tree_view_when_repeating_then_builds_leaves_in_order() {
    let mut counter = 0;
    let tree: TreeView = repeat_n(3, || {
        counter += 1;
        TreeView::leaf(format!("leaf{}", counter))
    });

    let leaves: Vec<&str> = tree.0.leaves.iter().map(|l| l.root.as_str()).collect();
    assert_eq!(leaves, vec!["leaf1", "leaf2", "leaf3"]);
}

#[test]
fn given_false_condition_when_conditional_on_tree_view_then_renders_empty_string() {
    let tree = conditional(false, TreeView::leaf("x"));
    assert_eq!(tree.to_string(), "");
}

#[test]
fn given_tree_view_container_when_displayed_then_prints_only_leaves() {
    let tree = repeat_n(2, || TreeView::leaf("a"));
    assert_eq!(tree.to_string(), "a\na\n");
}

#[test]
fn given_containers_appended_to_tree_view_when_displayed_then_spliced_without_blank_lines() {
    // Arrange
    let mut list = TreeView::leaf("list");

    // Act
    list.append_child(map_to_nodes(["a", "b"], |s| TreeView::leaf(s)));
    list.append_child(conditional(false, TreeView::leaf("hidden")));

    // Assert
    assert_eq!(list.0.leaves.len(), 2);
    assert_eq!(list.to_string(), "list\n├── a\n└── b\n");
}
