//! Tests for building and mutating trees

use rstest::{fixture, rstest};

use yatree::render;
use yatree::util::testing;
use yatree::{Tree, TreeError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

//      +
//     / \
//    1   2
#[fixture]
fn sum() -> Tree<String> {
    Tree::new("+".to_string())
        .with_child("1".to_string())
        .with_child("2".to_string())
}

fn preorder(tree: &Tree<String>) -> Vec<String> {
    let mut values = Vec::new();
    tree.traverse(tree.root(), |v| values.push(v.clone())).unwrap();
    values
}

// ============================================================
// Acceptance Scenarios
// ============================================================

#[rstest]
fn given_root_with_two_children_when_traversing_then_visits_in_preorder(sum: Tree<String>) {
    assert_eq!(preorder(&sum), vec!["+", "1", "2"]);
}

#[rstest]
fn given_concatenated_subtree_when_traversing_then_subtree_follows_siblings(sum: Tree<String>) {
    let mut product = Tree::new("*".to_string());
    product.push("3".to_string()).concat(sum);

    assert_eq!(preorder(&product), vec!["*", "3", "+", "1", "2"]);
    assert_eq!(render::infix(&product).to_string(), "(3*(1+2))");
    assert_eq!(testing::check_links(&product), Ok(()));
}

#[rstest]
fn given_cloned_subtree_when_concatenating_then_original_is_untouched(sum: Tree<String>) {
    let product = Tree::new("*".to_string())
        .with_child("3".to_string())
        .with_subtree(sum.clone());

    assert_eq!(preorder(&sum), vec!["+", "1", "2"]);
    assert_eq!(sum.size(), 3);
    assert_eq!(product.size(), 5);
}

// ============================================================
// Parent / Child Lookup
// ============================================================

#[rstest]
fn given_fresh_tree_when_asking_parent_of_root_then_none() {
    let tree = Tree::new(1);
    assert_eq!(tree.parent(tree.root()), None);
    assert!(tree[tree.root()].is_root());
    assert!(tree[tree.root()].is_leaf());
}

#[rstest]
fn given_nested_append_when_asking_parents_then_back_references_match(sum: Tree<String>) {
    let mut tree = sum;
    let one = tree.child(tree.root(), 0).unwrap();
    let leaf = tree.append(one, "x".to_string()).unwrap();

    assert_eq!(tree.parent(leaf), Some(one));
    assert_eq!(tree.parent(one), Some(tree.root()));
    assert_eq!(tree.child(one, tree[leaf].child_index()), Ok(leaf));
    assert_eq!(tree.parent(tree.root()), None);
}

#[rstest]
#[case(0, Ok("1"))]
#[case(1, Ok("2"))]
#[case(2, Err(TreeError::ChildOutOfRange { index: 2, len: 2 }))]
#[case(usize::MAX, Err(TreeError::ChildOutOfRange { index: usize::MAX, len: 2 }))]
fn given_child_index_when_looking_up_then_checks_bounds(
    sum: Tree<String>,
    #[case] index: usize,
    #[case] expected: Result<&str, TreeError>,
) {
    let result = sum
        .child(sum.root(), index)
        .map(|id| sum[id].value().as_str());
    assert_eq!(result, expected);
}

#[rstest]
fn given_leaf_when_looking_up_any_child_then_out_of_range() {
    let tree = Tree::new(0);
    let err = tree.child(tree.root(), 0).unwrap_err();
    assert!(err.is_out_of_range());
}

#[rstest]
fn given_subtree_appended_below_inner_node_when_building_then_ids_are_fresh(sum: Tree<String>) {
    let mut tree = Tree::new("*".to_string()).with_child("3".to_string());
    let three = tree.child(tree.root(), 0).unwrap();
    let grafted = tree.append_tree(three, sum).unwrap();

    assert_eq!(tree.parent(grafted), Some(three));
    assert_eq!(tree.path_of(grafted).unwrap(), vec![0, 0]);
    assert_eq!(tree.depth(), 4);
    assert_eq!(testing::check_links(&tree), Ok(()));
}

// ============================================================
// Relocation
// ============================================================

#[rstest]
fn given_graft_when_moving_subtree_then_former_parent_forgets_it() {
    //      r            r
    //     / \           |
    //    a   b   ->     b
    //    |              |
    //    c              a
    //                   |
    //                   c
    let mut tree = Tree::new('r');
    let root = tree.root();
    let a = tree.append(root, 'a').unwrap();
    let b = tree.append(root, 'b').unwrap();
    let c = tree.append(a, 'c').unwrap();

    tree.graft(b, a).unwrap();

    assert_eq!(tree.parent(a), Some(b));
    assert!(!tree.children(root).contains(&a));
    assert_eq!(tree.parent(c), Some(a));
    assert_eq!(tree[b].child_index(), 0);
    let values: String = tree.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, "rbac");
    assert_eq!(testing::check_links(&tree), Ok(()));
}

#[rstest]
fn given_graft_into_own_descendant_when_moving_then_rejected() {
    let mut tree = Tree::new(0);
    let a = tree.append(tree.root(), 1).unwrap();
    let b = tree.append(a, 2).unwrap();
    let c = tree.append(b, 3).unwrap();

    assert_eq!(
        tree.graft(c, a),
        Err(TreeError::CyclicGraft { node: a, parent: c })
    );
    assert_eq!(tree.parent(a), Some(tree.root()));
    assert_eq!(testing::check_links(&tree), Ok(()));
}

#[rstest]
fn given_value_mut_when_updating_then_structure_unchanged(sum: Tree<String>) {
    let mut tree = sum;
    let two = tree.child(tree.root(), 1).unwrap();
    if let Some(v) = tree.value_mut(two) {
        v.push('0');
    }
    assert_eq!(render::prefix(&tree), "+ 1 20");
    assert_eq!(tree.size(), 3);
}

#[rstest]
fn given_deep_chain_when_traversing_and_dropping_then_no_recursion_limit() {
    let mut tree = Tree::new(0u32);
    let mut tip = tree.root();
    for i in 1..200_000 {
        tip = tree.append(tip, i).unwrap();
    }
    assert_eq!(tree.depth(), 200_000);
    let mut count = 0;
    tree.traverse(tree.root(), |_| count += 1).unwrap();
    assert_eq!(count, 200_000);
    drop(tree);
}

#[rstest]
fn given_plus_operators_when_joining_trees_then_behaves_like_concat(sum: Tree<String>) {
    let mut product = Tree::new("*".to_string()).with_child("3".to_string());
    product += sum.clone();
    assert_eq!(render::infix(&product).to_string(), "(3*(1+2))");

    let chained = Tree::new("*".to_string()) + Tree::new("3".to_string()) + sum;
    assert_eq!(preorder(&chained), preorder(&product));
    assert_eq!(testing::check_links(&chained), Ok(()));
}

#[rstest]
fn given_subtree_start_when_traversing_then_visits_only_that_subtree(sum: Tree<String>) {
    let product = Tree::new("*".to_string())
        .with_child("3".to_string())
        .with_subtree(sum);
    let plus = product.child(product.root(), 1).unwrap();
    let one = product.child(plus, 0).unwrap();
    let two = product.child(plus, 1).unwrap();

    let mut values = Vec::new();
    product
        .traverse(plus, |v| values.push(v.clone()))
        .unwrap();
    assert_eq!(values, vec!["+", "1", "2"]);

    let mut ids = Vec::new();
    product.traverse_nodes(plus, |id, _| ids.push(id)).unwrap();
    assert_eq!(ids, vec![plus, one, two]);
}
