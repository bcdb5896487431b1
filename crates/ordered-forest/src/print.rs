//! Graphviz rendering of the balanced tree, for diagnostics only.

use std::fmt::Display;

use crate::avl::AvlNode;
use crate::list::OrderedList;

/// Render the tree rooted at `root` as a Graphviz `digraph`: one line per
/// node carrying its value and balance factor, and `l` / `r` labelled edges
/// to its children. Node numbers are assigned in pre-order.
pub fn to_dot<T: Display>(nodes: &[AvlNode], list: &OrderedList<T>, root: Option<u32>) -> String {
    let mut out = String::from("digraph {\n");
    if let Some(root) = root {
        dot_node(nodes, list, root, 0, &mut out);
    }
    out.push('}');
    out
}

fn dot_node<T: Display>(
    nodes: &[AvlNode],
    list: &OrderedList<T>,
    node: u32,
    idx: usize,
    out: &mut String,
) -> usize {
    let n = &nodes[node as usize];
    out.push_str(&format!(
        "\t{idx} [label=\"{}, b={}\"];\n",
        list.data(n.pos),
        n.bf
    ));
    let mut next = idx + 1;
    if let Some(l) = n.l {
        out.push_str(&format!("\t{idx} -> {next} [label=\"l\"];\n"));
        next = dot_node(nodes, list, l, next, out);
    }
    if let Some(r) = n.r {
        out.push_str(&format!("\t{idx} -> {next} [label=\"r\"];\n"));
        next = dot_node(nodes, list, r, next, out);
    }
    next
}
