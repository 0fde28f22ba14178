//! Graphviz rendering of a [`HuffmanTree`].

use std::fmt::Write;

use crate::huffman::tree::{HuffNode, HuffmanTree};

/// Renders `tree` in the DOT language. Leaves are labelled with their symbol and weight, internal
/// nodes with `*` and their weight; left edges are labelled `0` and right edges `1`.
pub fn to_dot(tree: &HuffmanTree) -> String {
    let mut dot = String::new();
    // writing to a String never fails
    let _ = write_dot(tree, &mut dot);
    dot
}

fn write_dot(tree: &HuffmanTree, out: &mut String) -> std::fmt::Result {
    writeln!(out, "digraph huffman {{")?;
    writeln!(out, "    label=\"Huffman Binary Tree\";")?;
    writeln!(out, "    labelloc=\"t\";")?;
    writeln!(
        out,
        "    node [shape=circle, style=filled, color=lightblue2, fontname=\"Helvetica\"];"
    )?;

    for (id, node, _) in tree.walk() {
        match node {
            HuffNode::Leaf { symbol, weight } => {
                writeln!(out, "    n{} [label=\"{}\\n{}\"];", id, escape(symbol), weight)?;
            }
            HuffNode::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(out, "    n{} [label=\"*\\n{}\"];", id, weight)?;
                writeln!(out, "    n{} -> n{} [label=\"0\", color=red];", id, left)?;
                writeln!(out, "    n{} -> n{} [label=\"1\", color=red];", id, right)?;
            }
        }
    }

    writeln!(out, "}}")
}

/// Escapes a symbol so that it can sit inside a double-quoted DOT label.
fn escape(symbol: &str) -> String {
    symbol.escape_default().to_string()
}
