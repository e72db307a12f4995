use crate::Node;
use crate::Tree;
use common::Symbol;
use std::borrow::Cow;
use std::collections::HashMap;

/// A node of the tree, flattened for rendering. `id` is the position in depth-first order.
#[derive(Debug, Clone)]
pub struct RenderNode {
    id: usize,
    label: String,
    is_leaf: bool,
}

#[derive(Debug, Clone)]
pub struct Edge {
    from: usize,
    to: usize,
    transition: char, // '0' or '1'
}

/// The tree as lists of nodes and edges, which is what graphviz wants to see.
#[derive(Debug)]
pub struct RenderPlan {
    nodes: Vec<RenderNode>,
    edges: Vec<Edge>,
}

impl RenderPlan {
    pub fn from_tree<S: Symbol>(tree: &Tree<S>) -> Self {
        let mut nodes = vec![];
        let mut edges = vec![];
        // path to node id, parents are always visited before their children
        let mut ids: HashMap<String, usize> = HashMap::new();
        tree.walk_tree(&mut |node: &Node<S>, path: &str, _depth| {
            let id = nodes.len();
            let label = match node {
                Node::Leaf { symbol, count } => format!("count:{} symbol:{:?}", count, symbol),
                Node::Internal { count, .. } => format!("count:{}", count),
            };
            nodes.push(RenderNode {
                id,
                label,
                is_leaf: node.is_leaf(),
            });
            let mut parent_path = path.to_string();
            if let Some(transition) = parent_path.pop() {
                if let Some(&from) = ids.get(&parent_path) {
                    edges.push(Edge {
                        from,
                        to: id,
                        transition,
                    });
                }
            }
            ids.insert(path.to_string(), id);
        });
        RenderPlan { nodes, edges }
    }
}

/// renders the tree in the graphviz dot format
pub fn render_plan_to<S: Symbol, W: core::fmt::Write>(
    tree: &Tree<S>,
    output: &mut W,
) -> std::result::Result<(), core::fmt::Error> {
    let plan = RenderPlan::from_tree(tree);
    dot::render(&plan, output)
}

impl<'a> dot::Labeller<'a> for RenderPlan {
    type Node = RenderNode;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &RenderNode) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n.id)).unwrap()
    }

    fn node_label<'b>(&'b self, n: &RenderNode) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(n.label.clone().into())
    }

    /// Adds attr to `n` that will be used in the rendered output.
    /// Multiple attr can be returned in the String, e.g. `color="red", fontcolor="red"`
    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if n.is_leaf {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a> for RenderPlan {
    type Node = RenderNode;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<RenderNode> {
        Cow::Borrowed(&self.nodes[..])
    }

    fn edges(&self) -> dot::Edges<Edge> {
        Cow::Borrowed(&self.edges[..])
    }

    fn source(&self, e: &Edge) -> RenderNode {
        self.nodes[e.from].clone()
    }

    fn target(&self, e: &Edge) -> RenderNode {
        self.nodes[e.to].clone()
    }
}
