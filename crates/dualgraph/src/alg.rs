//! Helper algorithms written only against [`GraphApi`].
//!
//! They accept the indexed [`Graph`](crate::Graph) and the caching
//! [`CachedGraph`](crate::CachedGraph) alike.

use crate::VertexId;
use crate::api::GraphApi;
use crate::seq::Sequence;
use std::collections::VecDeque;

/// Depth-first preorder over out-neighbours, starting from each root in turn.
pub fn preorder<G: GraphApi>(g: &G, roots: &[VertexId]) -> Vec<VertexId> {
    depth_first(g, roots, Order::Pre)
}

/// Depth-first postorder over out-neighbours, starting from each root in turn.
pub fn postorder<G: GraphApi>(g: &G, roots: &[VertexId]) -> Vec<VertexId> {
    depth_first(g, roots, Order::Post)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    Post,
}

// A vertex, its successors, and the position of the next successor to try.
type Frame = (VertexId, Vec<VertexId>, usize);

fn depth_first<G: GraphApi>(g: &G, roots: &[VertexId], order: Order) -> Vec<VertexId> {
    let vertex_count = g.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut out: Vec<VertexId> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for &root in roots.iter().filter(|&&r| r < vertex_count) {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        if order == Order::Pre {
            out.push(root);
        }
        stack.push((root, successors(g, root), 0));

        while let Some((v, succ, next)) = stack.last_mut() {
            let Some(&w) = succ.get(*next) else {
                if order == Order::Post {
                    out.push(*v);
                }
                stack.pop();
                continue;
            };
            *next += 1;
            if !visited[w] {
                visited[w] = true;
                if order == Order::Pre {
                    out.push(w);
                }
                stack.push((w, successors(g, w), 0));
            }
        }
    }
    out
}

/// Weakly connected components, each listed in discovery order; isolated vertices form their
/// own component.
pub fn components<G: GraphApi>(g: &G) -> Vec<Vec<VertexId>> {
    let n = g.vertex_count();
    let mut seen = vec![false; n];
    let mut out: Vec<Vec<VertexId>> = Vec::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp: Vec<VertexId> = Vec::new();
        let mut q: VecDeque<VertexId> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            comp.push(v);
            let adjacent: Vec<VertexId> = if G::DIRECTED {
                let mut all = g.neighbours_out(v).to_vec();
                all.extend(g.neighbours_in(v).iter());
                all
            } else {
                g.neighbours_out(v).to_vec()
            };
            for w in adjacent {
                if !seen[w] {
                    seen[w] = true;
                    q.push_back(w);
                }
            }
        }
        out.push(comp);
    }

    out
}

/// Strongly connected components with more than one vertex, plus vertices with a self-loop.
///
/// Cycles are only meaningful for directed graphs, so this refuses to compile for undirected
/// ones.
pub fn find_cycles<G: GraphApi>(g: &G) -> Vec<Vec<VertexId>> {
    const { assert!(G::DIRECTED, "find_cycles needs a directed graph") };

    let n = g.vertex_count();
    let mut tarjan = Tarjan {
        index: 0,
        stack: Vec::new(),
        on_stack: vec![false; n],
        indices: vec![None; n],
        lowlink: vec![0; n],
        calls: Vec::new(),
        sccs: Vec::new(),
    };
    for v in 0..n {
        if tarjan.indices[v].is_none() {
            tarjan.run(g, v);
        }
    }

    let mut cycles: Vec<Vec<VertexId>> = Vec::new();
    for mut scc in tarjan.sccs {
        if scc.len() > 1 {
            scc.sort_unstable();
            cycles.push(scc);
        } else if g.is_edge(scc[0], scc[0]) {
            cycles.push(scc);
        }
    }

    cycles.sort_by(|a, b| a.first().cmp(&b.first()));
    cycles
}

// Tarjan's strongly connected components with an explicit call stack.
struct Tarjan {
    index: usize,
    stack: Vec<VertexId>,
    on_stack: Vec<bool>,
    indices: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    calls: Vec<Frame>,
    sccs: Vec<Vec<VertexId>>,
}

impl Tarjan {
    fn open<G: GraphApi>(&mut self, g: &G, v: VertexId) {
        self.indices[v] = Some(self.index);
        self.lowlink[v] = self.index;
        self.index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
        self.calls.push((v, successors(g, v), 0));
    }

    fn run<G: GraphApi>(&mut self, g: &G, root: VertexId) {
        self.open(g, root);
        while let Some((v, succ, next)) = self.calls.last_mut() {
            let v = *v;
            if let Some(&w) = succ.get(*next) {
                *next += 1;
                match self.indices[w] {
                    None => self.open(g, w),
                    Some(w_idx) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(w_idx);
                    }
                    Some(_) => {}
                }
                continue;
            }

            self.calls.pop();
            if Some(self.lowlink[v]) == self.indices[v] {
                let mut scc: Vec<VertexId> = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
            if let Some(&(parent, _, _)) = self.calls.last() {
                self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[v]);
            }
        }
    }
}

// Materialized so no borrow of a caching graph outlives a stack frame.
fn successors<G: GraphApi>(g: &G, v: VertexId) -> Vec<VertexId> {
    g.neighbours_out(v).to_vec()
}
