use super::state::AnimState;

/// Direction the sequence walks the chain in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    #[default]
    Forward,
    Backward,
}

impl Traversal {
    pub fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: AnimState,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Node {
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }
}

/// Fixed, ordered run of nodes from the head (slot 0) to the tail.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
}

impl Chain {
    /// Builds `count` linked nodes. A chain always has at least one node.
    pub fn new(count: usize) -> Self {
        let count = count.max(1);
        let nodes = (0..count)
            .map(|index| Node {
                index,
                state: AnimState::default(),
                prev: index.checked_sub(1),
                next: (index + 1 < count).then_some(index + 1),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn neighbor(&self, index: usize, dir: Traversal) -> Option<usize> {
        let node = self.nodes.get(index)?;
        match dir {
            Traversal::Forward => node.next,
            Traversal::Backward => node.prev,
        }
    }
}

/// A node that just finished its sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completed {
    pub index: usize,
    pub scale: f64,
}

/// Walks the chain one sweep at a time, bouncing between head and tail.
#[derive(Debug, Clone)]
pub struct Sequence {
    chain: Chain,
    current: usize,
    dir: Traversal,
    lines: usize,
    arcs: usize,
}

impl Sequence {
    pub fn new(nodes: usize, lines: usize, arcs: usize) -> Self {
        Self {
            chain: Chain::new(nodes),
            current: 0,
            dir: Traversal::Forward,
            lines,
            arcs,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Traversal {
        self.dir
    }

    fn current_state(&mut self) -> &mut AnimState {
        &mut self.chain.nodes[self.current].state
    }

    pub fn start_updating(&mut self) -> bool {
        self.current_state().start_updating()
    }

    /// Ticks the active node. When its sweep completes, hands over to the next
    /// node in the walking direction, or turns around at either end.
    pub fn update(&mut self) -> Option<Completed> {
        let (lines, arcs) = (self.lines, self.arcs);
        let scale = self.current_state().update(lines, arcs)?;
        let index = self.current;

        match self.chain.neighbor(index, self.dir) {
            Some(next) => self.current = next,
            None => self.dir = self.dir.flip(),
        }

        Some(Completed { index, scale })
    }
}
