//! Moving a selection around the tree

use super::{NodeId, Tree};

/// Arrow-key style step from one node to a neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// To the parent
    Up,
    /// To the middle child
    Down,
    /// To the previous sibling, or up when there is none
    Left,
    /// To the next sibling, or down when there is none
    Right,
}

impl Tree {
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let index = self.index_in_parent(id)?;
        let parent = self.parent(id)?;
        index.checked_sub(1).map(|i| self[parent].children[i])
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let index = self.index_in_parent(id)?;
        let parent = self.parent(id)?;
        self[parent].children.get(index + 1).copied()
    }

    /// Child at `len / 2`: the centre one for odd counts, right of centre
    /// for even counts
    pub fn middle_child(&self, id: NodeId) -> Option<NodeId> {
        let children = &self.get(id)?.children;
        children.get(children.len() / 2).copied()
    }

    /// Neighbour reached by one step, or `None` when the step leads nowhere
    pub fn step(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.get(id)?;
        match direction {
            Direction::Up => self.parent(id),
            Direction::Down => self.middle_child(id),
            Direction::Left => self.prev_sibling(id).or_else(|| self.parent(id)),
            Direction::Right => self.next_sibling(id).or_else(|| self.middle_child(id)),
        }
    }
}
