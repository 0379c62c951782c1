use super::{
    classify::{LineClass, LineKind},
    indent::IndentTracker,
};

/// Index of a block in its [`BlockTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

/// A line together with the lines nested under it.
#[derive(Debug, Clone)]
pub struct Block<'a> {
    pub line: LineClass<'a>,
    pub children: Vec<BlockId>,
}

/// Arena of blocks for one document body.
///
/// Top-level blocks are children of the (implicit) document root and are
/// returned by `children(None)`.
#[derive(Debug, Default, Clone)]
pub struct BlockTree<'a> {
    blocks: Vec<Block<'a>>,
    roots: Vec<BlockId>,
}

impl<'a> BlockTree<'a> {
    pub fn block(&self, id: BlockId) -> &Block<'a> {
        &self.blocks[id.0]
    }

    pub fn line(&self, id: BlockId) -> &LineClass<'a> {
        &self.blocks[id.0].line
    }

    /// Children of `parent`, or the top-level blocks for `None`.
    pub fn children(&self, parent: Option<BlockId>) -> &[BlockId] {
        match parent {
            Some(id) => &self.blocks[id.0].children,
            None => &self.roots,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Visits `id` and its descendants in source order. When `visit` returns
    /// false the children of that block are skipped.
    pub fn walk(&self, id: BlockId, mut visit: impl FnMut(BlockId, &LineClass<'a>) -> bool) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let block = self.block(next);
            if visit(next, &block.line) {
                stack.extend(block.children.iter().rev().copied());
            }
        }
    }

    fn push(&mut self, parent: Option<BlockId>, line: LineClass<'a>) -> BlockId {
        let id = BlockId(self.blocks.len());
        self.blocks.push(Block {
            line,
            children: vec![],
        });
        match parent {
            Some(p) => self.blocks[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }
}

/// Builds a [`BlockTree`] from classified lines.
///
/// The open blocks are kept on an explicit stack that moves in lock-step with
/// the [`IndentTracker`]: every close event pops a block, and a line that does
/// not open a new level replaces its sibling at the top.
pub struct BlockBuilder<'a> {
    tracker: IndentTracker,
    open: Vec<BlockId>,
    pending_blanks: Vec<LineClass<'a>>,
    tree: BlockTree<'a>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            tracker: IndentTracker::new(),
            open: vec![],
            pending_blanks: vec![],
            tree: BlockTree::default(),
        }
    }

    pub fn push(&mut self, line: LineClass<'a>) {
        if matches!(line.kind, LineKind::Blank) {
            // Placement depends on the next non-blank line.
            self.pending_blanks.push(line);
            return;
        }

        let event = self.tracker.track(line.indent);
        for _ in 0..event.closed {
            self.open.pop();
        }
        if !event.opened {
            self.open.pop();
        }

        let parent = self.open.last().copied();
        for blank in self.pending_blanks.drain(..) {
            self.tree.push(parent, blank);
        }
        let id = self.tree.push(parent, line);
        self.open.push(id);

        debug_assert_eq!(self.open.len(), self.tracker.depth());
    }

    pub fn finish(mut self) -> BlockTree<'a> {
        // Trailing blank lines belong to nothing.
        self.pending_blanks.clear();
        self.tree
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
