use super::ShapeId;

/// Interior node of the scene graph. Owns its children by handle; their
/// transforms are relative to the group's object space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    children: Vec<ShapeId>,
}

impl Group {
    pub fn children(&self) -> &[ShapeId] {
        &self.children
    }

    pub(crate) fn push(&mut self, child: ShapeId) {
        self.children.push(child);
    }

    pub(crate) fn clear(&mut self) {
        self.children.clear();
    }
}
