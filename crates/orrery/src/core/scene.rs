use crate::api::types::BodyId;
use crate::components::node::SceneNode;

/// Flat store of render nodes.
/// Sized for an orrery (a few hundred nodes), so lookups are linear scans.
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(128),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Remove a node by ID. Returns the removed node if found.
    pub fn despawn(&mut self, id: BodyId) -> Option<SceneNode> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.swap_remove(idx))
    }

    pub fn get(&self, id: BodyId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyKind;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = BodyId(1);
        scene.spawn(SceneNode::new(id, BodyKind::Planet).with_pos(Vec3::new(10.0, 0.0, 20.0)));
        assert_eq!(scene.get(id).unwrap().pos, Vec3::new(10.0, 0.0, 20.0));
    }

    #[test]
    fn despawn_removes_node() {
        let mut scene = Scene::new();
        scene.spawn(SceneNode::new(BodyId(1), BodyKind::Planet));
        assert!(scene.despawn(BodyId(1)).is_some());
        assert!(scene.despawn(BodyId(1)).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(SceneNode::new(BodyId(0), BodyKind::Star).with_tag("Sun"));
        scene.spawn(SceneNode::new(BodyId(1), BodyKind::Planet).with_tag("Earth"));
        scene.spawn(SceneNode::new(BodyId(2), BodyKind::Debris));
        assert_eq!(scene.find_by_tag("Earth").unwrap().id, BodyId(1));
        assert!(scene.find_by_tag("Pluto").is_none());
    }
}
