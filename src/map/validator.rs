use std::collections::{HashMap, HashSet};

use super::model::MapLayout;

/// Deepest map, in levels, that may be loaded. Building, walking and
/// dropping a map all recurse once per level.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks that `layout` describes a single rooted tree.
///
/// A layout with no errors has one root, every link resolves, and each room
/// other than the root has exactly one parent, and no path from the root
/// runs deeper than [`MAX_DEPTH`] levels.
pub fn validate_layout(layout: &MapLayout) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if layout.rooms.is_empty() {
        errors.push(ValidationError::new("map has no rooms"));
        return errors;
    }

    let all_rooms: HashSet<&str> = layout.rooms.iter().map(|r| r.id.as_str()).collect();

    if !all_rooms.contains(layout.root.as_str()) {
        errors.push(ValidationError::new(format!(
            "root '{}' not found among rooms",
            layout.root
        )));
    }

    // child id -> first parent that claimed it
    let mut parents: HashMap<&str, &str> = HashMap::new();

    for room in &layout.rooms {
        for (dir, target) in room.links() {
            if !all_rooms.contains(target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' {} path targets missing room '{}'",
                    room.id, dir, target
                )));
                continue;
            }

            if target == room.id {
                errors.push(ValidationError::new(format!(
                    "room '{}' {} path leads back to itself",
                    room.id, dir
                )));
                continue;
            }

            if target == layout.root {
                errors.push(ValidationError::new(format!(
                    "room '{}' {} path leads to the root '{}'",
                    room.id, dir, target
                )));
                continue;
            }

            if let Some(first) = parents.insert(target, room.id.as_str()) {
                errors.push(ValidationError::new(format!(
                    "room '{}' is reachable from both '{}' and '{}'",
                    target, first, room.id
                )));
            }
        }
    }

    if !errors.is_empty() {
        return errors;
    }

    let by_id: HashMap<&str, _> = layout.rooms.iter().map(|r| (r.id.as_str(), r)).collect();
    let mut reached: HashSet<&str> = HashSet::new();
    let mut stack = vec![(layout.root.as_str(), 1usize)];
    let mut deepest = 0;

    while let Some((id, depth)) = stack.pop() {
        if !reached.insert(id) {
            continue;
        }
        deepest = deepest.max(depth);
        if let Some(&room) = by_id.get(id) {
            stack.extend(room.links().map(|(_, t)| (t, depth + 1)));
        }
    }

    if deepest > MAX_DEPTH {
        errors.push(ValidationError::new(format!(
            "map is {} levels deep, more than the {} allowed",
            deepest, MAX_DEPTH
        )));
    }

    let mut orphans: Vec<&str> = all_rooms.difference(&reached).copied().collect();
    orphans.sort();
    for id in orphans {
        errors.push(ValidationError::new(format!(
            "room '{}' is not reachable from the root",
            id
        )));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RoomLayout;
    use rstest::rstest;

    fn room(id: &str, left: Option<&str>, right: Option<&str>) -> RoomLayout {
        RoomLayout {
            id: id.to_string(),
            name: id.to_uppercase(),
            left: left.map(str::to_string),
            right: right.map(str::to_string),
        }
    }

    fn layout(root: &str, rooms: Vec<RoomLayout>) -> MapLayout {
        MapLayout {
            title: "test".to_string(),
            root: root.to_string(),
            rooms,
        }
    }

    #[rstest]
    fn a_proper_tree_passes() {
        let l = layout(
            "hall",
            vec![
                room("hall", Some("a"), Some("b")),
                room("a", None, Some("c")),
                room("b", None, None),
                room("c", None, None),
            ],
        );
        assert!(validate_layout(&l).is_empty());
    }

    #[rstest]
    fn no_rooms() {
        let errors = validate_layout(&layout("hall", vec![]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("no rooms"));
    }

    #[rstest]
    #[case::missing_root(
        layout("attic", vec![room("hall", None, None)]),
        "root 'attic' not found"
    )]
    #[case::missing_target(
        layout("hall", vec![room("hall", Some("cellar"), None)]),
        "targets missing room 'cellar'"
    )]
    #[case::self_loop(
        layout("hall", vec![room("hall", None, Some("a")), room("a", Some("a"), None)]),
        "leads back to itself"
    )]
    #[case::back_to_root(
        layout("hall", vec![room("hall", Some("a"), None), room("a", None, Some("hall"))]),
        "leads to the root"
    )]
    #[case::shared_child(
        layout(
            "hall",
            vec![
                room("hall", Some("a"), Some("b")),
                room("a", Some("c"), None),
                room("b", None, Some("c")),
                room("c", None, None),
            ],
        ),
        "reachable from both"
    )]
    #[case::orphan(
        layout("hall", vec![room("hall", None, None), room("shed", None, None)]),
        "'shed' is not reachable"
    )]
    fn broken_layouts_are_reported(#[case] l: MapLayout, #[case] needle: &str) {
        let errors = validate_layout(&l);
        assert!(
            errors.iter().any(|e| e.message.contains(needle)),
            "expected '{}' in {:?}",
            needle,
            errors
        );
    }

    fn chain(levels: usize) -> MapLayout {
        let rooms = (0..levels)
            .map(|i| {
                let next = (i + 1 < levels).then(|| format!("r{}", i + 1));
                room(&format!("r{}", i), next.as_deref(), None)
            })
            .collect();
        layout("r0", rooms)
    }

    #[rstest]
    fn chain_at_the_depth_limit_passes() {
        assert!(validate_layout(&chain(MAX_DEPTH)).is_empty());
    }

    #[rstest]
    fn chain_past_the_depth_limit_is_rejected() {
        let errors = validate_layout(&chain(MAX_DEPTH + 1));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("levels deep"));
    }

    #[rstest]
    fn detached_cycle_is_unreachable() {
        let l = layout(
            "hall",
            vec![
                room("hall", None, None),
                room("x", Some("y"), None),
                room("y", Some("x"), None),
            ],
        );
        let errors = validate_layout(&l);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message.contains("not reachable")));
    }
}
