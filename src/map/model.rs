use std::fmt;

//////////////////////////////
/// MAP STRUCTS AND ENUMS  ///
//////////////////////////////

/// Which way a path leads out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name of a room, capped at [`RoomName::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomName(String);

impl RoomName {
    pub const MAX_CHARS: usize = 49;

    /// Builds a name, cutting anything past the cap on a char boundary.
    pub fn new(raw: &str) -> Self {
        match raw.char_indices().nth(Self::MAX_CHARS) {
            Some((cut, _)) => {
                tracing::warn!(
                    name = raw,
                    max = Self::MAX_CHARS,
                    "room name too long, truncating"
                );
                RoomName(raw[..cut].to_string())
            }
            None => RoomName(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RoomName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoomName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One node of the mansion tree. Each child is owned by exactly one parent.
#[derive(Debug)]
pub struct Room {
    pub(super) name: RoomName,
    pub(super) left: Option<Box<Room>>,
    pub(super) right: Option<Box<Room>>,
}

impl Room {
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    pub fn child(&self, dir: Direction) -> Option<&Room> {
        match dir {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Present children in left-to-right order.
    pub fn paths(&self) -> impl Iterator<Item = (Direction, &Room)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.child(d).map(|r| (d, r)))
    }
}

/// A fully built, immutable mansion. `root` is `None` only for the empty map.
#[derive(Debug)]
pub struct MansionMap {
    pub(super) title: String,
    pub(super) root: Option<Box<Room>>,
}

impl MansionMap {
    pub(super) fn new(title: impl Into<String>, root: Room) -> Self {
        MansionMap {
            title: title.into(),
            root: Some(Box::new(root)),
        }
    }

    pub fn empty() -> Self {
        MansionMap {
            title: String::new(),
            root: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> Option<&Room> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.rooms().count()
    }

    /// Number of levels; a lone root has height 1.
    pub fn height(&self) -> usize {
        fn level(room: Option<&Room>) -> usize {
            match room {
                Some(r) => 1 + level(r.left()).max(level(r.right())),
                None => 0,
            }
        }
        level(self.root())
    }

    /// Follows `path` from the root, stopping at the first absent link.
    pub fn room_at(&self, path: &[Direction]) -> Option<&Room> {
        path.iter()
            .try_fold(self.root()?, |room, &dir| room.child(dir))
    }

    /// Pre-order walk: node, left subtree, right subtree.
    pub fn rooms(&self) -> Rooms<'_> {
        Rooms {
            stack: self.root().into_iter().collect(),
        }
    }
}

/// A map description read from disk, checked before any room is built.
#[derive(Debug, Clone)]
pub struct MapLayout {
    pub title: String,
    pub root: String,
    pub rooms: Vec<RoomLayout>,
}

#[derive(Debug, Clone)]
pub struct RoomLayout {
    pub id: String,
    pub name: String,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl RoomLayout {
    pub fn links(&self) -> impl Iterator<Item = (Direction, &str)> {
        [
            (Direction::Left, self.left.as_deref()),
            (Direction::Right, self.right.as_deref()),
        ]
        .into_iter()
        .filter_map(|(d, target)| target.map(|t| (d, t)))
    }
}

pub struct Rooms<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        if let Some(r) = room.right() {
            self.stack.push(r);
        }
        if let Some(l) = room.left() {
            self.stack.push(l);
        }
        Some(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pantry", "Pantry")]
    #[case("", "")]
    fn short_names_are_kept(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(RoomName::new(raw).as_str(), expected);
    }

    #[rstest]
    fn long_names_are_capped() {
        let raw = "x".repeat(80);
        let name = RoomName::new(&raw);
        assert_eq!(name.as_str().chars().count(), RoomName::MAX_CHARS);
    }

    #[rstest]
    fn exact_cap_is_untouched() {
        let raw = "y".repeat(RoomName::MAX_CHARS);
        assert_eq!(RoomName::new(&raw).as_str(), raw);
    }

    #[rstest]
    fn truncation_respects_char_boundaries() {
        let raw = "ã".repeat(60);
        let name = RoomName::new(&raw);
        assert_eq!(name.as_str().chars().count(), RoomName::MAX_CHARS);
        assert!(name.as_str().chars().all(|c| c == 'ã'));
    }

    #[rstest]
    fn empty_map_has_no_rooms() {
        let map = MansionMap::empty();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.height(), 0);
        assert!(map.room_at(&[]).is_none());
    }
}
