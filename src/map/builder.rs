use super::model::{MansionMap, Room, RoomName};

pub const MANSION_TITLE: &str = "Enigma Studios Mansion";

/// Mutable staging node. Links can only be set here; `build` freezes them.
#[derive(Debug)]
pub struct RoomBuilder {
    name: RoomName,
    left: Option<Box<RoomBuilder>>,
    right: Option<Box<RoomBuilder>>,
}

impl RoomBuilder {
    pub fn new(name: &str) -> Self {
        RoomBuilder {
            name: RoomName::new(name),
            left: None,
            right: None,
        }
    }

    pub fn left(mut self, child: RoomBuilder) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn right(mut self, child: RoomBuilder) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn build(self) -> Room {
        tracing::trace!(room = %self.name, "room created");
        Room {
            name: self.name,
            left: self.left.map(|b| Box::new(b.build())),
            right: self.right.map(|b| Box::new(b.build())),
        }
    }
}

/// The fixed mansion layout, four levels deep.
pub fn build_mansion() -> MansionMap {
    let kitchen = RoomBuilder::new("Kitchen")
        .left(RoomBuilder::new("Pantry"))
        .right(RoomBuilder::new("Library").left(RoomBuilder::new("Secret Room")));

    let living_room = RoomBuilder::new("Living Room")
        .left(RoomBuilder::new("Garden"))
        .right(
            RoomBuilder::new("Office")
                .left(RoomBuilder::new("Basement"))
                .right(RoomBuilder::new("Master Bedroom")),
        );

    let root = RoomBuilder::new("Entrance Hall")
        .left(kitchen)
        .right(living_room)
        .build();

    let map = MansionMap::new(MANSION_TITLE, root);
    tracing::info!(rooms = map.len(), height = map.height(), "mansion map built");
    map
}
