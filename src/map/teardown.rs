use super::model::{MansionMap, Room, RoomName};

/// Releases every room, children first, and returns how many were freed.
pub fn release(map: MansionMap) -> usize {
    release_with(map, |_| {})
}

/// Like [`release`], calling `visit` for each room just before it is dropped.
pub fn release_with(map: MansionMap, mut visit: impl FnMut(&RoomName)) -> usize {
    let MansionMap { title, root } = map;
    let freed = match root {
        Some(room) => release_room(room, &mut visit),
        None => 0,
    };
    tracing::debug!(map = %title, rooms = freed, "mansion map released");
    freed
}

fn release_room(room: Box<Room>, visit: &mut impl FnMut(&RoomName)) -> usize {
    let Room { name, left, right } = *room;

    let mut freed = 0;
    if let Some(l) = left {
        freed += release_room(l, visit);
    }
    if let Some(r) = right {
        freed += release_room(r, visit);
    }

    visit(&name);
    tracing::trace!(room = %name, "room released");
    freed + 1
}
