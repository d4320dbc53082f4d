use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::builder::RoomBuilder;
use super::model::{MansionMap, MapLayout, RoomLayout};
use super::validator::validate_layout;
use crate::error::{MapError, MapResult};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct MapFile {
    map: MapHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct MapHeader {
    #[serde(default)]
    name: String,
    root: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,

    #[serde(default)]
    left: Option<String>,

    #[serde(default)]
    right: Option<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a map from a .toml file on disk.
pub fn load_map_from_file(path: &Path) -> MapResult<MansionMap> {
    let contents = fs::read_to_string(path).map_err(|source| MapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let map = load_map_from_str(&contents)?;
    tracing::info!(path = %path.display(), rooms = map.len(), "mansion map loaded");
    Ok(map)
}

pub fn load_map_from_str(contents: &str) -> MapResult<MansionMap> {
    let layout = parse_layout(contents)?;

    let errors = validate_layout(&layout);
    if !errors.is_empty() {
        return Err(MapError::Invalid(errors));
    }

    Ok(build_from_layout(layout))
}

/// Parses the file into a layout without checking its shape.
pub fn parse_layout(contents: &str) -> MapResult<MapLayout> {
    let map_file: MapFile = toml::from_str(contents)?;

    if map_file.map.root.trim().is_empty() {
        return Err(MapError::EmptyField("root"));
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut rooms = Vec::with_capacity(map_file.room.len());

    for rc in map_file.room {
        let id = rc.id.trim().to_string();
        if id.is_empty() {
            return Err(MapError::EmptyField("room.id"));
        }
        if !seen.insert(id.clone()) {
            return Err(MapError::DuplicateRoom(id));
        }

        let name = rc.name.trim().to_string();
        if name.is_empty() {
            return Err(MapError::EmptyName(id));
        }

        rooms.push(RoomLayout {
            id,
            name,
            left: normalize_link(rc.left),
            right: normalize_link(rc.right),
        });
    }

    Ok(MapLayout {
        title: map_file.map.name.trim().to_string(),
        root: map_file.map.root.trim().to_string(),
        rooms,
    })
}

// An empty string in the file means "no path".
fn normalize_link(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Builds a validated layout. Links that fail to resolve are skipped, which
/// cannot happen once [`validate_layout`] reported no errors.
fn build_from_layout(layout: MapLayout) -> MansionMap {
    let MapLayout { title, root, rooms } = layout;
    let mut by_id: HashMap<String, RoomLayout> =
        rooms.into_iter().map(|r| (r.id.clone(), r)).collect();

    fn stage(id: &str, by_id: &mut HashMap<String, RoomLayout>) -> Option<RoomBuilder> {
        let room = by_id.remove(id)?;
        let mut builder = RoomBuilder::new(&room.name);
        if let Some(child) = room.left.as_deref().and_then(|l| stage(l, by_id)) {
            builder = builder.left(child);
        }
        if let Some(child) = room.right.as_deref().and_then(|r| stage(r, by_id)) {
            builder = builder.right(child);
        }
        Some(builder)
    }

    match stage(&root, &mut by_id) {
        Some(builder) => MansionMap::new(title, builder.build()),
        None => MansionMap::empty(),
    }
}
