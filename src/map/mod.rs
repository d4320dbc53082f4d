mod builder;
mod loader;
mod model;
mod teardown;
mod validator;

pub use builder::{MANSION_TITLE, RoomBuilder, build_mansion};
pub use loader::{load_map_from_file, load_map_from_str, parse_layout};
pub use model::{Direction, MansionMap, MapLayout, Room, RoomLayout, RoomName, Rooms};
pub use teardown::{release, release_with};
pub use validator::{MAX_DEPTH, ValidationError, validate_layout};
