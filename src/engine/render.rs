use crate::engine::movement::{EXIT_LABEL, path_label};
use crate::engine::output::Output;
use crate::map::Room;

pub const DEAD_END: &str = "[END OF THE LINE] This room has no more paths.";

/// Shows where the explorer stands and which paths lead on from here.
/// A leaf gets the dead-end notice instead of a path list.
pub fn render_room(out: &mut Output, room: &Room) {
    out.title(format!("You are in: {}", room.name()));

    if room.is_leaf() {
        out.event(DEAD_END);
        return;
    }

    let mut lines = vec!["Available paths:".to_string()];
    for (dir, next) in room.paths() {
        lines.push(format!("  {}: {}", path_label(dir), next.name()));
    }
    lines.push(format!("  {}", EXIT_LABEL));

    out.set_paths(lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Direction, build_mansion};

    #[test]
    fn junction_lists_both_paths_and_exit() {
        let map = build_mansion();
        let mut out = Output::new();
        render_room(&mut out, map.root().unwrap());

        assert_eq!(
            out.lines(),
            vec![
                "You are in: Entrance Hall",
                "Available paths:",
                "  (L)eft: Kitchen",
                "  (R)ight: Living Room",
                "  (Q)uit the mansion",
            ]
        );
    }

    #[test]
    fn absent_direction_is_not_offered() {
        let map = build_mansion();
        let library = map.room_at(&[Direction::Left, Direction::Right]).unwrap();
        let mut out = Output::new();
        render_room(&mut out, library);

        let lines = out.lines();
        assert!(lines.contains(&"  (L)eft: Secret Room"));
        assert!(!lines.iter().any(|l| l.contains("(R)ight")));
        assert!(lines.contains(&"  (Q)uit the mansion"));
    }

    #[test]
    fn leaf_shows_dead_end() {
        let map = build_mansion();
        let pantry = map.room_at(&[Direction::Left, Direction::Left]).unwrap();
        let mut out = Output::new();
        render_room(&mut out, pantry);

        assert_eq!(out.lines(), vec!["You are in: Pantry", DEAD_END]);
    }
}
