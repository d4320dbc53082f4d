mod movement;
mod output;
mod render;

pub use movement::{
    Choice, EXIT_LABEL, INVALID_OPTION, PROMPT, parse_choice, path_label, try_move,
};
pub use output::{Output, OutputBlock};
pub use render::{DEAD_END, render_room};
