pub(crate) mod field;
pub(crate) mod game_screen;
pub(crate) mod input;
pub(crate) mod skin;
pub(crate) mod status_line;
