pub(crate) mod board;
pub(crate) mod menu;
pub(crate) mod theme;
