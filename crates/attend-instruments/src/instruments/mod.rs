pub mod asrs;
pub mod criteria;
pub mod executive;
