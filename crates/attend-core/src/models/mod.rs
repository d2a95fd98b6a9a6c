pub mod answers;
pub mod asrs;
pub mod criteria;
pub mod executive;
pub mod question;
pub mod recommendation;
pub mod synthesis;
