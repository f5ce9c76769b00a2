pub mod coordinates;
pub mod journal;
pub mod photo;
pub mod place;
pub mod saved_place;
