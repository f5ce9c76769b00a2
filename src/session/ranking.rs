//! Desirability ranking for the "decide now" flow.

use crate::models::place::Place;

/// Any rating beats none; among rated places the higher rating wins.
/// A rating of exactly zero still counts as rated.
pub fn score(place: &Place) -> f64 {
    match place.rating {
        Some(rating) => rating + 1.0,
        None => 0.0,
    }
}

/// Sorts by descending score. The sort is stable, so ties keep input order.
pub fn rank(places: &[Place]) -> Vec<Place> {
    let mut ranked = places.to_vec();
    ranked.sort_by(|a, b| score(b).total_cmp(&score(a)));
    ranked
}
