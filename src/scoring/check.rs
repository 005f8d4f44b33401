use crate::models::Placement;

/// Compares an answer against the expected placements, ignoring order.
///
/// Both lists must be the same length and every expected user must appear
/// in the answer with the same place.
pub fn check_result(answer: &[Placement], expected: &[Placement]) -> bool {
    if answer.len() != expected.len() {
        return false;
    }

    expected.iter().all(|wanted| {
        answer
            .iter()
            .find(|given| given.user_id == wanted.user_id)
            .map_or(false, |given| given.place == wanted.place)
    })
}
