use super::intent::Intent;
use super::state::ModelState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: ModelState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Apply `intent` to the state held in `slot`, in place.
pub fn reduce_in_place<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
