//! Run effects to completion without a store.
//!
//! Handy when a reducer test wants to see which actions its effects feed
//! back, using in-memory collaborators in the environment.

use marquee_core::effect::Effect;

/// Await every effect in order and return the actions they produce.
pub async fn collect_actions<A, I>(effects: I) -> Vec<A>
where
    I: IntoIterator<Item = Effect<A>>,
{
    let mut actions = Vec::new();
    for effect in effects {
        if let Effect::Future(fut) = effect {
            if let Some(action) = fut.await {
                actions.push(action);
            }
        }
    }
    actions
}
