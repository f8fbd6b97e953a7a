// Composition root for the posts bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the post store.
// - Wire it into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
