// Composition root for the student testing service.
//
// Responsibilities
// - Read the bind address from the environment.
// - Instantiate the in memory collections and wire them into handlers.
// - Seed the fixed startup data and serve the HTTP router.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
