use axum::{
    Router,
    routing::{get, post},
};

use crate::adapters::inbound::{results, students, tests};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/students/", post(students::create).get(students::list))
        .route("/students/{id}", get(students::fetch).delete(students::remove))
        .route("/tests/", post(tests::create).get(tests::list))
        .route("/tests/{id}", get(tests::fetch))
        .route("/results/", post(results::submit))
        .route("/results/student/{id}", get(results::list_by_student))
        .route("/results/test/{id}", get(results::list_by_test))
        .route("/results/test/{id}/average", get(results::average))
        .route("/results/test/{id}/highest", get(results::highest))
        .with_state(state)
}
