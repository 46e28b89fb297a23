pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::catalog;
use crate::roadmap::handlers as roadmap_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static roadmap catalog (read-only)
        .route("/api/v1/roadmaps/static", get(catalog::handle_list_static))
        .route(
            "/api/v1/roadmaps/static/:id",
            get(catalog::handle_get_static),
        )
        // User roadmap aggregator
        .route(
            "/api/v1/roadmaps/user",
            get(roadmap_handlers::handle_get_user_roadmap),
        )
        .route(
            "/api/v1/roadmaps/user/add",
            post(roadmap_handlers::handle_add_task),
        )
        .route(
            "/api/v1/roadmaps/user/add-roadmap",
            post(roadmap_handlers::handle_add_roadmap),
        )
        .route(
            "/api/v1/roadmaps/user/update",
            patch(roadmap_handlers::handle_update_task),
        )
        .route(
            "/api/v1/roadmaps/user/preferences",
            patch(roadmap_handlers::handle_update_preferences),
        )
        .route(
            "/api/v1/roadmaps/user/delete-roadmap/:roadmap_id",
            delete(roadmap_handlers::handle_delete_roadmap),
        )
        // Resumes (owner-scoped CRUD + rendering)
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_create_resume)
                .get(resume_handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume)
                .put(resume_handlers::handle_update_resume)
                .delete(resume_handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/render",
            get(resume_handlers::handle_render_resume),
        )
        .with_state(state)
}
