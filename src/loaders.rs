//! Route Loaders
//!
//! One async loader per route. Each marks its collection as loading, fetches,
//! and stores either the records or the error text; failures stay local.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::Loadable;
use crate::router::Route;
use crate::store::AppStateStoreFields;

/// Start the loader for `route`, with the page spinner up until it settles.
pub fn spawn_route_loader(ctx: AppContext, route: Route) {
    spawn_local(async move {
        ctx.store.loading().set(true);
        match route {
            Route::Overview => load_overview_stats(ctx).await,
            Route::Tasks => load_tasks(ctx).await,
            Route::Projects => load_projects(ctx).await,
            Route::Notes => load_notes(ctx).await,
            Route::Analytics => load_analytics(ctx).await,
            Route::Documents => {}
        }
        ctx.store.loading().set(false);
    });
}

pub async fn load_tasks(ctx: AppContext) {
    tracing::debug!("loading tasks");
    ctx.store.tasks().set(Loadable::Loading);
    match ctx.api().list_tasks().await {
        Ok(tasks) => {
            tracing::info!(count = tasks.len(), "tasks loaded");
            ctx.store.tasks().set(Loadable::Loaded(tasks));
        }
        Err(err) => {
            tracing::error!(error = %err, "loading tasks failed");
            ctx.store.tasks().set(Loadable::Failed(err.to_string()));
        }
    }
}

pub async fn load_projects(ctx: AppContext) {
    tracing::debug!("loading projects");
    ctx.store.projects().set(Loadable::Loading);
    match ctx.api().list_projects().await {
        Ok(projects) => {
            tracing::info!(count = projects.len(), "projects loaded");
            ctx.store.projects().set(Loadable::Loaded(projects));
        }
        Err(err) => {
            tracing::error!(error = %err, "loading projects failed");
            ctx.store.projects().set(Loadable::Failed(err.to_string()));
        }
    }
}

pub async fn load_notes(ctx: AppContext) {
    tracing::debug!("loading notes");
    ctx.store.notes().set(Loadable::Loading);
    match ctx.api().list_notes().await {
        Ok(notes) => {
            tracing::info!(count = notes.len(), "notes loaded");
            ctx.store.notes().set(Loadable::Loaded(notes));
        }
        Err(err) => {
            tracing::error!(error = %err, "loading notes failed");
            ctx.store.notes().set(Loadable::Failed(err.to_string()));
        }
    }
}

/// Aggregates for the analytics page.
pub async fn load_analytics(ctx: AppContext) {
    tracing::debug!("loading analytics");
    ctx.store.analytics().set(Loadable::Loading);
    fetch_analytics(ctx).await;
}

/// Overview tiles read the same aggregate; the previous figures stay on
/// screen while refreshing so mutations don't blank the tiles.
pub async fn load_overview_stats(ctx: AppContext) {
    tracing::debug!("loading overview stats");
    if ctx.store.analytics().with_untracked(|a| a.loaded().is_none()) {
        ctx.store.analytics().set(Loadable::Loading);
    }
    fetch_analytics(ctx).await;
}

async fn fetch_analytics(ctx: AppContext) {
    match ctx.api().analytics().await {
        Ok(analytics) => {
            tracing::info!(total = analytics.total_tasks, completed = analytics.completed_tasks, "analytics loaded");
            ctx.store.analytics().set(Loadable::Loaded(analytics));
        }
        Err(err) => {
            tracing::error!(error = %err, "loading analytics failed");
            ctx.store.analytics().set(Loadable::Failed(err.to_string()));
        }
    }
}
