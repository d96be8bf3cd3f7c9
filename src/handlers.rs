use crate::errors::AppError;
use crate::models::{
    DashboardView, Exercise, Meal, MutationResponse, NutritionView, ProgressEntry, ProgressView,
    WorkoutView,
};
use crate::repository::Record;
use crate::state::AppState;
use crate::stats::{build_dashboard, build_nutrition_view, build_progress_view, build_workout_view};
use crate::ui::{Page, render_page};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Html,
};
use tracing::debug;

type DraftBody<R> = Result<Json<R>, JsonRejection>;
type IndexParam = Result<Path<usize>, PathRejection>;

// A body serde cannot read is reported with the same notice as a draft
// that fails validation.
fn draft<R: Record>(body: DraftBody<R>) -> Result<R, AppError> {
    match body {
        Ok(Json(draft)) => Ok(draft),
        Err(rejection) => {
            debug!(key = R::KEY, "unreadable draft: {rejection}");
            Err(AppError::unprocessable(R::REJECTED))
        }
    }
}

fn index(param: IndexParam) -> Result<usize, AppError> {
    param.map(|Path(index)| index).map_err(|rejection| {
        AppError::not_found(format!("no record at that position: {rejection}"))
    })
}

pub async fn dashboard_page() -> Html<String> {
    Html(render_page(Page::Dashboard))
}

pub async fn workout_page() -> Html<String> {
    Html(render_page(Page::Workout))
}

pub async fn nutrition_page() -> Html<String> {
    Html(render_page(Page::Nutrition))
}

pub async fn progress_page() -> Html<String> {
    Html(render_page(Page::Progress))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    let workouts = state.workouts.lock().await;
    let meals = state.meals.lock().await;
    let progress = state.progress.lock().await;
    Json(build_dashboard(
        workouts.items(),
        meals.items(),
        progress.items(),
        &state.goals,
    ))
}

pub async fn get_workouts(State(state): State<AppState>) -> Json<WorkoutView> {
    let view = state.workouts.lock().await;
    Json(build_workout_view(view.items()))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    body: DraftBody<Exercise>,
) -> Result<(StatusCode, Json<MutationResponse<WorkoutView>>), AppError> {
    let mut view = state.workouts.lock().await;
    view.edit(draft(body)?);
    let notice = view.submit().await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            notice,
            view: build_workout_view(view.items()),
        }),
    ))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    param: IndexParam,
) -> Result<Json<WorkoutView>, AppError> {
    let mut view = state.workouts.lock().await;
    view.delete(index(param)?).await?;
    Ok(Json(build_workout_view(view.items())))
}

pub async fn get_meals(State(state): State<AppState>) -> Json<NutritionView> {
    let view = state.meals.lock().await;
    Json(build_nutrition_view(view.items(), &state.goals))
}

pub async fn add_meal(
    State(state): State<AppState>,
    body: DraftBody<Meal>,
) -> Result<(StatusCode, Json<MutationResponse<NutritionView>>), AppError> {
    let mut view = state.meals.lock().await;
    view.edit(draft(body)?);
    let notice = view.submit().await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            notice,
            view: build_nutrition_view(view.items(), &state.goals),
        }),
    ))
}

pub async fn delete_meal(
    State(state): State<AppState>,
    param: IndexParam,
) -> Result<Json<NutritionView>, AppError> {
    let mut view = state.meals.lock().await;
    view.delete(index(param)?).await?;
    Ok(Json(build_nutrition_view(view.items(), &state.goals)))
}

pub async fn get_progress(State(state): State<AppState>) -> Json<ProgressView> {
    let view = state.progress.lock().await;
    Json(build_progress_view(view.items()))
}

pub async fn add_progress(
    State(state): State<AppState>,
    body: DraftBody<ProgressEntry>,
) -> Result<(StatusCode, Json<MutationResponse<ProgressView>>), AppError> {
    let mut view = state.progress.lock().await;
    view.edit(draft(body)?);
    let notice = view.submit().await?;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            notice,
            view: build_progress_view(view.items()),
        }),
    ))
}

pub async fn delete_progress(
    State(state): State<AppState>,
    param: IndexParam,
) -> Result<Json<ProgressView>, AppError> {
    let mut view = state.progress.lock().await;
    view.delete(index(param)?).await?;
    Ok(Json(build_progress_view(view.items())))
}
