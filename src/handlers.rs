use crate::dashboard::{build_dashboard, next_target};
use crate::errors::AppError;
use crate::models::{
    ActivityRecord, AddActivityRequest, AddActivityResponse, DashboardResponse, LoginForm,
};
use crate::rewards::evaluate_milestone;
use crate::scoring::determine_points;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::NaiveDate;
use tracing::info;

pub const USER_COOKIE: &str = "eco_user";

fn current_user(jar: &CookieJar) -> Option<String> {
    jar.get(USER_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|name| !name.is_empty())
}

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(user) = current_user(&jar) else {
        return Redirect::to("/login").into_response();
    };

    let data = state.data.lock().await;
    let record = data.user(&user);
    Html(ui::render_dashboard(
        &user,
        record.total_points,
        next_target(record.total_points),
    ))
    .into_response()
}

pub async fn login_page() -> Html<&'static str> {
    Html(ui::LOGIN_HTML)
}

pub async fn login(jar: CookieJar, Form(form): Form<LoginForm>) -> Result<(CookieJar, Redirect), AppError> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err(AppError::bad_request("Please enter a user name"));
    }

    let jar = jar.add(Cookie::new(USER_COOKIE, username.to_string()));
    Ok((jar, Redirect::to("/")))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<DashboardResponse>, AppError> {
    let user = current_user(&jar).ok_or_else(AppError::unauthorized)?;
    let data = state.data.lock().await;
    Ok(Json(build_dashboard(&user, &data.user(&user))))
}

pub async fn add_activity(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<AddActivityRequest>,
) -> Result<Json<AddActivityResponse>, AppError> {
    let user = current_user(&jar).ok_or_else(AppError::unauthorized)?;

    // All validation happens before any state is touched, so a rejected
    // submission leaves nothing half-written.
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("Please enter an activity title!"));
    }
    let date_text = payload.date.trim();
    if date_text.is_empty() {
        return Err(AppError::bad_request("Please select a date!"));
    }
    let date: NaiveDate = date_text
        .parse()
        .map_err(|_| AppError::bad_request("Please select a valid date!"))?;

    let category = payload.category.trim().to_string();
    let points = determine_points(title, &category, payload.has_image, &mut rand::rng());

    let mut data = state.data.lock().await;
    let record = data.users.entry(user.clone()).or_default();
    record.activities.push(ActivityRecord {
        title: title.to_string(),
        category,
        points,
        date,
        has_image: payload.has_image,
    });
    record.total_points = record.total_points.saturating_add(points);
    info!(user = %user, points, total = record.total_points, "recorded activity");

    let milestone = evaluate_milestone(record);
    if let Some(event) = &milestone {
        info!(user = %user, tier = event.tier, reward = %event.reward, "milestone unlocked");
    }

    let response = AddActivityResponse {
        points,
        total: record.total_points,
        next_target: next_target(record.total_points),
        milestone,
    };

    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}
