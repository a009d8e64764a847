//! The API is the user-facing interface that allows the user to view the
//! current setting and pick a new one. Picking is handled elsewhere; we only
//! render the form that submits to it.

use crate::{
    config::{Config, PageConfig},
    metric::Metric,
    render::render_page,
    state::{current_setting, FileSource, SettingSource},
};
use anyhow::Context;
use log::{debug, error, info};
use rocket::{
    http::Status, response::content::RawHtml, routes, serde::json::Json,
    Build, Rocket, State,
};
use serde::Serialize;
use std::sync::Arc;

/// Launch the API
pub async fn start() -> anyhow::Result<()> {
    let rocket = rocket::build();
    let config = Config::load(rocket.figment())?;
    let source = Arc::new(FileSource::new(&config.settings_path));
    info!("Reading setting from {}", source.name());
    mount(rocket, config.page, source)
        .launch()
        .await
        .context("Error starting API")?;
    Ok(())
}

/// Attach state and routes. Split out from [start] so any source can be
/// plugged in.
pub fn mount(
    rocket: Rocket<Build>,
    page: PageConfig,
    source: Arc<dyn SettingSource>,
) -> Rocket<Build> {
    rocket
        .manage(page)
        .manage(source)
        .mount("/", routes![get_page, get_setting])
}

/// Render the control page, with the current setting pre-selected
#[rocket::get("/")]
async fn get_page(
    page: &State<PageConfig>,
    source: &State<Arc<dyn SettingSource>>,
) -> Result<RawHtml<String>, Status> {
    let selected = current_setting(source.inner().as_ref()).await;
    debug!("Rendering page with selection {selected:?}");
    let html = render_page(page, selected).map_err(|err| {
        error!("{err:?}");
        Status::InternalServerError
    })?;
    Ok(RawHtml(html))
}

#[derive(Debug, Serialize)]
struct SettingResponse {
    setting: Option<Metric>,
}

/// Get the current setting
#[rocket::get("/setting")]
async fn get_setting(
    source: &State<Arc<dyn SettingSource>>,
) -> Json<SettingResponse> {
    Json(SettingResponse {
        setting: current_setting(source.inner().as_ref()).await,
    })
}
