use actix_web::{HttpResponse, web};
use log::{debug, info};

use crate::errors::app_error::AppError;
use crate::models::content::KNOWN_CONTENT_TYPES;
use crate::services::content::{CONTENT_LIST_LIMIT, get_content, put_content};
use crate::state::app_state::AppState;
use crate::structs::content_request::{
    ContentListResponse, ContentUpdateRequest, ContentUpdateResponse,
};

pub async fn get_content_block(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let content_type = path.into_inner();
    let block = get_content(app_state.store.as_ref(), &content_type).await?;
    Ok(HttpResponse::Ok().json(block))
}

/// Replace a content block with the payload from the admin editor
pub async fn update_content_block(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    web::Json(req): web::Json<ContentUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let content_type = path.into_inner();

    if let Some(body_type) = req.content_type.as_deref().filter(|t| *t != content_type) {
        debug!(
            "Body type '{}' ignored in favour of path type '{}'",
            body_type, content_type
        );
    }
    if !KNOWN_CONTENT_TYPES.contains(&content_type.as_str()) {
        info!("Writing content of unrecognised type '{}'", content_type);
    }

    put_content(app_state.store.as_ref(), &content_type, req.data).await?;

    Ok(HttpResponse::Ok().json(ContentUpdateResponse {
        success: true,
        content_type,
    }))
}

pub async fn get_all_content(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let content = app_state.store.list_content(CONTENT_LIST_LIMIT).await?;
    Ok(HttpResponse::Ok().json(ContentListResponse { content }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use crate::handlers::test_support::app_state;
    use crate::routes::init_routes;
    use crate::services::content::seed_default_content;

    #[actix_web::test]
    async fn seeded_developers_then_full_replace() {
        let (state, store, _dir) = app_state().await;
        seed_default_content(store.as_ref()).await.unwrap();
        let app = test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/content/developers")
            .to_request();
        let before: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(before["type"], "developers");
        assert_eq!(before["data"].as_array().unwrap().len(), 2);
        assert_eq!(before["data"][0]["id"], "gokay");

        let payload = json!([{ "id": "ada", "name": "Ada" }]);
        let req = test::TestRequest::put()
            .uri("/api/admin/content/developers")
            .set_json(json!({ "type": "developers", "data": payload }))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(res, json!({ "success": true, "type": "developers" }));

        let req = test::TestRequest::get()
            .uri("/api/admin/content/developers")
            .to_request();
        let after: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(after["data"], payload);
    }

    #[actix_web::test]
    async fn unknown_type_reads_as_empty_list() {
        let (state, _, _dir) = app_state().await;
        let app = test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/content/testimonials")
            .to_request();
        let block: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(block, json!({ "type": "testimonials", "data": [] }));
    }

    #[actix_web::test]
    async fn path_type_wins_over_body_type() {
        let (state, _, _dir) = app_state().await;
        let app = test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::put()
            .uri("/api/admin/content/navItems")
            .set_json(json!({ "type": "socialLinks", "data": { "k": 1 } }))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(res["type"], "navItems");

        let req = test::TestRequest::get().uri("/api/admin/content").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all["content"], json!([{ "type": "navItems", "data": { "k": 1 } }]));
    }
}
