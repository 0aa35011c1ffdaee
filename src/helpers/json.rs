use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use serde_derive::Serialize;

/// Response envelope shared by every API route.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

#[derive(Serialize, Default)]
pub(crate) struct JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize + Default,
{
    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn ok(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(JsonResponse {
            status: "OK".to_string(),
            message: message.into(),
            code: 200,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }

    pub(crate) fn bad_request(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    pub(crate) fn not_found(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::NOT_FOUND, message.into())
    }

    pub(crate) fn internal_server_error(self, message: impl Into<String>) -> actix_web::Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    fn error(self, code: StatusCode, message: String) -> actix_web::Error {
        let body = JsonResponse {
            status: "Error".to_string(),
            message: message.clone(),
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        };
        let response = HttpResponse::build(code).json(body);
        error::InternalError::from_response(message, response).into()
    }
}
