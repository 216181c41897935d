use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{CategoryForm, CategoryPayload};
use crate::repository::DieselRepository;
use crate::routes::ErrorMessage;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    products_by_category_name as products_by_category_name_service,
    update_category as update_category_service,
};

#[get("/category")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/category/{id}")]
pub async fn get_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_category_service(id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Category not found"))
        }
        Err(err) => {
            log::error!("Failed to get category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/category")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let payload: CategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorMessage::new(e.to_string())),
    };

    match create_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/category/{}", category.id)))
            .json(category),
        Err(err) => {
            log::error!("Failed to create category: {err}");
            HttpResponse::InternalServerError().json(ErrorMessage::new("Error creating category"))
        }
    }
}

#[put("/category/{id}")]
pub async fn update_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let payload: CategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorMessage::new(e.to_string())),
    };

    match update_category_service(id.into_inner(), payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::BadRequest(message)) => {
            HttpResponse::BadRequest().json(ErrorMessage::new(message))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Category not found"))
        }
        Err(err) => {
            log::error!("Failed to update category: {err}");
            HttpResponse::InternalServerError().json(ErrorMessage::new("Error updating category"))
        }
    }
}

#[delete("/category/{id}")]
pub async fn delete_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Category not found"))
        }
        Err(err) => {
            log::error!("Failed to delete category: {err}");
            HttpResponse::InternalServerError().json(ErrorMessage::new("Error deleting category"))
        }
    }
}

#[get("/category/name/{name}/products")]
pub async fn products_by_category_name(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_by_category_name_service(&name, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Category not found"))
        }
        Err(err) => {
            log::error!("Failed to list products for category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
