use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{ProductForm, ProductPayload};
use crate::repository::DieselRepository;
use crate::routes::ErrorMessage;
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, list_products as list_products_service,
    products_by_category_name as products_by_category_name_service,
    update_product as update_product_service,
};

#[get("/product")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/product/{id}")]
pub async fn get_product(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match get_product_service(id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Product not found"))
        }
        Err(err) => {
            log::error!("Failed to get product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/product")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    let payload: ProductPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorMessage::new(e.to_string())),
    };

    match create_product_service(payload, repo.get_ref()) {
        Ok(product) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/product/{}", product.id)))
            .json(product),
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().json(ErrorMessage::new("Error creating product"))
        }
    }
}

#[put("/product/{id}")]
pub async fn update_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    let payload: ProductPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorMessage::new(e.to_string())),
    };

    match update_product_service(id.into_inner(), payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::BadRequest(message)) => {
            HttpResponse::BadRequest().json(ErrorMessage::new(message))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Product not found"))
        }
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().json(ErrorMessage::new("Error updating product"))
        }
    }
}

#[delete("/product/{id}")]
pub async fn delete_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("Product not found"))
        }
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().json(ErrorMessage::new("Error deleting product"))
        }
    }
}

#[get("/product/category/{name}")]
pub async fn products_by_category_name(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_by_category_name_service(&name, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorMessage::new("No products found for the category"))
        }
        Err(err) => {
            log::error!("Failed to list products by category: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
