//! Core library exports for the simple-catalog service.
//!
//! This crate exposes the persistence layer (`db`, `domain`, `models`,
//! `schema`, `repository`) together with the HTTP layer (`dto`, `forms`,
//! `routes`, `services`) used by the catalog web application.

pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
