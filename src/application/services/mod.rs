//! Business logic services.

pub mod shortener_service;

pub use shortener_service::ShortenerService;
