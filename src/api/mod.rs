//! API Module
//!
//! HTTP handlers and routing for the student REST API.
//!
//! # Endpoints
//! - `GET /` - Service banner
//! - `GET /health` - Health check endpoint
//! - `GET /estudiantes/` - List all students
//! - `POST /estudiantes/` - Create a student
//! - `GET /estudiantes/:id` - Fetch one student
//! - `PUT /estudiantes/:id` - Replace a student's name and age
//! - `DELETE /estudiantes/:id` - Delete a student

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
