use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i64,
}

#[derive(Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Students in insertion order.
pub type Db = Arc<RwLock<Vec<Student>>>;

pub fn app() -> Router {
    app_with(Db::default())
}

/// Builds the router over an existing store, so tests can seed or inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/students", get(list_students))
        .route("/add-student", post(create_student))
        .route("/update/{id}", put(update_student))
        .route("/students/{id}", delete(delete_student))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_students(State(db): State<Db>) -> Json<Vec<Student>> {
    Json(db.read().await.clone())
}

async fn create_student(
    State(db): State<Db>,
    Json(input): Json<StudentInput>,
) -> (StatusCode, Json<Student>) {
    let student = Student {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        email: input.email,
        age: input.age,
    };
    tracing::info!(id = %student.id, "student created");
    db.write().await.push(student.clone());
    (StatusCode::CREATED, Json(student))
}

async fn update_student(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, StatusCode> {
    let mut students = db.write().await;
    let student = students
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    student.name = input.name;
    student.email = input.email;
    student.age = input.age;
    tracing::info!(%id, "student updated");
    Ok(Json(student.clone()))
}

async fn delete_student(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut students = db.write().await;
    let index = students
        .iter()
        .position(|s| s.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    students.remove(index);
    tracing::info!(%id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}
