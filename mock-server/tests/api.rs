use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Db, Student};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn seeded(students: &[(&str, &str)]) -> Db {
    let rows = students
        .iter()
        .map(|(id, name)| Student {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{name}@x.com"),
            age: 20,
        })
        .collect();
    Db::new(tokio::sync::RwLock::new(rows))
}

// --- list ---

#[tokio::test]
async fn list_students_empty() {
    let resp = app().oneshot(empty_request("GET", "/students")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let students: Vec<Student> = body_json(resp).await;
    assert!(students.is_empty());
}

#[tokio::test]
async fn list_students_keeps_insertion_order() {
    let db = seeded(&[("b", "Bo"), ("a", "Ada")]);
    let resp = app_with(db).oneshot(empty_request("GET", "/students")).await.unwrap();

    let students: Vec<Student> = body_json(resp).await;
    let ids: Vec<_> = students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

// --- create ---

#[tokio::test]
async fn add_student_returns_201() {
    let db = Db::default();
    let resp = app_with(db.clone())
        .oneshot(json_request(
            "POST",
            "/add-student",
            r#"{"name":"Ada","email":"a@x.com","age":30}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let student: Student = body_json(resp).await;
    assert_eq!(student.name, "Ada");
    assert_eq!(student.age, 30);
    assert!(!student.id.is_empty());
    assert_eq!(db.read().await.len(), 1);
}

#[tokio::test]
async fn add_student_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/add-student", r#"{"name":"Ada"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn add_student_null_age_is_rejected() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/add-student",
            r#"{"name":"Ada","email":"a@x.com","age":null}"#,
        ))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn add_student_wrong_method_on_students() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/students",
            r#"{"name":"Ada","email":"a@x.com","age":30}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- update ---

#[tokio::test]
async fn update_student_replaces_fields() {
    let db = seeded(&[("7", "Ada")]);
    let resp = app_with(db.clone())
        .oneshot(json_request(
            "PUT",
            "/update/7",
            r#"{"name":"Ada L.","email":"ada@x.com","age":31}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let student: Student = body_json(resp).await;
    assert_eq!(student.id, "7");
    assert_eq!(student.name, "Ada L.");
    assert_eq!(db.read().await[0].age, 31);
}

#[tokio::test]
async fn update_student_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/update/missing",
            r#"{"name":"Nope","email":"n@x.com","age":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_student_returns_204() {
    let db = seeded(&[("7", "Ada"), ("8", "Bo")]);
    let resp = app_with(db.clone())
        .oneshot(empty_request("DELETE", "/students/7"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
    let remaining = db.read().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "8");
}

#[tokio::test]
async fn delete_student_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/students/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/add-student",
            r#"{"name":"Grace","email":"g@x.com","age":45}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Student = body_json(resp).await;
    let id = created.id;

    // list
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/students"))
        .await
        .unwrap();
    let students: Vec<Student> = body_json(resp).await;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, id);

    // update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/update/{id}"),
            r#"{"name":"Grace H.","email":"g@x.com","age":46}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Student = body_json(resp).await;
    assert_eq!(updated.name, "Grace H.");
    assert_eq!(updated.age, 46);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/students/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // delete again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/students/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/students"))
        .await
        .unwrap();
    let students: Vec<Student> = body_json(resp).await;
    assert!(students.is_empty());
}
