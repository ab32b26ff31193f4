use tracing::info;

use super::{envelope_message, failed, reload_after, SchoolMoney};
use crate::error::{ApiError, ApiResult};
use crate::models::{Envelope, Id, Page, Student, StudentPage, StudentRequest};
use crate::resources;
use crate::resources::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::transport::Transport;
use crate::validation;

fn validate_student(request: &StudentRequest) -> ApiResult<StudentRequest> {
    let request = request.trimmed();
    validation::require(&request.first_name, "First name is required")?;
    validation::require(&request.last_name, "Last name is required")?;
    validation::birth_date(&request.birth_date)?;
    Ok(request)
}

fn require_id(id: &Id) -> ApiResult<()> {
    validation::require(id.as_str(), "Student ID is required")
}

impl<T: Transport> SchoolMoney<T> {
    pub async fn create_student(&self, request: &StudentRequest) -> ApiResult<String> {
        async {
            let body = validate_student(request)?;
            let message =
                envelope_message(resources::student::create_student(&self.transport, &body).await?)?;
            info!("Student created: {message}");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Create student", "Failed to create student."))
    }

    pub async fn list_students(&self, page: u32, limit: u32) -> ApiResult<StudentPage> {
        async {
            let value = resources::student::list_students(&self.transport, page, limit).await?;
            let page = Envelope::<Page<Student>>::from_value(value)?
                .data
                .unwrap_or_default();
            let students = StudentPage::from_page(page, &self.config);
            info!("Retrieved {} students", students.count);
            Ok::<_, ApiError>(students)
        }
        .await
        .map_err(failed("Get students", "Failed to retrieve students."))
    }

    pub async fn update_student(&self, id: &Id, request: &StudentRequest) -> ApiResult<String> {
        async {
            require_id(id)?;
            let body = validate_student(request)?;
            let message = envelope_message(
                resources::student::update_student(&self.transport, id, &body).await?,
            )?;
            info!("Student {id} updated");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Update student", "Failed to update student"))
    }

    pub async fn delete_student(&self, id: &Id) -> ApiResult<String> {
        async {
            require_id(id)?;
            let message =
                envelope_message(resources::student::delete_student(&self.transport, id).await?)?;
            info!("Student {id} deleted");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Delete student", "Failed to delete student"))
    }

    /// Create, then fetch the first page once. `None` when only the refetch failed.
    pub async fn add_student_and_reload(
        &self,
        request: &StudentRequest,
    ) -> ApiResult<Option<StudentPage>> {
        self.create_student(request).await?;
        Ok(reload_after("Create student", self.list_students(DEFAULT_PAGE, DEFAULT_LIMIT)).await)
    }

    pub async fn update_student_and_reload(
        &self,
        id: &Id,
        request: &StudentRequest,
    ) -> ApiResult<Option<StudentPage>> {
        self.update_student(id, request).await?;
        Ok(reload_after("Update student", self.list_students(DEFAULT_PAGE, DEFAULT_LIMIT)).await)
    }

    pub async fn delete_student_and_reload(&self, id: &Id) -> ApiResult<Option<StudentPage>> {
        self.delete_student(id).await?;
        Ok(reload_after("Delete student", self.list_students(DEFAULT_PAGE, DEFAULT_LIMIT)).await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::{json, Value};

    use crate::config::ApiConfig;
    use crate::mock::{query, MockTransport};
    use crate::models::{Id, StudentRequest};
    use crate::services::SchoolMoney;
    use crate::transport::Method;

    /// A tiny backend holding a student list.
    fn backend() -> MockTransport {
        let students: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(vec![json!({
            "id": 1,
            "firstName": "Ola",
            "lastName": "Nowak",
            "birthDate": "2013-05-01"
        })]));
        MockTransport::new(move |request| {
            let mut students = students.lock().unwrap();
            match (request.method, request.path.as_str()) {
                (Method::Post, "/api/student/create") => {
                    let mut student = request.body.clone().unwrap();
                    student["id"] = json!(students.len() as i64 + 1);
                    students.push(student);
                    Ok(json!({ "message": "Student created", "httpStatus": "CREATED" }))
                }
                (Method::Get, "/api/student/list") => Ok(json!({
                    "data": { "count": students.len(), "data": students.clone() },
                    "httpStatus": "OK"
                })),
                (Method::Delete, path) => {
                    let id = path.trim_start_matches("/api/student/").to_string();
                    students.retain(|s| s["id"].to_string() != id);
                    Ok(json!({ "message": "Deleted" }))
                }
                _ => Ok(Value::Null),
            }
        })
    }

    fn api(transport: &MockTransport) -> SchoolMoney<MockTransport> {
        SchoolMoney::new(transport.clone(), ApiConfig::default())
    }

    #[tokio::test]
    async fn test_add_student_reloads_once() {
        let transport = backend();
        let api = api(&transport);

        let page = api
            .add_student_and_reload(&StudentRequest::new("Maria", "Lopez", "2012-03-15"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(transport.count(Method::Post, "/api/student/create"), 1);
        assert_eq!(transport.count(Method::Get, "/api/student/list"), 1);
        assert_eq!(page.count, 2);
        assert!(page.contains(&Id::from(2)));

        let list = transport
            .requests()
            .into_iter()
            .find(|r| r.path == "/api/student/list")
            .unwrap();
        assert_eq!(query(&list, "page"), Some("1"));
        assert_eq!(query(&list, "limit"), Some("10"));
    }

    #[tokio::test]
    async fn test_invalid_student_makes_no_request() {
        let transport = backend();
        let err = api(&transport)
            .add_student_and_reload(&StudentRequest::new("Maria", "Lopez", "15.03.2012"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Birth date must be in format YYYY-MM-DD");
        assert!(transport.requests().is_empty());

        let err = api(&transport)
            .create_student(&StudentRequest::new("  ", "Lopez", "2012-03-15"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "First name is required");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_blank_name_reports_it() {
        let transport = backend();
        let err = api(&transport)
            .update_student_and_reload(&Id::from(1), &StudentRequest::new("Ola", " ", "2013-05-01"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Last name is required");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_student_and_reload() {
        let transport = backend();
        let page = api(&transport)
            .delete_student_and_reload(&Id::from(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.count, 0);
        assert!(page.students.is_empty());
        assert_eq!(transport.count(Method::Get, "/api/student/list"), 1);
    }

    #[tokio::test]
    async fn test_failed_write_skips_reload() {
        let transport = MockTransport::new(|_| {
            Err(crate::error::ApiError::from_response(500, br#"{"message":""}"#))
        });
        let err = api(&transport)
            .update_student_and_reload(
                &Id::from(1),
                &StudentRequest::new("Maria", "Lopez", "2012-03-15"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_create_stands_when_reload_fails() {
        let transport = MockTransport::new(|request| match request.method {
            Method::Post => Ok(json!({ "message": "Student created" })),
            _ => Err(crate::error::ApiError::from_response(
                503,
                br#"{"message":"Service unavailable"}"#,
            )),
        });

        let page = api(&transport)
            .add_student_and_reload(&StudentRequest::new("Maria", "Lopez", "2012-03-15"))
            .await
            .unwrap();

        assert!(page.is_none());
        assert_eq!(transport.count(Method::Post, "/api/student/create"), 1);
        assert_eq!(transport.count(Method::Get, "/api/student/list"), 1);
    }

    #[tokio::test]
    async fn test_list_students_empty_payload() {
        let transport = MockTransport::new(|_| Ok(json!({ "data": null })));
        let page = api(&transport).list_students(1, 10).await.unwrap();
        assert_eq!(page.count, 0);
        assert!(page.students.is_empty());
    }
}
