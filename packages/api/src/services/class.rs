use tracing::info;

use super::{envelope_message, failed, reload_after, SchoolMoney};
use crate::error::{ApiError, ApiResult};
use crate::models::{AccessCode, ClassEditRequest, ClassPage, Envelope, Id, Page, SchoolClass};
use crate::resources;
use crate::resources::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::transport::Transport;
use crate::validation;

fn require_class_id(id: &Id) -> ApiResult<()> {
    validation::require(id.as_str(), "Class ID is required")
}

impl<T: Transport> SchoolMoney<T> {
    pub async fn create_class(&self, name: &str) -> ApiResult<String> {
        async {
            validation::require(name, "Class name is required")?;
            let message = envelope_message(
                resources::class::create_class(&self.transport, name.trim()).await?,
            )?;
            info!("Class created: {message}");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Create class", "Failed to create a class."))
    }

    /// Classes the user belongs to, or only those they run when `is_treasurer`.
    pub async fn list_classes(&self, page: u32, limit: u32, is_treasurer: bool) -> ApiResult<ClassPage> {
        async {
            let value =
                resources::class::list_classes(&self.transport, page, limit, is_treasurer).await?;
            let page = Envelope::<Page<SchoolClass>>::from_value(value)?
                .data
                .unwrap_or_default();
            let classes = ClassPage::from_page(page, &self.config);
            info!("Retrieved {} classes", classes.count);
            Ok::<_, ApiError>(classes)
        }
        .await
        .map_err(failed("Get classes", "Failed to retrieve classes."))
    }

    pub async fn update_class(&self, id: &Id, name: &str) -> ApiResult<String> {
        async {
            require_class_id(id)?;
            validation::require(name, "Class name is required")?;
            let body = ClassEditRequest {
                name: name.trim().to_string(),
            };
            let message =
                envelope_message(resources::class::update_class(&self.transport, id, &body).await?)?;
            info!("Class {id} updated");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Update class", "Failed to update class"))
    }

    pub async fn delete_class(&self, id: &Id) -> ApiResult<String> {
        async {
            require_class_id(id)?;
            let message =
                envelope_message(resources::class::delete_class(&self.transport, id).await?)?;
            info!("Class {id} deleted");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Delete class", "Failed to delete class"))
    }

    /// The 4-digit code a treasurer shares so parents can join the class.
    pub async fn get_access_code(&self, id: &Id) -> ApiResult<AccessCode> {
        async {
            require_class_id(id)?;
            let value = resources::class::get_access_code(&self.transport, id).await?;
            Envelope::<AccessCode>::from_value(value)?.require_data("access code")
        }
        .await
        .map_err(failed("Get access code", "Failed to get access code"))
    }

    pub async fn join_class(&self, class_id: &Id, student_id: &Id, access_code: &str) -> ApiResult<String> {
        async {
            require_class_id(class_id)?;
            validation::require(student_id.as_str(), "Student ID is required")?;
            validation::access_code(access_code)?;

            info!("Joining class {class_id} with student {student_id}");
            let message = envelope_message(
                resources::class::join_class(&self.transport, class_id, student_id, access_code)
                    .await?,
            )?;
            info!("Joined class: {message}");
            Ok::<_, ApiError>(message)
        }
        .await
        .map_err(failed("Join class", "Failed to join class"))
    }

    /// Create, then fetch the tab's first page once. `None` when only the refetch failed.
    pub async fn create_class_and_reload(
        &self,
        name: &str,
        is_treasurer: bool,
    ) -> ApiResult<Option<ClassPage>> {
        self.create_class(name).await?;
        let list = self.list_classes(DEFAULT_PAGE, DEFAULT_LIMIT, is_treasurer);
        Ok(reload_after("Create class", list).await)
    }

    pub async fn update_class_and_reload(
        &self,
        id: &Id,
        name: &str,
        is_treasurer: bool,
    ) -> ApiResult<Option<ClassPage>> {
        self.update_class(id, name).await?;
        let list = self.list_classes(DEFAULT_PAGE, DEFAULT_LIMIT, is_treasurer);
        Ok(reload_after("Update class", list).await)
    }

    pub async fn delete_class_and_reload(
        &self,
        id: &Id,
        is_treasurer: bool,
    ) -> ApiResult<Option<ClassPage>> {
        self.delete_class(id).await?;
        let list = self.list_classes(DEFAULT_PAGE, DEFAULT_LIMIT, is_treasurer);
        Ok(reload_after("Delete class", list).await)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::config::ApiConfig;
    use crate::mock::{query, MockTransport};
    use crate::models::Id;
    use crate::services::SchoolMoney;
    use crate::transport::Method;

    fn classes() -> MockTransport {
        MockTransport::new(|request| match request.path.as_str() {
            "/api/class/list" => Ok(json!({
                "data": {
                    "count": 2,
                    "data": [
                        { "id": 7, "name": "2A", "memberCount": 12, "isTreasurer": true,
                          "treasurer": { "email": "t@s.pl", "avatar": "a.png" } },
                        { "id": 8, "name": "3B", "memberCount": null }
                    ]
                },
                "message": "OK",
                "httpStatus": "OK"
            })),
            "/api/class-access-token/7" => Ok(json!({ "data": { "token": "0427" } })),
            _ => Ok(Value::Null),
        })
    }

    fn api(transport: &MockTransport) -> SchoolMoney<MockTransport> {
        SchoolMoney::new(transport.clone(), ApiConfig::new("https://api.example.com"))
    }

    #[tokio::test]
    async fn test_list_classes_is_deterministic() {
        let transport = classes();
        let api = api(&transport);

        let first = api.list_classes(1, 10, false).await.unwrap();
        let second = api.list_classes(1, 10, false).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.count, 2);
        assert_eq!(first.treasurer_count(), 1);
        assert_eq!(
            first.classes[0].treasurer.as_ref().unwrap().avatar,
            "https://api.example.com/a.png"
        );
        assert_eq!(first.classes[1].member_count, 0);
    }

    #[tokio::test]
    async fn test_list_classes_query() {
        let transport = classes();
        api(&transport).list_classes(1, 10, true).await.unwrap();
        let request = &transport.requests()[0];
        assert_eq!(query(request, "isTreasurer"), Some("true"));
        assert_eq!(query(request, "page"), Some("1"));
    }

    #[tokio::test]
    async fn test_join_class_rejects_bad_codes() {
        let transport = classes();
        let api = api(&transport);

        for code in ["12a4", "123", "12345", "١٢٣٤"] {
            let err = api
                .join_class(&Id::from(7), &Id::from(1), code)
                .await
                .unwrap_err();
            assert!(err.is_validation(), "{code} should be rejected locally");
        }
        let err = api
            .join_class(&Id::from(7), &Id::from(""), "1234")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Student ID is required");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_join_class_query() {
        let transport = classes();
        api(&transport)
            .join_class(&Id::from(7), &Id::from(1), "0427")
            .await
            .unwrap();
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/class-member/add");
        assert_eq!(query(request, "classId"), Some("7"));
        assert_eq!(query(request, "studentId"), Some("1"));
        assert_eq!(query(request, "accessCode"), Some("0427"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_create_class_name_in_query() {
        let transport = classes();
        let page = api(&transport)
            .create_class_and_reload("  4C ", true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.count, 2);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "/api/class/create");
        assert_eq!(query(&requests[0], "name"), Some("4C"));
        assert_eq!(query(&requests[1], "isTreasurer"), Some("true"));
    }

    #[tokio::test]
    async fn test_access_code() {
        let transport = classes();
        let code = api(&transport).get_access_code(&Id::from(7)).await.unwrap();
        assert_eq!(code.token, "0427");
    }

    #[tokio::test]
    async fn test_update_class_requires_name() {
        let transport = classes();
        let err = api(&transport)
            .update_class_and_reload(&Id::from(7), " ", false)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Class name is required");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_class_stands_when_reload_fails() {
        let transport = MockTransport::new(|request| match request.path.as_str() {
            "/api/class/create" => Ok(json!({ "message": "Class created" })),
            _ => Err(crate::error::ApiError::from_response(503, b"")),
        });

        let page = api(&transport)
            .create_class_and_reload("4C", false)
            .await
            .unwrap();

        assert!(page.is_none());
        assert_eq!(transport.count(Method::Post, "/api/class/create"), 1);
    }
}
