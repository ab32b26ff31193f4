use serde::{Deserialize, Serialize};

use super::{nullable, Id, Page, User};
use crate::config::ApiConfig;

/// A school class. `is_treasurer` is true when the signed-in user runs its finances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolClass {
    pub id: Option<Id>,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub treasurer: Option<User>,
    #[serde(deserialize_with = "nullable")]
    pub member_count: u32,
    #[serde(deserialize_with = "nullable")]
    pub is_treasurer: bool,
}

impl SchoolClass {
    pub(crate) fn with_resolved_assets(mut self, config: &ApiConfig) -> Self {
        self.treasurer = self.treasurer.map(|t| t.with_resolved_avatar(config));
        self
    }

    /// `"1 member"` / `"3 members"`.
    pub fn member_label(&self) -> String {
        match self.member_count {
            1 => "1 member".to_string(),
            n => format!("{n} members"),
        }
    }
}

/// Classes returned by `GET /api/class/list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassPage {
    pub count: u64,
    pub classes: Vec<SchoolClass>,
}

impl ClassPage {
    pub(crate) fn from_page(page: Page<SchoolClass>, config: &ApiConfig) -> Self {
        Self {
            count: page.count,
            classes: page
                .data
                .into_iter()
                .map(|c| c.with_resolved_assets(config))
                .collect(),
        }
    }

    pub fn treasurer_count(&self) -> usize {
        self.classes.iter().filter(|c| c.is_treasurer).count()
    }

    pub fn find(&self, id: &Id) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| c.id.as_ref() == Some(id))
    }
}

/// The 4-digit code parents use to join a class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessCode {
    #[serde(deserialize_with = "nullable")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_defaults() {
        let class: SchoolClass = serde_json::from_value(json!({
            "id": 4,
            "name": "2A",
            "memberCount": null
        }))
        .unwrap();
        assert_eq!(class.member_count, 0);
        assert!(!class.is_treasurer);
        assert!(class.treasurer.is_none());
        assert_eq!(class.member_label(), "0 members");
    }

    #[test]
    fn test_page_helpers() {
        let page = ClassPage {
            count: 2,
            classes: vec![
                SchoolClass {
                    id: Some(Id::from(1)),
                    is_treasurer: true,
                    member_count: 1,
                    ..Default::default()
                },
                SchoolClass {
                    id: Some(Id::from(2)),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(page.treasurer_count(), 1);
        assert_eq!(page.find(&Id::from(1)).unwrap().member_label(), "1 member");
        assert!(page.find(&Id::from(3)).is_none());
    }
}
