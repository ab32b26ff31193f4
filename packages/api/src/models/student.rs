use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{nullable, Id, Page, SchoolClass, User};
use crate::config::ApiConfig;

/// A child registered by the signed-in parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    pub id: Option<Id>,
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    /// `YYYY-MM-DD` as sent by the backend.
    pub birth_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub avatar: String,
    pub parent: Option<User>,
    #[serde(deserialize_with = "nullable")]
    pub classes: Vec<SchoolClass>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Birth date parsed from its first ten characters, so timestamps also work.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let raw = self.birth_date.as_deref()?.trim();
        let date = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Age in whole years on `today`. `None` without a valid birth date or when the
    /// birth date lies after `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let birth = self.birth_date()?;
        if birth > today {
            return None;
        }
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Age in whole years on the local calendar date.
    pub fn age(&self) -> Option<u32> {
        self.age_on(Local::now().date_naive())
    }

    pub(crate) fn with_resolved_assets(mut self, config: &ApiConfig) -> Self {
        self.avatar = config.resolve_asset(&self.avatar);
        self.parent = self.parent.map(|p| p.with_resolved_avatar(config));
        self.classes = self
            .classes
            .into_iter()
            .map(|c| c.with_resolved_assets(config))
            .collect();
        self
    }
}

/// Students returned by `GET /api/student/list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPage {
    pub count: u64,
    pub students: Vec<Student>,
}

impl StudentPage {
    pub(crate) fn from_page(page: Page<Student>, config: &ApiConfig) -> Self {
        Self {
            count: page.count,
            students: page
                .data
                .into_iter()
                .map(|s| s.with_resolved_assets(config))
                .collect(),
        }
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.students.iter().any(|s| s.id.as_ref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn born(date: &str) -> Student {
        Student {
            birth_date: Some(date.to_string()),
            ..Default::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_birthday_boundary() {
        let student = born("2012-03-15");
        assert_eq!(student.age_on(day(2024, 3, 14)), Some(11));
        assert_eq!(student.age_on(day(2024, 3, 15)), Some(12));
        assert_eq!(student.age_on(day(2024, 2, 29)), Some(11));
        assert_eq!(student.age_on(day(2024, 12, 31)), Some(12));
    }

    #[test]
    fn test_age_born_today_and_future() {
        let student = born("2024-06-01");
        assert_eq!(student.age_on(day(2024, 6, 1)), Some(0));
        assert_eq!(student.age_on(day(2024, 5, 31)), None);
    }

    #[test]
    fn test_age_leap_day_birth() {
        let student = born("2016-02-29");
        assert_eq!(student.age_on(day(2023, 2, 28)), Some(6));
        assert_eq!(student.age_on(day(2023, 3, 1)), Some(7));
    }

    #[test]
    fn test_age_uses_local_date() {
        let today = Local::now().date_naive();
        let student = born(&today.format("%Y-%m-%d").to_string());
        assert_eq!(student.age(), Some(0));
        assert_eq!(student.age(), student.age_on(today));
    }

    #[test]
    fn test_age_without_birth_date() {
        assert_eq!(Student::default().age_on(day(2024, 1, 1)), None);
        assert_eq!(born("15/03/2012").age_on(day(2024, 1, 1)), None);
    }

    #[test]
    fn test_timestamp_birth_date() {
        let student = born("2012-03-15T00:00:00");
        assert_eq!(student.birth_date(), Some(day(2012, 3, 15)));
    }

    #[test]
    fn test_from_json_with_nested() {
        let student: Student = serde_json::from_value(json!({
            "id": "s-1",
            "firstName": "Maria",
            "lastName": null,
            "birthDate": "2012-03-15",
            "parent": { "id": 3, "email": "p@example.com" },
            "classes": [{ "id": 9, "name": "3B" }]
        }))
        .unwrap();

        assert_eq!(student.full_name(), "Maria");
        assert_eq!(student.parent.unwrap().email, "p@example.com");
        assert_eq!(student.classes.len(), 1);
        assert_eq!(student.classes[0].name, "3B");
        assert_eq!(student.classes[0].member_count, 0);
    }

    #[test]
    fn test_page_resolves_avatars() {
        let config = ApiConfig::new("https://api.example.com");
        let page = Page {
            count: 1,
            data: vec![Student {
                id: Some(Id::from("s-1")),
                avatar: "/a.png".to_string(),
                ..Default::default()
            }],
        };
        let page = StudentPage::from_page(page, &config);
        assert_eq!(page.students[0].avatar, "https://api.example.com/a.png");
        assert!(page.contains(&Id::from("s-1")));
        assert!(!page.contains(&Id::from("s-2")));
    }
}
