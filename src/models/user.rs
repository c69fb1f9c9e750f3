//! User and Billing Profile Models

use serde::{Deserialize, Serialize};

/// Authenticated user as stored in the session. Role flags come from
/// the backend; route guards and view gating read them from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: u32,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_dealer: bool,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserData {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Billing profile used for official invoices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub economic_id: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub complete_address: Option<String>,
}

impl CustomerInfo {
    /// Persian labels of the fields an official invoice still needs.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let checks: [(&Option<String>, &'static str); 7] = [
            (&self.name, "نام"),
            (&self.phone, "تلفن"),
            (&self.company_name, "نام شرکت"),
            (&self.national_id, "شناسه ملی"),
            (&self.economic_id, "کد اقتصادی"),
            (&self.postal_code, "کد پستی"),
            (&self.complete_address, "آدرس کامل"),
        ];
        for (value, label) in checks {
            if value.as_deref().map(str::trim).unwrap_or("").is_empty() {
                missing.push(label);
            }
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> UserData {
        UserData {
            id: 7,
            email: "karim@example.com".to_string(),
            name: Some("کریم رضایی".to_string()),
            is_staff: false,
            is_dealer: false,
            company_name: None,
            phone: None,
        }
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = make_user();
        assert_eq!(user.display_name(), "کریم رضایی");
        user.name = Some(String::new());
        assert_eq!(user.display_name(), "karim@example.com");
        user.name = None;
        assert_eq!(user.display_name(), "karim@example.com");
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = make_user();
        let json = serde_json::to_string(&user).unwrap();
        let back: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn role_flags_default_false() {
        let user: UserData =
            serde_json::from_str(r#"{"id": 1, "email": "a@b.ir"}"#).unwrap();
        assert!(!user.is_staff);
        assert!(!user.is_dealer);
    }

    #[test]
    fn missing_fields_lists_blank_and_whitespace() {
        let mut info = CustomerInfo::default();
        assert_eq!(info.missing_fields().len(), 7);
        info.name = Some("کریم رضایی".to_string());
        info.national_id = Some("   ".to_string());
        let missing = info.missing_fields();
        assert!(!missing.contains(&"نام"));
        assert!(missing.contains(&"شناسه ملی"));
    }

    #[test]
    fn complete_profile_has_no_missing_fields() {
        let info = CustomerInfo {
            name: Some("کریم رضایی".to_string()),
            phone: Some("02188887777".to_string()),
            company_name: Some("شرکت آریا".to_string()),
            national_id: Some("10101234567".to_string()),
            economic_id: Some("411111111111".to_string()),
            postal_code: Some("1234567890".to_string()),
            complete_address: Some("تهران، خیابان آزادی، پلاک ۱۲".to_string()),
        };
        assert!(info.is_complete());
    }
}
